use leptos::prelude::*;

/// Runs the click handler unless the button is disabled. Returns whether it ran.
fn dispatch_click<E: 'static>(disabled: bool, handler: Option<Callback<E>>, ev: E) -> bool {
    match handler {
        Some(handler) if !disabled => {
            handler.run(ev);
            true
        }
        _ => false,
    }
}

/// Button component with "primary" (default) and "ghost" variants
#[component]
pub fn Button(
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    /// Button type attribute
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Disabled state (reactive)
    #[prop(optional, into)]
    disabled: Signal<bool>,
    /// Click event handler, not fired while disabled
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant {
        Some("ghost") => "button--ghost",
        _ => "button--primary",
    };

    view! {
        <button
            type=button_type.unwrap_or("button")
            class=format!("button {} {}", variant_class, class)
            class:is-disabled=move || disabled.get()
            disabled=move || disabled.get()
            on:click=move |ev| {
                dispatch_click(disabled.get_untracked(), on_click, ev);
            }
        >
            {children()}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    use super::*;

    fn counting_handler() -> (Callback<()>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let handler = Callback::new(move |_: ()| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (handler, calls)
    }

    #[test]
    fn test_disabled_button_swallows_click() {
        let (handler, calls) = counting_handler();
        assert!(!dispatch_click(true, Some(handler), ()));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_enabled_button_runs_handler() {
        let (handler, calls) = counting_handler();
        assert!(dispatch_click(false, Some(handler), ()));
        assert!(dispatch_click(false, Some(handler), ()));
        assert_eq!(calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_click_without_handler_is_noop() {
        assert!(!dispatch_click::<()>(false, None, ()));
    }
}
