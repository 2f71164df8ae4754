use leptos::prelude::*;

/// Small pill used for counters, e.g. the cart quantity
#[component]
pub fn Badge(
    /// "primary", "success", "warning", "error" or "neutral" (default)
    #[prop(optional)]
    variant: Option<&'static str>,
    /// Additional CSS classes
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let variant_class = match variant.unwrap_or("neutral") {
        "primary" => "badge--primary",
        "success" => "badge--success",
        "warning" => "badge--warning",
        "error" => "badge--error",
        _ => "badge--neutral",
    };

    view! {
        <span class=format!("badge {} {}", variant_class, class)>
            {children()}
        </span>
    }
}
