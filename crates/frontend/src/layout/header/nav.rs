use leptos::prelude::*;
use leptos_router::components::A;

use crate::shared::config::config;

/// Configured navigation links, rendered in order
#[component]
pub fn NavLinks(class: &'static str, link_class: &'static str) -> impl IntoView {
    view! {
        <nav class=class>
            {config()
                .nav
                .iter()
                .map(|link| {
                    view! {
                        <A href=link.target.clone() attr:class=link_class>
                            {link.label.clone()}
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}
