pub mod header;

use leptos::prelude::*;

use header::Header;

/// Page chrome: sticky storefront header above the routed content
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <Header />
            <main class="app-main">
                {children()}
            </main>
        </div>
    }
}
