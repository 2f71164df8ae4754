use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::layout::Shell;
use crate::pages::home::HomePage;
use crate::shop::cart::{CartStore, SharedCart};
use crate::system::auth::{AuthStore, SharedAuth};

#[component]
pub fn App() -> impl IntoView {
    let cart = CartStore::new();
    let auth = AuthStore::new();

    // Concrete stores for the modals and pages, trait handles for the header.
    provide_context(cart);
    provide_context(auth);
    provide_context::<SharedCart>(Arc::new(cart));
    provide_context::<SharedAuth>(Arc::new(auth));

    spawn_local(async move { auth.restore().await });

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=HomePage />
                </Routes>
            </Shell>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/">"Back to the shop"</a>
        </div>
    }
}
