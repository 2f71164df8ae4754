use leptos::prelude::*;
use leptos_router::components::A;

use super::cart_preview::CartPreview;
use super::nav::NavLinks;
use super::user_menu::UserMenu;
use super::HeaderState;
use crate::shared::components::ui::Badge;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shop::cart::use_cart;
use crate::shop::checkout::CheckoutModal;
use crate::system::auth::{use_auth, AuthModal};

#[component]
pub fn Header() -> impl IntoView {
    let state = HeaderState::new(use_cart(), use_auth());

    view! {
        <header data-zone="header" class="header header--storefront">
            <div class="header__content">
                <A href="/" attr:class="header__brand">{config().brand.clone()}</A>
                <NavLinks class="header__nav" link_class="header__nav-link" />
            </div>

            <div class="header__actions">
                <button class="button button--ghost" aria-label="Search">{icon("search")}</button>

                <button
                    class="button button--ghost header__cart"
                    aria-label="Cart"
                    on:click=move |_| state.toggle_cart_preview()
                >
                    {icon("shopping-cart")}
                    <Show when=move || { state.cart_count() > 0 }>
                        <Badge variant="primary" class="header__cart-count">
                            {move || state.cart_count()}
                        </Badge>
                    </Show>
                </button>

                <UserMenu state=state />

                <button
                    class="button button--ghost header__mobile-toggle"
                    aria-label="Toggle menu"
                    on:click=move |_| state.toggle_mobile_menu()
                >
                    {move || if state.mobile_menu_open.get() { icon("x") } else { icon("menu") }}
                </button>
            </div>

            <Show when=move || state.mobile_menu_open.get()>
                <NavLinks class="header__mobile-nav" link_class="header__mobile-link" />
            </Show>

            <Show when=move || state.cart_preview_open.get()>
                <CartPreview state=state />
            </Show>
        </header>

        <AuthModal
            is_open=state.auth_modal_open
            on_close=Callback::new(move |_| state.close_auth_modal())
            on_success=Callback::new(move |_| state.on_auth_success())
        />
        <CheckoutModal
            is_open=state.checkout_modal_open
            on_close=Callback::new(move |_| state.close_checkout_modal())
        />
    }
}
