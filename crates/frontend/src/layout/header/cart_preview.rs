use contracts::shop::cart::CartItem;
use leptos::prelude::*;

use super::HeaderState;
use crate::shared::components::ui::Button;
use crate::shared::config::config;
use crate::shared::format::{format_line, format_price};

#[component]
fn CartPreviewLine(item: CartItem, state: HeaderState) -> impl IntoView {
    let symbol = config().currency_symbol.as_str();
    let id = item.id.clone();

    view! {
        <div class="cart-preview__line">
            <img class="cart-preview__image" src=item.image_url.clone() alt=item.name.clone() />
            <div class="cart-preview__details">
                <h4 class="cart-preview__name">{item.name.clone()}</h4>
                <div class="cart-preview__meta">
                    <span>{format_line(item.quantity, item.price, symbol)}</span>
                    <Button
                        variant="ghost"
                        class="cart-preview__remove"
                        on_click=Callback::new(move |_| state.remove_cart_item(&id))
                    >
                        "Remove"
                    </Button>
                </div>
            </div>
        </div>
    }
}

/// Dropdown listing the cart with its total and the checkout entry point
#[component]
pub fn CartPreview(state: HeaderState) -> impl IntoView {
    let symbol = config().currency_symbol.as_str();

    view! {
        <div class="cart-preview">
            <div class="cart-preview__header">
                <h3>{move || format!("Your Cart ({} items)", state.cart_count())}</h3>
            </div>
            <div class="cart-preview__items">
                {move || {
                    let items = state.cart_items();
                    if items.is_empty() {
                        view! { <div class="cart-preview__empty">"Your cart is empty."</div> }.into_any()
                    } else {
                        items
                            .into_iter()
                            .map(|item| view! { <CartPreviewLine item=item state=state /> })
                            .collect_view()
                            .into_any()
                    }
                }}
            </div>
            <div class="cart-preview__footer">
                <div class="cart-preview__total">
                    <span>"Total:"</span>
                    <span>{move || format_price(state.cart_total(), symbol)}</span>
                </div>
                <Button
                    class="cart-preview__checkout"
                    disabled=Signal::derive(move || !state.checkout_enabled())
                    on_click=Callback::new(move |_| state.initiate_checkout())
                >
                    "Checkout"
                </Button>
            </div>
        </div>
    }
}
