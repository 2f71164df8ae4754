use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::config::config;
use crate::shared::format::{format_line, format_price};
use crate::shared::modal::Modal;
use crate::shop::cart::{CartProvider, CartStore};

/// Order review dialog shown to signed-in shoppers.
///
/// Payment is handled by the order service; confirming here hands the cart over
/// and empties it.
#[component]
pub fn CheckoutModal(#[prop(into)] is_open: Signal<bool>, on_close: Callback<()>) -> impl IntoView {
    let cart = use_context::<CartStore>().expect("CartStore not found in component tree");
    let symbol = config().currency_symbol.as_str();
    let (placed, set_placed) = signal(false);

    let close = Callback::new(move |_| {
        set_placed.set(false);
        on_close.run(());
    });

    let place_order = Callback::new(move |_| {
        log::info!(
            "Order placed: {} items, total {}",
            cart.total_count(),
            format_price(cart.total_price(), symbol)
        );
        cart.clear();
        set_placed.set(true);
    });

    view! {
        <Show when=move || is_open.get()>
            <Modal title="Checkout" on_close=close>
                <Show
                    when=move || !placed.get()
                    fallback=move || view! {
                        <div class="checkout__done">
                            <p>"Thank you! Your order has been placed."</p>
                            <Button on_click=Callback::new(move |_| close.run(()))>"Continue shopping"</Button>
                        </div>
                    }
                >
                    <ul class="checkout__lines">
                        {move || cart.items().into_iter().map(|item| view! {
                            <li class="checkout__line">
                                <span>{item.name.clone()}</span>
                                <span>{format_line(item.quantity, item.price, symbol)}</span>
                            </li>
                        }).collect_view()}
                    </ul>
                    <div class="checkout__total">
                        <span>"Total:"</span>
                        <span>{move || format_price(cart.total_price(), symbol)}</span>
                    </div>
                    <Button
                        class="checkout__place"
                        disabled=Signal::derive(move || cart.is_empty())
                        on_click=place_order
                    >
                        "Place order"
                    </Button>
                </Show>
            </Modal>
        </Show>
    }
}
