use contracts::shop::cart::CartItem;
use leptos::prelude::*;

use crate::shared::components::ui::Button;
use crate::shared::config::{config, FeaturedProduct};
use crate::shared::format::format_price;
use crate::shop::cart::CartStore;

fn to_cart_item(product: &FeaturedProduct) -> CartItem {
    CartItem {
        id: product.id.clone(),
        name: product.name.clone(),
        image_url: product.image_url.clone(),
        price: product.price,
        quantity: 1,
    }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let cart = use_context::<CartStore>().expect("CartStore not found in component tree");
    let symbol = config().currency_symbol.as_str();

    view! {
        <section class="home">
            <h1 class="home__title">"Featured"</h1>
            <div class="home__grid">
                {config()
                    .featured
                    .iter()
                    .map(|product| {
                        let item = to_cart_item(product);
                        view! {
                            <article class="product-card">
                                <img class="product-card__image" src=product.image_url.clone() alt=product.name.clone() />
                                <h2 class="product-card__name">{product.name.clone()}</h2>
                                <p class="product-card__price">{format_price(product.price, symbol)}</p>
                                <Button on_click=Callback::new(move |_| cart.add(item.clone()))>
                                    "Add to cart"
                                </Button>
                            </article>
                        }
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_featured_product_becomes_single_unit_line() {
        let product = &config().featured[0];
        let item = to_cart_item(product);
        assert_eq!(item.id, product.id);
        assert_eq!(item.quantity, 1);
        assert_eq!(item.price, product.price);
    }
}
