pub mod store;

use std::sync::Arc;

use contracts::shop::cart::CartItem;
use leptos::prelude::*;

pub use store::CartStore;

/// Read/remove surface of the cart as the header sees it.
///
/// Reads are tracked: calling them inside a reactive closure re-runs the
/// closure when the cart changes.
pub trait CartProvider: Send + Sync {
    /// Items in insertion order
    fn items(&self) -> Vec<CartItem>;
    fn total_price(&self) -> f64;
    fn total_count(&self) -> u32;
    fn remove(&self, id: &str);
}

pub type SharedCart = Arc<dyn CartProvider>;

/// Hook to access the cart provider
pub fn use_cart() -> SharedCart {
    use_context::<SharedCart>().expect("Cart provider not found in component tree")
}
