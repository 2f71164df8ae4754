use contracts::shop::cart::{cart_count, cart_total, CartItem};
use leptos::prelude::*;

use super::CartProvider;

/// In-memory cart kept in a signal for the lifetime of the page
#[derive(Clone, Copy)]
pub struct CartStore {
    items: RwSignal<Vec<CartItem>>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::with_items(vec![])
    }

    pub fn with_items(items: Vec<CartItem>) -> Self {
        Self {
            items: RwSignal::new(items),
        }
    }

    /// Adds a line, or bumps the quantity when the same id is already present
    pub fn add(&self, item: CartItem) {
        if item.quantity == 0 {
            log::warn!("Ignoring cart add with zero quantity for '{}'", item.id);
            return;
        }
        self.items.update(|items| {
            match items.iter_mut().find(|existing| existing.id == item.id) {
                Some(existing) => existing.quantity += item.quantity,
                None => items.push(item),
            }
        });
    }

    pub fn clear(&self) {
        self.items.set(vec![]);
    }

    pub fn is_empty(&self) -> bool {
        self.items.with(|items| items.is_empty())
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CartProvider for CartStore {
    fn items(&self) -> Vec<CartItem> {
        self.items.get()
    }

    fn total_price(&self) -> f64 {
        self.items.with(|items| cart_total(items))
    }

    fn total_count(&self) -> u32 {
        self.items.with(|items| cart_count(items))
    }

    fn remove(&self, id: &str) {
        self.items.update(|items| items.retain(|item| item.id != id));
    }
}
