use serde::{Deserialize, Serialize};

/// A single line in the shopper's cart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: String,
    pub name: String,
    pub image_url: String,
    /// Unit price, never negative
    pub price: f64,
    /// Always at least 1
    pub quantity: u32,
}

impl CartItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

/// Number of units across all lines (not the number of lines)
pub fn cart_count(items: &[CartItem]) -> u32 {
    items.iter().map(|item| item.quantity).sum()
}

/// Sum of price × quantity across all lines
pub fn cart_total(items: &[CartItem]) -> f64 {
    items.iter().map(CartItem::line_total).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, quantity: u32) -> CartItem {
        CartItem {
            id: id.to_string(),
            name: format!("Item {}", id),
            image_url: format!("/img/{}.jpg", id),
            price,
            quantity,
        }
    }

    #[test]
    fn test_cart_count_sums_quantities() {
        let items = vec![item("1", 5.0, 2), item("2", 1.5, 3)];
        assert_eq!(cart_count(&items), 5);
        assert_eq!(cart_count(&[]), 0);
    }

    #[test]
    fn test_cart_total() {
        let items = vec![item("1", 5.0, 2), item("2", 1.5, 3)];
        assert!((cart_total(&items) - 14.5).abs() < 1e-9);
        assert_eq!(cart_total(&[]), 0.0);
    }

    #[test]
    fn test_line_total() {
        assert!((item("1", 10.005, 2).line_total() - 20.01).abs() < 1e-9);
    }
}
