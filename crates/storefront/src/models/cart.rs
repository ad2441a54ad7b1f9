//! Cart line items.

use serde::{Deserialize, Serialize};

use qa_playground_core::{Amount, Price, Product, ProductId, Quantity};

/// One product's aggregated entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: ProductId,
    pub name: String,
    pub price: Price,
    pub qty: Quantity,
}

impl CartLine {
    /// A new line for `product`.
    #[must_use]
    pub fn new(product: &Product, qty: Quantity) -> Self {
        Self {
            id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            qty,
        }
    }

    /// Price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Amount {
        self.price.times(self.qty)
    }
}

/// Number shown on the cart badge: the sum of stored quantities, counting
/// lines whose quantity is not a number as zero. Zero and negative
/// quantities are summed as stored.
#[must_use]
pub fn badge_count(lines: &[CartLine]) -> i64 {
    lines
        .iter()
        .map(|line| line.qty.badge_units())
        .fold(0, i64::saturating_add)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use qa_playground_core::Category;

    use super::*;

    fn line(qty: Quantity) -> CartLine {
        CartLine::new(
            &Product::new("p1", "Space Battle", Category::Games, 399),
            qty,
        )
    }

    #[test]
    fn test_badge_counts_stored_quantities() {
        let lines = vec![
            line(Quantity::new(3)),
            line(Quantity::new(-1)),
            line(Quantity::NOT_A_NUMBER),
        ];
        assert_eq!(badge_count(&lines), 2);
        assert_eq!(badge_count(&[]), 0);
    }

    #[test]
    fn test_line_total() {
        assert_eq!(line(Quantity::new(2)).line_total(), Amount::Value(798));
        assert!(line(Quantity::NOT_A_NUMBER).line_total().is_nan());
    }

    #[test]
    fn test_persisted_shape() {
        let json = serde_json::to_string(&line(Quantity::NOT_A_NUMBER)).unwrap();
        assert_eq!(
            json,
            r#"{"id":"p1","name":"Space Battle","price":399,"qty":null}"#
        );
        let back: CartLine = serde_json::from_str(&json).unwrap();
        assert!(back.qty.is_nan());
    }
}
