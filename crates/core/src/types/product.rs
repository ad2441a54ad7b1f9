//! Catalog products.

use serde::{Deserialize, Serialize};

use super::{Category, Price, ProductId};

/// A product in the static catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub category: Category,
    pub price: Price,
}

impl Product {
    /// Create a new product.
    #[must_use]
    pub fn new(id: &str, name: &str, category: Category, price: i64) -> Self {
        Self {
            id: ProductId::from(id),
            name: name.to_string(),
            category,
            price: Price::new(price),
        }
    }
}
