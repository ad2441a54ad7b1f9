//! Product identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A catalog product id such as `p1`.
///
/// Ids compare exactly: `p1` and `P1` are different products. Serialized as a
/// plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Create an id from any string-like value.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ProductId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ProductId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_id_serializes_as_plain_string() {
        let id = ProductId::new("p1");
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"p1\"");

        let parsed: ProductId = serde_json::from_str("\"p6\"").unwrap();
        assert_eq!(parsed.as_str(), "p6");
    }

    #[test]
    fn test_product_id_comparison_is_exact() {
        assert_eq!(ProductId::from("p1"), ProductId::new(String::from("p1")));
        assert_ne!(ProductId::from("p1"), ProductId::from("P1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(ProductId::from("p3").to_string(), "p3");
    }
}
