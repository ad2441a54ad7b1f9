//! Product categories and the catalog's category filter.

use core::fmt;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown category name.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

/// A product category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Games,
    Edu,
    Gadgets,
}

impl Category {
    /// Every category, in catalog order.
    pub const ALL: [Self; 3] = [Self::Games, Self::Edu, Self::Gadgets];

    /// The category's wire name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Games => "games",
            Self::Edu => "edu",
            Self::Gadgets => "gadgets",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "games" => Ok(Self::Games),
            "edu" => Ok(Self::Edu),
            "gadgets" => Ok(Self::Gadgets),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// The catalog's category selector.
///
/// Matching is exact: `"Games"` is not `"games"`. A name that is neither
/// `all` nor a known category selects nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every product.
    #[default]
    All,
    /// Products in one category.
    Only(Category),
    /// A category name no product carries.
    Unmatched(String),
}

impl CategoryFilter {
    /// Parse a selector value. Never fails.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        if value == "all" {
            return Self::All;
        }
        value
            .parse::<Category>()
            .map_or_else(|err| Self::Unmatched(err.0), Self::Only)
    }

    /// Returns true if a product in `category` passes the filter.
    #[must_use]
    pub fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => *wanted == category,
            Self::Unmatched(_) => false,
        }
    }

    /// The selector value this filter was parsed from.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::All => "all",
            Self::Only(category) => category.as_str(),
            Self::Unmatched(raw) => raw,
        }
    }
}
