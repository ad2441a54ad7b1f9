//! Core types for the QA Playground.
//!
//! This module provides type-safe wrappers for the storefront's domain concepts.

pub mod category;
pub mod id;
pub mod price;
pub mod product;
pub mod quantity;

pub use category::{Category, CategoryFilter, UnknownCategory};
pub use id::ProductId;
pub use price::{Amount, Price};
pub use product::Product;
pub use quantity::{Quantity, parse_int};
