//! QA Playground Core - Shared types library.
//!
//! This crate provides the value types used across all QA Playground components:
//! - `storefront` - The demo storefront (domain services plus the HTTP binding layer)
//! - `cli` - Command-line tools for seeding and inspecting the local store
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage, no HTTP. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Product IDs, prices, amounts, quantities, and categories

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
