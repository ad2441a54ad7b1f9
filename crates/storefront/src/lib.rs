//! QA Playground Storefront library.
//!
//! An intentionally imperfect demo shop used as a target for manual and
//! automated UI tests. The domain layer (store, chaos injector, services,
//! navigation) has no view-framework dependency; the HTTP layer in
//! [`routes`] binds it to server-rendered pages.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod app;
pub mod chaos;
pub mod config;
pub mod error;
pub mod events;
pub mod models;
pub mod navigation;
pub mod routes;
pub mod services;
pub mod state;
pub mod store;
pub mod views;

pub use app::{DomainState, Playground};
pub use state::AppState;
