//! Integration tests for the QA Playground.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p qa-playground-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `playground_flows` - end-to-end user flows against the domain layer
//! - `http_surface` - the axum router driven in-process, no socket
//!
//! Both use a fresh in-memory or temp-file store per test and a pinned chaos
//! source, so nothing depends on a running server or on luck.

#![cfg_attr(not(test), forbid(unsafe_code))]

use qa_playground_storefront::Playground;
use qa_playground_storefront::chaos::{Chaos, ChaosSource, FixedSource};
use qa_playground_storefront::config::PlaygroundConfig;
use qa_playground_storefront::services::Registration;
use qa_playground_storefront::state::AppState;
use qa_playground_storefront::store::Store;

/// Password used by [`registration`].
pub const PASSWORD: &str = "correct-horse";

/// A playground on an in-memory store whose chaos source never fires.
#[must_use]
pub fn playground() -> Playground {
    playground_with(FixedSource::never_fail())
}

/// A playground on an in-memory store drawing chaos from `source`.
#[must_use]
pub fn playground_with(source: impl ChaosSource + 'static) -> Playground {
    Playground::new(Store::in_memory(), Chaos::new(source))
}

/// Shared HTTP state around [`playground`].
#[must_use]
pub fn app_state() -> AppState {
    AppState::new(PlaygroundConfig::default(), playground())
}

/// A valid registration for `email`.
#[must_use]
pub fn registration(name: &str, email: &str) -> Registration {
    Registration {
        name: name.to_string(),
        email: email.to_string(),
        password: PASSWORD.to_string(),
        age: String::new(),
        accepted_terms: true,
    }
}
