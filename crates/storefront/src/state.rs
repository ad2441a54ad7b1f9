//! Application state shared across handlers.

use std::sync::{Arc, Mutex, MutexGuard};

use crate::app::Playground;
use crate::config::PlaygroundConfig;
use crate::error::AppError;

/// Application state shared across all handlers.
///
/// Cheaply cloneable via `Arc`. The playground sits behind one mutex so each
/// request runs to completion before the next touches it.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: PlaygroundConfig,
    playground: Mutex<Playground>,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: PlaygroundConfig, playground: Playground) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                playground: Mutex::new(playground),
            }),
        }
    }

    /// Get a reference to the playground configuration.
    #[must_use]
    pub fn config(&self) -> &PlaygroundConfig {
        &self.inner.config
    }

    /// Lock the playground for one UI event.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Internal` if a previous holder panicked.
    pub fn playground(&self) -> Result<MutexGuard<'_, Playground>, AppError> {
        self.inner
            .playground
            .lock()
            .map_err(|_| AppError::Internal("playground lock poisoned".to_string()))
    }
}
