//! Persistent key-value store.
//!
//! Models browser local storage: string keys map to JSON-encoded string
//! values. Reads are lazy and forgiving: a missing, unreadable, or malformed
//! entry yields the caller's fallback. Writes go straight to the backend and
//! report failures as [`StoreError`].
//!
//! # Keys
//!
//! - `qa_users` - registered users (default `[]`)
//! - `qa_session` - the logged-in user summary (default `{"user": null}`)
//! - `qa_cart` - cart lines (default `[]`)
//! - `qa_theme` - `light` or `dark`, stored raw rather than as JSON

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::models::{CartLine, Session, User};

/// Storage keys.
pub mod keys {
    /// Registered users.
    pub const USERS: &str = "qa_users";
    /// Current session.
    pub const SESSION: &str = "qa_session";
    /// Cart lines.
    pub const CART: &str = "qa_cart";
    /// Theme preference.
    pub const THEME: &str = "qa_theme";
}

/// Errors raised by store backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("storage I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A value could not be serialized.
    #[error("failed to encode value for key {key}: {source}")]
    Encode {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    /// The backend refused the write because it is full.
    #[error("storage quota exceeded writing key {key}")]
    QuotaExceeded { key: String },
}

/// A string key-value backend with local-storage semantics.
pub trait KeyValueStore: Send {
    /// Get the raw value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    fn remove_item(&mut self, key: &str) -> Result<(), StoreError>;

    /// List every stored key in ascending order.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    fn keys(&self) -> Result<Vec<String>, StoreError>;
}

/// Typed JSON access over a [`KeyValueStore`] backend.
pub struct Store {
    backend: Box<dyn KeyValueStore>,
}

impl Store {
    /// Wrap a backend.
    #[must_use]
    pub fn new(backend: impl KeyValueStore + 'static) -> Self {
        Self {
            backend: Box::new(backend),
        }
    }

    /// A store that lives only as long as the process.
    #[must_use]
    pub fn in_memory() -> Self {
        Self::new(MemoryStore::new())
    }

    /// Read and decode `key`, or return `fallback` if it is absent, empty,
    /// unreadable, or not valid JSON for `T`.
    pub fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let raw = match self.backend.get_item(key) {
            Ok(Some(raw)) if !raw.is_empty() => raw,
            Ok(_) => return fallback,
            Err(e) => {
                tracing::debug!(key, error = %e, "store read failed, using default");
                return fallback;
            }
        };

        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(e) => {
                tracing::debug!(key, error = %e, "malformed store entry, using default");
                fallback
            }
        }
    }

    /// Encode `value` and store it under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if encoding fails or the backend rejects the write.
    pub fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode {
            key: key.to_string(),
            source,
        })?;
        self.backend.set_item(key, &raw)
    }

    /// Read the raw string under `key`, treating read failures as absence.
    #[must_use]
    pub fn read_raw(&self, key: &str) -> Option<String> {
        self.backend.get_item(key).ok().flatten()
    }

    /// Store a raw string under `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    pub fn write_raw(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.backend.set_item(key, value)
    }

    /// Remove `key`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend rejects the write.
    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.backend.remove_item(key)
    }

    /// Every stored key with its raw value.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the backend cannot be read.
    pub fn entries(&self) -> Result<Vec<(String, String)>, StoreError> {
        let mut entries = Vec::new();
        for key in self.backend.keys()? {
            if let Some(value) = self.backend.get_item(&key)? {
                entries.push((key, value));
            }
        }
        Ok(entries)
    }

    // =========================================================================
    // Typed records
    // =========================================================================

    /// Registered users.
    #[must_use]
    pub fn users(&self) -> Vec<User> {
        self.read(keys::USERS, Vec::new())
    }

    /// Replace the registered users.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn set_users(&mut self, users: &[User]) -> Result<(), StoreError> {
        self.write(keys::USERS, users)
    }

    /// Current session.
    #[must_use]
    pub fn session(&self) -> Session {
        self.read(keys::SESSION, Session::default())
    }

    /// Replace the current session.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn set_session(&mut self, session: &Session) -> Result<(), StoreError> {
        self.write(keys::SESSION, session)
    }

    /// Cart lines.
    #[must_use]
    pub fn cart(&self) -> Vec<CartLine> {
        self.read(keys::CART, Vec::new())
    }

    /// Replace the cart lines.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn set_cart(&mut self, cart: &[CartLine]) -> Result<(), StoreError> {
        self.write(keys::CART, cart)
    }
}

impl std::fmt::Debug for Store {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
