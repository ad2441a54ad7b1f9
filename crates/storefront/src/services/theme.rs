//! Light/dark theme preference.
//!
//! Stored raw (not JSON) under its own key, independent of every other
//! record. Anything other than `light` reads as dark.

use std::fmt;

use crate::store::{Store, StoreError, keys};

/// Page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    /// Stored value and CSS class.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The other theme.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Read the saved preference.
    #[must_use]
    pub fn load(store: &Store) -> Self {
        match store.read_raw(keys::THEME).as_deref() {
            Some("light") => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Save this theme as the preference.
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the write fails.
    pub fn save(self, store: &mut Store) -> Result<(), StoreError> {
        store.write_raw(keys::THEME, self.as_str())
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
