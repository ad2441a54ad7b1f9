//! Remove stored keys.

use qa_playground_storefront::store::{Store, StoreError};

/// Remove `keys`, or every stored key when `keys` is empty. Returns how many
/// keys were named or found.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read or written.
pub fn run(store: &mut Store, keys: &[String]) -> Result<usize, StoreError> {
    let targets = if keys.is_empty() {
        store.entries()?.into_iter().map(|(key, _)| key).collect()
    } else {
        keys.to_vec()
    };

    for key in &targets {
        store.remove(key)?;
        tracing::debug!(key, "Removed");
    }
    Ok(targets.len())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use qa_playground_storefront::store::{FileStore, keys};

    use super::*;

    #[test]
    fn test_reset_everything() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = Store::new(FileStore::new(dir.path().join("store.json")));
        store.write_raw(keys::THEME, "light").unwrap();
        store.set_cart(&[]).unwrap();

        assert_eq!(run(&mut store, &[]).unwrap(), 2);
        assert!(store.entries().unwrap().is_empty());
    }

    #[test]
    fn test_reset_named_keys() {
        let mut store = Store::in_memory();
        store.write_raw(keys::THEME, "light").unwrap();
        store.set_cart(&[]).unwrap();

        run(&mut store, &[keys::CART.to_string()]).unwrap();
        assert_eq!(store.read_raw(keys::CART), None);
        assert_eq!(store.read_raw(keys::THEME).as_deref(), Some("light"));
    }
}
