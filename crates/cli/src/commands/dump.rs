//! Print the store as one JSON object.
//!
//! JSON values are embedded as-is; raw values (the theme, or anything
//! malformed) are embedded as strings.

use std::io::Write;

use serde_json::{Map, Value};

use qa_playground_storefront::store::Store;

/// Write every stored entry to `out` as pretty JSON.
///
/// # Errors
///
/// Returns an error if the store cannot be read or `out` cannot be written.
pub fn run(store: &Store, out: &mut impl Write) -> Result<(), Box<dyn std::error::Error>> {
    let mut object = Map::new();
    for (key, raw) in store.entries()? {
        let value = serde_json::from_str(&raw).unwrap_or(Value::String(raw));
        object.insert(key, value);
    }

    serde_json::to_writer_pretty(&mut *out, &Value::Object(object))?;
    writeln!(out)?;
    Ok(())
}
