//! Extension pack manifests.
//!
//! A manifest is a JSON array of objects; each object names one extension
//! pack through its `OneBoardName` key.

use crate::error::ParseError;
use serde_json::Value;

pub const NAME_KEY: &str = "OneBoardName";

/// Name used for entries without a usable `OneBoardName`.
pub const UNKNOWN_NAME: &str = "Unknown";

/// Returns the extension pack names listed in `bytes`, in manifest order.
///
/// Entries whose `OneBoardName` is absent or not a string are listed as
/// [`UNKNOWN_NAME`].
pub fn extension_names(bytes: &[u8]) -> Result<Vec<String>, ParseError> {
    let value: Value = serde_json::from_slice(bytes).map_err(ParseError::InvalidJson)?;
    let entries = value.as_array().ok_or(ParseError::NotAnArray)?;

    entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            let object = entry.as_object().ok_or(ParseError::NotAnObject { index })?;
            let name = object
                .get(NAME_KEY)
                .and_then(Value::as_str)
                .unwrap_or(UNKNOWN_NAME);
            Ok(name.to_string())
        })
        .collect()
}
