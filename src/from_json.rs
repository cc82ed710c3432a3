//! Deserialization with the target shape inferred from the call site.

use std::io::Read;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ConvertError;

/// Deserialize a native value from JSON text.
///
/// ```
/// use json_ext::from_json;
///
/// #[derive(serde::Deserialize)]
/// struct TheData {
///     name: String,
/// }
///
/// let data: TheData = from_json(r#"{"name": "Toaster"}"#).unwrap();
/// assert_eq!(data.name, "Toaster");
/// ```
pub fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, ConvertError> {
    serde_json::from_str(json).map_err(ConvertError::Deserialize)
}

/// Deserialize a native value from a JSON byte stream.
pub fn from_json_reader<T, R>(reader: R) -> Result<T, ConvertError>
where
    T: DeserializeOwned,
    R: Read,
{
    serde_json::from_reader(reader).map_err(ConvertError::Deserialize)
}

/// Deserialize a native value from an already-parsed JSON tree.
pub fn from_json_value<T: DeserializeOwned>(value: Value) -> Result<T, ConvertError> {
    serde_json::from_value(value).map_err(ConvertError::Deserialize)
}
