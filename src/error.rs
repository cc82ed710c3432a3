//! Error type for conversion and deserialization entry points.

use thiserror::Error;

/// Failure while moving between native values and JSON trees.
///
/// Shape mismatches in the safe accessors are not errors; they surface as
/// `None`. Only the conversion boundary can fail.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A native value could not be serialized into a JSON tree.
    #[error("serialization failed: {0}")]
    Serialize(#[source] serde_json::Error),
    /// JSON input was malformed or did not match the requested shape.
    #[error("deserialization failed: {0}")]
    Deserialize(#[source] serde_json::Error),
}
