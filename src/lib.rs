//! Ergonomic extensions for JSON trees built on [`serde_json`].
//!
//! Everything here operates on `serde_json`'s own types — there is no
//! parallel tree model. The crate adds:
//!
//! - safe shape-narrowing accessors that return `None` on mismatch instead
//!   of panicking ([`ValueExt`], [`ObjectExt`], [`ArrayExt`]),
//! - leaf setters accepting plain native values ([`ObjectExt::set`]),
//! - bulk conversion of native containers through a configurable
//!   [`Serializer`] ([`create_json_array`], [`create_json_object`],
//!   [`ToJsonArray`], [`ToJsonObject`]),
//! - deserialization with the target shape inferred from the call site
//!   ([`from_json`], [`from_json_reader`], [`from_json_value`]).
//!
//! ```
//! use json_ext::{ObjectExt, Serializer};
//! use serde_json::Map;
//!
//! let mut doc = Map::new();
//! doc.set("name", "Toaster");
//! doc.set("count", 3);
//! assert_eq!(
//!     doc.get_primitive_safe("name").and_then(|p| p.as_str()),
//!     Some("Toaster")
//! );
//! assert!(doc.get_safe("missing").is_none());
//! ```
//!
//! The `preserve_order` feature of `serde_json` is enabled, so objects keep
//! insertion order and overwriting a key keeps its position.

mod array_ext;
mod convert;
mod error;
mod from_json;
mod leaf;
mod object_ext;
mod primitive;
mod serializer;
mod value_ext;

pub use array_ext::ArrayExt;
pub use convert::{create_json_array, create_json_object, ToJsonArray, ToJsonObject};
pub use error::ConvertError;
pub use from_json::{from_json, from_json_reader, from_json_value};
pub use leaf::IntoLeaf;
pub use object_ext::ObjectExt;
pub use primitive::Primitive;
pub use serializer::{Serializer, SerializerBuilder};
pub use value_ext::ValueExt;
