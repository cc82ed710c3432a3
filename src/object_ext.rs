//! Key-addressed accessors and setters for JSON object nodes.

use std::fmt::Display;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::leaf::IntoLeaf;
use crate::primitive::Primitive;
use crate::serializer::Serializer;
use crate::value_ext::ValueExt;

/// Extensions for [`Map<String, Value>`]: type-checked reads by key, leaf
/// writes, and bulk insertion from native mappings.
pub trait ObjectExt {
    /// The value under `key`, or `None` when the key is absent.
    fn get_safe(&self, key: &str) -> Option<&Value>;

    /// The object under `key`; `None` when the key is absent or the value
    /// is not an object.
    fn get_object_safe(&self, key: &str) -> Option<&Map<String, Value>>;

    /// The array under `key`; `None` when the key is absent or the value
    /// is not an array.
    fn get_array_safe(&self, key: &str) -> Option<&Vec<Value>>;

    /// The primitive under `key`; `None` when the key is absent or the
    /// value is not a primitive (null included).
    fn get_primitive_safe(&self, key: &str) -> Option<Primitive<'_>>;

    /// Store a leaf or prebuilt value under `key`. An existing key is
    /// overwritten in place and keeps its position; a new key appends.
    fn set(&mut self, key: impl Into<String>, value: impl IntoLeaf);

    /// Convert and insert every `(key, value)` pair: keys through their
    /// `Display` form, values through `serializer`. Stringified-key
    /// collisions are last-write-wins in iteration order, and a value that
    /// converts to null is stored as an explicit null entry.
    fn put_all<K, V, I>(&mut self, entries: I, serializer: &Serializer) -> Result<(), ConvertError>
    where
        K: Display,
        V: Serialize,
        I: IntoIterator<Item = (K, V)>;
}

impl ObjectExt for Map<String, Value> {
    fn get_safe(&self, key: &str) -> Option<&Value> {
        self.get(key)
    }

    fn get_object_safe(&self, key: &str) -> Option<&Map<String, Value>> {
        self.get(key).and_then(ValueExt::as_object_safe)
    }

    fn get_array_safe(&self, key: &str) -> Option<&Vec<Value>> {
        self.get(key).and_then(ValueExt::as_array_safe)
    }

    fn get_primitive_safe(&self, key: &str) -> Option<Primitive<'_>> {
        self.get(key).and_then(ValueExt::as_primitive_safe)
    }

    fn set(&mut self, key: impl Into<String>, value: impl IntoLeaf) {
        self.insert(key.into(), value.into_leaf());
    }

    fn put_all<K, V, I>(&mut self, entries: I, serializer: &Serializer) -> Result<(), ConvertError>
    where
        K: Display,
        V: Serialize,
        I: IntoIterator<Item = (K, V)>,
    {
        for (key, value) in entries {
            let converted = serializer.to_value(&value)?;
            self.insert(key.to_string(), converted);
        }
        Ok(())
    }
}
