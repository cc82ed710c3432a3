//! Construction helpers and extension-style container conversions.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Display;

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::array_ext::ArrayExt;
use crate::error::ConvertError;
use crate::object_ext::ObjectExt;
use crate::serializer::Serializer;

/// Build a JSON array from a native sequence, converting every element
/// through `serializer` in order. Empty input yields an empty array without
/// touching the serializer.
///
/// ```
/// use json_ext::{create_json_array, Serializer};
/// use serde_json::json;
///
/// let serializer = Serializer::new();
/// let array = create_json_array(vec![1, 2, 3], &serializer).unwrap();
/// assert_eq!(array, vec![json!(1), json!(2), json!(3)]);
/// ```
pub fn create_json_array<I>(items: I, serializer: &Serializer) -> Result<Vec<Value>, ConvertError>
where
    I: IntoIterator,
    I::Item: Serialize,
{
    let mut array = Vec::new();
    array.add_all(items, serializer)?;
    Ok(array)
}

/// Build a JSON object from native `(key, value)` pairs: keys through their
/// `Display` form, values through `serializer`. Empty input yields an empty
/// object without touching the serializer.
pub fn create_json_object<K, V, I>(
    entries: I,
    serializer: &Serializer,
) -> Result<Map<String, Value>, ConvertError>
where
    K: Display,
    V: Serialize,
    I: IntoIterator<Item = (K, V)>,
{
    let mut object = Map::new();
    object.put_all(entries, serializer)?;
    Ok(object)
}

/// Extension-style conversion of a native sequence into a JSON array.
pub trait ToJsonArray {
    fn to_json_array(&self, serializer: &Serializer) -> Result<Vec<Value>, ConvertError>;
}

impl<T: Serialize> ToJsonArray for [T] {
    fn to_json_array(&self, serializer: &Serializer) -> Result<Vec<Value>, ConvertError> {
        create_json_array(self, serializer)
    }
}

/// Extension-style conversion of a native mapping into a JSON object.
pub trait ToJsonObject {
    fn to_json_object(&self, serializer: &Serializer) -> Result<Map<String, Value>, ConvertError>;
}

impl<K: Display, V: Serialize> ToJsonObject for [(K, V)] {
    fn to_json_object(&self, serializer: &Serializer) -> Result<Map<String, Value>, ConvertError> {
        create_json_object(self.iter().map(|(key, value)| (key, value)), serializer)
    }
}

impl<K: Display, V: Serialize, S> ToJsonObject for HashMap<K, V, S> {
    fn to_json_object(&self, serializer: &Serializer) -> Result<Map<String, Value>, ConvertError> {
        create_json_object(self.iter(), serializer)
    }
}

impl<K: Display, V: Serialize> ToJsonObject for BTreeMap<K, V> {
    fn to_json_object(&self, serializer: &Serializer) -> Result<Map<String, Value>, ConvertError> {
        create_json_object(self.iter(), serializer)
    }
}

impl<K: Display, V: Serialize, S> ToJsonObject for IndexMap<K, V, S> {
    fn to_json_object(&self, serializer: &Serializer) -> Result<Map<String, Value>, ConvertError> {
        create_json_object(self.iter(), serializer)
    }
}
