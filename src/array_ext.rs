//! Index-addressed accessors and bulk append for JSON array nodes.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;
use crate::primitive::Primitive;
use crate::serializer::Serializer;
use crate::value_ext::ValueExt;

/// Extensions for `Vec<Value>`: type-checked reads by index and bulk append
/// from native sequences. Out-of-range indexes yield `None`, never a panic.
pub trait ArrayExt {
    /// The element at `index`, or `None` when `index >= len`.
    fn get_safe(&self, index: usize) -> Option<&Value>;

    /// The object at `index`; `None` on out-of-range or tag mismatch.
    fn get_object_safe(&self, index: usize) -> Option<&Map<String, Value>>;

    /// The array at `index`; `None` on out-of-range or tag mismatch.
    fn get_array_safe(&self, index: usize) -> Option<&Vec<Value>>;

    /// The primitive at `index`; `None` on out-of-range, null, or a
    /// non-primitive tag.
    fn get_primitive_safe(&self, index: usize) -> Option<Primitive<'_>>;

    /// Convert each item through `serializer` and append, in order. An item
    /// that converts to null is appended as an explicit null element.
    fn add_all<V, I>(&mut self, items: I, serializer: &Serializer) -> Result<(), ConvertError>
    where
        V: Serialize,
        I: IntoIterator<Item = V>;
}

impl ArrayExt for Vec<Value> {
    fn get_safe(&self, index: usize) -> Option<&Value> {
        self.get(index)
    }

    fn get_object_safe(&self, index: usize) -> Option<&Map<String, Value>> {
        self.get(index).and_then(ValueExt::as_object_safe)
    }

    fn get_array_safe(&self, index: usize) -> Option<&Vec<Value>> {
        self.get(index).and_then(ValueExt::as_array_safe)
    }

    fn get_primitive_safe(&self, index: usize) -> Option<Primitive<'_>> {
        self.get(index).and_then(ValueExt::as_primitive_safe)
    }

    fn add_all<V, I>(&mut self, items: I, serializer: &Serializer) -> Result<(), ConvertError>
    where
        V: Serialize,
        I: IntoIterator<Item = V>,
    {
        for item in items {
            self.push(serializer.to_value(&item)?);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Vec<Value> {
        vec![json!({"x": 1}), json!([true]), json!("leaf"), Value::Null]
    }

    #[test]
    fn get_safe_bounds() {
        let array = sample();
        assert!(array.get_safe(0).is_some());
        assert!(array.get_safe(3).is_some());
        assert!(array.get_safe(4).is_none());
        assert!(Vec::<Value>::new().get_safe(0).is_none());
    }

    #[test]
    fn shaped_getters_check_index_and_tag() {
        let array = sample();
        assert!(array.get_object_safe(0).is_some());
        assert!(array.get_object_safe(1).is_none());
        assert_eq!(array.get_array_safe(1), Some(&vec![json!(true)]));
        assert_eq!(
            array.get_primitive_safe(2).and_then(Primitive::as_str),
            Some("leaf")
        );
        assert!(array.get_primitive_safe(3).is_none()); // null is not a primitive
        assert!(array.get_primitive_safe(9).is_none());
    }

    #[test]
    fn add_all_appends_in_order() {
        let serializer = Serializer::new();
        let mut array = vec![json!("seed")];
        array.add_all(vec![1, 2, 3], &serializer).unwrap();
        assert_eq!(array, vec![json!("seed"), json!(1), json!(2), json!(3)]);
    }

    #[test]
    fn add_all_keeps_explicit_nulls() {
        let serializer = Serializer::new();
        let mut array = Vec::new();
        array
            .add_all(vec![Some(1), None, Some(3)], &serializer)
            .unwrap();
        assert_eq!(array, vec![json!(1), Value::Null, json!(3)]);
    }
}
