//! Safe shape-narrowing for [`Value`].

use serde_json::{Map, Value};

use crate::primitive::Primitive;

/// Type-checked narrowing accessors: each returns `Some` only when the
/// value's runtime tag matches the requested shape, and `None` otherwise.
/// Never panics, never errors.
pub trait ValueExt {
    fn as_object_safe(&self) -> Option<&Map<String, Value>>;
    fn as_object_safe_mut(&mut self) -> Option<&mut Map<String, Value>>;
    fn as_array_safe(&self) -> Option<&Vec<Value>>;
    fn as_array_safe_mut(&mut self) -> Option<&mut Vec<Value>>;
    fn as_primitive_safe(&self) -> Option<Primitive<'_>>;
}

impl ValueExt for Value {
    fn as_object_safe(&self) -> Option<&Map<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    fn as_object_safe_mut(&mut self) -> Option<&mut Map<String, Value>> {
        match self {
            Value::Object(members) => Some(members),
            _ => None,
        }
    }

    fn as_array_safe(&self) -> Option<&Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn as_array_safe_mut(&mut self) -> Option<&mut Vec<Value>> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    fn as_primitive_safe(&self) -> Option<Primitive<'_>> {
        Primitive::from_value(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn object_narrows_only_to_object() {
        let value = json!({"a": 1});
        assert!(value.as_object_safe().is_some());
        assert!(value.as_array_safe().is_none());
        assert!(value.as_primitive_safe().is_none());
    }

    #[test]
    fn array_narrows_only_to_array() {
        let value = json!([1, 2]);
        assert!(value.as_array_safe().is_some());
        assert!(value.as_object_safe().is_none());
        assert!(value.as_primitive_safe().is_none());
    }

    #[test]
    fn primitives_narrow_only_to_primitive() {
        for value in [json!("x"), json!(1), json!(true)] {
            assert!(value.as_primitive_safe().is_some(), "{value:?}");
            assert!(value.as_object_safe().is_none(), "{value:?}");
            assert!(value.as_array_safe().is_none(), "{value:?}");
        }
    }

    #[test]
    fn null_narrows_to_nothing() {
        let value = json!(null);
        assert!(value.as_object_safe().is_none());
        assert!(value.as_array_safe().is_none());
        assert!(value.as_primitive_safe().is_none());
    }

    #[test]
    fn mut_narrowing_allows_in_place_edits() {
        let mut value = json!({"items": []});
        value
            .as_object_safe_mut()
            .unwrap()
            .insert("k".to_string(), json!(1));
        let mut items = json!([1]);
        items.as_array_safe_mut().unwrap().push(json!(2));
        assert_eq!(value, json!({"items": [], "k": 1}));
        assert_eq!(items, json!([1, 2]));
    }
}
