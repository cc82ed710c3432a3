//! Borrowed narrowing view over primitive JSON leaves.

use serde_json::{Number, Value};

/// A primitive (string, number, or boolean) JSON leaf, borrowed from its tree.
///
/// Null is not a primitive: narrowing a null value yields `None`, which keeps
/// "explicit null" and "present primitive" distinguishable at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Primitive<'a> {
    String(&'a str),
    Number(&'a Number),
    Bool(bool),
}

impl<'a> Primitive<'a> {
    /// Narrow a [`Value`] to its primitive view, if its tag is one of the
    /// three primitive tags.
    pub fn from_value(value: &'a Value) -> Option<Self> {
        match value {
            Value::String(text) => Some(Primitive::String(text.as_str())),
            Value::Number(number) => Some(Primitive::Number(number)),
            Value::Bool(flag) => Some(Primitive::Bool(*flag)),
            _ => None,
        }
    }

    /// The string slice, if this is a string leaf.
    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Primitive::String(text) => Some(text),
            _ => None,
        }
    }

    /// The boolean, if this is a boolean leaf.
    pub fn as_bool(self) -> Option<bool> {
        match self {
            Primitive::Bool(flag) => Some(flag),
            _ => None,
        }
    }

    /// The number as `i64`, if this is a number leaf representable as one.
    pub fn as_i64(self) -> Option<i64> {
        match self {
            Primitive::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// The number as `u64`, if this is a number leaf representable as one.
    pub fn as_u64(self) -> Option<u64> {
        match self {
            Primitive::Number(number) => number.as_u64(),
            _ => None,
        }
    }

    /// The number as `f64`, if this is a number leaf.
    pub fn as_f64(self) -> Option<f64> {
        match self {
            Primitive::Number(number) => number.as_f64(),
            _ => None,
        }
    }
}
