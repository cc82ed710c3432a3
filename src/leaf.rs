//! Infallible conversions into leaf [`Value`]s for the setter surface.

use serde_json::{Number, Value};

/// Shapes accepted by [`ObjectExt::set`](crate::ObjectExt::set): prebuilt
/// values, characters, numbers, strings, and booleans.
///
/// Conversions never fail. A character becomes a single-character string;
/// a non-finite float becomes null, matching `serde_json`'s own `From<f64>`.
/// `Option::None` stores an explicit JSON null.
pub trait IntoLeaf {
    fn into_leaf(self) -> Value;
}

impl IntoLeaf for Value {
    fn into_leaf(self) -> Value {
        self
    }
}

impl IntoLeaf for char {
    fn into_leaf(self) -> Value {
        Value::String(self.to_string())
    }
}

impl IntoLeaf for &str {
    fn into_leaf(self) -> Value {
        Value::String(self.to_owned())
    }
}

impl IntoLeaf for String {
    fn into_leaf(self) -> Value {
        Value::String(self)
    }
}

impl IntoLeaf for bool {
    fn into_leaf(self) -> Value {
        Value::Bool(self)
    }
}

impl IntoLeaf for Number {
    fn into_leaf(self) -> Value {
        Value::Number(self)
    }
}

impl<T: IntoLeaf> IntoLeaf for Option<T> {
    fn into_leaf(self) -> Value {
        match self {
            Some(value) => value.into_leaf(),
            None => Value::Null,
        }
    }
}

macro_rules! leaf_via_from {
    ($($ty:ty),* $(,)?) => {
        $(
            impl IntoLeaf for $ty {
                fn into_leaf(self) -> Value {
                    Value::from(self)
                }
            }
        )*
    };
}

leaf_via_from!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);
