//! The native-to-JSON conversion strategy.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ConvertError;

/// Conversion strategy from arbitrary native values to JSON trees.
///
/// A `Serializer` is a plain owned value: clone it, hand out `&` borrows to
/// the bulk-conversion entry points, and reconfigure it with
/// [`Serializer::update`]. Reconfiguration replaces the strategy wholesale;
/// it never merges two strategies. There is no shared global instance, so
/// concurrent use needs no synchronization beyond ordinary ownership.
///
/// ```
/// use json_ext::Serializer;
///
/// let serializer = Serializer::new().update(|b| b.serialize_nulls(true));
/// assert!(serializer.serialize_nulls());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Serializer {
    serialize_nulls: bool,
    pretty: bool,
}

impl Serializer {
    /// The default strategy: null-valued object members are dropped from
    /// converted trees, and text output is compact.
    pub fn new() -> Self {
        Serializer {
            serialize_nulls: false,
            pretty: false,
        }
    }

    pub fn builder() -> SerializerBuilder {
        SerializerBuilder {
            inner: Serializer::new(),
        }
    }

    /// Rebuild this strategy through `f`, replacing it wholesale. The builder
    /// starts from the current configuration.
    pub fn update(self, f: impl FnOnce(SerializerBuilder) -> SerializerBuilder) -> Self {
        f(SerializerBuilder { inner: self }).build()
    }

    pub fn serialize_nulls(&self) -> bool {
        self.serialize_nulls
    }

    pub fn pretty(&self) -> bool {
        self.pretty
    }

    /// Convert a native value into a JSON tree.
    ///
    /// With `serialize_nulls` off, null-valued members of objects inside the
    /// converted tree are dropped. Array elements and the conversion root are
    /// never dropped, so a native `None` still converts to an explicit null.
    pub fn to_value<T>(&self, value: &T) -> Result<Value, ConvertError>
    where
        T: Serialize + ?Sized,
    {
        let tree = serde_json::to_value(value).map_err(ConvertError::Serialize)?;
        if self.serialize_nulls {
            Ok(tree)
        } else {
            Ok(drop_null_members(tree))
        }
    }

    /// Render a native value as JSON text, compact or pretty per the
    /// configuration. The tree goes through [`Serializer::to_value`] first,
    /// so the null-member policy applies to the text as well.
    pub fn to_json<T>(&self, value: &T) -> Result<String, ConvertError>
    where
        T: Serialize + ?Sized,
    {
        let tree = self.to_value(value)?;
        let out = if self.pretty {
            serde_json::to_string_pretty(&tree)
        } else {
            serde_json::to_string(&tree)
        };
        out.map_err(ConvertError::Serialize)
    }
}

impl Default for Serializer {
    fn default() -> Self {
        Serializer::new()
    }
}

/// Builder for [`Serializer`]; obtained from [`Serializer::builder`] or
/// inside [`Serializer::update`].
#[derive(Debug, Clone)]
pub struct SerializerBuilder {
    inner: Serializer,
}

impl SerializerBuilder {
    /// Keep null-valued object members in converted trees.
    pub fn serialize_nulls(mut self, on: bool) -> Self {
        self.inner.serialize_nulls = on;
        self
    }

    /// Indent text output.
    pub fn pretty(mut self, on: bool) -> Self {
        self.inner.pretty = on;
        self
    }

    pub fn build(self) -> Serializer {
        self.inner
    }
}

// Null members are dropped at every object level; array elements are kept
// even when null.
fn drop_null_members(value: Value) -> Value {
    match value {
        Value::Object(members) => {
            let mut kept = Map::new();
            for (key, member) in members {
                if member.is_null() {
                    continue;
                }
                kept.insert(key, drop_null_members(member));
            }
            Value::Object(kept)
        }
        Value::Array(items) => Value::Array(items.into_iter().map(drop_null_members).collect()),
        leaf => leaf,
    }
}
