//! Leaf round-trip properties: a native leaf survives conversion into a
//! JSON tree and back unchanged.

use json_ext::{from_json_value, Serializer};
use proptest::prelude::*;

proptest! {
    #[test]
    fn string_leaf_roundtrip(text in ".*") {
        let serializer = Serializer::new();
        let tree = serializer.to_value(&text).unwrap();
        let back: String = from_json_value(tree).unwrap();
        prop_assert_eq!(back, text);
    }

    #[test]
    fn bool_leaf_roundtrip(flag: bool) {
        let serializer = Serializer::new();
        let tree = serializer.to_value(&flag).unwrap();
        let back: bool = from_json_value(tree).unwrap();
        prop_assert_eq!(back, flag);
    }

    #[test]
    fn integer_leaf_roundtrip(number: i64) {
        let serializer = Serializer::new();
        let tree = serializer.to_value(&number).unwrap();
        let back: i64 = from_json_value(tree).unwrap();
        prop_assert_eq!(back, number);
    }

    #[test]
    fn finite_float_leaf_roundtrip(number in -1.0e12f64..1.0e12f64) {
        let serializer = Serializer::new();
        let tree = serializer.to_value(&number).unwrap();
        let back: f64 = from_json_value(tree).unwrap();
        prop_assert_eq!(back.to_bits(), number.to_bits());
    }

    #[test]
    fn char_leaf_roundtrip(ch: char) {
        let serializer = Serializer::new();
        let tree = serializer.to_value(&ch).unwrap();
        // Characters are represented as single-character strings.
        let ch_string = ch.to_string();
        prop_assert_eq!(tree.as_str(), Some(ch_string.as_str()));
        let back: char = from_json_value(tree).unwrap();
        prop_assert_eq!(back, ch);
    }
}
