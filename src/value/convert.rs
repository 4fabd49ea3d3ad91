//! Conversions into the dynamic [`Value`] graph
//!
//! Covers the primitive atoms, common collections, and parsed
//! `serde_json::Value` documents (the CLI input path).

use std::collections::BTreeMap;

use crate::value::{Key, Value};

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

/// `None` becomes `Value::Null`.
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::seq(items.into_iter().map(Into::into))
    }
}

impl<V: Into<Value>> From<BTreeMap<String, V>> for Value {
    fn from(entries: BTreeMap<String, V>) -> Self {
        Self::map(entries)
    }
}

/// Parsed JSON maps directly onto the value graph: numbers become `Int` when
/// they fit `i64`, `Float` otherwise; arrays become sequences; objects become
/// string-keyed mappings.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        match json {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(b) => Self::Bool(b),
            serde_json::Value::Number(n) => n.as_i64().map_or_else(
                || n.as_f64().map_or(Self::Null, Self::Float),
                Self::Int,
            ),
            serde_json::Value::String(s) => Self::Str(s),
            serde_json::Value::Array(items) => Self::seq(items.into_iter().map(Self::from)),
            serde_json::Value::Object(entries) => Self::map(
                entries
                    .into_iter()
                    .map(|(k, v)| (Key::Str(k), Self::from(v))),
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_conversions() {
        assert!(matches!(Value::from(true), Value::Bool(true)));
        assert!(matches!(Value::from(42), Value::Int(42)));
        assert!(matches!(Value::from(7u32), Value::Int(7)));
        assert!(matches!(Value::from("hi"), Value::Str(s) if s == "hi"));
    }

    #[test]
    fn test_option_conversion() {
        assert!(matches!(Value::from(None::<i32>), Value::Null));
        assert!(matches!(Value::from(Some(5)), Value::Int(5)));
    }

    #[test]
    fn test_vec_conversion() {
        let value = Value::from(vec![1, 2, 3]);
        let Value::Seq(items) = &value else {
            panic!("expected a sequence");
        };
        assert_eq!(items.borrow().len(), 3);
    }

    #[test]
    fn test_btreemap_conversion() {
        let mut map = BTreeMap::new();
        map.insert("a".to_string(), 1);
        map.insert("b".to_string(), 2);
        let value = Value::from(map);
        let Value::Map(entries) = &value else {
            panic!("expected a mapping");
        };
        assert_eq!(entries.borrow().len(), 2);
    }

    #[test]
    fn test_json_atoms() {
        assert!(matches!(Value::from(json!(null)), Value::Null));
        assert!(matches!(Value::from(json!(true)), Value::Bool(true)));
        assert!(matches!(Value::from(json!(12)), Value::Int(12)));
        assert!(matches!(Value::from(json!(1.25)), Value::Float(x) if (x - 1.25).abs() < f64::EPSILON));
        assert!(matches!(Value::from(json!("s")), Value::Str(s) if s == "s"));
    }

    #[test]
    fn test_json_large_unsigned_becomes_float() {
        let json = json!(u64::MAX);
        assert!(matches!(Value::from(json), Value::Float(_)));
    }

    #[test]
    fn test_json_array_and_object() {
        let value = Value::from(json!({"items": [1, 2], "name": "x"}));
        let Value::Map(entries) = &value else {
            panic!("expected a mapping");
        };
        let entries = entries.borrow();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|(k, _)| *k == Key::Str("items".to_string())));
    }
}
