//! Single-line rendering
//!
//! `short_form` renders atoms and short aggregates inline; `summary_header`
//! renders the one-line identity header used when a value expands across
//! multiple lines. Formatting never fails: a broken custom string form
//! degrades to a placeholder.

use std::fmt;

use crate::value::{Key, ObjectId, Value};

/// Render a value's single-line form.
///
/// Atoms render as literals (`null`, `true`, numbers, quoted strings). Short
/// sequences render bracketed, short mappings braced in insertion order.
/// Values without a literal form fall back to their summary header.
#[must_use]
pub fn short_form(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Int(i) => i.to_string(),
        Value::Float(x) => x.to_string(),
        Value::Str(s) => format!("{s:?}"),
        Value::Seq(items) => {
            let parts: Vec<String> = items.borrow().iter().map(short_form).collect();
            format!("[{}]", parts.join(", "))
        }
        Value::Map(entries) => {
            let parts: Vec<String> = entries
                .borrow()
                .iter()
                .map(|(key, val)| format!("{}: {}", key_literal(key), short_form(val)))
                .collect();
            format!("{{{}}}", parts.join(", "))
        }
        Value::Object(_) => summary_header(value),
    }
}

/// Render a value's one-line summary header: `<TypeName at 0xADDR>`,
/// followed by `: stringform` when the object supplies one.
///
/// Atoms have no header and fall back to their literal form.
#[must_use]
pub fn summary_header(value: &Value) -> String {
    match value {
        Value::Seq(_) => header_line("list", value.identity()),
        Value::Map(_) => header_line("dict", value.identity()),
        Value::Object(object) => {
            let mut text = header_line(object.type_name(), value.identity());
            if let Some(form) = object.string_form() {
                text.push_str(": ");
                text.push_str(&form);
            }
            text
        }
        atom => short_form(atom),
    }
}

/// Render any `Display` into a string, substituting a placeholder naming the
/// failure when the implementation errors out. Intended for custom
/// `string_form` implementations that must not propagate failures.
#[must_use]
pub fn display_or_placeholder(value: &dyn fmt::Display) -> String {
    use fmt::Write as _;

    let mut text = String::new();
    match write!(text, "{value}") {
        Ok(()) => text,
        Err(err) => format!("[error rendering string form: {err}]"),
    }
}

fn header_line(type_name: &str, identity: Option<ObjectId>) -> String {
    let addr = identity.map_or(0, ObjectId::addr);
    format!("<{type_name} at {addr:#x}>")
}

/// Key literal for short-mapping rendering; text keys keep their quotes here,
/// unlike the bare labels used as multi-line entry prefixes.
fn key_literal(key: &Key) -> String {
    match key {
        Key::Int(i) => i.to_string(),
        Key::Float(x) => x.to_string(),
        Key::Str(s) => format!("{s:?}"),
        Key::Other(s) => s.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::TestObject;

    #[test]
    fn test_atom_literals() {
        assert_eq!(short_form(&Value::Null), "null");
        assert_eq!(short_form(&Value::Bool(true)), "true");
        assert_eq!(short_form(&Value::Int(-3)), "-3");
        assert_eq!(short_form(&Value::Float(2.5)), "2.5");
        assert_eq!(short_form(&Value::Str("hi".to_string())), "\"hi\"");
    }

    #[test]
    fn test_short_sequence_renders_bracketed() {
        let seq = Value::seq([Value::from("foo"), Value::from(3)]);
        assert_eq!(short_form(&seq), "[\"foo\", 3]");
    }

    #[test]
    fn test_empty_sequence_renders_as_brackets() {
        assert_eq!(short_form(&Value::seq([])), "[]");
    }

    #[test]
    fn test_short_mapping_renders_in_insertion_order() {
        let map = Value::map([("foo", 5), ("bar", 3)]);
        assert_eq!(short_form(&map), "{\"foo\": 5, \"bar\": 3}");
    }

    #[test]
    fn test_sequence_header_names_list() {
        let seq = Value::seq([Value::from(1)]);
        let header = summary_header(&seq);
        assert!(header.starts_with("<list at 0x"), "got: {header}");
        assert!(header.ends_with('>'));
    }

    #[test]
    fn test_mapping_header_names_dict() {
        let map = Value::map([("a", 1)]);
        assert!(summary_header(&map).starts_with("<dict at 0x"));
    }

    #[test]
    fn test_object_header_uses_type_name() {
        let obj = TestObject::new("Invoice", "billing::models");
        let header = summary_header(&TestObject::value(&obj));
        assert!(header.starts_with("<Invoice at 0x"), "got: {header}");
    }

    #[test]
    fn test_object_header_appends_string_form() {
        let obj = TestObject::new("Invoice", "billing::models");
        obj.set_string_form("INV-001");
        let header = summary_header(&TestObject::value(&obj));
        assert!(header.ends_with(">: INV-001"), "got: {header}");
    }

    #[test]
    fn test_header_identity_is_stable_across_calls() {
        let seq = Value::seq([Value::seq([])]);
        assert_eq!(summary_header(&seq), summary_header(&seq));
    }

    #[test]
    fn test_display_or_placeholder_success() {
        assert_eq!(display_or_placeholder(&42), "42");
    }

    #[test]
    fn test_display_or_placeholder_failure() {
        struct Broken;
        impl fmt::Display for Broken {
            fn fmt(&self, _f: &mut fmt::Formatter<'_>) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let text = display_or_placeholder(&Broken);
        assert!(
            text.starts_with("[error rendering string form:"),
            "got: {text}"
        );
    }
}
