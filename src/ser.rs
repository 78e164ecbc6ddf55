//! The JSON pipeline: tree building and text serialization.
//!
//! JSON rendering runs in two stages. [`to_json_tree`] converts a classified
//! [`Shape`] into a generic [`JsonValue`] tree; [`JsonSerializer`] then emits
//! that tree as indented, escaped text. Both stages are total: every shape
//! maps to some tree and every tree has an unambiguous textual encoding.
//!
//! ## Tree-building policy
//!
//! - Primitives map one-to-one.
//! - Composites become objects from their labeled fields. An unlabeled
//!   (positional) field has no valid object key and is omitted; it still
//!   appears in Normal output.
//! - Tuples become a string holding the tuple's Normal rendering. JSON has no
//!   tuple type, so a fixed-arity grouping survives only as an opaque
//!   snapshot, never as a nested array.
//! - Mapping keys are already display strings; collisions after conversion
//!   are last-write-wins, like composite field collisions.
//! - Opaque values become strings.
//!
//! ## Usage
//!
//! Most users should use the high-level functions in the crate root:
//!
//! ```rust
//! use reflected::{reflect, to_json_string};
//!
//! struct Point { x: i64, y: f64 }
//! reflect!(Point { x, y });
//!
//! let json = to_json_string(&Point { x: 1, y: 2.5 });
//! assert_eq!(json, "{\n  \"x\": 1,\n  \"y\": 2.5\n}");
//! ```

use crate::{JsonMap, JsonValue, Number, RenderOptions, Shape};

/// Converts a classified shape into a JSON value tree.
///
/// Recursive and total; dispatch mirrors the classifier's five categories
/// with `JsonValue` as the target instead of text.
///
/// # Examples
///
/// ```rust
/// use reflected::{ser, Introspect};
///
/// let tree = ser::to_json_tree(&vec![1, 2].shape());
/// assert_eq!(tree.as_array().map(Vec::len), Some(2));
///
/// // Tuples collapse to their Normal-form string.
/// let tree = ser::to_json_tree(&("a", 1).shape());
/// assert_eq!(tree.as_str(), Some("(\"a\", 1)"));
/// ```
#[must_use]
pub fn to_json_tree(shape: &Shape) -> JsonValue {
    match shape {
        Shape::Null => JsonValue::Null,
        Shape::Bool(b) => JsonValue::Bool(*b),
        Shape::Number(n) => JsonValue::Number(*n),
        Shape::Str(s) => JsonValue::String(s.clone()),
        Shape::Composite { fields, .. } => {
            let mut object = JsonMap::with_capacity(fields.len());
            for field in fields {
                if let Some(label) = &field.label {
                    object.insert(label.clone(), to_json_tree(&field.value));
                }
            }
            JsonValue::Object(object)
        }
        Shape::Tuple(_) => JsonValue::String(crate::normal::render(shape)),
        Shape::Sequence(items) => JsonValue::Array(items.iter().map(to_json_tree).collect()),
        Shape::Mapping(entries) => {
            let mut object = JsonMap::with_capacity(entries.len());
            for (key, value) in entries {
                object.insert(key.clone(), to_json_tree(value));
            }
            JsonValue::Object(object)
        }
        Shape::Opaque(description) => JsonValue::String(description.clone()),
    }
}

/// Serializes a JSON value tree with the given options.
///
/// Pretty-printed with a fixed indent step per nesting level, optionally
/// sorted object keys, JSON string escaping, and no trailing newline.
#[must_use]
pub fn to_json_string_value(value: &JsonValue, options: &RenderOptions) -> String {
    let mut serializer = JsonSerializer::new(options.clone());
    serializer.write(value);
    serializer.into_inner()
}

/// The JSON text serializer.
///
/// Owns the output buffer; create with [`JsonSerializer::new`], feed a tree
/// through [`write`](JsonSerializer::write), take the result with
/// [`into_inner`](JsonSerializer::into_inner).
pub struct JsonSerializer {
    output: String,
    options: RenderOptions,
}

impl JsonSerializer {
    #[must_use]
    pub fn new(options: RenderOptions) -> Self {
        JsonSerializer {
            // 256 bytes covers typical structs without reallocating
            output: String::with_capacity(256),
            options,
        }
    }

    /// Appends the serialized form of `value` to the buffer.
    pub fn write(&mut self, value: &JsonValue) {
        self.write_value(value, 0);
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.output
    }

    fn write_indent(&mut self, level: usize) {
        for _ in 0..level * self.options.indent {
            self.output.push(' ');
        }
    }

    fn write_value(&mut self, value: &JsonValue, level: usize) {
        match value {
            JsonValue::Null => self.output.push_str("null"),
            JsonValue::Bool(b) => self.output.push_str(if *b { "true" } else { "false" }),
            JsonValue::Number(Number::Integer(i)) => self.output.push_str(&i.to_string()),
            JsonValue::Number(Number::Float(f)) => {
                if f.is_finite() {
                    self.output.push_str(&crate::value::format_float(*f));
                } else {
                    // NaN and infinities have no JSON encoding
                    self.output.push_str("null");
                }
            }
            JsonValue::String(s) => self.write_string(s),
            JsonValue::Array(items) => {
                if items.is_empty() {
                    self.output.push_str("[]");
                    return;
                }
                self.output.push_str("[\n");
                for (i, item) in items.iter().enumerate() {
                    self.write_indent(level + 1);
                    self.write_value(item, level + 1);
                    if i + 1 < items.len() {
                        self.output.push(',');
                    }
                    self.output.push('\n');
                }
                self.write_indent(level);
                self.output.push(']');
            }
            JsonValue::Object(object) => {
                if object.is_empty() {
                    self.output.push_str("{}");
                    return;
                }
                let mut entries: Vec<(&String, &JsonValue)> = object.iter().collect();
                if self.options.sort_keys {
                    entries.sort_by(|a, b| a.0.cmp(b.0));
                }
                self.output.push_str("{\n");
                for (i, (key, item)) in entries.iter().enumerate() {
                    self.write_indent(level + 1);
                    self.write_string(key);
                    self.output.push_str(": ");
                    self.write_value(item, level + 1);
                    if i + 1 < entries.len() {
                        self.output.push(',');
                    }
                    self.output.push('\n');
                }
                self.write_indent(level);
                self.output.push('}');
            }
        }
    }

    fn write_string(&mut self, s: &str) {
        self.output.push('"');
        for ch in s.chars() {
            match ch {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                '\u{0008}' => self.output.push_str("\\b"),
                '\u{000C}' => self.output.push_str("\\f"),
                c if c < '\u{0020}' => {
                    self.output.push_str(&format!("\\u{:04x}", c as u32));
                }
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Introspect};
    use std::collections::BTreeMap;

    fn json(value: &JsonValue) -> String {
        to_json_string_value(value, &RenderOptions::default())
    }

    #[test]
    fn test_empty_containers_stay_inline() {
        assert_eq!(json(&JsonValue::Array(vec![])), "[]");
        assert_eq!(json(&JsonValue::Object(JsonMap::new())), "{}");
    }

    #[test]
    fn test_no_trailing_newline() {
        let tree = to_json_tree(&vec![1, 2].shape());
        assert!(!json(&tree).ends_with('\n'));
    }

    #[test]
    fn test_exponent_floats_keep_decimal_point() {
        let value = JsonValue::Array(vec![
            JsonValue::Number(Number::Float(1e300)),
            JsonValue::Number(Number::Float(-2.0)),
            JsonValue::Number(Number::Float(1e-7)),
        ]);
        assert_eq!(json(&value), "[\n  1.0e300,\n  -2.0,\n  1.0e-7\n]");
    }

    #[test]
    fn test_keys_sorted_by_default() {
        let mut object = JsonMap::new();
        object.insert("b".to_string(), JsonValue::from(2));
        object.insert("a".to_string(), JsonValue::from(1));
        assert_eq!(
            json(&JsonValue::Object(object)),
            "{\n  \"a\": 1,\n  \"b\": 2\n}"
        );
    }

    #[test]
    fn test_unsorted_keeps_insertion_order() {
        let mut object = JsonMap::new();
        object.insert("b".to_string(), JsonValue::from(2));
        object.insert("a".to_string(), JsonValue::from(1));
        let options = RenderOptions::new().with_sorted_keys(false);
        assert_eq!(
            to_json_string_value(&JsonValue::Object(object), &options),
            "{\n  \"b\": 2,\n  \"a\": 1\n}"
        );
    }

    #[test]
    fn test_string_escaping() {
        let value = JsonValue::String("a\"b\\c\nd\u{0001}".to_string());
        assert_eq!(json(&value), "\"a\\\"b\\\\c\\nd\\u0001\"");
    }

    #[test]
    fn test_non_finite_floats_become_null() {
        assert_eq!(json(&JsonValue::from(f64::NAN)), "null");
        assert_eq!(json(&JsonValue::from(f64::INFINITY)), "null");
    }

    #[test]
    fn test_float_keeps_fractional_digit() {
        assert_eq!(json(&JsonValue::from(3.0)), "3.0");
    }

    #[test]
    fn test_composite_tree_skips_positional_fields() {
        let shape = Shape::Composite {
            name: "T".to_string(),
            fields: vec![
                Field::labeled("a", Shape::Number(Number::Integer(1))),
                Field::positional(Shape::Number(Number::Integer(2))),
            ],
        };
        let tree = to_json_tree(&shape);
        let object = tree.as_object().unwrap();
        assert_eq!(object.len(), 1);
        assert_eq!(object.get("a"), Some(&JsonValue::from(1)));
    }

    #[test]
    fn test_mapping_tree_preserves_count() {
        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        let tree = to_json_tree(&map.shape());
        assert_eq!(tree.as_object().map(JsonMap::len), Some(2));
        assert_eq!(
            json(&tree),
            "{\n  \"1\": \"a\",\n  \"2\": \"b\"\n}"
        );
    }

    #[test]
    fn test_duplicate_labels_last_write_wins() {
        let shape = Shape::Composite {
            name: "T".to_string(),
            fields: vec![
                Field::labeled("k", Shape::Number(Number::Integer(1))),
                Field::labeled("k", Shape::Number(Number::Integer(2))),
            ],
        };
        let tree = to_json_tree(&shape);
        assert_eq!(tree.as_object().unwrap().get("k"), Some(&JsonValue::from(2)));
    }

    #[test]
    fn test_indent_width() {
        let tree = to_json_tree(&vec![vec![1]].shape());
        let options = RenderOptions::new().with_indent(4);
        assert_eq!(
            to_json_string_value(&tree, &options),
            "[\n    [\n        1\n    ]\n]"
        );
    }
}
