//! The Normal (debug-style) renderer.
//!
//! Converts a classified [`Shape`] into the compact textual grammar
//! `Type(field: value, ...)`, recursing depth-first into nested shapes. The
//! renderer is implemented as `Display` for `Shape`, so every captured shape
//! carries its Normal form.
//!
//! Grammar summary:
//!
//! - strings: wrapped in one pair of double quotes, content verbatim
//! - floats: always at least one fractional digit (`2.0`, not `2`)
//! - composites: `TypeName(label: value, ...)`, fields in enumeration order
//! - tuples: `(v1, v2, ...)`
//! - sequences: `[e1, e2, ...]`
//! - mappings: `[k1: v1, ...]` with unquoted keys; `[:]` when empty
//! - opaque values: their description verbatim

use crate::Shape;
use std::fmt;

/// Renders a shape into its Normal textual form.
///
/// # Examples
///
/// ```rust
/// use reflected::{normal, Introspect};
///
/// assert_eq!(normal::render(&vec![1, 2, 3].shape()), "[1, 2, 3]");
/// assert_eq!(normal::render(&("a", 1).shape()), "(\"a\", 1)");
/// ```
#[must_use]
pub fn render(shape: &Shape) -> String {
    shape.to_string()
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Shape::Null => f.write_str("null"),
            Shape::Bool(b) => write!(f, "{}", b),
            Shape::Number(n) => write!(f, "{}", n),
            Shape::Str(s) => write!(f, "\"{}\"", s),
            Shape::Composite { name, fields } => {
                write!(f, "{}(", name)?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(label) = &field.label {
                        write!(f, "{}: ", label)?;
                    }
                    write!(f, "{}", field.value)?;
                }
                f.write_str(")")
            }
            Shape::Tuple(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str(")")
            }
            Shape::Sequence(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            Shape::Mapping(entries) => {
                if entries.is_empty() {
                    return f.write_str("[:]");
                }
                f.write_str("[")?;
                for (i, (key, value)) in entries.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("]")
            }
            Shape::Opaque(description) => f.write_str(description),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Field, Introspect, Number};

    #[test]
    fn test_primitives() {
        assert_eq!(render(&Shape::Null), "null");
        assert_eq!(render(&Shape::Bool(true)), "true");
        assert_eq!(render(&Shape::Number(Number::Integer(3))), "3");
        assert_eq!(render(&Shape::Number(Number::Float(3.0))), "3.0");
        assert_eq!(render(&Shape::Str("hi".to_string())), "\"hi\"");
    }

    #[test]
    fn test_composite_field_order_is_not_sorted() {
        let shape = Shape::Composite {
            name: "T".to_string(),
            fields: vec![
                Field::labeled("z", Shape::Number(Number::Integer(1))),
                Field::labeled("a", Shape::Number(Number::Integer(2))),
            ],
        };
        assert_eq!(render(&shape), "T(z: 1, a: 2)");
    }

    #[test]
    fn test_positional_fields_render_without_label() {
        let shape = Shape::Composite {
            name: "Pair".to_string(),
            fields: vec![
                Field::positional(Shape::Number(Number::Integer(1))),
                Field::positional(Shape::Number(Number::Integer(2))),
            ],
        };
        assert_eq!(render(&shape), "Pair(1, 2)");
    }

    #[test]
    fn test_empty_collections() {
        assert_eq!(render(&Shape::Sequence(vec![])), "[]");
        assert_eq!(render(&Shape::Mapping(vec![])), "[:]");
        assert_eq!(
            render(&Shape::Composite {
                name: "Unit".to_string(),
                fields: vec![],
            }),
            "Unit()"
        );
    }

    #[test]
    fn test_mapping_keys_unquoted() {
        let shape = Shape::Mapping(vec![
            ("1".to_string(), Shape::Str("a".to_string())),
            ("2".to_string(), Shape::Str("b".to_string())),
        ]);
        assert_eq!(render(&shape), "[1: \"a\", 2: \"b\"]");
    }

    #[test]
    fn test_nested_tuple_inside_sequence() {
        let shape = vec![("x", 1), ("y", 2)].shape();
        assert_eq!(render(&shape), "[(\"x\", 1), (\"y\", 2)]");
    }

    #[test]
    fn test_determinism() {
        let shape = vec![1.5, 2.0].shape();
        assert_eq!(render(&shape), render(&shape));
    }
}
