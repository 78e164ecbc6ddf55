//! # reflected
//!
//! Recursive structural rendering for Rust values: a detailed textual
//! representation of any opted-in type's full field graph, without
//! hand-written `toString`/`toJSON` boilerplate.
//!
//! Two styles are supported:
//!
//! - **Normal**: a compact debug-like form, `Type(field: value, ...)`
//! - **Json**: canonical pretty-printed JSON of the same field graph
//!
//! ## How It Works
//!
//! A type opts in with the [`reflect!`] macro, which registers it as a
//! *composite*: a named value with an ordered field list, optionally
//! inheriting further fields from an embedded ancestor. Rendering then runs
//! as a pipeline: classify the value's runtime shape, enumerate its fields
//! (own first, then each ancestor's), and recursively render every nested
//! value — composites structurally, collections as sequences, maps as
//! key-value mappings, primitives as themselves, and everything else through
//! an explicit opaque fallback.
//!
//! Classification is total and deterministic; rendering never fails. The one
//! precondition is acyclicity: a self-referential value graph recurses
//! without bound, so callers must not hand in cycles.
//!
//! ## Quick Start
//!
//! ```rust
//! use reflected::{reflect, render, Style};
//!
//! struct Point {
//!     x: i64,
//!     y: f64,
//! }
//!
//! reflect!(Point { x, y });
//!
//! let point = Point { x: 1, y: 2.5 };
//!
//! assert_eq!(render(&point, Style::Normal), "Point(x: 1, y: 2.5)");
//! assert_eq!(render(&point, Style::Json), "{\n  \"x\": 1,\n  \"y\": 2.5\n}");
//! ```
//!
//! ## Nested Structures and Ancestry
//!
//! ```rust
//! use reflected::{reflect, to_normal_string};
//!
//! struct Base { id: i64 }
//! struct Derived { base: Base, tags: Vec<String> }
//!
//! reflect!(Base { id });
//! reflect!(Derived: base { tags });
//!
//! let value = Derived {
//!     base: Base { id: 7 },
//!     tags: vec!["a".to_string()],
//! };
//!
//! // Own fields first, then the ancestor's.
//! assert_eq!(to_normal_string(&value), "Derived(tags: [\"a\"], id: 7)");
//! ```
//!
//! ## Determinism
//!
//! Normal output follows field-enumeration and container-iteration order
//! exactly. JSON output sorts object keys lexicographically by default
//! ([`RenderOptions::sort_keys`]), so renders are byte-stable across runs
//! even for hash-ordered containers.
//!
//! ## Format Notes
//!
//! - Floats always render with a fractional digit (`2.0`, never `2`).
//! - Tuples render as `(v1, v2)` in Normal style; in JSON they appear as a
//!   string holding that Normal form — JSON has no tuple type.
//! - A type that has not opted in renders through [`opaque!`]: its default
//!   textual description, with no further structure, in both styles.

pub mod error;
#[macro_use]
pub mod macros;
pub mod map;
pub mod normal;
pub mod options;
pub mod reflect;
pub mod ser;
pub mod shape;
pub mod value;

pub use error::{Error, Result};
pub use map::JsonMap;
pub use options::{RenderOptions, Style};
pub use reflect::{all_fields, Reflected};
pub use ser::{to_json_tree, JsonSerializer};
pub use shape::{Category, Field, Introspect, Shape};
pub use value::{JsonValue, Number};

/// Renders any introspectable value in the given style.
///
/// Total: every value renders to some string. Uses default options
/// (two-space indent, sorted keys) for JSON output.
///
/// # Examples
///
/// ```rust
/// use reflected::{reflect, render, Style};
///
/// struct User { name: String, active: bool }
/// reflect!(User { name, active });
///
/// let user = User { name: "alice".to_string(), active: true };
/// assert_eq!(render(&user, Style::Normal), "User(name: \"alice\", active: true)");
/// ```
#[must_use]
pub fn render<T>(value: &T, style: Style) -> String
where
    T: ?Sized + Introspect,
{
    render_with_options(value, style, RenderOptions::default())
}

/// Renders any introspectable value with custom serializer options.
///
/// Options only affect [`Style::Json`]; Normal output is fixed-form.
#[must_use]
pub fn render_with_options<T>(value: &T, style: Style, options: RenderOptions) -> String
where
    T: ?Sized + Introspect,
{
    let shape = value.shape();
    match style {
        Style::Normal => normal::render(&shape),
        Style::Json => ser::to_json_string_value(&ser::to_json_tree(&shape), &options),
    }
}

/// Renders any introspectable value in Normal style.
///
/// Shorthand for `render(value, Style::Normal)`.
#[must_use]
pub fn to_normal_string<T>(value: &T) -> String
where
    T: ?Sized + Introspect,
{
    render(value, Style::Normal)
}

/// Renders any introspectable value as pretty-printed JSON with default
/// options.
#[must_use]
pub fn to_json_string<T>(value: &T) -> String
where
    T: ?Sized + Introspect,
{
    render(value, Style::Json)
}

/// Renders any introspectable value as pretty-printed JSON with custom
/// options.
///
/// # Examples
///
/// ```rust
/// use reflected::{reflect, to_json_string_with_options, RenderOptions};
///
/// struct Point { x: i64, y: i64 }
/// reflect!(Point { x, y });
///
/// let options = RenderOptions::new().with_indent(4);
/// let json = to_json_string_with_options(&Point { x: 1, y: 2 }, options);
/// assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
/// ```
#[must_use]
pub fn to_json_string_with_options<T>(value: &T, options: RenderOptions) -> String
where
    T: ?Sized + Introspect,
{
    render_with_options(value, Style::Json, options)
}

/// Converts any introspectable value into a [`JsonValue`] tree.
///
/// Useful for inspecting or post-processing the tree before serialization.
///
/// # Examples
///
/// ```rust
/// use reflected::{reflect, to_json_value};
///
/// struct Point { x: i64, y: i64 }
/// reflect!(Point { x, y });
///
/// let value = to_json_value(&Point { x: 1, y: 2 });
/// assert!(value.is_object());
/// ```
#[must_use]
pub fn to_json_value<T>(value: &T) -> JsonValue
where
    T: ?Sized + Introspect,
{
    ser::to_json_tree(&value.shape())
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Point {
        x: i64,
        y: f64,
    }

    reflect!(Point { x, y });

    struct Wrapper {
        inner: Point,
    }

    reflect!(Wrapper { inner });

    struct Reading {
        v: f64,
    }

    reflect!(Reading { v });

    #[test]
    fn test_point_normal_and_json() {
        let point = Point { x: 1, y: 2.5 };
        assert_eq!(render(&point, Style::Normal), "Point(x: 1, y: 2.5)");
        assert_eq!(render(&point, Style::Json), "{\n  \"x\": 1,\n  \"y\": 2.5\n}");
    }

    #[test]
    fn test_nested_composites_never_flatten() {
        let wrapper = Wrapper {
            inner: Point { x: 1, y: 2.5 },
        };
        assert_eq!(
            render(&wrapper, Style::Json),
            "{\n  \"inner\": {\n    \"x\": 1,\n    \"y\": 2.5\n  }\n}"
        );
    }

    #[test]
    fn test_empty_sequence_both_styles() {
        let empty: Vec<i64> = vec![];
        assert_eq!(render(&empty, Style::Normal), "[]");
        assert_eq!(render(&empty, Style::Json), "[]");
    }

    #[test]
    fn test_to_json_value() {
        let value = to_json_value(&Point { x: 1, y: 2.5 });
        let object = value.as_object().unwrap();
        assert_eq!(object.get("x"), Some(&JsonValue::Number(Number::Integer(1))));
        assert_eq!(object.get("y"), Some(&JsonValue::Number(Number::Float(2.5))));
    }

    #[test]
    fn test_extreme_float_keeps_decimal_point_in_both_styles() {
        let reading = Reading { v: 1e300 };
        assert_eq!(render(&reading, Style::Normal), "Reading(v: 1.0e300)");
        assert_eq!(render(&reading, Style::Json), "{\n  \"v\": 1.0e300\n}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let point = Point { x: 3, y: 3.0 };
        assert_eq!(render(&point, Style::Normal), render(&point, Style::Normal));
        assert_eq!(render(&point, Style::Json), render(&point, Style::Json));
    }
}
