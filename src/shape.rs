//! Runtime shape classification.
//!
//! Every value handed to the renderer is first captured as a [`Shape`]: a
//! closed tagged variant covering the five shape categories the engine knows
//! how to render (primitive, composite, sequence, mapping, opaque). The
//! [`Introspect`] trait performs that capture; implementations are provided
//! for the standard primitives, collections, maps, and tuples, and the
//! [`reflect!`](crate::reflect!) / [`opaque!`](crate::opaque!) macros generate
//! them for user types.
//!
//! ## Classification precedence
//!
//! Dispatch precedence matters: a type that has opted in as a composite must
//! always render structurally, never through a generic container or fallback
//! path. Rust resolves this at compile time — each type has exactly one
//! `Introspect` impl, so classification is total, deterministic, and decided
//! once per value:
//!
//! 1. Opted-in composites (via [`reflect!`](crate::reflect!)) produce
//!    [`Shape::Composite`].
//! 2. JSON-safe primitives produce [`Shape::Null`], [`Shape::Bool`],
//!    [`Shape::Number`], or [`Shape::Str`].
//! 3. Ordered and unordered element collections produce [`Shape::Sequence`].
//! 4. Key-to-value containers produce [`Shape::Mapping`].
//! 5. Anything else opts in to [`Shape::Opaque`] via
//!    [`opaque!`](crate::opaque!) or a manual impl.
//!
//! ## Examples
//!
//! ```rust
//! use reflected::{Category, Introspect, Shape};
//!
//! assert_eq!(42i32.shape().category(), Category::Primitive);
//! assert_eq!(vec![1, 2, 3].shape().category(), Category::Sequence);
//!
//! let shape = "hello".shape();
//! assert_eq!(shape, Shape::Str("hello".to_string()));
//! ```

use crate::Number;
use indexmap::IndexMap;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt::Display;
use std::rc::Rc;
use std::sync::Arc;

/// The classified runtime form of a value.
///
/// A `Shape` is built eagerly and recursively by [`Introspect::shape`]: nested
/// field values, sequence elements, and mapping values are themselves captured
/// as shapes. The structure is transient — created for a single render call
/// and discarded once the output string exists.
///
/// # Examples
///
/// ```rust
/// use reflected::{Introspect, Shape};
///
/// assert_eq!(true.shape(), Shape::Bool(true));
/// assert_eq!(Option::<i32>::None.shape(), Shape::Null);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Shape {
    /// The absent value (`Option::None`).
    Null,
    /// A boolean.
    Bool(bool),
    /// An integer or floating-point number.
    Number(Number),
    /// Textual data (`str`, `String`, `char`).
    Str(String),
    /// An opted-in structured value: a type name plus its full field list,
    /// own fields first, then each ancestor's, nearest to furthest.
    Composite {
        name: String,
        fields: Vec<Field>,
    },
    /// A fixed-arity unlabeled grouping.
    Tuple(Vec<Shape>),
    /// An ordered or unordered collection of elements, in iteration order.
    Sequence(Vec<Shape>),
    /// Key-value pairs, keys already converted to their display strings,
    /// in the underlying container's iteration order.
    Mapping(Vec<(String, Shape)>),
    /// A value with no further structure; holds its default textual form,
    /// typically a fully-qualified type name.
    Opaque(String),
}

/// The five classification buckets driving render behavior.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Category {
    /// A JSON-safe scalar: boolean, integer, float, string, or null.
    Primitive,
    /// A structured value with named or positional fields. Tuples land here
    /// as well: a fixed-arity unlabeled grouping is composite-shaped.
    Composite,
    /// An ordered collection of values.
    Sequence,
    /// A key-to-value collection.
    Mapping,
    /// No recognized structure; renders via its default textual form.
    Opaque,
}

impl Shape {
    /// Returns the shape category of this value. Total — every shape belongs
    /// to exactly one bucket.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflected::{Category, Introspect};
    ///
    /// assert_eq!(2.5f64.shape().category(), Category::Primitive);
    /// assert_eq!((1, "a").shape().category(), Category::Composite);
    /// ```
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Shape::Null | Shape::Bool(_) | Shape::Number(_) | Shape::Str(_) => Category::Primitive,
            Shape::Composite { .. } | Shape::Tuple(_) => Category::Composite,
            Shape::Sequence(_) => Category::Sequence,
            Shape::Mapping(_) => Category::Mapping,
            Shape::Opaque(_) => Category::Opaque,
        }
    }

    /// Returns `true` if the shape is a composite (including tuples).
    #[inline]
    #[must_use]
    pub const fn is_composite(&self) -> bool {
        matches!(self.category(), Category::Composite)
    }

    /// Returns `true` if the shape is a JSON-safe primitive.
    #[inline]
    #[must_use]
    pub const fn is_primitive(&self) -> bool {
        matches!(self.category(), Category::Primitive)
    }

    /// Creates an opaque shape from any displayable description.
    #[must_use]
    pub fn opaque(description: impl Into<String>) -> Self {
        Shape::Opaque(description.into())
    }
}

/// A single enumerated field of a composite value.
///
/// A labeled field renders as `label: value`; an unlabeled field is
/// positional (tuple-like) and renders as the value alone. Unlabeled fields
/// are never dropped by enumeration, even though they cannot appear as JSON
/// object keys.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub label: Option<String>,
    pub value: Shape,
}

impl Field {
    /// Creates a labeled field.
    #[must_use]
    pub fn labeled(label: impl Into<String>, value: Shape) -> Self {
        Field {
            label: Some(label.into()),
            value,
        }
    }

    /// Creates a positional (unlabeled) field.
    #[must_use]
    pub fn positional(value: Shape) -> Self {
        Field { label: None, value }
    }
}

/// Capture of a value's runtime shape.
///
/// This is the classifier's entry point: every renderable type implements it,
/// and the impl a type carries decides its shape category once and for all.
/// User types participate through [`reflect!`](crate::reflect!) (composite)
/// or [`opaque!`](crate::opaque!) (fallback); manual impls are the escape
/// hatch for enum-like values that want a custom textual form.
///
/// Capturing a shape is a pure read of the value's current state. The value
/// graph must be acyclic: a self-referential composite recurses without bound.
pub trait Introspect {
    /// Classifies `self` and captures its full nested shape.
    fn shape(&self) -> Shape;
}

impl Introspect for bool {
    fn shape(&self) -> Shape {
        Shape::Bool(*self)
    }
}

macro_rules! introspect_int {
    ($($ty:ty),*) => {
        $(
            impl Introspect for $ty {
                fn shape(&self) -> Shape {
                    Shape::Number(Number::Integer(*self as i64))
                }
            }
        )*
    };
}

introspect_int!(i8, i16, i32, i64, isize, u8, u16, u32);

impl Introspect for u64 {
    fn shape(&self) -> Shape {
        // Magnitudes beyond i64 degrade to float rather than wrapping.
        if *self <= i64::MAX as u64 {
            Shape::Number(Number::Integer(*self as i64))
        } else {
            Shape::Number(Number::Float(*self as f64))
        }
    }
}

impl Introspect for usize {
    fn shape(&self) -> Shape {
        (*self as u64).shape()
    }
}

impl Introspect for f32 {
    fn shape(&self) -> Shape {
        Shape::Number(Number::Float(f64::from(*self)))
    }
}

impl Introspect for f64 {
    fn shape(&self) -> Shape {
        Shape::Number(Number::Float(*self))
    }
}

impl Introspect for char {
    fn shape(&self) -> Shape {
        Shape::Str(self.to_string())
    }
}

impl Introspect for str {
    fn shape(&self) -> Shape {
        Shape::Str(self.to_string())
    }
}

impl Introspect for String {
    fn shape(&self) -> Shape {
        Shape::Str(self.clone())
    }
}

impl<T: Introspect> Introspect for Option<T> {
    fn shape(&self) -> Shape {
        match self {
            Some(value) => value.shape(),
            None => Shape::Null,
        }
    }
}

impl<T: Introspect + ?Sized> Introspect for &T {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Box<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Rc<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Introspect + ?Sized> Introspect for Arc<T> {
    fn shape(&self) -> Shape {
        (**self).shape()
    }
}

impl<T: Introspect> Introspect for [T] {
    fn shape(&self) -> Shape {
        Shape::Sequence(self.iter().map(Introspect::shape).collect())
    }
}

impl<T: Introspect, const N: usize> Introspect for [T; N] {
    fn shape(&self) -> Shape {
        self.as_slice().shape()
    }
}

impl<T: Introspect> Introspect for Vec<T> {
    fn shape(&self) -> Shape {
        self.as_slice().shape()
    }
}

impl<T: Introspect> Introspect for HashSet<T> {
    fn shape(&self) -> Shape {
        // Iteration order of a hashed set carries no cross-run guarantee.
        Shape::Sequence(self.iter().map(Introspect::shape).collect())
    }
}

impl<T: Introspect> Introspect for BTreeSet<T> {
    fn shape(&self) -> Shape {
        Shape::Sequence(self.iter().map(Introspect::shape).collect())
    }
}

impl<K: Display, V: Introspect> Introspect for HashMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.shape()))
                .collect(),
        )
    }
}

impl<K: Display, V: Introspect> Introspect for BTreeMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.shape()))
                .collect(),
        )
    }
}

impl<K: Display, V: Introspect> Introspect for IndexMap<K, V> {
    fn shape(&self) -> Shape {
        Shape::Mapping(
            self.iter()
                .map(|(k, v)| (k.to_string(), v.shape()))
                .collect(),
        )
    }
}

impl<A: Introspect, B: Introspect> Introspect for (A, B) {
    fn shape(&self) -> Shape {
        Shape::Tuple(vec![self.0.shape(), self.1.shape()])
    }
}

impl<A: Introspect, B: Introspect, C: Introspect> Introspect for (A, B, C) {
    fn shape(&self) -> Shape {
        Shape::Tuple(vec![self.0.shape(), self.1.shape(), self.2.shape()])
    }
}

impl<A: Introspect, B: Introspect, C: Introspect, D: Introspect> Introspect for (A, B, C, D) {
    fn shape(&self) -> Shape {
        Shape::Tuple(vec![
            self.0.shape(),
            self.1.shape(),
            self.2.shape(),
            self.3.shape(),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primitive_shapes() {
        assert_eq!(true.shape(), Shape::Bool(true));
        assert_eq!(7i32.shape(), Shape::Number(Number::Integer(7)));
        assert_eq!(2.5f64.shape(), Shape::Number(Number::Float(2.5)));
        assert_eq!('x'.shape(), Shape::Str("x".to_string()));
        assert_eq!("abc".shape(), Shape::Str("abc".to_string()));
        assert_eq!(Option::<i32>::None.shape(), Shape::Null);
        assert_eq!(Some(3).shape(), Shape::Number(Number::Integer(3)));
    }

    #[test]
    fn test_hash_set_classifies_as_sequence() {
        let set: HashSet<i32> = [1, 2, 3].into_iter().collect();
        match set.shape() {
            Shape::Sequence(items) => {
                assert_eq!(items.len(), 3);
                assert!(items
                    .iter()
                    .all(|item| matches!(item, Shape::Number(Number::Integer(_)))));
            }
            other => panic!("expected sequence, got {:?}", other),
        }
    }

    #[test]
    fn test_index_map_classifies_as_mapping_in_insertion_order() {
        let mut map = IndexMap::new();
        map.insert("zeta", 1);
        map.insert("alpha", 2);
        assert_eq!(
            map.shape(),
            Shape::Mapping(vec![
                ("zeta".to_string(), Shape::Number(Number::Integer(1))),
                ("alpha".to_string(), Shape::Number(Number::Integer(2))),
            ])
        );
    }

    #[test]
    fn test_u64_beyond_i64_degrades_to_float() {
        let big = u64::MAX;
        match big.shape() {
            Shape::Number(Number::Float(f)) => assert!(f > i64::MAX as f64 / 2.0),
            other => panic!("expected float, got {:?}", other),
        }
        assert_eq!(5u64.shape(), Shape::Number(Number::Integer(5)));
    }

    #[test]
    fn test_collection_shapes() {
        assert_eq!(
            vec![1, 2].shape(),
            Shape::Sequence(vec![
                Shape::Number(Number::Integer(1)),
                Shape::Number(Number::Integer(2)),
            ])
        );
        assert_eq!([1u8; 0].shape(), Shape::Sequence(vec![]));

        let mut map = BTreeMap::new();
        map.insert(1, "a");
        map.insert(2, "b");
        assert_eq!(
            map.shape(),
            Shape::Mapping(vec![
                ("1".to_string(), Shape::Str("a".to_string())),
                ("2".to_string(), Shape::Str("b".to_string())),
            ])
        );
    }

    #[test]
    fn test_tuple_shape_is_composite_category() {
        let shape = ("pair", 1).shape();
        assert_eq!(shape.category(), Category::Composite);
        assert_eq!(
            shape,
            Shape::Tuple(vec![
                Shape::Str("pair".to_string()),
                Shape::Number(Number::Integer(1)),
            ])
        );
    }

    #[test]
    fn test_categories_are_exhaustive_and_disjoint() {
        let shapes = [
            Shape::Null,
            Shape::Composite {
                name: "T".to_string(),
                fields: vec![],
            },
            Shape::Sequence(vec![]),
            Shape::Mapping(vec![]),
            Shape::Opaque("T".to_string()),
        ];
        let categories: Vec<_> = shapes.iter().map(Shape::category).collect();
        assert_eq!(
            categories,
            vec![
                Category::Primitive,
                Category::Composite,
                Category::Sequence,
                Category::Mapping,
                Category::Opaque,
            ]
        );
    }

    #[test]
    fn test_smart_pointers_are_transparent() {
        assert_eq!(Box::new(5).shape(), 5.shape());
        assert_eq!(Rc::new("s").shape(), "s".shape());
        assert_eq!(Arc::new(vec![true]).shape(), vec![true].shape());
    }
}
