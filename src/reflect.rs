//! The composite opt-in capability.
//!
//! A type participates in structural rendering by implementing [`Reflected`]:
//! it reports its type name, its own fields in declaration order, and an
//! optional ancestor whose fields it inherits. The engine never infers
//! composite-ness structurally — no impl, no structural rendering.
//!
//! Most types should not implement this by hand; the
//! [`reflect!`](crate::reflect!) macro generates the impl (and the matching
//! [`Introspect`](crate::Introspect) impl) from a field list.
//!
//! ## Ancestor chains
//!
//! Rust has no inheritance, so ancestry is declared by embedding: a "derived"
//! struct holds its base as a field and points [`Reflected::ancestor`] at it.
//! [`all_fields`] then enumerates own fields first, followed by each
//! ancestor's own fields, nearest to furthest:
//!
//! ```rust
//! use reflected::{reflect, to_normal_string};
//!
//! struct Base { a: i64 }
//! struct Derived { base: Base, b: bool }
//!
//! reflect!(Base { a });
//! reflect!(Derived: base { b });
//!
//! let d = Derived { base: Base { a: 1 }, b: true };
//! assert_eq!(to_normal_string(&d), "Derived(b: true, a: 1)");
//! ```

use crate::shape::{Field, Shape};

/// Marks a type as a composite: structurally renderable with a type name and
/// an ordered list of fields, optionally inheriting further fields from an
/// ancestor.
///
/// Implementations must be pure reads: enumerating fields captures the
/// value's current state and has no side effects.
pub trait Reflected {
    /// The type name used as the head of the Normal rendering.
    fn type_name(&self) -> &'static str;

    /// This type's own declared fields, in declaration order, excluding any
    /// embedded ancestor.
    fn own_fields(&self) -> Vec<Field>;

    /// The next link in the ancestor chain, if any.
    fn ancestor(&self) -> Option<&dyn Reflected> {
        None
    }
}

/// Enumerates a composite's full field list: own fields first, then each
/// ancestor's own fields, from nearest to furthest ancestor.
///
/// This concatenation order is the canonical enumeration order for Normal
/// rendering. Holds for any chain depth:
/// `all_fields(v) = own_fields(v) ++ all_fields(ancestor(v))`.
#[must_use]
pub fn all_fields(value: &dyn Reflected) -> Vec<Field> {
    let mut fields = value.own_fields();
    let mut link = value.ancestor();
    while let Some(ancestor) = link {
        fields.extend(ancestor.own_fields());
        link = ancestor.ancestor();
    }
    fields
}

/// Captures a composite's shape: its type name plus the full ancestor-chain
/// field list. Used by the impls that [`reflect!`](crate::reflect!) generates.
#[must_use]
pub fn composite_shape(value: &dyn Reflected) -> Shape {
    Shape::Composite {
        name: value.type_name().to_string(),
        fields: all_fields(value),
    }
}
