//! Opt-in macros.
//!
//! [`reflect!`](crate::reflect!) is the registration surface: it implements
//! [`Reflected`](crate::Reflected) and [`Introspect`](crate::Introspect) for
//! a struct so the type renders structurally. [`opaque!`](crate::opaque!) is
//! the explicit fallback for types that should render as a flat description
//! instead.

/// Opts a struct into structural rendering.
///
/// Three forms:
///
/// - `reflect!(Type { a, b })` — named fields, in declaration order
/// - `reflect!(Type: base { a, b })` — `base` is an embedded ancestor whose
///   fields are inherited (enumerated after this type's own)
/// - `reflect!(Type(0, 1))` — tuple struct; fields are positional
///
/// # Examples
///
/// ```rust
/// use reflected::{reflect, to_normal_string};
///
/// struct Point { x: i64, y: f64 }
/// reflect!(Point { x, y });
///
/// struct Pair(i64, i64);
/// reflect!(Pair(0, 1));
///
/// assert_eq!(to_normal_string(&Point { x: 1, y: 2.5 }), "Point(x: 1, y: 2.5)");
/// assert_eq!(to_normal_string(&Pair(1, 2)), "Pair(1, 2)");
/// ```
#[macro_export]
macro_rules! reflect {
    // Named-field struct
    ($ty:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Reflected for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn own_fields(&self) -> ::std::vec::Vec<$crate::Field> {
                ::std::vec![$(
                    $crate::Field::labeled(
                        stringify!($field),
                        $crate::Introspect::shape(&self.$field),
                    )
                ),*]
            }
        }

        impl $crate::Introspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::reflect::composite_shape(self)
            }
        }
    };

    // Named-field struct with an embedded ancestor
    ($ty:ident : $ancestor:ident { $($field:ident),* $(,)? }) => {
        impl $crate::Reflected for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn own_fields(&self) -> ::std::vec::Vec<$crate::Field> {
                ::std::vec![$(
                    $crate::Field::labeled(
                        stringify!($field),
                        $crate::Introspect::shape(&self.$field),
                    )
                ),*]
            }

            fn ancestor(&self) -> ::std::option::Option<&dyn $crate::Reflected> {
                ::std::option::Option::Some(&self.$ancestor)
            }
        }

        impl $crate::Introspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::reflect::composite_shape(self)
            }
        }
    };

    // Tuple struct
    ($ty:ident ( $($idx:tt),* $(,)? )) => {
        impl $crate::Reflected for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn own_fields(&self) -> ::std::vec::Vec<$crate::Field> {
                ::std::vec![$(
                    $crate::Field::positional($crate::Introspect::shape(&self.$idx))
                ),*]
            }
        }

        impl $crate::Introspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::reflect::composite_shape(self)
            }
        }
    };
}

/// Opts a type into the opaque fallback.
///
/// - `opaque!(Type)` — describes the value by its fully-qualified type name
/// - `opaque!(Type: display)` — describes the value by its `Display` output,
///   useful for enums that carry their own textual form
///
/// # Examples
///
/// ```rust
/// use reflected::{opaque, to_normal_string};
/// use std::fmt;
///
/// enum Status { Active, Suspended }
/// impl fmt::Display for Status {
///     fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
///         f.write_str(match self {
///             Status::Active => "Active",
///             Status::Suspended => "Suspended",
///         })
///     }
/// }
/// opaque!(Status: display);
///
/// assert_eq!(to_normal_string(&Status::Active), "Active");
/// ```
#[macro_export]
macro_rules! opaque {
    ($ty:ident) => {
        impl $crate::Introspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::opaque(::std::any::type_name::<$ty>())
            }
        }
    };

    ($ty:ident : display) => {
        impl $crate::Introspect for $ty {
            fn shape(&self) -> $crate::Shape {
                $crate::Shape::opaque(::std::string::ToString::to_string(self))
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use crate::{to_normal_string, Introspect, Shape};

    struct Inner {
        a: i64,
    }

    struct Outer {
        inner: Inner,
        flag: bool,
    }

    crate::reflect!(Inner { a });
    crate::reflect!(Outer { inner, flag });

    struct Pair(i64, &'static str);
    crate::reflect!(Pair(0, 1));

    struct Plain;
    crate::opaque!(Plain);

    #[test]
    fn test_nested_composites_recurse() {
        let outer = Outer {
            inner: Inner { a: 1 },
            flag: true,
        };
        assert_eq!(to_normal_string(&outer), "Outer(inner: Inner(a: 1), flag: true)");
    }

    #[test]
    fn test_tuple_struct_fields_are_positional() {
        assert_eq!(to_normal_string(&Pair(1, "x")), "Pair(1, \"x\")");
    }

    #[test]
    fn test_opaque_uses_type_name() {
        match Plain.shape() {
            Shape::Opaque(description) => {
                assert!(description.ends_with("Plain"));
            }
            other => panic!("expected opaque, got {:?}", other),
        }
    }
}
