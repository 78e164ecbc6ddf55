//! JSON value trees.
//!
//! This module provides the [`JsonValue`] enum, the intermediate tree the
//! JSON renderer builds before serializing to text. It covers exactly the
//! JSON grammar: null, booleans, numbers, strings, arrays, and objects.
//!
//! ## Core Types
//!
//! - [`JsonValue`]: any JSON value
//! - [`Number`]: an integer or floating-point number, shared with the shape
//!   model so both renderers agree on numeric text
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use reflected::{JsonValue, Number};
//!
//! let null = JsonValue::Null;
//! let boolean = JsonValue::from(true);
//! let number = JsonValue::from(42);
//! let text = JsonValue::from("hello");
//! ```
//!
//! ### Type Checking and Extraction
//!
//! ```rust
//! use reflected::JsonValue;
//!
//! let value = JsonValue::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//!
//! let num: i64 = i64::try_from(value).unwrap();
//! assert_eq!(num, 42);
//! ```
//!
//! ### Building Trees from Introspectable Values
//!
//! ```rust
//! use reflected::{reflect, to_json_value, JsonValue};
//!
//! struct Point { x: i64, y: f64 }
//! reflect!(Point { x, y });
//!
//! let value = to_json_value(&Point { x: 1, y: 2.5 });
//! if let JsonValue::Object(obj) = value {
//!     assert_eq!(obj.len(), 2);
//! }
//! ```

use crate::JsonMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any JSON value.
///
/// Built from a classified [`Shape`](crate::Shape) by the JSON tree builder,
/// or constructed directly. Object keys are unique; inserting a duplicate key
/// overwrites the earlier entry (last write wins).
///
/// # Examples
///
/// ```rust
/// use reflected::{JsonValue, Number};
///
/// let num = JsonValue::Number(Number::Integer(42));
/// let text = JsonValue::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum JsonValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

/// A numeric value, integer or floating-point.
///
/// The two variants keep their distinct textual forms: integers render with
/// no fractional part, floats always render with one (`2.0`, never `2`).
///
/// # Examples
///
/// ```rust
/// use reflected::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(2.0).to_string(), "2.0");
/// assert_eq!(Number::Float(2.5).to_string(), "2.5");
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in `i64` range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflected::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => f.write_str(&format_float(*fl)),
        }
    }
}

/// Formats a finite float so the text always carries a decimal point.
///
/// Debug formatting keeps a fractional digit on integral floats (`2.0`),
/// but switches to a bare-mantissa exponent form for extreme magnitudes
/// (`1e300`). Rewrite those so the mantissa gets its digit back:
/// `1e300` becomes `1.0e300`, which is still strict JSON.
pub(crate) fn format_float(value: f64) -> String {
    let text = format!("{:?}", value);
    if !value.is_finite() || text.contains('.') {
        return text;
    }
    match text.find('e') {
        Some(pos) => {
            let mut out = String::with_capacity(text.len() + 2);
            out.push_str(&text[..pos]);
            out.push_str(".0");
            out.push_str(&text[pos..]);
            out
        }
        None => text + ".0",
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Integer(value)
    }
}

impl From<u8> for Number {
    fn from(value: u8) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u16> for Number {
    fn from(value: u16) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<u32> for Number {
    fn from(value: u32) -> Self {
        Number::Integer(value as i64)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value as f64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl JsonValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, JsonValue::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, JsonValue::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, JsonValue::String(_))
    }

    /// Returns `true` if the value is an array.
    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Returns `true` if the value is an object.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            JsonValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it as `i64`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            JsonValue::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            JsonValue::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is an array, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&Vec<JsonValue>> {
        match self {
            JsonValue::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// If the value is an object, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(obj) => Some(obj),
            _ => None,
        }
    }
}

impl fmt::Display for JsonValue {
    /// Serializes with default options (two-space indent, sorted keys).
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::ser::to_json_string_value(
            self,
            &crate::RenderOptions::default(),
        ))
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Null => serializer.serialize_unit(),
            JsonValue::Bool(b) => serializer.serialize_bool(*b),
            JsonValue::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            JsonValue::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Array(arr) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(arr.len()))?;
                for element in arr {
                    seq.serialize_element(element)?;
                }
                seq.end()
            }
            JsonValue::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
        }
    }
}

// TryFrom implementations for extracting values from JsonValue
impl TryFrom<JsonValue> for i64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(Number::Integer(i)) => Ok(i),
            JsonValue::Number(Number::Float(f)) => {
                if f.fract() == 0.0 && f >= i64::MIN as f64 && f <= i64::MAX as f64 {
                    Ok(f as i64)
                } else {
                    Err(crate::Error::custom(format!(
                        "cannot convert float {} to i64",
                        f
                    )))
                }
            }
            _ => Err(crate::Error::type_mismatch("integer", &value)),
        }
    }
}

impl TryFrom<JsonValue> for f64 {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::type_mismatch("number", &value)),
        }
    }
}

impl TryFrom<JsonValue> for bool {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(b),
            _ => Err(crate::Error::type_mismatch("bool", &value)),
        }
    }
}

impl TryFrom<JsonValue> for String {
    type Error = crate::Error;

    fn try_from(value: JsonValue) -> crate::Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s),
            _ => Err(crate::Error::type_mismatch("string", &value)),
        }
    }
}

// From implementations for creating JsonValue from primitives
impl From<bool> for JsonValue {
    fn from(value: bool) -> Self {
        JsonValue::Bool(value)
    }
}

impl From<i8> for JsonValue {
    fn from(value: i8) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<i16> for JsonValue {
    fn from(value: i16) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<i32> for JsonValue {
    fn from(value: i32) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<i64> for JsonValue {
    fn from(value: i64) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<u8> for JsonValue {
    fn from(value: u8) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<u16> for JsonValue {
    fn from(value: u16) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<u32> for JsonValue {
    fn from(value: u32) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<f32> for JsonValue {
    fn from(value: f32) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<f64> for JsonValue {
    fn from(value: f64) -> Self {
        JsonValue::Number(Number::from(value))
    }
}

impl From<String> for JsonValue {
    fn from(value: String) -> Self {
        JsonValue::String(value)
    }
}

impl From<&str> for JsonValue {
    fn from(value: &str) -> Self {
        JsonValue::String(value.to_string())
    }
}

impl From<Vec<JsonValue>> for JsonValue {
    fn from(value: Vec<JsonValue>) -> Self {
        JsonValue::Array(value)
    }
}

impl From<JsonMap> for JsonValue {
    fn from(value: JsonMap) -> Self {
        JsonValue::Object(value)
    }
}
