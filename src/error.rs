//! Error type for fallible value extraction.
//!
//! Rendering itself is total: every introspectable value classifies into
//! some shape category and renders to some string, at worst through the
//! opaque fallback. The fallible surface of this crate is extraction —
//! converting a [`JsonValue`](crate::JsonValue) back into a concrete Rust
//! type via `TryFrom`.
//!
//! ## Examples
//!
//! ```rust
//! use reflected::JsonValue;
//!
//! let result = i64::try_from(JsonValue::String("not a number".to_string()));
//! assert!(result.is_err());
//! ```

use std::fmt;
use thiserror::Error;

/// Errors produced when extracting typed values from a JSON tree.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The value's variant does not match the requested type.
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: String,
    },

    /// Custom error with a display message.
    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates a type mismatch error for a failed extraction.
    #[must_use]
    pub fn type_mismatch(expected: &'static str, found: &crate::JsonValue) -> Self {
        Error::TypeMismatch {
            expected,
            found: format!("{:?}", found),
        }
    }

    /// Creates a custom error with a display message.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use reflected::Error;
    ///
    /// let err = Error::custom("something went wrong");
    /// assert!(err.to_string().contains("something went wrong"));
    /// ```
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
