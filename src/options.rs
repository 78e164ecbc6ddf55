//! Configuration options for rendering.
//!
//! This module provides:
//!
//! - [`Style`]: which of the two output grammars to produce
//! - [`RenderOptions`]: JSON serializer configuration (indent width, key
//!   sorting)
//!
//! ## Examples
//!
//! ```rust
//! use reflected::{reflect, render_with_options, RenderOptions, Style};
//!
//! struct Point { x: i64, y: i64 }
//! reflect!(Point { x, y });
//!
//! let point = Point { x: 1, y: 2 };
//!
//! // Four-space indent, keys left in enumeration order
//! let options = RenderOptions::new().with_indent(4).with_sorted_keys(false);
//! let json = render_with_options(&point, Style::Json, options);
//! assert_eq!(json, "{\n    \"x\": 1,\n    \"y\": 2\n}");
//! ```

/// The textual representation style.
///
/// # Examples
///
/// ```rust
/// use reflected::{reflect, render, Style};
///
/// struct Point { x: i64, y: i64 }
/// reflect!(Point { x, y });
///
/// let point = Point { x: 1, y: 2 };
/// assert_eq!(render(&point, Style::Normal), "Point(x: 1, y: 2)");
/// assert_eq!(render(&point, Style::Json), "{\n  \"x\": 1,\n  \"y\": 2\n}");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Style {
    /// Debug-like form, `Type(field: value, ...)`.
    #[default]
    Normal,
    /// Pretty-printed JSON.
    Json,
}

/// Configuration for the JSON text serializer.
///
/// Normal-style output takes no configuration; these options only affect
/// [`Style::Json`] rendering.
///
/// # Examples
///
/// ```rust
/// use reflected::RenderOptions;
///
/// // Defaults: two-space indent, keys sorted lexicographically
/// let options = RenderOptions::new();
/// assert_eq!(options.indent, 2);
/// assert!(options.sort_keys);
///
/// let options = RenderOptions::new().with_indent(4).with_sorted_keys(false);
/// assert_eq!(options.indent, 4);
/// assert!(!options.sort_keys);
/// ```
#[derive(Clone, Debug)]
pub struct RenderOptions {
    /// Number of spaces per nesting level.
    pub indent: usize,
    /// Sort object keys lexicographically. On by default so output is
    /// deterministic across runs even for hashed containers; turning it off
    /// leaves keys in field-enumeration or container-iteration order.
    pub sort_keys: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        RenderOptions {
            indent: 2,
            sort_keys: true,
        }
    }
}

impl RenderOptions {
    /// Creates default options (two-space indent, sorted keys).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation size (number of spaces per level).
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enables or disables lexicographic key sorting.
    #[must_use]
    pub fn with_sorted_keys(mut self, sort_keys: bool) -> Self {
        self.sort_keys = sort_keys;
        self
    }
}
