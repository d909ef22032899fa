//! Configuration options for document output.
//!
//! - [`FormatOptions`]: Main configuration struct
//! - [`Indent`]: Unit of indentation per nesting level
//!
//! The defaults produce the canonical format: one tab per level and nothing
//! after the root's closing brace.
//!
//! ## Examples
//!
//! ```rust
//! use dserializer::{to_string_with_options, DObject, FormatOptions, Indent};
//!
//! let mut obj = DObject::new();
//! obj.set_item("x", 1).unwrap();
//!
//! let options = FormatOptions::new().with_indent(Indent::Spaces(2));
//! assert_eq!(to_string_with_options(&obj, &options).unwrap(), "{\n  \"x\": 1\n}");
//! ```

/// Indentation written once per nesting level.
///
/// # Examples
///
/// ```rust
/// use dserializer::Indent;
///
/// assert_eq!(Indent::Tab.unit(), "\t");
/// assert_eq!(Indent::Spaces(4).unit(), "    ");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum Indent {
    #[default]
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Returns the text written for one level.
    #[must_use]
    pub fn unit(&self) -> String {
        match self {
            Indent::Tab => "\t".to_string(),
            Indent::Spaces(n) => " ".repeat(*n),
        }
    }
}

/// Configuration options for document output.
///
/// # Examples
///
/// ```rust
/// use dserializer::{FormatOptions, Indent};
///
/// let options = FormatOptions::new();
/// assert_eq!(options.indent, Indent::Tab);
/// assert!(!options.trailing_newline);
///
/// let options = FormatOptions::new()
///     .with_indent(Indent::Spaces(4))
///     .with_trailing_newline(true);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FormatOptions {
    pub indent: Indent,
    pub trailing_newline: bool,
}

impl FormatOptions {
    /// Creates default options (tab indentation, no trailing newline).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation unit.
    #[must_use]
    pub fn with_indent(mut self, indent: Indent) -> Self {
        self.indent = indent;
        self
    }

    /// Appends a newline after the root's closing brace when `true`.
    #[must_use]
    pub fn with_trailing_newline(mut self, trailing_newline: bool) -> Self {
        self.trailing_newline = trailing_newline;
        self
    }
}
