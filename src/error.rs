//! Error types for building and saving documents.
//!
//! Every failure is raised at the call that detects it and propagates to the
//! caller unchanged. Nothing is retried or swallowed.
//!
//! ## Error Categories
//!
//! - **Naming**: empty names, names with whitespace, names reused inside one object
//! - **Type Mismatches**: reading a [`Variant`](crate::Variant) as the wrong kind
//! - **Destination**: missing file path, or a path that points at a directory
//! - **I/O Errors**: the destination could not be opened or written
//!
//! ## Examples
//!
//! ```rust
//! use dserializer::{DObject, Error};
//!
//! let mut obj = DObject::new();
//! let result = obj.set_item("bad name", 1);
//! assert!(matches!(result, Err(Error::InvalidName { .. })));
//! ```

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Represents all possible errors raised by the document model and serializer.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Name is empty or contains a space, tab or newline
    #[error("Invalid name \"{name}\": {reason}")]
    InvalidName { name: String, reason: String },

    /// Name already used by another entry of the same object
    #[error("Two entities can't have the same name: \"{0}\"")]
    DuplicateName(String),

    /// Variant accessor called against a different alternative
    #[error("Type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        expected: &'static str,
        found: &'static str,
    },

    /// `save`/`load` called without a destination path
    #[error("No file specified")]
    NoFileSpecified,

    /// Destination exists and is a directory
    #[error("Destination is a directory: {}", .0.display())]
    InvalidDestination(PathBuf),

    /// Object serialized as a named member without a name
    #[error("Object needs to have a name")]
    UnnamedObject,

    /// IO error while opening or writing the destination
    #[error("IO error: {0}")]
    Io(String),

    /// Custom error
    #[error("Error: {0}")]
    Custom(String),
}

impl Error {
    /// Creates an invalid name error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dserializer::Error;
    ///
    /// let err = Error::invalid_name("a b", "contains a space");
    /// assert!(err.to_string().contains("a b"));
    /// ```
    pub fn invalid_name(name: &str, reason: &str) -> Self {
        Error::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Creates a duplicate name error.
    pub fn duplicate_name(name: &str) -> Self {
        Error::DuplicateName(name.to_string())
    }

    /// Creates a type mismatch error.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dserializer::Error;
    ///
    /// let err = Error::type_mismatch("boolean", "integer");
    /// assert!(err.to_string().contains("expected boolean"));
    /// ```
    pub fn type_mismatch(expected: &'static str, found: &'static str) -> Self {
        Error::TypeMismatch { expected, found }
    }

    /// Creates an I/O error for file opening/writing failures.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }

    /// Creates a custom error with a display message.
    pub fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl serde::ser::Error for Error {
    fn custom<T: fmt::Display>(msg: T) -> Self {
        Error::Custom(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            Error::duplicate_name("x").to_string(),
            "Two entities can't have the same name: \"x\""
        );
        assert_eq!(Error::NoFileSpecified.to_string(), "No file specified");
        assert_eq!(
            Error::InvalidDestination(PathBuf::from("/tmp")).to_string(),
            "Destination is a directory: /tmp"
        );
    }

    #[test]
    fn test_from_io_error() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: Error = io.into();
        assert!(matches!(err, Error::Io(ref msg) if msg.contains("denied")));
    }
}
