//! Per-object name registry.
//!
//! Every [`DObject`](crate::DObject) owns one [`NameRegistry`]. All four storage
//! categories (items, child objects, item lists, object lists) consult the same
//! registry before inserting, so a name can be used at most once per object no
//! matter which category it lands in.
//!
//! The registry is backed by an [`IndexSet`], so names iterate in the order they
//! were first claimed. The storage maps themselves are sorted; the registry
//! order is only used for introspection.
//!
//! ## Examples
//!
//! ```rust
//! use dserializer::NameRegistry;
//!
//! let mut names = NameRegistry::new();
//! names.claim("width").unwrap();
//! names.claim("height").unwrap();
//! assert!(names.claim("width").is_err());
//!
//! let order: Vec<_> = names.iter().collect();
//! assert_eq!(order, vec!["width", "height"]);
//! ```

use crate::{Error, Result};
use indexmap::IndexSet;

const FORBIDDEN: [(char, &str); 3] = [
    (' ', "contains a space"),
    ('\t', "contains a tab"),
    ('\n', "contains a newline"),
];

/// Checks that `name` is non-empty and has no space, tab or newline.
///
/// # Errors
///
/// Returns [`Error::InvalidName`] describing the first problem found.
///
/// # Examples
///
/// ```rust
/// use dserializer::validate_name;
///
/// assert!(validate_name("ok_name").is_ok());
/// assert!(validate_name("").is_err());
/// assert!(validate_name("two words").is_err());
/// ```
pub fn validate_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(Error::invalid_name(name, "name can't be empty"));
    }
    for (ch, reason) in FORBIDDEN {
        if name.contains(ch) {
            return Err(Error::invalid_name(name, reason));
        }
    }
    Ok(())
}

/// The set of names already used inside one object.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameRegistry(IndexSet<String>);

impl NameRegistry {
    #[must_use]
    pub fn new() -> Self {
        NameRegistry(IndexSet::new())
    }

    /// Checks that `name` is well-formed and not yet claimed, without claiming it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`].
    pub fn check(&self, name: &str) -> Result<()> {
        validate_name(name)?;
        if self.0.contains(name) {
            return Err(Error::duplicate_name(name));
        }
        Ok(())
    }

    /// Checks `name` and records it as used.
    ///
    /// On error the registry is left unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`].
    pub fn claim(&mut self, name: &str) -> Result<()> {
        self.check(name)?;
        self.0.insert(name.to_string());
        Ok(())
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the names, in the order they were claimed.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
