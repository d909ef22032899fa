//! Scalar values stored in a document.
//!
//! This module provides the [`Variant`] enum, a closed sum type holding exactly
//! one of a string, a boolean, a 64-bit integer or a 64-bit double. A
//! default-constructed variant is [`Variant::Empty`], the value an
//! auto-vivified item holds until something is assigned to it.
//!
//! ## Creating Values
//!
//! ```rust
//! use dserializer::{Variant, VariantType};
//!
//! let text = Variant::from("hello");
//! let flag = Variant::from(true);
//! let count = Variant::from(42);
//! let ratio = Variant::from(0.5);
//!
//! assert_eq!(count.get_type(), VariantType::Integer);
//! assert!(Variant::default().is_empty());
//! ```
//!
//! ## Extracting Values
//!
//! Accessors are strict: asking for the wrong alternative is an error, never a
//! silent default.
//!
//! ```rust
//! use dserializer::Variant;
//!
//! let value = Variant::from(42);
//! assert_eq!(value.as_integer().unwrap(), 42);
//! assert!(value.as_bool().is_err());
//! ```

use crate::{Error, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A single scalar value.
///
/// # Examples
///
/// ```rust
/// use dserializer::Variant;
///
/// let value = Variant::String("hello".to_string());
/// assert!(value.is_string());
/// assert_eq!(value.as_string().unwrap(), "hello");
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Variant {
    #[default]
    Empty,
    String(String),
    Boolean(bool),
    Integer(i64),
    Double(f64),
}

/// The tag of a [`Variant`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VariantType {
    Empty,
    String,
    Boolean,
    Integer,
    Double,
}

impl VariantType {
    /// Returns a lowercase name for this type, as used in error messages.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dserializer::VariantType;
    ///
    /// assert_eq!(VariantType::Double.as_str(), "double");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            VariantType::Empty => "empty",
            VariantType::String => "string",
            VariantType::Boolean => "boolean",
            VariantType::Integer => "integer",
            VariantType::Double => "double",
        }
    }
}

impl fmt::Display for VariantType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Variant {
    /// Returns the tag of the currently held alternative.
    #[inline]
    #[must_use]
    pub const fn get_type(&self) -> VariantType {
        match self {
            Variant::Empty => VariantType::Empty,
            Variant::String(_) => VariantType::String,
            Variant::Boolean(_) => VariantType::Boolean,
            Variant::Integer(_) => VariantType::Integer,
            Variant::Double(_) => VariantType::Double,
        }
    }

    /// Returns `true` if the variant holds no value.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Variant::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Variant::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Variant::Boolean(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Variant::Integer(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, Variant::Double(_))
    }

    /// Returns the held string.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the variant is not a string.
    pub fn as_string(&self) -> Result<&str> {
        match self {
            Variant::String(s) => Ok(s),
            _ => Err(self.mismatch(VariantType::String)),
        }
    }

    /// Returns the held boolean.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the variant is not a boolean.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dserializer::{Error, Variant};
    ///
    /// assert_eq!(Variant::from(true).as_bool(), Ok(true));
    /// assert_eq!(
    ///     Variant::from(1).as_bool(),
    ///     Err(Error::type_mismatch("boolean", "integer"))
    /// );
    /// ```
    pub fn as_bool(&self) -> Result<bool> {
        match self {
            Variant::Boolean(b) => Ok(*b),
            _ => Err(self.mismatch(VariantType::Boolean)),
        }
    }

    /// Returns the held integer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the variant is not an integer.
    pub fn as_integer(&self) -> Result<i64> {
        match self {
            Variant::Integer(i) => Ok(*i),
            _ => Err(self.mismatch(VariantType::Integer)),
        }
    }

    /// Returns the held double. Integers are not widened.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TypeMismatch`] if the variant is not a double.
    pub fn as_double(&self) -> Result<f64> {
        match self {
            Variant::Double(d) => Ok(*d),
            _ => Err(self.mismatch(VariantType::Double)),
        }
    }

    fn mismatch(&self, expected: VariantType) -> Error {
        Error::type_mismatch(expected.as_str(), self.get_type().as_str())
    }
}

/// Formats the variant the way it appears in serialized output.
impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variant::Empty => f.write_str("null"),
            // No escaping of embedded quotes.
            Variant::String(s) => write!(f, "\"{}\"", s),
            Variant::Boolean(b) => f.write_str(if *b { "true" } else { "false" }),
            Variant::Integer(i) => write!(f, "{}", i),
            Variant::Double(d) => write!(f, "{}", d),
        }
    }
}

impl Serialize for Variant {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Variant::Empty => serializer.serialize_unit(),
            Variant::String(s) => serializer.serialize_str(s),
            Variant::Boolean(b) => serializer.serialize_bool(*b),
            Variant::Integer(i) => serializer.serialize_i64(*i),
            Variant::Double(d) => serializer.serialize_f64(*d),
        }
    }
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct VariantVisitor;

        impl<'de> Visitor<'de> for VariantVisitor {
            type Value = Variant;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a string, boolean, integer or double")
            }

            fn visit_bool<E>(self, value: bool) -> std::result::Result<Self::Value, E> {
                Ok(Variant::Boolean(value))
            }

            fn visit_i64<E>(self, value: i64) -> std::result::Result<Self::Value, E> {
                Ok(Variant::Integer(value))
            }

            fn visit_u64<E>(self, value: u64) -> std::result::Result<Self::Value, E>
            where
                E: de::Error,
            {
                i64::try_from(value)
                    .map(Variant::Integer)
                    .map_err(|_| E::custom(format!("integer {} out of range for i64", value)))
            }

            fn visit_f64<E>(self, value: f64) -> std::result::Result<Self::Value, E> {
                Ok(Variant::Double(value))
            }

            fn visit_str<E>(self, value: &str) -> std::result::Result<Self::Value, E> {
                Ok(Variant::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> std::result::Result<Self::Value, E> {
                Ok(Variant::String(value))
            }

            fn visit_unit<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Variant::Empty)
            }

            fn visit_none<E>(self) -> std::result::Result<Self::Value, E> {
                Ok(Variant::Empty)
            }
        }

        deserializer.deserialize_any(VariantVisitor)
    }
}

// TryFrom implementations for extracting values from Variant
impl TryFrom<Variant> for String {
    type Error = crate::Error;

    fn try_from(value: Variant) -> crate::Result<Self> {
        match value {
            Variant::String(s) => Ok(s),
            other => Err(other.mismatch(VariantType::String)),
        }
    }
}

impl TryFrom<Variant> for bool {
    type Error = crate::Error;

    fn try_from(value: Variant) -> crate::Result<Self> {
        value.as_bool()
    }
}

impl TryFrom<Variant> for i64 {
    type Error = crate::Error;

    fn try_from(value: Variant) -> crate::Result<Self> {
        value.as_integer()
    }
}

impl TryFrom<Variant> for f64 {
    type Error = crate::Error;

    fn try_from(value: Variant) -> crate::Result<Self> {
        value.as_double()
    }
}

// From implementations for creating Variant from primitives
impl From<String> for Variant {
    fn from(value: String) -> Self {
        Variant::String(value)
    }
}

impl From<&str> for Variant {
    fn from(value: &str) -> Self {
        Variant::String(value.to_string())
    }
}

impl From<bool> for Variant {
    fn from(value: bool) -> Self {
        Variant::Boolean(value)
    }
}

impl From<i8> for Variant {
    fn from(value: i8) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<i16> for Variant {
    fn from(value: i16) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<i32> for Variant {
    fn from(value: i32) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<i64> for Variant {
    fn from(value: i64) -> Self {
        Variant::Integer(value)
    }
}

impl From<u8> for Variant {
    fn from(value: u8) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<u16> for Variant {
    fn from(value: u16) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<u32> for Variant {
    fn from(value: u32) -> Self {
        Variant::Integer(value as i64)
    }
}

impl From<f32> for Variant {
    fn from(value: f32) -> Self {
        Variant::Double(value as f64)
    }
}

impl From<f64> for Variant {
    fn from(value: f64) -> Self {
        Variant::Double(value)
    }
}
