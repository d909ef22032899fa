//! Document serialization.
//!
//! This module provides the [`Serializer`], which writes a [`DObject`] tree to
//! any [`io::Write`] sink in a fixed, JSON-like grammar:
//!
//! ```text
//! {
//! 	"item": 1,
//! 	"child": {
//! 		"inner": true
//! 	},
//! 	"numbers": [
//! 		1,
//! 		2
//! 	],
//! 	"rows": [
//! 		{
//! 			"id": 1
//! 		}
//! 	]
//! }
//! ```
//!
//! ## Layout Rules
//!
//! - Sections are written in the order items, child objects, item lists,
//!   object lists; each in ascending key order
//! - Each entry sits on its own line, indented one level deeper than the
//!   enclosing brace
//! - Every entry except the last one of the object is followed by `,\n`
//! - Child objects are written under their key; object-list members are
//!   written as bare brace blocks
//! - Strings are quoted verbatim, without escaping
//!
//! The document root is always written without a name.
//!
//! ## Direct Serializer Usage
//!
//! ```rust
//! use dserializer::{DObject, Serializer};
//!
//! let mut obj = DObject::new();
//! obj.set_item("x", 5).unwrap();
//! obj.object_or_default("y").unwrap();
//!
//! let mut serializer = Serializer::new(Vec::new());
//! serializer.serialize_document(&obj).unwrap();
//!
//! let text = String::from_utf8(serializer.into_inner()).unwrap();
//! assert_eq!(text, "{\n\t\"x\": 5,\n\t\"y\": {\n\n\t}\n}");
//! ```

use crate::{DObject, Error, FormatOptions, Result, Variant};
use std::io;

/// Writes [`DObject`] trees to an [`io::Write`] sink.
///
/// The serializer holds no state between calls beyond its writer and options.
pub struct Serializer<W> {
    writer: W,
    indent: String,
    trailing_newline: bool,
}

impl<W: io::Write> Serializer<W> {
    /// Creates a serializer with default [`FormatOptions`].
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, &FormatOptions::default())
    }

    pub fn with_options(writer: W, options: &FormatOptions) -> Self {
        Serializer {
            writer,
            indent: options.indent.unit(),
            trailing_newline: options.trailing_newline,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Writes `root` as a complete document: an unnamed block at level 0,
    /// whatever the root's own name is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn serialize_document(&mut self, root: &DObject) -> Result<()> {
        self.write_object(root, 0)?;
        if self.trailing_newline {
            self.writer.write_all(b"\n")?;
        }
        Ok(())
    }

    /// Writes `object` as an unnamed brace block at `level`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the writer fails.
    pub fn write_object(&mut self, object: &DObject, level: usize) -> Result<()> {
        self.write_indent(level)?;
        self.write_block(object, level)
    }

    /// Writes `object` as a `"name": { ... }` member at `level`, using the
    /// object's own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnnamedObject`] if the object has no name, or
    /// [`Error::Io`] if the writer fails.
    pub fn write_named_object(&mut self, object: &DObject, level: usize) -> Result<()> {
        if object.object_name().is_empty() {
            return Err(Error::UnnamedObject);
        }
        self.write_member(object.object_name(), object, level)
    }

    fn write_member(&mut self, key: &str, object: &DObject, level: usize) -> Result<()> {
        self.write_indent(level)?;
        self.write_key(key)?;
        self.write_block(object, level)
    }

    // Positioned after the indent (and key, if any) of the opening line.
    fn write_block(&mut self, object: &DObject, level: usize) -> Result<()> {
        self.writer.write_all(b"{\n")?;
        self.write_entries(object, level + 1)?;
        self.writer.write_all(b"\n")?;
        self.write_indent(level)?;
        self.writer.write_all(b"}")?;
        Ok(())
    }

    fn write_entries(&mut self, object: &DObject, level: usize) -> Result<()> {
        let total = object.len();
        let mut written = 0;

        for (key, value) in object.items() {
            self.write_indent(level)?;
            self.write_key(key)?;
            self.write_variant(value)?;
            written += 1;
            self.write_separator(written < total)?;
        }

        for (key, child) in object.objects() {
            self.write_member(key, child, level)?;
            written += 1;
            self.write_separator(written < total)?;
        }

        for (key, list) in object.item_lists() {
            self.write_indent(level)?;
            self.write_key(key)?;
            self.writer.write_all(b"[\n")?;
            for (i, value) in list.iter().enumerate() {
                self.write_indent(level + 1)?;
                self.write_variant(value)?;
                self.write_separator(i + 1 < list.len())?;
            }
            self.close_list(level)?;
            written += 1;
            self.write_separator(written < total)?;
        }

        for (key, list) in object.object_lists() {
            self.write_indent(level)?;
            self.write_key(key)?;
            self.writer.write_all(b"[\n")?;
            for (i, member) in list.iter().enumerate() {
                self.write_object(member, level + 1)?;
                self.write_separator(i + 1 < list.len())?;
            }
            self.close_list(level)?;
            written += 1;
            self.write_separator(written < total)?;
        }

        Ok(())
    }

    fn close_list(&mut self, level: usize) -> Result<()> {
        self.writer.write_all(b"\n")?;
        self.write_indent(level)?;
        self.writer.write_all(b"]")?;
        Ok(())
    }

    #[inline]
    fn write_separator(&mut self, more: bool) -> Result<()> {
        if more {
            self.writer.write_all(b",\n")?;
        }
        Ok(())
    }

    #[inline]
    fn write_indent(&mut self, level: usize) -> Result<()> {
        for _ in 0..level {
            self.writer.write_all(self.indent.as_bytes())?;
        }
        Ok(())
    }

    #[inline]
    fn write_key(&mut self, key: &str) -> Result<()> {
        write!(self.writer, "\"{}\": ", key)?;
        Ok(())
    }

    fn write_variant(&mut self, value: &Variant) -> Result<()> {
        match value {
            Variant::Empty => self.writer.write_all(b"null")?,
            Variant::String(s) => write!(self.writer, "\"{}\"", s)?,
            Variant::Boolean(b) => self
                .writer
                .write_all(if *b { b"true" as &[u8] } else { b"false" })?,
            Variant::Integer(i) => write!(self.writer, "{}", i)?,
            Variant::Double(d) => write!(self.writer, "{}", d)?,
        }
        Ok(())
    }
}
