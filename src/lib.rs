//! # dserializer
//!
//! A hierarchical document model with a deterministic text serializer.
//!
//! Build a tree of [`DObject`]s holding named scalar values, child objects and
//! lists, then write it out in a fixed, JSON-like grammar. The same tree always
//! produces the same bytes, whatever order it was built in.
//!
//! ## Key Features
//!
//! - **Four storage categories**: items, child objects, item lists, object lists
//! - **One name per entry**: names are unique across all categories of an object
//! - **Deterministic**: every category is written in ascending key order
//! - **Fail-fast**: bad names are rejected at the call that introduces them
//! - **Checked before writing**: [`DDocument::save`] validates everything before
//!   it opens the destination
//!
//! ## Quick Start
//!
//! ```rust
//! use dserializer::{to_string, DObject, Variant};
//!
//! let mut config = DObject::new();
//! config.set_item("title", "demo").unwrap();
//! config["fullscreen"] = Variant::from(false);
//!
//! let window = config.object_or_default("window").unwrap();
//! window.set_item("width", 1280).unwrap();
//!
//! config
//!     .set_item_list("recent", vec![Variant::from("a.txt"), Variant::from("b.txt")])
//!     .unwrap();
//!
//! let text = to_string(&config).unwrap();
//! assert_eq!(
//!     text,
//!     "{\n\t\"fullscreen\": false,\n\t\"title\": \"demo\",\n\t\"window\": {\n\t\t\"width\": 1280\n\t},\n\t\"recent\": [\n\t\t\"a.txt\",\n\t\t\"b.txt\"\n\t]\n}"
//! );
//! ```
//!
//! ### Saving to a File
//!
//! ```rust
//! use dserializer::DDocument;
//!
//! let path = std::env::temp_dir().join("dserializer-quickstart.txt");
//! let mut doc = DDocument::with_file(&path);
//! doc.object_mut().set_item("answer", 42).unwrap();
//! doc.save().unwrap();
//!
//! assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n\t\"answer\": 42\n}");
//! ```
//!
//! ## Known Limitations
//!
//! - Strings are written verbatim; embedded quotes are not escaped
//! - There is no parser: [`DDocument::load`] returns the in-memory tree
//! - Documents are not safe to save from several threads at once
//!
//! ## Examples
//!
//! See the `demos/` directory:
//!
//! - **`simple.rs`** - Build a small tree and print it
//! - **`nested_objects.rs`** - Child objects, lists and saving to a file
//! - **`custom_options.rs`** - Indentation and trailing newline options
//!
//! Run any example with: `cargo run --example <name>`

pub mod document;
pub mod error;
pub mod fs;
pub mod object;
pub mod options;
pub mod registry;
pub mod ser;
pub mod variant;

pub use document::DDocument;
pub use error::{Error, Result};
pub use fs::{FileSystem, StdFileSystem};
pub use object::DObject;
pub use options::{FormatOptions, Indent};
pub use registry::{validate_name, NameRegistry};
pub use ser::Serializer;
pub use variant::{Variant, VariantType};

use std::io;

/// Render `root` as a document string with default options.
///
/// # Examples
///
/// ```rust
/// use dserializer::{to_string, DObject};
///
/// let mut obj = DObject::new();
/// obj.set_item("b", 2).unwrap();
/// obj.set_item("a", 1).unwrap();
/// assert_eq!(to_string(&obj).unwrap(), "{\n\t\"a\": 1,\n\t\"b\": 2\n}");
/// ```
///
/// # Errors
///
/// Only fails if the output is not valid UTF-8, which cannot happen for trees
/// built from Rust strings.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string(root: &DObject) -> Result<String> {
    to_string_with_options(root, &FormatOptions::default())
}

/// Render `root` as a document string with custom options.
///
/// # Errors
///
/// See [`to_string`].
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_string_with_options(root: &DObject, options: &FormatOptions) -> Result<String> {
    let mut buffer = Vec::with_capacity(256);
    to_writer_with_options(&mut buffer, root, options)?;
    String::from_utf8(buffer).map_err(Error::custom)
}

/// Write `root` as a document to `writer` with default options.
///
/// # Examples
///
/// ```rust
/// use dserializer::{to_writer, DObject};
///
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &DObject::new()).unwrap();
/// assert_eq!(buffer, b"{\n\n}");
/// ```
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer<W>(writer: W, root: &DObject) -> Result<()>
where
    W: io::Write,
{
    to_writer_with_options(writer, root, &FormatOptions::default())
}

/// Write `root` as a document to `writer` with custom options.
///
/// # Errors
///
/// Returns [`Error::Io`] if writing fails.
#[must_use = "this returns the result of the operation, errors must be handled"]
pub fn to_writer_with_options<W>(writer: W, root: &DObject, options: &FormatOptions) -> Result<()>
where
    W: io::Write,
{
    Serializer::with_options(writer, options).serialize_document(root)
}
