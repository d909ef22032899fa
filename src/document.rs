//! A root object paired with an output file.
//!
//! [`DDocument::save`] runs in a fixed order:
//!
//! 1. validate the destination path
//! 2. walk the whole tree
//! 3. open the destination, truncating it
//! 4. serialize the root as an unnamed block
//!
//! Names are checked when entries are inserted, so every tree reaching step 2
//! is already well-formed. Nothing is opened until the path check passes. A
//! write failure after the file was opened can still leave it truncated.
//!
//! ## Examples
//!
//! ```rust
//! use dserializer::DDocument;
//!
//! let dir = std::env::temp_dir();
//! let mut doc = DDocument::with_file(dir.join("dserializer-doc-example.txt"));
//! doc.object_mut().set_item("version", 3).unwrap();
//! doc.save().unwrap();
//!
//! // The directory itself is not a valid destination.
//! doc.set_file(dir);
//! assert!(doc.save().is_err());
//! ```

use crate::fs::{FileSystem, StdFileSystem};
use crate::{to_string_with_options, DObject, Error, FormatOptions, Result, Serializer};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, trace};

/// A document: one root [`DObject`] and the path it is saved to.
#[derive(Debug, Clone, Default)]
pub struct DDocument<F = StdFileSystem> {
    file: PathBuf,
    root: DObject,
    options: FormatOptions,
    fs: F,
}

impl DDocument {
    /// Creates a document with no destination and an empty root.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(file: impl Into<PathBuf>) -> Self {
        Self::with_file_and_object(file, DObject::new())
    }

    pub fn with_object(root: DObject) -> Self {
        Self::with_file_and_object(PathBuf::new(), root)
    }

    pub fn with_file_and_object(file: impl Into<PathBuf>, root: DObject) -> Self {
        Self::with_file_system(file, root, StdFileSystem)
    }
}

impl<F: FileSystem> DDocument<F> {
    /// Creates a document that goes through `fs` for every file-system access.
    pub fn with_file_system(file: impl Into<PathBuf>, root: DObject, fs: F) -> Self {
        DDocument {
            file: file.into(),
            root,
            options: FormatOptions::default(),
            fs,
        }
    }

    #[must_use]
    pub fn with_options(mut self, options: FormatOptions) -> Self {
        self.options = options;
        self
    }

    pub fn set_options(&mut self, options: FormatOptions) {
        self.options = options;
    }

    pub fn options(&self) -> &FormatOptions {
        &self.options
    }

    /// Replaces the root object.
    pub fn set_object(&mut self, root: DObject) {
        self.root = root;
    }

    pub fn object(&self) -> &DObject {
        &self.root
    }

    pub fn object_mut(&mut self) -> &mut DObject {
        &mut self.root
    }

    pub fn set_file(&mut self, file: impl Into<PathBuf>) {
        self.file = file.into();
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn file_system(&self) -> &F {
        &self.fs
    }

    /// Writes the root object to the destination file.
    ///
    /// Calling `save` again without changing the tree writes identical bytes.
    ///
    /// # Errors
    ///
    /// - [`Error::NoFileSpecified`] if no path is set
    /// - [`Error::InvalidDestination`] if the path is a directory
    /// - [`Error::Io`] if the file can't be opened or written
    pub fn save(&self) -> Result<()> {
        self.check_file()?;
        let objects = walk_objects(&self.root);

        let file = self.fs.create(&self.file).map_err(|e| {
            Error::io(&format!("Couldn't open file {}: {}", self.file.display(), e))
        })?;
        let mut writer = ByteCounter::new(file);
        Serializer::with_options(&mut writer, &self.options).serialize_document(&self.root)?;
        writer.flush()?;

        debug!(
            path = %self.file.display(),
            bytes = writer.bytes(),
            objects,
            "document saved"
        );
        Ok(())
    }

    /// Returns the in-memory root after validating the destination path.
    ///
    /// The file's contents are not read.
    ///
    /// # Errors
    ///
    /// Same destination errors as [`save`](Self::save).
    pub fn load(&mut self) -> Result<&mut DObject> {
        self.check_file()?;
        trace!(path = %self.file.display(), "document loaded from memory");
        Ok(&mut self.root)
    }

    /// Renders the document as it would be saved, without touching the file.
    ///
    /// # Errors
    ///
    /// Returns an error only if the rendered bytes are not UTF-8.
    pub fn render(&self) -> Result<String> {
        to_string_with_options(&self.root, &self.options)
    }

    fn check_file(&self) -> Result<()> {
        if self.file.as_os_str().is_empty() {
            return Err(Error::NoFileSpecified);
        }
        if !self.fs.exists(&self.file) {
            return Ok(());
        }
        if self.fs.is_dir(&self.file) {
            return Err(Error::InvalidDestination(self.file.clone()));
        }
        Ok(())
    }
}

// Visits every child and every object-list member; returns how many objects
// the tree holds, the root included.
fn walk_objects(object: &DObject) -> usize {
    let mut count = 1;
    for (_, child) in object.objects() {
        count += walk_objects(child);
    }
    for (_, list) in object.object_lists() {
        count += list.iter().map(walk_objects).sum::<usize>();
    }
    trace!(name = object.object_name(), entries = object.len(), "object checked");
    count
}

/// Counts the bytes that reach the wrapped writer.
struct ByteCounter<W> {
    inner: W,
    bytes: usize,
}

impl<W: Write> ByteCounter<W> {
    fn new(inner: W) -> Self {
        ByteCounter { inner, bytes: 0 }
    }

    fn bytes(&self) -> usize {
        self.bytes
    }
}

impl<W: Write> Write for ByteCounter<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.bytes += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}
