//! File-system access used by [`DDocument`](crate::DDocument).
//!
//! The document only needs three things from its environment: whether a path
//! exists, whether it is a directory, and a truncating write stream. Put
//! behind the [`FileSystem`] trait so tests and embedders can supply their own.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

pub trait FileSystem {
    type Writer: Write;

    fn exists(&self, path: &Path) -> bool;

    fn is_dir(&self, path: &Path) -> bool;

    /// Opens `path` for writing, creating it or truncating existing contents.
    fn create(&self, path: &Path) -> io::Result<Self::Writer>;
}

/// The real file system, through [`std::fs`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    type Writer = BufWriter<File>;

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn create(&self, path: &Path) -> io::Result<Self::Writer> {
        File::create(path).map(BufWriter::new)
    }
}
