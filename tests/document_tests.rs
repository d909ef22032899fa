use dserializer::{DDocument, DObject, Error, FileSystem, FormatOptions, Indent, Variant};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// In-memory file system that records every call made to it.
#[derive(Default)]
struct MemoryFs {
    dirs: BTreeSet<PathBuf>,
    files: Rc<RefCell<BTreeMap<PathBuf, Vec<u8>>>>,
    calls: RefCell<Vec<String>>,
    fail_open: bool,
}

struct MemoryWriter {
    path: PathBuf,
    files: Rc<RefCell<BTreeMap<PathBuf, Vec<u8>>>>,
}

impl io::Write for MemoryWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.files
            .borrow_mut()
            .entry(self.path.clone())
            .or_default()
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl MemoryFs {
    fn contents(&self, path: &str) -> Option<String> {
        self.files
            .borrow()
            .get(Path::new(path))
            .map(|bytes| String::from_utf8(bytes.clone()).unwrap())
    }
}

impl FileSystem for MemoryFs {
    type Writer = MemoryWriter;

    fn exists(&self, path: &Path) -> bool {
        self.calls.borrow_mut().push(format!("exists {}", path.display()));
        self.dirs.contains(path) || self.files.borrow().contains_key(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.calls.borrow_mut().push(format!("is_dir {}", path.display()));
        self.dirs.contains(path)
    }

    fn create(&self, path: &Path) -> io::Result<MemoryWriter> {
        self.calls.borrow_mut().push(format!("create {}", path.display()));
        if self.fail_open {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.files.borrow_mut().insert(path.to_path_buf(), Vec::new());
        Ok(MemoryWriter {
            path: path.to_path_buf(),
            files: Rc::clone(&self.files),
        })
    }
}

fn small_root() -> DObject {
    let mut root = DObject::new();
    root.set_item("x", 5).unwrap();
    root.object_or_default("y").unwrap();
    root
}

#[test]
fn test_save_writes_through_file_system() {
    let doc = DDocument::with_file_system("out.d", small_root(), MemoryFs::default());
    doc.save().unwrap();

    let fs = doc.file_system();
    assert_eq!(
        fs.contents("out.d").unwrap(),
        "{\n\t\"x\": 5,\n\t\"y\": {\n\n\t}\n}"
    );
    assert_eq!(
        *fs.calls.borrow(),
        vec!["exists out.d".to_string(), "create out.d".to_string()]
    );
}

#[test]
fn test_empty_path_touches_nothing() {
    let doc = DDocument::with_file_system("", small_root(), MemoryFs::default());
    assert_eq!(doc.save(), Err(Error::NoFileSpecified));
    assert!(doc.file_system().calls.borrow().is_empty());
}

#[test]
fn test_directory_destination_is_rejected() {
    let mut fs = MemoryFs::default();
    fs.dirs.insert(PathBuf::from("folder"));
    let mut doc = DDocument::with_file_system("folder", small_root(), fs);

    assert_eq!(
        doc.save(),
        Err(Error::InvalidDestination(PathBuf::from("folder")))
    );
    assert!(matches!(doc.load(), Err(Error::InvalidDestination(_))));
    assert!(doc.file_system().files.borrow().is_empty());
}

#[test]
fn test_open_failure_is_io_error() {
    let fs = MemoryFs {
        fail_open: true,
        ..MemoryFs::default()
    };
    let doc = DDocument::with_file_system("locked.d", small_root(), fs);
    match doc.save() {
        Err(Error::Io(msg)) => {
            assert!(msg.contains("locked.d"));
            assert!(msg.contains("read-only"));
        }
        other => panic!("expected Io error, got {:?}", other),
    }
}

#[test]
fn test_save_is_idempotent() {
    let doc = DDocument::with_file_system("twice.d", small_root(), MemoryFs::default());
    doc.save().unwrap();
    let first = doc.file_system().contents("twice.d").unwrap();
    doc.save().unwrap();
    let second = doc.file_system().contents("twice.d").unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_load_returns_in_memory_root() {
    let mut doc = DDocument::with_file_system("state.d", small_root(), MemoryFs::default());
    let root = doc.load().unwrap();
    root.set_item("added", "later").unwrap();
    assert_eq!(doc.object()["added"], Variant::from("later"));
    assert!(doc.file_system().files.borrow().is_empty());
}

#[test]
fn test_save_to_real_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.txt");
    std::fs::write(&path, "old contents that are much longer than the new ones").unwrap();

    let mut doc = DDocument::with_file(&path);
    doc.object_mut().set_item("v", 1).unwrap();
    doc.save().unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "{\n\t\"v\": 1\n}");
}

#[test]
fn test_save_into_real_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let doc = DDocument::with_file_and_object(dir.path(), small_root());
    assert_eq!(
        doc.save(),
        Err(Error::InvalidDestination(dir.path().to_path_buf()))
    );
}

#[test]
fn test_missing_parent_directory_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let doc = DDocument::with_file(dir.path().join("missing").join("doc.txt"));
    assert!(matches!(doc.save(), Err(Error::Io(_))));
}

#[test]
fn test_options_apply_to_save() {
    let doc = DDocument::with_file_system("spaced.d", small_root(), MemoryFs::default())
        .with_options(
            FormatOptions::new()
                .with_indent(Indent::Spaces(4))
                .with_trailing_newline(true),
        );
    doc.save().unwrap();
    assert_eq!(
        doc.file_system().contents("spaced.d").unwrap(),
        "{\n    \"x\": 5,\n    \"y\": {\n\n    }\n}\n"
    );
}

#[test]
fn test_set_object_and_file() {
    let mut doc = DDocument::new();
    doc.set_file("a.d");
    doc.set_object(small_root());
    assert_eq!(doc.file(), Path::new("a.d"));
    assert_eq!(doc.object().len(), 2);
    assert_eq!(doc.render().unwrap(), "{\n\t\"x\": 5,\n\t\"y\": {\n\n\t}\n}");
}
