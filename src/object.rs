//! The document tree node.
//!
//! A [`DObject`] holds four sorted storage categories:
//!
//! - **items**: name → [`Variant`]
//! - **objects**: name → child [`DObject`]
//! - **item lists**: name → `Vec<Variant>`
//! - **object lists**: name → `Vec<DObject>`
//!
//! All four share one [`NameRegistry`], so a name is unique across the whole
//! object. Children are owned by value; the tree has no shared nodes and no
//! cycles.
//!
//! ## Two Access Modes
//!
//! Every category has a strict lookup that returns `Option` and an upsert
//! (`*_or_default`) that creates the entry with a default value when it is
//! missing:
//!
//! ```rust
//! use dserializer::{DObject, Variant};
//!
//! let mut obj = DObject::new();
//! assert!(obj.item("z").is_none());
//!
//! *obj.item_or_default("z").unwrap() = Variant::from(3);
//! assert_eq!(obj.item("z"), Some(&Variant::Integer(3)));
//!
//! // Assigning through an index upserts; reading a missing key does not
//! obj["w"] = Variant::from("text");
//! assert!(obj["v"].is_empty());
//! assert!(!obj.contains_name("v"));
//! assert_eq!(obj["w"].as_string().unwrap(), "text");
//! ```
//!
//! ## Child Names
//!
//! The key a child is stored under is what gets serialized. A child's own
//! [`object_name`](DObject::object_name) is independent of that key;
//! [`object_or_default`](DObject::object_or_default) and
//! [`insert_object`](DObject::insert_object) keep them equal, while
//! [`set_object`](DObject::set_object) stores the child as given.

use crate::registry::{validate_name, NameRegistry};
use crate::{Error, Result, Variant};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use std::collections::btree_map::{self, BTreeMap};
use std::ops::{Index, IndexMut};

/// A named node of a document tree.
///
/// # Examples
///
/// ```rust
/// use dserializer::{DObject, Variant};
///
/// let mut point = DObject::with_name("point").unwrap();
/// point.set_item("x", 1).unwrap();
/// point.set_item("y", 2).unwrap();
///
/// let mut root = DObject::new();
/// root.insert_object(point).unwrap();
/// root.set_item_list("tags", vec![Variant::from("a"), Variant::from("b")]).unwrap();
///
/// assert_eq!(root.len(), 2);
/// assert!(root.set_item("tags", true).is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DObject {
    name: String,
    names: NameRegistry,
    items: BTreeMap<String, Variant>,
    objects: BTreeMap<String, DObject>,
    item_lists: BTreeMap<String, Vec<Variant>>,
    object_lists: BTreeMap<String, Vec<DObject>>,
}

impl DObject {
    /// Creates an empty, unnamed object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with the given name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] if the name is empty or contains whitespace.
    pub fn with_name(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_name(&name)?;
        Ok(Self::named(name))
    }

    // Callers have already validated `name`.
    fn named(name: String) -> Self {
        DObject {
            name,
            ..Self::default()
        }
    }

    /// Renames this object.
    ///
    /// Does not move the object inside a parent that already holds it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`]; the previous name is kept.
    pub fn set_object_name(&mut self, name: impl Into<String>) -> Result<()> {
        let name = name.into();
        validate_name(&name)?;
        self.name = name;
        Ok(())
    }

    /// Returns this object's own name, or `""` if it has none.
    #[must_use]
    pub fn object_name(&self) -> &str {
        &self.name
    }

    /// Stores a scalar item under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`]. The object is
    /// unchanged on error.
    pub fn set_item(&mut self, name: &str, value: impl Into<Variant>) -> Result<()> {
        self.names.claim(name)?;
        self.items.insert(name.to_string(), value.into());
        Ok(())
    }

    /// Stores `object` as a child under `name`. The key is authoritative for
    /// serialization; the child's own name is left as it is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`].
    pub fn set_object(&mut self, name: &str, object: DObject) -> Result<()> {
        self.names.claim(name)?;
        self.objects.insert(name.to_string(), object);
        Ok(())
    }

    /// Stores `object` as a child under its own name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnnamedObject`] if the object has no name, otherwise
    /// the same errors as [`set_object`](Self::set_object).
    pub fn insert_object(&mut self, object: DObject) -> Result<()> {
        if object.name.is_empty() {
            return Err(Error::UnnamedObject);
        }
        let name = object.name.clone();
        self.set_object(&name, object)
    }

    /// Stores a list of scalars under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`].
    pub fn set_item_list(&mut self, name: &str, list: Vec<Variant>) -> Result<()> {
        self.names.claim(name)?;
        self.item_lists.insert(name.to_string(), list);
        Ok(())
    }

    /// Stores a list of objects under `name`. List members are serialized
    /// without names.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`] or [`Error::DuplicateName`].
    pub fn set_object_list(&mut self, name: &str, list: Vec<DObject>) -> Result<()> {
        self.names.claim(name)?;
        self.object_lists.insert(name.to_string(), list);
        Ok(())
    }

    /// Returns the item under `name`, creating an [`Variant::Empty`] entry if
    /// there is none.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidName`], or [`Error::DuplicateName`] if `name`
    /// is used by another category.
    pub fn item_or_default(&mut self, name: &str) -> Result<&mut Variant> {
        if !self.items.contains_key(name) {
            self.names.claim(name)?;
        }
        Ok(self.items.entry(name.to_string()).or_default())
    }

    /// Returns the child under `name`, creating an empty child named `name`
    /// if there is none.
    ///
    /// # Errors
    ///
    /// Same as [`item_or_default`](Self::item_or_default).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use dserializer::DObject;
    ///
    /// let mut root = DObject::new();
    /// root.object_or_default("window").unwrap().set_item("width", 800).unwrap();
    /// root.object_or_default("window").unwrap().set_item("height", 600).unwrap();
    ///
    /// let window = root.object("window").unwrap();
    /// assert_eq!(window.object_name(), "window");
    /// assert_eq!(window.len(), 2);
    /// ```
    pub fn object_or_default(&mut self, name: &str) -> Result<&mut DObject> {
        if !self.objects.contains_key(name) {
            self.names.claim(name)?;
        }
        Ok(self
            .objects
            .entry(name.to_string())
            .or_insert_with(|| DObject::named(name.to_string())))
    }

    /// Returns the item list under `name`, creating an empty one if needed.
    ///
    /// # Errors
    ///
    /// Same as [`item_or_default`](Self::item_or_default).
    pub fn item_list_or_default(&mut self, name: &str) -> Result<&mut Vec<Variant>> {
        if !self.item_lists.contains_key(name) {
            self.names.claim(name)?;
        }
        Ok(self.item_lists.entry(name.to_string()).or_default())
    }

    /// Returns the object list under `name`, creating an empty one if needed.
    ///
    /// # Errors
    ///
    /// Same as [`item_or_default`](Self::item_or_default).
    pub fn object_list_or_default(&mut self, name: &str) -> Result<&mut Vec<DObject>> {
        if !self.object_lists.contains_key(name) {
            self.names.claim(name)?;
        }
        Ok(self.object_lists.entry(name.to_string()).or_default())
    }

    #[must_use]
    pub fn item(&self, name: &str) -> Option<&Variant> {
        self.items.get(name)
    }

    pub fn item_mut(&mut self, name: &str) -> Option<&mut Variant> {
        self.items.get_mut(name)
    }

    #[must_use]
    pub fn object(&self, name: &str) -> Option<&DObject> {
        self.objects.get(name)
    }

    pub fn object_mut(&mut self, name: &str) -> Option<&mut DObject> {
        self.objects.get_mut(name)
    }

    #[must_use]
    pub fn item_list(&self, name: &str) -> Option<&Vec<Variant>> {
        self.item_lists.get(name)
    }

    pub fn item_list_mut(&mut self, name: &str) -> Option<&mut Vec<Variant>> {
        self.item_lists.get_mut(name)
    }

    #[must_use]
    pub fn object_list(&self, name: &str) -> Option<&Vec<DObject>> {
        self.object_lists.get(name)
    }

    pub fn object_list_mut(&mut self, name: &str) -> Option<&mut Vec<DObject>> {
        self.object_lists.get_mut(name)
    }

    /// Items in ascending key order.
    pub fn items(&self) -> btree_map::Iter<'_, String, Variant> {
        self.items.iter()
    }

    /// Child objects in ascending key order.
    pub fn objects(&self) -> btree_map::Iter<'_, String, DObject> {
        self.objects.iter()
    }

    /// Item lists in ascending key order.
    pub fn item_lists(&self) -> btree_map::Iter<'_, String, Vec<Variant>> {
        self.item_lists.iter()
    }

    /// Object lists in ascending key order.
    pub fn object_lists(&self) -> btree_map::Iter<'_, String, Vec<DObject>> {
        self.object_lists.iter()
    }

    /// The names used by this object, in the order they were first claimed.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.names.iter()
    }

    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Number of entries across all four categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len() + self.objects.len() + self.item_lists.len() + self.object_lists.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

static EMPTY: Variant = Variant::Empty;

/// Strict read: a missing item reads as [`Variant::Empty`] without being created.
impl Index<&str> for DObject {
    type Output = Variant;

    fn index(&self, name: &str) -> &Variant {
        self.items.get(name).unwrap_or(&EMPTY)
    }
}

/// Shorthand for [`DObject::item_or_default`].
///
/// # Panics
///
/// Panics if `name` is invalid or already used by another category.
impl IndexMut<&str> for DObject {
    fn index_mut(&mut self, name: &str) -> &mut Variant {
        match self.item_or_default(name) {
            Ok(value) => value,
            Err(err) => panic!("cannot index object by {:?}: {}", name, err),
        }
    }
}

/// Serializes as a map holding items, child objects, item lists and object
/// lists, in that order.
impl Serialize for DObject {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in &self.items {
            map.serialize_entry(k, v)?;
        }
        for (k, v) in &self.objects {
            map.serialize_entry(k, v)?;
        }
        for (k, v) in &self.item_lists {
            map.serialize_entry(k, v)?;
        }
        for (k, v) in &self.object_lists {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
