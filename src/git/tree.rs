//! git::tree
//!
//! Directory snapshots.

use std::path::Path;

use super::error::{GitError, Result};
use super::object::{Object, ObjectKind};
use super::oid::Oid;

/// One named slot in a tree, copied out as a plain value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeEntry {
    /// File or directory name (not a path)
    pub name: String,
    /// Identifier of the blob, tree or commit the entry names
    pub oid: Oid,
    /// Type of the target object
    pub kind: ObjectKind,
    /// Unix-style file mode (`0o100644`, `0o040000`, ...)
    pub filemode: i32,
}

impl TreeEntry {
    fn from_git2(entry: &git2::TreeEntry<'_>) -> Self {
        Self {
            name: String::from_utf8_lossy(entry.name_bytes()).into_owned(),
            oid: Oid::from_git2(entry.id()),
            kind: ObjectKind::from_git2(entry.kind()),
            filemode: entry.filemode(),
        }
    }

    /// Whether the entry is a subdirectory.
    pub fn is_tree(&self) -> bool {
        self.kind == ObjectKind::Tree
    }
}

/// A resolved tree object.
#[derive(Clone)]
pub struct Tree<'r> {
    inner: git2::Tree<'r>,
}

impl<'r> Tree<'r> {
    pub(crate) fn new(inner: git2::Tree<'r>) -> Self {
        Self { inner }
    }

    pub fn oid(&self) -> Oid {
        Oid::from_git2(self.inner.id())
    }

    /// Number of direct entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Entry at position `index`, in git's sorted order.
    pub fn entry(&self, index: usize) -> Option<TreeEntry> {
        self.inner.get(index).map(|e| TreeEntry::from_git2(&e))
    }

    /// Direct entry called `name`.
    pub fn entry_by_name(&self, name: &str) -> Option<TreeEntry> {
        self.inner.get_name(name).map(|e| TreeEntry::from_git2(&e))
    }

    /// Entry at a slash-separated `path` below this tree.
    ///
    /// # Errors
    ///
    /// Native not-found error if any component is missing.
    pub fn entry_by_path(&self, path: &Path) -> Result<TreeEntry> {
        self.inner
            .get_path(path)
            .map(|e| TreeEntry::from_git2(&e))
            .map_err(|e| GitError::from_git2(e, format!("tree path {}", path.display())))
    }

    /// All direct entries in order.
    pub fn entries(&self) -> Vec<TreeEntry> {
        self.inner.iter().map(|e| TreeEntry::from_git2(&e)).collect()
    }

    pub fn as_object(&self) -> Object<'r> {
        Object::new(self.inner.as_object().clone())
    }

    pub fn into_object(self) -> Object<'r> {
        Object::new(self.inner.into_object())
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Tree<'r> {
        &self.inner
    }
}

impl std::fmt::Debug for Tree<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tree")
            .field("oid", &self.oid())
            .field("len", &self.len())
            .finish()
    }
}
