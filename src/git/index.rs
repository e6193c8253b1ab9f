//! git::index
//!
//! The staging area.
//!
//! Changes made through [`Index`] stay in memory until [`Index::write`]
//! persists them. [`Index::write_tree`] turns the staged state into a tree
//! object suitable for [`Repository::create_commit`](super::Repository::create_commit).

use std::path::{Path, PathBuf};

use super::error::{GitError, Result};
use super::oid::Oid;

/// A staged path and the blob it points at.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexEntry {
    /// Path relative to the working directory
    pub path: PathBuf,
    /// Staged blob
    pub oid: Oid,
    /// Unix-style file mode
    pub mode: u32,
    /// File size recorded at staging time
    pub file_size: u32,
}

impl IndexEntry {
    fn from_git2(entry: &git2::IndexEntry) -> Self {
        Self {
            path: PathBuf::from(String::from_utf8_lossy(&entry.path).into_owned()),
            oid: Oid::from_git2(entry.id),
            mode: entry.mode,
            file_size: entry.file_size,
        }
    }
}

/// A repository's index.
pub struct Index {
    inner: git2::Index,
}

impl Index {
    pub(crate) fn new(inner: git2::Index) -> Self {
        Self { inner }
    }

    /// Number of staged entries.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// All entries in path order.
    pub fn entries(&self) -> Vec<IndexEntry> {
        self.inner.iter().map(|e| IndexEntry::from_git2(&e)).collect()
    }

    /// Stage-0 entry for `path`, if staged.
    pub fn entry(&self, path: &Path) -> Option<IndexEntry> {
        self.inner.get_path(path, 0).map(|e| IndexEntry::from_git2(&e))
    }

    /// Stage the working-tree file at `path` (relative to the working directory).
    pub fn add_path(&mut self, path: &Path) -> Result<()> {
        self.inner
            .add_path(path)
            .map_err(|e| GitError::from_git2(e, format!("index add {}", path.display())))
    }

    /// Unstage `path`.
    pub fn remove_path(&mut self, path: &Path) -> Result<()> {
        self.inner
            .remove_path(path)
            .map_err(|e| GitError::from_git2(e, format!("index remove {}", path.display())))
    }

    /// Reload from disk. With `force`, discard unsaved in-memory changes.
    pub fn read(&mut self, force: bool) -> Result<()> {
        self.inner
            .read(force)
            .map_err(|e| GitError::from_git2(e, "index read"))
    }

    /// Persist the in-memory index.
    pub fn write(&mut self) -> Result<()> {
        self.inner
            .write()
            .map_err(|e| GitError::from_git2(e, "index write"))
    }

    /// Write the staged state as tree objects and return the root tree id.
    pub fn write_tree(&mut self) -> Result<Oid> {
        self.inner
            .write_tree()
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, "index write_tree"))
    }

    /// Remove every entry (in memory).
    pub fn clear(&mut self) -> Result<()> {
        self.inner
            .clear()
            .map_err(|e| GitError::from_git2(e, "index clear"))
    }

    pub fn has_conflicts(&self) -> bool {
        self.inner.has_conflicts()
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&mut self) -> &mut git2::Index {
        &mut self.inner
    }
}

impl std::fmt::Debug for Index {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Index").field("len", &self.len()).finish()
    }
}
