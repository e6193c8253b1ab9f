//! git::object
//!
//! The generic object handle and its checked downcasts.
//!
//! [`Commit`], [`Tree`], [`Blob`] and [`Tag`] are typed views over the same
//! underlying handle kind. Moving from an [`Object`] to one of them checks
//! the runtime type tag and fails with [`GitError::WrongType`] on mismatch.

use serde::{Deserialize, Serialize};

use super::blob::Blob;
use super::commit::Commit;
use super::error::{GitError, Result};
use super::oid::Oid;
use super::tag::Tag;
use super::tree::Tree;

/// Type tag of a stored object.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectKind {
    /// Matches any type in lookups.
    Any,
    Commit,
    Tree,
    Blob,
    Tag,
}

impl ObjectKind {
    /// The name git uses in object headers.
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectKind::Any => "any",
            ObjectKind::Commit => "commit",
            ObjectKind::Tree => "tree",
            ObjectKind::Blob => "blob",
            ObjectKind::Tag => "tag",
        }
    }

    pub(crate) fn from_git2(kind: Option<git2::ObjectType>) -> Self {
        match kind {
            Some(git2::ObjectType::Commit) => ObjectKind::Commit,
            Some(git2::ObjectType::Tree) => ObjectKind::Tree,
            Some(git2::ObjectType::Blob) => ObjectKind::Blob,
            Some(git2::ObjectType::Tag) => ObjectKind::Tag,
            Some(git2::ObjectType::Any) | None => ObjectKind::Any,
        }
    }

    pub(crate) fn to_git2(self) -> git2::ObjectType {
        match self {
            ObjectKind::Any => git2::ObjectType::Any,
            ObjectKind::Commit => git2::ObjectType::Commit,
            ObjectKind::Tree => git2::ObjectType::Tree,
            ObjectKind::Blob => git2::ObjectType::Blob,
            ObjectKind::Tag => git2::ObjectType::Tag,
        }
    }
}

impl std::fmt::Display for ObjectKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any resolved object in the store.
///
/// The lifetime ties the object to the repository handle it was looked up
/// through.
#[derive(Clone)]
pub struct Object<'r> {
    inner: git2::Object<'r>,
}

impl<'r> Object<'r> {
    pub(crate) fn new(inner: git2::Object<'r>) -> Self {
        Self { inner }
    }

    /// Identifier of this object.
    pub fn oid(&self) -> Oid {
        Oid::from_git2(self.inner.id())
    }

    /// Runtime type tag.
    pub fn kind(&self) -> ObjectKind {
        ObjectKind::from_git2(self.inner.kind())
    }

    /// View as a commit.
    ///
    /// # Errors
    ///
    /// [`GitError::WrongType`] if this is not a commit.
    pub fn into_commit(self) -> Result<Commit<'r>> {
        let (oid, actual) = (self.oid(), self.kind());
        self.inner
            .into_commit()
            .map(Commit::new)
            .map_err(|_| wrong_type(oid, ObjectKind::Commit, actual))
    }

    /// View as a tree.
    pub fn into_tree(self) -> Result<Tree<'r>> {
        let (oid, actual) = (self.oid(), self.kind());
        self.inner
            .into_tree()
            .map(Tree::new)
            .map_err(|_| wrong_type(oid, ObjectKind::Tree, actual))
    }

    /// View as a blob.
    pub fn into_blob(self) -> Result<Blob<'r>> {
        let (oid, actual) = (self.oid(), self.kind());
        self.inner
            .into_blob()
            .map(Blob::new)
            .map_err(|_| wrong_type(oid, ObjectKind::Blob, actual))
    }

    /// View as an annotated tag.
    pub fn into_tag(self) -> Result<Tag<'r>> {
        let (oid, actual) = (self.oid(), self.kind());
        self.inner
            .into_tag()
            .map(Tag::new)
            .map_err(|_| wrong_type(oid, ObjectKind::Tag, actual))
    }

    /// Follow tags (and commit → tree) until an object of `kind` is reached.
    pub fn peel(&self, kind: ObjectKind) -> Result<Object<'r>> {
        self.inner
            .peel(kind.to_git2())
            .map(Object::new)
            .map_err(|e| GitError::from_git2(e, format!("peel {} to {}", self.oid(), kind)))
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Object<'r> {
        &self.inner
    }
}

impl std::fmt::Debug for Object<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Object")
            .field("oid", &self.oid())
            .field("kind", &self.kind())
            .finish()
    }
}

fn wrong_type(oid: Oid, expected: ObjectKind, actual: ObjectKind) -> GitError {
    GitError::WrongType {
        oid: oid.to_hex(),
        expected,
        actual,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(ObjectKind::Commit.to_string(), "commit");
        assert_eq!(ObjectKind::Blob.as_str(), "blob");
    }

    #[test]
    fn kind_git2_round_trip() {
        for kind in [
            ObjectKind::Any,
            ObjectKind::Commit,
            ObjectKind::Tree,
            ObjectKind::Blob,
            ObjectKind::Tag,
        ] {
            assert_eq!(ObjectKind::from_git2(Some(kind.to_git2())), kind);
        }
        assert_eq!(ObjectKind::from_git2(None), ObjectKind::Any);
    }

    #[test]
    fn wrong_type_message() {
        let err = wrong_type(Oid::zero(), ObjectKind::Commit, ObjectKind::Blob);
        assert!(err.to_string().contains("is a blob, not a commit"));
    }
}
