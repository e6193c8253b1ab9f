//! git::reference
//!
//! Named pointers to objects or to other references.
//!
//! A [`Reference`] is an owned value: dropping it releases the native
//! handle, and nothing has to be freed by hand.

use super::commit::Commit;
use super::error::{GitError, Result};
use super::object::{Object, ObjectKind};
use super::oid::Oid;

/// Whether a reference names an object directly or another reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReferenceKind {
    /// Points at an object identifier.
    Direct,
    /// Points at another reference by name (like `HEAD` → `refs/heads/main`).
    Symbolic,
}

/// A looked-up reference.
pub struct Reference<'r> {
    inner: git2::Reference<'r>,
}

impl<'r> Reference<'r> {
    pub(crate) fn new(inner: git2::Reference<'r>) -> Self {
        Self { inner }
    }

    /// Full name, such as `refs/heads/main`.
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.inner.name_bytes()).into_owned()
    }

    /// Short human form, such as `main`.
    pub fn shorthand(&self) -> String {
        String::from_utf8_lossy(self.inner.shorthand_bytes()).into_owned()
    }

    pub fn kind(&self) -> ReferenceKind {
        match self.inner.kind() {
            Some(git2::ReferenceType::Symbolic) => ReferenceKind::Symbolic,
            _ => ReferenceKind::Direct,
        }
    }

    /// Target identifier of a direct reference.
    pub fn target(&self) -> Option<Oid> {
        self.inner.target().map(Oid::from_git2)
    }

    /// Target name of a symbolic reference.
    pub fn symbolic_target(&self) -> Option<String> {
        self.inner
            .symbolic_target_bytes()
            .map(|t| String::from_utf8_lossy(t).into_owned())
    }

    pub fn is_branch(&self) -> bool {
        self.inner.is_branch()
    }

    pub fn is_tag(&self) -> bool {
        self.inner.is_tag()
    }

    pub fn is_remote(&self) -> bool {
        self.inner.is_remote()
    }

    /// Follow symbolic links until a direct reference is reached.
    pub fn resolve(&self) -> Result<Reference<'r>> {
        self.inner
            .resolve()
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, format!("resolve {}", self.name())))
    }

    /// Follow the reference and any tags until an object of `kind` is reached.
    pub fn peel(&self, kind: ObjectKind) -> Result<Object<'r>> {
        self.inner
            .peel(kind.to_git2())
            .map(Object::new)
            .map_err(|e| GitError::from_git2(e, format!("peel {} to {}", self.name(), kind)))
    }

    /// Follow the reference to the commit it ultimately names.
    pub fn peel_to_commit(&self) -> Result<Commit<'r>> {
        self.inner
            .peel_to_commit()
            .map(Commit::new)
            .map_err(|e| GitError::from_git2(e, format!("peel {} to commit", self.name())))
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Reference<'r> {
        &self.inner
    }
}

impl std::fmt::Debug for Reference<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Reference")
            .field("name", &self.name())
            .field("kind", &self.kind())
            .field("target", &self.target())
            .finish()
    }
}
