//! git::blob
//!
//! File contents.

use super::object::Object;
use super::oid::Oid;

/// A resolved blob object.
#[derive(Clone)]
pub struct Blob<'r> {
    inner: git2::Blob<'r>,
}

impl<'r> Blob<'r> {
    pub(crate) fn new(inner: git2::Blob<'r>) -> Self {
        Self { inner }
    }

    pub fn oid(&self) -> Oid {
        Oid::from_git2(self.inner.id())
    }

    /// Stored bytes, unmodified.
    pub fn content(&self) -> &[u8] {
        self.inner.content()
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.inner.size()
    }

    /// libgit2's binary heuristic (NUL bytes or mostly non-printable).
    pub fn is_binary(&self) -> bool {
        self.inner.is_binary()
    }

    pub fn as_object(&self) -> Object<'r> {
        Object::new(self.inner.as_object().clone())
    }

    pub fn into_object(self) -> Object<'r> {
        Object::new(self.inner.into_object())
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Blob<'r> {
        &self.inner
    }
}

impl std::fmt::Debug for Blob<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Blob")
            .field("oid", &self.oid())
            .field("size", &self.size())
            .finish()
    }
}
