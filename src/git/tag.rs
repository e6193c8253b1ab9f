//! git::tag
//!
//! Annotated tag objects. Lightweight tags are plain references and are
//! read through [`Reference`](super::Reference).

use super::error::{GitError, Result};
use super::object::{Object, ObjectKind};
use super::oid::Oid;
use super::signature::Signature;

/// A resolved annotated tag.
#[derive(Clone)]
pub struct Tag<'r> {
    inner: git2::Tag<'r>,
}

impl<'r> Tag<'r> {
    pub(crate) fn new(inner: git2::Tag<'r>) -> Self {
        Self { inner }
    }

    pub fn oid(&self) -> Oid {
        Oid::from_git2(self.inner.id())
    }

    /// Tag name without the `refs/tags/` prefix.
    pub fn name(&self) -> String {
        String::from_utf8_lossy(self.inner.name_bytes()).into_owned()
    }

    /// Annotation message, if any.
    pub fn message(&self) -> Option<String> {
        self.inner
            .message_bytes()
            .map(|m| String::from_utf8_lossy(m).into_owned())
    }

    /// Tagger identity. Old tags may not record one.
    pub fn tagger(&self) -> Option<Signature> {
        self.inner.tagger().map(|s| Signature::from_git2(&s))
    }

    /// Identifier of the tagged object.
    pub fn target_id(&self) -> Oid {
        Oid::from_git2(self.inner.target_id())
    }

    /// Type of the tagged object.
    pub fn target_kind(&self) -> ObjectKind {
        ObjectKind::from_git2(self.inner.target_type())
    }

    /// Resolve the tagged object.
    pub fn target(&self) -> Result<Object<'r>> {
        self.inner
            .target()
            .map(Object::new)
            .map_err(|e| GitError::from_git2(e, format!("target of tag {}", self.name())))
    }

    pub fn as_object(&self) -> Object<'r> {
        Object::new(self.inner.as_object().clone())
    }

    pub fn into_object(self) -> Object<'r> {
        Object::new(self.inner.into_object())
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Tag<'r> {
        &self.inner
    }
}

impl std::fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Tag")
            .field("oid", &self.oid())
            .field("name", &self.name())
            .field("target", &self.target_id())
            .finish()
    }
}
