//! git::database
//!
//! Direct access to the object store.
//!
//! Reads here bypass the typed views and return raw object bodies. Only
//! full identifiers are accepted.

use super::error::{GitError, Result};
use super::object::ObjectKind;
use super::oid::Oid;

/// An object body as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawObject {
    pub oid: Oid,
    pub kind: ObjectKind,
    pub data: Vec<u8>,
}

/// The repository's object database.
pub struct Database<'r> {
    inner: git2::Odb<'r>,
}

impl<'r> Database<'r> {
    pub(crate) fn new(inner: git2::Odb<'r>) -> Self {
        Self { inner }
    }

    /// Whether an object with this full identifier is stored.
    pub fn exists(&self, oid: &Oid) -> Result<bool> {
        Ok(self.inner.exists(oid.to_git2()?))
    }

    /// Read the type and body of an object.
    pub fn read(&self, oid: &Oid) -> Result<RawObject> {
        let object = self
            .inner
            .read(oid.to_git2()?)
            .map_err(|e| GitError::from_git2(e, format!("odb read {oid}")))?;

        Ok(RawObject {
            oid: Oid::from_git2(object.id()),
            kind: ObjectKind::from_git2(Some(object.kind())),
            data: object.data().to_vec(),
        })
    }

    /// Read only the size and type of an object.
    pub fn read_header(&self, oid: &Oid) -> Result<(usize, ObjectKind)> {
        let (size, kind) = self
            .inner
            .read_header(oid.to_git2()?)
            .map_err(|e| GitError::from_git2(e, format!("odb read_header {oid}")))?;
        Ok((size, ObjectKind::from_git2(Some(kind))))
    }

    /// Store `data` as an object of `kind` and return its identifier.
    pub fn write(&self, kind: ObjectKind, data: &[u8]) -> Result<Oid> {
        let oid = self
            .inner
            .write(kind.to_git2(), data)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("odb write {kind}")))?;
        tracing::debug!(%oid, %kind, len = data.len(), "wrote object");
        Ok(oid)
    }

    /// Identifier `data` would get as an object of `kind`, without storing it.
    pub fn hash(kind: ObjectKind, data: &[u8]) -> Result<Oid> {
        git2::Oid::hash_object(kind.to_git2(), data)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("hash {kind}")))
    }
}

impl std::fmt::Debug for Database<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Database").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_matches_git() {
        // `printf 'hello\n' | git hash-object --stdin`
        let oid = Database::hash(ObjectKind::Blob, b"hello\n").unwrap();
        assert_eq!(oid.to_hex(), "ce013625030ba8dba906f756967f9e9ca394464a");
    }

    #[test]
    fn empty_blob_hash() {
        let oid = Database::hash(ObjectKind::Blob, b"").unwrap();
        assert_eq!(oid.to_hex(), "e69de29bb2d1d6434b8b29ae775ad8c2e48c5391");
    }
}
