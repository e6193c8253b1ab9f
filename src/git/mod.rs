//! git
//!
//! Typed wrappers over libgit2.
//!
//! # Architecture
//!
//! This module is the **only** place that imports `git2`. Everything it
//! exports is either a plain value ([`Oid`], [`Signature`], [`TreeEntry`],
//! ...) or a thin view over a native handle ([`Commit`], [`Tree`],
//! [`Reference`], ...). The content-addressed store, packfiles, the index
//! format and ref resolution all stay inside libgit2.
//!
//! # Lifecycle
//!
//! Obtain a [`Repository`] via [`Repository::init`], [`Repository::open`]
//! or [`Repository::discover_and_open`], then use it as the factory for
//! every other wrapper type. Object views borrow the repository they came
//! from.
//!
//! # Errors
//!
//! Every fallible call returns [`Result`]; native failures carry their
//! libgit2 code and message in [`GitError::Native`], categorized by
//! [`ErrorKind`].
//!
//! # Threading
//!
//! Owned handles are shared with `Rc`, so a [`Repository`] and everything
//! derived from it stay on the thread that created them.

pub mod blob;
pub mod commit;
pub mod config;
pub mod database;
pub mod error;
pub mod index;
pub mod object;
pub mod oid;
pub mod reference;
pub mod repository;
pub mod signature;
pub mod status;
pub mod tag;
pub mod tree;

pub use blob::Blob;
pub use commit::{short_message, Commit};
pub use config::{Config, ConfigEntry};
pub use database::{Database, RawObject};
pub use error::{ErrorKind, GitError, Result};
pub use index::{Index, IndexEntry};
pub use object::{Object, ObjectKind};
pub use oid::Oid;
pub use reference::{Reference, ReferenceKind};
pub use repository::{Repository, RepositoryState};
pub use signature::Signature;
pub use status::{FileStatus, StatusEntry, StatusList, StatusOptions, StatusSummary};
pub use tag::Tag;
pub use tree::{Tree, TreeEntry};
