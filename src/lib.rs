//! gitveneer - typed, value-like wrappers over libgit2
//!
//! gitveneer exposes repositories, commits, tags, trees, blobs and
//! references as Rust types with owned lifetimes and `Result`-based error
//! reporting. The object store, packfiles, the index format and ref
//! resolution are libgit2's; this crate forwards calls, translates failures
//! and marshals strings and lists.
//!
//! # Architecture
//!
//! - [`git`] - The wrappers; the only module that talks to libgit2
//! - [`core`] - Crate settings and path helpers
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```no_run
//! use gitveneer::git::{Repository, Signature};
//! use std::path::Path;
//!
//! let mut repo = Repository::new();
//! repo.init(Path::new("/tmp/example"), false)?;
//!
//! let mut index = repo.index()?;
//! let tree = repo.lookup_tree(&index.write_tree()?)?;
//! let me = Signature::now("Ada", "ada@example.com");
//! let oid = repo.create_commit("HEAD", &me, &me, "Initial commit", &tree, &[])?;
//!
//! assert_eq!(repo.lookup_commit(&oid)?.parent_count(), 0);
//! # Ok::<(), gitveneer::git::GitError>(())
//! ```

pub mod core;
pub mod git;
pub mod logging;
