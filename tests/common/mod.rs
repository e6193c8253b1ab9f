//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use gitveneer::git::{Commit, Oid, Repository, Signature};

/// Fixed author so timestamps and offsets are predictable.
pub fn test_signature() -> Signature {
    Signature::new("Test User", "test@example.com", 1_700_000_000, 120)
}

/// A freshly initialized repository in a temp directory.
pub struct TestRepo {
    pub dir: TempDir,
    pub repo: Repository<'static>,
}

impl TestRepo {
    /// Non-bare repository with no commits.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut repo = Repository::new();
        repo.init(dir.path(), false).expect("failed to init repo");
        Self { dir, repo }
    }

    /// Non-bare repository with one commit of `README.md` on HEAD.
    pub fn with_initial_commit() -> (Self, Oid) {
        let test = Self::new();
        let oid = test.commit_file("README.md", "# Test Repo\n", "Initial commit", "HEAD", &[]);
        (test, oid)
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Canonical path, for comparisons and ceiling directories.
    pub fn canonical_path(&self) -> PathBuf {
        self.dir.path().canonicalize().unwrap()
    }

    /// Write `path`, stage it and commit the index with `parents`,
    /// updating `ref_name` (empty for none).
    pub fn commit_file(
        &self,
        path: &str,
        content: &str,
        message: &str,
        ref_name: &str,
        parents: &[Oid],
    ) -> Oid {
        let full = self.path().join(path);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&full, content).unwrap();

        let mut index = self.repo.index().unwrap();
        index.add_path(Path::new(path)).unwrap();
        index.write().unwrap();
        let tree_oid = index.write_tree().unwrap();
        let tree = self.repo.lookup_tree(&tree_oid).unwrap();

        let parents: Vec<Commit<'_>> = parents
            .iter()
            .map(|oid| self.repo.lookup_commit(oid).unwrap())
            .collect();

        let sig = test_signature();
        self.repo
            .create_commit(ref_name, &sig, &sig, message, &tree, &parents)
            .unwrap()
    }
}
