//! git::repository
//!
//! The aggregation root: open or create a repository, then use it as the
//! factory for every other wrapper type.
//!
//! # Ownership
//!
//! A [`Repository`] holds at most one handle, either owned or borrowed:
//!
//! - **Owned** handles are reference counted. Cloning a `Repository` shares
//!   the handle; the native repository is released when the last clone is
//!   dropped.
//! - **Borrowed** handles belong to someone else (see
//!   [`Repository::borrowed`]) and are never released by this wrapper.
//!
//! Objects looked up through a repository borrow it, so they cannot outlive
//! the handle they came from.
//!
//! # Example
//!
//! ```no_run
//! use gitveneer::git::{Oid, Repository};
//! use std::path::Path;
//!
//! let mut repo = Repository::new();
//! repo.discover_and_open(Path::new("."), false, &[])?;
//!
//! let head = repo.head()?;
//! let commit = head.peel_to_commit()?;
//! println!("{} {}", commit.oid().short(7), commit.short_message(80)?);
//!
//! let blob = repo.create_blob_from_buffer(b"hello\n")?;
//! assert_eq!(repo.lookup_blob(&blob)?.content(), b"hello\n");
//! # Ok::<(), gitveneer::git::GitError>(())
//! ```

use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use super::blob::Blob;
use super::commit::Commit;
use super::config::Config;
use super::database::Database;
use super::error::{GitError, Result};
use super::index::Index;
use super::object::{Object, ObjectKind};
use super::oid::Oid;
use super::reference::Reference;
use super::signature::Signature;
use super::status::{StatusList, StatusOptions};
use super::tag::Tag;
use super::tree::Tree;
use crate::core::config::Settings;
use crate::core::paths::last_path_segment;

/// State of in-progress Git operations.
///
/// This enum represents the various states a repository can be in when an
/// operation is paused (usually due to conflicts).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RepositoryState {
    /// No operation in progress.
    Clean,
    Merge,
    Rebase,
    CherryPick,
    Revert,
    Bisect,
    /// `git am` in progress.
    ApplyMailbox,
}

impl RepositoryState {
    /// Check if any operation is in progress.
    ///
    /// # Example
    ///
    /// ```
    /// use gitveneer::git::RepositoryState;
    ///
    /// assert!(!RepositoryState::Clean.is_in_progress());
    /// assert!(RepositoryState::Merge.is_in_progress());
    /// ```
    pub fn is_in_progress(&self) -> bool {
        !matches!(self, RepositoryState::Clean)
    }

    /// Get a human-readable description of the state.
    pub fn description(&self) -> &'static str {
        match self {
            RepositoryState::Clean => "clean",
            RepositoryState::Merge => "merge",
            RepositoryState::Rebase => "rebase",
            RepositoryState::CherryPick => "cherry-pick",
            RepositoryState::Revert => "revert",
            RepositoryState::Bisect => "bisect",
            RepositoryState::ApplyMailbox => "apply-mailbox",
        }
    }

    fn from_git2(state: git2::RepositoryState) -> Self {
        match state {
            git2::RepositoryState::Clean => RepositoryState::Clean,
            git2::RepositoryState::Merge => RepositoryState::Merge,
            git2::RepositoryState::Rebase
            | git2::RepositoryState::RebaseInteractive
            | git2::RepositoryState::RebaseMerge => RepositoryState::Rebase,
            git2::RepositoryState::CherryPick | git2::RepositoryState::CherryPickSequence => {
                RepositoryState::CherryPick
            }
            git2::RepositoryState::Revert | git2::RepositoryState::RevertSequence => {
                RepositoryState::Revert
            }
            git2::RepositoryState::Bisect => RepositoryState::Bisect,
            git2::RepositoryState::ApplyMailbox | git2::RepositoryState::ApplyMailboxOrRebase => {
                RepositoryState::ApplyMailbox
            }
        }
    }
}

impl std::fmt::Display for RepositoryState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.description())
    }
}

/// The handle a [`Repository`] holds.
#[derive(Clone)]
enum Handle<'h> {
    /// Released when the last clone is dropped.
    Owned(Rc<git2::Repository>),
    /// Lifetime managed by the lender.
    Borrowed(&'h git2::Repository),
}

impl Deref for Handle<'_> {
    type Target = git2::Repository;

    fn deref(&self) -> &git2::Repository {
        match self {
            Handle::Owned(repo) => repo,
            Handle::Borrowed(repo) => repo,
        }
    }
}

/// A repository wrapper.
///
/// Every operation other than the constructors fails with
/// [`GitError::NotOpen`] until [`Repository::open`], [`Repository::init`]
/// or [`Repository::discover_and_open`] has succeeded.
#[derive(Clone, Default)]
pub struct Repository<'h> {
    handle: Option<Handle<'h>>,
}

impl std::fmt::Debug for Repository<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let path = self.handle.as_ref().map(|h| h.path().to_path_buf());
        f.debug_struct("Repository")
            .field("path", &path)
            .field("owned", &self.is_owned())
            .finish()
    }
}

impl Repository<'static> {
    /// An empty wrapper with no handle.
    pub fn new() -> Self {
        Self { handle: None }
    }

    /// Take ownership of an already-opened `git2` repository.
    pub fn from_git2(repo: git2::Repository) -> Self {
        Self {
            handle: Some(Handle::Owned(Rc::new(repo))),
        }
    }
}

impl<'h> Repository<'h> {
    /// Observe a repository owned elsewhere. The wrapper never releases it.
    pub fn borrowed(repo: &'h git2::Repository) -> Self {
        Self {
            handle: Some(Handle::Borrowed(repo)),
        }
    }

    /// Whether a handle is held.
    pub fn is_open(&self) -> bool {
        self.handle.is_some()
    }

    /// Whether the held handle is owned (reference counted) by wrappers.
    pub fn is_owned(&self) -> bool {
        matches!(self.handle, Some(Handle::Owned(_)))
    }

    fn repo(&self) -> Result<&git2::Repository> {
        self.handle.as_deref().ok_or(GitError::NotOpen)
    }

    // =========================================================================
    // Opening and Creation
    // =========================================================================

    /// Walk up from `start` looking for a repository and return the path of
    /// its metadata directory.
    ///
    /// The walk stops at any of `ceiling_dirs` (absolute, symlink-free
    /// paths; `start` itself is always examined). Unless
    /// `across_filesystems` is set, it also stops at a filesystem boundary.
    ///
    /// # Errors
    ///
    /// Native not-found error if no repository is found within bounds.
    pub fn discover(
        start: &Path,
        across_filesystems: bool,
        ceiling_dirs: &[PathBuf],
    ) -> Result<PathBuf> {
        let mut flags = git2::RepositoryOpenFlags::empty();
        if across_filesystems {
            flags |= git2::RepositoryOpenFlags::CROSS_FS;
        }

        let found = git2::Repository::open_ext(start, flags, ceiling_dirs)
            .map_err(|e| GitError::from_git2(e, format!("discover from {}", start.display())))?;
        let path = found.path().to_path_buf();

        tracing::debug!(start = %start.display(), path = %path.display(), "discovered repository");
        Ok(path)
    }

    /// [`Repository::discover`] with the discovery bounds from `settings`.
    pub fn discover_with(settings: &Settings, start: &Path) -> Result<PathBuf> {
        Self::discover(
            start,
            settings.across_filesystems(),
            settings.ceiling_directories(),
        )
    }

    /// Create a repository at `path` and hold it, releasing any previous handle first.
    pub fn init(&mut self, path: &Path, is_bare: bool) -> Result<()> {
        self.handle = None;

        let repo = if is_bare {
            git2::Repository::init_bare(path)
        } else {
            git2::Repository::init(path)
        }
        .map_err(|e| GitError::from_git2(e, format!("init {}", path.display())))?;

        tracing::debug!(path = %path.display(), bare = is_bare, "initialized repository");
        self.handle = Some(Handle::Owned(Rc::new(repo)));
        Ok(())
    }

    /// Open the repository at `path` and hold it, releasing any previous handle first.
    pub fn open(&mut self, path: &Path) -> Result<()> {
        self.handle = None;

        let repo = git2::Repository::open(path)
            .map_err(|e| GitError::from_git2(e, format!("open {}", path.display())))?;

        tracing::debug!(path = %path.display(), "opened repository");
        self.handle = Some(Handle::Owned(Rc::new(repo)));
        Ok(())
    }

    /// [`Repository::discover`] followed by [`Repository::open`].
    pub fn discover_and_open(
        &mut self,
        start: &Path,
        across_filesystems: bool,
        ceiling_dirs: &[PathBuf],
    ) -> Result<()> {
        let path = Self::discover(start, across_filesystems, ceiling_dirs)?;
        self.open(&path)
    }

    /// [`Repository::discover_and_open`] with the discovery bounds from `settings`.
    pub fn discover_and_open_with(&mut self, settings: &Settings, start: &Path) -> Result<()> {
        let path = Self::discover_with(settings, start)?;
        self.open(&path)
    }

    // =========================================================================
    // State
    // =========================================================================

    /// The reference HEAD resolves to.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::UnbornHead`](super::ErrorKind::UnbornHead) if the current
    /// branch has no commits yet.
    pub fn head(&self) -> Result<Reference<'_>> {
        self.repo()?
            .head()
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, "HEAD"))
    }

    /// Whether HEAD points directly at a commit rather than a branch.
    pub fn is_head_detached(&self) -> Result<bool> {
        self.repo()?
            .head_detached()
            .map_err(|e| GitError::from_git2(e, "head_detached"))
    }

    /// Whether HEAD names a branch that does not exist yet.
    pub fn is_head_orphan(&self) -> Result<bool> {
        match self.repo()?.head() {
            Ok(_) => Ok(false),
            Err(e) if e.code() == git2::ErrorCode::UnbornBranch => Ok(true),
            Err(e) => Err(GitError::from_git2(e, "head_orphan")),
        }
    }

    /// Whether the repository has no references besides an unborn HEAD.
    pub fn is_empty(&self) -> Result<bool> {
        self.repo()?
            .is_empty()
            .map_err(|e| GitError::from_git2(e, "is_empty"))
    }

    /// Whether the repository has no working tree.
    pub fn is_bare(&self) -> Result<bool> {
        Ok(self.repo()?.is_bare())
    }

    /// In-progress operation, if any.
    pub fn state(&self) -> Result<RepositoryState> {
        Ok(RepositoryState::from_git2(self.repo()?.state()))
    }

    /// Last segment of the repository path (bare) or working directory path.
    ///
    /// libgit2 reports directories with a trailing separator, so for those
    /// this is the empty string; see [`last_path_segment`].
    pub fn name(&self) -> Result<String> {
        let repo = self.repo()?;
        let path = match (repo.is_bare(), repo.workdir()) {
            (false, Some(workdir)) => workdir,
            _ => repo.path(),
        };
        Ok(last_path_segment(&path.to_string_lossy()).to_string())
    }

    /// Path of the metadata directory (`.git/` or the bare repository itself).
    pub fn path(&self) -> Result<&Path> {
        Ok(self.repo()?.path())
    }

    /// Path of the working tree; `None` for a bare repository.
    pub fn work_dir_path(&self) -> Result<Option<&Path>> {
        Ok(self.repo()?.workdir())
    }

    /// The layered configuration (local over global over system).
    pub fn configuration(&self) -> Result<Config> {
        self.repo()?
            .config()
            .map(Config::new)
            .map_err(|e| GitError::from_git2(e, "config"))
    }

    /// Identity for new commits: `user.name`/`user.email` from the
    /// repository configuration, else the fallback in `settings`.
    pub fn default_signature(&self, settings: &Settings) -> Result<Signature> {
        match self.repo()?.signature() {
            Ok(sig) => Ok(Signature::from_git2(&sig)),
            Err(e) if e.code() == git2::ErrorCode::NotFound => match settings.fallback_identity() {
                Some((name, email)) => Ok(Signature::now(name, email)),
                None => Err(GitError::from_git2(e, "default signature")),
            },
            Err(e) => Err(GitError::from_git2(e, "default signature")),
        }
    }

    // =========================================================================
    // References
    // =========================================================================

    /// Reference with exactly this full name.
    pub fn lookup_ref(&self, name: &str) -> Result<Reference<'_>> {
        tracing::trace!(name, "lookup ref");
        self.repo()?
            .find_reference(name)
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_ref {name}")))
    }

    /// Identifier a reference name ultimately resolves to.
    pub fn lookup_ref_oid(&self, name: &str) -> Result<Oid> {
        self.repo()?
            .refname_to_id(name)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("lookup_ref_oid {name}")))
    }

    /// Reference for a short name, tried the way git does (`main` →
    /// `refs/heads/main`, `v1` → `refs/tags/v1`, ...).
    pub fn lookup_shorthand_ref(&self, shorthand: &str) -> Result<Reference<'_>> {
        self.repo()?
            .resolve_reference_from_short_name(shorthand)
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_shorthand_ref {shorthand}")))
    }

    /// Create a direct reference.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Exists`](super::ErrorKind::Exists) if `name` exists and
    /// `overwrite` is false.
    pub fn create_ref(
        &self,
        name: &str,
        oid: &Oid,
        overwrite: bool,
        log_message: &str,
    ) -> Result<Reference<'_>> {
        let reference = self
            .repo()?
            .reference(name, oid.to_git2()?, overwrite, log_message)
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, format!("create_ref {name}")))?;
        tracing::debug!(name, %oid, "created reference");
        Ok(reference)
    }

    /// Create a symbolic reference pointing at `target`.
    pub fn create_symbolic_ref(
        &self,
        name: &str,
        target: &str,
        overwrite: bool,
        log_message: &str,
    ) -> Result<Reference<'_>> {
        let reference = self
            .repo()?
            .reference_symbolic(name, target, overwrite, log_message)
            .map(Reference::new)
            .map_err(|e| GitError::from_git2(e, format!("create_symbolic_ref {name}")))?;
        tracing::debug!(name, target, "created symbolic reference");
        Ok(reference)
    }

    /// Every reference name (branches, tags, remotes, notes, ...). Names that
    /// are not UTF-8 are converted lossily.
    pub fn list_references(&self) -> Result<Vec<String>> {
        let refs = self
            .repo()?
            .references()
            .map_err(|e| GitError::from_git2(e, "list_references"))?;

        let mut names = Vec::new();
        for reference in refs {
            let reference = reference.map_err(|e| GitError::from_git2(e, "list_references"))?;
            names.push(String::from_utf8_lossy(reference.name_bytes()).into_owned());
        }
        Ok(names)
    }

    // =========================================================================
    // Object Lookup
    // =========================================================================

    /// Commit named by a full identifier or unambiguous prefix.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::NotFound`](super::ErrorKind::NotFound) or
    /// [`ErrorKind::Ambiguous`](super::ErrorKind::Ambiguous), both as
    /// [`GitError::Native`].
    pub fn lookup_commit(&self, oid: &Oid) -> Result<Commit<'_>> {
        tracing::trace!(%oid, "lookup commit");
        self.repo()?
            .find_commit_by_prefix(&oid.to_hex())
            .map(Commit::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_commit {oid}")))
    }

    /// Annotated tag named by a full identifier or unambiguous prefix.
    pub fn lookup_tag(&self, oid: &Oid) -> Result<Tag<'_>> {
        tracing::trace!(%oid, "lookup tag");
        self.repo()?
            .find_tag_by_prefix(&oid.to_hex())
            .map(Tag::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_tag {oid}")))
    }

    /// Tree named by a full identifier or unambiguous prefix.
    pub fn lookup_tree(&self, oid: &Oid) -> Result<Tree<'_>> {
        tracing::trace!(%oid, "lookup tree");
        self.repo()?
            .find_object_by_prefix(&oid.to_hex(), Some(ObjectKind::Tree.to_git2()))
            .and_then(|o| o.peel_to_tree())
            .map(Tree::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_tree {oid}")))
    }

    /// Blob named by a full identifier or unambiguous prefix.
    pub fn lookup_blob(&self, oid: &Oid) -> Result<Blob<'_>> {
        tracing::trace!(%oid, "lookup blob");
        self.repo()?
            .find_object_by_prefix(&oid.to_hex(), Some(ObjectKind::Blob.to_git2()))
            .and_then(|o| o.peel_to_blob())
            .map(Blob::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_blob {oid}")))
    }

    /// Object of any type named by a full identifier or unambiguous prefix.
    pub fn lookup_any(&self, oid: &Oid) -> Result<Object<'_>> {
        tracing::trace!(%oid, "lookup object");
        self.repo()?
            .find_object_by_prefix(&oid.to_hex(), Some(ObjectKind::Any.to_git2()))
            .map(Object::new)
            .map_err(|e| GitError::from_git2(e, format!("lookup_any {oid}")))
    }

    // =========================================================================
    // Object Creation
    // =========================================================================

    /// Write a commit of `tree` with `parents` (order kept) and return its id.
    ///
    /// If `ref_name` is non-empty that reference is moved to the new commit;
    /// an empty `ref_name` leaves every reference untouched.
    pub fn create_commit(
        &self,
        ref_name: &str,
        author: &Signature,
        committer: &Signature,
        message: &str,
        tree: &Tree<'_>,
        parents: &[Commit<'_>],
    ) -> Result<Oid> {
        let repo = self.repo()?;
        let author = author.to_git2()?;
        let committer = committer.to_git2()?;
        let parents: Vec<&git2::Commit<'_>> = parents.iter().map(|p| p.data()).collect();
        let update_ref = (!ref_name.is_empty()).then_some(ref_name);

        let oid = repo
            .commit(update_ref, &author, &committer, message, tree.data(), &parents)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("create_commit {ref_name}")))?;

        tracing::debug!(%oid, ref_name, parents = parents.len(), "created commit");
        Ok(oid)
    }

    /// Create a lightweight tag `name` pointing at `target`.
    ///
    /// # Errors
    ///
    /// [`ErrorKind::Exists`](super::ErrorKind::Exists) if the tag exists and
    /// `overwrite` is false.
    pub fn create_tag(&self, name: &str, target: &Object<'_>, overwrite: bool) -> Result<Oid> {
        let oid = self
            .repo()?
            .tag_lightweight(name, target.data(), overwrite)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("create_tag {name}")))?;
        tracing::debug!(name, %oid, "created lightweight tag");
        Ok(oid)
    }

    /// Create an annotated tag object and its `refs/tags/<name>` reference.
    /// Returns the id of the tag object.
    pub fn create_annotated_tag(
        &self,
        name: &str,
        target: &Object<'_>,
        tagger: &Signature,
        message: &str,
        overwrite: bool,
    ) -> Result<Oid> {
        let tagger = tagger.to_git2()?;
        let oid = self
            .repo()?
            .tag(name, target.data(), &tagger, message, overwrite)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("create_tag {name}")))?;
        tracing::debug!(name, %oid, "created annotated tag");
        Ok(oid)
    }

    /// Delete the tag reference `name`.
    pub fn delete_tag(&self, name: &str) -> Result<()> {
        self.repo()?
            .tag_delete(name)
            .map_err(|e| GitError::from_git2(e, format!("delete_tag {name}")))?;
        tracing::debug!(name, "deleted tag");
        Ok(())
    }

    /// Tag names matching the glob `pattern`, in store order.
    pub fn list_tags(&self, pattern: &str) -> Result<Vec<String>> {
        let tags = self
            .repo()?
            .tag_names(Some(pattern))
            .map_err(|e| GitError::from_git2(e, format!("list_tags {pattern}")))?;

        Ok(tags
            .iter_bytes()
            .map(|t| String::from_utf8_lossy(t).into_owned())
            .collect())
    }

    /// Store the file at `path` as a blob.
    pub fn create_blob_from_file(&self, path: &Path) -> Result<Oid> {
        let oid = self
            .repo()?
            .blob_path(path)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("create_blob {}", path.display())))?;
        tracing::debug!(path = %path.display(), %oid, "created blob from file");
        Ok(oid)
    }

    /// Store `buffer` as a blob.
    pub fn create_blob_from_buffer(&self, buffer: &[u8]) -> Result<Oid> {
        let oid = self
            .repo()?
            .blob(buffer)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, "create_blob from buffer"))?;
        tracing::debug!(%oid, len = buffer.len(), "created blob from buffer");
        Ok(oid)
    }

    // =========================================================================
    // Subsystems
    // =========================================================================

    /// The object store.
    pub fn database(&self) -> Result<Database<'_>> {
        self.repo()?
            .odb()
            .map(Database::new)
            .map_err(|e| GitError::from_git2(e, "odb"))
    }

    /// The staging area.
    pub fn index(&self) -> Result<Index> {
        self.repo()?
            .index()
            .map(Index::new)
            .map_err(|e| GitError::from_git2(e, "index"))
    }

    /// Working tree status.
    pub fn status(&self, options: &StatusOptions) -> Result<StatusList> {
        let mut opts = options.to_git2();
        let statuses = self
            .repo()?
            .statuses(Some(&mut opts))
            .map_err(|e| GitError::from_git2(e, "status"))?;
        Ok(StatusList::from_git2(&statuses))
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> Result<&git2::Repository> {
        self.repo()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod repository_state {
        use super::*;

        #[test]
        fn clean_is_not_in_progress() {
            assert!(!RepositoryState::Clean.is_in_progress());
        }

        #[test]
        fn operations_are_in_progress() {
            assert!(RepositoryState::Merge.is_in_progress());
            assert!(RepositoryState::CherryPick.is_in_progress());
            assert!(RepositoryState::Revert.is_in_progress());
            assert!(RepositoryState::Bisect.is_in_progress());
            assert!(RepositoryState::ApplyMailbox.is_in_progress());
            assert!(RepositoryState::Rebase.is_in_progress());
        }

        #[test]
        fn sequences_fold_into_base_state() {
            assert_eq!(
                RepositoryState::from_git2(git2::RepositoryState::RebaseInteractive),
                RepositoryState::Rebase
            );
            assert_eq!(
                RepositoryState::from_git2(git2::RepositoryState::CherryPickSequence),
                RepositoryState::CherryPick
            );
        }

        #[test]
        fn display_formatting() {
            assert_eq!(RepositoryState::Clean.to_string(), "clean");
            assert_eq!(RepositoryState::CherryPick.to_string(), "cherry-pick");
        }
    }

    mod not_open {
        use super::*;

        #[test]
        fn operations_fail_before_open() {
            let repo = Repository::new();
            assert!(!repo.is_open());
            assert!(matches!(repo.head(), Err(GitError::NotOpen)));
            assert!(matches!(repo.is_bare(), Err(GitError::NotOpen)));
            assert!(matches!(repo.name(), Err(GitError::NotOpen)));
            assert!(matches!(repo.list_tags("*"), Err(GitError::NotOpen)));
            assert!(matches!(
                repo.create_blob_from_buffer(b"x"),
                Err(GitError::NotOpen)
            ));
        }

        #[test]
        fn default_is_empty() {
            let repo: Repository<'static> = Repository::default();
            assert!(!repo.is_open());
            assert!(!repo.is_owned());
        }
    }

    mod handle {
        use super::*;

        #[test]
        fn clones_share_owned_handle() {
            let dir = tempfile::TempDir::new().unwrap();
            let mut repo = Repository::new();
            repo.init(dir.path(), false).unwrap();

            let copy = repo.clone();
            let (Some(Handle::Owned(a)), Some(Handle::Owned(b))) = (&repo.handle, &copy.handle)
            else {
                panic!("expected owned handles");
            };
            assert!(Rc::ptr_eq(a, b));
            assert_eq!(Rc::strong_count(a), 2);

            drop(repo);
            assert!(copy.is_open());
            assert_eq!(copy.path().unwrap(), copy.data().unwrap().path());
        }

        #[test]
        fn reopen_releases_previous_handle() {
            let first = tempfile::TempDir::new().unwrap();
            let second = tempfile::TempDir::new().unwrap();
            let mut repo = Repository::new();
            repo.init(first.path(), true).unwrap();
            let weak = match &repo.handle {
                Some(Handle::Owned(rc)) => Rc::downgrade(rc),
                _ => panic!("expected owned handle"),
            };

            repo.init(second.path(), true).unwrap();
            assert!(weak.upgrade().is_none());
        }

        #[test]
        fn borrowed_is_not_owned() {
            let dir = tempfile::TempDir::new().unwrap();
            let native = git2::Repository::init(dir.path()).unwrap();
            {
                let repo = Repository::borrowed(&native);
                assert!(repo.is_open());
                assert!(!repo.is_owned());
                assert!(!repo.is_bare().unwrap());
            }
            assert!(native.is_empty().unwrap());
        }

        #[test]
        fn failed_open_leaves_wrapper_closed() {
            let good = tempfile::TempDir::new().unwrap();
            let missing = good.path().join("does-not-exist");
            let mut repo = Repository::new();
            repo.init(good.path(), false).unwrap();

            assert!(repo.open(&missing).is_err());
            assert!(!repo.is_open());
        }
    }
}
