//! git::status
//!
//! Working tree status.

use std::path::PathBuf;

/// Options controlling which paths a status query reports.
///
/// # Example
///
/// ```
/// use gitveneer::git::StatusOptions;
///
/// let opts = StatusOptions::new()
///     .include_untracked(true)
///     .pathspec("src/");
/// assert!(opts.includes_untracked());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusOptions {
    include_untracked: bool,
    include_ignored: bool,
    recurse_untracked_dirs: bool,
    pathspecs: Vec<String>,
}

impl StatusOptions {
    /// Tracked changes only, nothing ignored, no path filter.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn include_untracked(mut self, include: bool) -> Self {
        self.include_untracked = include;
        self
    }

    pub fn include_ignored(mut self, include: bool) -> Self {
        self.include_ignored = include;
        self
    }

    /// Report files inside untracked directories instead of the directory.
    pub fn recurse_untracked_dirs(mut self, recurse: bool) -> Self {
        self.recurse_untracked_dirs = recurse;
        self
    }

    /// Restrict the query to paths matching `spec`. May be repeated.
    pub fn pathspec(mut self, spec: impl Into<String>) -> Self {
        self.pathspecs.push(spec.into());
        self
    }

    pub fn includes_untracked(&self) -> bool {
        self.include_untracked
    }

    pub(crate) fn to_git2(&self) -> git2::StatusOptions {
        let mut opts = git2::StatusOptions::new();
        opts.include_untracked(self.include_untracked)
            .include_ignored(self.include_ignored)
            .recurse_untracked_dirs(self.recurse_untracked_dirs);
        for spec in &self.pathspecs {
            opts.pathspec(spec.as_str());
        }
        opts
    }
}

/// Status flags of one path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileStatus {
    bits: u32,
}

impl FileStatus {
    pub(crate) fn from_git2(status: git2::Status) -> Self {
        Self {
            bits: status.bits(),
        }
    }

    fn has(&self, flag: git2::Status) -> bool {
        git2::Status::from_bits_truncate(self.bits).intersects(flag)
    }

    /// Unmodified in both index and working tree.
    pub fn is_current(&self) -> bool {
        self.bits == 0
    }

    pub fn is_index_new(&self) -> bool {
        self.has(git2::Status::INDEX_NEW)
    }

    pub fn is_index_modified(&self) -> bool {
        self.has(git2::Status::INDEX_MODIFIED)
    }

    pub fn is_index_deleted(&self) -> bool {
        self.has(git2::Status::INDEX_DELETED)
    }

    pub fn is_wt_new(&self) -> bool {
        self.has(git2::Status::WT_NEW)
    }

    pub fn is_wt_modified(&self) -> bool {
        self.has(git2::Status::WT_MODIFIED)
    }

    pub fn is_wt_deleted(&self) -> bool {
        self.has(git2::Status::WT_DELETED)
    }

    pub fn is_ignored(&self) -> bool {
        self.has(git2::Status::IGNORED)
    }

    pub fn is_conflicted(&self) -> bool {
        self.has(git2::Status::CONFLICTED)
    }

    /// Any staged change.
    pub fn is_staged(&self) -> bool {
        self.has(
            git2::Status::INDEX_NEW
                | git2::Status::INDEX_MODIFIED
                | git2::Status::INDEX_DELETED
                | git2::Status::INDEX_RENAMED
                | git2::Status::INDEX_TYPECHANGE,
        )
    }

    /// Any unstaged change to a tracked file.
    pub fn is_unstaged(&self) -> bool {
        self.has(
            git2::Status::WT_MODIFIED
                | git2::Status::WT_DELETED
                | git2::Status::WT_RENAMED
                | git2::Status::WT_TYPECHANGE,
        )
    }
}

/// A path with its status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusEntry {
    /// Path relative to the working directory
    pub path: PathBuf,
    pub status: FileStatus,
}

/// Result of a status query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusList {
    entries: Vec<StatusEntry>,
}

impl StatusList {
    pub(crate) fn from_git2(statuses: &git2::Statuses<'_>) -> Self {
        let entries = statuses
            .iter()
            .map(|entry| StatusEntry {
                path: PathBuf::from(String::from_utf8_lossy(entry.path_bytes()).into_owned()),
                status: FileStatus::from_git2(entry.status()),
            })
            .collect();
        Self { entries }
    }

    pub fn entries(&self) -> &[StatusEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Counts of each kind of change.
    pub fn summary(&self) -> StatusSummary {
        let mut summary = StatusSummary::default();
        for entry in &self.entries {
            let status = entry.status;
            if status.is_conflicted() {
                summary.has_conflicts = true;
            }
            if status.is_staged() {
                summary.staged += 1;
            }
            if status.is_unstaged() {
                summary.unstaged += 1;
            }
            if status.is_wt_new() {
                summary.untracked += 1;
            }
        }
        summary
    }
}

/// Counts of changes in the working tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSummary {
    /// Number of staged changes
    pub staged: usize,
    /// Number of unstaged changes to tracked files
    pub unstaged: usize,
    /// Number of untracked files (if requested)
    pub untracked: usize,
    /// Whether there are unresolved conflicts
    pub has_conflicts: bool,
}

impl StatusSummary {
    /// No staged or unstaged changes and no conflicts. Untracked files do
    /// not count.
    pub fn is_clean(&self) -> bool {
        self.staged == 0 && self.unstaged == 0 && !self.has_conflicts
    }

    pub fn has_staged(&self) -> bool {
        self.staged > 0
    }
}
