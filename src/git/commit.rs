//! git::commit
//!
//! Read-only view of a resolved commit.
//!
//! Commits never change once written. New commits are produced through
//! [`Repository::create_commit`](super::Repository::create_commit).

use chrono::{DateTime, FixedOffset};

use super::error::{GitError, Result};
use super::object::Object;
use super::oid::Oid;
use super::signature::Signature;
use super::tree::Tree;
use crate::core::config::Settings;

/// A commit backed by an already-resolved object handle.
#[derive(Clone)]
pub struct Commit<'r> {
    inner: git2::Commit<'r>,
}

impl<'r> Commit<'r> {
    pub(crate) fn new(inner: git2::Commit<'r>) -> Self {
        Self { inner }
    }

    /// Identifier of this commit.
    pub fn oid(&self) -> Oid {
        Oid::from_git2(self.inner.id())
    }

    /// Full message exactly as stored.
    ///
    /// # Errors
    ///
    /// [`GitError::InvalidUtf8`] if the stored bytes are not UTF-8; use
    /// [`Commit::message_bytes`] for those.
    pub fn message(&self) -> Result<&str> {
        std::str::from_utf8(self.inner.message_bytes()).map_err(|_| GitError::InvalidUtf8 {
            what: format!("message of commit {}", self.oid()),
        })
    }

    /// Full message as raw bytes.
    pub fn message_bytes(&self) -> &[u8] {
        self.inner.message_bytes()
    }

    /// At most `max_len` characters of the message, cut at the first line
    /// break within them.
    pub fn short_message(&self, max_len: usize) -> Result<&str> {
        Ok(short_message(self.message()?, max_len))
    }

    /// [`Commit::short_message`] with the configured default length.
    pub fn short_message_default(&self, settings: &Settings) -> Result<&str> {
        self.short_message(settings.short_message_len())
    }

    /// First paragraph of the message with line breaks folded, as git shows it.
    pub fn summary(&self) -> Option<&str> {
        self.inner.summary()
    }

    /// Author timestamp in seconds since the epoch.
    pub fn date_time(&self) -> i64 {
        self.inner.author().when().seconds()
    }

    /// Author UTC offset in minutes.
    pub fn time_offset(&self) -> i32 {
        self.inner.author().when().offset_minutes()
    }

    /// Author timestamp in the timezone it was recorded in.
    pub fn author_time(&self) -> Option<DateTime<FixedOffset>> {
        self.author().date_time()
    }

    pub fn author(&self) -> Signature {
        Signature::from_git2(&self.inner.author())
    }

    pub fn committer(&self) -> Signature {
        Signature::from_git2(&self.inner.committer())
    }

    /// Resolve the tree this commit snapshots.
    pub fn tree(&self) -> Result<Tree<'r>> {
        self.inner
            .tree()
            .map(Tree::new)
            .map_err(|e| GitError::from_git2(e, format!("tree of commit {}", self.oid())))
    }

    /// Identifier of the tree, without resolving it.
    pub fn tree_id(&self) -> Oid {
        Oid::from_git2(self.inner.tree_id())
    }

    /// Number of parents: 0 for a root commit, 2 or more for a merge.
    pub fn parent_count(&self) -> usize {
        self.inner.parent_count()
    }

    /// Resolve the `n`-th parent (0-indexed).
    ///
    /// # Errors
    ///
    /// [`GitError::ParentOutOfRange`] if `n >= parent_count()`; native
    /// errors if the parent cannot be loaded.
    pub fn parent(&self, n: usize) -> Result<Commit<'r>> {
        self.check_parent_index(n)?;
        self.inner
            .parent(n)
            .map(Commit::new)
            .map_err(|e| GitError::from_git2(e, format!("parent {} of commit {}", n, self.oid())))
    }

    /// Identifier of the `n`-th parent, without resolving it.
    pub fn parent_id(&self, n: usize) -> Result<Oid> {
        self.check_parent_index(n)?;
        self.inner
            .parent_id(n)
            .map(Oid::from_git2)
            .map_err(|e| GitError::from_git2(e, format!("parent {} of commit {}", n, self.oid())))
    }

    /// All parents in stored order.
    pub fn parents(&self) -> Result<Vec<Commit<'r>>> {
        (0..self.parent_count()).map(|n| self.parent(n)).collect()
    }

    /// Generic view of the same handle.
    pub fn as_object(&self) -> Object<'r> {
        Object::new(self.inner.as_object().clone())
    }

    pub fn into_object(self) -> Object<'r> {
        Object::new(self.inner.into_object())
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&self) -> &git2::Commit<'r> {
        &self.inner
    }

    fn check_parent_index(&self, n: usize) -> Result<()> {
        let count = self.parent_count();
        if n >= count {
            return Err(GitError::ParentOutOfRange {
                oid: self.oid().to_hex(),
                index: n,
                count,
            });
        }
        Ok(())
    }
}

impl std::fmt::Debug for Commit<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Commit")
            .field("oid", &self.oid())
            .field("parents", &self.parent_count())
            .finish()
    }
}

/// Take the first `max_len` characters of `message`, then cut at the first
/// `\r` or `\n` inside that prefix.
///
/// # Example
///
/// ```
/// use gitveneer::git::short_message;
///
/// assert_eq!(short_message("Fix bug\n\nDetails", 80), "Fix bug");
/// assert_eq!(short_message("Fix bug in parser", 7), "Fix bug");
/// assert_eq!(short_message("Fix\r\nbug", 80), "Fix");
/// ```
pub fn short_message(message: &str, max_len: usize) -> &str {
    let end = message
        .char_indices()
        .nth(max_len)
        .map_or(message.len(), |(idx, _)| idx);
    let prefix = &message[..end];
    match prefix.find(&['\r', '\n'][..]) {
        Some(idx) => &prefix[..idx],
        None => prefix,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod short_message {
        use super::*;

        #[test]
        fn truncates_at_max_len() {
            assert_eq!(short_message("abcdef", 3), "abc");
        }

        #[test]
        fn line_break_inside_prefix() {
            assert_eq!(short_message("ab\ncdef", 5), "ab");
            assert_eq!(short_message("ab\rcdef", 5), "ab");
        }

        #[test]
        fn line_break_after_prefix_is_ignored() {
            assert_eq!(short_message("abcdef\nghi", 4), "abcd");
        }

        #[test]
        fn shorter_message_is_first_line() {
            assert_eq!(short_message("subject\nbody", 80), "subject");
            assert_eq!(short_message("subject", 80), "subject");
        }

        #[test]
        fn zero_length() {
            assert_eq!(short_message("anything", 0), "");
        }

        #[test]
        fn leading_newline_gives_empty() {
            assert_eq!(short_message("\nbody", 80), "");
        }

        #[test]
        fn counts_characters_not_bytes() {
            assert_eq!(short_message("héllo", 2), "hé");
        }
    }
}
