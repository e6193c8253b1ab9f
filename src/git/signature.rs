//! git::signature
//!
//! Author, committer and tagger identities.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::error::{GitError, Result};

/// An identity with the moment it acted.
///
/// This is an immutable value copied out of commit or tag metadata; it does
/// not borrow from the repository.
///
/// # Example
///
/// ```
/// use gitveneer::git::Signature;
///
/// let sig = Signature::new("Ada", "ada@example.com", 1_700_000_000, 120);
/// assert_eq!(sig.offset_minutes(), 120);
/// assert_eq!(sig.date_time().unwrap().to_rfc3339(), "2023-11-15T00:13:20+02:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Signature {
    name: String,
    email: String,
    seconds: i64,
    offset_minutes: i32,
}

impl Signature {
    /// Build a signature from its parts.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        seconds: i64,
        offset_minutes: i32,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            seconds,
            offset_minutes,
        }
    }

    /// A signature stamped with the current time in UTC.
    pub fn now(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self::new(name, email, Utc::now().timestamp(), 0)
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Seconds since the Unix epoch.
    pub fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Signed offset from UTC in minutes.
    pub fn offset_minutes(&self) -> i32 {
        self.offset_minutes
    }

    /// The timestamp in the timezone it was recorded in.
    ///
    /// Returns `None` if the offset or timestamp is out of chrono's range.
    pub fn date_time(&self) -> Option<DateTime<FixedOffset>> {
        let offset = FixedOffset::east_opt(self.offset_minutes.checked_mul(60)?)?;
        offset.timestamp_opt(self.seconds, 0).single()
    }

    pub(crate) fn from_git2(sig: &git2::Signature<'_>) -> Self {
        let when = sig.when();
        Self {
            name: String::from_utf8_lossy(sig.name_bytes()).into_owned(),
            email: String::from_utf8_lossy(sig.email_bytes()).into_owned(),
            seconds: when.seconds(),
            offset_minutes: when.offset_minutes(),
        }
    }

    pub(crate) fn to_git2(&self) -> Result<git2::Signature<'static>> {
        let when = git2::Time::new(self.seconds, self.offset_minutes);
        git2::Signature::new(&self.name, &self.email, &when)
            .map_err(|e| GitError::from_git2(e, format!("signature <{}>", self.email)))
    }
}

impl std::fmt::Display for Signature {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} <{}>", self.name, self.email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors() {
        let sig = Signature::new("Test User", "test@example.com", 42, -300);
        assert_eq!(sig.name(), "Test User");
        assert_eq!(sig.email(), "test@example.com");
        assert_eq!(sig.seconds(), 42);
        assert_eq!(sig.offset_minutes(), -300);
        assert_eq!(sig.to_string(), "Test User <test@example.com>");
    }

    #[test]
    fn date_time_keeps_original_offset() {
        let sig = Signature::new("a", "a@b", 0, -300);
        let dt = sig.date_time().unwrap();
        assert_eq!(dt.offset().local_minus_utc(), -300 * 60);
        assert_eq!(dt.timestamp(), 0);
    }

    #[test]
    fn git2_round_trip() {
        let sig = Signature::new("Test User", "test@example.com", 1_600_000_000, 60);
        let native = sig.to_git2().unwrap();
        assert_eq!(Signature::from_git2(&native), sig);
    }

    #[test]
    fn empty_name_is_rejected_by_libgit2() {
        let sig = Signature::new("", "test@example.com", 0, 0);
        assert!(sig.to_git2().is_err());
    }

    #[test]
    fn now_is_utc() {
        let sig = Signature::now("a", "a@b");
        assert_eq!(sig.offset_minutes(), 0);
        assert!(sig.seconds() > 0);
    }
}
