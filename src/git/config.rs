//! git::config
//!
//! The repository's layered git configuration (system, global, local).
//!
//! Reads see the merged view; writes go to the highest-priority file,
//! which for a repository configuration is `.git/config`.
//!
//! # Example
//!
//! ```ignore
//! let mut cfg = repo.configuration()?;
//! cfg.set_str("user.name", "Test User")?;
//! assert_eq!(cfg.get_string("user.name")?.as_deref(), Some("Test User"));
//! ```

use super::error::{GitError, Result};

/// One configuration variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Dotted name, lowercased section and key (`user.name`)
    pub name: String,
    /// Raw value
    pub value: String,
}

/// Wrapper over a git configuration handle.
pub struct Config {
    inner: git2::Config,
}

impl Config {
    pub(crate) fn new(inner: git2::Config) -> Self {
        Self { inner }
    }

    /// String value of `name`, or `None` if unset.
    pub fn get_string(&self, name: &str) -> Result<Option<String>> {
        missing_as_none(self.inner.get_string(name), name)
    }

    /// Boolean value of `name` (`true`, `yes`, `on`, `1`, ...), or `None` if unset.
    pub fn get_bool(&self, name: &str) -> Result<Option<bool>> {
        missing_as_none(self.inner.get_bool(name), name)
    }

    /// Integer value of `name` (`k`/`m`/`g` suffixes allowed), or `None` if unset.
    pub fn get_i64(&self, name: &str) -> Result<Option<i64>> {
        missing_as_none(self.inner.get_i64(name), name)
    }

    pub fn set_str(&mut self, name: &str, value: &str) -> Result<()> {
        self.inner
            .set_str(name, value)
            .map_err(|e| GitError::from_git2(e, format!("config set {name}")))
    }

    pub fn set_bool(&mut self, name: &str, value: bool) -> Result<()> {
        self.inner
            .set_bool(name, value)
            .map_err(|e| GitError::from_git2(e, format!("config set {name}")))
    }

    pub fn set_i64(&mut self, name: &str, value: i64) -> Result<()> {
        self.inner
            .set_i64(name, value)
            .map_err(|e| GitError::from_git2(e, format!("config set {name}")))
    }

    /// Delete `name` from the highest-priority file.
    ///
    /// # Errors
    ///
    /// Native not-found error if the variable is not set there.
    pub fn remove(&mut self, name: &str) -> Result<()> {
        self.inner
            .remove(name)
            .map_err(|e| GitError::from_git2(e, format!("config remove {name}")))
    }

    /// Variables whose names match the regular expression `pattern`, or
    /// every variable when `pattern` is `None`.
    pub fn entries(&self, pattern: Option<&str>) -> Result<Vec<ConfigEntry>> {
        let context = || format!("config entries {}", pattern.unwrap_or("*"));
        let mut entries = self
            .inner
            .entries(pattern)
            .map_err(|e| GitError::from_git2(e, context()))?;

        let mut result = Vec::new();
        while let Some(entry) = entries.next() {
            let entry = entry.map_err(|e| GitError::from_git2(e, context()))?;
            let name = String::from_utf8_lossy(entry.name_bytes()).into_owned();
            let value = String::from_utf8_lossy(entry.value_bytes()).into_owned();
            result.push(ConfigEntry { name, value });
        }

        Ok(result)
    }

    /// Raw handle for interop with code that talks to `git2` directly.
    pub fn data(&mut self) -> &mut git2::Config {
        &mut self.inner
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config").finish_non_exhaustive()
    }
}

fn missing_as_none<T>(result: std::result::Result<T, git2::Error>, name: &str) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(e) if e.code() == git2::ErrorCode::NotFound => Ok(None),
        Err(e) => Err(GitError::from_git2(e, format!("config get {name}"))),
    }
}
