//! core::config::schema
//!
//! On-disk schema of the crate settings file.
//!
//! # Example
//!
//! ```toml
//! [discovery]
//! across_filesystems = false
//! ceiling_directories = ["/home", "/srv"]
//!
//! [commit]
//! short_message_len = 72
//!
//! [signature]
//! name = "Build Bot"
//! email = "bot@example.com"
//! ```
//!
//! # Validation
//!
//! Values are checked after parsing; unknown keys are rejected while parsing.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Default for [`CommitSettings::short_message_len`].
pub const DEFAULT_SHORT_MESSAGE_LEN: usize = 80;

/// Top-level settings file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsFile {
    /// Repository discovery bounds
    pub discovery: Option<DiscoverySettings>,

    /// Commit presentation
    pub commit: Option<CommitSettings>,

    /// Fallback identity when the repository has no `user.name`/`user.email`
    pub signature: Option<SignatureSettings>,
}

impl SettingsFile {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(discovery) = &self.discovery {
            discovery.validate()?;
        }
        if let Some(commit) = &self.commit {
            commit.validate()?;
        }
        if let Some(signature) = &self.signature {
            signature.validate()?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DiscoverySettings {
    /// Keep walking up past filesystem boundaries
    pub across_filesystems: Option<bool>,

    /// Directories the upward walk never enters
    pub ceiling_directories: Option<Vec<PathBuf>>,
}

impl DiscoverySettings {
    fn validate(&self) -> Result<(), ConfigError> {
        for dir in self.ceiling_directories.iter().flatten() {
            if !dir.is_absolute() {
                return Err(ConfigError::InvalidValue(format!(
                    "ceiling directory '{}' must be an absolute path",
                    dir.display()
                )));
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct CommitSettings {
    /// Default length for short commit messages
    pub short_message_len: Option<usize>,
}

impl CommitSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.short_message_len == Some(0) {
            return Err(ConfigError::InvalidValue(
                "short_message_len must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SignatureSettings {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl SignatureSettings {
    fn validate(&self) -> Result<(), ConfigError> {
        match (&self.name, &self.email) {
            (Some(name), Some(_)) if name.trim().is_empty() => Err(ConfigError::InvalidValue(
                "signature name cannot be empty".into(),
            )),
            (Some(_), Some(_)) | (None, None) => Ok(()),
            _ => Err(ConfigError::InvalidValue(
                "signature needs both name and email".into(),
            )),
        }
    }
}
