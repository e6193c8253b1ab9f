//! core::config
//!
//! Settings for this crate (not the repository's git configuration, which
//! is [`git::Config`](crate::git::Config)).
//!
//! # Locations
//!
//! Searched in order, first existing file wins:
//! 1. `$GITVENEER_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitveneer/config.toml`
//! 3. `~/.gitveneer/config.toml`
//!
//! A missing file is not an error; defaults are used.
//!
//! # Example
//!
//! ```no_run
//! use gitveneer::core::config::Settings;
//! use gitveneer::git::Repository;
//! use std::path::Path;
//!
//! let settings = Settings::load().unwrap();
//! let mut repo = Repository::new();
//! repo.discover_and_open_with(&settings, Path::new(".")).unwrap();
//! println!("short messages are {} chars", settings.short_message_len());
//! ```

pub mod schema;

pub use schema::{CommitSettings, DiscoverySettings, SettingsFile, SignatureSettings};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::paths::SettingsLocations;

/// Errors from settings operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Loaded and validated settings.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    file: SettingsFile,
    loaded_from: Option<PathBuf>,
}

impl Settings {
    /// Wrap an in-memory settings file after validating it.
    pub fn new(file: SettingsFile) -> Result<Self, ConfigError> {
        file.validate()?;
        Ok(Self {
            file,
            loaded_from: None,
        })
    }

    /// Load from the standard locations (see module docs).
    ///
    /// # Errors
    ///
    /// Returns an error if a file exists but cannot be read, parsed or
    /// validated.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with(&SettingsLocations::from_env())
    }

    /// Load from the first existing file among `locations`.
    pub fn load_with(locations: &SettingsLocations) -> Result<Self, ConfigError> {
        match locations.candidates().into_iter().find(|p| p.exists()) {
            Some(path) => Self::load_from(&path),
            None => {
                tracing::debug!("no settings file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Load a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!(path = %path.display(), "loading settings");
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let file: SettingsFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        file.validate()?;

        Ok(Self {
            file,
            loaded_from: Some(path.to_path_buf()),
        })
    }

    /// Write settings atomically.
    ///
    /// Creates parent directories if needed. Writes a temp file next to
    /// `path` and renames it into place.
    pub fn write_to(&self, path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.to_path_buf(),
                source: e,
            })?;
        }

        let contents = toml::to_string_pretty(&self.file)
            .map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

        let temp_path = path.with_extension("toml.tmp");
        let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        file.write_all(contents.as_bytes())
            .map_err(|e| ConfigError::WriteError {
                path: temp_path.clone(),
                source: e,
            })?;

        file.sync_all().map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

        fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;

        tracing::debug!(path = %path.display(), "wrote settings");
        Ok(())
    }

    // =========================================================================
    // Accessors with defaults
    // =========================================================================

    /// Whether discovery crosses filesystem boundaries.
    ///
    /// Defaults to `false`.
    pub fn across_filesystems(&self) -> bool {
        self.file
            .discovery
            .as_ref()
            .and_then(|d| d.across_filesystems)
            .unwrap_or(false)
    }

    /// Directories discovery never walks into. Defaults to none.
    pub fn ceiling_directories(&self) -> &[PathBuf] {
        self.file
            .discovery
            .as_ref()
            .and_then(|d| d.ceiling_directories.as_deref())
            .unwrap_or(&[])
    }

    /// Default length for [`Commit::short_message`](crate::git::Commit::short_message).
    ///
    /// Defaults to [`schema::DEFAULT_SHORT_MESSAGE_LEN`].
    pub fn short_message_len(&self) -> usize {
        self.file
            .commit
            .as_ref()
            .and_then(|c| c.short_message_len)
            .unwrap_or(schema::DEFAULT_SHORT_MESSAGE_LEN)
    }

    /// Fallback `(name, email)` for new signatures.
    pub fn fallback_identity(&self) -> Option<(&str, &str)> {
        let sig = self.file.signature.as_ref()?;
        Some((sig.name.as_deref()?, sig.email.as_deref()?))
    }

    /// The parsed file.
    pub fn file(&self) -> &SettingsFile {
        &self.file
    }

    /// Get the path the settings were loaded from.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.loaded_from.as_deref()
    }
}
