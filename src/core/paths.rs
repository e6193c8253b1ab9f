//! core::paths
//!
//! Path helpers shared by the repository wrapper and the settings loader.
//!
//! # Example
//!
//! ```
//! use gitveneer::core::paths::{last_path_segment, DIRECTORY_SEPARATOR as SEP};
//!
//! assert_eq!(last_path_segment(&format!("{SEP}work{SEP}foo{SEP}bar")), "bar");
//! assert_eq!(last_path_segment(&format!("{SEP}work{SEP}foo{SEP}bar{SEP}")), "");
//! assert_eq!(last_path_segment("bar"), "bar");
//! ```

use std::path::PathBuf;

/// Platform directory separator used to split repository paths.
pub const DIRECTORY_SEPARATOR: char = std::path::MAIN_SEPARATOR;

/// Environment variable naming an explicit settings file.
pub const SETTINGS_ENV: &str = "GITVENEER_CONFIG";

/// Text after the last [`DIRECTORY_SEPARATOR`].
///
/// Returns the whole input when there is no separator and the empty string
/// when the input ends with one.
pub fn last_path_segment(path: &str) -> &str {
    match path.rfind(DIRECTORY_SEPARATOR) {
        None => path,
        Some(pos) => &path[pos + DIRECTORY_SEPARATOR.len_utf8()..],
    }
}

/// Where settings files may live.
///
/// Built from the environment by [`SettingsLocations::from_env`], or by hand
/// in tests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsLocations {
    /// Value of `$GITVENEER_CONFIG`
    pub explicit: Option<PathBuf>,
    /// Value of `$XDG_CONFIG_HOME`
    pub xdg_config_home: Option<PathBuf>,
    /// The user's home directory
    pub home: Option<PathBuf>,
}

impl SettingsLocations {
    pub fn from_env() -> Self {
        Self {
            explicit: std::env::var_os(SETTINGS_ENV).map(PathBuf::from),
            xdg_config_home: std::env::var_os("XDG_CONFIG_HOME").map(PathBuf::from),
            home: dirs::home_dir(),
        }
    }

    /// Candidate files in precedence order.
    pub fn candidates(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(explicit) = &self.explicit {
            paths.push(explicit.clone());
        }
        if let Some(xdg) = &self.xdg_config_home {
            paths.push(xdg.join("gitveneer").join("config.toml"));
        }
        if let Some(canonical) = self.canonical() {
            paths.push(canonical);
        }
        paths
    }

    /// `~/.gitveneer/config.toml`, the location settings are written to.
    pub fn canonical(&self) -> Option<PathBuf> {
        self.home
            .as_ref()
            .map(|home| home.join(".gitveneer").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod last_path_segment {
        use super::*;

        fn sep(parts: &[&str]) -> String {
            parts.join(DIRECTORY_SEPARATOR.to_string().as_str())
        }

        #[test]
        fn last_component() {
            assert_eq!(last_path_segment(&sep(&["", "work", "foo", "bar"])), "bar");
        }

        #[test]
        fn trailing_separator_is_empty() {
            assert_eq!(last_path_segment(&sep(&["", "work", "foo", "bar", ""])), "");
        }

        #[test]
        fn no_separator_is_whole() {
            assert_eq!(last_path_segment("bar"), "bar");
            assert_eq!(last_path_segment(""), "");
        }

        #[test]
        fn root_only() {
            assert_eq!(last_path_segment(&DIRECTORY_SEPARATOR.to_string()), "");
        }
    }

    mod settings_locations {
        use super::*;

        #[test]
        fn precedence_order() {
            let locations = SettingsLocations {
                explicit: Some(PathBuf::from("/etc/custom.toml")),
                xdg_config_home: Some(PathBuf::from("/xdg")),
                home: Some(PathBuf::from("/home/user")),
            };
            assert_eq!(
                locations.candidates(),
                vec![
                    PathBuf::from("/etc/custom.toml"),
                    PathBuf::from("/xdg").join("gitveneer").join("config.toml"),
                    PathBuf::from("/home/user")
                        .join(".gitveneer")
                        .join("config.toml"),
                ]
            );
        }

        #[test]
        fn empty_without_sources() {
            let locations = SettingsLocations::default();
            assert!(locations.candidates().is_empty());
            assert!(locations.canonical().is_none());
        }
    }
}
