use super::changelog::ChangelogConfig;
use super::hygiene::HygieneConfig;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// main configuration for warden
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardenConfig {
    /// changelog-related configuration
    #[serde(default)]
    pub changelog: ChangelogConfig,

    /// hygiene scanner configuration
    #[serde(default)]
    pub hygiene: HygieneConfig,
}

impl WardenConfig {
    /// load configuration from a TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents =
            std::fs::read_to_string(path).map_err(|e| crate::error::Error::FileReadError {
                path: path.to_path_buf(),
                source: e,
            })?;

        let config: WardenConfig =
            toml::from_str(&contents).map_err(|e| crate::error::Error::TomlParseError {
                path: path.to_path_buf(),
                source: e,
            })?;

        Ok(config)
    }

    /// find and load configuration file in repository
    ///
    /// looks for `warden.toml` in the repository root
    /// returns default config if file is not found
    pub fn load_or_default<P: AsRef<Path>>(repo_path: P) -> Self {
        match Self::find_config_file(&repo_path) {
            Some(config_path) => {
                // if config exists but can't be parsed, use default
                // (errors will be reported separately)
                Self::load_from_file(&config_path).unwrap_or_default()
            }
            None => Self::default(),
        }
    }

    /// find configuration file in repository
    ///
    /// looks for `warden.toml` in the repository root
    pub fn find_config_file<P: AsRef<Path>>(repo_path: P) -> Option<PathBuf> {
        let repo_path = repo_path.as_ref();
        let config_path = repo_path.join("warden.toml");

        if config_path.exists() && config_path.is_file() {
            Some(config_path)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("warden.toml");
        std::fs::write(
            &config_path,
            "[changelog]\nrequire_dates = true\n\n[hygiene]\nmax_file_lines = 300\n",
        )
        .unwrap();

        let config = WardenConfig::load_from_file(&config_path).unwrap();
        assert!(config.changelog.require_dates);
        assert!(!config.changelog.require_unreleased);
        assert_eq!(config.hygiene.max_file_lines, 300);
    }

    #[test]
    fn test_missing_sections_fall_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("warden.toml");
        std::fs::write(&config_path, "[changelog]\nrequire_unreleased = true\n").unwrap();

        let config = WardenConfig::load_from_file(&config_path).unwrap();
        assert!(config.changelog.require_unreleased);
        assert_eq!(config.hygiene.max_file_lines, 500);
    }

    #[test]
    fn test_load_or_default_without_file() {
        let temp_dir = TempDir::new().unwrap();
        let config = WardenConfig::load_or_default(temp_dir.path());
        assert!(!config.changelog.require_unreleased);
        assert!(!config.changelog.require_dates);
    }

    #[test]
    fn test_find_config_file() {
        let temp_dir = TempDir::new().unwrap();
        assert!(WardenConfig::find_config_file(temp_dir.path()).is_none());

        std::fs::write(temp_dir.path().join("warden.toml"), "").unwrap();
        assert!(WardenConfig::find_config_file(temp_dir.path()).is_some());
    }

    #[test]
    fn test_malformed_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("warden.toml");
        std::fs::write(&config_path, "[changelog\nbroken").unwrap();

        assert!(WardenConfig::load_from_file(&config_path).is_err());
    }
}
