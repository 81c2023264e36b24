//! # Desk Configuration
//!
//! Settings for the headless runner, kept in a single YAML file
//! `campus_desk.yaml`:
//!
//! ```yaml
//! data_directory: "/home/user/.local/share/campus-desk"
//! export_directory: null
//! storage_file: "storage.json"
//! currency_symbol: "₹"
//! default_lesson_duration: 45
//! default_quiz_count: 5
//! log_filter: "info"
//! ```
//!
//! A missing file is created with the defaults. Writes go through a temp file
//! and a rename.

use anyhow::Result;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::backend::domain::lesson_planner::DEFAULT_DURATION_MINUTES;
use crate::backend::domain::quiz_service::DEFAULT_QUIZ_COUNT;

pub const CONFIG_FILENAME: &str = "campus_desk.yaml";
const APP_DIRECTORY: &str = "campus-desk";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    /// Directory holding the key-value storage file
    pub data_directory: PathBuf,
    /// Where exports are written; `None` means the user's documents directory
    pub export_directory: Option<PathBuf>,
    pub storage_file: String,
    pub currency_symbol: String,
    pub default_lesson_duration: i64,
    pub default_quiz_count: i64,
    /// Default `env_logger` filter, overridden by `RUST_LOG`
    pub log_filter: String,
}

impl Default for DeskConfig {
    fn default() -> Self {
        Self {
            data_directory: default_data_directory(),
            export_directory: None,
            storage_file: "storage.json".to_string(),
            currency_symbol: "₹".to_string(),
            default_lesson_duration: DEFAULT_DURATION_MINUTES,
            default_quiz_count: DEFAULT_QUIZ_COUNT,
            log_filter: "info".to_string(),
        }
    }
}

fn default_data_directory() -> PathBuf {
    dirs::data_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIRECTORY)
}

impl DeskConfig {
    /// `campus_desk.yaml` in the platform config directory
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIRECTORY)
            .join(CONFIG_FILENAME)
    }

    /// Load the config at `path`, writing the defaults there first if it doesn't exist
    pub fn load_or_create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            let yaml_content = fs::read_to_string(path)?;
            let config: DeskConfig = serde_yaml::from_str(&yaml_content)?;
            debug!("Loaded config from {:?}", path);
            Ok(config)
        } else {
            let config = DeskConfig::default();
            config.save(path)?;
            info!("Created default config at {:?}", path);
            Ok(config)
        }
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
                info!("Created config directory: {:?}", parent);
            }
        }

        let yaml_content = serde_yaml::to_string(self)?;
        let temp_path = path.with_extension("tmp");
        fs::write(&temp_path, yaml_content)?;
        fs::rename(&temp_path, path)?;

        debug!("Saved config to {:?}", path);
        Ok(())
    }

    /// Configured export directory, else Documents, else the home directory
    pub fn export_directory(&self) -> PathBuf {
        self.export_directory
            .clone()
            .or_else(dirs::document_dir)
            .or_else(dirs::home_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }

    pub fn storage_path(&self) -> PathBuf {
        self.data_directory.join(&self.storage_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_or_create_writes_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join("nested").join(CONFIG_FILENAME);

        let config = DeskConfig::load_or_create(&path).unwrap();

        assert!(path.exists());
        assert_eq!(config.currency_symbol, "₹");
        assert_eq!(config.default_lesson_duration, 45);
        assert_eq!(config.default_quiz_count, 5);
        assert_eq!(DeskConfig::load_or_create(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "currency_symbol: \"Rs\"\ndefault_quiz_count: 10\n").unwrap();

        let config = DeskConfig::load_or_create(&path).unwrap();

        assert_eq!(config.currency_symbol, "Rs");
        assert_eq!(config.default_quiz_count, 10);
        assert_eq!(config.storage_file, "storage.json");
    }

    #[test]
    fn test_paths() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let config = DeskConfig {
            data_directory: temp_dir.path().to_path_buf(),
            export_directory: Some(temp_dir.path().join("exports")),
            ..Default::default()
        };

        assert_eq!(config.storage_path(), temp_dir.path().join("storage.json"));
        assert_eq!(config.export_directory(), temp_dir.path().join("exports"));
    }

    #[test]
    fn test_invalid_yaml_is_an_error() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let path = temp_dir.path().join(CONFIG_FILENAME);
        fs::write(&path, "default_quiz_count: [not, a, number]").unwrap();

        assert!(DeskConfig::load_or_create(&path).is_err());
    }
}
