use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Per-user configuration, stored as config.json under the platform
/// config directory. Every key is optional; a missing file means
/// defaults, and environment variables override whatever is here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct JotConfig {
    /// Overrides the global notes file.
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Overrides the directory holding category stores.
    #[serde(default)]
    pub categories_dir: Option<PathBuf>,

    /// Ask before `delete --all`.
    #[serde(default = "default_confirm_delete")]
    pub confirm_delete: bool,
}

fn default_confirm_delete() -> bool {
    true
}

impl Default for JotConfig {
    fn default() -> Self {
        Self {
            store_path: None,
            categories_dir: None,
            confirm_delete: true,
        }
    }
}

impl JotConfig {
    /// Load config from the given directory, or defaults if no file is
    /// there.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);
        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to the given directory, creating it if needed.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();
        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_dir.join(CONFIG_FILENAME), content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn defaults_ask_before_delete_all() {
        let config = JotConfig::default();
        assert!(config.confirm_delete);
        assert_eq!(config.store_path, None);
        assert_eq!(config.categories_dir, None);
    }

    #[test]
    fn a_missing_file_loads_as_defaults() {
        let dir = TempDir::new().unwrap();
        let config = JotConfig::load(dir.path()).unwrap();
        assert_eq!(config, JotConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let config = JotConfig {
            store_path: Some(PathBuf::from("/somewhere/notes")),
            categories_dir: None,
            confirm_delete: false,
        };
        config.save(dir.path()).unwrap();

        let loaded = JotConfig::load(dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_keys_fall_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "{}").unwrap();

        let config = JotConfig::load(dir.path()).unwrap();
        assert!(config.confirm_delete);
        assert_eq!(config.store_path, None);
    }

    #[test]
    fn unreadable_json_is_an_error() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), "not json").unwrap();
        assert!(JotConfig::load(dir.path()).is_err());
    }
}
