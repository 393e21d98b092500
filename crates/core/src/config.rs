//! Configuration management for meowing-cat

use crate::{
    cat::Cat,
    error::{Error, Result},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// File names searched for, in order, in every directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".meowing-cat.json", "meowing-cat.json"];

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub times: Option<u32>,
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        debug!("Loading config from {:?}", path);
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for file_name in CONFIG_FILE_NAMES {
                let config_path = current.join(file_name);
                if config_path.exists() {
                    debug!("Found config file: {:?}", config_path);
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Number of meows to emit; one unless configured
    pub fn times_or_default(&self) -> u32 {
        self.times.unwrap_or(1)
    }

    /// Combine two configs, with fields set in `other` taking precedence
    pub fn merge(self, other: Config) -> Config {
        Config {
            name: other.name.or(self.name),
            times: other.times.or(self.times),
        }
    }

    pub fn apply_to(&self, cat: &mut Cat) {
        if let Some(name) = &self.name {
            cat.set_name(name.clone());
        }
    }
}
