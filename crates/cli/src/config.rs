use anyhow::{Context, Result};
use meowing_cat_core::Config;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Load the config from an explicit path, or discover one from the current directory.
/// Missing discovery is not an error; an explicit path that fails to load is.
pub fn load_config(explicit: Option<&str>) -> Result<Config> {
    let path = match explicit {
        Some(path) => Some(PathBuf::from(path)),
        None => {
            let cwd = env::current_dir().context("Failed to get current directory")?;
            Config::find_config_file(&cwd)
        }
    };

    match path {
        Some(path) => load_from(&path),
        None => {
            debug!("No config file found, using defaults");
            Ok(Config::default())
        }
    }
}

fn load_from(path: &Path) -> Result<Config> {
    Config::load_from_file(path)
        .with_context(|| format!("Failed to load config from {}", path.display()))
}
