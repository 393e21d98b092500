use anyhow::{Context, Result};
use meowing_cat_core::{config::CONFIG_FILE_NAMES, Config};
use std::{env, path::PathBuf};
use tracing::info;

pub fn init_command(cwd: Option<&str>, name: Option<String>, force: bool) -> Result<()> {
    let root = match cwd {
        Some(cwd) => PathBuf::from(cwd),
        None => env::current_dir().context("Failed to get current directory")?,
    };

    let config_path = root.join(CONFIG_FILE_NAMES[0]);

    if config_path.exists() && !force {
        println!("Config already exists at: {}", config_path.display());
        println!("Use --force to overwrite");
        return Ok(());
    }

    let config = Config { name, times: None };
    config
        .save_to_file(&config_path)
        .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

    info!("Wrote config: {}", config_path.display());
    println!("Created config: {}", config_path.display());

    Ok(())
}
