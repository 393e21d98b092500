use anyhow::Result;
use meowing_cat_core::{Cat, Config};

use crate::config::load_config;

pub fn name_command(name: Option<String>, config_path: Option<&str>, json: bool) -> Result<()> {
    let config = load_config(config_path)?.merge(Config { name, times: None });

    let mut cat = Cat::new();
    config.apply_to(&mut cat);

    if json {
        println!("{}", serde_json::to_string_pretty(&cat)?);
    } else {
        println!("{}", cat.name().unwrap_or("(unnamed)"));
    }

    Ok(())
}
