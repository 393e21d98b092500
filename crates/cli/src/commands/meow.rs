use anyhow::{Context, Result};
use meowing_cat_core::{Cat, Config};
use tracing::debug;

use crate::config::load_config;

pub fn meow_command(name: Option<String>, times: Option<u32>, config_path: Option<&str>) -> Result<()> {
    let config = load_config(config_path)?.merge(Config { name, times });

    let mut cat = Cat::new();
    config.apply_to(&mut cat);

    let times = config.times_or_default();
    debug!("Meowing {} time(s) as {:?}", times, cat.name());

    for _ in 0..times {
        cat.meow().context("Failed to write to stdout")?;
    }

    Ok(())
}
