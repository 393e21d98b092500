use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands::{init_command, meow_command, name_command};

#[derive(Parser, Debug)]
#[command(name = "meowing-cat")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Make the cat meow
    #[command(visible_alias = "m")]
    Meow {
        /// Name to give the cat before it meows
        #[arg(short, long)]
        name: Option<String>,

        /// How many times to meow
        #[arg(short, long)]
        times: Option<u32>,

        /// Path to a config file (skips discovery)
        #[arg(short, long)]
        config: Option<String>,
    },
    /// Print the cat's name
    Name {
        /// Override the configured name
        #[arg(short, long)]
        name: Option<String>,

        /// Path to a config file (skips discovery)
        #[arg(short, long)]
        config: Option<String>,

        /// Print the cat as JSON
        #[arg(long)]
        json: bool,
    },
    /// Write a .meowing-cat.json config file
    Init {
        /// Directory to write the config into
        #[arg(long)]
        cwd: Option<String>,

        /// Default name stored in the config
        #[arg(short, long)]
        name: Option<String>,

        /// Overwrite an existing config
        #[arg(short, long)]
        force: bool,
    },
}

impl Commands {
    /// Execute the command
    pub fn execute(self) -> Result<()> {
        match self {
            Commands::Meow {
                name,
                times,
                config,
            } => meow_command(name, times, config.as_deref()),
            Commands::Name { name, config, json } => name_command(name, config.as_deref(), json),
            Commands::Init { cwd, name, force } => init_command(cwd.as_deref(), name, force),
        }
    }
}
