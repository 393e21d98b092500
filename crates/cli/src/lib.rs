pub mod cli;
pub mod commands;
pub mod config;

// Re-export commonly used items
pub use cli::{Cli, Commands};
