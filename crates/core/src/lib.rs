//! meowing-cat - A named cat that can announce itself
//!
//! This crate provides:
//! - A `Cat` with an optional, freely mutable name
//! - A `meow` operation that writes `meow!` to standard output
//! - JSON configuration for a default name and meow count
pub mod cat;
pub mod config;
pub mod error;

// Re-export commonly used types
pub use cat::{Cat, MEOW};
pub use config::Config;
pub use error::{Error, Result};
