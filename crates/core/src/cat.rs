use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::io::{self, Write};
use tracing::{debug, trace};

/// The exact text written by [`Cat::meow`]. No trailing newline.
pub const MEOW: &str = "meow!";

/// A cat with an optional name.
///
/// A freshly constructed cat has no name: [`Cat::name`] returns `None` until
/// [`Cat::set_name`] is called. Any text is accepted as a name, including the
/// empty string, which is stored as `Some("")` and is distinct from unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Cat {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    name: Option<String>,
}

impl Cat {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(name: impl Into<String>) -> Self {
        let mut cat = Self::new();
        cat.set_name(name);
        cat
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        let name = name.into();
        debug!("Setting cat name: {:?}", name);
        self.name = Some(name);
    }

    /// Reset the name to unset, returning the previous one
    pub fn clear_name(&mut self) -> Option<String> {
        debug!("Clearing cat name");
        self.name.take()
    }

    /// Write `meow!` to standard output.
    pub fn meow(&self) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        self.meow_to(&mut handle)
    }

    /// Write `meow!` to an arbitrary writer and flush it.
    pub fn meow_to<W: Write>(&self, out: &mut W) -> Result<()> {
        trace!("Meowing (name: {:?})", self.name);
        out.write_all(MEOW.as_bytes())?;
        out.flush()?;
        Ok(())
    }
}
