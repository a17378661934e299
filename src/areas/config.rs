//! Author configuration
//!
//! The author name lives in `vcs/config.txt`. An override (the binary feeds
//! it from the `SVCS_AUTHOR_NAME` environment variable) takes precedence when
//! set to a non-blank value.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::core::error::Result;
use derive_new::new;
use std::path::Path;

pub const AUTHOR_ENV_VAR: &str = "SVCS_AUTHOR_NAME";

#[derive(Debug, new)]
pub struct Config {
    /// Path to the config file (typically `vcs/config.txt`)
    path: Box<Path>,
    #[new(default)]
    author_override: Option<String>,
}

impl Config {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn with_author_override(mut self, name: Option<String>) -> Self {
        self.author_override = name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty());
        self
    }

    /// The configured author name, empty when none was set
    pub fn author(&self) -> Result<String> {
        if let Some(name) = &self.author_override {
            return Ok(name.clone());
        }

        self.stored_author()
    }

    pub fn stored_author(&self) -> Result<String> {
        if !self.path.exists() {
            return Ok(String::new());
        }

        Ok(std::fs::read_to_string(&self.path)?.trim().to_string())
    }

    pub fn set_author(&self, name: &str) -> Result<()> {
        write_atomically(&self.path, name.trim().as_bytes())?;
        tracing::debug!(author = name.trim(), "stored author name");

        Ok(())
    }
}
