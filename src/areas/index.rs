//! Tracked-set store (the index)
//!
//! The index is the ordered list of paths that take part in the next commit.
//! Paths are kept in insertion order and duplicates are allowed: a path added
//! twice contributes its content twice to the commit identifier.
//!
//! ## File Format
//!
//! `vcs/index.txt` holds one path per line, joined by `\n`.

use crate::areas::lockfile::write_atomically;
use crate::artifacts::core::error::Result;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct Index {
    /// Path to the index file (typically `vcs/index.txt`)
    path: Box<Path>,
    /// Tracked paths, relative to the working directory, in insertion order
    entries: Vec<PathBuf>,
    /// Set when entries were appended since the last load or write
    changed: bool,
}

impl Index {
    pub fn new(path: Box<Path>) -> Self {
        Index {
            path,
            entries: Vec::new(),
            changed: false,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the index from disk, replacing any in-memory entries
    ///
    /// A missing or empty file yields an empty tracked set.
    pub fn rehydrate(&mut self) -> Result<()> {
        self.entries.clear();
        self.changed = false;

        if !self.path.exists() {
            return Ok(());
        }

        let content = std::fs::read_to_string(&self.path)?;
        self.entries = content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .map(PathBuf::from)
            .collect();

        Ok(())
    }

    /// Append a path to the tracked set
    pub fn add(&mut self, path: PathBuf) {
        tracing::debug!(path = %path.display(), "appending path to the index");

        self.entries.push(path);
        self.changed = true;
    }

    pub fn entries(&self) -> &[PathBuf] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn write_updates(&mut self) -> Result<()> {
        if !self.changed {
            return Ok(());
        }

        let content = self
            .entries
            .iter()
            .map(|entry| entry.to_string_lossy())
            .collect::<Vec<_>>()
            .join("\n");
        write_atomically(&self.path, content.as_bytes())?;
        self.changed = false;

        Ok(())
    }
}
