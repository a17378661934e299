use crate::areas::repository::Repository;
use crate::artifacts::core::error::Result;
use std::path::{Path, PathBuf};

impl Repository {
    /// Append `path` to the tracked set
    ///
    /// Fails with `PathNotFound` when nothing exists at `path`. Re-adding a
    /// tracked path appends a duplicate entry.
    ///
    /// # Returns
    ///
    /// The tracked path, relative to the working directory
    pub fn track_file(&self, path: &Path) -> Result<PathBuf> {
        let _lock = self.lockfile().exclusive()?;

        let relative_path = self.workspace().resolve_file(path)?;

        let mut index = self.index();
        index.rehydrate()?;
        index.add(relative_path.clone());
        index.write_updates()?;

        Ok(relative_path)
    }

    /// The tracked set, in insertion order
    pub fn tracked_files(&self) -> Result<Vec<PathBuf>> {
        let _lock = self.lockfile().shared()?;

        let mut index = self.index();
        index.rehydrate()?;

        Ok(index.entries().to_vec())
    }
}
