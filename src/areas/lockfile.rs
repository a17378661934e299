//! Repository lock and atomic file replacement
//!
//! Every command takes the repository lock before touching `vcs/`: readers
//! share it, writers hold it exclusively. Files are rewritten through a
//! temporary sibling that is renamed over the target.

use crate::artifacts::core::error::Result;
use derive_new::new;
use file_guard::{FileGuard, Lock};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, new)]
pub struct Lockfile {
    path: Box<Path>,
}

impl Lockfile {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn shared(&self) -> Result<FileGuard<Box<File>>> {
        self.acquire(Lock::Shared)
    }

    pub fn exclusive(&self) -> Result<FileGuard<Box<File>>> {
        self.acquire(Lock::Exclusive)
    }

    fn acquire(&self, lock: Lock) -> Result<FileGuard<Box<File>>> {
        let file = std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(&self.path)?;

        Ok(file_guard::lock(Box::new(file), lock, 0, 1)?)
    }
}

/// Replace `path` with `content` in a single rename
pub fn write_atomically(path: &Path, content: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or_else(|| Path::new("."));
    let mut temp_file = tempfile::NamedTempFile::new_in(parent)?;

    temp_file.write_all(content)?;
    temp_file.as_file().sync_all()?;
    temp_file.persist(path).map_err(|error| error.error)?;

    Ok(())
}
