use crate::areas::repository::Repository;
use crate::artifacts::core::error::{RequiredArgument, Result, SvcsError};
use std::path::PathBuf;

impl Repository {
    /// Overwrite the working files with the snapshot stored under `id`
    ///
    /// Every stored file is created or replaced unconditionally; working files
    /// absent from the snapshot are left alone. Fails with `MissingArgument`
    /// when no id is given and `CommitNotFound` when no snapshot exists.
    ///
    /// # Returns
    ///
    /// The restored paths, relative to the working directory
    pub fn restore_snapshot(&self, id: Option<&str>) -> Result<Vec<PathBuf>> {
        let id = id
            .map(str::trim)
            .filter(|id| !id.is_empty())
            .ok_or(SvcsError::MissingArgument(RequiredArgument::CommitId))?;

        let _lock = self.lockfile().exclusive()?;

        let files = self.snapshots().restore(id)?;
        for (path, content) in &files {
            self.workspace().write_file(path, content)?;
        }
        tracing::info!(commit = id, files = files.len(), "restored snapshot");

        Ok(files.into_iter().map(|(path, _)| path).collect())
    }
}
