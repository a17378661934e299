//! Snapshot store
//!
//! Each commit owns a container directory `vcs/commits/<id>/` holding a
//! verbatim copy of every tracked file under its relative path.
//! Containers are written once and never modified afterwards.
//!
//! ## Publishing
//!
//! A snapshot is first written into a private staging directory next to the
//! containers and then renamed to its final name, so a failed save never
//! leaves a partial container behind.

use crate::areas::workspace::Workspace;
use crate::artifacts::core::error::{Result, SvcsError};
use crate::artifacts::objects::commit_id::CommitId;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const STAGING_PREFIX: &str = ".staging-";

#[derive(Debug)]
pub struct Snapshots {
    /// Path to the containers directory (typically `vcs/commits`)
    path: Box<Path>,
}

impl Snapshots {
    pub fn new(path: Box<Path>) -> Self {
        Snapshots { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn contains(&self, id: &CommitId) -> bool {
        self.container_path(id).is_dir()
    }

    /// Copy the current content of `tracked_paths` into a new container for `id`
    ///
    /// Fails with `Conflict` if a container already exists for `id`.
    pub fn save(
        &self,
        id: &CommitId,
        workspace: &Workspace,
        tracked_paths: &[PathBuf],
    ) -> Result<()> {
        let container_path = self.container_path(id);
        if container_path.exists() {
            return Err(SvcsError::Conflict(id.clone()));
        }

        std::fs::create_dir_all(&self.path)?;
        let staging = tempfile::Builder::new()
            .prefix(STAGING_PREFIX)
            .tempdir_in(&self.path)?;

        for tracked_path in tracked_paths {
            let content = workspace.read_file(tracked_path)?;
            let staged_path = staging.path().join(tracked_path);

            if let Some(parent) = staged_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&staged_path, content)?;
        }

        // staging cleanup on drop is a no-op once the directory is renamed
        std::fs::rename(staging.path(), &container_path)?;
        tracing::info!(
            commit = %id.to_short_id(),
            files = tracked_paths.len(),
            "published snapshot"
        );

        Ok(())
    }

    /// Whether the container for `id` stores exactly the current content of `tracked_paths`
    ///
    /// Tracked content that returns to an earlier committed state maps to an
    /// existing container, which can then be reused as is.
    pub fn holds(
        &self,
        id: &CommitId,
        workspace: &Workspace,
        tracked_paths: &[PathBuf],
    ) -> Result<bool> {
        let mut expected = BTreeMap::new();
        for tracked_path in tracked_paths {
            expected.insert(tracked_path.clone(), workspace.read_file(tracked_path)?);
        }

        let stored = self.restore(id.as_ref())?.into_iter().collect::<BTreeMap<_, _>>();

        Ok(stored == expected)
    }

    /// Every stored `(path, content)` pair of the container for `id`, ordered by path
    ///
    /// Fails with `CommitNotFound` if no container exists for `id`.
    pub fn restore(&self, id: &str) -> Result<Vec<(PathBuf, Vec<u8>)>> {
        let id = CommitId::try_parse(id).map_err(|_| SvcsError::CommitNotFound(id.to_string()))?;
        let container_path = self.container_path(&id);
        if !container_path.is_dir() {
            return Err(SvcsError::CommitNotFound(id.to_string()));
        }

        let mut files = Vec::new();
        for entry in WalkDir::new(&container_path)
            .min_depth(1)
            .sort_by_file_name()
        {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let relative_path = entry
                .path()
                .strip_prefix(&container_path)
                .map(PathBuf::from)
                .unwrap_or_default();
            let content = std::fs::read(entry.path())?;
            files.push((relative_path, content));
        }

        Ok(files)
    }

    fn container_path(&self, id: &CommitId) -> PathBuf {
        self.path.join(id.as_ref())
    }
}
