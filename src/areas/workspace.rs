use crate::artifacts::core::error::{Result, SvcsError};
use std::path::{Component, Path, PathBuf};

/// Name of the directory holding all repository state
pub const REPOSITORY_DIR: &str = "vcs";

#[derive(Debug)]
pub struct Workspace {
    path: Box<Path>,
}

impl Workspace {
    pub fn new(path: Box<Path>) -> Self {
        Workspace { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Resolve a user-supplied path to a file path relative to the workspace root
    ///
    /// Fails with `PathNotFound` if nothing exists at `path`, `NotAFile` for
    /// directories, and `OutsideWorkspace` for paths that escape the root or
    /// point into the repository directory. Names containing a line break are
    /// rejected with `InvalidPath` since the index stores one path per line.
    pub fn resolve_file(&self, path: &Path) -> Result<PathBuf> {
        if path
            .to_string_lossy()
            .contains(|character| matches!(character, '\n' | '\r'))
        {
            return Err(SvcsError::InvalidPath(path.to_path_buf()));
        }

        let absolute_path = self.path.join(path);
        if !absolute_path.exists() {
            return Err(SvcsError::PathNotFound(path.to_path_buf()));
        }
        if !absolute_path.is_file() {
            return Err(SvcsError::NotAFile(path.to_path_buf()));
        }

        let canonical_path = absolute_path.canonicalize()?;
        let relative_path = canonical_path
            .strip_prefix(&self.path)
            .map_err(|_| SvcsError::OutsideWorkspace(path.to_path_buf()))?;

        if Self::is_ignored(relative_path) {
            return Err(SvcsError::OutsideWorkspace(path.to_path_buf()));
        }

        Ok(relative_path.to_path_buf())
    }

    // Anything under the repository directory is never tracked nor restored
    fn is_ignored(path: &Path) -> bool {
        matches!(
            path.components().next(),
            Some(Component::Normal(name)) if name == REPOSITORY_DIR
        )
    }

    pub fn read_file(&self, file_path: &Path) -> Result<Vec<u8>> {
        let content = std::fs::read(self.path.join(file_path))?;

        Ok(content)
    }

    /// Create or replace a working file, creating missing parent directories
    pub fn write_file(&self, file_path: &Path, content: &[u8]) -> Result<()> {
        if Self::is_ignored(file_path) {
            return Err(SvcsError::OutsideWorkspace(file_path.to_path_buf()));
        }

        let path = self.path.join(file_path);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;

        Ok(())
    }
}
