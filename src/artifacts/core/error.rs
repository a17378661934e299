//! Error taxonomy of the snapshot engine
//!
//! Not-found and missing-argument conditions are recoverable: the porcelain
//! commands turn them into status text. Conflicts and I/O failures are fatal
//! and propagate to the caller untouched.

use crate::artifacts::objects::commit_id::CommitId;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SvcsError>;

/// Argument the caller was expected to supply
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredArgument {
    Message,
    CommitId,
}

impl std::fmt::Display for RequiredArgument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RequiredArgument::Message => write!(f, "message"),
            RequiredArgument::CommitId => write!(f, "commit id"),
        }
    }
}

#[derive(Debug, Error)]
pub enum SvcsError {
    /// A path handed to `add` does not exist in the working directory
    #[error("path not found: {0}")]
    PathNotFound(PathBuf),

    #[error("not a regular file: {0}")]
    NotAFile(PathBuf),

    /// The path escapes the working directory or points into the repository directory
    #[error("path is outside the working directory: {0}")]
    OutsideWorkspace(PathBuf),

    /// The path contains a line break and cannot be stored in the line-based index
    #[error("invalid path: {0:?}")]
    InvalidPath(PathBuf),

    /// No snapshot container exists for the requested identifier
    #[error("commit not found: {0}")]
    CommitNotFound(String),

    #[error("missing required argument: {0}")]
    MissingArgument(RequiredArgument),

    /// A snapshot container already exists for the identifier but holds different files
    #[error("snapshot already exists for commit {0}")]
    Conflict(CommitId),

    #[error("malformed commit log at line {line}: {reason}")]
    InvalidLog { line: usize, reason: String },

    #[error("invalid commit id: {0}")]
    InvalidCommitId(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk snapshot: {0}")]
    Walk(#[from] walkdir::Error),
}

impl SvcsError {
    /// Whether the error names something that does not exist (a path or a commit)
    pub fn is_not_found(&self) -> bool {
        matches!(self, SvcsError::PathNotFound(_) | SvcsError::CommitNotFound(_))
    }
}
