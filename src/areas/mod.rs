//! Repository storage areas
//!
//! - `commit_log`: Newest-first log of commit records
//! - `config`: Author name used for new commits
//! - `index`: Ordered set of tracked paths
//! - `lockfile`: Repository lock and atomic file replacement
//! - `repository`: Handle owning every area of one repository
//! - `snapshots`: Per-commit copies of the tracked files
//! - `workspace`: Working directory file system operations

pub mod commit_log;
pub mod config;
pub mod index;
pub(crate) mod lockfile;
pub mod repository;
pub mod snapshots;
pub mod workspace;
