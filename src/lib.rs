//! A minimal local version control system
//!
//! Tracks an ordered set of files, snapshots their content into commits
//! identified by a hash of that content, keeps a newest-first commit log and
//! restores the working directory from any recorded snapshot.

pub mod areas;
pub mod artifacts;
pub mod commands;
