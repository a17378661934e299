//! Commit objects
//!
//! - **CommitId**: content-derived identifier of a snapshot
//! - **CommitRecord**: metadata block stored in the commit log

pub mod commit_id;
pub mod commit_record;

/// Length of a SHA-1 hash in hexadecimal format
pub const COMMIT_ID_LENGTH: usize = 40;
