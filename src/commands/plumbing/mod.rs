//! Plumbing commands (low-level snapshot operations)
//!
//! Plumbing commands operate directly on the repository areas and report
//! typed outcomes instead of printing. Porcelain commands build on them.
//!
//! ## Commands
//!
//! - `track_file`: Append a path to the index
//! - `hash_tracked`: Compute the identifier of the tracked content
//! - `write_commit`: Snapshot the tracked files and prepend a log record
//! - `restore_snapshot`: Overwrite working files from a snapshot

pub mod hash_tracked;
pub mod restore_snapshot;
pub mod track_file;
pub mod write_commit;
