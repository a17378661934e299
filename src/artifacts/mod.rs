//! Data structures of the snapshot engine
//!
//! - `core`: Error taxonomy shared across the crate
//! - `objects`: Commit identifiers and commit log records

pub mod core;
pub mod objects;
