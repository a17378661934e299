//! Porcelain commands (user-facing operations)
//!
//! Porcelain commands print status text for the user. Recoverable conditions
//! such as a missing argument or an unknown commit become a message; only
//! fatal errors are returned.
//!
//! ## Commands
//!
//! - `config`: Get and set the author name
//! - `add`: Track a file, or list tracked files
//! - `commit`: Snapshot the tracked files
//! - `log`: Show commit history, newest first
//! - `checkout`: Restore working files from a commit

pub mod add;
pub mod checkout;
pub mod commit;
pub mod config;
pub mod log;
