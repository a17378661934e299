//! Command implementations
//!
//! - `plumbing`: Snapshot engine operations returning typed outcomes
//! - `porcelain`: User-facing commands printing status text
//!
//! Plumbing commands provide building blocks, while porcelain commands turn
//! their outcomes into messages.

pub mod plumbing;
pub mod porcelain;
