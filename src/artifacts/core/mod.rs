//! Core shared types
//!
//! This module contains the error taxonomy shared by every repository area.

pub mod error;
