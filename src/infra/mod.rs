//! Infrastructure layer
//!
//! Handles filesystem side effects and platform directories.

pub mod dirs;
pub mod filesystem;
