//! Core utilities and types for the cmakegen build-descriptor generator.
//!
//! This crate provides the filesystem writer, identifier helpers and the
//! CMake version type shared across the cmakegen crates.

mod error;
mod file;
mod naming;
mod version;

pub use error::{Error, Result};
// File operations
pub use file::{File, Overwrite, WriteResult, missing_ancestors};
// String utilities
pub use naming::{to_identifier, to_lower_identifier, to_upper_identifier};
pub use version::Version;
