//! cmakegen.toml parsing and validation.
//!
//! The manifest declares the descriptor paths known to be missing and the
//! settings used when scanning an ops directory. Errors carry source spans
//! and render through [`miette`].

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod file;
mod manifest;
mod parse;

pub use error::{Error, Result};
pub use file::{CONFIG_FILENAME, ConfigFile};
pub use manifest::{BUILTIN_EXCLUDES, CXX_STANDARDS, Manifest, MissingConfig, ScanConfig};
pub use parse::{DESCRIPTOR_FILENAME, parse_manifest};
