//! Core operations.
//!
//! This module contains the business logic for cmakegen commands,
//! separated from CLI argument parsing and output rendering.

pub mod check;
pub mod generate;
pub mod list;
pub mod missing;
pub mod scan;

use std::path::{Path, PathBuf};

use cmakegen_codegen::resolve;
use cmakegen_manifest::ScanConfig;

pub use check::check;
pub use generate::{GenerateOptions, generate};
pub use list::list;
pub use missing::missing;
pub use scan::scan;

/// The ops directory a scan should walk.
///
/// An explicit override is used as given; otherwise the configured
/// `ops_dir` is resolved against `root`.
pub fn ops_dir(scan: &ScanConfig, root: &Path, explicit: Option<&Path>) -> Option<PathBuf> {
    match explicit {
        Some(dir) => Some(dir.to_path_buf()),
        None => scan.ops_dir.as_deref().map(|dir| resolve(root, dir)),
    }
}
