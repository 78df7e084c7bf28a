//! Rendering of target descriptors into `CMakeLists.txt` text.
//!
//! - [`native_op`] - static library for an op, sources globbed by CMake
//! - [`thirdparty`] - static library for a vendored project
//! - [`binding`] - pybind11 extension modules for a scanned op with listed sources

pub mod binding;
pub mod native_op;
pub mod thirdparty;

use std::path::{Component, Path};

use cmakegen_core::Version;
use cmakegen_manifest::{MissingConfig, ScanConfig};
use eyre::Result;

use crate::target::{SourceSelection, TargetDescriptor, TargetKind};

/// Values shared by every descriptor of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSettings {
    pub cmake_minimum: Version,
    pub cxx_standard: u32,
    pub install_prefix: String,
    pub kernel_suffix: String,
}

impl RenderSettings {
    pub fn for_missing(missing: &MissingConfig) -> Self {
        Self {
            cmake_minimum: missing.cmake_minimum.clone(),
            ..Self::default()
        }
    }

    pub fn for_scan(scan: &ScanConfig) -> Self {
        Self {
            cmake_minimum: scan.cmake_minimum.clone(),
            cxx_standard: scan.cxx_standard,
            install_prefix: scan.install_prefix.clone(),
            kernel_suffix: scan.kernel_suffix.clone(),
        }
    }
}

impl Default for RenderSettings {
    fn default() -> Self {
        let scan = ScanConfig::default();
        Self {
            cmake_minimum: Version::new(3, 5),
            cxx_standard: scan.cxx_standard,
            install_prefix: scan.install_prefix,
            kernel_suffix: scan.kernel_suffix,
        }
    }
}

/// Render the descriptor text for `target`.
///
/// The kind picks the template; native ops with listed sources get the
/// binding layout.
pub fn render(target: &TargetDescriptor, settings: &RenderSettings) -> Result<String> {
    match (target.kind, &target.sources) {
        (TargetKind::Thirdparty, _) => thirdparty::render(target, settings),
        (TargetKind::NativeOp, SourceSelection::Glob) => native_op::render(target, settings),
        (TargetKind::NativeOp, SourceSelection::Listed(sources)) => {
            Ok(binding::render(target, sources, settings))
        }
    }
}

/// A path as written in CMake files: forward slashes, no `./` prefix.
pub(crate) fn cmake_path(path: &Path) -> String {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => Some(s.to_string_lossy().into_owned()),
            Component::ParentDir => Some("..".to_string()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}
