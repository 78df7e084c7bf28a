//! Manifest types for cmakegen.toml files.

use std::path::PathBuf;

use cmakegen_core::Version;
use serde::Deserialize;
use toml::Spanned;

/// Root manifest for cmakegen.toml
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Descriptors known to be missing (fixed-list mode)
    pub missing: Option<MissingConfig>,

    /// Ops directory scanning (directory-scan mode)
    pub scan: Option<ScanConfig>,
}

/// `[missing]` section: an explicit list of descriptor paths to stamp out.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MissingConfig {
    /// Version passed to `cmake_minimum_required`
    #[serde(default = "default_missing_minimum")]
    pub cmake_minimum: Version,

    /// Directory name that marks a path as belonging to a native op
    #[serde(default = "default_ops_container")]
    pub ops_container: String,

    /// Descriptor paths, relative to the project root
    pub paths: Vec<Spanned<String>>,
}

impl MissingConfig {
    /// Iterate the declared paths in order.
    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.get_ref().as_str())
    }
}

/// `[scan]` section: generate binding descriptors for every op module.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScanConfig {
    /// Directory holding one subdirectory per op, relative to the project root
    pub ops_dir: Option<PathBuf>,

    /// Version passed to `cmake_minimum_required`
    pub cmake_minimum: Version,

    /// Install destination prefix; each op installs into `<prefix>/<op>`
    pub install_prefix: String,

    /// Value of the `CXX_STANDARD` target property
    pub cxx_standard: u32,

    /// Extra directory names to ignore, on top of the built-in exclusions
    pub exclude: Vec<String>,

    /// Extensions of sources compiled by the host compiler
    pub cpu_extensions: Vec<String>,

    /// Extensions of sources compiled by nvcc
    pub cuda_extensions: Vec<String>,

    /// CUDA files with this suffix are included by other sources and are
    /// left out of the standalone CUDA target
    pub kernel_suffix: String,
}

/// Directory names never treated as op modules.
pub const BUILTIN_EXCLUDES: &[&str] = &[".", "..", "__pycache__", ".git"];

/// C++ standards accepted by CMake's `CXX_STANDARD` property.
pub const CXX_STANDARDS: &[u32] = &[98, 11, 14, 17, 20, 23, 26];

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            ops_dir: None,
            cmake_minimum: Version::new(3, 12),
            install_prefix: "dreamplace/ops".to_string(),
            cxx_standard: 14,
            exclude: Vec::new(),
            cpu_extensions: ["cpp", "cc", "cxx", "c"].map(String::from).to_vec(),
            cuda_extensions: vec!["cu".to_string()],
            kernel_suffix: "_kernel.cu".to_string(),
        }
    }
}

impl ScanConfig {
    /// Whether a directory entry name should be skipped while scanning.
    pub fn is_excluded(&self, name: &str) -> bool {
        BUILTIN_EXCLUDES.contains(&name) || self.exclude.iter().any(|e| e == name)
    }
}

fn default_missing_minimum() -> Version {
    Version::new(3, 5)
}

fn default_ops_container() -> String {
    "ops".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_defaults() {
        let scan = ScanConfig::default();
        assert_eq!(scan.cmake_minimum.to_string(), "3.12");
        assert_eq!(scan.cxx_standard, 14);
        assert_eq!(scan.install_prefix, "dreamplace/ops");
        assert_eq!(scan.cuda_extensions, vec!["cu"]);
        assert!(scan.cpu_extensions.contains(&"cpp".to_string()));
    }

    #[test]
    fn test_builtin_excludes() {
        let scan = ScanConfig {
            exclude: vec!["docs".to_string()],
            ..ScanConfig::default()
        };
        assert!(scan.is_excluded("__pycache__"));
        assert!(scan.is_excluded(".git"));
        assert!(scan.is_excluded("docs"));
        assert!(!scan.is_excluded("hpwl"));
    }
}
