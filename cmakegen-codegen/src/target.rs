//! Target descriptors: one record per build descriptor to generate.

use std::{fmt, path::PathBuf};

use serde::Serialize;

/// Which family of build descriptor a target needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TargetKind {
    /// A compute op compiled into an extension module
    NativeOp,
    /// A vendored library compiled as a static library
    Thirdparty,
}

impl TargetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::NativeOp => "native-op",
            Self::Thirdparty => "thirdparty",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Compiled sources found in a module, relative to the module directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SourceSet {
    pub cpu: Vec<PathBuf>,
    pub cuda: Vec<PathBuf>,
}

impl SourceSet {
    pub fn is_empty(&self) -> bool {
        self.cpu.is_empty() && self.cuda.is_empty()
    }
}

/// How a descriptor picks up its sources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "files", rename_all = "kebab-case")]
pub enum SourceSelection {
    /// Sources are globbed by CMake at configure time
    Glob,
    /// Sources were discovered on disk and are listed explicitly
    Listed(SourceSet),
}

/// Everything needed to render and write one build descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetDescriptor {
    /// Destination file
    pub path: PathBuf,
    pub kind: TargetKind,
    /// Identifier used for targets and the project name
    pub module_name: String,
    /// Identifier used as the prefix of CMake variables
    pub upper_name: String,
    pub sources: SourceSelection,
}

impl TargetDescriptor {
    /// Sources discovered on disk, empty for glob-based descriptors.
    pub fn discovered_sources(&self) -> Vec<&PathBuf> {
        match &self.sources {
            SourceSelection::Glob => Vec::new(),
            SourceSelection::Listed(set) => set.cpu.iter().chain(&set.cuda).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_discovered_sources_order() {
        let target = TargetDescriptor {
            path: PathBuf::from("ops/foo/CMakeLists.txt"),
            kind: TargetKind::NativeOp,
            module_name: "foo".to_string(),
            upper_name: "FOO".to_string(),
            sources: SourceSelection::Listed(SourceSet {
                cpu: vec![PathBuf::from("src/a.cpp")],
                cuda: vec![PathBuf::from("src/b.cu")],
            }),
        };
        assert_eq!(
            target.discovered_sources(),
            vec![&PathBuf::from("src/a.cpp"), &PathBuf::from("src/b.cu")]
        );
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(TargetKind::NativeOp.to_string(), "native-op");
        assert_eq!(TargetKind::Thirdparty.to_string(), "thirdparty");
    }
}
