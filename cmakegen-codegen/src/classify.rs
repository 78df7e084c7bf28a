//! Source classification: decide the descriptor kind and collect sources.

use std::path::{Component, Path, PathBuf};

use cmakegen_core::{Error, Result, to_identifier, to_lower_identifier, to_upper_identifier};
use cmakegen_manifest::{DESCRIPTOR_FILENAME, ScanConfig};

use crate::{
    ModuleDir,
    target::{SourceSelection, SourceSet, TargetDescriptor, TargetKind},
};

/// Directory name that holds vendored libraries.
pub const THIRDPARTY_CONTAINER: &str = "thirdparty";

/// Directory inside a module that holds its compiled sources.
pub const MODULE_SOURCE_DIR: &str = "src";

/// Outcome of classifying a scanned module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Classification {
    /// The module needs a descriptor
    Target(TargetDescriptor),
    /// Nothing to compile, so no descriptor is generated
    NoSources { module: String, reason: SkipReason },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The module has no `src` directory
    NoSourceDir,
    /// `src` exists but holds no compiled files
    NoCompiledFiles,
}

impl SkipReason {
    pub fn describe(&self) -> &'static str {
        match self {
            Self::NoSourceDir => "no src directory",
            Self::NoCompiledFiles => "no compiled sources",
        }
    }
}

/// Classify a declared descriptor path.
///
/// Paths with an `ops_container` segment are native ops named after the
/// directory that follows it; everything else is a thirdparty project named
/// after its directory (skipping a generic `thirdparty` parent).
pub fn classify_path(path: &Path, ops_container: &str) -> TargetDescriptor {
    let mut dirs = segments(path);
    if dirs.last().is_some_and(|last| *last == DESCRIPTOR_FILENAME) {
        dirs.pop();
    }

    let (kind, module_name) = match dirs.iter().position(|s| *s == ops_container) {
        Some(idx) => {
            let op = dirs
                .get(idx + 1)
                .or(dirs.last())
                .copied()
                .unwrap_or(ops_container);
            (TargetKind::NativeOp, to_lower_identifier(op))
        }
        None => (TargetKind::Thirdparty, to_identifier(project_dir(&dirs))),
    };

    TargetDescriptor {
        path: path.to_path_buf(),
        kind,
        upper_name: to_upper_identifier(&module_name),
        module_name,
        sources: SourceSelection::Glob,
    }
}

fn project_dir<'a>(dirs: &[&'a str]) -> &'a str {
    match dirs {
        [.., parent, last] if *last == THIRDPARTY_CONTAINER => *parent,
        [.., last] if *last != THIRDPARTY_CONTAINER => *last,
        _ => "project",
    }
}

fn segments(path: &Path) -> Vec<&str> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect()
}

/// Classify a scanned module by the compiled sources in its `src` directory.
///
/// Files whose names are not valid UTF-8 cannot be written into a descriptor
/// and are pushed to `unreadable`.
pub fn classify_module(
    module: &ModuleDir,
    scan: &ScanConfig,
    unreadable: &mut Vec<PathBuf>,
) -> Result<Classification> {
    let src_dir = module.path.join(MODULE_SOURCE_DIR);
    if !src_dir.is_dir() {
        return Ok(Classification::NoSources {
            module: module.name.clone(),
            reason: SkipReason::NoSourceDir,
        });
    }

    let sources = collect_sources(&src_dir, scan, unreadable)?;
    if sources.is_empty() {
        return Ok(Classification::NoSources {
            module: module.name.clone(),
            reason: SkipReason::NoCompiledFiles,
        });
    }

    let module_name = to_lower_identifier(&module.name);
    Ok(Classification::Target(TargetDescriptor {
        path: module.path.join(DESCRIPTOR_FILENAME),
        kind: TargetKind::NativeOp,
        upper_name: to_upper_identifier(&module_name),
        module_name,
        sources: SourceSelection::Listed(sources),
    }))
}

/// Partition the files directly inside `src_dir` into CPU and CUDA sources,
/// each sorted by file name and relative to the module directory.
fn collect_sources(
    src_dir: &Path,
    scan: &ScanConfig,
    unreadable: &mut Vec<PathBuf>,
) -> Result<SourceSet> {
    let entries = std::fs::read_dir(src_dir).map_err(|e| Error::read_failure(src_dir, e))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read_failure(src_dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        match entry.file_name().into_string() {
            Ok(name) => names.push(name),
            Err(_) => unreadable.push(path),
        }
    }
    names.sort();

    let mut set = SourceSet::default();
    for name in names {
        let Some(ext) = Path::new(&name).extension().and_then(|e| e.to_str()) else {
            continue;
        };
        let relative = PathBuf::from(MODULE_SOURCE_DIR).join(&name);
        if scan.cuda_extensions.iter().any(|e| e == ext) {
            set.cuda.push(relative);
        } else if scan.cpu_extensions.iter().any(|e| e == ext) {
            set.cpu.push(relative);
        }
    }
    Ok(set)
}
