//! Enumerate and classify in one step for each run mode.

use std::path::{Path, PathBuf};

use cmakegen_core::Result;
use cmakegen_manifest::{MissingConfig, ScanConfig};

use crate::{
    classify::{Classification, classify_module, classify_path},
    enumerate::{fixed_list, scan_modules},
    target::TargetDescriptor,
};

/// Descriptors for every declared path, in declaration order.
pub fn plan_missing(missing: &MissingConfig, root: &Path) -> Vec<TargetDescriptor> {
    fixed_list(missing, root)
        .iter()
        .map(|path| classify_path(path, &missing.ops_container))
        .collect()
}

/// Outcome of walking an ops directory.
#[derive(Debug, Default)]
pub struct ScanPlan {
    /// One entry per module, sorted by module name
    pub modules: Vec<Classification>,
    /// Directories and files skipped because their names are not valid UTF-8
    pub unreadable: Vec<PathBuf>,
}

/// Classification of every module under `ops_dir`.
pub fn plan_scan(ops_dir: &Path, scan: &ScanConfig) -> Result<ScanPlan> {
    let mut plan = ScanPlan::default();
    for module in scan_modules(ops_dir, scan, &mut plan.unreadable)? {
        let classification = classify_module(&module, scan, &mut plan.unreadable)?;
        plan.modules.push(classification);
    }
    Ok(plan)
}
