//! Scan operation - descriptors for every op module with compiled sources.

use std::path::Path;

use cmakegen_codegen::{RenderSettings, plan_scan};
use cmakegen_manifest::ScanConfig;
use eyre::{Context, Result};

use super::{GenerateOptions, generate};
use crate::reports::{GenerateReport, Output};

/// Classify every module under `ops_dir` and write a binding descriptor for
/// each one that has compiled sources.
pub fn scan(
    scan: &ScanConfig,
    ops_dir: &Path,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let plan = plan_scan(ops_dir, scan)
        .wrap_err_with(|| format!("Failed to scan {}", ops_dir.display()))?;

    for path in &plan.unreadable {
        out.warning(&format!(
            "skipped {}: name is not valid UTF-8",
            path.display()
        ));
    }

    generate(plan.modules, &RenderSettings::for_scan(scan), opts, out)
}
