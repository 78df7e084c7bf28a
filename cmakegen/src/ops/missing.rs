//! Missing operation - stamp out the declared descriptors.

use std::path::Path;

use cmakegen_codegen::{Classification, RenderSettings, plan_missing};
use cmakegen_manifest::MissingConfig;
use eyre::Result;

use super::{GenerateOptions, generate};
use crate::reports::{GenerateReport, Output};

/// Generate every descriptor listed in `[missing]`, resolved against `root`.
pub fn missing(
    missing: &MissingConfig,
    root: &Path,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let plan = plan_missing(missing, root)
        .into_iter()
        .map(Classification::Target)
        .collect();

    generate(plan, &RenderSettings::for_missing(missing), opts, out)
}
