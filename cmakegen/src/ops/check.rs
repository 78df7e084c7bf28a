//! Check operation - configuration sanity beyond parsing.

use std::path::Path;

use cmakegen_codegen::{TargetKind, plan_missing};
use cmakegen_manifest::ConfigFile;

use crate::reports::CheckReport;

/// Summarize a parsed config and warn about likely mistakes.
///
/// Parsing and validation already happened in [`ConfigFile::open`]; this
/// looks at the filesystem the configuration points to.
pub fn check(config: &ConfigFile, root: &Path) -> CheckReport {
    let manifest = config.manifest();
    let mut report = CheckReport {
        config_path: config.path().to_path_buf(),
        ..Default::default()
    };

    if manifest.missing.is_none() && manifest.scan.is_none() {
        report
            .warnings
            .push("no [missing] or [scan] section, nothing to generate".to_string());
    }

    if let Some(missing) = &manifest.missing {
        for target in plan_missing(missing, root) {
            match target.kind {
                TargetKind::NativeOp => report.native_ops += 1,
                TargetKind::Thirdparty => report.thirdparty += 1,
            }
            if target.path.exists() {
                report.warnings.push(format!(
                    "{} already exists and will be overwritten",
                    target.path.display()
                ));
            }
        }
    }

    if let Some(scan) = &manifest.scan {
        match super::ops_dir(scan, root, None) {
            Some(dir) => {
                if !dir.is_dir() {
                    report
                        .warnings
                        .push(format!("ops directory {} does not exist", dir.display()));
                }
                report.ops_dir = Some(dir);
            }
            None => report
                .warnings
                .push("[scan] has no ops_dir, pass --ops-dir when scanning".to_string()),
        }
    }

    report
}
