//! List operation - classify targets without rendering.

use std::path::Path;

use cmakegen_codegen::{Classification, plan_missing, plan_scan};
use cmakegen_manifest::Manifest;
use eyre::{Context, Result};

use crate::reports::{ListReport, SkippedModule};

/// Collect every target both run modes would produce.
///
/// The scan half is left empty when no ops directory is known.
pub fn list(manifest: &Manifest, root: &Path, ops_dir: Option<&Path>) -> Result<ListReport> {
    let mut report = ListReport::default();

    if let Some(missing) = &manifest.missing {
        report.declared = plan_missing(missing, root);
    }

    if let (Some(scan), Some(ops_dir)) = (&manifest.scan, ops_dir) {
        let plan = plan_scan(ops_dir, scan)
            .wrap_err_with(|| format!("Failed to scan {}", ops_dir.display()))?;
        report.unreadable = plan.unreadable;
        for item in plan.modules {
            match item {
                Classification::Target(target) => report.scanned.push(target),
                Classification::NoSources { module, reason } => {
                    report.skipped.push(SkippedModule {
                        module,
                        reason: reason.describe(),
                    })
                }
            }
        }
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_lists_both_modes() {
        let temp = TempDir::new().unwrap();
        let ops = temp.path().join("ops");
        fs::create_dir_all(ops.join("foo/src")).unwrap();
        fs::write(ops.join("foo/src/a.cpp"), "").unwrap();
        fs::create_dir_all(ops.join("bar/src")).unwrap();

        let manifest = Manifest::from_str(
            r#"
            [missing]
            paths = ["place2d/thirdparty/Limbo/CMakeLists.txt"]

            [scan]
            ops_dir = "ops"
            "#,
        )
        .unwrap();

        let report = list(&manifest, temp.path(), Some(&ops)).unwrap();

        assert_eq!(report.declared.len(), 1);
        assert_eq!(report.declared[0].module_name, "Limbo");
        assert_eq!(report.scanned.len(), 1);
        assert_eq!(report.scanned[0].module_name, "foo");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].module, "bar");
        // Nothing is written
        assert!(!ops.join("foo/CMakeLists.txt").exists());
        assert!(!temp.path().join("place2d").exists());
    }

    #[test]
    fn test_scan_without_ops_dir() {
        let manifest = Manifest::from_str("[scan]\ncxx_standard = 17\n").unwrap();
        let report = list(&manifest, Path::new("."), None).unwrap();
        assert!(report.scanned.is_empty());
        assert!(report.declared.is_empty());
    }
}
