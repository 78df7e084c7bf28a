//! Path enumeration: which descriptors a run should consider.

use std::path::{Path, PathBuf};

use cmakegen_core::{Error, Result};
use cmakegen_manifest::{MissingConfig, ScanConfig};

/// An immediate subdirectory of the ops directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleDir {
    /// Directory name as found on disk
    pub name: String,
    pub path: PathBuf,
}

/// Resolve the declared descriptor paths against `root`, keeping their order.
pub fn fixed_list(missing: &MissingConfig, root: &Path) -> Vec<PathBuf> {
    missing.paths().map(|p| resolve(root, Path::new(p))).collect()
}

/// Join `path` onto `root`, leaving it untouched when `root` is the current directory.
pub fn resolve(root: &Path, path: &Path) -> PathBuf {
    if root.as_os_str().is_empty() || root == Path::new(".") {
        path.to_path_buf()
    } else {
        root.join(path)
    }
}

/// List the module directories under `ops_dir`, sorted by name.
///
/// Plain files and excluded names (`__pycache__`, `.git`, plus anything in
/// `scan.exclude`) are skipped. Directories whose names are not valid UTF-8
/// cannot name a CMake target; they are pushed to `unreadable` instead. A
/// missing `ops_dir` is reported as [`Error::NotFound`].
pub fn scan_modules(
    ops_dir: &Path,
    scan: &ScanConfig,
    unreadable: &mut Vec<PathBuf>,
) -> Result<Vec<ModuleDir>> {
    if !ops_dir.is_dir() {
        return Err(Error::not_found(ops_dir));
    }

    let entries = std::fs::read_dir(ops_dir).map_err(|e| Error::read_failure(ops_dir, e))?;

    let mut modules = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::read_failure(ops_dir, e))?;
        let path = entry.path();
        if !path.is_dir() {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            unreadable.push(path);
            continue;
        };
        if scan.is_excluded(&name) {
            continue;
        }
        modules.push(ModuleDir { name, path });
    }

    modules.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(modules)
}

#[cfg(test)]
mod tests {
    use std::{fs, str::FromStr};

    use cmakegen_manifest::Manifest;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_fixed_list_keeps_order() {
        let manifest = Manifest::from_str(
            r#"
            [missing]
            paths = [
                "place2d/thirdparty/Limbo/CMakeLists.txt",
                "place2d/dreamplace/ops/hpwl/src/CMakeLists.txt",
            ]
            "#,
        )
        .unwrap();
        let missing = manifest.missing.unwrap();

        let paths = fixed_list(&missing, Path::new("/work"));

        assert_eq!(
            paths,
            vec![
                PathBuf::from("/work/place2d/thirdparty/Limbo/CMakeLists.txt"),
                PathBuf::from("/work/place2d/dreamplace/ops/hpwl/src/CMakeLists.txt"),
            ]
        );
    }

    #[test]
    fn test_resolve_current_dir() {
        assert_eq!(
            resolve(Path::new("."), Path::new("ops/hpwl/CMakeLists.txt")),
            PathBuf::from("ops/hpwl/CMakeLists.txt")
        );
        assert_eq!(
            resolve(Path::new("/work"), Path::new("ops")),
            PathBuf::from("/work/ops")
        );
    }

    #[test]
    fn test_scan_sorted_and_filtered() {
        let temp = TempDir::new().unwrap();
        for dir in ["rudy", "hpwl", "__pycache__", ".git", "docs", "pin_pos"] {
            fs::create_dir(temp.path().join(dir)).unwrap();
        }
        fs::write(temp.path().join("__init__.py"), "").unwrap();

        let scan = ScanConfig {
            exclude: vec!["docs".to_string()],
            ..ScanConfig::default()
        };
        let modules = scan_modules(temp.path(), &scan, &mut Vec::new()).unwrap();

        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["hpwl", "pin_pos", "rudy"]);
        assert_eq!(modules[0].path, temp.path().join("hpwl"));
    }

    #[test]
    fn test_scan_missing_root() {
        let temp = TempDir::new().unwrap();
        let missing = temp.path().join("ops");

        let err = scan_modules(&missing, &ScanConfig::default(), &mut Vec::new()).unwrap_err();

        assert!(matches!(err, Error::NotFound { .. }));
        assert_eq!(err.path(), missing);
    }

    #[test]
    fn test_scan_empty_root() {
        let temp = TempDir::new().unwrap();
        let modules = scan_modules(temp.path(), &ScanConfig::default(), &mut Vec::new()).unwrap();
        assert!(modules.is_empty());
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn test_non_utf8_module_reported() {
        use std::{ffi::OsStr, os::unix::ffi::OsStrExt};

        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("hpwl")).unwrap();
        let bad = temp.path().join(OsStr::from_bytes(b"op\xff"));
        fs::create_dir(&bad).unwrap();

        let mut unreadable = Vec::new();
        let modules = scan_modules(temp.path(), &ScanConfig::default(), &mut unreadable).unwrap();

        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["hpwl"]);
        assert_eq!(unreadable, vec![bad]);
    }
}
