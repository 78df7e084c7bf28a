use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::Builder;

use crate::{Error, Result};

/// Result of a write operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteResult {
    /// File was written. Lists the directories created for it, outermost first.
    Written { created_dirs: Vec<PathBuf> },
    /// File was skipped (already exists)
    Skipped,
}

/// How to handle existing files
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Overwrite {
    /// Always overwrite
    #[default]
    Always,
    /// Only create if file doesn't exist
    IfMissing,
}

/// A rendered file waiting to be written.
#[derive(Debug, Clone)]
pub struct File {
    path: PathBuf,
    content: String,
    overwrite: Overwrite,
}

impl File {
    /// Create a new file with the given path and content (always overwrites)
    pub fn new(path: impl Into<PathBuf>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
            overwrite: Overwrite::Always,
        }
    }

    /// Set how an existing file at the destination is treated.
    pub fn overwrite(mut self, overwrite: Overwrite) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Get the file path
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file content
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Whether [`File::write`] would touch the destination.
    pub fn should_write(&self) -> bool {
        self.overwrite == Overwrite::Always || !self.exists()
    }

    /// Write the file, creating any missing parent directories first.
    pub fn write(&self) -> Result<WriteResult> {
        if !self.should_write() {
            return Ok(WriteResult::Skipped);
        }

        let created_dirs = self
            .path
            .parent()
            .map(missing_ancestors)
            .unwrap_or_default();
        if let Some(innermost) = created_dirs.last() {
            std::fs::create_dir_all(innermost).map_err(|e| Error::write_failure(innermost, e))?;
        }

        write_file(&self.path, &self.content)?;
        Ok(WriteResult::Written { created_dirs })
    }
}

/// Directories in `dir`'s ancestor chain (including `dir`) that do not exist yet,
/// outermost first.
pub fn missing_ancestors(dir: &Path) -> Vec<PathBuf> {
    let mut missing: Vec<PathBuf> = dir
        .ancestors()
        .filter(|p| !p.as_os_str().is_empty())
        .take_while(|p| !p.exists())
        .map(Path::to_path_buf)
        .collect();
    missing.reverse();
    missing
}

/// Stage the content in a sibling temp file and rename it into place.
///
/// The replaced file keeps its permissions; a new file gets the ones a plain
/// create would give it (`0o666` minus the umask on unix).
fn write_file(path: &Path, content: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let existing = std::fs::metadata(path).ok().map(|m| m.permissions());

    let mut staged = staging_builder()
        .tempfile_in(dir)
        .map_err(|e| Error::write_failure(path, e))?;
    staged
        .write_all(content.as_bytes())
        .map_err(|e| Error::write_failure(path, e))?;
    if let Some(permissions) = existing {
        staged
            .as_file()
            .set_permissions(permissions)
            .map_err(|e| Error::write_failure(path, e))?;
    }
    staged
        .persist(path)
        .map_err(|e| Error::write_failure(path, e.error))?;
    Ok(())
}

#[cfg(unix)]
fn staging_builder() -> Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    let mut builder = Builder::new();
    builder.permissions(std::fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn staging_builder() -> Builder<'static, 'static> {
    Builder::new()
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn test_write_file_creates_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        write_file(&path, "hello").unwrap();

        assert!(path.exists());
        assert_eq!(fs::read_to_string(&path).unwrap(), "hello");
    }

    #[test]
    fn test_write_file_overwrites_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        write_file(&path, "first").unwrap();
        write_file(&path, "second").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "second");
    }

    #[test]
    fn test_write_leaves_no_staging_files() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        File::new(&path, "content").write().unwrap();

        let entries: Vec<_> = fs::read_dir(temp.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_write_creates_parent_chain() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("ops").join("hpwl").join("src").join("CMakeLists.txt");

        let result = File::new(&path, "nested").write().unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "nested");
        assert_eq!(
            result,
            WriteResult::Written {
                created_dirs: vec![
                    temp.path().join("ops"),
                    temp.path().join("ops").join("hpwl"),
                    temp.path().join("ops").join("hpwl").join("src"),
                ]
            }
        );
    }

    #[test]
    fn test_file_write_reports_only_new_dirs() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("ops")).unwrap();
        let path = temp.path().join("ops").join("rudy").join("CMakeLists.txt");

        let result = File::new(&path, "x").write().unwrap();

        assert_eq!(
            result,
            WriteResult::Written {
                created_dirs: vec![temp.path().join("ops").join("rudy")]
            }
        );
    }

    #[test]
    fn test_file_write_always_overwrites() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        fs::write(&path, "original").unwrap();

        let result = File::new(&path, "updated").write().unwrap();

        assert_eq!(
            result,
            WriteResult::Written {
                created_dirs: vec![]
            }
        );
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[test]
    fn test_file_write_if_missing_creates_new() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        let file = File::new(&path, "new content").overwrite(Overwrite::IfMissing);
        let result = file.write().unwrap();

        assert!(matches!(result, WriteResult::Written { .. }));
        assert_eq!(fs::read_to_string(&path).unwrap(), "new content");
    }

    #[test]
    fn test_file_write_if_missing_skips_existing() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        fs::write(&path, "original").unwrap();

        let file = File::new(&path, "should not write").overwrite(Overwrite::IfMissing);
        let result = file.write().unwrap();

        assert_eq!(result, WriteResult::Skipped);
        assert_eq!(fs::read_to_string(&path).unwrap(), "original");
    }

    #[test]
    fn test_write_failure_names_path() {
        let temp = TempDir::new().unwrap();
        // A regular file where a directory is expected
        let blocker = temp.path().join("ops");
        fs::write(&blocker, "not a dir").unwrap();
        let path = blocker.join("hpwl").join("CMakeLists.txt");

        let err = File::new(&path, "x").write().unwrap_err();

        assert!(matches!(err, Error::WriteFailure { .. }));
        assert!(err.path().starts_with(&blocker));
    }

    #[test]
    fn test_missing_ancestors_stops_at_existing() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("a").join("b");

        let missing = missing_ancestors(&dir);

        assert_eq!(missing, vec![temp.path().join("a"), dir]);
    }

    #[cfg(unix)]
    #[test]
    fn test_overwrite_keeps_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");
        fs::write(&path, "original").unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o664)).unwrap();

        File::new(&path, "updated").write().unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode, 0o664);
        assert_eq!(fs::read_to_string(&path).unwrap(), "updated");
    }

    #[cfg(unix)]
    #[test]
    fn test_new_file_gets_default_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let plain = temp.path().join("plain.txt");
        fs::write(&plain, "").unwrap();
        let path = temp.path().join("CMakeLists.txt");

        File::new(&path, "fresh").write().unwrap();

        let mode = |p: &Path| fs::metadata(p).unwrap().permissions().mode() & 0o777;
        assert_eq!(mode(&path), mode(&plain));
    }

    #[test]
    fn test_should_write() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("CMakeLists.txt");

        assert!(File::new(&path, "").overwrite(Overwrite::IfMissing).should_write());
        fs::write(&path, "original").unwrap();
        assert!(File::new(&path, "").should_write());
        assert!(!File::new(&path, "").overwrite(Overwrite::IfMissing).should_write());
    }
}
