use std::path::{Path, PathBuf};

use crate::{Error, Manifest, Result};

/// Default configuration filename looked up in the working directory.
pub const CONFIG_FILENAME: &str = "cmakegen.toml";

/// A cmakegen.toml file on disk together with its parsed manifest.
pub struct ConfigFile {
    path: PathBuf,
    manifest: Manifest,
}

impl ConfigFile {
    /// Open and parse a cmakegen.toml file.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            Box::new(Error::Io {
                path: path.clone(),
                source: e,
            })
        })?;
        let filename = path.display().to_string();
        let manifest = Manifest::from_str_with_filename(&content, &filename)?;

        Ok(Self { path, manifest })
    }

    /// Get the file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the parsed manifest.
    pub fn manifest(&self) -> &Manifest {
        &self.manifest
    }

    /// Directory relative paths in the manifest are resolved against.
    pub fn root(&self) -> PathBuf {
        match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }
}
