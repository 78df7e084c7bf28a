use std::path::{Path, PathBuf};

use clap::Args;
use cmakegen_manifest::{CONFIG_FILENAME, ConfigFile};
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ScanCommand {
    /// Path to cmakegen.toml (defaults to ./cmakegen.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Project root the configured ops_dir is relative to (defaults to the config's directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Ops directory to scan, overriding [scan].ops_dir
    #[arg(long)]
    pub ops_dir: Option<PathBuf>,

    /// Print the descriptors instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Leave descriptors that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,
}

impl ScanCommand {
    pub fn run(&self) -> Result<()> {
        let config = self.open_config();
        let scan = config
            .as_ref()
            .and_then(|c| c.manifest().scan.clone())
            .unwrap_or_default();
        let root = match (&self.root, &config) {
            (Some(root), _) => root.clone(),
            (None, Some(config)) => config.root(),
            (None, None) => PathBuf::from("."),
        };

        let Some(ops_dir) = ops::ops_dir(&scan, &root, self.ops_dir.as_deref()) else {
            bail!("No ops directory to scan; set [scan].ops_dir or pass --ops-dir");
        };

        let opts = GenerateOptions::new(self.dry_run, self.skip_existing);
        let mut out = TerminalOutput::new();
        let report = ops::scan(&scan, &ops_dir, opts, &mut out)?;
        report.render(&mut out);

        Ok(())
    }

    /// An explicit `--config` must exist; the default one is optional.
    fn open_config(&self) -> Option<ConfigFile> {
        match &self.config {
            Some(path) => Some(ConfigFile::open(path).unwrap_or_exit()),
            None if Path::new(CONFIG_FILENAME).exists() => {
                Some(ConfigFile::open(CONFIG_FILENAME).unwrap_or_exit())
            }
            None => None,
        }
    }
}
