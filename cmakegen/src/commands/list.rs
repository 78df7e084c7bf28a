use std::path::PathBuf;

use clap::Args;
use cmakegen_manifest::{CONFIG_FILENAME, ConfigFile};
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct ListCommand {
    /// Path to cmakegen.toml (defaults to ./cmakegen.toml)
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Project root the configured paths are relative to (defaults to the config's directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Emit the targets as JSON
    #[arg(long)]
    pub json: bool,
}

impl ListCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let manifest = config.manifest();
        let root = self.root.clone().unwrap_or_else(|| config.root());
        let ops_dir = manifest
            .scan
            .as_ref()
            .and_then(|scan| ops::ops_dir(scan, &root, None));

        let report = ops::list(manifest, &root, ops_dir.as_deref())?;

        if self.json {
            let json = serde_json::to_string_pretty(&report).wrap_err("Failed to encode targets")?;
            println!("{}", json);
        } else {
            report.render(&mut TerminalOutput::new());
        }

        Ok(())
    }
}
