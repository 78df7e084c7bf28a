use std::path::PathBuf;

use clap::Args;
use cmakegen_manifest::{CONFIG_FILENAME, ConfigFile};
use eyre::{Result, bail};

use super::UnwrapOrExit;
use crate::{
    ops::{self, GenerateOptions},
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct MissingCommand {
    /// Path to cmakegen.toml (defaults to ./cmakegen.toml)
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,

    /// Project root the declared paths are relative to (defaults to the config's directory)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Print the descriptors instead of writing them
    #[arg(long)]
    pub dry_run: bool,

    /// Leave descriptors that already exist untouched
    #[arg(long)]
    pub skip_existing: bool,
}

impl MissingCommand {
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let Some(missing) = &config.manifest().missing else {
            bail!("{} has no [missing] section", self.config.display());
        };
        let root = self.root.clone().unwrap_or_else(|| config.root());

        let opts = GenerateOptions::new(self.dry_run, self.skip_existing);
        let mut out = TerminalOutput::new();
        let report = ops::missing(missing, &root, opts, &mut out)?;
        report.render(&mut out);

        Ok(())
    }
}
