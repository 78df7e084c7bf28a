use std::path::PathBuf;

use clap::Args;
use cmakegen_manifest::{CONFIG_FILENAME, ConfigFile};
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CheckCommand {
    /// Path to cmakegen.toml (defaults to ./cmakegen.toml)
    #[arg(short, long, default_value = CONFIG_FILENAME)]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let config = ConfigFile::open(&self.config).unwrap_or_exit();
        let report = ops::check(&config, &config.root());
        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
