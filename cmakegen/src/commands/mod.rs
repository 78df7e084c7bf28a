mod check;
mod completions;
mod list;
mod missing;
mod scan;

use check::CheckCommand;
use clap::{Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use list::ListCommand;
use missing::MissingCommand;
use scan::ScanCommand;

/// Extension trait for exiting on manifest errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for cmakegen_manifest::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

#[derive(Parser)]
#[command(name = "cmakegen")]
#[command(version)]
#[command(about = "Generate missing CMakeLists.txt build descriptors")]
pub(crate) struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Missing(cmd) => cmd.run(),
            Commands::Scan(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Write the descriptors listed under [missing]
    Missing(MissingCommand),

    /// Write binding descriptors for every op module with compiled sources
    Scan(ScanCommand),

    /// Show the targets each mode would generate
    List(ListCommand),

    /// Validate cmakegen.toml without generating anything
    Check(CheckCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_scan_args() {
        let cli = Cli::try_parse_from([
            "cmakegen",
            "scan",
            "--ops-dir",
            "dreamplace/ops",
            "--dry-run",
        ])
        .unwrap();
        let Commands::Scan(cmd) = cli.command else {
            panic!("expected scan");
        };
        assert_eq!(cmd.ops_dir.as_deref(), Some(std::path::Path::new("dreamplace/ops")));
        assert!(cmd.dry_run);
        assert!(cmd.config.is_none());
    }

    #[test]
    fn test_missing_defaults() {
        let cli = Cli::try_parse_from(["cmakegen", "missing"]).unwrap();
        let Commands::Missing(cmd) = cli.command else {
            panic!("expected missing");
        };
        assert_eq!(cmd.config, std::path::PathBuf::from("cmakegen.toml"));
        assert!(cmd.root.is_none());
        assert!(!cmd.skip_existing);
    }
}
