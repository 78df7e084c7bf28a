//! Generate operation - render and write build descriptors.

use cmakegen_codegen::{Classification, RenderSettings, render};
use cmakegen_core::{File, Overwrite, WriteResult};
use eyre::{Context, Result};

use crate::reports::{GenerateReport, Output};

/// Options shared by the `missing` and `scan` runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenerateOptions {
    /// Print artifacts instead of writing them.
    pub dry_run: bool,
    /// How existing descriptors are treated.
    pub overwrite: Overwrite,
}

impl GenerateOptions {
    pub fn new(dry_run: bool, skip_existing: bool) -> Self {
        Self {
            dry_run,
            overwrite: if skip_existing {
                Overwrite::IfMissing
            } else {
                Overwrite::Always
            },
        }
    }
}

/// Render and write every planned target in order.
///
/// Progress lines go to `out` as each target is handled. The first render or
/// write failure stops the run; descriptors already written stay on disk.
pub fn generate(
    plan: Vec<Classification>,
    settings: &RenderSettings,
    opts: GenerateOptions,
    out: &mut dyn Output,
) -> Result<GenerateReport> {
    let mut report = GenerateReport {
        dry_run: opts.dry_run,
        ..Default::default()
    };

    for item in plan {
        let target = match item {
            Classification::Target(target) => target,
            Classification::NoSources { module, reason } => {
                out.key_value("Skipped", &format!("{} ({})", module, reason.describe()));
                report.skipped_modules.push(module);
                continue;
            }
        };

        let content = render(&target, settings)
            .wrap_err_with(|| format!("Failed to render {}", target.path.display()))?;

        let file = File::new(&target.path, content).overwrite(opts.overwrite);

        if opts.dry_run {
            if !file.should_write() {
                out.key_value("Kept", &target.path.display().to_string());
                report.kept.push(target.path);
                continue;
            }
            out.divider(&target.path.display().to_string());
            out.preformatted(file.content().trim_end());
            out.newline();
            report.written.push(target.path);
            continue;
        }

        match file
            .write()
            .wrap_err_with(|| format!("Failed to write {}", target.path.display()))?
        {
            WriteResult::Written { created_dirs } => {
                for dir in &created_dirs {
                    out.key_value("Created directory", &dir.display().to_string());
                }
                out.key_value("Created", &target.path.display().to_string());
                report.written.push(target.path);
            }
            WriteResult::Skipped => {
                out.key_value("Kept", &target.path.display().to_string());
                report.kept.push(target.path);
            }
        }
    }

    Ok(report)
}
