//! Generation report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Summary of a `missing` or `scan` run.
///
/// Per-file progress is printed while the run happens; this report renders
/// the closing lines.
#[derive(Debug, Default)]
pub struct GenerateReport {
    /// Whether files were only previewed.
    pub dry_run: bool,
    /// Descriptors written (or previewed on a dry run).
    pub written: Vec<PathBuf>,
    /// Existing descriptors left untouched.
    pub kept: Vec<PathBuf>,
    /// Modules without compiled sources.
    pub skipped_modules: Vec<String>,
}

impl Report for GenerateReport {
    fn render(&self, out: &mut dyn Output) {
        if self.dry_run {
            out.divider("Summary");
            let mut summary = format!(
                "{} {} would be generated",
                self.written.len(),
                plural(self.written.len(), "file", "files")
            );
            if !self.kept.is_empty() {
                summary.push_str(&format!(", {} kept", self.kept.len()));
            }
            out.preformatted(&summary);
            return;
        }

        let mut summary = format!(
            "{} build {} written",
            self.written.len(),
            plural(self.written.len(), "descriptor", "descriptors")
        );
        if !self.kept.is_empty() {
            summary.push_str(&format!(", {} kept", self.kept.len()));
        }
        if !self.skipped_modules.is_empty() {
            summary.push_str(&format!(
                ", {} {} without sources",
                self.skipped_modules.len(),
                plural(self.skipped_modules.len(), "module", "modules")
            ));
        }
        out.key_value("Done", &summary);
    }
}

fn plural<'a>(n: usize, one: &'a str, many: &'a str) -> &'a str {
    if n == 1 { one } else { many }
}
