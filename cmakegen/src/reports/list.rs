//! List command report data structures.

use std::path::PathBuf;

use cmakegen_codegen::{SourceSelection, TargetDescriptor};
use serde::Serialize;

use super::output::{Output, Report};

/// Every target each run mode would produce, without rendering anything.
#[derive(Debug, Default, Serialize)]
pub struct ListReport {
    /// Targets from the `[missing]` list.
    pub declared: Vec<TargetDescriptor>,
    /// Targets found by scanning the ops directory.
    pub scanned: Vec<TargetDescriptor>,
    /// Scanned modules that need no descriptor.
    pub skipped: Vec<SkippedModule>,
    /// Scanned entries whose names are not valid UTF-8.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unreadable: Vec<PathBuf>,
}

#[derive(Debug, Serialize)]
pub struct SkippedModule {
    pub module: String,
    pub reason: &'static str,
}

impl Report for ListReport {
    fn render(&self, out: &mut dyn Output) {
        for path in &self.unreadable {
            out.warning(&format!(
                "skipped {}: name is not valid UTF-8",
                path.display()
            ));
        }

        if self.declared.is_empty() && self.scanned.is_empty() && self.skipped.is_empty() {
            out.preformatted("No targets configured");
            return;
        }

        if !self.declared.is_empty() {
            out.section(&format!("Declared ({})", self.declared.len()));
            for target in &self.declared {
                out.list_item(&describe(target));
            }
        }

        if !self.scanned.is_empty() {
            if !self.declared.is_empty() {
                out.newline();
            }
            out.section(&format!("Scanned ({})", self.scanned.len()));
            for target in &self.scanned {
                out.list_item(&describe(target));
            }
        }

        if !self.skipped.is_empty() {
            out.newline();
            out.section("Skipped");
            for skipped in &self.skipped {
                out.list_item(&format!("{} ({})", skipped.module, skipped.reason));
            }
        }
    }
}

fn describe(target: &TargetDescriptor) -> String {
    let mut line = format!(
        "{} [{}] {}",
        target.module_name,
        target.kind,
        target.path.display()
    );
    if let SourceSelection::Listed(sources) = &target.sources {
        line.push_str(&format!(
            " ({} cpu, {} cuda)",
            sources.cpu.len(),
            sources.cuda.len()
        ));
    }
    line
}
