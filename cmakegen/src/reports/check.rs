//! Check command report data structures.

use std::path::PathBuf;

use super::output::{Output, Report};

/// Report data from configuration validation.
#[derive(Debug, Default)]
pub struct CheckReport {
    /// Path to the config file.
    pub config_path: PathBuf,
    /// Warning messages.
    pub warnings: Vec<String>,
    /// Declared native-op descriptors.
    pub native_ops: usize,
    /// Declared thirdparty descriptors.
    pub thirdparty: usize,
    /// Resolved ops directory, when scanning is configured.
    pub ops_dir: Option<PathBuf>,
}

impl Report for CheckReport {
    fn render(&self, out: &mut dyn Output) {
        for warning in &self.warnings {
            out.warning(warning);
        }
        if !self.warnings.is_empty() {
            out.newline();
        }

        out.preformatted(&format!("✓ {} is valid", self.config_path.display()));
        out.newline();
        out.key_value(
            "Declared descriptors",
            &format!(
                "{} ({} native-op, {} thirdparty)",
                self.native_ops + self.thirdparty,
                self.native_ops,
                self.thirdparty
            ),
        );
        match &self.ops_dir {
            Some(dir) => out.key_value("Ops directory", &dir.display().to_string()),
            None => out.key_value("Ops directory", "not configured"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::RecordingOutput;

    #[test]
    fn test_render() {
        let report = CheckReport {
            config_path: PathBuf::from("cmakegen.toml"),
            warnings: vec!["ops directory 'ops' does not exist".to_string()],
            native_ops: 2,
            thirdparty: 1,
            ops_dir: Some(PathBuf::from("ops")),
        };
        let mut out = RecordingOutput::default();
        report.render(&mut out);

        assert_eq!(
            out.lines,
            vec![
                "warning: ops directory 'ops' does not exist",
                "",
                "✓ cmakegen.toml is valid",
                "",
                "Declared descriptors: 3 (2 native-op, 1 thirdparty)",
                "Ops directory: ops",
            ]
        );
    }
}
