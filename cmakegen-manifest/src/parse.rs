//! Manifest parsing from files and strings.

use std::{collections::HashMap, ops::Range, path::Path, str::FromStr};

use miette::SourceSpan;

use crate::{
    CXX_STANDARDS, Error, Manifest, MissingConfig, Result, ScanConfig, error::SourceContext,
};

/// Name of the descriptor file every listed path must point at.
pub const DESCRIPTOR_FILENAME: &str = "CMakeLists.txt";

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "cmakegen.toml")
    }
}

impl Manifest {
    /// Parse a cmakegen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| ctx.parse_error(e))?;

    if let Some(missing) = &manifest.missing {
        validate_missing(missing, &ctx)?;
    }
    if let Some(scan) = &manifest.scan {
        validate_scan(scan, &ctx)?;
    }
    Ok(manifest)
}

fn validate_missing(missing: &MissingConfig, ctx: &SourceContext) -> Result<()> {
    if missing.ops_container.is_empty() || missing.ops_container.contains('/') {
        return Err(ctx.validation_error(
            "ops_container must be a single directory name",
            "use the name of the directory that holds the op modules, e.g. \"ops\"",
            find_key_span(ctx.src(), "ops_container"),
        ));
    }

    let mut seen: HashMap<&str, Range<usize>> = HashMap::new();
    for entry in &missing.paths {
        let path = entry.get_ref().as_str();
        let span = Some(SourceSpan::from(entry.span()));

        if path.trim().is_empty() {
            return Err(ctx.validation_error(
                "empty path",
                "remove the entry or fill in the descriptor path",
                span,
            ));
        }
        if Path::new(path).is_absolute() {
            return Err(ctx.validation_error(
                "path must be relative to the project root",
                "drop the leading '/'; paths are resolved against --root",
                span,
            ));
        }
        if Path::new(path).file_name().and_then(|f| f.to_str()) != Some(DESCRIPTOR_FILENAME) {
            return Err(ctx.validation_error(
                format!("path must end in {}", DESCRIPTOR_FILENAME),
                format!("append '/{}' to the directory path", DESCRIPTOR_FILENAME),
                span,
            ));
        }

        if Path::new(path).parent().is_none_or(|p| p.as_os_str().is_empty()) {
            return Err(ctx.validation_error(
                "path must name the directory the descriptor belongs to",
                "a bare CMakeLists.txt at the project root cannot be classified",
                span,
            ));
        }

        if let Some(first) = seen.get(path) {
            return Err(ctx.duplicate_path_error(
                path,
                first.clone().into(),
                entry.span().into(),
            ));
        }
        seen.insert(path, entry.span());
    }
    Ok(())
}

fn validate_scan(scan: &ScanConfig, ctx: &SourceContext) -> Result<()> {
    if !CXX_STANDARDS.contains(&scan.cxx_standard) {
        return Err(ctx.validation_error(
            format!("unsupported C++ standard {}", scan.cxx_standard),
            "valid values are: 98, 11, 14, 17, 20, 23, 26",
            find_key_span(ctx.src(), "cxx_standard"),
        ));
    }

    for (key, extensions) in [
        ("cpu_extensions", &scan.cpu_extensions),
        ("cuda_extensions", &scan.cuda_extensions),
    ] {
        if extensions.is_empty() {
            return Err(ctx.validation_error(
                format!("{} cannot be empty", key),
                "list at least one extension, e.g. [\"cpp\"]",
                find_key_span(ctx.src(), key),
            ));
        }
        for ext in extensions {
            if ext.is_empty() || ext.starts_with('.') {
                return Err(ctx.validation_error(
                    format!("invalid extension '{}'", ext),
                    "write extensions without the leading dot, e.g. \"cu\"",
                    find_value_span(ctx.src(), ext),
                ));
            }
        }
    }

    if scan.kernel_suffix.is_empty() {
        return Err(ctx.validation_error(
            "kernel_suffix cannot be empty",
            "an empty suffix would drop every CUDA file from the CUDA target",
            find_key_span(ctx.src(), "kernel_suffix"),
        ));
    }
    Ok(())
}

/// Find the span of a `key =` assignment in the TOML source
fn find_key_span(src: &str, key: &str) -> Option<SourceSpan> {
    src.match_indices(key)
        .find(|(pos, _)| {
            let at_line_start = src[..*pos]
                .rsplit('\n')
                .next()
                .is_some_and(|line| line.trim().is_empty());
            let rest = src[pos + key.len()..].trim_start();
            at_line_start && rest.starts_with('=')
        })
        .map(|(pos, _)| SourceSpan::from((pos, key.len())))
}

/// Find the span of a quoted string value in the TOML source
fn find_value_span(src: &str, value: &str) -> Option<SourceSpan> {
    for quote in ['"', '\''] {
        let pattern = format!("{quote}{value}{quote}");
        if let Some(pos) = src.find(&pattern) {
            return Some(SourceSpan::from((pos + 1, value.len())));
        }
    }
    None
}
