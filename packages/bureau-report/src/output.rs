//! Rendering extracted reports, and raw document trees, as JSON or YAML.

use std::fs;
use std::path::Path;

use clap::ValueEnum;
use serde::Serialize;

use crate::error::Result;
use crate::types::ExtractedReport;

/// Serialization format for an extracted report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML document.
    Yaml,
}

/// Render any serializable value in the requested format.
///
/// Rendered text always ends with a newline.
pub fn render<T: Serialize + ?Sized>(value: &T, format: OutputFormat) -> Result<String> {
    let mut rendered = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)?,
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    if !rendered.ends_with('\n') {
        rendered.push('\n');
    }
    Ok(rendered)
}

/// Render a report in the requested format.
pub fn render_report(report: &ExtractedReport, format: OutputFormat) -> Result<String> {
    render(report, format)
}

/// Render a report and write it to `path`, replacing any existing file.
pub fn write_report(report: &ExtractedReport, format: OutputFormat, path: &Path) -> Result<()> {
    let rendered = render_report(report, format)?;
    fs::write(path, rendered)?;
    tracing::debug!(path = %path.display(), ?format, "Wrote report");
    Ok(())
}
