//! Render use cases: pick the configured output format and write the result.

use anyhow::Context;
use camino::Utf8Path;
use template_insight_domain::report::AnalysisReport;
use template_insight_settings::{OutputFormat, OutputSettings};

/// Render `report` as configured. Verbose JSON is pretty-printed.
pub fn render_output(report: &AnalysisReport, output: &OutputSettings) -> String {
    match output.format {
        OutputFormat::Json => {
            let mut out = if output.verbose {
                template_insight_render::serialize_json_pretty(&report.result)
            } else {
                template_insight_render::serialize_json(&report.result)
            };
            out.push('\n');
            out
        }
        OutputFormat::Text => template_insight_render::render_text(
            &report.result,
            report.data.truncated_reason.as_deref(),
            output.verbose,
        ),
    }
}

/// Write rendered output to `path`, creating parent directories as needed.
pub fn write_output(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    std::fs::write(path, text).with_context(|| format!("write output: {path}"))?;
    Ok(())
}
