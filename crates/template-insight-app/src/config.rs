//! Config resolution for the CLI: file text (if any) plus overrides.

use anyhow::Context;
use camino::Utf8Path;
use template_insight_settings::{ConfigFormat, Overrides, ResolvedConfig};

/// Parse `config_text` (read from `config_path`) and apply `overrides`.
///
/// `None` means the file was absent; defaults apply. The syntax is chosen from
/// the path's extension and relative paths inside the file are resolved
/// against its directory.
pub fn resolve_settings(
    config_path: &Utf8Path,
    config_text: Option<&str>,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let cfg = match config_text {
        Some(text) => {
            template_insight_settings::parse_config(text, ConfigFormat::from_path(config_path))
                .with_context(|| format!("parse config: {config_path}"))?
        }
        None => template_insight_settings::AppConfigV1::default(),
    };

    template_insight_settings::resolve_config(cfg, overrides, config_path.parent())
        .context("resolve config")
}
