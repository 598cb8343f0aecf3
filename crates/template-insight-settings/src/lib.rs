//! Config parsing and resolution.
//!
//! This crate is intentionally IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod level;
mod model;
mod resolve;

use camino::Utf8Path;

pub use level::{LogLevel, parse_log_level};
pub use model::{AnalysisSection, AppConfigV1, LoggerSection, OutputSection};
pub use resolve::{LoggerSettings, OutputFormat, OutputSettings, Overrides, ResolvedConfig};

/// Syntax of a config file.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Toml,
}

impl ConfigFormat {
    /// `.toml` selects TOML; anything else is read as JSON.
    pub fn from_path(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => ConfigFormat::Toml,
            _ => ConfigFormat::Json,
        }
    }
}

/// Parse a JSON config document into a typed model.
pub fn parse_config_json(input: &str) -> anyhow::Result<AppConfigV1> {
    let cfg: AppConfigV1 = serde_json::from_str(input)?;
    Ok(cfg)
}

/// Parse a TOML config document into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<AppConfigV1> {
    let cfg: AppConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Parse `input` using `format`. Blank input yields the default config.
pub fn parse_config(input: &str, format: ConfigFormat) -> anyhow::Result<AppConfigV1> {
    if input.trim().is_empty() {
        return Ok(AppConfigV1::default());
    }
    match format {
        ConfigFormat::Json => parse_config_json(input),
        ConfigFormat::Toml => parse_config_toml(input),
    }
}

/// Resolve the effective config (defaults + file + overrides).
///
/// A relative `analysis.issue_kinds_file` from the file is joined onto
/// `config_dir`; an override path is used as given.
pub fn resolve_config(
    cfg: AppConfigV1,
    overrides: Overrides,
    config_dir: Option<&Utf8Path>,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides, config_dir)
}
