use crate::level::{LogLevel, parse_log_level};
use crate::model::AppConfigV1;
use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use template_insight_domain::policy::AnalysisConfig;
use template_insight_types::IssueCode;

const DEFAULT_LOG_FILE: &str = "template_insight.log";
const DEFAULT_LOG_MAX_SIZE: u64 = 5 * 1024 * 1024;
const DEFAULT_LOG_MAX_FILES: u32 = 3;

/// Values supplied on the command line. Each one wins over the file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub max_issues: Option<u64>,
    /// Replaces the allow-list from the file when set.
    pub enabled_issue_codes: Option<Vec<String>>,
    pub issue_kinds_file: Option<String>,
    pub extended_detectors: Option<bool>,
    pub format: Option<String>,
    pub verbose: Option<bool>,
    pub output_file: Option<String>,
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Json,
    Text,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OutputSettings {
    pub format: OutputFormat,
    pub verbose: bool,
    /// `None` writes to stdout.
    pub output_file: Option<Utf8PathBuf>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoggerSettings {
    pub level: LogLevel,
    pub file: Utf8PathBuf,
    pub max_size: u64,
    pub max_files: u32,
}

impl Default for LoggerSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: Utf8PathBuf::from(DEFAULT_LOG_FILE),
            max_size: DEFAULT_LOG_MAX_SIZE,
            max_files: DEFAULT_LOG_MAX_FILES,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedConfig {
    pub analysis: AnalysisConfig,
    pub output: OutputSettings,
    pub logger: LoggerSettings,
}

pub fn resolve_config(
    cfg: AppConfigV1,
    overrides: Overrides,
    config_dir: Option<&Utf8Path>,
) -> anyhow::Result<ResolvedConfig> {
    let AppConfigV1 {
        analysis: a,
        output: o,
        logger: l,
    } = cfg;

    let mut analysis = AnalysisConfig::default();
    if let Some(depth) = a.max_template_depth {
        analysis.max_template_depth = depth;
    }
    if let Some(enable) = a.enable_optimizations {
        analysis.enable_optimizations = enable;
    }
    if let Some(timeout) = a.timeout_ms {
        analysis.timeout_ms = timeout;
    }

    if let Some(extended) = overrides.extended_detectors.or(a.extended_detectors) {
        analysis.extended_detectors = extended;
    }

    // max issues
    if let Some(max) = overrides.max_issues.or(a.max_issues) {
        analysis.max_issues = usize::try_from(max)
            .with_context(|| format!("max_issues out of range: {max}"))?;
    }

    // allow-list
    let codes = overrides.enabled_issue_codes.unwrap_or(a.enabled_issue_codes);
    analysis.enabled_issue_codes = codes
        .into_iter()
        .filter(|c| !c.is_empty())
        .map(IssueCode::new)
        .collect();

    // issue kinds file
    analysis.issue_kinds_file = match overrides.issue_kinds_file {
        Some(path) => non_empty_path(path),
        None => non_empty_path(a.issue_kinds_file.unwrap_or_default())
            .map(|p| relative_to(config_dir, p)),
    };

    let format_s = overrides.format.or(o.format);
    let output = OutputSettings {
        format: match format_s.as_deref() {
            Some(v) => parse_format(v)?,
            None => OutputFormat::default(),
        },
        verbose: overrides.verbose.or(o.verbose).unwrap_or(false),
        output_file: non_empty_path(overrides.output_file.or(o.output_file).unwrap_or_default()),
    };

    let defaults = LoggerSettings::default();
    let logger = LoggerSettings {
        level: overrides
            .log_level
            .or(l.level)
            .as_deref()
            .map(parse_log_level)
            .unwrap_or(defaults.level),
        file: non_empty_path(l.file.unwrap_or_default()).unwrap_or(defaults.file),
        max_size: l.max_size.unwrap_or(defaults.max_size),
        max_files: l.max_files.unwrap_or(defaults.max_files),
    };

    Ok(ResolvedConfig {
        analysis,
        output,
        logger,
    })
}

fn parse_format(v: &str) -> anyhow::Result<OutputFormat> {
    match v.to_ascii_lowercase().as_str() {
        "json" => Ok(OutputFormat::Json),
        "text" => Ok(OutputFormat::Text),
        other => anyhow::bail!("unknown output format: {other} (expected json or text)"),
    }
}

fn non_empty_path(s: String) -> Option<Utf8PathBuf> {
    (!s.is_empty()).then(|| Utf8PathBuf::from(s))
}

fn relative_to(base: Option<&Utf8Path>, path: Utf8PathBuf) -> Utf8PathBuf {
    match base {
        Some(dir) if path.is_relative() && !dir.as_str().is_empty() => dir.join(path),
        _ => path,
    }
}
