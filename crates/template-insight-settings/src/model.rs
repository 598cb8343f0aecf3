use serde::{Deserialize, Serialize};

/// Config file schema v1.
///
/// This is a *user-facing* config model: every field is optional and unknown
/// keys are ignored so older binaries accept newer files.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfigV1 {
    #[serde(default)]
    pub analysis: AnalysisSection,

    #[serde(default)]
    pub output: OutputSection,

    #[serde(default)]
    pub logger: LoggerSection,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalysisSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_template_depth: Option<u32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enable_optimizations: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,

    /// Allow-list of issue codes; empty or absent allows all.
    #[serde(default)]
    pub enabled_issue_codes: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_issues: Option<u64>,

    /// Path to an issue-kinds JSON file; empty means built-ins only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub issue_kinds_file: Option<String>,

    /// Also run the located template detectors (default: `NO_MEMBER` only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extended_detectors: Option<bool>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSection {
    /// `json` (default) or `text`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub verbose: Option<bool>,

    /// Empty or absent writes to stdout.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_file: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LoggerSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,

    /// Rotate once the log file exceeds this many bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_files: Option<u32>,
}
