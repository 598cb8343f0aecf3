use camino::Utf8PathBuf;
use std::collections::BTreeSet;
use template_insight_types::IssueCode;

/// Runtime options that are not part of the configuration file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisOptions {
    /// Compiler family that produced the log, e.g. `clang` or `gcc`. Informational.
    pub compiler: String,
}

impl Default for AnalysisOptions {
    fn default() -> Self {
        Self {
            compiler: "clang".to_string(),
        }
    }
}

/// Effective analysis policy.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnalysisConfig {
    /// Advisory bound on template instantiation depth; not enforced by matching.
    pub max_template_depth: u32,
    /// Reserved toggle with no current effect.
    pub enable_optimizations: bool,
    /// Soft budget in milliseconds. Exceeding it is reported, never enforced.
    pub timeout_ms: u64,
    /// Allow-list of codes. Empty allows every code.
    pub enabled_issue_codes: BTreeSet<IssueCode>,
    /// Hard cap on the number of emitted issues.
    pub max_issues: usize,
    /// Registry source. `None` means built-in descriptions only.
    pub issue_kinds_file: Option<Utf8PathBuf>,
    /// Run the located template detectors after the baseline `NO_MEMBER` one.
    pub extended_detectors: bool,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            max_template_depth: 64,
            enable_optimizations: true,
            timeout_ms: 5000,
            enabled_issue_codes: BTreeSet::new(),
            max_issues: 1000,
            issue_kinds_file: None,
            extended_detectors: false,
        }
    }
}

impl AnalysisConfig {
    pub fn is_code_enabled(&self, code: &str) -> bool {
        self.enabled_issue_codes.is_empty() || self.enabled_issue_codes.contains(code)
    }
}
