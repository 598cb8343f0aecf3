//! Diagnostics channel for the analysis engine.
//!
//! The engine never logs on its own. Callers pass an [`AnalysisObserver`]
//! and decide where notices go.

use crate::policy::AnalysisOptions;
use template_insight_types::IssueCode;

/// Where a resolved issue's metadata came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MetadataSource {
    Registry,
    Builtin,
    Unknown,
}

impl MetadataSource {
    pub fn as_str(self) -> &'static str {
        match self {
            MetadataSource::Registry => "registry",
            MetadataSource::Builtin => "builtin",
            MetadataSource::Unknown => "unknown",
        }
    }
}

/// Receives informational notices during analysis. All methods default to no-ops.
pub trait AnalysisObserver {
    fn analysis_started(&self, _options: &AnalysisOptions, _input_len: usize) {}

    fn detector_finished(&self, _detector: &str, _candidates: usize) {}

    fn metadata_resolved(&self, _code: &IssueCode, _source: MetadataSource) {}

    fn issue_filtered(&self, _code: &IssueCode) {}

    fn issues_truncated(&self, _max_issues: usize, _dropped: usize) {}

    fn soft_timeout_exceeded(&self, _elapsed_ms: u64, _timeout_ms: u64) {}

    fn analysis_finished(&self, _emitted: usize) {}
}

/// Observer that discards every notice.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl AnalysisObserver for NoopObserver {}
