use template_insight_domain::observe::{AnalysisObserver, MetadataSource};
use template_insight_domain::policy::AnalysisOptions;
use template_insight_types::IssueCode;

/// Forwards analysis notices to `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingObserver;

impl AnalysisObserver for TracingObserver {
    fn analysis_started(&self, options: &AnalysisOptions, input_len: usize) {
        tracing::info!(compiler = %options.compiler, bytes = input_len, "analysis started");
    }

    fn detector_finished(&self, detector: &str, candidates: usize) {
        tracing::debug!(detector, candidates, "detector finished");
    }

    fn metadata_resolved(&self, code: &IssueCode, source: MetadataSource) {
        match source {
            MetadataSource::Unknown => {
                tracing::warn!(%code, "no metadata for issue code; using generic description")
            }
            _ => tracing::trace!(%code, source = source.as_str(), "metadata resolved"),
        }
    }

    fn issue_filtered(&self, code: &IssueCode) {
        tracing::debug!(%code, "issue filtered by enabled_issue_codes");
    }

    fn issues_truncated(&self, max_issues: usize, dropped: usize) {
        tracing::info!(max_issues, dropped, "issue list truncated");
    }

    fn soft_timeout_exceeded(&self, elapsed_ms: u64, timeout_ms: u64) {
        tracing::warn!(elapsed_ms, timeout_ms, "analysis exceeded its time budget");
    }

    fn analysis_finished(&self, emitted: usize) {
        tracing::info!(emitted, "analysis finished");
    }
}
