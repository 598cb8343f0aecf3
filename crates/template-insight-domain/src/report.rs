use template_insight_types::TemplateInsightResult;

/// Summary of a single analysis run.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisData {
    pub detectors_run: u32,
    /// Candidates produced by all detectors before filtering.
    pub candidates_total: u32,
    /// Issues removed by the allow-list.
    pub filtered_out: u32,
    /// Issues dropped after `max_issues` was reached.
    pub truncated: u32,
    pub issues_emitted: u32,
    pub truncated_reason: Option<String>,
    pub soft_timeout_exceeded: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AnalysisReport {
    pub result: TemplateInsightResult,
    pub data: AnalysisData,
}
