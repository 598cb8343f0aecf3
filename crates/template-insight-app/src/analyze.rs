//! The `analyze` use case: load the registry, run the engine, keep the report.

use crate::observer::TracingObserver;
use template_insight_catalog::IssueRegistry;
use template_insight_domain::policy::{AnalysisConfig, AnalysisOptions};
use template_insight_domain::report::AnalysisReport;
use template_insight_domain::Analyzer;

/// Input for the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeInput<'a> {
    /// Raw compiler output.
    pub log_text: &'a str,
    pub options: AnalysisOptions,
    pub config: &'a AnalysisConfig,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalyzeOutput {
    pub report: AnalysisReport,
    /// Entries loaded from `issue_kinds_file`; 0 when built-ins were used.
    pub registry_entries: usize,
}

/// Build the registry named by `config.issue_kinds_file`.
///
/// A file that cannot be read or parsed is logged and the analysis falls back
/// to built-in descriptions.
pub fn load_registry(config: &AnalysisConfig) -> IssueRegistry {
    let Some(path) = config.issue_kinds_file.as_deref() else {
        return IssueRegistry::new();
    };
    match IssueRegistry::from_file(path) {
        Ok(registry) => {
            tracing::debug!(path = %path, entries = registry.len(), "loaded issue kinds");
            registry
        }
        Err(err) => {
            tracing::warn!(path = %path, error = %err, "issue kinds not loaded; using built-in descriptions");
            IssueRegistry::new()
        }
    }
}

/// Run the analyze use case. Never fails: bad input yields an empty result.
pub fn run_analyze(input: AnalyzeInput<'_>) -> AnalyzeOutput {
    let registry = load_registry(input.config);
    let observer = TracingObserver;
    let report = Analyzer::new(&registry)
        .with_observer(&observer)
        .analyze(input.log_text, &input.options, input.config);

    AnalyzeOutput {
        report,
        registry_entries: registry.len(),
    }
}
