use crate::detectors::DetectorSet;
use crate::model::Candidate;
use crate::observe::{AnalysisObserver, MetadataSource, NoopObserver};
use crate::policy::{AnalysisConfig, AnalysisOptions};
use crate::report::{AnalysisData, AnalysisReport};
use std::time::Instant;
use template_insight_catalog::{IssueRegistry, builtin_kind, unknown_kind};
use template_insight_types::{TemplateInsightResult, TemplateIssue};

/// Analyze `log_text` with the detectors `config` selects and no observer.
pub fn analyze(
    log_text: &str,
    options: &AnalysisOptions,
    config: &AnalysisConfig,
    registry: &IssueRegistry,
) -> TemplateInsightResult {
    Analyzer::new(registry).analyze(log_text, options, config).result
}

/// Runs detectors, resolves metadata, and applies the configured filters.
///
/// The registry is borrowed read-only for the lifetime of the analyzer.
/// Without explicit detectors, each run uses [`DetectorSet::for_config`].
pub struct Analyzer<'a> {
    registry: &'a IssueRegistry,
    detectors: Option<DetectorSet>,
    observer: &'a dyn AnalysisObserver,
}

impl<'a> Analyzer<'a> {
    pub fn new(registry: &'a IssueRegistry) -> Self {
        Self {
            registry,
            detectors: None,
            observer: &NoopObserver,
        }
    }

    pub fn with_detectors(mut self, detectors: DetectorSet) -> Self {
        self.detectors = Some(detectors);
        self
    }

    pub fn with_observer(mut self, observer: &'a dyn AnalysisObserver) -> Self {
        self.observer = observer;
        self
    }

    pub fn analyze(
        &self,
        log_text: &str,
        options: &AnalysisOptions,
        config: &AnalysisConfig,
    ) -> AnalysisReport {
        let started = Instant::now();
        self.observer.analysis_started(options, log_text.len());

        let selected;
        let detectors = match &self.detectors {
            Some(set) => set,
            None => {
                selected = DetectorSet::for_config(config);
                &selected
            }
        };
        let candidates = detectors.scan_all(log_text, self.observer);
        let candidates_total = candidates.len();

        let resolved = candidates.into_iter().map(|c| self.resolve(c));

        let mut issues: Vec<TemplateIssue> = Vec::new();
        let mut filtered_out = 0usize;
        let mut dropped = 0usize;
        for issue in resolved {
            if !config.is_code_enabled(issue.code.as_str()) {
                self.observer.issue_filtered(&issue.code);
                filtered_out += 1;
                continue;
            }
            if issues.len() >= config.max_issues {
                dropped += 1;
                continue;
            }
            issues.push(issue);
        }

        let mut truncated_reason = None;
        if dropped > 0 {
            self.observer.issues_truncated(config.max_issues, dropped);
            truncated_reason = Some(format!(
                "issues truncated to max_issues={}",
                config.max_issues
            ));
        }

        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
        let soft_timeout_exceeded = elapsed_ms > config.timeout_ms;
        if soft_timeout_exceeded {
            self.observer
                .soft_timeout_exceeded(elapsed_ms, config.timeout_ms);
        }

        self.observer.analysis_finished(issues.len());

        let data = AnalysisData {
            detectors_run: saturating_u32(detectors.len()),
            candidates_total: saturating_u32(candidates_total),
            filtered_out: saturating_u32(filtered_out),
            truncated: saturating_u32(dropped),
            issues_emitted: saturating_u32(issues.len()),
            truncated_reason,
            soft_timeout_exceeded,
        };

        AnalysisReport {
            result: TemplateInsightResult { issues },
            data,
        }
    }

    /// Registry first, then built-in descriptions, then the generic fallback.
    fn resolve(&self, candidate: Candidate) -> TemplateIssue {
        let Candidate { code, location } = candidate;

        if let Some(kind) = self.registry.find(code.as_str()) {
            self.observer
                .metadata_resolved(&code, MetadataSource::Registry);
            return TemplateIssue::from_kind(kind, location);
        }

        let (kind, source) = match builtin_kind(code.as_str()) {
            Some(kind) => (kind, MetadataSource::Builtin),
            None => (unknown_kind(&code), MetadataSource::Unknown),
        };
        self.observer.metadata_resolved(&code, source);
        TemplateIssue::from_kind(&kind, location)
    }
}

fn saturating_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}
