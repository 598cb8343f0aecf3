use crate::observe::{AnalysisObserver, MetadataSource};
use crate::policy::AnalysisConfig;
use std::cell::RefCell;
use template_insight_types::IssueCode;

pub fn config_allowing(codes: &[&str]) -> AnalysisConfig {
    AnalysisConfig {
        enabled_issue_codes: codes.iter().map(|c| IssueCode::new(*c)).collect(),
        ..AnalysisConfig::default()
    }
}

pub fn config_with_max(max_issues: usize) -> AnalysisConfig {
    AnalysisConfig {
        max_issues,
        ..AnalysisConfig::default()
    }
}

/// `config` with the located template detectors switched on.
pub fn extended(config: AnalysisConfig) -> AnalysisConfig {
    AnalysisConfig {
        extended_detectors: true,
        ..config
    }
}

/// Observer that records every notice for later assertions.
#[derive(Default)]
pub struct RecordingObserver {
    detectors: RefCell<Vec<(String, usize)>>,
    resolutions: RefCell<Vec<(String, MetadataSource)>>,
    filtered: RefCell<Vec<String>>,
    truncations: RefCell<Vec<(usize, usize)>>,
    timeout: RefCell<bool>,
    finished: RefCell<Option<usize>>,
}

impl RecordingObserver {
    pub fn detectors_finished(&self) -> Vec<(String, usize)> {
        self.detectors.borrow().clone()
    }

    pub fn resolutions(&self) -> Vec<(String, MetadataSource)> {
        self.resolutions.borrow().clone()
    }

    pub fn filtered(&self) -> Vec<String> {
        self.filtered.borrow().clone()
    }

    pub fn truncations(&self) -> Vec<(usize, usize)> {
        self.truncations.borrow().clone()
    }

    pub fn timeout_reported(&self) -> bool {
        *self.timeout.borrow()
    }

    pub fn finished(&self) -> Option<usize> {
        *self.finished.borrow()
    }
}

impl AnalysisObserver for RecordingObserver {
    fn detector_finished(&self, detector: &str, candidates: usize) {
        self.detectors
            .borrow_mut()
            .push((detector.to_string(), candidates));
    }

    fn metadata_resolved(&self, code: &IssueCode, source: MetadataSource) {
        self.resolutions
            .borrow_mut()
            .push((code.to_string(), source));
    }

    fn issue_filtered(&self, code: &IssueCode) {
        self.filtered.borrow_mut().push(code.to_string());
    }

    fn issues_truncated(&self, max_issues: usize, dropped: usize) {
        self.truncations.borrow_mut().push((max_issues, dropped));
    }

    fn soft_timeout_exceeded(&self, _elapsed_ms: u64, _timeout_ms: u64) {
        *self.timeout.borrow_mut() = true;
    }

    fn analysis_finished(&self, emitted: usize) {
        *self.finished.borrow_mut() = Some(emitted);
    }
}
