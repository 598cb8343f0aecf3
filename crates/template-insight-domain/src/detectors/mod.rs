//! Pattern detectors.
//!
//! A detector only decides whether and where a pattern occurs. It never sees
//! the registry or the configuration. New detectors are added by registering
//! them in a [`DetectorSet`]; the engine does not change.

use crate::model::Candidate;
use crate::observe::AnalysisObserver;
use crate::policy::AnalysisConfig;
use template_insight_types::ids;

mod location;
mod phrase;


pub use location::locate_line_prefix;
pub use phrase::PhraseDetector;

/// A scan routine over raw log text.
pub trait Detector: Send + Sync {
    fn scan(&self, log_text: &str) -> Vec<Candidate>;

    /// Name used in diagnostics notices.
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

impl<F> Detector for F
where
    F: Fn(&str) -> Vec<Candidate> + Send + Sync,
{
    fn scan(&self, log_text: &str) -> Vec<Candidate> {
        self(log_text)
    }
}

/// Ordered list of detectors. Candidates are concatenated in registration order.
#[derive(Default)]
pub struct DetectorSet {
    detectors: Vec<Box<dyn Detector>>,
}

impl DetectorSet {
    /// An empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// The baseline set: `NO_MEMBER` only.
    pub fn builtin() -> Self {
        Self::new().with(no_member())
    }

    /// The baseline detector followed by the located template detectors, in
    /// their fixed order.
    pub fn extended() -> Self {
        Self::builtin()
            .with(no_matching_function())
            .with(type_mismatch())
            .with(substitution_failure())
            .with(constraint_not_satisfied())
    }

    /// [`DetectorSet::extended`] when `config.extended_detectors` is set, else the baseline.
    pub fn for_config(config: &AnalysisConfig) -> Self {
        if config.extended_detectors {
            Self::extended()
        } else {
            Self::builtin()
        }
    }

    pub fn register<D: Detector + 'static>(&mut self, detector: D) {
        self.detectors.push(Box::new(detector));
    }

    pub fn with<D: Detector + 'static>(mut self, detector: D) -> Self {
        self.register(detector);
        self
    }

    pub fn len(&self) -> usize {
        self.detectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detectors.is_empty()
    }

    /// Run every detector over `log_text`.
    pub fn scan_all(&self, log_text: &str, observer: &dyn AnalysisObserver) -> Vec<Candidate> {
        let mut out = Vec::new();
        for detector in &self.detectors {
            let found = detector.scan(log_text);
            observer.detector_finished(detector.name(), found.len());
            out.extend(found);
        }
        out
    }
}

impl std::fmt::Debug for DetectorSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.detectors.iter().map(|d| d.name()))
            .finish()
    }
}

/// Presence of "no member"; reports no location.
pub fn no_member() -> PhraseDetector {
    PhraseDetector::presence_only(ids::CODE_NO_MEMBER, &["no member"])
}

pub fn no_matching_function() -> PhraseDetector {
    PhraseDetector::new(
        ids::CODE_NO_MATCHING_FUNCTION,
        &[
            "no matching function for call to",
            "no matching member function for call to",
        ],
    )
}

pub fn type_mismatch() -> PhraseDetector {
    PhraseDetector::new(
        ids::CODE_TYPE_MISMATCH,
        &[
            "cannot convert",
            "no viable conversion",
            "invalid conversion from",
        ],
    )
}

pub fn substitution_failure() -> PhraseDetector {
    PhraseDetector::new(ids::CODE_SUBSTITUTION_FAILURE, &["substitution failure"])
}

pub fn constraint_not_satisfied() -> PhraseDetector {
    PhraseDetector::new(
        ids::CODE_CONSTRAINT_NOT_SATISFIED,
        &["constraints not satisfied", "was not satisfied"],
    )
}
