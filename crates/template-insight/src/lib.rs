//! Classify C++ compiler diagnostics into structured template issues.
//!
//! ```
//! use template_insight::{AnalysisConfig, AnalysisOptions, IssueRegistry, analyze, serialize_json};
//!
//! let log = "main.cpp:10:5: error: no member named 'begin' in 'int'\n";
//! let registry = IssueRegistry::new();
//! let result = analyze(log, &AnalysisOptions::default(), &AnalysisConfig::default(), &registry);
//!
//! assert_eq!(result.issues[0].code, "NO_MEMBER");
//! assert!(serialize_json(&result).starts_with(r#"{"issues":[{"code":"NO_MEMBER""#));
//! ```

#![forbid(unsafe_code)]

pub use template_insight_catalog::{IssueRegistry, LoadError, builtin_kind, parse_severity};
pub use template_insight_domain::detectors::{self, Detector, DetectorSet};
pub use template_insight_domain::model::Candidate;
pub use template_insight_domain::observe::{AnalysisObserver, MetadataSource, NoopObserver};
pub use template_insight_domain::policy::{AnalysisConfig, AnalysisOptions};
pub use template_insight_domain::report::{AnalysisData, AnalysisReport};
pub use template_insight_domain::{Analyzer, analyze};
pub use template_insight_render::{render_text, serialize_json, serialize_json_pretty};
pub use template_insight_types::{
    IssueCode, IssueKind, Severity, SourceLocation, TemplateInsightResult, TemplateIssue, ids,
};
