use crate::IssueCode;
use serde::{Deserialize, Serialize};

/// Severity is intentionally small; ordering is by increasing urgency.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    #[default]
    Error,
}

impl Severity {
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
        }
    }
}

/// Where an issue is reported in user code. `line`/`column` are 1-based, 0 = unknown.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    pub file: String,
    pub line: u32,
    pub column: u32,
}

/// Registry entry describing how to present an issue code.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IssueKind {
    pub code: IssueCode,
    /// Free-text grouping label, e.g. `MemberAccess`.
    pub category: String,
    pub default_severity: Severity,
    pub default_short_message: String,
    pub default_detailed_message: String,
}

/// A single template-related finding.
///
/// Metadata is copied in when the issue is resolved, so an issue stays
/// serializable after the registry it came from is gone or reloaded.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateIssue {
    pub code: IssueCode,
    pub category: String,
    pub severity: Severity,
    pub short_message: String,
    pub detailed_message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<SourceLocation>,
}

impl TemplateIssue {
    /// Build an issue from registry metadata.
    pub fn from_kind(kind: &IssueKind, location: Option<SourceLocation>) -> Self {
        Self {
            code: kind.code.clone(),
            category: kind.category.clone(),
            severity: kind.default_severity,
            short_message: kind.default_short_message.clone(),
            detailed_message: kind.default_detailed_message.clone(),
            location,
        }
    }
}

/// Issues in detection order. No deduplication, no re-sorting.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateInsightResult {
    pub issues: Vec<TemplateIssue>,
}

impl TemplateInsightResult {
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }
}
