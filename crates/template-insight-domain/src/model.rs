use template_insight_types::{IssueCode, SourceLocation};

/// A detector's raw finding: a code and, if known, where it occurred.
///
/// Carries no presentation metadata; that is attached during resolution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Candidate {
    pub code: IssueCode,
    pub location: Option<SourceLocation>,
}

impl Candidate {
    pub fn new(code: impl Into<IssueCode>) -> Self {
        Self {
            code: code.into(),
            location: None,
        }
    }

    pub fn at(code: impl Into<IssueCode>, location: Option<SourceLocation>) -> Self {
        Self {
            code: code.into(),
            location,
        }
    }
}
