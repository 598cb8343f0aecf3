use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

/// Machine-readable issue identifier, e.g. `NO_MEMBER`.
///
/// Kept as a string newtype rather than an enum so codes coming from newer
/// registries survive a round trip untouched. Comparison is case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueCode(String);

impl IssueCode {
    pub fn new<S: Into<String>>(s: S) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for IssueCode {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for IssueCode {
    fn from(value: &str) -> Self {
        IssueCode::new(value)
    }
}

impl From<String> for IssueCode {
    fn from(value: String) -> Self {
        IssueCode(value)
    }
}

impl PartialEq<str> for IssueCode {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for IssueCode {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
