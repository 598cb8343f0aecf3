//! Stable DTOs and IDs used across the template-insight workspace.
//!
//! This crate is intentionally boring:
//! - data types for emitted issues and the analysis result
//! - the issue-code newtype and well-known code constants
//! - issue-kind metadata as stored in the registry

#![forbid(unsafe_code)]

mod code;
pub mod ids;
mod issue;

pub use code::IssueCode;
pub use issue::{IssueKind, Severity, SourceLocation, TemplateInsightResult, TemplateIssue};
