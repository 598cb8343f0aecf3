//! The `explain` use case: show the metadata an issue code resolves to.

use std::collections::BTreeSet;
use template_insight_catalog::{IssueRegistry, builtin_kind};
use template_insight_domain::observe::MetadataSource;
use template_insight_types::{IssueKind, ids};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    /// Metadata found, either in the registry or among the built-ins.
    Found {
        kind: IssueKind,
        source: MetadataSource,
    },
    /// Unknown code; includes every code that would resolve.
    NotFound {
        code: String,
        available_codes: Vec<String>,
    },
}

/// Look up `code`, registry first.
pub fn run_explain(code: &str, registry: &IssueRegistry) -> ExplainOutput {
    if let Some(kind) = registry.find(code) {
        return ExplainOutput::Found {
            kind: kind.clone(),
            source: MetadataSource::Registry,
        };
    }
    if let Some(kind) = builtin_kind(code) {
        return ExplainOutput::Found {
            kind,
            source: MetadataSource::Builtin,
        };
    }

    let available: BTreeSet<String> = ids::all_codes()
        .iter()
        .map(|c| c.to_string())
        .chain(registry.codes().map(|c| c.to_string()))
        .collect();
    ExplainOutput::NotFound {
        code: code.to_string(),
        available_codes: available.into_iter().collect(),
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(kind: &IssueKind, source: MetadataSource) -> String {
    let mut out = String::new();

    let title = kind.code.as_str();
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");
    out.push_str(&format!("Category: {}\n", kind.category));
    out.push_str(&format!("Severity: {}\n", kind.default_severity.as_str()));
    out.push_str(&format!("Source:   {}\n\n", source.as_str()));
    out.push_str(&kind.default_short_message);
    out.push_str("\n\n");
    if !kind.default_detailed_message.is_empty() {
        out.push_str(&kind.default_detailed_message);
        out.push('\n');
    }

    out
}

/// Format the "not found" error message for terminal display.
pub fn format_not_found(code: &str, available_codes: &[String]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown issue code: {}\n\n", code));
    out.push_str("Available codes:\n");
    for c in available_codes {
        out.push_str(&format!("  - {}\n", c));
    }

    out
}
