//! Property-based tests for the analysis engine.
//!
//! These tests use proptest to verify invariants around:
//! - presence-based detection of the baseline pattern
//! - allow-list filtering and the max-issues cap
//! - order preservation through filtering

use crate::engine::analyze;
use crate::policy::{AnalysisConfig, AnalysisOptions};
use crate::test_support::{config_allowing, config_with_max, extended};
use proptest::prelude::*;
use template_insight_catalog::IssueRegistry;
use template_insight_types::{IssueCode, IssueKind, Severity, ids};

// ============================================================================
// Strategies
// ============================================================================

/// Log-like text: lower-case words, digits, punctuation and newlines.
fn arb_log_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9 :.'\n]{0,200}").unwrap()
}

/// Text that cannot contain the baseline trigger.
fn arb_text_without_no_member() -> impl Strategy<Value = String> {
    arb_log_text().prop_filter("must not contain 'no member'", |s| !s.contains("no member"))
}

/// A log line with a compiler-style location prefix.
fn arb_prefixed_line() -> impl Strategy<Value = (String, u32, u32)> {
    (
        prop::string::string_regex("[a-z]{1,8}\\.(cpp|hpp|h)").unwrap(),
        1u32..10_000,
        1u32..500,
    )
}

/// Phrases the located detectors react to; never "no member".
const OTHER_TRIGGERS: &[&str] = &[
    "no matching function for call to",
    "no matching member function for call to",
    "cannot convert",
    "no viable conversion",
    "invalid conversion from",
    "substitution failure",
    "constraints not satisfied",
    "was not satisfied",
];

/// Some of the other template phrases, one per line.
fn arb_other_triggers() -> impl Strategy<Value = String> {
    prop::sample::subsequence(OTHER_TRIGGERS.to_vec(), 0..=OTHER_TRIGGERS.len())
        .prop_map(|phrases| phrases.join("\n"))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn text_without_trigger_yields_nothing(
        text in arb_text_without_no_member(),
        others in arb_other_triggers(),
    ) {
        let text = format!("{text}\n{others}");
        prop_assume!(!text.contains("no member"));
        let registry = IssueRegistry::new();
        let result = analyze(
            &text,
            &AnalysisOptions::default(),
            &AnalysisConfig::default(),
            &registry,
        );
        prop_assert!(result.is_empty());
    }

    #[test]
    fn text_with_trigger_yields_exactly_one_no_member(
        prefix in arb_log_text(),
        suffix in arb_log_text(),
        others in arb_other_triggers(),
        repeats in 1usize..4,
    ) {
        let text = format!("{prefix}{}{suffix}\n{others}", "no member ".repeat(repeats));
        let registry = IssueRegistry::new();
        let result = analyze(
            &text,
            &AnalysisOptions::default(),
            &AnalysisConfig::default(),
            &registry,
        );

        prop_assert_eq!(result.len(), 1);
        let issue = &result.issues[0];
        prop_assert_eq!(issue.code.as_str(), ids::CODE_NO_MEMBER);
        prop_assert_eq!(issue.category.as_str(), "MemberAccess");
        prop_assert_eq!(issue.severity, Severity::Error);
        prop_assert!(!issue.short_message.is_empty());
        prop_assert!(!issue.detailed_message.is_empty());
        prop_assert!(issue.location.is_none());
    }

    #[test]
    fn registry_category_wins(category in "[A-Za-z]{1,16}", text in arb_log_text()) {
        let mut registry = IssueRegistry::new();
        registry.add(IssueKind {
            code: IssueCode::new(ids::CODE_NO_MEMBER),
            category: category.clone(),
            ..IssueKind::default()
        });
        let text = format!("{text}no member");
        let result = analyze(
            &text,
            &AnalysisOptions::default(),
            &AnalysisConfig::default(),
            &registry,
        );
        prop_assert_eq!(result.len(), 1);
        prop_assert_eq!(result.issues[0].category.as_str(), category.as_str());
    }

    #[test]
    fn max_issues_zero_never_emits(text in arb_log_text()) {
        let registry = IssueRegistry::new();
        let text = format!("{text}\nno member\ncannot convert\nsubstitution failure");
        let result = analyze(&text, &AnalysisOptions::default(), &config_with_max(0), &registry);
        prop_assert!(result.is_empty());
    }

    #[test]
    fn result_never_exceeds_cap(text in arb_log_text(), max in 0usize..6) {
        let registry = IssueRegistry::new();
        let text = format!("{text}\nno member\nno matching function for call to\ncannot convert\nsubstitution failure\nconstraints not satisfied");
        let result = analyze(&text, &AnalysisOptions::default(), &extended(config_with_max(max)), &registry);
        prop_assert_eq!(result.len(), max.min(5));
    }

    #[test]
    fn filtered_result_is_ordered_subsequence(
        keep in prop::sample::subsequence(ids::all_codes().to_vec(), 1..=5),
    ) {
        let registry = IssueRegistry::new();
        let text = "no member\nno matching function for call to\ncannot convert\nsubstitution failure\nconstraints not satisfied";
        let result = analyze(text, &AnalysisOptions::default(), &extended(config_allowing(&keep)), &registry);

        let got: Vec<&str> = result.issues.iter().map(|i| i.code.as_str()).collect();
        prop_assert_eq!(got, keep);
    }

    #[test]
    fn location_comes_from_the_matching_line(
        (file, line, col) in arb_prefixed_line(),
        noise in "[0-9 ]{0,40}",
    ) {
        let text = format!("{noise}\n{file}:{line}:{col}: error: cannot convert 'a' to 'b'\n");
        let registry = IssueRegistry::new();
        let cfg = extended(config_allowing(&[ids::CODE_TYPE_MISMATCH]));
        let result = analyze(&text, &AnalysisOptions::default(), &cfg, &registry);
        prop_assert_eq!(result.len(), 1);
        let loc = result.issues[0].location.clone().expect("location");
        prop_assert_eq!(loc.file, file);
        prop_assert_eq!(loc.line, line);
        prop_assert_eq!(loc.column, col);
    }
}
