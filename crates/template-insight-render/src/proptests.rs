//! Property-based tests for the JSON serializer.
//!
//! Arbitrary messages (control characters, quotes, backslashes, non-ASCII)
//! must survive a serialize/parse cycle unchanged.

use crate::json::serialize_json;
use proptest::prelude::*;
use template_insight_types::{
    IssueCode, Severity, SourceLocation, TemplateInsightResult, TemplateIssue,
};

/// Strings biased towards characters that need escaping.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        prop::string::string_regex("[\\x00-\\x1f\"\\\\/a-z ]{0,24}").unwrap(),
        any::<String>(),
    ]
}

fn arb_severity() -> impl Strategy<Value = Severity> {
    prop_oneof![
        Just(Severity::Info),
        Just(Severity::Warning),
        Just(Severity::Error),
    ]
}

fn arb_location() -> impl Strategy<Value = SourceLocation> {
    (arb_text(), any::<u32>(), any::<u32>()).prop_map(|(file, line, column)| SourceLocation {
        file,
        line,
        column,
    })
}

fn arb_issue() -> impl Strategy<Value = TemplateIssue> {
    (
        arb_text(),
        arb_text(),
        arb_severity(),
        arb_text(),
        arb_text(),
        prop::option::of(arb_location()),
    )
        .prop_map(
            |(code, category, severity, short_message, detailed_message, location)| {
                TemplateIssue {
                    code: IssueCode::new(code),
                    category,
                    severity,
                    short_message,
                    detailed_message,
                    location,
                }
            },
        )
}

fn arb_result() -> impl Strategy<Value = TemplateInsightResult> {
    prop::collection::vec(arb_issue(), 0..6).prop_map(|issues| TemplateInsightResult { issues })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn json_parses_back_to_the_same_result(result in arb_result()) {
        let json = serialize_json(&result);
        let parsed: TemplateInsightResult =
            serde_json::from_str(&json).expect("serializer output must parse");
        prop_assert_eq!(parsed, result);
    }

    #[test]
    fn absent_location_leaves_no_key(result in arb_result()) {
        let json = serialize_json(&result);
        let doc: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        let issues = doc["issues"].as_array().expect("issues array");
        prop_assert_eq!(issues.len(), result.issues.len());

        for (value, issue) in issues.iter().zip(&result.issues) {
            let object = value.as_object().expect("issue object");
            prop_assert_eq!(object.contains_key("location"), issue.location.is_some());
        }
        // compact output escapes every newline
        prop_assert!(!json.contains('\n'));
    }
}
