//! Fuzz target for the analysis engine and serializer.
//!
//! Goal: analysis and serialization should **never panic**, the result must
//! respect `max_issues`.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_analyze
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use template_insight::{
    AnalysisConfig, AnalysisOptions, IssueCode, IssueRegistry, analyze, serialize_json,
};

#[derive(Arbitrary, Debug)]
struct Input {
    log: String,
    max_issues: u8,
    enabled: Vec<String>,
    registry_json: Option<String>,
    extended: bool,
}

fuzz_target!(|input: Input| {
    let registry = input
        .registry_json
        .as_deref()
        .and_then(|text| IssueRegistry::from_json_str(text).ok())
        .unwrap_or_default();

    let config = AnalysisConfig {
        max_issues: usize::from(input.max_issues),
        enabled_issue_codes: input.enabled.into_iter().map(IssueCode::new).collect(),
        extended_detectors: input.extended,
        ..AnalysisConfig::default()
    };

    let result = analyze(&input.log, &AnalysisOptions::default(), &config, &registry);
    assert!(result.len() <= config.max_issues);

    let json = serialize_json(&result);
    assert!(json.starts_with(r#"{"issues":["#));
});
