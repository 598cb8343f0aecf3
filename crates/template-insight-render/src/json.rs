use template_insight_types::TemplateInsightResult;

/// Serialize `result` as one compact JSON object with a single `issues` array.
///
/// Issue order is preserved. `location` is omitted when absent.
pub fn serialize_json(result: &TemplateInsightResult) -> String {
    serde_json::to_string(result).expect("serializing TemplateInsightResult is infallible")
}

/// Same document as [`serialize_json`], indented for humans.
pub fn serialize_json_pretty(result: &TemplateInsightResult) -> String {
    serde_json::to_string_pretty(result).expect("serializing TemplateInsightResult is infallible")
}
