use template_insight_types::Severity;

/// Map a severity token from a registry source to [`Severity`].
///
/// Case-insensitive. Unrecognized tokens map to `Error` rather than failing.
pub fn parse_severity(token: &str) -> Severity {
    match token.to_ascii_lowercase().as_str() {
        "info" => Severity::Info,
        "warning" | "warn" => Severity::Warning,
        "error" => Severity::Error,
        _ => Severity::Error,
    }
}
