use regex::Regex;
use std::sync::LazyLock;
use template_insight_types::SourceLocation;

/// `path:line:` or `path:line:column:` at the start of a diagnostic line.
/// An optional drive letter keeps Windows paths intact. The path must contain
/// a non-digit, so time stamps such as `12:34:56` are not read as locations.
static LINE_PREFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<file>(?:[A-Za-z]:)?[^:\s][^:\n]*):(?P<line>\d+):(?:(?P<col>\d+):)?")
        .expect("line prefix regex is valid")
});

/// Locate the diagnostic line containing byte `offset` and parse its
/// `file:line[:column]:` prefix. Returns `None` when the line has no prefix.
///
/// `offset` must lie on a char boundary (any offset returned by `str::find` does).
pub fn locate_line_prefix(log_text: &str, offset: usize) -> Option<SourceLocation> {
    let offset = offset.min(log_text.len());
    let start = log_text[..offset].rfind('\n').map_or(0, |i| i + 1);
    let end = log_text[offset..]
        .find('\n')
        .map_or(log_text.len(), |i| offset + i);
    let line = &log_text[start..end];

    let caps = LINE_PREFIX.captures(line)?;
    let file = caps.name("file")?.as_str();
    if file.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let line_no = caps.name("line")?.as_str().parse::<u32>().ok()?;
    let column = caps
        .name("col")
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .unwrap_or(0);

    Some(SourceLocation {
        file: file.to_string(),
        line: line_no,
        column,
    })
}
