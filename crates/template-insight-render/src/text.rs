use template_insight_types::{Severity, TemplateInsightResult};

/// Plain-text report, one line per issue.
///
/// With `verbose`, each detailed message follows its issue indented by four
/// spaces. `truncated_reason` adds a trailing `Note:` line.
pub fn render_text(
    result: &TemplateInsightResult,
    truncated_reason: Option<&str>,
    verbose: bool,
) -> String {
    let mut out = String::new();

    if result.is_empty() {
        out.push_str("No template issues found.\n");
    }

    for issue in &result.issues {
        let sev = match issue.severity {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Error => "ERROR",
        };
        out.push_str(&format!("[{}] {} ({})", sev, issue.code, issue.category));
        if let Some(loc) = &issue.location {
            out.push_str(&format!(" {}:{}:{}", loc.file, loc.line, loc.column));
        }
        out.push_str(&format!(" — {}\n", issue.short_message));

        if verbose && !issue.detailed_message.is_empty() {
            for line in issue.detailed_message.lines() {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
    }

    if let Some(reason) = truncated_reason {
        out.push_str(&format!("Note: {}\n", reason));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use template_insight_types::{IssueCode, SourceLocation, TemplateIssue};

    fn sample() -> TemplateInsightResult {
        TemplateInsightResult {
            issues: vec![
                TemplateIssue {
                    code: IssueCode::new("NO_MEMBER"),
                    category: "MemberAccess".to_string(),
                    severity: Severity::Error,
                    short_message: "Type has no such member.".to_string(),
                    detailed_message: "First line.\nSecond line.".to_string(),
                    location: Some(SourceLocation {
                        file: "main.cpp".to_string(),
                        line: 10,
                        column: 5,
                    }),
                },
                TemplateIssue {
                    code: IssueCode::new("TYPE_MISMATCH"),
                    category: "TypeConversion".to_string(),
                    severity: Severity::Warning,
                    short_message: "Cannot convert.".to_string(),
                    detailed_message: String::new(),
                    location: None,
                },
            ],
        }
    }

    #[test]
    fn renders_empty_result() {
        let text = render_text(&TemplateInsightResult::default(), None, false);
        insta::assert_snapshot!(text.trim_end(), @"No template issues found.");
    }

    #[test]
    fn renders_one_line_per_issue() {
        let text = render_text(&sample(), None, false);
        insta::assert_snapshot!(text.trim_end(), @r"
        [ERROR] NO_MEMBER (MemberAccess) main.cpp:10:5 — Type has no such member.
        [WARN] TYPE_MISMATCH (TypeConversion) — Cannot convert.
        ");
    }

    #[test]
    fn verbose_adds_indented_details() {
        let text = render_text(&sample(), None, true);
        assert!(text.contains("\n    First line.\n    Second line.\n"));
        assert_eq!(text.lines().count(), 4);
    }

    #[test]
    fn truncation_note_is_last() {
        let text = render_text(&sample(), Some("issues truncated to max_issues=2"), false);
        assert_eq!(
            text.lines().last(),
            Some("Note: issues truncated to max_issues=2")
        );
    }

    #[test]
    fn note_is_shown_even_when_nothing_was_kept() {
        let text = render_text(
            &TemplateInsightResult::default(),
            Some("issues truncated to max_issues=0"),
            false,
        );
        assert!(text.starts_with("No template issues found.\n"));
        assert!(text.ends_with("Note: issues truncated to max_issues=0\n"));
    }
}
