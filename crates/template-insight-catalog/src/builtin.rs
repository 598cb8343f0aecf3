//! Built-in descriptions for well-known issue codes.
//!
//! These are used when the registry has no entry for a detected code.

use template_insight_types::{IssueCode, IssueKind, Severity, ids};

/// Category assigned to codes with no registry entry and no built-in description.
pub const UNKNOWN_CATEGORY: &str = "Unknown";

/// Look up the built-in description for `code`.
///
/// Returns `None` if the code is not one of [`ids::all_codes`].
pub fn builtin_kind(code: &str) -> Option<IssueKind> {
    match code {
        ids::CODE_NO_MEMBER => Some(no_member()),
        ids::CODE_NO_MATCHING_FUNCTION => Some(no_matching_function()),
        ids::CODE_TYPE_MISMATCH => Some(type_mismatch()),
        ids::CODE_SUBSTITUTION_FAILURE => Some(substitution_failure()),
        ids::CODE_CONSTRAINT_NOT_SATISFIED => Some(constraint_not_satisfied()),
        _ => None,
    }
}

/// Generic description for a code nothing else knows about.
pub fn unknown_kind(code: &IssueCode) -> IssueKind {
    IssueKind {
        code: code.clone(),
        category: UNKNOWN_CATEGORY.to_string(),
        default_severity: Severity::Error,
        default_short_message: "Unknown issue".to_string(),
        default_detailed_message: format!(
            "No description is available for issue code '{code}'. \
Add it to the issue kinds file to customize how it is reported."
        ),
    }
}

fn kind(
    code: &str,
    category: &str,
    severity: Severity,
    short: &str,
    detailed: &str,
) -> IssueKind {
    IssueKind {
        code: IssueCode::new(code),
        category: category.to_string(),
        default_severity: severity,
        default_short_message: short.to_string(),
        default_detailed_message: detailed.to_string(),
    }
}

fn no_member() -> IssueKind {
    kind(
        ids::CODE_NO_MEMBER,
        "MemberAccess",
        Severity::Error,
        "Detected 'no member' error in diagnostics.",
        "The compiler reported that a type does not have a required member.\n\
This is often caused by using a type that does not meet template requirements \
(e.g., passing an int where a container is expected).",
    )
}

fn no_matching_function() -> IssueKind {
    kind(
        ids::CODE_NO_MATCHING_FUNCTION,
        "OverloadResolution",
        Severity::Error,
        "No matching function for call.",
        "Overload resolution found no viable candidate for a call.\n\
With templates this usually means deduction failed for every candidate, \
or the argument types do not satisfy any overload's parameter types.",
    )
}

fn type_mismatch() -> IssueKind {
    kind(
        ids::CODE_TYPE_MISMATCH,
        "TypeConversion",
        Severity::Error,
        "Type mismatch: value cannot be converted to the expected type.",
        "The compiler could not convert a value to the type a template or function expects.\n\
Check the deduced template arguments and any implicit conversions the code relies on.",
    )
}

fn substitution_failure() -> IssueKind {
    kind(
        ids::CODE_SUBSTITUTION_FAILURE,
        "TemplateDeduction",
        Severity::Error,
        "Template candidate ignored due to substitution failure.",
        "Substituting the deduced template arguments produced an invalid type or expression,\n\
so the candidate was removed from overload resolution (SFINAE). \
The note following the failure names the expression that could not be formed.",
    )
}

fn constraint_not_satisfied() -> IssueKind {
    kind(
        ids::CODE_CONSTRAINT_NOT_SATISFIED,
        "Constraints",
        Severity::Error,
        "Template constraints not satisfied.",
        "A concept or requires-clause evaluated to false for the supplied template arguments.\n\
The compiler notes list which atomic constraint failed.",
    )
}
