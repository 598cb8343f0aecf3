//! Well-known issue codes.
//!
//! Codes are an open set: registries may define codes this list does not know about.

pub const CODE_NO_MEMBER: &str = "NO_MEMBER";
pub const CODE_NO_MATCHING_FUNCTION: &str = "NO_MATCHING_FUNCTION";
pub const CODE_TYPE_MISMATCH: &str = "TYPE_MISMATCH";
pub const CODE_SUBSTITUTION_FAILURE: &str = "SUBSTITUTION_FAILURE";
pub const CODE_CONSTRAINT_NOT_SATISFIED: &str = "CONSTRAINT_NOT_SATISFIED";

/// All codes with a built-in description, in detector registration order.
pub fn all_codes() -> &'static [&'static str] {
    &[
        CODE_NO_MEMBER,
        CODE_NO_MATCHING_FUNCTION,
        CODE_TYPE_MISMATCH,
        CODE_SUBSTITUTION_FAILURE,
        CODE_CONSTRAINT_NOT_SATISFIED,
    ]
}
