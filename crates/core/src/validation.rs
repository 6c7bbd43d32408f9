//! Guard helpers for field-level business rules.
//!
//! Rules are evaluated in the order the caller writes them; the first violated
//! rule short-circuits via `?`.

use crate::error::{DomainError, DomainResult};

/// Fails with a validation error carrying `message` when `violated` holds.
pub fn reject_if(violated: bool, message: &str) -> DomainResult<()> {
    if violated {
        return Err(DomainError::validation(message));
    }
    Ok(())
}

/// Length of a text field in Unicode scalar values.
///
/// Not bytes and not UTF-16 code units: `"😀a"` has length 2.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Treats an absent value the same as an empty one.
pub fn is_null_or_empty(value: Option<&str>) -> bool {
    value.is_none_or(str::is_empty)
}
