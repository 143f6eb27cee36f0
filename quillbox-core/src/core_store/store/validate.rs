/*
    validate.rs - Required-field validation

    The single place where "empty" is decided. A value consisting only
    of whitespace counts as empty.
*/

use super::errors::ValidationError;

/// Reject an empty or whitespace-only value for the named field.
pub fn require_text(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::EmptyField(field))
    } else {
        Ok(())
    }
}
