//! Shared field validators.

use validator::ValidationError;

/// Reject strings that are empty or contain only whitespace.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
