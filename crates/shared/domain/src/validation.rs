//! Helpers for reporting `validator` failures.

use validator::ValidationErrors;

/// Fallback when a failing rule carries no message.
pub const VALIDATION_FAILED_MESSAGE: &str = "Validation failed";

/// The message of the first failing field, with fields taken in name order
/// so the result does not depend on hash iteration.
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .and_then(|(_, errors)| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| VALIDATION_FAILED_MESSAGE.to_string())
}
