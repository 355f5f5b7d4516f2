//! Input validation utilities.
//!
//! Functions here turn loosely-typed request fields into the values the service stores. A blank
//! field is reported as missing; a present numeric field that does not denote a finite number is
//! rejected rather than coerced.

use crate::text::NonEmptyText;
use crate::{CoreError, CoreResult};
use api_shared::FieldValue;

/// Validates that a text field was supplied and is not blank.
///
/// # Errors
///
/// Returns `CoreError::MissingField` if the field is absent, empty or whitespace-only.
pub fn require_text(field: &'static str, value: Option<&str>) -> CoreResult<NonEmptyText> {
    value
        .and_then(|v| NonEmptyText::new(v).ok())
        .ok_or(CoreError::MissingField(field))
}

/// Validates that a numeric field was supplied at all.
///
/// # Errors
///
/// Returns `CoreError::MissingField` if the field is absent or blank text.
pub fn require_present<'a>(
    field: &'static str,
    value: Option<&'a FieldValue>,
) -> CoreResult<&'a FieldValue> {
    match value {
        Some(v) if !v.is_blank() => Ok(v),
        _ => Err(CoreError::MissingField(field)),
    }
}

/// Converts a supplied numeric field to a finite `f64`.
///
/// # Errors
///
/// Returns `CoreError::InvalidNumber` if the value is text that does not parse, or is not finite.
pub fn require_number(field: &'static str, value: &FieldValue) -> CoreResult<f64> {
    value.as_number().ok_or_else(|| CoreError::InvalidNumber {
        field,
        value: match value {
            FieldValue::Number(n) => n.to_string(),
            FieldValue::Text(t) => t.clone(),
        },
    })
}
