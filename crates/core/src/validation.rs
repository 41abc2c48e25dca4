//! Field validation shared by repositories and handlers.
//!
//! All checks run before any storage call and fail with
//! [`CoreError::Validation`].

use crate::error::CoreError;

/// Maximum length of a category name in characters.
pub const MAX_NAME_LENGTH: usize = 255;

/// Reject an empty required field.
pub fn validate_required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// A term name must be non-empty. There is no upper bound.
pub fn validate_term_name(name: &str) -> Result<(), CoreError> {
    validate_required("Term name", name)
}

/// A category name must be non-empty and at most [`MAX_NAME_LENGTH`] characters.
pub fn validate_category_name(name: &str) -> Result<(), CoreError> {
    validate_required("Category name", name)?;
    validate_max_length("Category name", name)
}

/// Colour codes are `#` followed by exactly six hex digits.
pub fn validate_hex_color(code: &str) -> Result<(), CoreError> {
    let valid = code.len() == 7
        && code.starts_with('#')
        && code[1..].chars().all(|c| c.is_ascii_hexdigit());
    if !valid {
        return Err(CoreError::Validation(format!(
            "Invalid hex color code '{code}', expected #RRGGBB"
        )));
    }
    Ok(())
}

fn validate_max_length(field: &str, value: &str) -> Result<(), CoreError> {
    if value.chars().count() > MAX_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
