//! Form models for the HTML handlers.
//!
//! Bodies arrive as `application/x-www-form-urlencoded` and are deserialized with
//! [`axum_extra::extract::Form`], which collects repeated keys such as `employee_ids` into a
//! `Vec`. A body that does not deserialize, or a form whose `validate` fails, becomes an
//! [`Error::Validation`].
//!
//! [`Error::Validation`]: crate::errors::Error::Validation

pub mod customers;
pub mod employees;
pub mod named;

use crate::errors::{Error, Result};

/// Maximum length of a first or last name
pub const PERSON_NAME_MAX: usize = 45;
/// Maximum length of a department or company name
pub const ENTITY_NAME_MAX: usize = 100;

/// Trim `value` and require it to be non-empty and at most `max_len` characters.
pub fn required_text(field: &str, value: &str, max_len: usize) -> Result<String> {
    let value = value.trim();
    if value.is_empty() {
        return Err(Error::validation(format!("{field} is required")));
    }
    if value.chars().count() > max_len {
        return Err(Error::validation(format!("{field} must be at most {max_len} characters")));
    }
    Ok(value.to_string())
}
