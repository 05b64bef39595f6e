//! Application Layer - Use Cases
//!
//! This layer turns raw request input into validated domain values and
//! orchestrates the repositories.

pub mod asset;
pub mod department;
pub mod employee;

use crate::domain::value_objects::FieldError;

/// Parse an optional update field; absent or blank input means "leave as is"
fn non_blank<T>(
    raw: Option<&str>,
    parse: impl FnOnce(&str) -> Result<T, FieldError>,
) -> Result<Option<T>, FieldError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => parse(value).map(Some),
    }
}
