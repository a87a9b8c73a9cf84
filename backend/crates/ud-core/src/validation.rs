use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::panic::Location;

/// Require a non-blank value for a mandatory input field.
///
/// Returns the value unchanged; callers decide whether to trim it.
#[track_caller]
pub fn require_field<'a>(field: &str, value: Option<&'a str>) -> CoreResult<&'a str> {
    match value {
        Some(v) if !v.trim().is_empty() => Ok(v),
        _ => Err(CoreError::Validation {
            message: format!("{} is required", field),
            field: Some(field.to_string()),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
