//! Field-level validation rules shared by user and post inputs.

use validator::{ValidationError, ValidationErrors};

use crate::constants::{MSG_BLANK_EMAIL, MSG_BLANK_NAME, MSG_BLANK_PASSWORD};
use crate::error::DomainError;

/// Fields checked on creation, in reporting order.
const REQUIRED_FIELDS: [(&str, &str); 3] = [
    ("name", MSG_BLANK_NAME),
    ("email", MSG_BLANK_EMAIL),
    ("password", MSG_BLANK_PASSWORD),
];

/// True when the value is empty or only whitespace.
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Custom `validator` rule rejecting empty or whitespace-only strings.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if is_blank(value) {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Drop a value that is blank, keeping present non-blank values.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !is_blank(v))
}

/// Turn `validator` errors into the message of the first failing field.
///
/// Fields are checked in name, email, password order so the reported
/// message does not depend on map iteration order.
pub fn first_failure(errors: &ValidationErrors) -> DomainError {
    let failed = errors.field_errors();
    REQUIRED_FIELDS
        .iter()
        .find(|(field, _)| failed.contains_key(*field))
        .map(|(_, message)| DomainError::validation(*message))
        .unwrap_or_else(|| DomainError::validation(errors.to_string()))
}

/// Validated name, email and plain-text password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFields {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RequiredFields {
    /// Take values that already passed `validator` checks.
    pub(crate) fn from_validated(
        name: Option<String>,
        email: Option<String>,
        password: Option<String>,
    ) -> Self {
        Self {
            name: name.unwrap_or_default(),
            email: email.unwrap_or_default(),
            password: password.unwrap_or_default(),
        }
    }
}
