//! Field-level validation for the registration form
//!
//! Every rule is evaluated independently, so one submit can report an error
//! for each invalid field at once.

use super::form_state::{RegistrationErrors, RegistrationValues};
use once_cell::sync::Lazy;
use regex::Regex;

/// Something, an `@`, something, a dot, something. Unanchored.
static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").expect("email pattern compiles"));

/// User-facing validation error attached to a single field
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("Name is required")]
    NameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email must be a valid email address")]
    EmailInvalid,
    #[error("Age is required")]
    AgeRequired,
    #[error("Age must be a number greater than 0")]
    AgeInvalid,
    #[error("Guest name is required if attending with a guest")]
    GuestNameRequired,
}

/// Result of parsing the age text
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AgeInput {
    Empty,
    /// Not a finite number, or not greater than zero
    Invalid,
    Valid(f64),
}

impl AgeInput {
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::Empty;
        }
        match raw.trim().parse::<f64>() {
            Ok(n) if n.is_finite() && n > 0.0 => Self::Valid(n),
            _ => Self::Invalid,
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Map the current values to their per-field errors
pub fn validate(values: &RegistrationValues) -> RegistrationErrors {
    let name = values.name.is_empty().then_some(FieldError::NameRequired);

    let email = if values.email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !is_valid_email(&values.email) {
        Some(FieldError::EmailInvalid)
    } else {
        None
    };

    let age = match AgeInput::parse(&values.age) {
        AgeInput::Empty => Some(FieldError::AgeRequired),
        AgeInput::Invalid => Some(FieldError::AgeInvalid),
        AgeInput::Valid(_) => None,
    };

    let guest_name = (values.attending_with_guest.is_yes() && values.guest_name.is_empty())
        .then_some(FieldError::GuestNameRequired);

    RegistrationErrors {
        name,
        email,
        age,
        guest_name,
    }
}
