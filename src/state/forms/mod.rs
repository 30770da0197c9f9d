//! Form domain layer
//!
//! Type-safe values, per-field errors and validation for the registration form.

mod field;
mod form_state;
mod validation;

pub use field::{FieldName, GuestAttendance, InputKind};
pub use form_state::{
    registration_form, RegistrationChange, RegistrationErrors, RegistrationForm,
    RegistrationValues,
};
pub use validation::FieldError;
