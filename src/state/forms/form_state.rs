//! Form state management and form structs

use super::field::{FieldName, GuestAttendance};
use super::validation::FieldError;

/// Values record that a [`FormController`] manages
pub trait FormValues {
    /// A single-field replacement
    type Change;
    /// Companion record of per-field errors
    type Errors: Default;

    fn apply(&mut self, change: Self::Change);
}

/// Controlled form state: current values plus the errors computed at the last submit
pub struct FormController<V: FormValues> {
    values: V,
    errors: V::Errors,
    validate: fn(&V) -> V::Errors,
}

impl<V: FormValues> FormController<V> {
    pub fn new(initial: V, validate: fn(&V) -> V::Errors) -> Self {
        Self {
            values: initial,
            errors: Default::default(),
            validate,
        }
    }

    pub fn values(&self) -> &V {
        &self.values
    }

    pub fn errors(&self) -> &V::Errors {
        &self.errors
    }

    /// Replace one field value. Errors are left as computed at the last submit.
    pub fn handle_change(&mut self, change: V::Change) {
        self.values.apply(change);
    }

    /// Recompute errors from the current values
    pub fn handle_submit(&mut self) {
        self.errors = (self.validate)(&self.values);
    }
}

/// Values of the event registration form
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationValues {
    pub name: String,
    pub email: String,
    /// Kept as typed; parsed only during validation
    pub age: String,
    pub attending_with_guest: GuestAttendance,
    pub guest_name: String,
}

impl RegistrationValues {
    /// Text value of a field (the attendance select has no text)
    pub fn text(&self, field: FieldName) -> Option<&str> {
        match field {
            FieldName::Name => Some(&self.name),
            FieldName::Email => Some(&self.email),
            FieldName::Age => Some(&self.age),
            FieldName::GuestName => Some(&self.guest_name),
            FieldName::AttendingWithGuest => None,
        }
    }
}

/// Replacement of a single registration field
#[derive(Debug, Clone, PartialEq)]
pub enum RegistrationChange {
    Name(String),
    Email(String),
    Age(String),
    AttendingWithGuest(GuestAttendance),
    GuestName(String),
}

impl RegistrationChange {
    /// Build a text change for `field`; `None` for the attendance select
    pub fn text(field: FieldName, value: String) -> Option<Self> {
        match field {
            FieldName::Name => Some(Self::Name(value)),
            FieldName::Email => Some(Self::Email(value)),
            FieldName::Age => Some(Self::Age(value)),
            FieldName::GuestName => Some(Self::GuestName(value)),
            FieldName::AttendingWithGuest => None,
        }
    }
}

impl FormValues for RegistrationValues {
    type Change = RegistrationChange;
    type Errors = RegistrationErrors;

    fn apply(&mut self, change: RegistrationChange) {
        match change {
            RegistrationChange::Name(v) => self.name = v,
            RegistrationChange::Email(v) => self.email = v,
            RegistrationChange::Age(v) => self.age = v,
            RegistrationChange::AttendingWithGuest(v) => self.attending_with_guest = v,
            RegistrationChange::GuestName(v) => self.guest_name = v,
        }
    }
}

/// Per-field validation errors; `None` means the field is valid
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegistrationErrors {
    pub name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub age: Option<FieldError>,
    pub guest_name: Option<FieldError>,
}

impl RegistrationErrors {
    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        match field {
            FieldName::Name => self.name.as_ref(),
            FieldName::Email => self.email.as_ref(),
            FieldName::Age => self.age.as_ref(),
            FieldName::GuestName => self.guest_name.as_ref(),
            FieldName::AttendingWithGuest => None,
        }
    }

    /// Fields that currently carry an error, in form order
    pub fn invalid_fields(&self) -> Vec<FieldName> {
        [
            FieldName::Name,
            FieldName::Email,
            FieldName::Age,
            FieldName::GuestName,
        ]
        .into_iter()
        .filter(|f| self.get(*f).is_some())
        .collect()
    }

    pub fn len(&self) -> usize {
        self.invalid_fields().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// The registration form's controller, starting from blank values
pub type RegistrationForm = FormController<RegistrationValues>;

pub fn registration_form() -> RegistrationForm {
    FormController::new(RegistrationValues::default(), super::validation::validate)
}
