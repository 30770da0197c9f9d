//! Application state definitions

use super::forms::{
    registration_form, FieldName, RegistrationChange, RegistrationErrors, RegistrationForm,
    RegistrationValues,
};
use std::time::{Duration, Instant};

/// Element holding keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Name,
    Email,
    Age,
    AttendingWithGuest,
    GuestName,
    Submit,
}

const ORDER_WITHOUT_GUEST: [Focus; 5] = [
    Focus::Name,
    Focus::Email,
    Focus::Age,
    Focus::AttendingWithGuest,
    Focus::Submit,
];

const ORDER_WITH_GUEST: [Focus; 6] = [
    Focus::Name,
    Focus::Email,
    Focus::Age,
    Focus::AttendingWithGuest,
    Focus::GuestName,
    Focus::Submit,
];

impl Focus {
    /// The form field behind this focus target, if any
    pub fn field(&self) -> Option<FieldName> {
        match self {
            Self::Name => Some(FieldName::Name),
            Self::Email => Some(FieldName::Email),
            Self::Age => Some(FieldName::Age),
            Self::AttendingWithGuest => Some(FieldName::AttendingWithGuest),
            Self::GuestName => Some(FieldName::GuestName),
            Self::Submit => None,
        }
    }

    /// Tab order for the currently visible fields
    pub fn order(with_guest: bool) -> &'static [Focus] {
        if with_guest {
            &ORDER_WITH_GUEST
        } else {
            &ORDER_WITHOUT_GUEST
        }
    }
}

/// Short press animation on the submit button
#[derive(Debug, Clone)]
pub struct ButtonPressState {
    pub pressed_at: Instant,
}

impl ButtonPressState {
    const DURATION: Duration = Duration::from_millis(150);
    /// Scale at the moment of the press
    const PRESSED_SCALE: f32 = 0.95;

    pub fn new() -> Self {
        Self {
            pressed_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.pressed_at.elapsed() >= Self::DURATION
    }

    /// Current button scale, easing from the pressed scale back to 1.0
    pub fn scale(&self) -> f32 {
        let progress =
            (self.pressed_at.elapsed().as_secs_f32() / Self::DURATION.as_secs_f32()).min(1.0);
        let eased = simple_easing::cubic_out(progress);
        Self::PRESSED_SCALE + (1.0 - Self::PRESSED_SCALE) * eased
    }
}

impl Default for ButtonPressState {
    fn default() -> Self {
        Self::new()
    }
}

/// Whole-application state: the registration form plus its modal and focus
pub struct AppState {
    pub form: RegistrationForm,
    /// Set on every submit, cleared when the modal closes
    pub submitted: bool,
    pub focus: Focus,
    pub button_press: Option<ButtonPressState>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: registration_form(),
            submitted: false,
            focus: Focus::default(),
            button_press: None,
        }
    }
}

impl AppState {
    pub fn values(&self) -> &RegistrationValues {
        self.form.values()
    }

    pub fn errors(&self) -> &RegistrationErrors {
        self.form.errors()
    }

    fn with_guest(&self) -> bool {
        self.values().attending_with_guest.is_yes()
    }

    /// Validate and mark the form as submitted, whatever the outcome
    pub fn submit(&mut self) {
        self.form.handle_submit();
        self.submitted = true;
        self.button_press = Some(ButtonPressState::new());

        // Debug only: stderr shares the terminal with the alternate screen
        let invalid = self.errors().invalid_fields();
        if invalid.is_empty() {
            tracing::debug!("Registration submitted");
        } else {
            tracing::debug!(
                "Registration rejected: {} invalid field(s) {invalid:?}",
                invalid.len()
            );
        }
    }

    /// The summary modal is visible only after a submit that produced no errors
    pub fn show_modal(&self) -> bool {
        self.submitted && self.errors().is_empty()
    }

    /// Hide the modal; values and errors are kept
    pub fn close_modal(&mut self) {
        self.submitted = false;
        tracing::debug!("Summary closed");
    }

    pub fn next_focus(&mut self) {
        let order = Focus::order(self.with_guest());
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = order[(index + 1) % order.len()];
    }

    pub fn prev_focus(&mut self) {
        let order = Focus::order(self.with_guest());
        let index = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = if index == 0 {
            order[order.len() - 1]
        } else {
            order[index - 1]
        };
    }

    /// Flip the attendance select between "No" and "Yes"
    pub fn toggle_attendance(&mut self) {
        let next = self.values().attending_with_guest.toggle();
        self.form
            .handle_change(RegistrationChange::AttendingWithGuest(next));
        if !next.is_yes() && self.focus == Focus::GuestName {
            self.focus = Focus::AttendingWithGuest;
        }
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        let Some(field) = self.focus.field() else {
            return;
        };
        if !field.input_kind().accepts(c) {
            return;
        }
        let Some(current) = self.values().text(field) else {
            return;
        };
        let mut value = current.to_string();
        value.push(c);
        if let Some(change) = RegistrationChange::text(field, value) {
            self.form.handle_change(change);
        }
    }

    /// Remove the last character of the focused text field
    pub fn backspace(&mut self) {
        let Some(field) = self.focus.field() else {
            return;
        };
        let Some(current) = self.values().text(field) else {
            return;
        };
        let mut value = current.to_string();
        if value.pop().is_none() {
            return;
        }
        if let Some(change) = RegistrationChange::text(field, value) {
            self.form.handle_change(change);
        }
    }
}
