//! Form field value objects

use std::fmt;
use std::str::FromStr;

/// Fields of the registration form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    Name,
    Email,
    Age,
    AttendingWithGuest,
    GuestName,
}

impl FieldName {
    /// Label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Age => "Age",
            Self::AttendingWithGuest => "Are you attending with a guest?",
            Self::GuestName => "Guest Name",
        }
    }

    /// Input type used to filter typed characters
    pub fn input_kind(&self) -> InputKind {
        match self {
            Self::Email => InputKind::Email,
            Self::Age => InputKind::Number,
            _ => InputKind::Text,
        }
    }
}

/// Kind of text input, mirroring the browser's `type` attribute
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Number,
}

impl InputKind {
    /// Whether a typed character is accepted by this kind of input
    pub fn accepts(&self, c: char) -> bool {
        match self {
            Self::Text => !c.is_control(),
            Self::Email => !c.is_whitespace() && !c.is_control(),
            Self::Number => c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | 'e' | 'E'),
        }
    }
}

/// Answer to "Are you attending with a guest?"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GuestAttendance {
    #[default]
    No,
    Yes,
}

impl GuestAttendance {
    pub fn toggle(&self) -> Self {
        match self {
            Self::No => Self::Yes,
            Self::Yes => Self::No,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::No => "No",
            Self::Yes => "Yes",
        }
    }

    pub fn is_yes(&self) -> bool {
        matches!(self, Self::Yes)
    }
}

impl fmt::Display for GuestAttendance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown attendance option: {0:?} (expected \"Yes\" or \"No\")")]
pub struct UnknownAttendance(pub String);

impl FromStr for GuestAttendance {
    type Err = UnknownAttendance;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "No" => Ok(Self::No),
            "Yes" => Ok(Self::Yes),
            other => Err(UnknownAttendance(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod input_kind {
        use super::*;

        #[test]
        fn test_number_accepts_numeric_literal_chars() {
            for c in "0123456789.+-eE".chars() {
                assert!(InputKind::Number.accepts(c), "should accept {c:?}");
            }
        }

        #[test]
        fn test_number_rejects_letters_and_spaces() {
            assert!(!InputKind::Number.accepts('a'));
            assert!(!InputKind::Number.accepts(' '));
        }

        #[test]
        fn test_email_rejects_whitespace() {
            assert!(InputKind::Email.accepts('@'));
            assert!(!InputKind::Email.accepts(' '));
            assert!(!InputKind::Email.accepts('\t'));
        }

        #[test]
        fn test_text_accepts_spaces() {
            assert!(InputKind::Text.accepts(' '));
            assert!(InputKind::Text.accepts('é'));
            assert!(!InputKind::Text.accepts('\n'));
        }
    }

    mod field_name {
        use super::*;

        #[test]
        fn test_input_kinds() {
            assert_eq!(FieldName::Name.input_kind(), InputKind::Text);
            assert_eq!(FieldName::Email.input_kind(), InputKind::Email);
            assert_eq!(FieldName::Age.input_kind(), InputKind::Number);
            assert_eq!(FieldName::GuestName.input_kind(), InputKind::Text);
        }
    }

    mod guest_attendance {
        use super::*;

        #[test]
        fn test_default_is_no() {
            assert_eq!(GuestAttendance::default(), GuestAttendance::No);
        }

        #[test]
        fn test_toggle_flips() {
            assert_eq!(GuestAttendance::No.toggle(), GuestAttendance::Yes);
            assert_eq!(GuestAttendance::Yes.toggle(), GuestAttendance::No);
        }

        #[test]
        fn test_parse() {
            assert_eq!("Yes".parse::<GuestAttendance>(), Ok(GuestAttendance::Yes));
            assert_eq!("No".parse::<GuestAttendance>(), Ok(GuestAttendance::No));
            assert!("yes".parse::<GuestAttendance>().is_err());
        }

        #[test]
        fn test_display_matches_as_str() {
            assert_eq!(GuestAttendance::Yes.to_string(), "Yes");
        }
    }
}
