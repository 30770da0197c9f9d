//! Field icons

use crate::state::FieldName;

/// Icon shown in front of a field label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldIcon {
    User,
    Envelope,
    BirthdayCake,
    UserFriends,
}

impl FieldIcon {
    pub fn for_field(field: FieldName) -> Option<Self> {
        match field {
            FieldName::Name => Some(Self::User),
            FieldName::Email => Some(Self::Envelope),
            FieldName::Age => Some(Self::BirthdayCake),
            FieldName::GuestName => Some(Self::UserFriends),
            FieldName::AttendingWithGuest => None,
        }
    }

    pub fn glyph(&self, ascii: bool) -> &'static str {
        match (self, ascii) {
            (Self::User, false) => "👤",
            (Self::Envelope, false) => "✉",
            (Self::BirthdayCake, false) => "🎂",
            (Self::UserFriends, false) => "👥",
            (Self::User, true) => "*",
            (Self::Envelope, true) => "@",
            (Self::BirthdayCake, true) => "#",
            (Self::UserFriends, true) => "+",
        }
    }
}
