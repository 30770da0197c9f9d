//! Read-only summary of a successful registration

use super::base::{render_dialog, DialogConfig};
use crate::state::RegistrationValues;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    Frame,
};

/// Lines echoed back to the user after a successful submit
pub fn summary_lines(values: &RegistrationValues) -> Vec<String> {
    let mut lines = vec![
        format!("Name: {}", values.name),
        format!("Email: {}", values.email),
        format!("Age: {}", values.age),
        format!("Attending with Guest: {}", values.attending_with_guest),
    ];
    if values.attending_with_guest.is_yes() {
        lines.push(format!("Guest Name: {}", values.guest_name));
    }
    lines
}

/// Render the "Submitted Data" overlay centered on the screen
pub fn render_summary_dialog(frame: &mut Frame, values: &RegistrationValues) {
    let hint = vec![
        Span::raw("Press "),
        Span::styled(
            "Enter",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" or "),
        Span::styled(
            "Esc",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" to close"),
    ];

    let lines = summary_lines(values);
    render_dialog(
        frame,
        DialogConfig {
            title: "Submitted Data",
            title_color: Color::Green,
            border_color: Color::Green,
            lines: &lines,
            hint: Some(hint),
            max_width: 60,
        },
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::GuestAttendance;
    use pretty_assertions::assert_eq;

    fn values(attending: GuestAttendance) -> RegistrationValues {
        RegistrationValues {
            name: "Ann".to_string(),
            email: "ann@x.com".to_string(),
            age: "30".to_string(),
            attending_with_guest: attending,
            guest_name: "Bo".to_string(),
        }
    }

    #[test]
    fn test_summary_without_guest() {
        assert_eq!(
            summary_lines(&values(GuestAttendance::No)),
            vec![
                "Name: Ann",
                "Email: ann@x.com",
                "Age: 30",
                "Attending with Guest: No",
            ]
        );
    }

    #[test]
    fn test_summary_with_guest() {
        let lines = summary_lines(&values(GuestAttendance::Yes));
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[3], "Attending with Guest: Yes");
        assert_eq!(lines[4], "Guest Name: Bo");
    }
}
