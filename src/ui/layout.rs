//! Layout components (content area, status bar)

use crate::app::App;
use crate::state::Focus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Create the main layout, reserving the bottom line for the status bar
pub fn create_layout(area: Rect) -> Rect {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    chunks[0]
}

/// Key hints for the current focus
fn get_hints(app: &App) -> &'static str {
    if app.state.show_modal() {
        return "Enter/Esc: close";
    }
    match app.state.focus {
        Focus::AttendingWithGuest => {
            "←/→/Space: toggle | Tab/↑↓: move | Enter/Ctrl+S: submit | Esc: quit"
        }
        Focus::Submit => "Enter: submit | Tab/↑↓: move | Esc: quit",
        _ => "Type to edit | Tab/↑↓: move | Enter/Ctrl+S: submit | Esc: quit",
    }
}

/// Draw the status bar at the bottom of the screen
pub fn draw_status_bar(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::styled(
        format!(" {} ", get_hints(app)),
        Style::default().fg(Color::DarkGray),
    )];

    // Outcome of the last submit while the form stays editable
    let invalid = app.state.errors().len();
    if app.state.submitted && invalid > 0 {
        spans.push(Span::raw("| "));
        spans.push(Span::styled(
            format!("{invalid} field(s) need attention"),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}
