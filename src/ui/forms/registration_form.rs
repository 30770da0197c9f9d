//! Event registration form rendering

use super::field_renderer::{draw_field, draw_select, FieldProps, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{FieldName, Focus};
use crate::ui::components::{render_submit_button, FieldIcon, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders},
    Frame,
};

const FORM_TITLE: &str = " Event Registration Form ";
const SUBMIT_WIDTH: u16 = 20;

/// Draw the registration form
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let state = &app.state;
    let with_guest = state.values().attending_with_guest.is_yes();

    let block = Block::default()
        .title(FORM_TITLE)
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(block, area);

    let mut constraints = vec![
        Constraint::Length(FIELD_HEIGHT), // Name
        Constraint::Length(FIELD_HEIGHT), // Email
        Constraint::Length(FIELD_HEIGHT), // Age
        Constraint::Length(3),            // Attending with guest
    ];
    if with_guest {
        constraints.push(Constraint::Length(FIELD_HEIGHT)); // Guest name
    }
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Submit
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);

    let text_fields = [FieldName::Name, FieldName::Email, FieldName::Age];
    for (field, chunk) in text_fields.into_iter().zip(chunks.iter()) {
        draw_text_field(frame, *chunk, app, field);
    }

    draw_select(
        frame,
        chunks[3],
        FieldName::AttendingWithGuest.label(),
        state.values().attending_with_guest,
        state.focus == Focus::AttendingWithGuest,
    );

    let mut next = 4;
    if with_guest {
        draw_text_field(frame, chunks[next], app, FieldName::GuestName);
        next += 1;
    }

    // Skip the spacer row
    let button_row = chunks[next + 1];
    let button_area = Rect {
        x: button_row.x,
        width: SUBMIT_WIDTH.min(button_row.width),
        ..button_row
    };
    render_submit_button(
        frame,
        button_area,
        state.focus == Focus::Submit,
        state.button_press.as_ref(),
    );
}

fn draw_text_field(frame: &mut Frame, area: Rect, app: &App, field: FieldName) {
    let state = &app.state;
    let icon = if app.config.show_icons() {
        FieldIcon::for_field(field).map(|icon| icon.glyph(app.config.ascii_icons()))
    } else {
        None
    };

    let props = FieldProps {
        label: field.label(),
        kind: field.input_kind(),
        value: state.values().text(field).unwrap_or_default(),
        error: state.errors().get(field),
        icon,
        is_active: state.focus.field() == Some(field),
    };
    draw_field(frame, area, &props);
}
