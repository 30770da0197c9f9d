//! Field rendering utilities for forms

use crate::state::{FieldError, GuestAttendance, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Rows used by a text field: bordered input plus one error line
pub const FIELD_HEIGHT: u16 = 4;

/// Everything needed to draw one text field
#[derive(Debug, Clone, Copy)]
pub struct FieldProps<'a> {
    pub label: &'a str,
    pub kind: InputKind,
    pub value: &'a str,
    pub error: Option<&'a FieldError>,
    pub icon: Option<&'a str>,
    pub is_active: bool,
}

fn placeholder(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "(empty)",
        InputKind::Email => "(name@example.com)",
        InputKind::Number => "(number)",
    }
}

fn border_style(is_active: bool, has_error: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

fn title(label: &str, icon: Option<&str>) -> String {
    match icon {
        Some(icon) => format!(" {icon} {label} "),
        None => format!(" {label} "),
    }
}

/// Draw a bordered input with its error message on the line below
pub fn draw_field(frame: &mut Frame, area: Rect, props: &FieldProps) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Error
        ])
        .split(area);

    let value_style = if props.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let input = if props.value.is_empty() && !props.is_active {
        Line::from(Span::styled(
            placeholder(props.kind),
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let cursor = if props.is_active { "▌" } else { "" };
        Line::from(vec![
            Span::styled(props.value, value_style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ])
    };

    let block = Block::default()
        .title(title(props.label, props.icon))
        .borders(Borders::ALL)
        .border_style(border_style(props.is_active, props.error.is_some()));
    frame.render_widget(Paragraph::new(input).block(block), chunks[0]);

    if let Some(error) = props.error {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(message, chunks[1]);
    }
}

/// Draw the binary attendance select
pub fn draw_select(
    frame: &mut Frame,
    area: Rect,
    label: &str,
    value: GuestAttendance,
    is_active: bool,
) {
    let options = [GuestAttendance::No, GuestAttendance::Yes];
    let mut spans = Vec::new();
    for option in options {
        let selected = option == value;
        let marker = if selected { "(•) " } else { "( ) " };
        let style = match (selected, is_active) {
            (true, true) => Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            (true, false) => Style::default().fg(Color::White),
            (false, _) => Style::default().fg(Color::DarkGray),
        };
        spans.push(Span::styled(format!("{marker}{option}"), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(title(label, None))
        .borders(Borders::ALL)
        .border_style(border_style(is_active, false));
    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}
