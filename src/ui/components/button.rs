//! Button component for TUI

use crate::state::ButtonPressState;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(frame: &mut Frame, area: Rect, content: &str, is_selected: bool) {
    let border_style = if is_selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let text_style = if is_selected {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let paragraph = Paragraph::new(format!(" {content} "))
        .style(text_style)
        .alignment(Alignment::Center);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render the submit button, shrunk horizontally while a press animation runs
pub fn render_submit_button(
    frame: &mut Frame,
    area: Rect,
    is_selected: bool,
    press: Option<&ButtonPressState>,
) {
    let area = match press {
        Some(press) => scaled(area, press.scale()),
        None => area,
    };
    render_button(frame, area, "Submit", is_selected || press.is_some());
}

/// Shrink `area` around its horizontal center
fn scaled(area: Rect, scale: f32) -> Rect {
    if area.width == 0 {
        return area;
    }
    let width = ((area.width as f32) * scale).round() as u16;
    let width = width.clamp(1, area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
