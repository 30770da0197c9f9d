//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let main_area = layout::create_layout(frame.area());

    forms::draw(frame, main_area, app);

    layout::draw_status_bar(frame, app);

    // Modal goes last so it overlays everything else
    if app.state.show_modal() {
        components::render_summary_dialog(frame, app.state.values());
    }
}
