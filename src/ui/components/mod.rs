//! Reusable UI components

mod button;
mod dialog;
mod icon;

pub use button::{render_submit_button, BUTTON_HEIGHT};
pub use dialog::render_summary_dialog;
pub use icon::FieldIcon;
