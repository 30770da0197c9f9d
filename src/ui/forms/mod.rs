//! Form rendering module
//!
//! - `field_renderer`: label, input, icon and error projection of a single field
//! - `registration_form`: the event registration form itself

mod field_renderer;
mod registration_form;

pub use registration_form::draw;
