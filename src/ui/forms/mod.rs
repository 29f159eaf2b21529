//! Form rendering module
//!
//! - `field_renderer`: input, selector and error text widgets
//! - `registration_form`: lays the registration directives out on screen

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
