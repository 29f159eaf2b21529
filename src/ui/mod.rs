//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;

use crate::app::App;
use crate::submission::SubmissionSink;
use ratatui::Frame;

/// Main draw function
pub fn draw<S: SubmissionSink>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();

    let main_area = layout::create_layout(area);
    forms::draw_registration(frame, main_area, app);

    // Draw status bar
    layout::draw_status_bar(frame, app);
}
