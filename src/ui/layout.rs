//! Layout components (content area, status bar)

use crate::app::App;
use crate::platform::{RESET_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{Field, Focus};
use crate::submission::SubmissionSink;
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

/// Draw the status bar
pub fn draw_status_bar<S: SubmissionSink>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };

    let mut spans = vec![Span::raw(" ")];

    let hints = get_focus_hints(app.focus);
    spans.push(Span::styled(hints, Style::default().fg(Color::DarkGray)));

    if let Some(msg) = &app.status_message {
        let color = if app.form.state().is_valid() {
            Color::Green
        } else {
            Color::Red
        };
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), status_area);
}

/// Key hints for the focused element
fn get_focus_hints(focus: Focus) -> String {
    let common = format!("{SUBMIT_SHORTCUT}:register  {RESET_SHORTCUT}:reset  Ctrl+C:quit");
    match focus {
        Focus::Field(Field::Gender) => format!("←/→ m/f/o:choose  Tab:next  {common}"),
        Focus::Field(_) => format!("Tab:next  Shift+Tab:prev  {common}"),
        Focus::Action(_) => format!("Enter:run  ←/→:switch  Tab:next  {common}"),
    }
}
