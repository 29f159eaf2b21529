//! Field rendering utilities for forms

use crate::state::Gender;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn border_style(is_active: bool, has_error: bool) -> Style {
    if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Block title for an input, with the required marker
pub fn field_title(label: &str, required: bool) -> String {
    if required {
        format!(" {label} * ")
    } else {
        format!(" {label} ")
    }
}

/// Draw a single-line text input with its label as the block title
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    title: String,
    value: &str,
    placeholder: &str,
    is_active: bool,
    has_error: bool,
) {
    let cursor = if is_active { "▌" } else { "" };

    let value_span = if value.is_empty() {
        Span::styled(placeholder, Style::default().fg(Color::DarkGray))
    } else if is_active {
        Span::styled(value, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(value)
    };

    // Cursor sits at the end of the typed text, before any placeholder
    let spans = if value.is_empty() {
        vec![Span::styled(cursor, Style::default().fg(Color::Cyan)), value_span]
    } else {
        vec![value_span, Span::styled(cursor, Style::default().fg(Color::Cyan))]
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the tri-state gender radio group
pub fn draw_gender_selector(
    frame: &mut Frame,
    area: Rect,
    title: String,
    selected: Option<Gender>,
    is_active: bool,
    has_error: bool,
) {
    let mut spans = Vec::with_capacity(Gender::ALL.len() * 2);
    for gender in Gender::ALL {
        let is_selected = selected == Some(gender);
        let marker = if is_selected { "(•)" } else { "( )" };
        let style = if is_selected {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        spans.push(Span::styled(format!("{marker} {}", gender.label()), style));
        spans.push(Span::raw("   "));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(is_active, has_error));

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw inline error text beneath a field
pub fn draw_error_text(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph =
        Paragraph::new(format!(" {message}")).style(Style::default().fg(Color::Red));
    frame.render_widget(paragraph, area);
}
