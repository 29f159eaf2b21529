//! Registration form rendering

use super::field_renderer::{draw_error_text, draw_gender_selector, draw_input, field_title};
use crate::app::App;
use crate::state::{directives, success_message, Directive, Field, Focus, FormAction};
use crate::submission::SubmissionSink;
use crate::ui::components::{render_action_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Fields sharing a screen row
const FORM_ROWS: &[&[Field]] = &[
    &[Field::FirstName, Field::LastName],
    &[Field::Email],
    &[Field::Password, Field::ConfirmPassword],
    &[Field::Phone, Field::DateOfBirth],
    &[Field::Gender],
];

const INPUT_HEIGHT: u16 = 3;

fn error_for(list: &[Directive], field: Field) -> Option<&str> {
    list.iter().find_map(|d| match d {
        Directive::ErrorText { field: f, message } if *f == field => Some(message.as_str()),
        _ => None,
    })
}

fn input_for(list: &[Directive], field: Field) -> Option<&Directive> {
    list.iter().find(|d| {
        matches!(d, Directive::Input { .. } | Directive::GenderSelector { .. })
            && d.field() == Some(field)
    })
}

/// Draw the registration form
pub fn draw_registration<S: SubmissionSink>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let list = directives(app.form.state(), &app.display);

    let banner = list.iter().find_map(|d| match d {
        Directive::SuccessBanner { first_name } => Some(first_name.as_str()),
        _ => None,
    });
    let actions: &[FormAction] = list
        .iter()
        .find_map(|d| match d {
            Directive::Actions(actions) => Some(actions.as_slice()),
            _ => None,
        })
        .unwrap_or(&[]);

    let block = Block::default()
        .title(" Create Your Account ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let banner_height = if banner.is_some() { 3 } else { 0 };
    let mut constraints = vec![
        Constraint::Length(1),             // Subtitle
        Constraint::Length(banner_height), // Success banner
    ];
    for row in FORM_ROWS {
        let has_error = row.iter().any(|f| error_for(&list, *f).is_some());
        constraints.push(Constraint::Length(INPUT_HEIGHT + u16::from(has_error)));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Actions
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .horizontal_margin(1)
        .split(inner);

    let subtitle = Paragraph::new("Join us today! Fill in your details to get started.")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(subtitle, chunks[0]);

    if let Some(first_name) = banner {
        draw_success_banner(frame, chunks[1], first_name);
    }

    for (row_idx, row) in FORM_ROWS.iter().enumerate() {
        draw_row(frame, chunks[row_idx + 2], row, &list, app.focus);
    }

    draw_actions(frame, chunks[FORM_ROWS.len() + 2], actions, app.focus);
}

fn draw_row(frame: &mut Frame, area: Rect, row: &[Field], list: &[Directive], focus: Focus) {
    let cells = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(row.iter().map(|_| Constraint::Ratio(1, row.len() as u32)))
        .split(area);

    for (field, cell) in row.iter().zip(cells.iter()) {
        let parts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(INPUT_HEIGHT), Constraint::Min(0)])
            .split(*cell);
        let is_active = focus == Focus::Field(*field);

        match input_for(list, *field) {
            Some(Directive::Input {
                label,
                value,
                placeholder,
                required,
                has_error,
                ..
            }) => draw_input(
                frame,
                parts[0],
                field_title(label, *required),
                value,
                placeholder,
                is_active,
                *has_error,
            ),
            Some(Directive::GenderSelector {
                label,
                selected,
                required,
                has_error,
            }) => draw_gender_selector(
                frame,
                parts[0],
                field_title(label, *required),
                *selected,
                is_active,
                *has_error,
            ),
            _ => {}
        }

        if let Some(message) = error_for(list, *field) {
            draw_error_text(frame, parts[1], message);
        }
    }
}

fn draw_success_banner(frame: &mut Frame, area: Rect, first_name: &str) {
    let line = Line::from(vec![
        Span::styled(
            format!("✔ {}", success_message(first_name)),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  (Esc to dismiss)", Style::default().fg(Color::DarkGray)),
    ]);
    let banner = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Green)),
    );
    frame.render_widget(banner, area);
}

fn draw_actions(frame: &mut Frame, area: Rect, actions: &[FormAction], focus: Focus) {
    let buttons = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),     // Left padding (flex)
            Constraint::Length(14), // Reset
            Constraint::Length(2),  // Gap
            Constraint::Length(18), // Register Now
        ])
        .split(area);

    for (idx, action) in actions.iter().enumerate() {
        let accent = match action {
            FormAction::Reset => Color::Gray,
            FormAction::Register => Color::Green,
        };
        let slot = buttons[1 + idx * 2];
        render_action_button(
            frame,
            slot,
            action.label(),
            focus == Focus::Action(*action),
            accent,
        );
    }
}
