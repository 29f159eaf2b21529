//! Application state and core logic

use crate::platform::ACTION_MODIFIER;
use crate::state::{DisplayOptions, Field, Focus, FormAction, FormController, Gender};
use crate::submission::{LogSink, SubmissionSink};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App<S: SubmissionSink = LogSink> {
    /// The registration form
    pub form: FormController<S>,
    /// Element receiving key input
    pub focus: Focus,
    /// How the form is presented
    pub display: DisplayOptions,
    /// Outcome of the last action, shown in the status bar
    pub status_message: Option<String>,
    /// Whether the app should quit
    quit: bool,
}

impl<S: SubmissionSink> App<S> {
    /// Create a new App instance
    pub fn new(sink: S, display: DisplayOptions) -> Self {
        Self {
            form: FormController::new(sink),
            focus: Focus::default(),
            display,
            status_message: None,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.modifiers.contains(ACTION_MODIFIER) || key.modifiers.contains(KeyModifiers::CONTROL)
        {
            match key.code {
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('r') => self.reset(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Esc => {
                if self.form.state().is_submitted() {
                    self.form.dismiss_success();
                }
            }
            _ => match self.focus {
                Focus::Action(action) => self.handle_action_key(action, key),
                Focus::Field(Field::Gender) => self.handle_gender_key(key),
                Focus::Field(field) => self.handle_text_key(field, key),
            },
        }
        Ok(())
    }

    fn handle_action_key(&mut self, action: FormAction, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') => self.run_action(action),
            KeyCode::Left | KeyCode::Right => {
                let other = match action {
                    FormAction::Reset => FormAction::Register,
                    FormAction::Register => FormAction::Reset,
                };
                self.focus = Focus::Action(other);
            }
            _ => {}
        }
    }

    fn handle_gender_key(&mut self, key: KeyEvent) {
        let current = self.form.state().values.gender;
        match key.code {
            KeyCode::Left => self.form.choose_gender(Some(Gender::prev(current))),
            KeyCode::Right | KeyCode::Char(' ') => {
                self.form.choose_gender(Some(Gender::next(current)))
            }
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'm' => self.form.choose_gender(Some(Gender::Male)),
                'f' => self.form.choose_gender(Some(Gender::Female)),
                'o' => self.form.choose_gender(Some(Gender::Other)),
                _ => {}
            },
            KeyCode::Backspace | KeyCode::Delete => self.form.choose_gender(None),
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {}
        }
    }

    fn handle_text_key(&mut self, field: Field, key: KeyEvent) {
        match key.code {
            KeyCode::Char(c) => self.form.push_char(field, c),
            KeyCode::Backspace => self.form.pop_char(field),
            KeyCode::Enter => self.focus = self.focus.next(),
            _ => {}
        }
    }

    pub fn run_action(&mut self, action: FormAction) {
        match action {
            FormAction::Reset => self.reset(),
            FormAction::Register => self.submit(),
        }
    }

    fn submit(&mut self) {
        if self.form.submit() {
            tracing::debug!("Registration accepted");
            self.focus = Focus::default();
            self.status_message = Some("Registration submitted".to_string());
        } else {
            let errors = &self.form.state().errors;
            if let Some(first) = errors.keys().next() {
                self.focus = Focus::Field(*first);
            }
            self.status_message = Some(format!("Please fix {} field(s)", errors.len()));
        }
    }

    fn reset(&mut self) {
        self.form.reset();
        self.focus = Focus::default();
        self.status_message = Some("Form cleared".to_string());
    }
}
