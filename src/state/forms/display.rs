//! Pure mapping from form state to display directives
//!
//! The renderer only reads directives; it never looks at validation rules
//! itself.

use super::field::{Field, Gender};
use super::form_state::FormState;

/// Bullet used when masking secret fields
pub const MASK_CHAR: char = '•';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub mask_passwords: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            mask_passwords: true,
        }
    }
}

/// Form actions, in the order they are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormAction {
    Reset,
    Register,
}

impl FormAction {
    pub const ALL: [FormAction; 2] = [FormAction::Reset, FormAction::Register];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Reset => "Reset",
            Self::Register => "Register Now",
        }
    }
}

/// Kind of text input, the terminal counterpart of an HTML input type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Email,
    Secret,
    Tel,
    Date,
}

impl InputKind {
    pub fn for_field(field: Field) -> Self {
        match field {
            _ if field.is_secret() => Self::Secret,
            Field::Email => Self::Email,
            Field::Phone => Self::Tel,
            Field::DateOfBirth => Self::Date,
            _ => Self::Text,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive {
    SuccessBanner {
        first_name: String,
    },
    Input {
        field: Field,
        label: String,
        value: String,
        placeholder: &'static str,
        required: bool,
        kind: InputKind,
        has_error: bool,
    },
    GenderSelector {
        label: String,
        selected: Option<Gender>,
        required: bool,
        has_error: bool,
    },
    ErrorText {
        field: Field,
        message: String,
    },
    Actions(Vec<FormAction>),
}

impl Directive {
    /// The field an input-like directive belongs to
    pub fn field(&self) -> Option<Field> {
        match self {
            Self::Input { field, .. } | Self::ErrorText { field, .. } => Some(*field),
            Self::GenderSelector { .. } => Some(Field::Gender),
            Self::SuccessBanner { .. } | Self::Actions(_) => None,
        }
    }
}

pub fn success_message(first_name: &str) -> String {
    format!("Registration successful! Welcome aboard, {first_name}!")
}

/// Build the directive list for the current state
pub fn directives(state: &FormState, options: &DisplayOptions) -> Vec<Directive> {
    let mut out = Vec::with_capacity(Field::ALL.len() * 2 + 2);

    if let Some(receipt) = &state.receipt {
        out.push(Directive::SuccessBanner {
            first_name: receipt.first_name.clone(),
        });
    }

    for field in Field::ALL {
        let error = state.errors.get(&field);
        let has_error = error.is_some();

        if field == Field::Gender {
            out.push(Directive::GenderSelector {
                label: field.label().to_string(),
                selected: state.values.gender,
                required: field.is_required(),
                has_error,
            });
        } else {
            let kind = InputKind::for_field(field);
            let raw = state.values.get(field);
            let value: String = if kind == InputKind::Secret && options.mask_passwords {
                std::iter::repeat(MASK_CHAR).take(raw.chars().count()).collect()
            } else {
                raw.to_string()
            };
            out.push(Directive::Input {
                field,
                label: field.label().to_string(),
                value,
                placeholder: field.placeholder(),
                required: field.is_required(),
                kind,
                has_error,
            });
        }

        if let Some(err) = error {
            out.push(Directive::ErrorText {
                field,
                message: err.to_string(),
            });
        }
    }

    out.push(Directive::Actions(FormAction::ALL.to_vec()));
    out
}
