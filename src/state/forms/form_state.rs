//! Form state and its transitions
//!
//! `FormState` is a plain value. Every user action maps to one transition
//! function that consumes the current state and returns the next one.

use super::field::{Field, FieldValues, Gender};
use super::validation::{validate, ValidationErrors};
use super::FormError;
use crate::submission::Registration;

/// What the success banner needs once the fields have been cleared
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub first_name: String,
    pub registration_id: uuid::Uuid,
}

/// State of one editing session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub values: FieldValues,
    pub errors: ValidationErrors,
    /// Present only right after a successful submission
    pub receipt: Option<Receipt>,
}

/// Result of a submit transition
#[derive(Debug, Clone)]
pub enum SubmitOutcome {
    /// Validation passed; carries the record built from the pre-clear values
    Accepted(Registration),
    Rejected,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitted(&self) -> bool {
        self.receipt.is_some()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: Field) -> Option<String> {
        self.errors.get(&field).map(ToString::to_string)
    }

    /// Overwrite a text field, or the gender selector with its wire value.
    /// Any edit hides a previous success.
    pub fn edit(self, field: Field, value: &str) -> Result<Self, FormError> {
        let mut next = self;
        match next.values.text_mut(field) {
            Some(text) => *text = value.to_string(),
            None => next.values.gender = Gender::parse_optional(value)?,
        }
        next.receipt = None;
        Ok(next)
    }

    /// Choose (or clear) the gender directly
    pub fn choose_gender(self, gender: Option<Gender>) -> Self {
        Self {
            values: FieldValues {
                gender,
                ..self.values
            },
            errors: self.errors,
            receipt: None,
        }
    }

    /// Apply a closure to a text field in place (used for keystroke editing)
    pub fn edit_text(self, field: Field, f: impl FnOnce(&mut String)) -> Self {
        let mut next = self;
        if let Some(text) = next.values.text_mut(field) {
            f(text);
            next.receipt = None;
        }
        next
    }

    /// Run all rules and store the resulting error map. A failing
    /// validation also ends any success display.
    pub fn validated(self) -> Self {
        let errors = validate(&self.values);
        let receipt = if errors.is_empty() { self.receipt } else { None };
        Self {
            values: self.values,
            errors,
            receipt,
        }
    }

    /// Validate, then either clear the form into the success state or keep
    /// the values and show errors
    pub fn submit(self) -> (Self, SubmitOutcome) {
        let checked = self.validated();
        if !checked.is_valid() {
            let rejected = Self {
                receipt: None,
                ..checked
            };
            return (rejected, SubmitOutcome::Rejected);
        }

        let registration = Registration::from_values(&checked.values);
        let receipt = Receipt {
            first_name: checked.values.first_name.clone(),
            registration_id: registration.id,
        };
        let next = Self {
            receipt: Some(receipt),
            ..Self::default()
        };
        (next, SubmitOutcome::Accepted(registration))
    }

    /// Hide the success banner and leave everything else alone
    pub fn dismissed(self) -> Self {
        Self {
            receipt: None,
            ..self
        }
    }

    /// The canonical empty state
    pub fn cleared() -> Self {
        Self::default()
    }
}
