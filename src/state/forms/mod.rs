//! Form domain layer
//!
//! Field values, validation, state transitions and the display mapping for
//! the registration form. Nothing here knows about the terminal.

mod controller;
mod display;
mod field;
mod form_state;
mod validation;

pub use controller::FormController;
pub use display::{
    directives, success_message, Directive, DisplayOptions, FormAction, InputKind, MASK_CHAR,
};
pub use field::{Field, FieldValues, Gender};
pub use form_state::{FormState, Receipt, SubmitOutcome};
pub use validation::{
    check_field, validate, ErrorKind, FormError, ValidationError, ValidationErrors,
    MIN_PASSWORD_LEN,
};
