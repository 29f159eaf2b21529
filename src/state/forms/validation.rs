//! Field validation rules and the error taxonomy they produce

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use super::field::{Field, FieldValues};

/// Minimum accepted password length, in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 6;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\S+@\S+\.\S+").expect("email pattern is valid")
});

static PHONE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern is valid"));

/// Errors keyed by field; iteration follows display order
pub type ValidationErrors = BTreeMap<Field, ValidationError>;

/// Broad category of a validation failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Required,
    Invalid,
    TooShort,
    Mismatch,
}

/// A single failing rule. `Display` is the message shown under the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("First name is required")]
    FirstNameRequired,
    #[error("Last name is required")]
    LastNameRequired,
    #[error("Email is required")]
    EmailRequired,
    #[error("Email is invalid")]
    EmailInvalid,
    #[error("Password is required")]
    PasswordRequired,
    #[error("Password must be at least 6 characters")]
    PasswordTooShort,
    #[error("Please confirm your password")]
    ConfirmPasswordRequired,
    #[error("Passwords do not match")]
    PasswordMismatch,
    #[error("Phone number is required")]
    PhoneRequired,
    #[error("Phone number must be 10 digits")]
    PhoneInvalid,
    #[error("Please select gender")]
    GenderRequired,
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::FirstNameRequired => Field::FirstName,
            Self::LastNameRequired => Field::LastName,
            Self::EmailRequired | Self::EmailInvalid => Field::Email,
            Self::PasswordRequired | Self::PasswordTooShort => Field::Password,
            Self::ConfirmPasswordRequired | Self::PasswordMismatch => Field::ConfirmPassword,
            Self::PhoneRequired | Self::PhoneInvalid => Field::Phone,
            Self::GenderRequired => Field::Gender,
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::FirstNameRequired
            | Self::LastNameRequired
            | Self::EmailRequired
            | Self::PasswordRequired
            | Self::ConfirmPasswordRequired
            | Self::PhoneRequired
            | Self::GenderRequired => ErrorKind::Required,
            Self::EmailInvalid | Self::PhoneInvalid => ErrorKind::Invalid,
            Self::PasswordTooShort => ErrorKind::TooShort,
            Self::PasswordMismatch => ErrorKind::Mismatch,
        }
    }
}

/// Errors raised at the string boundary of the form
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("unknown field: {0}")]
    UnknownField(String),
    #[error("unknown gender value: {0}")]
    UnknownGender(String),
}

/// Trim the way browser form code does: Unicode whitespace plus the BOM
fn trim_blank(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
}

/// Length as browser strings count it, in UTF-16 code units
fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}

/// Check a single field. At most the first failing rule is reported.
pub fn check_field(values: &FieldValues, field: Field) -> Option<ValidationError> {
    match field {
        Field::FirstName => trim_blank(&values.first_name)
            .is_empty()
            .then_some(ValidationError::FirstNameRequired),
        Field::LastName => trim_blank(&values.last_name)
            .is_empty()
            .then_some(ValidationError::LastNameRequired),
        Field::Email => {
            if values.email.is_empty() {
                Some(ValidationError::EmailRequired)
            } else if !EMAIL_PATTERN.is_match(&values.email) {
                Some(ValidationError::EmailInvalid)
            } else {
                None
            }
        }
        Field::Password => {
            if values.password.is_empty() {
                Some(ValidationError::PasswordRequired)
            } else if utf16_len(&values.password) < MIN_PASSWORD_LEN {
                Some(ValidationError::PasswordTooShort)
            } else {
                None
            }
        }
        Field::ConfirmPassword => {
            if values.confirm_password.is_empty() {
                Some(ValidationError::ConfirmPasswordRequired)
            } else if values.confirm_password != values.password {
                Some(ValidationError::PasswordMismatch)
            } else {
                None
            }
        }
        Field::Phone => {
            if values.phone.is_empty() {
                Some(ValidationError::PhoneRequired)
            } else if !PHONE_PATTERN.is_match(&values.phone) {
                Some(ValidationError::PhoneInvalid)
            } else {
                None
            }
        }
        Field::Gender => values
            .gender
            .is_none()
            .then_some(ValidationError::GenderRequired),
        Field::DateOfBirth => None,
    }
}

/// Run every rule; the form is valid iff the result is empty
pub fn validate(values: &FieldValues) -> ValidationErrors {
    Field::ALL
        .into_iter()
        .filter_map(|field| check_field(values, field).map(|err| (field, err)))
        .collect()
}
