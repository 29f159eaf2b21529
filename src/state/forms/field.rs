//! Form field value objects

use std::fmt;
use std::str::FromStr;

use super::FormError;

/// The fields collected by the registration form, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Password,
    ConfirmPassword,
    Phone,
    Gender,
    DateOfBirth,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Password,
        Field::ConfirmPassword,
        Field::Phone,
        Field::Gender,
        Field::DateOfBirth,
    ];

    /// Wire name used at the presentation boundary
    pub fn name(&self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Email => "email",
            Self::Password => "password",
            Self::ConfirmPassword => "confirmPassword",
            Self::Phone => "phone",
            Self::Gender => "gender",
            Self::DateOfBirth => "dateOfBirth",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Email => "Email Address",
            Self::Password => "Password",
            Self::ConfirmPassword => "Confirm Password",
            Self::Phone => "Phone Number",
            Self::Gender => "Gender",
            Self::DateOfBirth => "Date of Birth",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::FirstName => "Enter your first name",
            Self::LastName => "Enter your last name",
            Self::Email => "Enter your email",
            Self::Password => "Create a password",
            Self::ConfirmPassword => "Confirm your password",
            Self::Phone => "Enter your phone number",
            Self::Gender => "",
            Self::DateOfBirth => "YYYY-MM-DD",
        }
    }

    /// Whether a validation rule exists for this field
    pub fn is_required(&self) -> bool {
        !matches!(self, Self::DateOfBirth)
    }

    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password | Self::ConfirmPassword)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = FormError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| FormError::UnknownField(s.to_string()))
    }
}

/// Gender choices offered by the tri-state selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
    Other,
}

impl Gender {
    pub const ALL: [Gender; 3] = [Gender::Male, Gender::Female, Gender::Other];

    pub fn value(&self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Other => "Other",
        }
    }

    /// Cycle forward through the choices, starting from unselected
    pub fn next(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Self::Other) => Self::Male,
            Some(Self::Male) => Self::Female,
            Some(Self::Female) => Self::Other,
        }
    }

    /// Cycle backward through the choices, starting from unselected
    pub fn prev(current: Option<Gender>) -> Gender {
        match current {
            None | Some(Self::Male) => Self::Other,
            Some(Self::Female) => Self::Male,
            Some(Self::Other) => Self::Female,
        }
    }

    /// Parse a selector value; the empty string means unselected
    pub fn parse_optional(value: &str) -> Result<Option<Gender>, FormError> {
        if value.is_empty() {
            return Ok(None);
        }
        Gender::ALL
            .into_iter()
            .find(|g| g.value() == value)
            .map(Some)
            .ok_or_else(|| FormError::UnknownGender(value.to_string()))
    }
}

/// Current values of every field
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub date_of_birth: String,
}

impl FieldValues {
    /// Get the text value of a field (the wire value for gender)
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::FirstName => &self.first_name,
            Field::LastName => &self.last_name,
            Field::Email => &self.email,
            Field::Password => &self.password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::Phone => &self.phone,
            Field::Gender => self.gender.map(|g| g.value()).unwrap_or(""),
            Field::DateOfBirth => &self.date_of_birth,
        }
    }

    /// Mutable access to a text field; `None` for the gender selector
    pub fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::FirstName => Some(&mut self.first_name),
            Field::LastName => Some(&mut self.last_name),
            Field::Email => Some(&mut self.email),
            Field::Password => Some(&mut self.password),
            Field::ConfirmPassword => Some(&mut self.confirm_password),
            Field::Phone => Some(&mut self.phone),
            Field::Gender => None,
            Field::DateOfBirth => Some(&mut self.date_of_birth),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_names_round_trip_through_from_str() {
        for field in Field::ALL {
            assert_eq!(field.name().parse::<Field>().unwrap(), field);
        }
    }

    #[test]
    fn test_unknown_field_name() {
        let err = "nickname".parse::<Field>().unwrap_err();
        assert_eq!(err, FormError::UnknownField("nickname".to_string()));
    }

    #[test]
    fn test_only_date_of_birth_is_optional() {
        let optional: Vec<_> = Field::ALL.into_iter().filter(|f| !f.is_required()).collect();
        assert_eq!(optional, vec![Field::DateOfBirth]);
    }

    #[test]
    fn test_gender_parse_optional() {
        assert_eq!(Gender::parse_optional(""), Ok(None));
        assert_eq!(Gender::parse_optional("female"), Ok(Some(Gender::Female)));
        assert_eq!(
            Gender::parse_optional("Female"),
            Err(FormError::UnknownGender("Female".to_string()))
        );
    }

    #[test]
    fn test_gender_cycles_wrap() {
        assert_eq!(Gender::next(None), Gender::Male);
        assert_eq!(Gender::next(Some(Gender::Other)), Gender::Male);
        assert_eq!(Gender::prev(None), Gender::Other);
        assert_eq!(Gender::prev(Some(Gender::Female)), Gender::Male);
    }

    #[test]
    fn test_get_returns_gender_wire_value() {
        let values = FieldValues {
            gender: Some(Gender::Other),
            ..Default::default()
        };
        assert_eq!(values.get(Field::Gender), "other");
        assert_eq!(FieldValues::default().get(Field::Gender), "");
    }

    #[test]
    fn test_text_mut_has_no_gender_slot() {
        let mut values = FieldValues::default();
        assert!(values.text_mut(Field::Gender).is_none());
        values.text_mut(Field::Phone).unwrap().push('5');
        assert_eq!(values.phone, "5");
        assert!(!values.is_empty());
    }
}
