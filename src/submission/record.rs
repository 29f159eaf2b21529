//! Registration record built from accepted form values

use crate::state::{FieldValues, Gender};
use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// An accepted registration. Passwords are never part of the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub gender: Option<Gender>,
    pub date_of_birth: Option<String>,
}

impl Registration {
    pub fn from_values(values: &FieldValues) -> Self {
        let date_of_birth = Some(values.date_of_birth.trim())
            .filter(|d| !d.is_empty())
            .map(str::to_string);

        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            first_name: values.first_name.clone(),
            last_name: values.last_name.clone(),
            email: values.email.clone(),
            phone: values.phone.clone(),
            gender: values.gender,
            date_of_birth,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values() -> FieldValues {
        FieldValues {
            first_name: "Alan".to_string(),
            last_name: "Turing".to_string(),
            email: "alan@bletchley.uk".to_string(),
            password: "enigma42".to_string(),
            confirm_password: "enigma42".to_string(),
            phone: "0123456789".to_string(),
            gender: Some(Gender::Male),
            date_of_birth: "1912-06-23".to_string(),
        }
    }

    #[test]
    fn test_serialization_omits_passwords() {
        let reg = Registration::from_values(&values());
        let json = serde_json::to_string(&reg).unwrap();
        assert!(!json.contains("enigma42"));
        assert!(!json.contains("password"));
        assert!(json.contains("\"firstName\":\"Alan\""));
        assert!(json.contains("\"gender\":\"male\""));
        assert!(json.contains("\"dateOfBirth\":\"1912-06-23\""));
    }

    #[test]
    fn test_blank_date_of_birth_is_none() {
        let reg = Registration::from_values(&FieldValues {
            date_of_birth: "  ".to_string(),
            ..values()
        });
        assert!(reg.date_of_birth.is_none());
    }

    #[test]
    fn test_each_record_gets_a_fresh_id() {
        let a = Registration::from_values(&values());
        let b = Registration::from_values(&values());
        assert_ne!(a.id, b.id);
    }
}
