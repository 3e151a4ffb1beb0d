//! Student domain types

use serde::{Deserialize, Serialize};

use crate::domain::is_valid_email;
use crate::error::FieldError;

/// Student entity. The identifier is the school-issued student code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub email: String,
    pub name: String,
    /// Administrative homeroom class, e.g. "10A1".
    pub base_class: String,
}

/// Body for POST /api/students and the students batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewStudent {
    pub id: String,
    pub email: String,
    pub name: String,
    pub base_class: String,
}

impl NewStudent {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "student code is required"));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "email is required"));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "invalid email format"));
        }
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.base_class.trim().is_empty() {
            errors.push(FieldError::new("base_class", "homeroom class is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body for PUT /api/students/{id}.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateStudent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_class: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blocks_submission_on_missing_required_fields() {
        let student = NewStudent {
            id: String::new(),
            email: String::new(),
            name: "Nguyen Van A".into(),
            base_class: String::new(),
        };
        let errors = student.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["id", "email", "base_class"]);
    }

    #[test]
    fn accepts_a_complete_record() {
        let student = NewStudent {
            id: "240327".into(),
            email: "student1@school.edu.vn".into(),
            name: "Nguyen Van A".into(),
            base_class: "10A1".into(),
        };
        assert!(student.validate().is_ok());
    }
}
