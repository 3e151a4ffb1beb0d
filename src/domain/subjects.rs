//! Subject domain types

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

/// Subject entity. The identifier is a school-assigned code, not a
/// server-generated number.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub department_id: i64,
}

/// Body for POST /api/subjects and the subjects batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubject {
    pub id: String,
    pub name: String,
    pub department_id: i64,
}

impl NewSubject {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "subject code is required"));
        }
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.department_id <= 0 {
            errors.push(FieldError::new("department_id", "department is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body for PUT /api/subjects/{id}; only supplied fields change.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSubject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_subject_requires_all_fields() {
        let subject = NewSubject {
            id: " ".into(),
            name: String::new(),
            department_id: 0,
        };
        let errors = subject.validate().unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["id", "name", "department_id"]);
    }

    #[test]
    fn update_skips_unset_fields() {
        let update = UpdateSubject {
            name: Some("Physics".into()),
            department_id: None,
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json, serde_json::json!({"name": "Physics"}));
    }
}
