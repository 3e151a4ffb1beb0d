//! Class domain types
//!
//! A class here is a subject-specific section (identified by a school code);
//! a student's administrative homeroom is the `base_class` string on the
//! student record, not one of these.

use serde::{Deserialize, Serialize};

use crate::error::FieldError;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Class {
    pub id: String,
    pub subject_id: String,
    pub grade: u8,
    pub semester: String,
    #[serde(default)]
    pub teacher_id: Option<i64>,
}

/// Body for POST /api/classes and the classes batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewClass {
    pub id: String,
    pub subject_id: String,
    pub grade: u8,
    pub semester: String,
}

impl NewClass {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.id.trim().is_empty() {
            errors.push(FieldError::new("id", "class code is required"));
        }
        if self.subject_id.trim().is_empty() {
            errors.push(FieldError::new("subject_id", "subject is required"));
        }
        if !matches!(self.grade, 10..=12) {
            errors.push(FieldError::new("grade", "grade must be 10, 11 or 12"));
        }
        if self.semester.trim().is_empty() {
            errors.push(FieldError::new("semester", "semester is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

// Roster action bodies. These endpoints take camelCase keys.

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddTeacherRequest {
    pub teacher_id: i64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentRequest {
    pub student_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddStudentsRequest {
    pub student_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveStudentRequest {
    pub student_id: String,
}

/// Body for POST /api/classes/students/batch: class code -> student ids.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignStudentsRequest {
    pub class_student_map: std::collections::BTreeMap<String, Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grade_is_bounded() {
        let class = NewClass {
            id: "10A1-MATH".into(),
            subject_id: "MATH".into(),
            grade: 9,
            semester: "1".into(),
        };
        let errors = class.validate().unwrap_err();
        assert_eq!(errors[0].field, "grade");
    }

    #[test]
    fn roster_bodies_are_camel_case() {
        let body = AddStudentsRequest {
            student_ids: vec!["240327".into()],
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json, serde_json::json!({"studentIds": ["240327"]}));

        let mut map = std::collections::BTreeMap::new();
        map.insert("10A1-MATH".to_string(), vec!["240327".to_string()]);
        let body = AssignStudentsRequest {
            class_student_map: map,
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"classStudentMap": {"10A1-MATH": ["240327"]}})
        );
    }
}
