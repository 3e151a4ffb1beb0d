//! Teacher domain types
//!
//! Includes the homeroom survey-monitor payload: one row per student with the
//! completion state of the general survey and each subject-specific survey.

use serde::{Deserialize, Serialize};

use crate::domain::is_valid_email;
use crate::domain::surveys::SurveyKind;
use crate::error::FieldError;

/// Teacher entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Teacher {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub department_id: i64,
    /// Homeroom class this teacher supervises, if any.
    #[serde(default)]
    pub base_class: Option<String>,
}

/// Body for POST /api/teachers and the teachers batch endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTeacher {
    pub email: String,
    pub name: String,
    pub department_id: i64,
}

impl NewTeacher {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "email is required"));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "invalid email format"));
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

/// Body for PUT /api/teachers/{id}.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTeacher {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_class: Option<String>,
}

// ---------------------------------------------------------------------------
// Homeroom survey monitor
// ---------------------------------------------------------------------------

/// Response from GET /api/teachers/class-students-surveys.
#[derive(Debug, Clone, Deserialize)]
pub struct HomeroomReport {
    pub teacher_name: String,
    pub base_class: String,
    pub academic_year: String,
    pub student_count: u32,
    pub students: Vec<StudentSurveyStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentSurveyStatus {
    pub student: MonitoredStudent,
    pub surveys: Vec<SurveyCompletion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MonitoredStudent {
    pub id: String,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SurveyCompletion {
    #[serde(rename = "type")]
    pub kind: SurveyKind,
    #[serde(default)]
    pub subject_name: Option<String>,
    pub has_responded: bool,
}

impl HomeroomReport {
    /// Distinct subject names across all subject-specific surveys, in first
    /// appearance order. These become the monitor's table columns.
    pub fn subject_names(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for status in &self.students {
            for survey in &status.surveys {
                if survey.kind == SurveyKind::SubjectSpecific {
                    if let Some(subject) = &survey.subject_name {
                        if !names.iter().any(|n| n == subject) {
                            names.push(subject.clone());
                        }
                    }
                }
            }
        }
        names
    }
}

impl StudentSurveyStatus {
    pub fn general_survey(&self) -> Option<&SurveyCompletion> {
        self.surveys.iter().find(|s| s.kind == SurveyKind::General)
    }

    pub fn subject_survey(&self, subject_name: &str) -> Option<&SurveyCompletion> {
        self.surveys.iter().find(|s| {
            s.kind == SurveyKind::SubjectSpecific && s.subject_name.as_deref() == Some(subject_name)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report_fixture() -> HomeroomReport {
        serde_json::from_value(serde_json::json!({
            "teacher_name": "Tran Thi B",
            "base_class": "10A1",
            "academic_year": "2024-2025",
            "student_count": 2,
            "students": [
                {
                    "student": {"id": "240327", "name": "Nguyen Van A", "email": "a@school.edu.vn"},
                    "surveys": [
                        {"type": "GENERAL", "has_responded": true},
                        {"type": "SUBJECT_SPECIFIC", "subject_name": "Mathematics", "has_responded": false}
                    ]
                },
                {
                    "student": {"id": "240328", "name": "Le Thi C", "email": "c@school.edu.vn"},
                    "surveys": [
                        {"type": "SUBJECT_SPECIFIC", "subject_name": "Physics", "has_responded": true},
                        {"type": "SUBJECT_SPECIFIC", "subject_name": "Mathematics", "has_responded": true}
                    ]
                }
            ]
        }))
        .unwrap()
    }

    #[test]
    fn subject_columns_preserve_first_appearance_order() {
        let report = report_fixture();
        assert_eq!(report.subject_names(), vec!["Mathematics", "Physics"]);
    }

    #[test]
    fn completion_lookups_distinguish_kinds() {
        let report = report_fixture();
        let first = &report.students[0];
        assert!(first.general_survey().unwrap().has_responded);
        assert!(!first.subject_survey("Mathematics").unwrap().has_responded);
        assert!(first.subject_survey("Physics").is_none());

        let second = &report.students[1];
        assert!(second.general_survey().is_none());
    }

    #[test]
    fn new_teacher_rejects_bad_email() {
        let teacher = NewTeacher {
            email: "not-an-email".into(),
            name: "T".into(),
            department_id: 1,
        };
        let errors = teacher.validate().unwrap_err();
        assert_eq!(errors[0].field, "email");
        assert_eq!(errors[0].message, "invalid email format");
    }
}
