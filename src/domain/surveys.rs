//! Survey domain types
//!
//! A survey points at an externally hosted form. It is scoped either
//! generally (whole grades) or to one subject's class sections; students see
//! a per-survey `has_responded` flag, never the responses themselves.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::FieldError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SurveyKind {
    #[serde(rename = "GENERAL")]
    General,
    #[serde(rename = "SUBJECT_SPECIFIC")]
    SubjectSpecific,
}

impl SurveyKind {
    pub fn label(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::SubjectSpecific => "subject",
        }
    }
}

impl std::fmt::Display for SurveyKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Survey entity as the admin endpoints return it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Survey {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SurveyKind,
    #[serde(default)]
    pub subject_id: Option<String>,
    #[serde(default)]
    pub grades: Vec<u8>,
    pub form_url: String,
    #[serde(default)]
    pub sheet_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

/// Body for POST /api/surveys.
#[derive(Debug, Clone, Serialize)]
pub struct NewSurvey {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SurveyKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    pub grades: Vec<u8>,
    pub form_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub is_active: bool,
}

impl NewSurvey {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.form_url.trim().is_empty() {
            errors.push(FieldError::new("form_url", "form link is required"));
        } else if Url::parse(&self.form_url).is_err() {
            errors.push(FieldError::new("form_url", "form link must be a valid URL"));
        }
        if let Some(sheet_url) = &self.sheet_url {
            if Url::parse(sheet_url).is_err() {
                errors.push(FieldError::new(
                    "sheet_url",
                    "sheet link must be a valid URL",
                ));
            }
        }
        if self.kind == SurveyKind::SubjectSpecific && self.subject_id.is_none() {
            errors.push(FieldError::new(
                "subject_id",
                "subject is required for a subject-specific survey",
            ));
        }
        if self.end_date < self.start_date {
            errors.push(FieldError::new("end_date", "end date is before start date"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body for PUT /api/surveys/{id}.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateSurvey {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grades: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sheet_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<bool>,
}

/// Body for PATCH /api/surveys/{id}/extend.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendSurveyRequest {
    pub new_end_date: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Student-facing shapes
// ---------------------------------------------------------------------------

/// One survey as a student sees it, including their completion flag.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentSurvey {
    pub id: i64,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: SurveyKind,
    #[serde(default)]
    pub subject_name: Option<String>,
    #[serde(default)]
    pub class_id: Option<String>,
    #[serde(default)]
    pub semester: Option<String>,
    pub form_url: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub has_responded: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StudentIdentity {
    pub name: String,
    pub email: String,
    pub base_class: String,
}

/// Response from GET /api/surveys/student.
#[derive(Debug, Clone, Deserialize)]
pub struct StudentSurveyList {
    pub student: StudentIdentity,
    pub surveys: Vec<StudentSurvey>,
}

impl StudentSurveyList {
    pub fn pending(&self) -> Vec<&StudentSurvey> {
        self.surveys.iter().filter(|s| !s.has_responded).collect()
    }

    pub fn completed(&self) -> Vec<&StudentSurvey> {
        self.surveys.iter().filter(|s| s.has_responded).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn base_survey() -> NewSurvey {
        NewSurvey {
            name: "Term feedback".into(),
            kind: SurveyKind::General,
            subject_id: None,
            grades: vec![10, 11, 12],
            form_url: "https://forms.example.com/f/abc".into(),
            sheet_url: None,
            start_date: Utc.with_ymd_and_hms(2025, 1, 6, 0, 0, 0).unwrap(),
            end_date: Utc.with_ymd_and_hms(2025, 1, 20, 0, 0, 0).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn kind_uses_screaming_wire_names() {
        assert_eq!(
            serde_json::to_string(&SurveyKind::SubjectSpecific).unwrap(),
            "\"SUBJECT_SPECIFIC\""
        );
        let kind: SurveyKind = serde_json::from_str("\"GENERAL\"").unwrap();
        assert_eq!(kind, SurveyKind::General);
    }

    #[test]
    fn subject_specific_requires_a_subject() {
        let mut survey = base_survey();
        survey.kind = SurveyKind::SubjectSpecific;
        let errors = survey.validate().unwrap_err();
        assert_eq!(errors[0].field, "subject_id");
    }

    #[test]
    fn form_url_must_parse() {
        let mut survey = base_survey();
        survey.form_url = "not a url".into();
        let errors = survey.validate().unwrap_err();
        assert_eq!(errors[0].field, "form_url");
    }

    #[test]
    fn end_date_cannot_precede_start() {
        let mut survey = base_survey();
        survey.end_date = survey.start_date - chrono::Duration::days(1);
        let errors = survey.validate().unwrap_err();
        assert_eq!(errors[0].field, "end_date");
    }

    #[test]
    fn student_list_splits_by_completion() {
        let list: StudentSurveyList = serde_json::from_value(serde_json::json!({
            "student": {"name": "A", "email": "a@school.edu.vn", "base_class": "10A1"},
            "surveys": [
                {
                    "id": 1, "name": "S1", "type": "GENERAL",
                    "form_url": "https://forms.example.com/1",
                    "start_date": "2025-01-06T00:00:00Z",
                    "end_date": "2025-01-20T00:00:00Z",
                    "has_responded": false
                },
                {
                    "id": 2, "name": "S2", "type": "SUBJECT_SPECIFIC",
                    "subject_name": "Mathematics", "class_id": "10A1-MATH", "semester": "1",
                    "form_url": "https://forms.example.com/2",
                    "start_date": "2025-01-06T00:00:00Z",
                    "end_date": "2025-01-20T00:00:00Z",
                    "has_responded": true
                }
            ]
        }))
        .unwrap();

        assert_eq!(list.pending().len(), 1);
        assert_eq!(list.completed().len(), 1);
        assert_eq!(list.pending()[0].id, 1);
    }
}
