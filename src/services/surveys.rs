//! Survey endpoints

use chrono::NaiveDate;
use serde::Serialize;

use crate::api::response::Ack;
use crate::api::ApiClient;
use crate::domain::surveys::{
    ExtendSurveyRequest, NewSurvey, StudentSurveyList, Survey, UpdateSurvey,
};
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Survey>> {
    api.get("/api/surveys").await
}

pub async fn get(api: &ApiClient, id: i64) -> AppResult<Survey> {
    api.get(&format!("/api/surveys/{id}")).await
}

pub async fn create(api: &ApiClient, survey: &NewSurvey) -> AppResult<Ack> {
    api.post("/api/surveys", survey).await
}

pub async fn update(api: &ApiClient, id: i64, update: &UpdateSurvey) -> AppResult<Ack> {
    api.put(&format!("/api/surveys/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: i64) -> AppResult<Ack> {
    api.delete(&format!("/api/surveys/{id}")).await
}

pub async fn active(api: &ApiClient) -> AppResult<Vec<Survey>> {
    api.get("/api/surveys/active").await
}

/// GET /api/surveys/student
///
/// The signed-in student's assigned surveys with completion flags.
pub async fn for_student(api: &ApiClient) -> AppResult<StudentSurveyList> {
    api.get("/api/surveys/student").await
}

pub async fn by_subject(api: &ApiClient, subject_id: &str) -> AppResult<Vec<Survey>> {
    api.get(&format!("/api/surveys/subject/{subject_id}")).await
}

pub async fn by_date_range(
    api: &ApiClient,
    start_date: NaiveDate,
    end_date: NaiveDate,
) -> AppResult<Vec<Survey>> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct Query {
        start_date: NaiveDate,
        end_date: NaiveDate,
    }

    api.get_query(
        "/api/surveys/date-range",
        &Query {
            start_date,
            end_date,
        },
    )
    .await
}

pub async fn toggle_active(api: &ApiClient, id: i64) -> AppResult<Ack> {
    api.patch(
        &format!("/api/surveys/{id}/toggle-active"),
        &serde_json::json!({}),
    )
    .await
}

pub async fn extend(api: &ApiClient, id: i64, request: &ExtendSurveyRequest) -> AppResult<Ack> {
    api.patch(&format!("/api/surveys/{id}/extend"), request)
        .await
}
