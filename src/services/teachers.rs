//! Teacher endpoints, including the homeroom survey monitor

use crate::api::response::{Ack, BatchAck};
use crate::api::ApiClient;
use crate::domain::classes::Class;
use crate::domain::teachers::{HomeroomReport, NewTeacher, Teacher, UpdateTeacher};
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Teacher>> {
    api.get("/api/teachers").await
}

pub async fn get(api: &ApiClient, id: i64) -> AppResult<Teacher> {
    api.get(&format!("/api/teachers/{id}")).await
}

pub async fn create(api: &ApiClient, teacher: &NewTeacher) -> AppResult<Ack> {
    api.post("/api/teachers", teacher).await
}

pub async fn create_many(api: &ApiClient, teachers: &[NewTeacher]) -> AppResult<BatchAck> {
    api.post("/api/teachers/batch", &teachers).await
}

pub async fn update(api: &ApiClient, id: i64, update: &UpdateTeacher) -> AppResult<Ack> {
    api.put(&format!("/api/teachers/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: i64) -> AppResult<Ack> {
    api.delete(&format!("/api/teachers/{id}")).await
}

pub async fn classes(api: &ApiClient, id: i64) -> AppResult<Vec<Class>> {
    api.get(&format!("/api/teachers/{id}/classes")).await
}

pub async fn by_department(api: &ApiClient, department_id: i64) -> AppResult<Vec<Teacher>> {
    api.get(&format!("/api/teachers/department/{department_id}"))
        .await
}

/// GET /api/teachers/class-students-surveys
///
/// Survey-completion matrix for the signed-in teacher's homeroom class.
pub async fn homeroom_report(api: &ApiClient) -> AppResult<HomeroomReport> {
    api.get("/api/teachers/class-students-surveys").await
}
