//! Department endpoints

use crate::api::response::{Ack, BatchAck};
use crate::api::ApiClient;
use crate::domain::departments::{Department, DepartmentInput};
use crate::domain::subjects::Subject;
use crate::domain::teachers::Teacher;
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Department>> {
    api.get("/api/departments").await
}

pub async fn get(api: &ApiClient, id: i64) -> AppResult<Department> {
    api.get(&format!("/api/departments/{id}")).await
}

pub async fn create(api: &ApiClient, department: &DepartmentInput) -> AppResult<Ack> {
    api.post("/api/departments", department).await
}

pub async fn create_many(api: &ApiClient, departments: &[DepartmentInput]) -> AppResult<BatchAck> {
    api.post("/api/departments/batch", &departments).await
}

pub async fn update(api: &ApiClient, id: i64, department: &DepartmentInput) -> AppResult<Ack> {
    api.put(&format!("/api/departments/{id}"), department).await
}

pub async fn delete(api: &ApiClient, id: i64) -> AppResult<Ack> {
    api.delete(&format!("/api/departments/{id}")).await
}

pub async fn teachers(api: &ApiClient, id: i64) -> AppResult<Vec<Teacher>> {
    api.get(&format!("/api/departments/{id}/teachers")).await
}

pub async fn subjects(api: &ApiClient, id: i64) -> AppResult<Vec<Subject>> {
    api.get(&format!("/api/departments/{id}/subjects")).await
}
