//! Student endpoints

use crate::api::response::{Ack, BatchAck};
use crate::api::ApiClient;
use crate::domain::classes::Class;
use crate::domain::students::{NewStudent, Student, UpdateStudent};
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Student>> {
    api.get("/api/students").await
}

pub async fn get(api: &ApiClient, id: &str) -> AppResult<Student> {
    api.get(&format!("/api/students/{id}")).await
}

pub async fn create(api: &ApiClient, student: &NewStudent) -> AppResult<Ack> {
    api.post("/api/students", student).await
}

pub async fn create_many(api: &ApiClient, students: &[NewStudent]) -> AppResult<BatchAck> {
    api.post("/api/students/batch", &students).await
}

pub async fn update(api: &ApiClient, id: &str, update: &UpdateStudent) -> AppResult<Ack> {
    api.put(&format!("/api/students/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: &str) -> AppResult<Ack> {
    api.delete(&format!("/api/students/{id}")).await
}

pub async fn classes(api: &ApiClient, id: &str) -> AppResult<Vec<Class>> {
    api.get(&format!("/api/students/{id}/classes")).await
}
