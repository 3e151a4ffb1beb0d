//! Subject endpoints

use crate::api::response::{Ack, BatchAck};
use crate::api::ApiClient;
use crate::domain::classes::Class;
use crate::domain::subjects::{NewSubject, Subject, UpdateSubject};
use crate::domain::surveys::Survey;
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<Subject>> {
    api.get("/api/subjects").await
}

pub async fn get(api: &ApiClient, id: &str) -> AppResult<Subject> {
    api.get(&format!("/api/subjects/{id}")).await
}

pub async fn create(api: &ApiClient, subject: &NewSubject) -> AppResult<Ack> {
    api.post("/api/subjects", subject).await
}

pub async fn create_many(api: &ApiClient, subjects: &[NewSubject]) -> AppResult<BatchAck> {
    api.post("/api/subjects/batch", &subjects).await
}

pub async fn update(api: &ApiClient, id: &str, update: &UpdateSubject) -> AppResult<Ack> {
    api.put(&format!("/api/subjects/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: &str) -> AppResult<Ack> {
    api.delete(&format!("/api/subjects/{id}")).await
}

pub async fn classes(api: &ApiClient, id: &str) -> AppResult<Vec<Class>> {
    api.get(&format!("/api/subjects/{id}/classes")).await
}

pub async fn surveys(api: &ApiClient, id: &str) -> AppResult<Vec<Survey>> {
    api.get(&format!("/api/subjects/{id}/surveys")).await
}
