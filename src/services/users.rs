//! User-account endpoints

use crate::api::response::Ack;
use crate::api::ApiClient;
use crate::domain::users::{NewUser, UpdateUser, User};
use crate::error::AppResult;

pub async fn list(api: &ApiClient) -> AppResult<Vec<User>> {
    api.get("/api/users").await
}

pub async fn get(api: &ApiClient, id: i64) -> AppResult<User> {
    api.get(&format!("/api/users/{id}")).await
}

pub async fn create(api: &ApiClient, user: &NewUser) -> AppResult<Ack> {
    api.post("/api/users", user).await
}

pub async fn update(api: &ApiClient, id: i64, update: &UpdateUser) -> AppResult<Ack> {
    api.put(&format!("/api/users/{id}"), update).await
}

pub async fn delete(api: &ApiClient, id: i64) -> AppResult<Ack> {
    api.delete(&format!("/api/users/{id}")).await
}
