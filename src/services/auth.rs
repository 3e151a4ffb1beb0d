//! Identity-check and profile endpoints

use crate::api::response::Ack;
use crate::api::ApiClient;
use crate::domain::auth::{CheckUserRequest, CheckUserResponse, UserProfile};
use crate::error::AppResult;

/// POST /api/auth/check-user
///
/// Forwards the identity-provider credential; on success the portal issues
/// the bearer token the rest of the client sends.
pub async fn check_user(
    api: &ApiClient,
    request: &CheckUserRequest,
) -> AppResult<CheckUserResponse> {
    api.post("/api/auth/check-user", request).await
}

/// GET /api/users/profile
pub async fn profile(api: &ApiClient) -> AppResult<UserProfile> {
    api.get("/api/users/profile").await
}

/// GET /api/auth/logout
pub async fn logout(api: &ApiClient) -> AppResult<Ack> {
    api.get("/api/auth/logout").await
}
