//! Thin HTTP wrapper around the portal REST API.
//!
//! One `reqwest::Client` with the portal base URL and an optional bearer
//! token. Service modules call the typed verb helpers; non-2xx responses are
//! decoded best-effort into the portal's error body and mapped onto
//! `AppError` variants. Nothing is retried automatically - recovery is the
//! user re-running the command.

use reqwest::{Client, Method, RequestBuilder, StatusCode};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, error};

use crate::error::{AppError, AppResult};

/// Error body the portal returns for failed requests.
#[derive(Debug, Deserialize)]
struct PortalErrorBody {
    message: Option<String>,
    error: Option<String>,
}

impl PortalErrorBody {
    fn into_message(self) -> Option<String> {
        self.message.or(self.error)
    }
}

#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(AppError::Transport)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            token: None,
        })
    }

    /// Attach the stored session token; it is sent as a bearer header on
    /// every subsequent request.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        let mut req = self.client.request(method, url);
        if let Some(token) = &self.token {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn send<R: DeserializeOwned>(&self, req: RequestBuilder, path: &str) -> AppResult<R> {
        debug!(path, "portal request");

        let response = req.send().await.map_err(|e| {
            error!(path, error = %e, "portal request failed");
            AppError::Transport(e)
        })?;

        let status = response.status();
        if status.is_success() {
            response.json::<R>().await.map_err(|e| {
                error!(path, error = %e, "failed to decode portal response");
                AppError::Internal(anyhow::anyhow!("invalid portal response: {e}"))
            })
        } else {
            Err(self.decode_error(status, response).await)
        }
    }

    /// Extract the best-effort message from a failed response body, falling
    /// back to the HTTP status text.
    async fn decode_error(&self, status: StatusCode, response: reqwest::Response) -> AppError {
        let message = response
            .json::<PortalErrorBody>()
            .await
            .ok()
            .and_then(PortalErrorBody::into_message)
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("request failed")
                    .to_string()
            });

        AppError::from_status(status.as_u16(), message)
    }

    pub async fn get<R: DeserializeOwned>(&self, path: &str) -> AppResult<R> {
        self.send(self.request(Method::GET, path), path).await
    }

    pub async fn get_query<Q: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        query: &Q,
    ) -> AppResult<R> {
        self.send(self.request(Method::GET, path).query(query), path)
            .await
    }

    pub async fn post<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<R> {
        self.send(self.request(Method::POST, path).json(body), path)
            .await
    }

    pub async fn put<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<R> {
        self.send(self.request(Method::PUT, path).json(body), path)
            .await
    }

    pub async fn patch<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<R> {
        self.send(self.request(Method::PATCH, path).json(body), path)
            .await
    }

    pub async fn delete<R: DeserializeOwned>(&self, path: &str) -> AppResult<R> {
        self.send(self.request(Method::DELETE, path), path).await
    }

    /// DELETE with a JSON body. The roster-removal endpoint identifies the
    /// student in the body rather than the path.
    pub async fn delete_with_body<B: Serialize, R: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> AppResult<R> {
        self.send(self.request(Method::DELETE, path).json(body), path)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let api = ApiClient::new("https://portal.example.edu/", 5).unwrap();
        assert_eq!(api.base_url(), "https://portal.example.edu");
    }

    #[test]
    fn error_body_prefers_message_field() {
        let body: PortalErrorBody =
            serde_json::from_str(r#"{"message":"Subject not found","error":"ignored"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Subject not found"));

        let body: PortalErrorBody = serde_json::from_str(r#"{"error":"Bad token"}"#).unwrap();
        assert_eq!(body.into_message().as_deref(), Some("Bad token"));

        let body: PortalErrorBody = serde_json::from_str(r#"{}"#).unwrap();
        assert!(body.into_message().is_none());
    }
}
