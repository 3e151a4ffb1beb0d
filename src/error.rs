//! Unified client error handling
//!
//! Every failure the client surfaces falls into one of three buckets the UI
//! distinguishes: form validation (reported before any request is sent),
//! request failures (non-2xx responses with a best-effort message extracted
//! from the body), and transport errors (no response at all).

use thiserror::Error;

/// A single failed form-field check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Debug, Error)]
pub enum AppError {
    /// Local form validation failed; nothing was sent to the portal.
    #[error("validation failed")]
    Validation(Vec<FieldError>),

    /// The stored session token is missing, expired, or was rejected.
    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Conflict(String),

    /// Any other non-2xx response.
    #[error("request failed ({status}): {message}")]
    Api { status: u16, message: String },

    /// The request never produced a response (DNS, TLS, timeout, ...).
    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(errors: Vec<FieldError>) -> Self {
        Self::Validation(errors)
    }

    /// True when the right recovery is signing in again.
    pub fn is_login_required(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }

    /// Map a portal status code and extracted message to an error variant.
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => Self::Unauthorized(message),
            403 => Self::Forbidden(message),
            404 => Self::NotFound(message),
            400 => Self::BadRequest(message),
            409 => Self::Conflict(message),
            _ => Self::Api { status, message },
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_map_to_variants() {
        assert!(matches!(
            AppError::from_status(401, "expired".into()),
            AppError::Unauthorized(_)
        ));
        assert!(matches!(
            AppError::from_status(404, "missing".into()),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from_status(409, "duplicate".into()),
            AppError::Conflict(_)
        ));
        assert!(matches!(
            AppError::from_status(500, "boom".into()),
            AppError::Api { status: 500, .. }
        ));
    }

    #[test]
    fn only_unauthorized_requires_login() {
        assert!(AppError::from_status(401, "expired".into()).is_login_required());
        assert!(!AppError::from_status(403, "no".into()).is_login_required());
        assert!(!AppError::NotFound("x".into()).is_login_required());
    }
}
