//! Authentication domain types
//!
//! The identity provider hands the user a credential out of band; the client
//! forwards it to the identity-check endpoint and receives a bearer token
//! plus the account's role, which drives command gating.

use serde::{Deserialize, Serialize};

/// Account role as stored by the portal (numeric on the wire).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Role {
    Admin,
    Teacher,
    Parent,
    Student,
}

impl TryFrom<u8> for Role {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Admin),
            2 => Ok(Self::Teacher),
            3 => Ok(Self::Parent),
            4 => Ok(Self::Student),
            other => Err(format!("unknown role value {other}")),
        }
    }
}

impl From<Role> for u8 {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => 1,
            Role::Teacher => 2,
            Role::Parent => 3,
            Role::Student => 4,
        }
    }
}

impl Role {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Teacher => "teacher",
            Self::Parent => "parent",
            Self::Student => "student",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Body for POST /api/auth/check-user.
#[derive(Debug, Clone, Serialize)]
pub struct CheckUserRequest {
    /// Identity-provider credential obtained out of band.
    pub credential: String,
}

/// Account identity as returned by the identity-check endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthenticatedUser {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Response from POST /api/auth/check-user. A token is present only on
/// success.
#[derive(Debug, Clone, Deserialize)]
pub struct CheckUserResponse {
    pub success: bool,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<AuthenticatedUser>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response from GET /api/users/profile.
#[derive(Debug, Clone, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_round_trips_through_wire_numbers() {
        for (n, role) in [
            (1u8, Role::Admin),
            (2, Role::Teacher),
            (3, Role::Parent),
            (4, Role::Student),
        ] {
            assert_eq!(Role::try_from(n).unwrap(), role);
            assert_eq!(u8::from(role), n);
        }
        assert!(Role::try_from(0).is_err());
        assert!(Role::try_from(5).is_err());
    }

    #[test]
    fn check_user_response_tolerates_failure_shape() {
        let raw = r#"{"success":false,"message":"use your school-issued email"}"#;
        let response: CheckUserResponse = serde_json::from_str(raw).unwrap();
        assert!(!response.success);
        assert!(response.token.is_none());
        assert!(response.user.is_none());
    }

    #[test]
    fn check_user_response_parses_success_shape() {
        let raw = r#"{
            "success": true,
            "token": "abc",
            "user": {"id": 7, "name": "A", "email": "a@school.edu.vn", "role": 2}
        }"#;
        let response: CheckUserResponse = serde_json::from_str(raw).unwrap();
        assert!(response.success);
        assert_eq!(response.user.unwrap().role, Role::Teacher);
    }
}
