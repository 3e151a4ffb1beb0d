//! User-account domain types

use serde::{Deserialize, Serialize};

use crate::domain::auth::Role;
use crate::domain::is_valid_email;
use crate::error::FieldError;

/// Portal user account.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub role: Role,
}

/// Body for POST /api/users.
#[derive(Debug, Clone, Serialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub role: Role,
    pub password: String,
}

impl NewUser {
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();
        if self.name.trim().is_empty() {
            errors.push(FieldError::new("name", "name is required"));
        }
        if self.email.trim().is_empty() {
            errors.push(FieldError::new("email", "email is required"));
        } else if !is_valid_email(&self.email) {
            errors.push(FieldError::new("email", "invalid email format"));
        }
        if self.password.is_empty() {
            errors.push(FieldError::new("password", "password is required"));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

/// Body for PUT /api/users/{id}.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateUser {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_serializes_as_wire_number() {
        let user = NewUser {
            name: "A".into(),
            email: "a@school.edu.vn".into(),
            role: Role::Teacher,
            password: "secret".into(),
        };
        let json = serde_json::to_value(&user).unwrap();
        assert_eq!(json["role"], serde_json::json!(2));
    }

    #[test]
    fn missing_password_is_reported() {
        let user = NewUser {
            name: "A".into(),
            email: "a@school.edu.vn".into(),
            role: Role::Admin,
            password: String::new(),
        };
        let errors = user.validate().unwrap_err();
        assert_eq!(errors[0].field, "password");
    }
}
