use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Dev,
    Staging,
    Prod,
}

impl Environment {
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            "staging" => Self::Staging,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

#[derive(Debug, Clone)]
pub struct Settings {
    pub env: Environment,

    // Portal API
    pub api_base_url: String,
    pub request_timeout_seconds: u64,

    // Local session storage
    pub session_file: PathBuf,

    // Homeroom monitor
    pub monitor_poll_seconds: u64,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        let env = Environment::from_str(&env::var("ENV").unwrap_or_else(|_| "dev".to_string()));

        // Portal API
        let api_base_url =
            env::var("SURVEYDESK_API_URL").context("SURVEYDESK_API_URL must be set")?;
        let request_timeout_seconds = env::var("SURVEYDESK_REQUEST_TIMEOUT_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);

        // Local session storage
        let session_file = match env::var("SURVEYDESK_SESSION_FILE") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_session_file()?,
        };

        // Homeroom monitor
        let monitor_poll_seconds = env::var("SURVEYDESK_MONITOR_POLL_SECONDS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(300); // original client refreshed every 5 minutes

        Ok(Settings {
            env,
            api_base_url,
            request_timeout_seconds,
            session_file,
            monitor_poll_seconds,
        })
    }
}

fn default_session_file() -> Result<PathBuf> {
    let home = env::var("HOME").context("HOME must be set to locate the session file")?;
    Ok(PathBuf::from(home).join(".surveydesk").join("session.json"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_parsing_is_lenient() {
        assert_eq!(Environment::from_str("PROD"), Environment::Prod);
        assert_eq!(Environment::from_str("production"), Environment::Prod);
        assert_eq!(Environment::from_str("staging"), Environment::Staging);
        assert_eq!(Environment::from_str("anything-else"), Environment::Dev);
    }
}
