//! Local session storage
//!
//! The portal issues a bearer token from the identity-check endpoint; the
//! client keeps it in a small JSON file (the localStorage analog) together
//! with the signed-in user's role so command dispatch can gate views without
//! a round trip. The file is the only shared mutable resource in the client:
//! read at startup, rewritten by login, removed by logout.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::auth::Role;
use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub saved_at: DateTime<Utc>,
}

impl Session {
    pub fn new(token: String, email: String, name: String, role: Role) -> Self {
        Self {
            token,
            email,
            name,
            role,
            saved_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the stored session, if any. A malformed file is treated as no
    /// session so a corrupted write never wedges the client.
    pub fn load(&self) -> AppResult<Option<Session>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(AppError::Io(e)),
        };

        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "discarding unreadable session file");
                Ok(None)
            }
        }
    }

    /// Load the stored session or fail with the sign-in-required state.
    pub fn require(&self) -> AppResult<Session> {
        self.load()?.ok_or_else(|| {
            AppError::Unauthorized("not signed in - run `surveydesk login` first".to_string())
        })
    }

    pub fn save(&self, session: &Session) -> AppResult<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(session)
            .map_err(|e| AppError::Internal(anyhow::anyhow!("serializing session: {e}")))?;
        fs::write(&self.path, raw)?;
        restrict_permissions(&self.path)?;
        Ok(())
    }

    pub fn clear(&self) -> AppResult<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Io(e)),
        }
    }
}

#[cfg(unix)]
fn restrict_permissions(path: &Path) -> std::io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SessionStore {
        SessionStore::new(dir.path().join("session.json"))
    }

    #[test]
    fn round_trips_a_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);

        let session = Session::new(
            "tok-123".into(),
            "head@school.edu.vn".into(),
            "Head Admin".into(),
            Role::Admin,
        );
        store.save(&session).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded.token, "tok-123");
        assert_eq!(loaded.role, Role::Admin);
    }

    #[test]
    fn missing_file_is_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        assert!(store.load().unwrap().is_none());
        assert!(store.require().unwrap_err().is_login_required());
    }

    #[test]
    fn malformed_file_is_discarded() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        fs::create_dir_all(dir.path()).unwrap();
        fs::write(store.path(), "{not json").unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.clear().unwrap();
        store
            .save(&Session::new(
                "t".into(),
                "a@b.c".into(),
                "A".into(),
                Role::Student,
            ))
            .unwrap();
        store.clear().unwrap();
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }
}
