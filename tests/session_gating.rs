//! Session storage and role-gated dispatch, exercised against a temporary
//! session file. No network calls: building a client does not connect.

use surveydesk::commands::Context;
use surveydesk::config::{Environment, Settings};
use surveydesk::domain::auth::Role;
use surveydesk::session::{Session, SessionStore};

fn settings_with(session_file: std::path::PathBuf) -> Settings {
    Settings {
        env: Environment::Dev,
        api_base_url: "https://portal.example.edu".to_string(),
        request_timeout_seconds: 5,
        session_file,
        monitor_poll_seconds: 300,
    }
}

#[test]
fn missing_session_surfaces_the_login_required_state() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = Context::new(settings_with(dir.path().join("session.json")));

    let err = ctx.api_as(Role::Admin).unwrap_err();
    assert!(err.is_login_required());
}

#[test]
fn mismatched_role_is_refused_locally() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let store = SessionStore::new(path.clone());
    store
        .save(&Session::new(
            "tok".into(),
            "teacher@school.edu.vn".into(),
            "Tran Thi B".into(),
            Role::Teacher,
        ))
        .unwrap();

    let ctx = Context::new(settings_with(path));
    assert!(ctx.api_as(Role::Teacher).is_ok());

    let err = ctx.api_as(Role::Admin).unwrap_err();
    assert!(!err.is_login_required());
    assert!(err.to_string().contains("admin"));
}

#[test]
fn logout_state_survives_process_boundaries() {
    // Two stores over the same file model two client invocations.
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("session.json");

    let first = SessionStore::new(path.clone());
    first
        .save(&Session::new(
            "tok".into(),
            "a@school.edu.vn".into(),
            "A".into(),
            Role::Student,
        ))
        .unwrap();

    let second = SessionStore::new(path);
    assert_eq!(second.load().unwrap().unwrap().role, Role::Student);

    second.clear().unwrap();
    assert!(first.load().unwrap().is_none());
}
