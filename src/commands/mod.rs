//! Command dispatch and shared view helpers.
//!
//! The dispatcher is the role-gated router: it resolves the stored session,
//! checks the command group against the session's role, and hands a
//! token-bearing client to the view. The backend stays authoritative - the
//! gate only saves a doomed round trip, exactly like the original client's
//! route guards.

pub mod auth;
pub mod classes;
pub mod dashboard;
pub mod departments;
pub mod monitor;
pub mod my_surveys;
pub mod students;
pub mod subjects;
pub mod surveys;
pub mod teachers;
pub mod users;

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::io::{BufRead, Write};
use std::path::Path;

use crate::api::ApiClient;
use crate::cli::{Cli, Command};
use crate::config::Settings;
use crate::domain::auth::Role;
use crate::error::{AppError, AppResult};
use crate::session::{Session, SessionStore};

/// Rows shown when previewing an import, matching the original modal.
pub(crate) const IMPORT_PREVIEW_ROWS: usize = 3;

pub struct Context {
    pub settings: Settings,
    pub store: SessionStore,
}

impl Context {
    pub fn new(settings: Settings) -> Self {
        let store = SessionStore::new(settings.session_file.clone());
        Self { settings, store }
    }

    /// Client without a token, for the identity-check endpoint.
    pub fn anonymous_api(&self) -> AppResult<ApiClient> {
        ApiClient::new(
            &self.settings.api_base_url,
            self.settings.request_timeout_seconds,
        )
    }

    fn authed(&self) -> AppResult<(ApiClient, Session)> {
        let session = self.store.require()?;
        let api = self.anonymous_api()?.with_token(session.token.clone());
        Ok((api, session))
    }

    /// Client for a command group, refused when the session's role does not
    /// match.
    pub fn api_as(&self, required: Role) -> AppResult<ApiClient> {
        let (api, session) = self.authed()?;
        if session.role != required {
            return Err(AppError::Forbidden(format!(
                "this view needs the {required} role; you are signed in as {}",
                session.role
            )));
        }
        Ok(api)
    }
}

pub async fn dispatch(cli: Cli, ctx: &Context) -> AppResult<()> {
    match cli.command {
        Command::Login(args) => auth::login(ctx, args).await,
        Command::Logout => auth::logout(ctx).await,
        Command::Whoami => auth::whoami(ctx).await,

        Command::Dashboard => dashboard::run(&ctx.api_as(Role::Admin)?).await,
        Command::Departments(cmd) => departments::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Subjects(cmd) => subjects::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Teachers(cmd) => teachers::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Classes(cmd) => classes::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Students(cmd) => students::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Surveys(cmd) => surveys::run(&ctx.api_as(Role::Admin)?, cmd).await,
        Command::Users(cmd) => users::run(&ctx.api_as(Role::Admin)?, cmd).await,

        Command::Monitor(args) => {
            monitor::run(&ctx.api_as(Role::Teacher)?, &ctx.settings, args).await
        }
        Command::MySurveys(cmd) => my_surveys::run(&ctx.api_as(Role::Student)?, cmd).await,
    }
}

// ---------------------------------------------------------------------------
// Shared view helpers
// ---------------------------------------------------------------------------

pub(crate) fn contains_ci(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}

/// Matches the list-view search box: any of the given cells may match.
pub(crate) fn row_matches(cells: &[&str], search: Option<&str>) -> bool {
    match search {
        Some(needle) if !needle.trim().is_empty() => {
            cells.iter().any(|cell| contains_ci(cell, needle.trim()))
        }
        _ => true,
    }
}

/// Ask before a destructive call unless `--yes` was passed.
pub(crate) fn confirm(prompt: &str, assume_yes: bool) -> AppResult<bool> {
    if assume_yes {
        return Ok(true);
    }
    eprint!("{prompt} [y/N] ");
    std::io::stderr().flush()?;
    let mut answer = String::new();
    std::io::stdin().lock().read_line(&mut answer)?;
    Ok(matches!(answer.trim(), "y" | "Y" | "yes"))
}

pub(crate) fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(NaiveTime::MIN).and_utc()
}

pub(crate) fn end_of_day(date: NaiveDate) -> DateTime<Utc> {
    match NaiveTime::from_hms_opt(23, 59, 59) {
        Some(time) => date.and_time(time).and_utc(),
        None => start_of_day(date),
    }
}

pub(crate) fn read_roster_file(path: &Path) -> AppResult<String> {
    std::fs::read_to_string(path).map_err(|e| {
        AppError::BadRequest(format!("cannot read {}: {e}", path.display()))
    })
}

/// Write generated CSV to a file, or stdout when no path was given.
pub(crate) fn write_csv_output(out: Option<&Path>, contents: &str) -> AppResult<()> {
    match out {
        Some(path) => {
            std::fs::write(path, contents)?;
            crate::output::success(&format!("wrote {}", path.display()));
            Ok(())
        }
        None => {
            print!("{contents}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_matches_any_cell_case_insensitively() {
        assert!(row_matches(&["240327", "Nguyen Van A"], Some("nguyen")));
        assert!(row_matches(&["240327", "Nguyen Van A"], Some("2403")));
        assert!(!row_matches(&["240327", "Nguyen Van A"], Some("tran")));
        assert!(row_matches(&["anything"], None));
        assert!(row_matches(&["anything"], Some("  ")));
    }

    #[test]
    fn day_bounds_are_utc() {
        let date = NaiveDate::from_ymd_opt(2025, 1, 6).unwrap();
        assert_eq!(start_of_day(date).to_rfc3339(), "2025-01-06T00:00:00+00:00");
        assert_eq!(end_of_day(date).to_rfc3339(), "2025-01-06T23:59:59+00:00");
    }
}
