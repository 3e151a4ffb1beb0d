//! Sign-in, sign-out, whoami.

use std::io::Read;

use crate::cli::LoginArgs;
use crate::domain::auth::CheckUserRequest;
use crate::error::{AppError, AppResult};
use crate::output;
use crate::services;
use crate::session::Session;

use super::Context;

/// Forward the identity-provider credential to the identity-check endpoint
/// and store the issued bearer token.
pub async fn login(ctx: &Context, args: LoginArgs) -> AppResult<()> {
    let credential = match args.credential {
        Some(credential) => credential,
        None => {
            output::notice("reading credential from stdin");
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf.trim().to_string()
        }
    };
    if credential.is_empty() {
        return Err(AppError::BadRequest("credential must not be empty".into()));
    }

    let api = ctx.anonymous_api()?;
    let response = services::auth::check_user(&api, &CheckUserRequest { credential }).await?;

    let (Some(token), Some(user)) = (response.token, response.user) else {
        let message = response
            .message
            .unwrap_or_else(|| "identity check failed - use your school-issued account".into());
        return Err(AppError::Unauthorized(message));
    };

    let session = Session::new(token, user.email.clone(), user.name.clone(), user.role);
    ctx.store.save(&session)?;

    output::success(&format!("signed in as {} ({})", user.name, user.role));
    Ok(())
}

/// Clear the local session first, then tell the portal; a dead endpoint must
/// not keep the client signed in.
pub async fn logout(ctx: &Context) -> AppResult<()> {
    let session = ctx.store.load()?;
    ctx.store.clear()?;

    match session {
        Some(session) => {
            let api = ctx.anonymous_api()?.with_token(session.token);
            if let Err(e) = services::auth::logout(&api).await {
                tracing::warn!(error = %e, "portal logout call failed; local session already cleared");
            }
            output::success("signed out");
        }
        None => output::notice("no active session"),
    }
    Ok(())
}

/// Show the account the portal associates with the stored token.
pub async fn whoami(ctx: &Context) -> AppResult<()> {
    let session = ctx.store.require()?;
    let api = ctx.anonymous_api()?.with_token(session.token);
    let profile = services::auth::profile(&api).await?;

    let mut table = output::Table::new(["field", "value"]);
    table.row(["name", profile.name.as_str()]);
    table.row(["email", profile.email.as_str()]);
    table.row(["role", profile.role.label()]);
    table.print();
    Ok(())
}
