//! Portal account administration.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{ListArgs, UsersCmd};
use crate::domain::users::{NewUser, UpdateUser, User};
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::services;

use super::{confirm, row_matches};

pub async fn run(api: &ApiClient, cmd: UsersCmd) -> AppResult<()> {
    match cmd {
        UsersCmd::List(args) => print_list(api, &args).await,
        UsersCmd::Get { id } => {
            let user = services::users::get(api, id).await?;
            print_users(&[user]);
            Ok(())
        }
        UsersCmd::Create {
            name,
            email,
            role,
            password,
        } => {
            let user = NewUser {
                name,
                email,
                role: role.into(),
                password,
            };
            user.validate().map_err(AppError::Validation)?;
            let ack = services::users::create(api, &user).await?;
            output::success(&ack.message_or("user created"));
            print_list(api, &ListArgs::default()).await
        }
        UsersCmd::Update {
            id,
            name,
            email,
            role,
        } => {
            let update = UpdateUser {
                name,
                email,
                role: role.map(Into::into),
            };
            let ack = services::users::update(api, id, &update).await?;
            output::success(&ack.message_or("user updated"));
            print_list(api, &ListArgs::default()).await
        }
        UsersCmd::Delete { id, yes } => {
            if !confirm(&format!("delete user {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::users::delete(api, id).await?;
            output::success(&ack.message_or("user deleted"));
            print_list(api, &ListArgs::default()).await
        }
    }
}

fn print_users(users: &[User]) {
    let mut table = Table::new(["id", "name", "email", "role"]);
    for user in users {
        table.row([
            user.id.to_string(),
            user.name.clone(),
            user.email.clone(),
            user.role.label().to_string(),
        ]);
    }
    table.print();
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let users = services::users::list(api).await?;
    let filtered: Vec<_> = users
        .into_iter()
        .filter(|u| row_matches(&[&u.name, &u.email], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no users found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    print_users(&page.items);
    page_footer(&page.meta);
    Ok(())
}
