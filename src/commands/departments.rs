//! Department administration views.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{DepartmentsCmd, ListArgs};
use crate::domain::departments::DepartmentInput;
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::services;

use super::{confirm, row_matches};

pub async fn run(api: &ApiClient, cmd: DepartmentsCmd) -> AppResult<()> {
    match cmd {
        DepartmentsCmd::List(args) => print_list(api, &args).await,
        DepartmentsCmd::Get { id } => {
            let department = services::departments::get(api, id).await?;
            let mut table = Table::new(["id", "name"]);
            table.row([department.id.to_string(), department.name]);
            table.print();
            Ok(())
        }
        DepartmentsCmd::Create { name } => {
            let input = DepartmentInput { name };
            input.validate().map_err(AppError::Validation)?;
            let ack = services::departments::create(api, &input).await?;
            output::success(&ack.message_or("department created"));
            print_list(api, &ListArgs::default()).await
        }
        DepartmentsCmd::Update { id, name } => {
            let input = DepartmentInput { name };
            input.validate().map_err(AppError::Validation)?;
            let ack = services::departments::update(api, id, &input).await?;
            output::success(&ack.message_or("department updated"));
            print_list(api, &ListArgs::default()).await
        }
        DepartmentsCmd::Delete { id, yes } => {
            if !confirm(&format!("delete department {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::departments::delete(api, id).await?;
            output::success(&ack.message_or("department deleted"));
            print_list(api, &ListArgs::default()).await
        }
        DepartmentsCmd::Teachers { id } => {
            let teachers = services::departments::teachers(api, id).await?;
            if teachers.is_empty() {
                output::empty_state("no teachers in this department");
                return Ok(());
            }
            let mut table = Table::new(["id", "email", "name"]);
            for teacher in teachers {
                table.row([teacher.id.to_string(), teacher.email, teacher.name]);
            }
            table.print();
            Ok(())
        }
        DepartmentsCmd::Subjects { id } => {
            let subjects = services::departments::subjects(api, id).await?;
            if subjects.is_empty() {
                output::empty_state("no subjects in this department");
                return Ok(());
            }
            let mut table = Table::new(["code", "name"]);
            for subject in subjects {
                table.row([subject.id, subject.name]);
            }
            table.print();
            Ok(())
        }
    }
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let departments = services::departments::list(api).await?;
    let filtered: Vec<_> = departments
        .into_iter()
        .filter(|d| row_matches(&[&d.id.to_string(), &d.name], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no departments found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    let mut table = Table::new(["id", "name"]);
    for department in &page.items {
        table.row([department.id.to_string(), department.name.clone()]);
    }
    table.print();
    page_footer(&page.meta);
    Ok(())
}
