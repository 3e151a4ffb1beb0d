//! Teacher administration views.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{ImportArgs, ListArgs, TeachersCmd, TemplateArgs};
use crate::domain::teachers::{NewTeacher, Teacher, UpdateTeacher};
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::roster;
use crate::services;

use super::{confirm, read_roster_file, row_matches, write_csv_output, IMPORT_PREVIEW_ROWS};

pub async fn run(api: &ApiClient, cmd: TeachersCmd) -> AppResult<()> {
    match cmd {
        TeachersCmd::List(args) => print_list(api, &args).await,
        TeachersCmd::Get { id } => {
            let teacher = services::teachers::get(api, id).await?;
            print_teachers(&[teacher]);
            Ok(())
        }
        TeachersCmd::Create {
            email,
            name,
            department_id,
        } => {
            let teacher = NewTeacher {
                email,
                name,
                department_id,
            };
            teacher.validate().map_err(AppError::Validation)?;
            let ack = services::teachers::create(api, &teacher).await?;
            output::success(&ack.message_or("teacher created"));
            print_list(api, &ListArgs::default()).await
        }
        TeachersCmd::Update {
            id,
            email,
            name,
            department_id,
            base_class,
        } => {
            let update = UpdateTeacher {
                email,
                name,
                department_id,
                base_class,
            };
            let ack = services::teachers::update(api, id, &update).await?;
            output::success(&ack.message_or("teacher updated"));
            print_list(api, &ListArgs::default()).await
        }
        TeachersCmd::Delete { id, yes } => {
            if !confirm(&format!("delete teacher {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::teachers::delete(api, id).await?;
            output::success(&ack.message_or("teacher deleted"));
            print_list(api, &ListArgs::default()).await
        }
        TeachersCmd::Classes { id } => {
            let classes = services::teachers::classes(api, id).await?;
            if classes.is_empty() {
                output::empty_state("this teacher has no class sections");
                return Ok(());
            }
            let mut table = Table::new(["code", "subject", "grade", "semester"]);
            for class in classes {
                table.row([
                    class.id,
                    class.subject_id,
                    class.grade.to_string(),
                    class.semester,
                ]);
            }
            table.print();
            Ok(())
        }
        TeachersCmd::ByDepartment { department_id } => {
            let teachers = services::teachers::by_department(api, department_id).await?;
            if teachers.is_empty() {
                output::empty_state("no teachers in this department");
                return Ok(());
            }
            print_teachers(&teachers);
            Ok(())
        }
        TeachersCmd::Import(args) => import(api, args).await,
        TeachersCmd::Template(TemplateArgs { out }) => {
            write_csv_output(out.as_deref(), &roster::TEACHERS.template())
        }
    }
}

async fn import(api: &ApiClient, args: ImportArgs) -> AppResult<()> {
    let text = read_roster_file(&args.file)?;
    let teachers = match roster::import::parse_teachers(&text) {
        Ok(teachers) => teachers,
        Err(e) => {
            output::import_error(&e);
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let mut preview = Table::new(["email", "name", "department"]);
    for teacher in teachers.iter().take(IMPORT_PREVIEW_ROWS) {
        preview.row([
            teacher.email.clone(),
            teacher.name.clone(),
            teacher.department_id.to_string(),
        ]);
    }
    output::notice(&format!("{} teachers ready to import; preview:", teachers.len()));
    preview.print();

    if args.dry_run {
        output::notice("dry run - nothing submitted");
        return Ok(());
    }

    let ack = services::teachers::create_many(api, &teachers).await?;
    output::success(&ack.summary(teachers.len()));
    print_list(api, &ListArgs::default()).await
}

fn print_teachers(teachers: &[Teacher]) {
    let mut table = Table::new(["id", "email", "name", "department", "homeroom"]);
    for teacher in teachers {
        table.row([
            teacher.id.to_string(),
            teacher.email.clone(),
            teacher.name.clone(),
            teacher.department_id.to_string(),
            teacher.base_class.clone().unwrap_or_default(),
        ]);
    }
    table.print();
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let teachers = services::teachers::list(api).await?;
    let filtered: Vec<_> = teachers
        .into_iter()
        .filter(|t| row_matches(&[&t.email, &t.name], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no teachers found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    print_teachers(&page.items);
    page_footer(&page.meta);
    Ok(())
}
