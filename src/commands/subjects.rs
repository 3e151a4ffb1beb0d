//! Subject administration views.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{ImportArgs, ListArgs, SubjectsCmd, TemplateArgs};
use crate::domain::subjects::{NewSubject, UpdateSubject};
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::roster;
use crate::services;

use super::{confirm, read_roster_file, row_matches, write_csv_output, IMPORT_PREVIEW_ROWS};

pub async fn run(api: &ApiClient, cmd: SubjectsCmd) -> AppResult<()> {
    match cmd {
        SubjectsCmd::List(args) => print_list(api, &args).await,
        SubjectsCmd::Get { id } => {
            let subject = services::subjects::get(api, &id).await?;
            let mut table = Table::new(["code", "name", "department"]);
            table.row([subject.id, subject.name, subject.department_id.to_string()]);
            table.print();
            Ok(())
        }
        SubjectsCmd::Create {
            id,
            name,
            department_id,
        } => {
            let subject = NewSubject {
                id,
                name,
                department_id,
            };
            subject.validate().map_err(AppError::Validation)?;
            let ack = services::subjects::create(api, &subject).await?;
            output::success(&ack.message_or("subject created"));
            print_list(api, &ListArgs::default()).await
        }
        SubjectsCmd::Update {
            id,
            name,
            department_id,
        } => {
            let update = UpdateSubject {
                name,
                department_id,
            };
            let ack = services::subjects::update(api, &id, &update).await?;
            output::success(&ack.message_or("subject updated"));
            print_list(api, &ListArgs::default()).await
        }
        SubjectsCmd::Delete { id, yes } => {
            if !confirm(&format!("delete subject {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::subjects::delete(api, &id).await?;
            output::success(&ack.message_or("subject deleted"));
            print_list(api, &ListArgs::default()).await
        }
        SubjectsCmd::Classes { id } => {
            let classes = services::subjects::classes(api, &id).await?;
            if classes.is_empty() {
                output::empty_state("no class sections for this subject");
                return Ok(());
            }
            let mut table = Table::new(["code", "grade", "semester"]);
            for class in classes {
                table.row([class.id, class.grade.to_string(), class.semester]);
            }
            table.print();
            Ok(())
        }
        SubjectsCmd::Surveys { id } => {
            let surveys = services::subjects::surveys(api, &id).await?;
            if surveys.is_empty() {
                output::empty_state("no surveys for this subject");
                return Ok(());
            }
            let mut table = Table::new(["id", "name", "active"]);
            for survey in surveys {
                table.row([
                    survey.id.to_string(),
                    survey.name,
                    survey.is_active.to_string(),
                ]);
            }
            table.print();
            Ok(())
        }
        SubjectsCmd::Import(args) => import(api, args).await,
        SubjectsCmd::Template(TemplateArgs { out }) => {
            write_csv_output(out.as_deref(), &roster::SUBJECTS.template())
        }
    }
}

async fn import(api: &ApiClient, args: ImportArgs) -> AppResult<()> {
    let text = read_roster_file(&args.file)?;
    let subjects = match roster::import::parse_subjects(&text) {
        Ok(subjects) => subjects,
        Err(e) => {
            output::import_error(&e);
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let mut preview = Table::new(["code", "name", "department"]);
    for subject in subjects.iter().take(IMPORT_PREVIEW_ROWS) {
        preview.row([
            subject.id.clone(),
            subject.name.clone(),
            subject.department_id.to_string(),
        ]);
    }
    output::notice(&format!("{} subjects ready to import; preview:", subjects.len()));
    preview.print();

    if args.dry_run {
        output::notice("dry run - nothing submitted");
        return Ok(());
    }

    let ack = services::subjects::create_many(api, &subjects).await?;
    output::success(&ack.summary(subjects.len()));
    print_list(api, &ListArgs::default()).await
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let subjects = services::subjects::list(api).await?;
    let filtered: Vec<_> = subjects
        .into_iter()
        .filter(|s| row_matches(&[&s.id, &s.name], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no subjects found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    let mut table = Table::new(["code", "name", "department"]);
    for subject in &page.items {
        table.row([
            subject.id.clone(),
            subject.name.clone(),
            subject.department_id.to_string(),
        ]);
    }
    table.print();
    page_footer(&page.meta);
    Ok(())
}
