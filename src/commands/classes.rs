//! Class-section administration and roster management.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{ClassesCmd, ImportArgs, ListArgs, TemplateArgs};
use crate::domain::classes::NewClass;
use crate::domain::students::Student;
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::roster;
use crate::services;

use super::{confirm, read_roster_file, row_matches, write_csv_output, IMPORT_PREVIEW_ROWS};

pub async fn run(api: &ApiClient, cmd: ClassesCmd) -> AppResult<()> {
    match cmd {
        ClassesCmd::List(args) => print_list(api, &args).await,
        ClassesCmd::Get { id } => {
            let class = services::classes::get(api, &id).await?;
            let mut table = Table::new(["code", "subject", "grade", "semester", "teacher"]);
            table.row([
                class.id,
                class.subject_id,
                class.grade.to_string(),
                class.semester,
                class
                    .teacher_id
                    .map(|id| id.to_string())
                    .unwrap_or_default(),
            ]);
            table.print();
            Ok(())
        }
        ClassesCmd::Create {
            id,
            subject_id,
            grade,
            semester,
        } => {
            let class = NewClass {
                id,
                subject_id,
                grade,
                semester,
            };
            class.validate().map_err(AppError::Validation)?;
            let ack = services::classes::create(api, &class).await?;
            output::success(&ack.message_or("class created"));
            print_list(api, &ListArgs::default()).await
        }
        ClassesCmd::Delete { id, yes } => {
            if !confirm(&format!("delete class {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::classes::delete(api, &id).await?;
            output::success(&ack.message_or("class deleted"));
            print_list(api, &ListArgs::default()).await
        }
        ClassesCmd::AddTeacher { id, teacher_id } => {
            let ack = services::classes::add_teacher(api, &id, teacher_id).await?;
            output::success(&ack.message_or("teacher assigned"));
            Ok(())
        }
        ClassesCmd::Roster { id, list } => print_roster(api, &id, &list).await,
        ClassesCmd::AddStudent { id, student_id } => {
            let ack = services::classes::add_student(api, &id, &student_id).await?;
            output::success(&ack.message_or("student added"));
            print_roster(api, &id, &ListArgs::default()).await
        }
        ClassesCmd::AddStudents { id, ids, file } => add_students(api, &id, ids, file).await,
        ClassesCmd::RemoveStudent { id, student_id } => {
            let ack = services::classes::remove_student(api, &id, &student_id).await?;
            output::success(&ack.message_or("student removed"));
            print_roster(api, &id, &ListArgs::default()).await
        }
        ClassesCmd::ClearStudents { id, yes } => {
            if !confirm(&format!("remove every student from class {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::classes::remove_all_students(api, &id).await?;
            output::success(&ack.message_or("roster cleared"));
            Ok(())
        }
        ClassesCmd::Assign(args) => assign(api, args).await,
        ClassesCmd::AssignTemplate(TemplateArgs { out }) => {
            write_csv_output(out.as_deref(), &roster::ENROLLMENTS.template())
        }
        ClassesCmd::Import(args) => import(api, args).await,
        ClassesCmd::Template(TemplateArgs { out }) => {
            write_csv_output(out.as_deref(), &roster::CLASSES.template())
        }
    }
}

/// Multi-class assignment from a Class Code / Student ID roster.
async fn assign(api: &ApiClient, args: ImportArgs) -> AppResult<()> {
    let text = read_roster_file(&args.file)?;
    let map = match roster::import::parse_enrollments(&text) {
        Ok(map) => map,
        Err(e) => {
            output::import_error(&e);
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let total: usize = map.values().map(Vec::len).sum();
    let mut preview = Table::new(["class", "students"]);
    for (class_id, student_ids) in &map {
        preview.row([class_id.clone(), student_ids.len().to_string()]);
    }
    output::notice(&format!(
        "{total} enrollments across {} classes ready to submit:",
        map.len()
    ));
    preview.print();

    if args.dry_run {
        output::notice("dry run - nothing submitted");
        return Ok(());
    }

    let request = crate::domain::classes::AssignStudentsRequest {
        class_student_map: map,
    };
    let ack = services::classes::assign_many(api, &request).await?;
    output::success(&ack.summary(total));
    Ok(())
}

/// Batch roster addition from explicit ids, a roster file, or both.
async fn add_students(
    api: &ApiClient,
    class_id: &str,
    mut ids: Vec<String>,
    file: Option<std::path::PathBuf>,
) -> AppResult<()> {
    if let Some(path) = file {
        let text = read_roster_file(&path)?;
        match roster::import::parse_class_roster(&text) {
            Ok(from_file) => ids.extend(from_file),
            Err(e) => {
                output::import_error(&e);
                return Err(AppError::BadRequest(e.to_string()));
            }
        }
    }

    ids.retain(|id| !id.trim().is_empty());
    ids.sort();
    ids.dedup();
    if ids.is_empty() {
        return Err(AppError::BadRequest(
            "no student ids given; pass --ids or --file".into(),
        ));
    }

    let submitted = ids.len();
    let ack = services::classes::add_students(api, class_id, ids).await?;
    output::success(&ack.summary(submitted));
    print_roster(api, class_id, &ListArgs::default()).await
}

async fn import(api: &ApiClient, args: ImportArgs) -> AppResult<()> {
    let text = read_roster_file(&args.file)?;
    let classes = match roster::import::parse_classes(&text) {
        Ok(classes) => classes,
        Err(e) => {
            output::import_error(&e);
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let mut preview = Table::new(["code", "subject", "grade", "semester"]);
    for class in classes.iter().take(IMPORT_PREVIEW_ROWS) {
        preview.row([
            class.id.clone(),
            class.subject_id.clone(),
            class.grade.to_string(),
            class.semester.clone(),
        ]);
    }
    output::notice(&format!("{} classes ready to import; preview:", classes.len()));
    preview.print();

    if args.dry_run {
        output::notice("dry run - nothing submitted");
        return Ok(());
    }

    let ack = services::classes::create_many(api, &classes).await?;
    output::success(&ack.summary(classes.len()));
    print_list(api, &ListArgs::default()).await
}

fn print_students(students: &[Student]) {
    let mut table = Table::new(["id", "name", "email", "homeroom"]);
    for student in students {
        table.row([
            student.id.clone(),
            student.name.clone(),
            student.email.clone(),
            student.base_class.clone(),
        ]);
    }
    table.print();
}

async fn print_roster(api: &ApiClient, class_id: &str, args: &ListArgs) -> AppResult<()> {
    let students = services::classes::students(api, class_id).await?;
    let filtered: Vec<_> = students
        .into_iter()
        .filter(|s| row_matches(&[&s.id, &s.name, &s.email], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no students in this class");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    print_students(&page.items);
    page_footer(&page.meta);
    Ok(())
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let classes = services::classes::list(api).await?;
    let filtered: Vec<_> = classes
        .into_iter()
        .filter(|c| row_matches(&[&c.id, &c.subject_id], args.search.as_deref()))
        .collect();

    if filtered.is_empty() {
        output::empty_state("no classes found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    let mut table = Table::new(["code", "subject", "grade", "semester"]);
    for class in &page.items {
        table.row([
            class.id.clone(),
            class.subject_id.clone(),
            class.grade.to_string(),
            class.semester.clone(),
        ]);
    }
    table.print();
    page_footer(&page.meta);
    Ok(())
}
