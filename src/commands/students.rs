//! Student administration views, including bulk import/export.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{ImportArgs, ListArgs, StudentsCmd, TemplateArgs};
use crate::domain::students::{NewStudent, Student, UpdateStudent};
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::roster::{self, csv};
use crate::services;

use super::{confirm, read_roster_file, row_matches, write_csv_output, IMPORT_PREVIEW_ROWS};

pub async fn run(api: &ApiClient, cmd: StudentsCmd) -> AppResult<()> {
    match cmd {
        StudentsCmd::List(args) => print_list(api, &args).await,
        StudentsCmd::Get { id } => {
            let student = services::students::get(api, &id).await?;
            print_students(&[student]);
            Ok(())
        }
        StudentsCmd::Create {
            id,
            email,
            name,
            base_class,
        } => {
            let student = NewStudent {
                id,
                email,
                name,
                base_class,
            };
            student.validate().map_err(AppError::Validation)?;
            let ack = services::students::create(api, &student).await?;
            output::success(&ack.message_or("student created"));
            print_list(api, &ListArgs::default()).await
        }
        StudentsCmd::Update {
            id,
            email,
            name,
            base_class,
        } => {
            let update = UpdateStudent {
                email,
                name,
                base_class,
            };
            let ack = services::students::update(api, &id, &update).await?;
            output::success(&ack.message_or("student updated"));
            print_list(api, &ListArgs::default()).await
        }
        StudentsCmd::Delete { id, yes } => {
            if !confirm(&format!("delete student {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::students::delete(api, &id).await?;
            output::success(&ack.message_or("student deleted"));
            print_list(api, &ListArgs::default()).await
        }
        StudentsCmd::Classes { id } => {
            let classes = services::students::classes(api, &id).await?;
            if classes.is_empty() {
                output::empty_state("this student is not enrolled in any class section");
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
        StudentsCmd::Import(args) => import(api, args).await,
        StudentsCmd::Export { out } => {
            let students = services::students::list(api).await?;
            write_csv_output(out.as_deref(), &export_csv(&students))
        }
        StudentsCmd::Template(TemplateArgs { out }) => {
            write_csv_output(out.as_deref(), &roster::STUDENTS.template())
        }
    }
}

async fn import(api: &ApiClient, args: ImportArgs) -> AppResult<()> {
    let text = read_roster_file(&args.file)?;
    let students = match roster::import::parse_students(&text) {
        Ok(students) => students,
        Err(e) => {
            output::import_error(&e);
            return Err(AppError::BadRequest(e.to_string()));
        }
    };

    let mut preview = Table::new(["id", "email", "name", "homeroom"]);
    for student in students.iter().take(IMPORT_PREVIEW_ROWS) {
        preview.row([
            student.id.clone(),
            student.email.clone(),
            student.name.clone(),
            student.base_class.clone(),
        ]);
    }
    output::notice(&format!("{} students ready to import; preview:", students.len()));
    preview.print();

    if args.dry_run {
        output::notice("dry run - nothing submitted");
        return Ok(());
    }

    let ack = services::students::create_many(api, &students).await?;
    output::success(&ack.summary(students.len()));
    print_list(api, &ListArgs::default()).await
}

/// Current student list in the same layout the import template uses.
fn export_csv(students: &[Student]) -> String {
    let mut out = csv::to_line(roster::STUDENTS.headers());
    out.push('\n');
    for student in students {
        out.push_str(&csv::to_line([
            student.id.as_str(),
            student.email.as_str(),
            student.name.as_str(),
            student.base_class.as_str(),
        ]));
        out.push('\n');
    }
    out
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

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let students = services::students::list(api).await?;
    let filtered: Vec<_> = students
        .into_iter()
        .filter(|s| {
            row_matches(
                &[&s.id, &s.name, &s.email, &s.base_class],
                args.search.as_deref(),
            )
        })
        .collect();

    if filtered.is_empty() {
        output::empty_state("no students found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    print_students(&page.items);
    page_footer(&page.meta);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn export_round_trips_through_import() {
        let students = vec![
            Student {
                id: "240327".into(),
                email: "student1@school.edu.vn".into(),
                name: "Nguyen, Van A".into(),
                base_class: "10A1".into(),
            },
            Student {
                id: "240328".into(),
                email: "student2@school.edu.vn".into(),
                name: "Tran Thi B".into(),
                base_class: "10A2".into(),
            },
        ];
        let exported = export_csv(&students);
        let reimported = roster::import::parse_students(&exported).unwrap();
        assert_eq!(reimported.len(), 2);
        assert_eq!(reimported[0].name, "Nguyen, Van A");
        assert_eq!(reimported[1].base_class, "10A2");
    }
}
