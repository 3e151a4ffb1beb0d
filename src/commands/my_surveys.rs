//! Student survey views: the assignment list and the per-survey detail.

use console::style;

use crate::api::ApiClient;
use crate::cli::MySurveysCmd;
use crate::domain::surveys::StudentSurvey;
use crate::error::{AppError, AppResult};
use crate::output::{self, Table};
use crate::services;

pub async fn run(api: &ApiClient, cmd: MySurveysCmd) -> AppResult<()> {
    match cmd {
        MySurveysCmd::List => list(api).await,
        MySurveysCmd::Open { id } => open(api, id).await,
    }
}

async fn list(api: &ApiClient) -> AppResult<()> {
    let assigned = services::surveys::for_student(api).await?;

    println!(
        "{} {} ({}, {})",
        style("student").bold(),
        assigned.student.name,
        assigned.student.base_class,
        assigned.student.email,
    );
    println!();

    let pending = assigned.pending();
    println!("{}", style(format!("to complete ({})", pending.len())).bold());
    section(&pending);

    let completed = assigned.completed();
    println!("{}", style(format!("completed ({})", completed.len())).bold());
    section(&completed);
    Ok(())
}

fn section(surveys: &[&StudentSurvey]) {
    if surveys.is_empty() {
        output::empty_state("nothing here");
        println!();
        return;
    }
    let mut table = Table::new(["id", "name", "kind", "subject", "window"]);
    for survey in surveys {
        table.row([
            survey.id.to_string(),
            survey.name.clone(),
            survey.kind.label().to_string(),
            survey.subject_name.clone().unwrap_or_default(),
            format!(
                "{} .. {}",
                survey.start_date.format("%d/%m/%Y"),
                survey.end_date.format("%d/%m/%Y")
            ),
        ]);
    }
    table.print();
    println!();
}

/// The detail view refetches the assignment list and picks the survey out of
/// it, so a survey that was never assigned to this student is simply not
/// found.
async fn open(api: &ApiClient, id: i64) -> AppResult<()> {
    let assigned = services::surveys::for_student(api).await?;
    let survey = assigned
        .surveys
        .iter()
        .find(|s| s.id == id)
        .ok_or_else(|| AppError::NotFound(format!("survey {id} is not assigned to you")))?;

    let mut table = Table::new(["field", "value"]);
    table.row(["name", survey.name.as_str()]);
    table.row(["kind", survey.kind.label()]);
    if let Some(subject) = &survey.subject_name {
        table.row(["subject", subject.as_str()]);
    }
    if let Some(class_id) = &survey.class_id {
        table.row(["class", class_id.as_str()]);
    }
    if let Some(semester) = &survey.semester {
        table.row(["semester", semester.as_str()]);
    }
    table.row([
        "window",
        format!(
            "{} .. {}",
            survey.start_date.format("%d/%m/%Y"),
            survey.end_date.format("%d/%m/%Y")
        )
        .as_str(),
    ]);
    table.row([
        "status",
        if survey.has_responded {
            "completed"
        } else {
            "pending"
        },
    ]);
    table.print();

    println!();
    if survey.has_responded {
        output::notice("you have already completed this survey");
    } else {
        println!("{} {}", style("open the form:").bold(), survey.form_url);
    }
    Ok(())
}
