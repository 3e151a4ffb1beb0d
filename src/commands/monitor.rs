//! Homeroom survey-completion monitor.
//!
//! One row per student, one column for the general survey plus one per
//! subject-specific survey. `--watch` refetches on a fixed interval; each
//! fetch is awaited before the next tick, which is all the overlap control
//! the view needs.

use chrono::Utc;
use console::style;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

use crate::api::ApiClient;
use crate::cli::MonitorArgs;
use crate::config::Settings;
use crate::domain::teachers::{HomeroomReport, SurveyCompletion};
use crate::error::AppResult;
use crate::output::{self, Table};
use crate::services;

pub async fn run(api: &ApiClient, settings: &Settings, args: MonitorArgs) -> AppResult<()> {
    if !args.watch {
        return refresh(api, &args).await;
    }

    let poll_seconds = args.interval.unwrap_or(settings.monitor_poll_seconds).max(1);
    output::notice(&format!("refreshing every {poll_seconds}s; ctrl-c to stop"));

    let mut ticker = tokio::time::interval(Duration::from_secs(poll_seconds));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        // Keep watching through transient failures; the next tick retries the
        // fetch because the user asked for a live view, not because the
        // client retries requests.
        if let Err(e) = refresh(api, &args).await {
            output::error_banner(&e);
            if e.is_login_required() {
                return Err(e);
            }
        }
    }
}

async fn refresh(api: &ApiClient, args: &MonitorArgs) -> AppResult<()> {
    let report = services::teachers::homeroom_report(api).await?;
    render(&report, args.search.as_deref());
    Ok(())
}

fn completion_cell(survey: Option<&SurveyCompletion>) -> String {
    match survey {
        Some(s) if s.has_responded => style("done").green().to_string(),
        Some(_) => style("pending").red().to_string(),
        None => String::new(),
    }
}

fn render(report: &HomeroomReport, search: Option<&str>) {
    println!(
        "{} {}  {} {}  {} {}  {}",
        style("homeroom").bold(),
        report.base_class,
        style("teacher").bold(),
        report.teacher_name,
        style("year").bold(),
        report.academic_year,
        style(format!("{} students", report.student_count)).dim(),
    );
    println!("{}", style(format!("as of {}", Utc::now().format("%H:%M:%S"))).dim());

    let subjects = report.subject_names();
    let mut headers = vec!["#".to_string(), "name".to_string(), "email".to_string()];
    headers.push("general".to_string());
    headers.extend(subjects.iter().cloned());

    let mut table = Table::new(headers);
    let mut shown = 0usize;
    for (index, status) in report.students.iter().enumerate() {
        if let Some(needle) = search {
            if !super::contains_ci(&status.student.name, needle) {
                continue;
            }
        }
        shown += 1;

        let mut cells = vec![
            (index + 1).to_string(),
            status.student.name.clone(),
            status.student.email.clone(),
        ];
        cells.push(completion_cell(status.general_survey()));
        for subject in &subjects {
            cells.push(completion_cell(status.subject_survey(subject)));
        }
        table.row(cells);
    }

    if shown == 0 {
        output::empty_state("no students match");
    } else {
        table.print();
    }
    println!();
}
