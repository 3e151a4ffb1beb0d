//! Survey campaign administration.

use crate::api::pagination::{paginate, PageRequest};
use crate::api::ApiClient;
use crate::cli::{CreateSurveyArgs, ListArgs, SurveysCmd, UpdateSurveyArgs};
use crate::domain::surveys::{ExtendSurveyRequest, NewSurvey, Survey, UpdateSurvey};
use crate::error::{AppError, AppResult};
use crate::output::{self, table::page_footer, Table};
use crate::services;

use super::{confirm, end_of_day, row_matches, start_of_day};

pub async fn run(api: &ApiClient, cmd: SurveysCmd) -> AppResult<()> {
    match cmd {
        SurveysCmd::List(args) => print_list(api, &args).await,
        SurveysCmd::Get { id } => {
            let survey = services::surveys::get(api, id).await?;
            print_detail(&survey);
            Ok(())
        }
        SurveysCmd::Create(args) => create(api, args).await,
        SurveysCmd::Update(args) => update(api, args).await,
        SurveysCmd::Delete { id, yes } => {
            if !confirm(&format!("delete survey {id}?"), yes)? {
                output::notice("cancelled");
                return Ok(());
            }
            let ack = services::surveys::delete(api, id).await?;
            output::success(&ack.message_or("survey deleted"));
            print_list(api, &ListArgs::default()).await
        }
        SurveysCmd::Active => {
            let surveys = services::surveys::active(api).await?;
            print_table(&surveys);
            Ok(())
        }
        SurveysCmd::BySubject { subject_id } => {
            let surveys = services::surveys::by_subject(api, &subject_id).await?;
            print_table(&surveys);
            Ok(())
        }
        SurveysCmd::ByDateRange { start, end } => {
            let surveys = services::surveys::by_date_range(api, start, end).await?;
            print_table(&surveys);
            Ok(())
        }
        SurveysCmd::Toggle { id } => {
            let ack = services::surveys::toggle_active(api, id).await?;
            output::success(&ack.message_or("survey status toggled"));
            print_list(api, &ListArgs::default()).await
        }
        SurveysCmd::Extend { id, end_date } => {
            let request = ExtendSurveyRequest {
                new_end_date: end_of_day(end_date),
            };
            let ack = services::surveys::extend(api, id, &request).await?;
            output::success(&ack.message_or("end date extended"));
            print_list(api, &ListArgs::default()).await
        }
    }
}

async fn create(api: &ApiClient, args: CreateSurveyArgs) -> AppResult<()> {
    let survey = NewSurvey {
        name: args.name,
        kind: args.kind.into(),
        subject_id: args.subject_id,
        grades: args.grades,
        form_url: args.form_url,
        sheet_url: args.sheet_url,
        start_date: start_of_day(args.start_date),
        end_date: end_of_day(args.end_date),
        is_active: !args.inactive,
    };
    survey.validate().map_err(AppError::Validation)?;
    let ack = services::surveys::create(api, &survey).await?;
    output::success(&ack.message_or("survey created"));
    print_list(api, &ListArgs::default()).await
}

async fn update(api: &ApiClient, args: UpdateSurveyArgs) -> AppResult<()> {
    let update = UpdateSurvey {
        name: args.name,
        subject_id: args.subject_id,
        grades: if args.grades.is_empty() {
            None
        } else {
            Some(args.grades)
        },
        form_url: args.form_url,
        sheet_url: args.sheet_url,
        start_date: args.start_date.map(start_of_day),
        end_date: args.end_date.map(end_of_day),
        is_active: args.active,
    };
    let ack = services::surveys::update(api, args.id, &update).await?;
    output::success(&ack.message_or("survey updated"));
    print_list(api, &ListArgs::default()).await
}

fn grades_cell(grades: &[u8]) -> String {
    grades
        .iter()
        .map(|g| g.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

fn print_table(surveys: &[Survey]) {
    if surveys.is_empty() {
        output::empty_state("no surveys found");
        return;
    }
    let mut table = Table::new(["id", "name", "kind", "subject", "grades", "window", "active"]);
    for survey in surveys {
        table.row([
            survey.id.to_string(),
            survey.name.clone(),
            survey.kind.label().to_string(),
            survey.subject_id.clone().unwrap_or_default(),
            grades_cell(&survey.grades),
            format!(
                "{} .. {}",
                survey.start_date.format("%Y-%m-%d"),
                survey.end_date.format("%Y-%m-%d")
            ),
            survey.is_active.to_string(),
        ]);
    }
    table.print();
}

fn print_detail(survey: &Survey) {
    let mut table = Table::new(["field", "value"]);
    table.row(["id", survey.id.to_string().as_str()]);
    table.row(["name", survey.name.as_str()]);
    table.row(["kind", survey.kind.label()]);
    table.row(["subject", survey.subject_id.as_deref().unwrap_or("-")]);
    table.row(["grades", grades_cell(&survey.grades).as_str()]);
    table.row(["form", survey.form_url.as_str()]);
    table.row(["sheet", survey.sheet_url.as_deref().unwrap_or("-")]);
    table.row(["starts", survey.start_date.format("%Y-%m-%d").to_string().as_str()]);
    table.row(["ends", survey.end_date.format("%Y-%m-%d").to_string().as_str()]);
    table.row(["active", survey.is_active.to_string().as_str()]);
    table.print();
}

async fn print_list(api: &ApiClient, args: &ListArgs) -> AppResult<()> {
    let surveys = services::surveys::list(api).await?;
    let filtered: Vec<_> = surveys
        .into_iter()
        .filter(|s| {
            row_matches(
                &[&s.name, s.subject_id.as_deref().unwrap_or("")],
                args.search.as_deref(),
            )
        })
        .collect();

    if filtered.is_empty() {
        output::empty_state("no surveys found");
        return Ok(());
    }

    let page = paginate(filtered, &PageRequest::new(args.page, args.per_page));
    print_table(&page.items);
    page_footer(&page.meta);
    Ok(())
}
