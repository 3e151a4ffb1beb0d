//! Admin overview: counts pulled from the list endpoints.

use crate::api::ApiClient;
use crate::error::AppResult;
use crate::output::Table;
use crate::services;

pub async fn run(api: &ApiClient) -> AppResult<()> {
    let departments = services::departments::list(api).await?;
    let teachers = services::teachers::list(api).await?;
    let classes = services::classes::list(api).await?;
    let active_surveys = services::surveys::active(api).await?;

    let mut table = Table::new(["metric", "count"]);
    table.row(["departments", departments.len().to_string().as_str()]);
    table.row(["teachers", teachers.len().to_string().as_str()]);
    table.row(["classes", classes.len().to_string().as_str()]);
    table.row(["active surveys", active_surveys.len().to_string().as_str()]);
    table.print();
    Ok(())
}
