//! Terminal rendering: tables, status lines, and the error banner.

pub mod table;

use console::style;

use crate::error::AppError;
use crate::roster::ImportError;

pub use table::Table;

pub fn success(message: &str) {
    println!("{} {message}", style("ok").green().bold());
}

pub fn notice(message: &str) {
    println!("{} {message}", style("--").dim());
}

pub fn empty_state(message: &str) {
    println!("{}", style(message).dim());
}

/// The dismissible-banner analog: everything goes to stderr so tables stay
/// pipeable.
pub fn error_banner(error: &AppError) {
    match error {
        AppError::Validation(fields) => {
            eprintln!("{}", style("validation failed:").red().bold());
            for field in fields {
                eprintln!("  {} {}", style(field.field).yellow(), field.message);
            }
        }
        AppError::Unauthorized(message) => {
            eprintln!("{} {message}", style("error:").red().bold());
            eprintln!("{}", style("sign in with `surveydesk login`").dim());
        }
        other => {
            eprintln!("{} {other}", style("error:").red().bold());
        }
    }
}

/// Per-row import failures, shown in full before anything is submitted.
pub fn import_error(error: &ImportError) {
    match error {
        ImportError::InvalidRows(rows) => {
            eprintln!("{}", style("import rejected:").red().bold());
            for row in rows {
                eprintln!(
                    "  {} {}",
                    style(format!("row {}:", row.line)).yellow(),
                    row.messages.join(", ")
                );
            }
        }
        other => {
            eprintln!("{} {other}", style("import rejected:").red().bold());
        }
    }
}
