//! Command-line surface.
//!
//! Command groups mirror the portal's views: administration per entity, the
//! teacher homeroom monitor, and the student survey list. Dispatch gates each
//! group by the signed-in role.

use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::domain::auth::Role;
use crate::domain::surveys::SurveyKind;

#[derive(Debug, Parser)]
#[command(
    name = "surveydesk",
    version,
    about = "Administration and survey-distribution client for a school survey portal"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in with an identity-provider credential
    Login(LoginArgs),
    /// Sign out and clear the local session
    Logout,
    /// Show the signed-in account
    Whoami,
    /// Overview counts (admin)
    Dashboard,
    /// Manage departments (admin)
    #[command(subcommand)]
    Departments(DepartmentsCmd),
    /// Manage subjects (admin)
    #[command(subcommand)]
    Subjects(SubjectsCmd),
    /// Manage teachers (admin)
    #[command(subcommand)]
    Teachers(TeachersCmd),
    /// Manage class sections and rosters (admin)
    #[command(subcommand)]
    Classes(ClassesCmd),
    /// Manage students (admin)
    #[command(subcommand)]
    Students(StudentsCmd),
    /// Manage survey campaigns (admin)
    #[command(subcommand)]
    Surveys(SurveysCmd),
    /// Manage portal accounts (admin)
    #[command(subcommand)]
    Users(UsersCmd),
    /// Homeroom survey-completion monitor (teacher)
    Monitor(MonitorArgs),
    /// Your assigned surveys (student)
    #[command(subcommand)]
    MySurveys(MySurveysCmd),
}

#[derive(Debug, Args)]
pub struct LoginArgs {
    /// Credential issued by the identity provider. Read from stdin when
    /// omitted.
    #[arg(long)]
    pub credential: Option<String>,
}

/// Client-side search and paging shared by every list view.
#[derive(Debug, Args, Default)]
pub struct ListArgs {
    /// Case-insensitive substring filter
    #[arg(long)]
    pub search: Option<String>,
    /// Page number (1-indexed)
    #[arg(long)]
    pub page: Option<u32>,
    /// Rows per page
    #[arg(long)]
    pub per_page: Option<u32>,
}

#[derive(Debug, Subcommand)]
pub enum DepartmentsCmd {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: String,
    },
    Delete {
        id: i64,
        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },
    /// Teachers belonging to a department
    Teachers {
        id: i64,
    },
    /// Subjects belonging to a department
    Subjects {
        id: i64,
    },
}

#[derive(Debug, Subcommand)]
pub enum SubjectsCmd {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        /// Subject code, e.g. MATH
        #[arg(long)]
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        department_id: i64,
    },
    Update {
        id: String,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department_id: Option<i64>,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Class sections of a subject
    Classes {
        id: String,
    },
    /// Surveys scoped to a subject
    Surveys {
        id: String,
    },
    /// Bulk-create subjects from a CSV roster
    Import(ImportArgs),
    /// Write the import template
    Template(TemplateArgs),
}

#[derive(Debug, Subcommand)]
pub enum TeachersCmd {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        department_id: i64,
    },
    Update {
        id: i64,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        department_id: Option<i64>,
        #[arg(long)]
        base_class: Option<String>,
    },
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Class sections taught by a teacher
    Classes {
        id: i64,
    },
    /// Teachers of one department
    ByDepartment {
        department_id: i64,
    },
    /// Bulk-create teachers from a CSV roster
    Import(ImportArgs),
    /// Write the import template
    Template(TemplateArgs),
}

#[derive(Debug, Subcommand)]
pub enum ClassesCmd {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        /// Class code, e.g. 10A1-MATH
        #[arg(long)]
        id: String,
        #[arg(long)]
        subject_id: String,
        #[arg(long)]
        grade: u8,
        #[arg(long)]
        semester: String,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Assign the teaching teacher
    AddTeacher {
        id: String,
        #[arg(long)]
        teacher_id: i64,
    },
    /// List a class's roster
    Roster {
        id: String,
        #[command(flatten)]
        list: ListArgs,
    },
    /// Add one student to a class
    AddStudent {
        id: String,
        #[arg(long)]
        student_id: String,
    },
    /// Add many students: comma-separated ids or a one-column CSV roster
    AddStudents {
        id: String,
        /// Comma-separated student ids
        #[arg(long, value_delimiter = ',')]
        ids: Vec<String>,
        /// CSV roster with a "Student ID" column
        #[arg(long)]
        file: Option<PathBuf>,
    },
    /// Remove one student from a class
    RemoveStudent {
        id: String,
        #[arg(long)]
        student_id: String,
    },
    /// Assign students across several classes from a two-column CSV roster
    Assign(ImportArgs),
    /// Write the enrollment-assignment template
    AssignTemplate(TemplateArgs),
    /// Remove every student from a class
    ClearStudents {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Bulk-create classes from a CSV roster
    Import(ImportArgs),
    /// Write the import template
    Template(TemplateArgs),
}

#[derive(Debug, Subcommand)]
pub enum StudentsCmd {
    List(ListArgs),
    Get {
        id: String,
    },
    Create {
        /// School-issued student code
        #[arg(long)]
        id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        base_class: String,
    },
    Update {
        id: String,
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        base_class: Option<String>,
    },
    Delete {
        id: String,
        #[arg(long)]
        yes: bool,
    },
    /// Class sections a student is enrolled in
    Classes {
        id: String,
    },
    /// Bulk-create students from a CSV roster
    Import(ImportArgs),
    /// Export the current student list as CSV
    Export {
        /// Output file; stdout when omitted
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Write the import template
    Template(TemplateArgs),
}

#[derive(Debug, Subcommand)]
pub enum SurveysCmd {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create(CreateSurveyArgs),
    Update(UpdateSurveyArgs),
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
    /// Currently active surveys
    Active,
    /// Surveys scoped to a subject
    BySubject {
        subject_id: String,
    },
    /// Surveys overlapping a date range
    ByDateRange {
        #[arg(long)]
        start: NaiveDate,
        #[arg(long)]
        end: NaiveDate,
    },
    /// Flip a survey's active flag
    Toggle {
        id: i64,
    },
    /// Move a survey's end date
    Extend {
        id: i64,
        #[arg(long)]
        end_date: NaiveDate,
    },
}

#[derive(Debug, Args)]
pub struct CreateSurveyArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long, value_enum, default_value = "general")]
    pub kind: KindArg,
    /// Required when kind is subject
    #[arg(long)]
    pub subject_id: Option<String>,
    /// Target grade; repeatable
    #[arg(long = "grade")]
    pub grades: Vec<u8>,
    #[arg(long)]
    pub form_url: String,
    #[arg(long)]
    pub sheet_url: Option<String>,
    #[arg(long)]
    pub start_date: NaiveDate,
    #[arg(long)]
    pub end_date: NaiveDate,
    /// Create the survey paused instead of active
    #[arg(long)]
    pub inactive: bool,
}

#[derive(Debug, Args)]
pub struct UpdateSurveyArgs {
    pub id: i64,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub subject_id: Option<String>,
    #[arg(long = "grade")]
    pub grades: Vec<u8>,
    #[arg(long)]
    pub form_url: Option<String>,
    #[arg(long)]
    pub sheet_url: Option<String>,
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    #[arg(long)]
    pub active: Option<bool>,
}

#[derive(Debug, Subcommand)]
pub enum UsersCmd {
    List(ListArgs),
    Get {
        id: i64,
    },
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long, value_enum)]
        role: RoleArg,
        #[arg(long)]
        password: String,
    },
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        #[arg(long, value_enum)]
        role: Option<RoleArg>,
    },
    Delete {
        id: i64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Args)]
pub struct MonitorArgs {
    /// Keep refreshing on a fixed interval
    #[arg(long)]
    pub watch: bool,
    /// Refresh interval in seconds; defaults to the configured value
    #[arg(long)]
    pub interval: Option<u64>,
    /// Filter students by name
    #[arg(long)]
    pub search: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum MySurveysCmd {
    /// Pending and completed surveys
    List,
    /// Show one survey's detail and form link
    Open { id: i64 },
}

#[derive(Debug, Args)]
pub struct ImportArgs {
    /// CSV roster file
    pub file: PathBuf,
    /// Validate and preview without submitting
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    /// Output file; stdout when omitted
    #[arg(long)]
    pub out: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoleArg {
    Admin,
    Teacher,
    Parent,
    Student,
}

impl From<RoleArg> for Role {
    fn from(arg: RoleArg) -> Self {
        match arg {
            RoleArg::Admin => Role::Admin,
            RoleArg::Teacher => Role::Teacher,
            RoleArg::Parent => Role::Parent,
            RoleArg::Student => Role::Student,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    General,
    Subject,
}

impl From<KindArg> for SurveyKind {
    fn from(arg: KindArg) -> Self {
        match arg {
            KindArg::General => SurveyKind::General,
            KindArg::Subject => SurveyKind::SubjectSpecific,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_a_typical_admin_invocation() {
        let cli = Cli::try_parse_from([
            "surveydesk",
            "students",
            "list",
            "--search",
            "nguyen",
            "--page",
            "2",
        ])
        .unwrap();
        match cli.command {
            Command::Students(StudentsCmd::List(args)) => {
                assert_eq!(args.search.as_deref(), Some("nguyen"));
                assert_eq!(args.page, Some(2));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn parses_survey_creation_with_repeated_grades() {
        let cli = Cli::try_parse_from([
            "surveydesk",
            "surveys",
            "create",
            "--name",
            "Term feedback",
            "--kind",
            "subject",
            "--subject-id",
            "MATH",
            "--grade",
            "10",
            "--grade",
            "11",
            "--form-url",
            "https://forms.example.com/f/abc",
            "--start-date",
            "2025-01-06",
            "--end-date",
            "2025-01-20",
        ])
        .unwrap();
        match cli.command {
            Command::Surveys(SurveysCmd::Create(args)) => {
                assert_eq!(args.kind, KindArg::Subject);
                assert_eq!(args.grades, vec![10, 11]);
                assert!(!args.inactive);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
