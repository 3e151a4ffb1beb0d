//! End-to-end checks of the roster import pipeline: template out, records in,
//! and whole-batch rejection on any failure.

use surveydesk::roster::{self, import, ImportError};

#[test]
fn every_template_reimports_cleanly() {
    let students = import::parse_students(&roster::STUDENTS.template()).unwrap();
    assert_eq!(students.len(), roster::STUDENTS.sample_rows.len());

    let teachers = import::parse_teachers(&roster::TEACHERS.template()).unwrap();
    assert_eq!(teachers.len(), roster::TEACHERS.sample_rows.len());

    let subjects = import::parse_subjects(&roster::SUBJECTS.template()).unwrap();
    assert_eq!(subjects.len(), roster::SUBJECTS.sample_rows.len());

    let classes = import::parse_classes(&roster::CLASSES.template()).unwrap();
    assert_eq!(classes.len(), roster::CLASSES.sample_rows.len());

    let ids = import::parse_class_roster(&roster::CLASS_ROSTER.template()).unwrap();
    assert_eq!(ids.len(), roster::CLASS_ROSTER.sample_rows.len());
}

#[test]
fn missing_required_column_rejects_the_file_up_front() {
    // Header lacks the Email column entirely; no row should be inspected.
    let text = "\
Student ID,Full Name,Homeroom Class
240327,Nguyen Van A,10A1
not-even-a-valid-row
";
    match import::parse_students(text).unwrap_err() {
        ImportError::MissingColumns(missing) => assert_eq!(missing, vec!["Email"]),
        other => panic!("expected missing-column rejection, got {other:?}"),
    }
}

#[test]
fn one_invalid_row_blocks_the_entire_batch() {
    let text = "\
Student ID,Email,Full Name,Homeroom Class
240327,student1@school.edu.vn,Nguyen Van A,10A1
240328,not-an-email,Tran Thi B,10A2
240329,student3@school.edu.vn,Le Van C,10A3
";
    match import::parse_students(text).unwrap_err() {
        ImportError::InvalidRows(rows) => {
            assert_eq!(rows.len(), 1);
            assert_eq!(rows[0].line, 3);
        }
        other => panic!("expected row rejection, got {other:?}"),
    }
}

#[test]
fn windows_line_endings_and_quoting_are_handled() {
    let text = "Student ID,Email,Full Name,Homeroom Class\r\n\
240327,student1@school.edu.vn,\"Nguyen, Van A\",10A1\r\n";
    let students = import::parse_students(text).unwrap();
    assert_eq!(students[0].name, "Nguyen, Van A");
}

#[test]
fn error_display_summarizes_without_submitting_language() {
    let text = "\
Student ID,Email,Full Name,Homeroom Class
,missing-everything,,
";
    let error = import::parse_students(text).unwrap_err();
    let message = error.to_string();
    assert!(message.contains("failed validation"));
    assert!(message.contains("nothing was submitted"));
}
