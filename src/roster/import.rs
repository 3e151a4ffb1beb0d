//! Roster import: header mapping, type coercion, per-row validation.
//!
//! The whole file is rejected when a required column is missing (before any
//! row is read) or when any row fails validation (before any record is
//! submitted). Error messages carry 1-indexed line numbers so they can be
//! fixed in the spreadsheet that produced the file.

use std::collections::HashMap;

use super::csv;
use super::spec::RosterSpec;
use crate::domain::classes::NewClass;
use crate::domain::students::NewStudent;
use crate::domain::subjects::NewSubject;
use crate::domain::teachers::NewTeacher;
use crate::error::FieldError;

/// Validation messages for one rejected row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowErrors {
    pub line: usize,
    pub messages: Vec<String>,
}

#[derive(Debug, thiserror::Error)]
pub enum ImportError {
    #[error("the file has no data rows")]
    Empty,

    #[error("missing required columns: {}", .0.join(", "))]
    MissingColumns(Vec<&'static str>),

    #[error("{} row(s) failed validation; nothing was submitted", .0.len())]
    InvalidRows(Vec<RowErrors>),
}

/// One data row after header mapping. Values are trimmed.
#[derive(Debug)]
struct MappedRow {
    line: usize,
    values: HashMap<&'static str, String>,
}

impl MappedRow {
    fn value(&self, field: &'static str) -> String {
        self.values.get(field).cloned().unwrap_or_default()
    }
}

/// Map a roster file's rows onto backend fields.
///
/// The first non-empty line is the header; unknown columns are ignored, and
/// every required column must be present or the file is rejected outright.
fn map_rows(spec: &RosterSpec, text: &str) -> Result<Vec<MappedRow>, ImportError> {
    let lines = csv::lines(text);
    let Some(((_, header_line), data_lines)) = lines.split_first() else {
        return Err(ImportError::Empty);
    };

    let header_cells = csv::parse_record(header_line);
    let mut positions: HashMap<&'static str, usize> = HashMap::new();
    for (index, cell) in header_cells.iter().enumerate() {
        if let Some(field) = spec.field_for(cell) {
            positions.entry(field).or_insert(index);
        }
    }

    let missing: Vec<&'static str> = spec
        .columns
        .iter()
        .filter(|c| !positions.contains_key(c.field))
        .map(|c| c.header)
        .collect();
    if !missing.is_empty() {
        return Err(ImportError::MissingColumns(missing));
    }

    if data_lines.is_empty() {
        return Err(ImportError::Empty);
    }

    let rows = data_lines
        .iter()
        .map(|(line, raw)| {
            let cells = csv::parse_record(raw);
            let values = positions
                .iter()
                .map(|(field, index)| {
                    let cell = cells.get(*index).map(|c| c.trim()).unwrap_or_default();
                    (*field, cell.to_string())
                })
                .collect();
            MappedRow {
                line: *line,
                values,
            }
        })
        .collect();

    Ok(rows)
}

fn field_messages(errors: Vec<FieldError>) -> Vec<String> {
    errors.into_iter().map(|e| e.message).collect()
}

fn collect<T>(
    rows: Vec<MappedRow>,
    mut build: impl FnMut(&MappedRow) -> Result<T, Vec<String>>,
) -> Result<Vec<T>, ImportError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut failures = Vec::new();

    for row in &rows {
        match build(row) {
            Ok(record) => records.push(record),
            Err(messages) => failures.push(RowErrors {
                line: row.line,
                messages,
            }),
        }
    }

    if failures.is_empty() {
        Ok(records)
    } else {
        Err(ImportError::InvalidRows(failures))
    }
}

fn parse_i64(value: &str, what: &str) -> Result<i64, String> {
    value
        .parse()
        .map_err(|_| format!("{what} must be a number, got {value:?}"))
}

fn parse_grade(value: &str) -> Result<u8, String> {
    value
        .parse()
        .map_err(|_| format!("grade must be a number, got {value:?}"))
}

pub fn parse_students(text: &str) -> Result<Vec<NewStudent>, ImportError> {
    let rows = map_rows(&super::spec::STUDENTS, text)?;
    collect(rows, |row| {
        let student = NewStudent {
            id: row.value("id"),
            email: row.value("email"),
            name: row.value("name"),
            base_class: row.value("base_class"),
        };
        student.validate().map_err(field_messages)?;
        Ok(student)
    })
}

pub fn parse_teachers(text: &str) -> Result<Vec<NewTeacher>, ImportError> {
    let rows = map_rows(&super::spec::TEACHERS, text)?;
    collect(rows, |row| {
        let mut messages = Vec::new();
        let department_id = match parse_i64(&row.value("department_id"), "department id") {
            Ok(id) => id,
            Err(message) => {
                messages.push(message);
                0
            }
        };
        let teacher = NewTeacher {
            email: row.value("email"),
            name: row.value("name"),
            department_id,
        };
        if let Err(errors) = teacher.validate() {
            messages.extend(field_messages(errors));
        }
        if messages.is_empty() {
            Ok(teacher)
        } else {
            Err(messages)
        }
    })
}

pub fn parse_subjects(text: &str) -> Result<Vec<NewSubject>, ImportError> {
    let rows = map_rows(&super::spec::SUBJECTS, text)?;
    collect(rows, |row| {
        let mut messages = Vec::new();
        let department_id = match parse_i64(&row.value("department_id"), "department id") {
            Ok(id) => id,
            Err(message) => {
                messages.push(message);
                0
            }
        };
        let subject = NewSubject {
            id: row.value("id"),
            name: row.value("name"),
            department_id,
        };
        if let Err(errors) = subject.validate() {
            messages.extend(field_messages(errors));
        }
        if messages.is_empty() {
            Ok(subject)
        } else {
            Err(messages)
        }
    })
}

pub fn parse_classes(text: &str) -> Result<Vec<NewClass>, ImportError> {
    let rows = map_rows(&super::spec::CLASSES, text)?;
    collect(rows, |row| {
        let mut messages = Vec::new();
        let grade = match parse_grade(&row.value("grade")) {
            Ok(grade) => grade,
            Err(message) => {
                messages.push(message);
                0
            }
        };
        let class = NewClass {
            id: row.value("id"),
            subject_id: row.value("subject_id"),
            grade,
            semester: row.value("semester"),
        };
        if let Err(errors) = class.validate() {
            messages.extend(field_messages(errors));
        }
        if messages.is_empty() {
            Ok(class)
        } else {
            Err(messages)
        }
    })
}

/// Parse the two-column enrollment roster into class code -> student ids,
/// dropping repeated pairs the way the original sheet handler did.
pub fn parse_enrollments(
    text: &str,
) -> Result<std::collections::BTreeMap<String, Vec<String>>, ImportError> {
    let rows = map_rows(&super::spec::ENROLLMENTS, text)?;
    let pairs = collect(rows, |row| {
        let class_id = row.value("class_id");
        let student_id = row.value("student_id");
        let mut messages = Vec::new();
        if class_id.is_empty() {
            messages.push("class code is required".to_string());
        }
        if student_id.is_empty() {
            messages.push("student code is required".to_string());
        }
        if messages.is_empty() {
            Ok((class_id, student_id))
        } else {
            Err(messages)
        }
    })?;

    let mut map: std::collections::BTreeMap<String, Vec<String>> = std::collections::BTreeMap::new();
    for (class_id, student_id) in pairs {
        let students = map.entry(class_id).or_default();
        if !students.contains(&student_id) {
            students.push(student_id);
        }
    }
    Ok(map)
}

/// Parse the single-column roster used to add many students to one class.
pub fn parse_class_roster(text: &str) -> Result<Vec<String>, ImportError> {
    let rows = map_rows(&super::spec::CLASS_ROSTER, text)?;
    collect(rows, |row| {
        let id = row.value("id");
        if id.is_empty() {
            Err(vec!["student code is required".to_string()])
        } else {
            Ok(id)
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_STUDENTS: &str = "\
Student ID,Email,Full Name,Homeroom Class
240327,student1@school.edu.vn,Nguyen Van A,10A1
240328,student2@school.edu.vn,\"Tran, Thi B\",10A2
";

    #[test]
    fn parses_a_clean_student_file() {
        let students = parse_students(GOOD_STUDENTS).unwrap();
        assert_eq!(students.len(), 2);
        assert_eq!(students[0].id, "240327");
        assert_eq!(students[1].name, "Tran, Thi B");
    }

    #[test]
    fn missing_column_rejects_before_reading_rows() {
        let text = "Student ID,Full Name,Homeroom Class\n240327,A,10A1\n";
        match parse_students(text).unwrap_err() {
            ImportError::MissingColumns(missing) => assert_eq!(missing, vec!["Email"]),
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn any_bad_row_rejects_the_whole_batch() {
        let text = "\
Student ID,Email,Full Name,Homeroom Class
240327,student1@school.edu.vn,Nguyen Van A,10A1
,bad-email,,10A2
";
        match parse_students(text).unwrap_err() {
            ImportError::InvalidRows(rows) => {
                assert_eq!(rows.len(), 1);
                assert_eq!(rows[0].line, 3);
                assert!(rows[0]
                    .messages
                    .iter()
                    .any(|m| m.contains("invalid email format")));
                assert!(rows[0]
                    .messages
                    .iter()
                    .any(|m| m.contains("student code is required")));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn extra_and_reordered_columns_are_tolerated() {
        let text = "\
Email,Note,Student ID,Homeroom Class,Full Name
student1@school.edu.vn,ignored,240327,10A1,Nguyen Van A
";
        let students = parse_students(text).unwrap();
        assert_eq!(students[0].id, "240327");
        assert_eq!(students[0].base_class, "10A1");
    }

    #[test]
    fn teacher_import_coerces_department_id() {
        let text = "\
Email,Full Name,Department ID
teacher1@school.edu.vn,Le Van C,7
";
        let teachers = parse_teachers(text).unwrap();
        assert_eq!(teachers[0].department_id, 7);

        let text = "\
Email,Full Name,Department ID
teacher1@school.edu.vn,Le Van C,math
";
        match parse_teachers(text).unwrap_err() {
            ImportError::InvalidRows(rows) => {
                assert!(rows[0].messages[0].contains("must be a number"));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn class_import_checks_grade_range() {
        let text = "\
Class Code,Subject Code,Grade,Semester
10A1-MATH,MATH,13,1
";
        match parse_classes(text).unwrap_err() {
            ImportError::InvalidRows(rows) => {
                assert!(rows[0].messages.iter().any(|m| m.contains("10, 11 or 12")));
            }
            other => panic!("unexpected: {other:?}"),
        }
    }

    #[test]
    fn empty_file_is_rejected() {
        assert!(matches!(parse_students(""), Err(ImportError::Empty)));
        assert!(matches!(
            parse_students("Student ID,Email,Full Name,Homeroom Class\n"),
            Err(ImportError::Empty)
        ));
    }

    #[test]
    fn class_roster_returns_ids() {
        let text = "Student ID\n240327\n240328\n";
        assert_eq!(parse_class_roster(text).unwrap(), vec!["240327", "240328"]);
    }

    #[test]
    fn enrollments_group_by_class_and_drop_repeats() {
        let text = "\
Class Code,Student ID
10A1-MATH,240327
10A1-MATH,240328
10A1-MATH,240327
11B2-PHYS,240501
";
        let map = parse_enrollments(text).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["10A1-MATH"], vec!["240327", "240328"]);
        assert_eq!(map["11B2-PHYS"], vec!["240501"]);
    }

    #[test]
    fn enrollments_with_a_blank_cell_are_rejected() {
        let text = "\
Class Code,Student ID
10A1-MATH,240327
,240328
";
        match parse_enrollments(text).unwrap_err() {
            ImportError::InvalidRows(rows) => {
                assert_eq!(rows[0].line, 3);
                assert_eq!(rows[0].messages, vec!["class code is required"]);
            }
            other => panic!("unexpected: {other:?}"),
        }
    }
}
