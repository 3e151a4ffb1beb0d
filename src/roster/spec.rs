//! Per-entity roster layouts: human-readable headers mapped onto backend
//! field names, plus the fixed sample rows the downloadable templates carry.

use super::csv;

#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    pub field: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct RosterSpec {
    pub entity: &'static str,
    pub columns: &'static [Column],
    pub sample_rows: &'static [&'static [&'static str]],
}

impl RosterSpec {
    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.header).collect()
    }

    /// Backend field for a header cell, matched case-insensitively.
    pub fn field_for(&self, header: &str) -> Option<&'static str> {
        let header = header.trim();
        self.columns
            .iter()
            .find(|c| c.header.eq_ignore_ascii_case(header))
            .map(|c| c.field)
    }

    /// Template file contents: the header line plus the fixed sample rows.
    pub fn template(&self) -> String {
        let mut out = csv::to_line(self.headers());
        out.push('\n');
        for row in self.sample_rows {
            out.push_str(&csv::to_line(row.iter().copied()));
            out.push('\n');
        }
        out
    }
}

pub const STUDENTS: RosterSpec = RosterSpec {
    entity: "students",
    columns: &[
        Column {
            header: "Student ID",
            field: "id",
        },
        Column {
            header: "Email",
            field: "email",
        },
        Column {
            header: "Full Name",
            field: "name",
        },
        Column {
            header: "Homeroom Class",
            field: "base_class",
        },
    ],
    sample_rows: &[
        &["240327", "student1@school.edu.vn", "Nguyen Van A", "10A1"],
        &["240328", "student2@school.edu.vn", "Tran Thi B", "10A2"],
    ],
};

pub const TEACHERS: RosterSpec = RosterSpec {
    entity: "teachers",
    columns: &[
        Column {
            header: "Email",
            field: "email",
        },
        Column {
            header: "Full Name",
            field: "name",
        },
        Column {
            header: "Department ID",
            field: "department_id",
        },
    ],
    sample_rows: &[
        &["teacher1@school.edu.vn", "Le Van C", "1"],
        &["teacher2@school.edu.vn", "Pham Thi D", "2"],
    ],
};

pub const SUBJECTS: RosterSpec = RosterSpec {
    entity: "subjects",
    columns: &[
        Column {
            header: "Subject Code",
            field: "id",
        },
        Column {
            header: "Name",
            field: "name",
        },
        Column {
            header: "Department ID",
            field: "department_id",
        },
    ],
    sample_rows: &[&["MATH", "Mathematics", "1"], &["PHYS", "Physics", "2"]],
};

pub const CLASSES: RosterSpec = RosterSpec {
    entity: "classes",
    columns: &[
        Column {
            header: "Class Code",
            field: "id",
        },
        Column {
            header: "Subject Code",
            field: "subject_id",
        },
        Column {
            header: "Grade",
            field: "grade",
        },
        Column {
            header: "Semester",
            field: "semester",
        },
    ],
    sample_rows: &[&["10A1-MATH", "MATH", "10", "1"], &["11B2-PHYS", "PHYS", "11", "2"]],
};

/// Single-column roster used to add many students to one class.
pub const CLASS_ROSTER: RosterSpec = RosterSpec {
    entity: "class roster",
    columns: &[Column {
        header: "Student ID",
        field: "id",
    }],
    sample_rows: &[&["240327"], &["240328"]],
};

/// Two-column roster assigning students across several classes at once.
pub const ENROLLMENTS: RosterSpec = RosterSpec {
    entity: "enrollments",
    columns: &[
        Column {
            header: "Class Code",
            field: "class_id",
        },
        Column {
            header: "Student ID",
            field: "student_id",
        },
    ],
    sample_rows: &[
        &["10A1-MATH", "240327"],
        &["10A1-MATH", "240328"],
        &["11B2-PHYS", "240501"],
    ],
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_lookup_ignores_case_and_padding() {
        assert_eq!(STUDENTS.field_for("  student id "), Some("id"));
        assert_eq!(STUDENTS.field_for("EMAIL"), Some("email"));
        assert_eq!(STUDENTS.field_for("unknown"), None);
    }

    #[test]
    fn template_has_header_and_samples() {
        let template = STUDENTS.template();
        let lines: Vec<_> = template.lines().collect();
        assert_eq!(lines[0], "Student ID,Email,Full Name,Homeroom Class");
        assert_eq!(lines.len(), 1 + STUDENTS.sample_rows.len());
    }
}
