//! Bulk import/export over CSV rosters.
//!
//! A deliberately thin pipeline: read rows, map human-readable headers onto
//! backend field names, coerce the two numeric fields, collect per-row
//! validation messages, and refuse the whole batch when anything fails.
//! Nothing is submitted until every row is clean.

pub mod csv;
pub mod import;
pub mod spec;

pub use import::{ImportError, RowErrors};
pub use spec::{RosterSpec, CLASSES, CLASS_ROSTER, ENROLLMENTS, STUDENTS, SUBJECTS, TEACHERS};
