//! Per-entity service modules
//!
//! Each module maps one-to-one onto a group of portal REST endpoints and
//! nothing else: no caching, no retries, no client-side business logic. The
//! commands layer composes these calls and renders whatever comes back.

pub mod auth;
pub mod classes;
pub mod departments;
pub mod students;
pub mod subjects;
pub mod surveys;
pub mod teachers;
pub mod users;
