//! surveydesk - administration and survey-distribution client for a school
//! survey portal.
//!
//! The portal backend owns all persistence and business logic; this crate is
//! the terminal client: it authenticates against the identity-check endpoint,
//! keeps the issued bearer token in a local session file, and maps commands
//! one-to-one onto the portal's REST endpoints.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod output;
pub mod roster;
pub mod services;
pub mod session;
