//! Portal API plumbing: the HTTP client wrapper, shared response envelopes,
//! and client-side pagination over in-memory lists.

pub mod client;
pub mod pagination;
pub mod response;

pub use client::ApiClient;
