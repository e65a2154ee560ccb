//! Business logic services

pub mod summary_service;

pub use summary_service::{Summary, SummaryService};
