//! Utility functions

pub mod time;
pub mod validation;

pub use time::{format_elapsed, parse_datetime};
pub use validation::{sanitize_string, validate_min_time};
