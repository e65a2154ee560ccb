//! Domain models
//!
//! Input records as reported by the benchmark executable and the rows
//! derived from them.

pub mod benchmark;
pub mod summary;

pub use benchmark::*;
pub use summary::*;
