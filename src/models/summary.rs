//! Summary table models

use std::fmt;

use serde::Serialize;

/// Input size segment of a benchmark name
///
/// Sizes that parse as integers compare numerically. Anything else is kept
/// verbatim and compares as a string. When both kinds appear in one result
/// set, every numeric size orders before every label.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(untagged)]
pub enum Size {
    Count(i64),
    Label(String),
}

impl Size {
    /// Parse a name segment, falling back to the raw text
    ///
    /// Surrounding whitespace is ignored for the numeric parse.
    pub fn parse(segment: &str) -> Self {
        segment
            .trim()
            .parse::<i64>()
            .map(Size::Count)
            .unwrap_or_else(|_| Size::Label(segment.to_string()))
    }

    pub fn is_count(&self) -> bool {
        matches!(self, Size::Count(_))
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Delegate so width and alignment flags apply
        match self {
            Size::Count(n) => fmt::Display::fmt(n, f),
            Size::Label(s) => fmt::Display::fmt(s.as_str(), f),
        }
    }
}

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryRow {
    pub container: String,
    pub algorithm: String,
    pub size: Size,
    /// Time per benchmark iteration
    pub total_time_ns: f64,
    /// Time per processed item, undefined without a usable throughput
    pub per_item_time_ns: Option<f64>,
    pub items_per_second: Option<f64>,
}

impl SummaryRow {
    /// Sort key: container, algorithm, size
    pub fn key(&self) -> (&str, &str, &Size) {
        (&self.container, &self.algorithm, &self.size)
    }
}
