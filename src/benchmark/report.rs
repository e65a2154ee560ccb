//! Summary rendering
//!
//! Fixed-width text table for terminals, or a JSON array of rows for
//! tooling that post-processes the summary.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::path::Path;

use crate::constants::{UNDEFINED_MARKER, columns};
use crate::models::SummaryRow;

/// Output format of the summary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

/// Header line of the summary table
pub fn header() -> String {
    format!(
        "{:<10} {:<18} {:>8} {:>12} {:>12} {:>15}",
        columns::CONTAINER,
        columns::ALGORITHM,
        columns::SIZE,
        columns::NS_PER_ITER,
        columns::NS_PER_QUERY,
        columns::ITEMS_PER_SECOND,
    )
}

/// Format an optional number, right-justified, with a fixed precision
fn format_optional(value: Option<f64>, width: usize, precision: usize) -> String {
    match value {
        Some(v) => format!("{:>width$.precision$}", v),
        None => format!("{:>width$}", UNDEFINED_MARKER),
    }
}

/// One data line of the summary table
pub fn format_row(row: &SummaryRow) -> String {
    format!(
        "{:<10} {:<18} {:>8} {:>12.2} {} {}",
        row.container,
        row.algorithm,
        row.size,
        row.total_time_ns,
        format_optional(row.per_item_time_ns, 12, 4),
        format_optional(row.items_per_second, 15, 2),
    )
}

/// Render the full table, header first, one line per row
pub fn render_table(rows: &[SummaryRow]) -> String {
    let mut out = header();
    out.push('\n');
    for row in rows {
        // Writing into a String cannot fail
        let _ = writeln!(out, "{}", format_row(row));
    }
    out
}

/// Render the rows as a pretty-printed JSON array
pub fn render_json(rows: &[SummaryRow]) -> serde_json::Result<String> {
    let mut out = serde_json::to_string_pretty(rows)?;
    out.push('\n');
    Ok(out)
}

/// Write the summary in the requested format
pub fn write_summary<W: Write>(
    writer: &mut W,
    rows: &[SummaryRow],
    format: OutputFormat,
) -> io::Result<()> {
    let rendered = match format {
        OutputFormat::Table => render_table(rows),
        OutputFormat::Json => render_json(rows)?,
    };
    writer.write_all(rendered.as_bytes())?;
    writer.flush()
}

/// Trailing line pointing at a kept results file
///
/// Only the table gets one; JSON output must stay a single document.
pub fn kept_json_notice(path: &Path, format: OutputFormat) -> Option<String> {
    match format {
        OutputFormat::Table => Some(format!("\nJSON results kept at: {}\n", path.display())),
        OutputFormat::Json => None,
    }
}

/// Print the summary to standard output
pub fn print_summary(rows: &[SummaryRow], format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_summary(&mut handle, rows, format)
}
