//! Result summarization
//!
//! Turns raw benchmark records into sorted summary rows:
//! filter → parse → derive timing → order.

use crate::constants::{AGGREGATE_SUFFIXES, MIN_NAME_SEGMENTS, NANOS_PER_SECOND};
use crate::models::{BenchmarkRecord, Size, SummaryRow};

/// Why a record did not produce a summary row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Statistical aggregate (`_mean`, `_median`, ...)
    Aggregate,
    /// Fewer than three name segments
    Malformed,
    /// No `real_time` reported
    MissingTime,
}

/// Whether the record name denotes a statistical aggregate
pub fn is_aggregate(name: &str) -> bool {
    AGGREGATE_SUFFIXES
        .iter()
        .any(|suffix| name.ends_with(suffix))
}

/// Time per item derived from a throughput figure
///
/// Missing or zero throughput leaves the value undefined.
pub fn per_item_time_ns(items_per_second: Option<f64>) -> Option<f64> {
    items_per_second
        .filter(|ips| *ips != 0.0)
        .map(|ips| NANOS_PER_SECOND / ips)
}

/// Convert one record into a summary row
pub fn parse_record(record: &BenchmarkRecord) -> Result<SummaryRow, SkipReason> {
    if is_aggregate(&record.name) {
        return Err(SkipReason::Aggregate);
    }

    let parts: Vec<&str> = record.name.split('/').collect();
    if parts.len() < MIN_NAME_SEGMENTS {
        return Err(SkipReason::Malformed);
    }

    let total_time_ns = record.real_time_ns().ok_or(SkipReason::MissingTime)?;

    Ok(SummaryRow {
        container: parts[0].to_string(),
        algorithm: parts[1].to_string(),
        size: Size::parse(parts[2]),
        total_time_ns,
        per_item_time_ns: per_item_time_ns(record.items_per_second),
        items_per_second: record.items_per_second,
    })
}

/// Keep per-case records and parse them into rows, preserving input order
pub fn filter_and_parse(records: &[BenchmarkRecord]) -> Vec<SummaryRow> {
    records
        .iter()
        .filter_map(|record| match parse_record(record) {
            Ok(row) => Some(row),
            Err(reason) => {
                tracing::debug!(name = %record.name, ?reason, "Skipping benchmark record");
                None
            }
        })
        .collect()
}

/// Sort rows by container, algorithm, size
pub fn order(rows: &mut [SummaryRow]) {
    rows.sort_unstable_by(|a, b| a.key().cmp(&b.key()));
}

/// Full summary pipeline
pub fn summarize(records: &[BenchmarkRecord]) -> Vec<SummaryRow> {
    let mut rows = filter_and_parse(records);
    order(&mut rows);

    let sizes_are_mixed =
        rows.iter().any(|r| r.size.is_count()) && rows.iter().any(|r| !r.size.is_count());
    if sizes_are_mixed {
        tracing::warn!("Benchmark sizes mix numbers and labels; numeric sizes are listed first");
    }

    tracing::debug!(
        records = records.len(),
        rows = rows.len(),
        "Summarized benchmark results"
    );
    rows
}
