//! Application-wide constants
//!
//! Constants are grouped by their purpose for better organization.

// =============================================================================
// RUNNER DEFAULTS
// =============================================================================

/// Default path of the benchmark executable
pub const DEFAULT_BINARY_PATH: &str = "build/binary_search_bench";

/// Default value for `--benchmark_min_time`
pub const DEFAULT_MIN_TIME: &str = "0.01s";

/// Default tracing filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "bench_summary=info";

/// Prefix of the transient result file
pub const RESULT_FILE_PREFIX: &str = "bench_summary_";

/// Suffix of the transient result file
pub const RESULT_FILE_SUFFIX: &str = ".json";

// =============================================================================
// BENCHMARK FLAGS
// =============================================================================

/// Flags understood by Google Benchmark executables
pub mod flags {
    pub const MIN_TIME: &str = "--benchmark_min_time";
    pub const OUT: &str = "--benchmark_out";
    pub const OUT_FORMAT: &str = "--benchmark_out_format";
    pub const FILTER: &str = "--benchmark_filter";

    pub const OUT_FORMAT_JSON: &str = "json";
}

// =============================================================================
// SUMMARY
// =============================================================================

/// Name suffixes of statistical aggregate entries
pub const AGGREGATE_SUFFIXES: [&str; 4] = ["_mean", "_median", "_stddev", "_cv"];

/// Minimum number of `/` separated segments in a per-case benchmark name
pub const MIN_NAME_SEGMENTS: usize = 3;

/// Nanoseconds per second
pub const NANOS_PER_SECOND: f64 = 1e9;

/// Marker printed for values that are undefined
pub const UNDEFINED_MARKER: &str = "n/a";

/// Table column labels, in output order
pub mod columns {
    pub const CONTAINER: &str = "Container";
    pub const ALGORITHM: &str = "Algorithm";
    pub const SIZE: &str = "Size";
    pub const NS_PER_ITER: &str = "ns/iter";
    pub const NS_PER_QUERY: &str = "ns/query";
    pub const ITEMS_PER_SECOND: &str = "items/s";
}
