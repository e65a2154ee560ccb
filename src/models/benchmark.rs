//! Benchmark result models
//!
//! Mirrors the JSON document written by `--benchmark_out_format=json`.
//! Only the fields the summary needs are modelled; everything else in the
//! document is ignored.

use serde::{Deserialize, Serialize};

use crate::constants::NANOS_PER_SECOND;

/// Top-level benchmark output document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    /// Information about the machine and build that produced the results
    #[serde(default)]
    pub context: Option<BenchmarkContext>,
    /// Measured cases, in the order the executable reported them
    pub benchmarks: Vec<BenchmarkRecord>,
}

/// Run context reported by the executable
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BenchmarkContext {
    pub date: Option<String>,
    pub host_name: Option<String>,
    pub executable: Option<String>,
    pub num_cpus: Option<u32>,
    pub mhz_per_cpu: Option<u32>,
    pub library_build_type: Option<String>,
}

/// A single measured case
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// `Container/Algorithm/Size[/suffix...]`
    pub name: String,
    /// Wall clock time per iteration, in `time_unit`
    ///
    /// Absent on complexity fits (`_BigO`, `_RMS`).
    #[serde(default)]
    pub real_time: Option<f64>,
    /// Reported throughput, if the benchmark set items processed
    #[serde(default)]
    pub items_per_second: Option<f64>,
    #[serde(default)]
    pub time_unit: TimeUnit,
}

impl BenchmarkRecord {
    /// Wall clock time per iteration in nanoseconds
    pub fn real_time_ns(&self) -> Option<f64> {
        self.real_time.map(|t| t * self.time_unit.nanos())
    }
}

/// Unit of the reported times
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    #[default]
    Ns,
    Us,
    Ms,
    S,
}

impl TimeUnit {
    /// Number of nanoseconds in one unit
    pub fn nanos(self) -> f64 {
        match self {
            TimeUnit::Ns => 1.0,
            TimeUnit::Us => 1e3,
            TimeUnit::Ms => 1e6,
            TimeUnit::S => NANOS_PER_SECOND,
        }
    }
}
