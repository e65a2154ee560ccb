//! Shared helpers for integration tests

#![allow(dead_code)]

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};

use bench_summary::Config;
use bench_summary::config::Cli;
use clap::Parser;

pub const SAMPLE_REPORT: &str = r#"{
  "context": {
    "date": "2024-01-15T12:00:00+01:00",
    "host_name": "bench-01",
    "executable": "build/binary_search_bench",
    "num_cpus": 8,
    "mhz_per_cpu": 3200,
    "library_build_type": "release"
  },
  "benchmarks": [
    {"name": "Vector/Linear/1024", "run_type": "iteration", "real_time": 310.0, "time_unit": "ns", "items_per_second": 3.2e6},
    {"name": "Vector/Binary/1024", "run_type": "iteration", "real_time": 12.5, "time_unit": "ns", "items_per_second": 8e7},
    {"name": "Vector/Binary/1024_mean", "run_type": "aggregate", "real_time": 12.0, "time_unit": "ns"},
    {"name": "Vector/Binary/64", "run_type": "iteration", "real_time": 4.0, "time_unit": "ns", "items_per_second": 2.5e8},
    {"name": "BadName", "real_time": 1.0},
    {"name": "Set/Linear/abc", "real_time": 5.0},
    {"name": "Vector/Binary_BigO", "run_type": "aggregate", "cpu_coefficient": 1.2, "real_coefficient": 1.3, "big_o": "lgN", "time_unit": "ns"},
    {"name": "Vector/Binary_RMS", "run_type": "aggregate", "rms": 0.05}
  ]
}"#;

/// Write an executable shell script standing in for a benchmark binary
///
/// The script records its arguments and output path next to itself, writes
/// `report` to the `--benchmark_out` path and exits with `exit_code`.
pub fn fake_benchmark(dir: &Path, report: &str, exit_code: i32) -> PathBuf {
    let report_path = dir.join("report.json");
    fs::write(&report_path, report).unwrap();

    let script = format!(
        r#"#!/bin/sh
out=""
for arg in "$@"; do
  case "$arg" in
    --benchmark_out=*) out="${{arg#--benchmark_out=}}" ;;
  esac
done
echo "$@" > "{dir}/args.txt"
printf '%s' "$out" > "{dir}/out_path.txt"
cat "{report}" > "$out"
exit {exit_code}
"#,
        dir = dir.display(),
        report = report_path.display(),
        exit_code = exit_code,
    );

    let path = dir.join("fake_bench");
    fs::write(&path, script).unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    path
}

/// Clear the executable bits so launching the file fails
pub fn make_non_executable(path: &Path) {
    fs::set_permissions(path, fs::Permissions::from_mode(0o644)).unwrap();
}

/// Entries left in a scratch directory
pub fn leftover_files(dir: &Path) -> Vec<PathBuf> {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect()
}

/// Arguments the fake benchmark was invoked with
pub fn recorded_args(dir: &Path) -> String {
    fs::read_to_string(dir.join("args.txt")).unwrap()
}

/// Output path the fake benchmark was asked to write
pub fn recorded_out_path(dir: &Path) -> PathBuf {
    PathBuf::from(fs::read_to_string(dir.join("out_path.txt")).unwrap())
}

/// Build a configuration the way the command line would
pub fn config(args: &[&str]) -> Config {
    let mut argv = vec!["bench-summary"];
    argv.extend_from_slice(args);
    Config::from_cli(Cli::try_parse_from(argv).unwrap())
}
