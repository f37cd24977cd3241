use core::time::Duration;
use std::ffi::OsString;
use std::path::Path;

use crate::dataset::Dataset;
use crate::grid::Bounds;

use super::{Answer, CliError, Mode, Opts, Output, OutputKind, Report, Runner};

fn parse(args: &[&str]) -> Result<Opts, CliError> {
    Opts::parse_from(args.iter().map(OsString::from))
}

#[test]
fn test_defaults() {
    let opts = parse(&[]).unwrap();
    assert_eq!(opts.mode, Mode::Default);
    assert!(opts.sample());
    assert!(!opts.is_json());
    assert!(!opts.is_verbose());
    assert_eq!(opts.bounds(), Bounds::Row);
    assert_eq!(opts.path(), Path::new("inputs/d03.txt"));
}

#[test]
fn test_flags() {
    let opts = parse(&[
        "--json",
        "--verbose",
        "--legacy-bounds",
        "--no-sample",
        "--bench",
        "--count",
        "3",
        "--warmup",
        "0",
        "schematic.txt",
    ])
    .unwrap();

    assert_eq!(opts.mode, Mode::Bench);
    assert!(opts.is_json());
    assert!(opts.is_verbose());
    assert!(!opts.sample());
    assert_eq!(opts.bounds(), Bounds::FirstRow);
    assert_eq!(opts.count, Some(3));
    assert_eq!(opts.warmup, Some(0));
    assert_eq!(opts.time_limit, None);
    assert_eq!(opts.path(), Path::new("schematic.txt"));
}

#[test]
fn test_path_after_separator() {
    let opts = parse(&["--", "--weird-name.txt"]).unwrap();
    assert_eq!(opts.path(), Path::new("--weird-name.txt"));
}

#[test]
fn test_errors() {
    assert!(matches!(
        parse(&["--frobnicate"]),
        Err(CliError::UnsupportedArgument(arg)) if arg == "--frobnicate"
    ));

    assert!(matches!(
        parse(&["a.txt", "b.txt"]),
        Err(CliError::UnsupportedArgument(arg)) if arg == "b.txt"
    ));

    assert!(matches!(
        parse(&["--bench", "--bench"]),
        Err(CliError::DuplicateBench)
    ));

    assert!(matches!(
        parse(&["--count"]),
        Err(CliError::MissingValue("--count"))
    ));

    let error = parse(&["--time-limit", "soon"]).unwrap_err();
    assert!(matches!(
        error,
        CliError::BadValue {
            flag: "--time-limit",
            ..
        }
    ));
    assert_eq!(error.to_string(), "bad argument to `--time-limit`");
}

#[test]
fn test_report_from_samples() {
    let samples = (1..=100).rev().map(Duration::from_millis).collect();
    let report = Report::from_samples(samples);

    assert_eq!(report.count, 100);
    assert_eq!(report.min, Duration::from_millis(1));
    assert_eq!(report.max, Duration::from_millis(100));
    assert_eq!(report.avg, Duration::from_micros(50500));
    assert_eq!(report.p50, Duration::from_millis(51));
    assert_eq!(report.p95, Duration::from_millis(96));
    assert_eq!(report.p99, Duration::from_millis(100));

    assert_eq!(Report::from_samples(Vec::new()), Report::default());
}

#[test]
fn test_output_normal() {
    let mut o = Output::new(Vec::new(), OutputKind::Normal);

    o.answer(&Answer {
        dataset: "sample",
        sum: 4361,
        count: 8,
    })
    .unwrap();
    o.info("hello").unwrap();

    assert_eq!(String::from_utf8(o.into_inner()).unwrap(), "4361\ninfo: hello\n");
}

#[test]
fn test_output_json() {
    let mut o = Output::new(Vec::new(), OutputKind::Json);

    o.answer(&Answer {
        dataset: "sample",
        sum: 4361,
        count: 8,
    })
    .unwrap();
    o.error("oh no").unwrap();

    let out = String::from_utf8(o.into_inner()).unwrap();
    let mut lines = out.lines().map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap());

    assert_eq!(
        lines.next(),
        Some(serde_json::json!({
            "type": "answer",
            "data": {"dataset": "sample", "sum": 4361, "count": 8},
        }))
    );

    assert_eq!(
        lines.next(),
        Some(serde_json::json!({
            "type": "message",
            "data": {"kind": "error", "output": "oh no"},
        }))
    );

    assert_eq!(lines.next(), None);
}

#[test]
fn test_runner_sample() {
    let opts = parse(&[]).unwrap();
    let mut runner = Runner::new(&opts, Vec::new());
    runner.run(&Dataset::sample()).unwrap();
    assert_eq!(runner.into_inner(), b"4361\n");
}

#[test]
fn test_runner_mismatch() {
    let opts = parse(&[]).unwrap();
    let mut runner = Runner::new(&opts, Vec::new());
    let dataset = Dataset::new("bad", "1*").with_expected(2);

    let error = runner.run(&dataset).unwrap_err();
    assert_eq!(error.to_string(), "bad: 1 (value) != 2 (expected)");

    // The answer is still written before verification fails.
    assert_eq!(runner.into_inner(), b"1\n");
}

#[test]
fn test_runner_bench() {
    let opts = parse(&["--json", "--bench", "--warmup", "0", "--count", "4"]).unwrap();
    let mut runner = Runner::new(&opts, Vec::new());
    runner.run(&Dataset::sample()).unwrap();
    runner.total().unwrap();

    let out = String::from_utf8(runner.into_inner()).unwrap();
    let lines = out
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap())
        .collect::<Vec<_>>();

    let reports = lines
        .iter()
        .filter(|line| line["type"] == "report")
        .collect::<Vec<_>>();

    assert_eq!(reports.len(), 2);
    assert_eq!(reports[0]["data"]["dataset"], "sample");
    assert_eq!(reports[0]["data"]["count"], 4);
    assert_eq!(reports[1]["data"]["dataset"], "total");
    assert_eq!(reports[1]["data"]["count"], 4);
}

#[test]
fn test_runner_sum_overflow() {
    let opts = parse(&[]).unwrap();
    let mut runner = Runner::new(&opts, Vec::new());
    let dataset = Dataset::new("huge", "18446744073709551615*\n1*");

    let error = runner.run(&dataset).unwrap_err();
    assert_eq!(
        error.to_string(),
        "huge: sum of part numbers overflows at 1 at 1:0..1"
    );
    assert!(runner.into_inner().is_empty());
}

#[test]
fn test_logger_error_message() {
    // Only the first logger is accepted, and the max level stays off.
    let _ = log::set_logger(&super::STDOUT_LOGGER);
    let error = log::set_logger(&super::STDOUT_LOGGER).map_err(CliError::Logger);

    let Err(error) = error else {
        panic!("expected second logger to be rejected");
    };

    assert!(error.to_string().starts_with("failed to set log: "), "{error}");
}
