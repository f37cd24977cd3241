//! CLI helpers.

mod bencher;
mod error;
mod output;
mod runner;
mod stdout_logger;

#[cfg(test)]
mod tests;

use core::fmt;
use core::ops::AddAssign;
use core::time::Duration;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::grid::Bounds;

pub use self::bencher::Bencher;
pub use self::error::CliError;
pub use self::output::{Answer, Output, OutputKind};
pub use self::runner::Runner;

static STDOUT_LOGGER: stdout_logger::StdoutLogger = stdout_logger::StdoutLogger;

/// Input file used when no path is given.
pub const DEFAULT_PATH: &str = "inputs/d03.txt";

/// Run mode.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Default run mode.
    #[default]
    Default,
    /// Run as benchmark.
    Bench,
}

/// Input options.
#[derive(Debug, Clone)]
pub struct Opts {
    /// Run as a benchmark.
    pub mode: Mode,
    /// Run in verbose mode.
    verbose: bool,
    /// Output JSON lines.
    json: bool,
    /// Bound every row by the width of the first one.
    legacy_bounds: bool,
    /// Scan the built-in sample before the input file.
    sample: bool,
    /// Warmup period.
    warmup: Option<u64>,
    /// Bench period.
    time_limit: Option<u64>,
    /// Number of times to run benches.
    count: Option<usize>,
    /// Input file to scan.
    path: PathBuf,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            mode: Mode::Default,
            verbose: false,
            json: false,
            legacy_bounds: false,
            sample: true,
            warmup: None,
            time_limit: None,
            count: None,
            path: PathBuf::from(DEFAULT_PATH),
        }
    }
}

impl Opts {
    /// Parse CLI options from the environment and set up logging.
    pub fn parse() -> Result<Self, CliError> {
        let opts = Self::parse_from(std::env::args_os().skip(1))?;

        if !opts.json {
            let level = if opts.verbose {
                log::LevelFilter::Debug
            } else {
                log::LevelFilter::Info
            };

            log::set_max_level(level);
            log::set_logger(&STDOUT_LOGGER).map_err(CliError::Logger)?;
        }

        Ok(opts)
    }

    /// Parse CLI options from the given arguments, excluding the program
    /// name.
    pub fn parse_from<I>(args: I) -> Result<Self, CliError>
    where
        I: IntoIterator<Item = OsString>,
    {
        let mut opts = Self::default();
        let mut path = None;
        let mut it = args.into_iter();

        while let Some(arg) = it.next() {
            let Some(arg) = arg.to_str() else {
                return Err(CliError::NonUtf8Argument);
            };

            match arg {
                "--bench" => {
                    if !matches!(opts.mode, Mode::Default) {
                        return Err(CliError::DuplicateBench);
                    }

                    opts.mode = Mode::Bench;
                }
                "--verbose" => {
                    opts.verbose = true;
                }
                "--json" => {
                    opts.json = true;
                }
                "--legacy-bounds" => {
                    opts.legacy_bounds = true;
                }
                "--no-sample" => {
                    opts.sample = false;
                }
                "--warmup" => {
                    opts.warmup = Some(value(&mut it, "--warmup")?);
                }
                "--time-limit" => {
                    opts.time_limit = Some(value(&mut it, "--time-limit")?);
                }
                "--count" => {
                    opts.count = Some(value(&mut it, "--count")?);
                }
                "--" => {
                    break;
                }
                other if other.starts_with('-') => {
                    return Err(CliError::UnsupportedArgument(other.to_owned()));
                }
                other => {
                    set_path(&mut path, other.into())?;
                }
            }
        }

        for arg in it {
            set_path(&mut path, arg)?;
        }

        if let Some(path) = path {
            opts.path = PathBuf::from(path);
        }

        return Ok(opts);

        fn set_path(path: &mut Option<OsString>, arg: OsString) -> Result<(), CliError> {
            if path.is_some() {
                return Err(CliError::UnsupportedArgument(
                    arg.to_string_lossy().into_owned(),
                ));
            }

            *path = Some(arg);
            Ok(())
        }
    }

    /// Test if JSON output is enabled.
    #[inline]
    pub fn is_json(&self) -> bool {
        self.json
    }

    /// Test if options are verbose.
    #[inline]
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Test if the built-in sample should be scanned.
    #[inline]
    pub fn sample(&self) -> bool {
        self.sample
    }

    /// The input file to scan.
    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The bounds policy to build grids with.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        if self.legacy_bounds {
            Bounds::FirstRow
        } else {
            Bounds::Row
        }
    }
}

/// Parse the numerical value of a flag.
fn value<I, T>(it: &mut I, flag: &'static str) -> Result<T, CliError>
where
    I: Iterator<Item = OsString>,
    T: core::str::FromStr<Err = core::num::ParseIntError>,
{
    let value = it.next().ok_or(CliError::MissingValue(flag))?;
    let value = value.to_str().ok_or(CliError::NonUtf8Argument)?;

    value
        .parse()
        .map_err(|error| CliError::BadValue { flag, error })
}

/// Timing report from a benchmark.
#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub count: usize,
    pub min: Duration,
    pub max: Duration,
    pub avg: Duration,
    pub p50: Duration,
    pub p95: Duration,
    pub p99: Duration,
}

impl Report {
    /// Construct a report out of unsorted samples.
    pub fn from_samples(mut samples: Vec<Duration>) -> Self {
        samples.sort();

        let count = samples.len();
        let sum = samples.iter().copied().sum::<Duration>();

        let avg = if count == 0 {
            Duration::default()
        } else {
            Duration::from_nanos(u64::try_from(sum.as_nanos() / count as u128).unwrap_or_default())
        };

        Self {
            count,
            min: samples.first().copied().unwrap_or_default(),
            max: samples.last().copied().unwrap_or_default(),
            avg,
            p50: percentile(&samples, 5000),
            p95: percentile(&samples, 9500),
            p99: percentile(&samples, 9900),
        }
    }
}

/// Get the percentile of sorted samples, where `n` is expressed in basis
/// points.
fn percentile(samples: &[Duration], n: usize) -> Duration {
    if samples.is_empty() {
        return Duration::default();
    }

    let index = (samples.len() * n / 10000).min(samples.len() - 1);
    samples[index]
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Report {
            count,
            min,
            max,
            avg,
            p50,
            p95,
            p99,
        } = self;

        write!(f, "count: {count}, min: {min:?}, max: {max:?}, avg: {avg:?}, 50th: {p50:?}, 95th: {p95:?}, 99th: {p99:?}")
    }
}

impl AddAssign<&Report> for Report {
    fn add_assign(&mut self, rhs: &Report) {
        self.count += rhs.count;
        self.min += rhs.min;
        self.max += rhs.max;
        self.avg += rhs.avg;
        self.p50 += rhs.p50;
        self.p95 += rhs.p95;
        self.p99 += rhs.p99;
    }
}
