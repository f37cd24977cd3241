use std::hint::black_box;
use std::io::Write;
use std::time::{Duration, Instant};

use anyhow::{bail, Result};

use crate::cli::{Opts, Output, Report};

/// Default warmup period in milliseconds.
const DEFAULT_WARMUP: u64 = 100;

/// Default time in milliseconds.
const DEFAULT_TIME_LIMIT: u64 = 400;

/// Repeatedly times a computation producing a sum.
pub struct Bencher<'a> {
    opts: &'a Opts,
}

impl<'a> Bencher<'a> {
    /// Construct a new bencher.
    #[inline]
    pub fn new(opts: &'a Opts) -> Self {
        Self { opts }
    }

    /// Bench the given fn, checking every value it produces against
    /// `expected` if set.
    pub fn iter<T>(
        &mut self,
        o: &mut Output<impl Write>,
        expected: Option<u64>,
        mut iter: T,
    ) -> Result<Report>
    where
        T: FnMut() -> u64,
    {
        let warmup = Duration::from_millis(self.opts.warmup.unwrap_or(DEFAULT_WARMUP));
        let time_limit = Duration::from_millis(self.opts.time_limit.unwrap_or(DEFAULT_TIME_LIMIT));

        let mut sample = || -> Result<Duration> {
            let before = Instant::now();
            let value = black_box(iter());
            let after = Instant::now();

            if let Some(expected) = expected {
                if value != expected {
                    bail!("{value} (value) != {expected} (expected)");
                }
            }

            Ok(after.duration_since(before))
        };

        if !warmup.is_zero() {
            o.info(format_args!("warming up ({warmup:?})..."))?;

            let start = Instant::now();

            while start.elapsed() < warmup {
                sample()?;
            }
        }

        let mut samples = Vec::new();

        if let Some(count) = self.opts.count {
            let count = count.max(1);
            o.info(format_args!("running benches {count} time(s)..."))?;

            for _ in 0..count {
                samples.push(sample()?);
            }
        } else {
            o.info(format_args!("running benches ({time_limit:?})..."))?;

            let start = Instant::now();

            loop {
                samples.push(sample()?);

                if start.elapsed() >= time_limit {
                    break;
                }
            }
        }

        Ok(Report::from_samples(samples))
    }
}
