use std::io::Write;

use anyhow::{anyhow, Result};

use crate::cli::{Answer, Bencher, Mode, Opts, Output, OutputKind, Report};
use crate::dataset::Dataset;

/// Scans datasets according to the command line options.
pub struct Runner<'a, O> {
    opts: &'a Opts,
    output: Output<O>,
    total: Report,
}

impl<'a, O> Runner<'a, O>
where
    O: Write,
{
    /// Construct a runner writing to `out`.
    pub fn new(opts: &'a Opts, out: O) -> Self {
        let kind = if opts.is_json() {
            OutputKind::Json
        } else {
            OutputKind::Normal
        };

        Self {
            opts,
            output: Output::new(out, kind),
            total: Report::default(),
        }
    }

    /// Scan a single dataset and write its answer, or its benchmark report.
    ///
    /// Fails if the dataset has an expected answer which doesn't match.
    pub fn run(&mut self, dataset: &Dataset) -> Result<()> {
        let name = dataset.name();
        let grid = dataset.grid(self.opts.bounds());

        log::debug!(
            "{name}: {rows} rows, {columns} columns, {bounds:?} bounds",
            rows = grid.rows_len(),
            columns = grid.columns_len(),
            bounds = grid.bounds(),
        );

        if self.opts.is_verbose() {
            log::debug!("{name}:\n{grid}");
        }

        match self.opts.mode {
            Mode::Default => {
                let mut sum = 0u64;
                let mut count = 0;

                for part in grid.part_numbers() {
                    log::debug!("{name}: {part}");

                    sum = sum
                        .checked_add(part.value)
                        .ok_or_else(|| anyhow!("{name}: sum of part numbers overflows at {part}"))?;

                    count += 1;
                }

                log::debug!("{name}: {count} part numbers");

                self.output.answer(&Answer {
                    dataset: name,
                    sum,
                    count,
                })?;

                dataset.verify(sum)?;
            }
            Mode::Bench => {
                let mut b = Bencher::new(self.opts);
                let report = b.iter(&mut self.output, dataset.expected(), || {
                    grid.part_number_sum()
                })?;

                self.output.report(name, &report)?;
                self.total += &report;
            }
        }

        Ok(())
    }

    /// Write the summed benchmark reports of every dataset run so far.
    pub fn total(&mut self) -> Result<()> {
        self.output.report("total", &self.total)?;
        Ok(())
    }

    /// Report an error through the configured output.
    pub fn error(&mut self, error: &anyhow::Error) -> Result<()> {
        self.output.error(format_args!("{error:#}"))?;
        Ok(())
    }

    /// Get the underlying writer back.
    pub fn into_inner(self) -> O {
        self.output.into_inner()
    }
}
