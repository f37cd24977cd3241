//! Datasets to scan.

use std::path::Path;

use anyhow::Result;
use thiserror::Error;

use crate::grid::{Bounds, Grid};
use crate::input;


/// The example schematic, indented the way it is embedded here.
pub const SAMPLE: &str = "467..114..
    ...*......
    ..35..633.
    ......#...
    617*......
    .....+.58.
    ..592.....
    ......755.
    ...$.*....
    .664.598..";

/// The sum of all part numbers in [SAMPLE].
pub const SAMPLE_SUM: u64 = 4361;

/// Error raised when a dataset does not produce its expected answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatasetError {
    #[error("{name}: {actual} (value) != {expected} (expected)")]
    Mismatch {
        name: String,
        expected: u64,
        actual: u64,
    },
}

/// A named schematic with an optional expected answer.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    data: Vec<u8>,
    expected: Option<u64>,
}

impl Dataset {
    /// Construct a dataset out of raw data.
    pub fn new<N, D>(name: N, data: D) -> Self
    where
        N: Into<String>,
        D: Into<Vec<u8>>,
    {
        Self {
            name: name.into(),
            data: data.into(),
            expected: None,
        }
    }

    /// The built-in sample dataset.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::{Bounds, Dataset};
    ///
    /// let sample = Dataset::sample();
    /// let sum = sample.grid(Bounds::Row).part_number_sum();
    /// assert_eq!(sum, 4361);
    /// assert!(sample.verify(sum).is_ok());
    /// ```
    pub fn sample() -> Self {
        Self::new("sample", SAMPLE).with_expected(SAMPLE_SUM)
    }

    /// Read a dataset from the given path.
    ///
    /// The dataset is named after the path.
    pub fn open<P>(path: P) -> Result<Self>
    where
        P: AsRef<Path>,
    {
        let path = path.as_ref();
        let data = input::read(path)?;
        Ok(Self::new(path.display().to_string(), data))
    }

    /// Set the answer this dataset is expected to produce.
    #[inline]
    pub fn with_expected(self, expected: u64) -> Self {
        Self {
            expected: Some(expected),
            ..self
        }
    }

    /// Name of the dataset.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The answer this dataset is expected to produce, if known.
    #[inline]
    pub fn expected(&self) -> Option<u64> {
        self.expected
    }

    /// Build the grid for this dataset.
    pub fn grid(&self, bounds: Bounds) -> Grid {
        Grid::parse(&self.data).with_bounds(bounds)
    }

    /// Verify that the given sum matches the expected answer, if there is
    /// one.
    pub fn verify(&self, actual: u64) -> Result<(), DatasetError> {
        match self.expected {
            Some(expected) if expected != actual => Err(DatasetError::Mismatch {
                name: self.name.clone(),
                expected,
                actual,
            }),
            _ => Ok(()),
        }
    }
}
