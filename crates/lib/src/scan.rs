//! Scanning a grid for part numbers.

use core::fmt;
use core::iter::FusedIterator;
use core::str::from_utf8;

use arrayvec::ArrayVec;
use bstr::BStr;
use serde::Serialize;

use crate::cell::Cell;
use crate::grid::Grid;


/// A digit run which is adjacent to at least one symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartNumber {
    /// The numeric value of the run.
    pub value: u64,
    /// The row the run is on.
    pub row: usize,
    /// The first column of the run.
    pub start: usize,
    /// The column one past the last digit of the run.
    pub end: usize,
}

impl fmt::Display for PartNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{value} at {row}:{start}..{end}",
            value = self.value,
            row = self.row,
            start = self.start,
            end = self.end
        )
    }
}

/// The 8-neighbourhood of a position, which might extend outside of the
/// grid.
#[inline]
fn neigh(row: usize, column: usize) -> impl Iterator<Item = (isize, isize)> {
    let (row, column) = (row as isize, column as isize);

    let mut out = ArrayVec::<_, 8>::new();

    for c in column - 1..=column + 1 {
        out.push((row - 1, c));
        out.push((row + 1, c));
    }

    out.push((row, column - 1));
    out.push((row, column + 1));
    out.into_iter()
}

/// Test if any of the 8 neighbours of the given position is a symbol.
///
/// Neighbours outside of the grid are never symbols.
///
/// # Examples
///
/// ```
/// use schematic::{touches_symbol, Grid};
///
/// let grid = Grid::from_lines(["1.....", ".*...."]);
/// assert!(touches_symbol(&grid, 0, 0));
/// assert!(touches_symbol(&grid, 0, 2));
/// assert!(!touches_symbol(&grid, 0, 3));
/// ```
pub fn touches_symbol(grid: &Grid, row: usize, column: usize) -> bool {
    neigh(row, column).any(|(r, c)| grid.cell_at(r, c).is_some_and(Cell::is_symbol))
}

/// The digit run currently being accumulated.
#[derive(Debug, Clone, Copy)]
struct Run {
    start: usize,
    qualifies: bool,
}

/// Lazy iterator over the part numbers of a grid, see [Grid::part_numbers].
///
/// Part numbers are produced row by row, left to right.
#[derive(Debug, Clone)]
pub struct PartNumbers<'a> {
    grid: &'a Grid,
    row: usize,
    column: usize,
    run: Option<Run>,
}

impl<'a> PartNumbers<'a> {
    #[inline]
    pub(crate) fn new(grid: &'a Grid) -> Self {
        Self {
            grid,
            row: 0,
            column: 0,
            run: None,
        }
    }

    /// Finalize the active run, which ends right before `end`.
    fn finish(&mut self, data: &[u8], end: usize) -> Option<PartNumber> {
        let run = self.run.take()?;

        if !run.qualifies {
            return None;
        }

        let digits = &data[run.start..end];

        let value = match from_utf8(digits).map(str::parse::<u64>) {
            Ok(Ok(value)) => value,
            Ok(Err(error)) => panic!(
                "digit run {digits:?} at {row}:{start} is not a number: {error}",
                digits = BStr::new(digits),
                row = self.row,
                start = run.start
            ),
            Err(error) => panic!(
                "digit run at {row}:{start} is not utf-8: {error}",
                row = self.row,
                start = run.start
            ),
        };

        Some(PartNumber {
            value,
            row: self.row,
            start: run.start,
            end,
        })
    }
}

impl Iterator for PartNumbers<'_> {
    type Item = PartNumber;

    fn next(&mut self) -> Option<Self::Item> {
        let grid = self.grid;

        loop {
            let data = grid.row(self.row)?;

            while let Some(&b) = data.get(self.column) {
                let column = self.column;
                self.column += 1;

                if !Cell::classify(b).is_digit() {
                    if let Some(part) = self.finish(data, column) {
                        return Some(part);
                    }

                    continue;
                }

                match &mut self.run {
                    Some(run) => {
                        if !run.qualifies {
                            run.qualifies = touches_symbol(grid, self.row, column);
                        }
                    }
                    None => {
                        self.run = Some(Run {
                            start: column,
                            qualifies: touches_symbol(grid, self.row, column),
                        });
                    }
                }
            }

            // NB: runs never span rows.
            let part = self.finish(data, data.len());
            self.row += 1;
            self.column = 0;

            if part.is_some() {
                return part;
            }
        }
    }
}

impl FusedIterator for PartNumbers<'_> {}
