//! The schematic grid.

use core::fmt;

use bstr::BStr;

use crate::cell::Cell;
use crate::input;
use crate::scan::PartNumbers;


/// How columns are bounds checked in a [Grid].
///
/// The two only differ for ragged grids, where rows have different lengths.
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bounds {
    /// Every row is bounded by its own length.
    #[default]
    Row,
    /// Every row is bounded by the length of the first row.
    ///
    /// Cells past the first row's width are absent even on longer rows, and
    /// cells past a shorter row's own end are still absent.
    FirstRow,
}

/// An immutable grid of single-byte cells.
///
/// Rows are allowed to have different lengths.
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Box<[u8]>>,
    bounds: Bounds,
}

impl Grid {
    /// Build a grid out of lines which have already been stripped.
    ///
    /// Each line becomes one row and each byte of it one cell. No validation
    /// is performed.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Grid;
    ///
    /// let grid = Grid::from_lines(["467..", "...*"]);
    /// assert_eq!(grid.rows_len(), 2);
    /// assert_eq!(grid.columns_len(), 5);
    /// assert_eq!(grid.row(1), Some(&b"...*"[..]));
    ///
    /// assert!(Grid::from_lines(Vec::<&str>::new()).is_empty());
    /// ```
    pub fn from_lines<I>(lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<[u8]>,
    {
        let rows: Vec<Box<[u8]>> = lines
            .into_iter()
            .map(|line| Box::from(line.as_ref()))
            .collect();

        Self {
            rows,
            bounds: Bounds::default(),
        }
    }

    /// Build a grid out of raw text, stripping whitespace around every line.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Grid;
    ///
    /// let grid = Grid::parse("
    ///     1.....
    ///     .*....
    /// ");
    ///
    /// assert_eq!(grid.rows_len(), 3);
    /// assert_eq!(grid.row(0), Some(&b""[..]));
    /// assert_eq!(grid.row(1), Some(&b"1....."[..]));
    /// ```
    pub fn parse<D>(data: D) -> Self
    where
        D: AsRef<[u8]>,
    {
        Self::from_lines(input::lines(data.as_ref()))
    }

    /// Change how columns are bounds checked.
    #[inline]
    pub fn with_bounds(self, bounds: Bounds) -> Self {
        Self { bounds, ..self }
    }

    /// Get the bounds policy of the grid.
    #[inline]
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Test if the grid has no rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Get number of rows in the grid.
    #[inline]
    pub fn rows_len(&self) -> usize {
        self.rows.len()
    }

    /// Get number of columns in the grid, which is the length of the first
    /// row.
    #[inline]
    pub fn columns_len(&self) -> usize {
        self.rows.first().map_or(0, |row| row.len())
    }

    /// Access the specified row in the grid.
    #[inline]
    pub fn row(&self, row: usize) -> Option<&[u8]> {
        self.rows.get(row).map(|row| &row[..])
    }

    /// Iterate over rows in the grid.
    #[inline]
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[u8]> + '_ {
        self.rows.iter().map(|row| &row[..])
    }

    /// Get the byte at the given row and column, honoring the [Bounds] of
    /// the grid.
    #[inline]
    pub fn try_get(&self, row: usize, column: usize) -> Option<u8> {
        let data = self.rows.get(row)?;

        if self.bounds == Bounds::FirstRow && column >= self.columns_len() {
            return None;
        }

        data.get(column).copied()
    }

    /// Bounds-checked lookup of a classified cell.
    ///
    /// Negative and out of bounds positions are absent, never an error.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::{Cell, Grid};
    ///
    /// let grid = Grid::from_lines(["1.", ".*"]);
    /// assert_eq!(grid.cell_at(0, 0), Some(Cell::Digit(1)));
    /// assert_eq!(grid.cell_at(1, 1), Some(Cell::Symbol(b'*')));
    /// assert_eq!(grid.cell_at(-1, 0), None);
    /// assert_eq!(grid.cell_at(0, 2), None);
    /// assert_eq!(grid.cell_at(2, 0), None);
    /// ```
    #[inline]
    pub fn cell_at(&self, row: isize, column: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        Some(Cell::classify(self.try_get(row, column)?))
    }

    /// Construct a lazy iterator over the part numbers in the grid.
    ///
    /// Every call starts a fresh scan, so scanning the same grid twice yields
    /// the same sequence.
    #[inline]
    pub fn part_numbers(&self) -> PartNumbers<'_> {
        PartNumbers::new(self)
    }

    /// Sum all part numbers in the grid.
    ///
    /// # Panics
    ///
    /// Panics if the sum does not fit in a `u64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Grid;
    ///
    /// let grid = Grid::from_lines(["1.....", ".*....", "....22", "......"]);
    /// assert_eq!(grid.part_number_sum(), 1);
    /// ```
    pub fn part_number_sum(&self) -> u64 {
        let mut sum = 0u64;

        for part in self.part_numbers() {
            let Some(next) = sum.checked_add(part.value) else {
                panic!("sum of part numbers overflows at {part}");
            };

            sum = next;
        }

        sum
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            writeln!(f, "{}", BStr::new(row))?;
        }

        Ok(())
    }
}
