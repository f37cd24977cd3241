//! Finding part numbers in engine schematics.
//!
//! A schematic is a grid of digits, periods and symbols. Every run of digits
//! which is adjacent to a symbol, even diagonally, is a part number.
//!
//! # Examples
//!
//! ```
//! use schematic::Grid;
//!
//! let grid = Grid::parse(schematic::dataset::SAMPLE);
//!
//! let parts = grid.part_numbers().map(|part| part.value).collect::<Vec<_>>();
//! assert_eq!(parts, [467, 35, 633, 617, 592, 755, 664, 598]);
//! assert_eq!(grid.part_number_sum(), 4361);
//! ```

pub mod cell;
pub mod cli;
pub mod dataset;
pub mod grid;
pub mod input;
pub mod scan;

pub use self::cell::{is_symbol, Cell};
pub use self::dataset::{Dataset, DatasetError};
pub use self::grid::{Bounds, Grid};
pub use self::scan::{touches_symbol, PartNumber, PartNumbers};

pub mod prelude {
    //! Helper prelude with useful imports.
    pub use crate::cli::{Opts, Runner};
    pub use crate::{Bounds, Dataset, Grid};
    pub use anyhow::{anyhow, bail, Context, Result};
}
