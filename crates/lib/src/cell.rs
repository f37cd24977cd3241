//! Classification of schematic cells.

use core::fmt;

#[cfg(test)]
mod tests;

/// The byte used for empty cells.
pub const EMPTY: u8 = b'.';

/// A classified schematic cell.
///
/// This is derived from the byte stored in the grid and never stored itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// A digit, holding its numeric value `0..=9`.
    Digit(u8),
    /// The period character.
    Empty,
    /// Anything else, holding the original byte.
    Symbol(u8),
}

impl Cell {
    /// Classify a single byte.
    ///
    /// # Examples
    ///
    /// ```
    /// use schematic::Cell;
    ///
    /// assert_eq!(Cell::classify(b'7'), Cell::Digit(7));
    /// assert_eq!(Cell::classify(b'.'), Cell::Empty);
    /// assert_eq!(Cell::classify(b'#'), Cell::Symbol(b'#'));
    /// assert_eq!(Cell::classify(b'x'), Cell::Symbol(b'x'));
    /// ```
    #[inline]
    pub const fn classify(b: u8) -> Self {
        match b {
            b'0'..=b'9' => Cell::Digit(b - b'0'),
            EMPTY => Cell::Empty,
            b => Cell::Symbol(b),
        }
    }

    /// Test if the cell is a digit.
    #[inline]
    pub const fn is_digit(self) -> bool {
        matches!(self, Cell::Digit(..))
    }

    /// Test if the cell counts as a symbol for adjacency purposes.
    #[inline]
    pub const fn is_symbol(self) -> bool {
        matches!(self, Cell::Symbol(..))
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Cell::Digit(d) => write!(f, "{d}"),
            Cell::Empty => write!(f, "."),
            Cell::Symbol(b) => write!(f, "{}", b.escape_ascii()),
        }
    }
}

/// Test if the given byte is a symbol.
///
/// Anything that is neither a digit nor a period is a symbol, letters and
/// whitespace included.
///
/// # Examples
///
/// ```
/// assert!(schematic::is_symbol(b'*'));
/// assert!(schematic::is_symbol(b'a'));
/// assert!(!schematic::is_symbol(b'.'));
/// assert!(!schematic::is_symbol(b'0'));
/// ```
#[inline]
pub const fn is_symbol(b: u8) -> bool {
    Cell::classify(b).is_symbol()
}
