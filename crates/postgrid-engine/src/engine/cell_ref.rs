//! Cell reference parsing and formatting.
//!
//! Converts between the single-letter spreadsheet notation used in cell
//! bodies (e.g. "a1", "B3", "z60") and zero-indexed column/row coordinates.
//! Only one column letter is accepted, so the address space is exactly
//! [`MAX_COLUMNS`] columns wide.
//!
//! # Examples
//!
//! ```
//! use postgrid_engine::engine::CellRef;
//!
//! let cell = CellRef::parse("b3").unwrap();
//! assert_eq!(cell.col, 1);  // 0-indexed
//! assert_eq!(cell.row, 2);
//! assert_eq!(cell.to_string(), "B3");
//! ```

use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

/// Number of addressable columns (`a` through `z`).
pub const MAX_COLUMNS: usize = 26;

/// A reference to a cell by column and row indices (0-indexed).
#[derive(Clone, Copy, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub struct CellRef {
    pub row: usize,
    pub col: usize,
}

/// Error returned when a string is not a valid cell reference.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseCellRefError(String);

impl fmt::Display for ParseCellRefError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invalid cell reference: {}", self.0)
    }
}

impl std::error::Error for ParseCellRefError {}

fn cell_ref_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"^(?<letter>[A-Za-z])(?<numbers>[0-9]+)$")
            .expect("cell reference regex must compile")
    })
}

impl CellRef {
    pub fn new(col: usize, row: usize) -> CellRef {
        CellRef { row, col }
    }

    /// Parse a cell reference from spreadsheet notation (e.g. "a1", "C12").
    ///
    /// Returns None unless the whole word is one letter followed by digits
    /// naming a row of at least 1.
    pub fn parse(word: &str) -> Option<CellRef> {
        let caps = cell_ref_re().captures(word)?;
        let letter = caps["letter"].as_bytes()[0].to_ascii_lowercase();
        let col = (letter - b'a') as usize;
        let row = caps["numbers"].parse::<usize>().ok()?.checked_sub(1)?;
        Some(CellRef::new(col, row))
    }

    /// Convert a column index to its letter (0 -> A, 25 -> Z).
    /// Columns past Z have no single-letter name and render as `?`.
    pub fn col_to_letter(col: usize) -> char {
        if col < MAX_COLUMNS {
            (b'A' + col as u8) as char
        } else {
            '?'
        }
    }
}

impl std::str::FromStr for CellRef {
    type Err = ParseCellRefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| ParseCellRefError(s.to_string()))
    }
}

impl fmt::Display for CellRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CellRef::col_to_letter(self.col), self.row + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::CellRef;

    #[test]
    fn test_parse_row_overflow_returns_none() {
        let huge = format!("a{}", "9".repeat(40));
        assert!(CellRef::parse(&huge).is_none());
    }

    #[test]
    fn test_parse_row_zero_returns_none() {
        assert!(CellRef::parse("a0").is_none());
        assert!(CellRef::parse("b000").is_none());
    }

    #[test]
    fn test_leading_zeros_in_row() {
        assert_eq!(CellRef::parse("c007"), Some(CellRef::new(2, 6)));
    }

    #[test]
    fn test_from_str_reports_input() {
        let err = "aa1".parse::<CellRef>().unwrap_err();
        assert_eq!(err.to_string(), "Invalid cell reference: aa1");
    }

    #[test]
    fn test_display_out_of_range_column() {
        assert_eq!(CellRef::new(26, 0).to_string(), "?1");
    }
}
