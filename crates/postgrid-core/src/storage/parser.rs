//! Reader for delimited postfix sheets.
//!
//! One row per line, fields separated by `,`. Fields are not quoted: the
//! postfix body language has no use for commas.

use std::path::Path;

use log::debug;
use postgrid_engine::engine::Sheet;

use crate::error::{PostgridError, Result};

/// Parse sheet text. A trailing line terminator does not add a row.
pub fn parse_sheet(content: &str) -> Sheet {
    Sheet::from_lines(content.lines())
}

/// Read and parse a sheet file.
pub fn read_sheet(path: &Path) -> Result<Sheet> {
    let content = std::fs::read_to_string(path).map_err(|source| PostgridError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let sheet = parse_sheet(&content);
    debug!("loaded {} rows from {}", sheet.row_count(), path.display());
    Ok(sheet)
}

#[cfg(test)]
mod tests {
    use super::*;
    use postgrid_engine::engine::{CellRef, Token};
    use std::io::Write;

    #[test]
    fn test_rows_and_columns() {
        let sheet = parse_sheet("1, 2, 3\n4\n");
        assert_eq!(sheet.row_count(), 2);
        assert_eq!(sheet.row_len(0), 3);
        assert_eq!(sheet.row_len(1), 1);
    }

    #[test]
    fn test_crlf_lines() {
        let sheet = parse_sheet("1 2 +\r\n3\r\n");
        assert_eq!(sheet.row_count(), 2);
        let tokens = sheet.cell(CellRef::new(0, 0)).unwrap().tokens();
        assert_eq!(tokens.len(), 3);
    }

    #[test]
    fn test_blank_line_is_one_zero_cell() {
        let mut sheet = parse_sheet("1\n\n2\n");
        assert_eq!(sheet.row_count(), 3);
        assert_eq!(sheet.row_len(1), 1);
        assert_eq!(sheet.eval_cell(CellRef::new(0, 1)), Token::Number(0.0));
    }

    #[test]
    fn test_trailing_comma_adds_empty_cell() {
        let sheet = parse_sheet("1,");
        assert_eq!(sheet.row_len(0), 2);
    }

    #[test]
    fn test_read_sheet_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.txt");
        let err = read_sheet(&path).unwrap_err();
        assert!(matches!(err, PostgridError::Open { .. }));
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_read_sheet_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "2, a1 3 *").unwrap();
        let mut sheet = read_sheet(file.path()).unwrap();
        assert_eq!(sheet.eval_cell(CellRef::new(1, 0)), Token::Number(6.0));
    }
}
