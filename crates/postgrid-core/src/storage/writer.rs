//! Writer for evaluated results.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use postgrid_engine::engine::{Sheet, Token, format_row};

use crate::error::{PostgridError, Result};

#[cfg(windows)]
pub const LINE_ENDING: &str = "\r\n";
#[cfg(not(windows))]
pub const LINE_ENDING: &str = "\n";

/// Evaluate every cell and write one line per row.
///
/// Only the first 26 columns of a row are printed.
pub fn write_results<W: Write>(sheet: &mut Sheet, out: &mut W) -> Result<()> {
    write_rows(&sheet.eval_all(), out)
}

/// Write already evaluated rows, one line each.
pub fn write_rows<W: Write>(rows: &[Vec<Token>], out: &mut W) -> Result<()> {
    for row in rows {
        out.write_all(format_row(row).as_bytes())?;
        out.write_all(LINE_ENDING.as_bytes())?;
    }
    out.flush()?;
    Ok(())
}

/// Evaluate and write results to a new file at `path`.
pub fn write_results_to_path(sheet: &mut Sheet, path: &Path) -> Result<()> {
    let rows = sheet.eval_all();
    write_rows_to_path(&rows, path)
}

/// Write already evaluated rows to a new file at `path`.
pub fn write_rows_to_path(rows: &[Vec<Token>], path: &Path) -> Result<()> {
    let file = File::create(path).map_err(|source| PostgridError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_rows(rows, &mut BufWriter::new(file))
}

/// Evaluate and render results as a string.
pub fn write_results_string(sheet: &mut Sheet) -> String {
    sheet
        .eval_all()
        .iter()
        .map(|row| format_row(row) + LINE_ENDING)
        .collect()
}
