//! Spreadsheet engine API.
//!
//! - [`Token`], [`Operator`], [`tokenize`] - Lexing cell bodies
//! - [`Cell`], [`CellState`] - A cell's program and evaluation state
//! - [`CellRef`] - Cell reference parsing (a1 notation ↔ column/row indices)
//! - [`eval_postfix`] - The postfix stack machine
//! - [`Sheet`] - The grid and recursive, memoized cell resolution
//! - [`detect_cycle`], [`find_cycles`] - Static reference-cycle detection
//! - [`format_token`], [`format_row`] - Rendering results for output

mod cell;
mod cell_ref;
mod cycle;
mod eval;
mod format;
mod sheet;
mod token;

pub use cell::{Cell, CellState};
pub use cell_ref::{CellRef, MAX_COLUMNS, ParseCellRefError};
pub use cycle::{detect_cycle, find_cycles};
pub use eval::{Resolved, eval_postfix};
pub use format::{ERROR_MARKER, FIELD_SEPARATOR, format_number, format_row, format_token};
pub use sheet::{DEFAULT_MAX_DEPTH, MAX_DEPTH_LIMIT, Sheet, parse_row, stack_size_for_depth};
pub use token::{Operator, Token, tokenize};
