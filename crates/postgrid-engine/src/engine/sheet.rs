//! The grid of cells and recursive cell resolution.
//!
//! [`Sheet`] owns every cell. Cells refer to each other only by
//! [`CellRef`]; resolving a reference always goes back through the sheet,
//! which evaluates the target on demand, memoizes the result in the
//! target's [`CellState`] and uses the `Started` state to detect cycles.

use log::{trace, warn};

use super::cell_ref::MAX_COLUMNS;
use super::eval::{Resolved, eval_postfix};
use super::{Cell, CellRef, CellState, Token};

/// Deepest chain of nested cell references followed before giving up.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Largest reference depth a sheet accepts. Evaluating to this depth needs
/// a dedicated stack; see [`stack_size_for_depth`].
pub const MAX_DEPTH_LIMIT: usize = 10_000;

/// Native stack budgeted per level of reference nesting.
const STACK_BYTES_PER_LEVEL: usize = 8 * 1024;

/// Stack, in bytes, a thread needs to evaluate or scan a sheet whose
/// references nest `max_depth` levels deep.
pub fn stack_size_for_depth(max_depth: usize) -> usize {
    let levels = max_depth.clamp(1, MAX_DEPTH_LIMIT) + 1;
    1024 * 1024 + levels * STACK_BYTES_PER_LEVEL
}

/// A two-dimensional grid of cells. Rows may differ in length.
#[derive(Clone, Debug)]
pub struct Sheet {
    rows: Vec<Vec<Cell>>,
    max_depth: usize,
    evaluations: usize,
}

impl Sheet {
    pub fn new(rows: Vec<Vec<Cell>>) -> Sheet {
        Sheet {
            rows,
            max_depth: DEFAULT_MAX_DEPTH,
            evaluations: 0,
        }
    }

    /// Build a sheet from delimited text lines, one row per line.
    /// Fields are split on every `,`.
    pub fn from_lines<'a, I>(lines: I) -> Sheet
    where
        I: IntoIterator<Item = &'a str>,
    {
        Sheet::new(lines.into_iter().map(parse_row).collect())
    }

    /// Set the reference depth limit, clamped to `1..=MAX_DEPTH_LIMIT`.
    pub fn with_max_depth(mut self, max_depth: usize) -> Sheet {
        self.max_depth = max_depth.clamp(1, MAX_DEPTH_LIMIT);
        self
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of cells in `row`, or 0 past the last row.
    pub fn row_len(&self, row: usize) -> usize {
        self.rows.get(row).map_or(0, Vec::len)
    }

    /// How many times a cell program has actually been run.
    pub fn evaluations(&self) -> usize {
        self.evaluations
    }

    /// Look up a cell. Addresses outside the 26 columns, past the last
    /// row, or past the end of a short row have no cell.
    pub fn cell(&self, at: CellRef) -> Option<&Cell> {
        if at.col >= MAX_COLUMNS {
            return None;
        }
        self.rows.get(at.row)?.get(at.col)
    }

    fn cell_mut(&mut self, at: CellRef) -> Option<&mut Cell> {
        if at.col >= MAX_COLUMNS {
            return None;
        }
        self.rows.get_mut(at.row)?.get_mut(at.col)
    }

    /// Evaluate a cell, resolving its references recursively.
    ///
    /// Missing cells evaluate to an error. Finished cells return their
    /// cached value without re-running. A cell reached again while it is
    /// still being evaluated is a cycle: it finishes with an error, which
    /// then propagates to every cell waiting on it.
    pub fn eval_cell(&mut self, at: CellRef) -> Token {
        self.eval_at(at, 0)
    }

    fn eval_at(&mut self, at: CellRef, depth: usize) -> Token {
        let Some(cell) = self.cell_mut(at) else {
            return Token::Error;
        };

        match cell.state() {
            CellState::Finished(value) => return value,
            CellState::Started => {
                warn!("circular reference detected at {}", at);
                return cell.finish(Token::Error);
            }
            CellState::Unevaluated => cell.start(),
        }

        let tokens = cell.tokens().to_vec();
        self.evaluations += 1;

        let max_depth = self.max_depth;
        let result = eval_postfix(&tokens, |target| {
            if depth + 1 > max_depth {
                warn!(
                    "maximum reference depth ({}) exceeded when entering {} from {}",
                    max_depth, target, at
                );
                return Resolved::Abort;
            }
            Resolved::Value(self.eval_at(target, depth + 1))
        });

        trace!("{} = {}", at, result);
        match self.cell_mut(at) {
            Some(cell) => cell.finish(result),
            None => result,
        }
    }

    /// Evaluate every printable cell (the first 26 columns of each row),
    /// in row-major order.
    pub fn eval_all(&mut self) -> Vec<Vec<Token>> {
        (0..self.row_count())
            .map(|row| {
                let width = self.row_len(row).min(MAX_COLUMNS);
                (0..width)
                    .map(|col| self.eval_cell(CellRef::new(col, row)))
                    .collect()
            })
            .collect()
    }

    /// Every cell address in row-major order, limited to 26 columns.
    pub fn addresses(&self) -> impl Iterator<Item = CellRef> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, cells)| {
            (0..cells.len().min(MAX_COLUMNS)).map(move |col| CellRef::new(col, row))
        })
    }
}

/// Split one delimited line into cells.
pub fn parse_row(line: &str) -> Vec<Cell> {
    line.split(',').map(Cell::new).collect()
}
