use log::warn;
use postgrid_engine::engine::{CellRef, Sheet, Token, find_cycles};
use std::path::PathBuf;

use super::stack::with_depth_stack;
use crate::config::Config;
use crate::error::Result;

/// A loaded sheet together with where it came from and how to evaluate it.
pub struct Document {
    /// The cell grid
    pub sheet: Sheet,
    /// Source file, if loaded from disk
    pub file_path: Option<PathBuf>,
    /// Settings the sheet was built with
    pub config: Config,
}

impl Document {
    /// Build a document from sheet text without touching the filesystem.
    pub fn from_text(content: &str, config: Config) -> Self {
        let sheet = crate::storage::parse_sheet(content).with_max_depth(config.max_depth);
        Document {
            sheet,
            file_path: None,
            config,
        }
    }

    /// Evaluate a single cell.
    pub fn value(&mut self, cell: CellRef) -> Result<Token> {
        let sheet = &mut self.sheet;
        with_depth_stack(sheet.max_depth(), || sheet.eval_cell(cell))
    }

    /// Evaluate every printable cell, row by row.
    pub fn evaluate(&mut self) -> Result<Vec<Vec<Token>>> {
        let sheet = &mut self.sheet;
        with_depth_stack(sheet.max_depth(), || sheet.eval_all())
    }

    /// Find reference cycles and log each one. Does not evaluate.
    pub fn report_cycles(&self) -> Result<Vec<Vec<CellRef>>> {
        let sheet = &self.sheet;
        let cycles = with_depth_stack(sheet.max_depth(), || find_cycles(sheet))?;
        for cycle in &cycles {
            let path: Vec<String> = cycle.iter().map(CellRef::to_string).collect();
            warn!("reference cycle: {} -> {}", path.join(" -> "), path[0]);
        }
        Ok(cycles)
    }
}
