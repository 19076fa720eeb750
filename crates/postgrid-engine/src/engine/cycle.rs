//! Static reference-cycle detection.
//!
//! Evaluation already turns cycles into errors through the `Started`
//! state. This module finds them without evaluating anything, so a caller
//! can report which cells form a loop before computing results.

use std::collections::HashSet;

use super::{CellRef, Sheet, Token};

/// Detect a reference cycle reachable from `start`.
///
/// Returns the cycle as a path that begins and ends at the same cell, or
/// None. Chains deeper than the sheet's maximum depth are not followed.
pub fn detect_cycle(start: CellRef, sheet: &Sheet) -> Option<Vec<CellRef>> {
    detect_cycle_from(start, sheet, &mut HashSet::new())
}

/// Like [`detect_cycle`], but skips cells already in `cleared` and adds
/// every cell proven to reach no cycle, so repeated scans stay linear.
fn detect_cycle_from(
    start: CellRef,
    sheet: &Sheet,
    cleared: &mut HashSet<CellRef>,
) -> Option<Vec<CellRef>> {
    let mut visiting = HashSet::new();
    let mut path = Vec::new();

    if detect_cycle_dfs(start, sheet, &mut visiting, cleared, &mut path) {
        let last = *path.last()?;
        let first = path.iter().position(|c| *c == last)?;
        Some(path.split_off(first))
    } else {
        None
    }
}

fn detect_cycle_dfs(
    current: CellRef,
    sheet: &Sheet,
    visiting: &mut HashSet<CellRef>,
    cleared: &mut HashSet<CellRef>,
    path: &mut Vec<CellRef>,
) -> bool {
    if visiting.contains(&current) {
        path.push(current);
        return true;
    }
    if cleared.contains(&current) || path.len() >= sheet.max_depth() {
        return false;
    }

    let Some(cell) = sheet.cell(current) else {
        return false;
    };

    visiting.insert(current);
    path.push(current);

    for token in cell.tokens() {
        if let Token::Cell(dep) = *token {
            if detect_cycle_dfs(dep, sheet, visiting, cleared, path) {
                return true;
            }
        }
    }

    path.pop();
    visiting.remove(&current);
    cleared.insert(current);
    false
}

/// Every distinct cycle in the sheet, each rotated to start at its
/// smallest address and listed once.
pub fn find_cycles(sheet: &Sheet) -> Vec<Vec<CellRef>> {
    let mut seen = HashSet::new();
    let mut cleared = HashSet::new();
    let mut cycles = Vec::new();

    for start in sheet.addresses() {
        let Some(mut cycle) = detect_cycle_from(start, sheet, &mut cleared) else {
            continue;
        };
        cycle.pop();
        if let Some(min_pos) = cycle.iter().enumerate().min_by_key(|(_, c)| **c).map(|(i, _)| i) {
            cycle.rotate_left(min_pos);
        }
        if seen.insert(cycle.clone()) {
            cycles.push(cycle);
        }
    }

    cycles
}
