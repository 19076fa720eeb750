//! Rendering of evaluated cells for output.

use super::Token;

/// Printed in place of any cell that evaluated to an error.
pub const ERROR_MARKER: &str = "#ERR";

/// Separator between fields of one output row.
pub const FIELD_SEPARATOR: &str = ", ";

/// Format a number for display.
///
/// Integral values keep a trailing `.0` (`3.0`, `-1.0`); non-finite values
/// render as `inf`, `-inf` and `nan`.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "nan".to_string()
    } else if n.is_infinite() {
        if n > 0.0 { "inf" } else { "-inf" }.to_string()
    } else {
        format!("{:?}", n)
    }
}

/// Format an evaluation result for display.
pub fn format_token(token: &Token) -> String {
    token
        .as_number()
        .map_or_else(|| ERROR_MARKER.to_string(), format_number)
}

/// Join one row of results into a single output line (without terminator).
pub fn format_row(values: &[Token]) -> String {
    values
        .iter()
        .map(format_token)
        .collect::<Vec<_>>()
        .join(FIELD_SEPARATOR)
}
