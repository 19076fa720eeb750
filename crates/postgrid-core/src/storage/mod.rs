//! Storage: reading sheets from delimited text and writing results.

mod parser;
mod writer;

pub use parser::{parse_sheet, read_sheet};
pub use writer::{
    LINE_ENDING, write_results, write_results_string, write_results_to_path, write_rows,
    write_rows_to_path,
};
