use super::Document;
use crate::config::Config;
use crate::error::Result;
use crate::storage::{read_sheet, write_rows, write_rows_to_path};
use std::io::Write;
use std::path::Path;

impl Document {
    /// Load a sheet file.
    pub fn open(path: &Path, config: Config) -> Result<Self> {
        let sheet = read_sheet(path)?.with_max_depth(config.max_depth);
        let doc = Document {
            sheet,
            file_path: Some(path.to_path_buf()),
            config,
        };
        if doc.config.check_cycles {
            doc.report_cycles()?;
        }
        Ok(doc)
    }

    /// Evaluate everything and write the results to `out`.
    pub fn write_to<W: Write>(&mut self, out: &mut W) -> Result<()> {
        let rows = self.evaluate()?;
        write_rows(&rows, out)
    }

    /// Evaluate everything and write the results to a new file.
    pub fn save(&mut self, path: &Path) -> Result<()> {
        let rows = self.evaluate()?;
        write_rows_to_path(&rows, path)
    }
}
