use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use calamine::{Data, Range, Reader, Sheets};

use crate::error::InspectError;

pub type SheetRange = Range<Data>;

/// A workbook whose sheets can be loaded one at a time. A failing sheet must
/// not poison the others.
pub trait WorkbookSource {
    fn sheet_names(&self) -> Vec<String>;

    fn load_sheet(&mut self, name: &str) -> Result<SheetRange, String>;
}

pub struct CalamineWorkbook {
    sheets: Sheets<BufReader<File>>,
}

impl CalamineWorkbook {
    /// Open any format calamine detects from the extension (xlsx, xlsm, xlsb,
    /// xls, ods).
    pub fn open(path: &Path) -> Result<Self, InspectError> {
        if !path.exists() {
            return Err(InspectError::NotFound(path.to_path_buf()));
        }
        let sheets = calamine::open_workbook_auto(path).map_err(|err| InspectError::Open {
            path: path.to_path_buf(),
            message: err.to_string(),
        })?;
        Ok(Self { sheets })
    }
}

impl WorkbookSource for CalamineWorkbook {
    fn sheet_names(&self) -> Vec<String> {
        self.sheets.sheet_names()
    }

    fn load_sheet(&mut self, name: &str) -> Result<SheetRange, String> {
        self.sheets
            .worksheet_range(name)
            .map_err(|err| err.to_string())
    }
}
