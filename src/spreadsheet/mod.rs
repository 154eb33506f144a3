//! # Spreadsheet Documents
//!
//! Reading and writing of Office Open XML workbooks (`.xlsx`, `.xlsm`).
//!
//! Reading parses the zip package directly: workbook relationships, the sheet
//! list, the date system, number formats from `styles.xml` (to tell dates from
//! plain numbers) and the shared-string table. Writing goes through
//! `rust_xlsxwriter`, see [`writer`].
pub(crate) mod cell;
pub(crate) mod criteria;
pub mod reference;
pub(crate) mod sheet;
pub mod writer;
pub(crate) mod xlsx;

use crate::error::ConverterError;
use crate::layout::ColumnKind;
use crate::layout::Layout;
use crate::normalize::to_integer;
use crate::spreadsheet::criteria::Criteria;
use crate::spreadsheet::xlsx::XlsxSpreadsheet;
use crate::table::RawTable;
use crate::table::Table;
use crate::table::Value;
use std::path::Path;
use thiserror::Error;
use tracing::debug;

/// Errors raised at the document boundary.
#[derive(Error, Debug)]
pub enum SpreadsheetError {
    /// File extension is not a supported workbook format
    #[error("Unsupported file format '{0}', expected .xlsx or .xlsm")]
    UnsupportedFormat(String),

    /// The document is not a readable workbook
    #[error("Malformed document '{file}': {reason}")]
    MalformedDocument { file: String, reason: String },

    /// No sheet name matches the selector
    #[error("No sheet matching '{selector}' in '{file}', available: {available:?}")]
    SheetNotFound {
        file: String,
        selector: String,
        available: Vec<String>,
    },

    /// A cell holds a value that cannot be decoded
    #[error("Invalid cell value in '{file}' at {sheet}!{reference}: {message}")]
    CellValueError {
        file: String,
        sheet: String,
        reference: String,
        message: String,
    },
}

/// An opened workbook.
pub struct Workbook {
    spreadsheet: XlsxSpreadsheet,
}

impl Workbook {
    /// Opens a workbook file; the format is chosen by extension.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Workbook, ConverterError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(|extension| extension.to_ascii_lowercase())
            .unwrap_or_default();
        match extension.as_str() {
            "xlsx" | "xlsm" => {
                let spreadsheet = XlsxSpreadsheet::open(path)?;
                debug!(file = %spreadsheet.name, sheets = spreadsheet.sheets.len(), "workbook opened");
                Ok(Workbook { spreadsheet })
            }
            _ => Err(SpreadsheetError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }

    /// Opens a workbook already held in memory, e.g. an uploaded document.
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Workbook, ConverterError> {
        let spreadsheet = XlsxSpreadsheet::from_bytes("<memory>", bytes)?;
        Ok(Workbook { spreadsheet })
    }

    /// Sheet names in workbook order.
    pub fn sheet_names(&self) -> Vec<String> {
        self.spreadsheet.sheets.iter().map(|(name, _)| name.to_owned()).collect()
    }

    /// Reads the first sheet whose name equals `selector` or matches it as a
    /// glob pattern, dropping `skip_rows` leading rows.
    pub fn read_sheet(&mut self, selector: &str, skip_rows: usize) -> Result<RawTable, ConverterError> {
        self.read_matching_sheet(&Criteria::new(selector, skip_rows))
    }

    fn read_matching_sheet(&mut self, criteria: &Criteria) -> Result<RawTable, ConverterError> {
        let Some(index) = self.spreadsheet.sheets.iter().position(|(name, _)| criteria.accept(name)) else {
            return Err(SpreadsheetError::SheetNotFound {
                file: self.spreadsheet.name.to_owned(),
                selector: criteria.sheet_name.to_owned(),
                available: self.sheet_names(),
            }
            .into());
        };
        let table = self.spreadsheet.read_sheet(index, criteria)?;
        debug!(sheet = %self.spreadsheet.sheets[index].0, rows = table.row_count(), width = table.width(), "sheet read");
        Ok(table)
    }
}

/// Re-reads a converted document.
///
/// The first row of the first sheet supplies the column names; every row
/// present in the document is a record, even one without values. Blank cells
/// in the layout's date, integer and decimal columns come back as
/// [`Value::Missing`]; integer columns come back as [`Value::Integer`].
pub fn read_output(bytes: Vec<u8>, layout: &Layout) -> Result<Table, ConverterError> {
    let mut workbook = Workbook::from_bytes(bytes)?;
    let Some(sheet_name) = workbook.sheet_names().into_iter().next() else {
        return Err(SpreadsheetError::MalformedDocument {
            file: workbook.spreadsheet.name.to_owned(),
            reason: "workbook has no sheets".to_owned(),
        }
        .into());
    };
    let raw = workbook.read_matching_sheet(&Criteria::new(&sheet_name, 0).with_blank_rows())?;
    let Some((header_row, records)) = raw.rows().split_first() else {
        return Err(SpreadsheetError::MalformedDocument {
            file: workbook.spreadsheet.name.to_owned(),
            reason: format!("sheet '{sheet_name}' has no header row"),
        }
        .into());
    };

    let headers: Vec<String> = header_row.iter().map(ToString::to_string).collect();
    let mut table = Table::new(headers, records.to_vec());
    let kinds: Vec<Option<ColumnKind>> = (0..table.width()).map(|col| layout.column_kind(col)).collect();
    for row in table.rows_mut() {
        for (cell, kind) in row.iter_mut().zip(&kinds) {
            match kind {
                Some(_) if cell.is_blank() => *cell = Value::Missing,
                Some(ColumnKind::Integer) => {
                    if let Some(integer) = to_integer(cell) {
                        *cell = Value::Integer(integer);
                    }
                }
                _ => (),
            }
        }
    }
    Ok(table)
}
