use crate::spreadsheet::cell::Cell;
use crate::spreadsheet::SpreadsheetError;
use crate::table::RawTable;
use crate::table::Value;

/// Cells collected from one worksheet, in document order.
pub(crate) struct Sheet {
    /// Source file name
    pub(crate) file_name: String,
    /// Sheet name
    pub(crate) name: String,
    /// All non-empty cells in the sheet
    pub(crate) cells: Vec<Cell>,
    /// Actual data range (determined from cell data)
    pub(crate) row_lower_bound: Option<usize>,
    pub(crate) row_upper_bound: Option<usize>,
    pub(crate) col_upper_bound: Option<usize>,
}

impl Sheet {
    pub(super) fn new(file_name: &str, name: &str) -> Self {
        Self {
            file_name: file_name.to_owned(),
            name: name.to_owned(),
            cells: Vec::new(),
            row_lower_bound: None,
            row_upper_bound: None,
            col_upper_bound: None,
        }
    }

    /// Adds a cell, widening the data range to cover it.
    pub(super) fn push(&mut self, cell: Cell) {
        self.mark_row(cell.row);
        if self.col_upper_bound.map(|upper| upper < cell.col).unwrap_or(true) {
            self.col_upper_bound = Some(cell.col);
        }
        self.cells.push(cell);
    }

    /// Widens the row range to cover `row`, which may hold no values.
    pub(super) fn mark_row(&mut self, row: usize) {
        if self.row_lower_bound.map(|lower| row < lower).unwrap_or(true) {
            self.row_lower_bound = Some(row);
        }
        if self.row_upper_bound.map(|upper| upper < row).unwrap_or(true) {
            self.row_upper_bound = Some(row);
        }
    }

    /// Lays the cells out as position-addressed rows.
    ///
    /// Rows start at the first non-empty row, with `skip_rows` further rows
    /// dropped. Columns always start at column A so positions match the
    /// source document's column letters.
    pub(crate) fn into_raw_table(self, shared_strings: &[String], skip_rows: usize) -> Result<RawTable, SpreadsheetError> {
        let (Some(row_lower), Some(row_upper), Some(col_upper)) =
            (self.row_lower_bound, self.row_upper_bound, self.col_upper_bound)
        else {
            return Ok(RawTable::default());
        };

        let first_row = row_lower + skip_rows;
        let row_count = (row_upper + 1).saturating_sub(first_row);
        let mut rows = vec![vec![Value::Empty; col_upper + 1]; row_count];
        for cell in &self.cells {
            if cell.row < first_row {
                continue;
            }
            let value = cell.to_value(shared_strings).map_err(|message| SpreadsheetError::CellValueError {
                file: self.file_name.to_owned(),
                sheet: self.name.to_owned(),
                reference: cell.reference(),
                message,
            })?;
            rows[cell.row - first_row][cell.col] = value;
        }
        Ok(RawTable::new(rows))
    }
}
