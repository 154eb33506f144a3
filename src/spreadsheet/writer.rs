//! Serialization of a converted table to an xlsx document.

use crate::error::ConverterError;
use crate::layout::ColumnKind;
use crate::layout::Layout;
use crate::spreadsheet::cell::date_to_serial;
use crate::spreadsheet::cell::datetime_to_serial;
use crate::table::Table;
use crate::table::Value;
use chrono::Datelike;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::Workbook;
use rust_xlsxwriter::Worksheet;
use rust_xlsxwriter::XlsxError;

/// Sheet name of the converted document.
pub const DEFAULT_SHEET_NAME: &str = "MobilServ_Data";

pub const DATE_FORMAT: &str = "mm/dd/yyyy";
pub const DATETIME_FORMAT: &str = "mm/dd/yyyy hh:mm:ss";
pub const INTEGER_FORMAT: &str = "0";
pub const DECIMAL_FORMAT: &str = "0.00";

/// Number formats applied while writing cells.
struct Formats {
    date: Format,
    datetime: Format,
    integer: Format,
    decimal: Format,
    blank: Format,
}

impl Formats {
    fn new() -> Self {
        Self {
            date: Format::new().set_num_format(DATE_FORMAT),
            datetime: Format::new().set_num_format(DATETIME_FORMAT),
            integer: Format::new().set_num_format(INTEGER_FORMAT),
            decimal: Format::new().set_num_format(DECIMAL_FORMAT),
            blank: Format::new(),
        }
    }

    /// Format every cell of a typed column carries.
    fn of(&self, kind: ColumnKind) -> &Format {
        match kind {
            ColumnKind::Date => &self.date,
            ColumnKind::Integer => &self.integer,
            ColumnKind::Decimal => &self.decimal,
        }
    }
}

/// Writes `table` as a single-sheet workbook: the header row, then one row
/// per record.
///
/// Dates use `mm/dd/yyyy` in any column; integer and decimal columns of
/// `layout` use `0` and `0.00`. Blank cells of date, integer and decimal
/// columns are written as formatted blanks, so every record keeps its row.
pub fn write_document(table: &Table, layout: &Layout, sheet_name: &str) -> Result<Vec<u8>, ConverterError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name)?;

    let kinds: Vec<Option<ColumnKind>> = (0..table.width()).map(|col| layout.column_kind(col)).collect();
    for (col, header) in table.headers().iter().enumerate() {
        worksheet.write_string(0, to_col(col)?, header)?;
    }
    for (index, record) in table.rows().iter().enumerate() {
        let row = to_row(index + 1)?;
        let mut written = false;
        for (col, value) in record.iter().enumerate() {
            written |= write_cell(worksheet, row, to_col(col)?, value, kinds[col], &formats)?;
        }
        if !written && !record.is_empty() {
            // a record without any cell would not exist when read back
            worksheet.write_blank(row, 0, &formats.blank)?;
        }
    }

    Ok(workbook.save_to_buffer()?)
}

/// Writes one cell; returns false when nothing was written.
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &Value,
    kind: Option<ColumnKind>,
    formats: &Formats,
) -> Result<bool, XlsxError> {
    let format = kind.map(|kind| formats.of(kind));
    match (value, format) {
        (Value::Empty | Value::Missing, None) => return Ok(false),
        (Value::Text(text), None) if text.is_empty() => return Ok(false),
        (Value::Empty | Value::Missing, Some(format)) => {
            worksheet.write_blank(row, col, format)?;
        }
        (Value::Text(text), Some(format)) if text.is_empty() => {
            worksheet.write_blank(row, col, format)?;
        }
        (Value::Text(text), None) => {
            worksheet.write_string(row, col, text)?;
        }
        (Value::Text(text), Some(format)) => {
            worksheet.write_string_with_format(row, col, text, format)?;
        }
        (Value::Boolean(boolean), _) => {
            worksheet.write_boolean(row, col, *boolean)?;
        }
        // serials start at 1900-01-01
        (Value::Date(date), _) if date.year() < 1900 => {
            worksheet.write_string(row, col, value.to_string())?;
        }
        (Value::DateTime(datetime), _) if datetime.year() < 1900 => {
            worksheet.write_string(row, col, value.to_string())?;
        }
        (Value::Date(date), _) => {
            worksheet.write_number_with_format(row, col, date_to_serial(*date), &formats.date)?;
        }
        (Value::DateTime(datetime), _) => {
            worksheet.write_number_with_format(row, col, datetime_to_serial(*datetime), &formats.datetime)?;
        }
        (Value::Integer(integer), format) => write_number(worksheet, row, col, *integer as f64, format)?,
        (Value::Number(number), format) => write_number(worksheet, row, col, *number, format)?,
    }
    Ok(true)
}

fn write_number(worksheet: &mut Worksheet, row: u32, col: u16, number: f64, format: Option<&Format>) -> Result<(), XlsxError> {
    match format {
        Some(format) => worksheet.write_number_with_format(row, col, number, format)?,
        None => worksheet.write_number(row, col, number)?,
    };
    Ok(())
}

fn to_row(index: usize) -> Result<u32, ConverterError> {
    u32::try_from(index).map_err(|_| ConverterError::WithContextError(format!("row {index} exceeds the sheet limit")))
}

fn to_col(index: usize) -> Result<u16, ConverterError> {
    u16::try_from(index).map_err(|_| ConverterError::WithContextError(format!("column {index} exceeds the sheet limit")))
}
