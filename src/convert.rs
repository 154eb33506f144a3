//! # Conversion Pipeline
//!
//! raw input table → remapped, renamed table → normalized table → xlsx bytes.
//!
//! Per-rule and per-cell problems never stop a conversion; they are returned
//! as [`Warning`]s next to the result. Only structural failures (unreadable
//! document, missing sheet, invalid layout) are errors, and no output bytes
//! exist for a failed conversion.
use crate::error::ConverterError;
use crate::layout::Layout;
use crate::normalize::normalize;
use crate::remap::remap;
use crate::spreadsheet::writer::write_document;
use crate::spreadsheet::writer::DEFAULT_SHEET_NAME;
use crate::spreadsheet::Workbook;
use crate::table::RawTable;
use crate::table::Table;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use tracing::info;

/// Default input sheet of Smart Assistance exports.
pub const DEFAULT_INPUT_SHEET: &str = "Plantilla";

/// Non-fatal problem found during a conversion.
#[derive(Clone, Debug, PartialEq)]
pub enum Warning {
    /// A rule's source column lies beyond the input's width; its destination
    /// column is empty in every row.
    SourceColumnMissing { source: String, destination: String },
    /// A non-empty cell in a typed column could not be coerced.
    CoercionFailure { column: String, row: usize, value: String },
}

impl Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::SourceColumnMissing { source, destination } => {
                write!(f, "source column {source} not found in input, destination {destination} left empty")
            }
            Warning::CoercionFailure { column, row, value } => {
                write!(f, "'{value}' in column '{column}' (row {}) could not be converted", row + 1)
            }
        }
    }
}

/// What an integer or decimal cell becomes when it cannot be coerced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NumericFallback {
    /// The missing marker, written as a blank cell.
    #[default]
    Missing,
    /// Zero.
    Zero,
}

impl FromStr for NumericFallback {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.to_ascii_lowercase().as_str() {
            "missing" => Ok(Self::Missing),
            "zero" => Ok(Self::Zero),
            _ => Err(format!("unknown numeric fallback '{value}', expected 'missing' or 'zero'")),
        }
    }
}

/// Options of a single conversion request.
#[derive(Clone, Debug, PartialEq)]
pub struct ConvertOptions {
    /// Input sheet name or glob pattern.
    pub sheet: String,
    /// Leading input rows dropped before remapping.
    pub skip_rows: usize,
    pub numeric_fallback: NumericFallback,
    /// Sheet name of the output document.
    pub output_sheet: String,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            sheet: DEFAULT_INPUT_SHEET.to_owned(),
            skip_rows: 0,
            numeric_fallback: NumericFallback::default(),
            output_sheet: DEFAULT_SHEET_NAME.to_owned(),
        }
    }
}

/// A converted table with the warnings collected on the way.
#[derive(Clone, Debug, PartialEq)]
pub struct Conversion {
    pub table: Table,
    pub warnings: Vec<Warning>,
}

/// Processing statistics of a conversion.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct ConversionSummary {
    pub rows: usize,
    pub columns: usize,
    pub rules_applied: usize,
    pub rules_skipped: usize,
    pub coercion_failures: usize,
}

impl ConversionSummary {
    fn new(conversion: &Conversion, layout: &Layout) -> Self {
        let rules_skipped = conversion
            .warnings
            .iter()
            .filter(|warning| matches!(warning, Warning::SourceColumnMissing { .. }))
            .count();
        Self {
            rows: conversion.table.row_count(),
            columns: conversion.table.width(),
            rules_applied: layout.rules().len() - rules_skipped,
            rules_skipped,
            coercion_failures: conversion.warnings.len() - rules_skipped,
        }
    }
}

/// A finished conversion, serialized.
#[derive(Clone, Debug)]
pub struct ConvertedDocument {
    pub bytes: Vec<u8>,
    pub summary: ConversionSummary,
    pub warnings: Vec<Warning>,
    /// The converted table, for previews.
    pub table: Table,
}

/// Remaps and normalizes a raw input table.
pub fn convert(raw: &RawTable, layout: &Layout, options: &ConvertOptions) -> Conversion {
    let (mut table, mut warnings) = remap(raw, layout);
    info!(rows = table.row_count(), columns = table.width(), skipped = warnings.len(), "remapped");
    let coercion_warnings = normalize(&mut table, layout, options.numeric_fallback);
    info!(failures = coercion_warnings.len(), fallback = ?options.numeric_fallback, "normalized");
    warnings.extend(coercion_warnings);
    Conversion { table, warnings }
}

/// Converts an uploaded document held in memory.
pub fn convert_document(bytes: Vec<u8>, layout: &Layout, options: &ConvertOptions) -> Result<ConvertedDocument, ConverterError> {
    let workbook = Workbook::from_bytes(bytes)?;
    convert_workbook(workbook, layout, options)
}

/// Converts a workbook file. Nothing is written to disk.
pub fn convert_file<P: AsRef<Path>>(path: P, layout: &Layout, options: &ConvertOptions) -> Result<ConvertedDocument, ConverterError> {
    let workbook = Workbook::open(path)?;
    convert_workbook(workbook, layout, options)
}

fn convert_workbook(mut workbook: Workbook, layout: &Layout, options: &ConvertOptions) -> Result<ConvertedDocument, ConverterError> {
    let raw = workbook.read_sheet(&options.sheet, options.skip_rows)?;
    info!(sheet = %options.sheet, rows = raw.row_count(), width = raw.width(), "input read");
    let conversion = convert(&raw, layout, options);
    let bytes = write_document(&conversion.table, layout, &options.output_sheet)?;
    let summary = ConversionSummary::new(&conversion, layout);
    info!(bytes = bytes.len(), rows = summary.rows, columns = summary.columns, "document written");
    Ok(ConvertedDocument {
        bytes,
        summary,
        warnings: conversion.warnings,
        table: conversion.table,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::COMPLETED;
    use crate::spreadsheet::read_output;
    use crate::spreadsheet::reference::address_to_index;
    use crate::table::Value;
    use chrono::NaiveDate;
    use rust_xlsxwriter::Workbook as XlsxWorkbook;

    fn row(cells: &[(&str, Value)]) -> Vec<Value> {
        let width = cells.iter().map(|(address, _)| address_to_index(address).unwrap() + 1).max().unwrap_or(0);
        let mut row = vec![Value::Empty; width];
        for (address, value) in cells {
            row[address_to_index(address).unwrap()] = value.clone();
        }
        row
    }

    #[test]
    fn end_to_end_single_row() {
        let layout = Layout::mobilserv().unwrap();
        let raw = RawTable::new(vec![row(&[("A", Value::from("X")), ("Y", Value::from("done"))])]);
        let conversion = convert(&raw, layout, &ConvertOptions::default());
        let table = &conversion.table;

        assert_eq!(table.width(), layout.headers().len());
        assert_eq!(table.get(0, 22), Some(&Value::from("X")));
        assert_eq!(table.get(0, 1), Some(&Value::from("done")));
        assert_eq!(table.headers()[1], "Report Status");
        assert_eq!(table.headers()[0], "Sample Status");
        assert_eq!(table.get(0, 0), Some(&Value::from(COMPLETED)));
        // the input is only 25 columns wide
        assert!(conversion.warnings.iter().any(|warning| matches!(warning, Warning::SourceColumnMissing { .. })));
    }

    #[test]
    fn date_column_normalized() {
        let layout = Layout::mobilserv().unwrap();
        let position = layout.headers().iter().position(|header| header == "Date Sampled").unwrap();
        let source = layout.rules().iter().find(|rule| rule.destination == position).unwrap();
        let raw = RawTable::new(vec![row(&[(source.source_address.as_str(), Value::from("2024-03-05 10:00:00"))])]);
        let conversion = convert(&raw, layout, &ConvertOptions::default());

        let value = conversion.table.get(0, position).unwrap();
        assert_eq!(value, &Value::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap()));
        assert_eq!(value.to_string(), "03/05/2024");
    }

    #[test]
    fn summary_counts() {
        let layout = Layout::new(
            &[("A", "A"), ("B", "B"), ("Z", "C")],
            &["Name", "Count", "Other"],
            &[("B", crate::layout::ColumnKind::Integer)],
            &[],
        )
        .unwrap();
        let raw = RawTable::new(vec![
            vec![Value::from("a"), Value::from("1")],
            vec![Value::from("b"), Value::from("one")],
        ]);
        let conversion = convert(&raw, &layout, &ConvertOptions::default());
        let summary = ConversionSummary::new(&conversion, &layout);

        assert_eq!(
            summary,
            ConversionSummary {
                rows: 2,
                columns: 3,
                rules_applied: 2,
                rules_skipped: 1,
                coercion_failures: 1,
            }
        );
        assert_eq!(conversion.warnings[0].to_string(), "source column Z not found in input, destination C left empty");
        assert_eq!(conversion.warnings[1].to_string(), "'one' in column 'Count' (row 2) could not be converted");
    }

    #[test]
    fn numeric_fallback_from_str() {
        assert_eq!("missing".parse::<NumericFallback>(), Ok(NumericFallback::Missing));
        assert_eq!("Zero".parse::<NumericFallback>(), Ok(NumericFallback::Zero));
        assert!("none".parse::<NumericFallback>().is_err());
    }

    #[test]
    fn document_round_trip() {
        let layout = Layout::mobilserv().unwrap();
        let mut workbook = XlsxWorkbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(DEFAULT_INPUT_SHEET).unwrap();
        worksheet.write_string(0, 0, "S-1").unwrap();
        worksheet.write_string(0, 24, "reported").unwrap();
        worksheet.write_string(1, 0, "S-2").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();

        let document = convert_document(bytes, layout, &ConvertOptions::default()).unwrap();
        assert_eq!(document.summary.rows, 2);
        assert_eq!(document.summary.columns, layout.headers().len());

        let output = read_output(document.bytes, layout).unwrap();
        assert_eq!(output.headers(), layout.headers());
        assert_eq!(output.row_count(), 2);
        assert_eq!(output.get(0, 0), Some(&Value::from(COMPLETED)));
        assert_eq!(output.get(1, 0), Some(&Value::Empty));
    }

    #[test]
    fn document_sheet_not_found() {
        let mut workbook = XlsxWorkbook::new();
        workbook.add_worksheet().set_name("Sheet1").unwrap();
        let bytes = workbook.save_to_buffer().unwrap();
        let error = convert_document(bytes, Layout::mobilserv().unwrap(), &ConvertOptions::default()).err().unwrap();
        assert!(matches!(
            error,
            ConverterError::SpreadsheetError(crate::spreadsheet::SpreadsheetError::SheetNotFound { .. })
        ));
    }
}
