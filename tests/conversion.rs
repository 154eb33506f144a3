use chrono::NaiveDate;
use mobilserv_converter::convert_document;
use mobilserv_converter::convert_file;
use mobilserv_converter::layout::ColumnKind;
use mobilserv_converter::read_output;
use mobilserv_converter::spreadsheet::reference::address_to_index;
use mobilserv_converter::spreadsheet::SpreadsheetError;
use mobilserv_converter::ConvertOptions;
use mobilserv_converter::ConverterError;
use mobilserv_converter::Layout;
use mobilserv_converter::NumericFallback;
use mobilserv_converter::Value;
use mobilserv_converter::Warning;
use rust_xlsxwriter::Format;
use rust_xlsxwriter::Workbook;

fn col(address: &str) -> u16 {
    address_to_index(address).unwrap() as u16
}

/// A Smart Assistance style export: a title row, then two samples.
fn smart_assistance_export() -> Vec<u8> {
    let mut workbook = Workbook::new();
    let date_format = Format::new().set_num_format("dd/mm/yyyy");
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Plantilla").unwrap();

    worksheet.write_string(0, col("A"), "Unit").unwrap();
    worksheet.write_string(0, col("E"), "Sampled").unwrap();

    worksheet.write_string(1, col("A"), "Truck 12").unwrap();
    worksheet.write_string(1, col("E"), "2024-03-05 10:00:00").unwrap();
    worksheet.write_number(1, col("I"), 17.0).unwrap();
    worksheet.write_string(1, col("Y"), "Reported").unwrap();

    worksheet.write_string(2, col("A"), "Truck 13").unwrap();
    // 2024-04-01 as a date serial
    worksheet.write_number_with_format(2, col("E"), 45383.0, &date_format).unwrap();
    worksheet.write_string(2, col("I"), "n/a").unwrap();

    workbook.save_to_buffer().unwrap()
}

fn position(layout: &Layout, header: &str) -> usize {
    layout.headers().iter().position(|name| name == header).unwrap()
}

fn destination_of(layout: &Layout, source: &str) -> usize {
    let source = address_to_index(source).unwrap();
    layout.rules().iter().find(|rule| rule.source == source).unwrap().destination
}

#[test]
fn convert_and_read_back() {
    let layout = Layout::mobilserv().unwrap();
    let options = ConvertOptions {
        skip_rows: 1,
        ..ConvertOptions::default()
    };
    let document = convert_document(smart_assistance_export(), layout, &options).unwrap();

    assert_eq!(document.summary.rows, 2);
    assert_eq!(document.summary.columns, layout.headers().len());
    assert_eq!(document.summary.coercion_failures, 1);
    assert_eq!(document.summary.rules_applied + document.summary.rules_skipped, layout.rules().len());
    assert!(document
        .warnings
        .iter()
        .any(|warning| matches!(warning, Warning::CoercionFailure { value, .. } if value == "n/a")));

    let output = read_output(document.bytes, layout).unwrap();
    assert_eq!(output.headers(), layout.headers());
    assert_eq!(output.row_count(), 2);

    let sample_status = position(layout, "Sample Status");
    assert_eq!(output.get(0, sample_status), Some(&Value::from("Completed")));
    assert_eq!(output.get(1, sample_status), Some(&Value::Empty));

    let date_sampled = position(layout, "Date Sampled");
    assert_eq!(output.get(0, date_sampled), Some(&Value::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap())));
    assert_eq!(output.get(1, date_sampled), Some(&Value::Date(NaiveDate::from_ymd_opt(2024, 4, 1).unwrap())));

    let unit = destination_of(layout, "A");
    assert_eq!(output.get(0, unit), Some(&Value::from("Truck 12")));

    let integer = destination_of(layout, "I");
    assert_eq!(layout.column_kind(integer), Some(ColumnKind::Integer));
    assert_eq!(output.get(0, integer), Some(&Value::Integer(17)));
    assert_eq!(output.get(1, integer), Some(&Value::Missing));
}

#[test]
fn zero_fallback() {
    let layout = Layout::mobilserv().unwrap();
    let options = ConvertOptions {
        skip_rows: 1,
        numeric_fallback: NumericFallback::Zero,
        ..ConvertOptions::default()
    };
    let document = convert_document(smart_assistance_export(), layout, &options).unwrap();
    let output = read_output(document.bytes, layout).unwrap();

    let integer = destination_of(layout, "I");
    assert_eq!(output.get(1, integer), Some(&Value::Integer(0)));
}

#[test]
fn trailing_unmapped_row_survives_read_back() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Plantilla").unwrap();
    worksheet.write_string(0, col("A"), "Truck 12").unwrap();
    // AZ is not a source column of any rule
    worksheet.write_string(1, col("AZ"), "ignored").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let layout = Layout::mobilserv().unwrap();
    let document = convert_document(bytes, layout, &ConvertOptions::default()).unwrap();
    assert_eq!(document.summary.rows, 2);

    let output = read_output(document.bytes, layout).unwrap();
    assert_eq!(output.row_count(), 2);
    assert_eq!(output.get(0, destination_of(layout, "A")), Some(&Value::from("Truck 12")));
    assert_eq!(output.get(1, destination_of(layout, "A")), Some(&Value::Empty));
    assert_eq!(output.get(1, destination_of(layout, "I")), Some(&Value::Missing));
}

#[test]
fn whitespace_report_status_completes_sample() {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name("Plantilla").unwrap();
    worksheet.write_string(0, col("A"), "Truck 12").unwrap();
    worksheet.write_string(0, col("Y"), " ").unwrap();
    let bytes = workbook.save_to_buffer().unwrap();

    let layout = Layout::mobilserv().unwrap();
    let document = convert_document(bytes, layout, &ConvertOptions::default()).unwrap();
    let sample_status = position(layout, "Sample Status");
    assert_eq!(document.table.get(0, sample_status), Some(&Value::from("Completed")));
}

#[test]
fn convert_file_by_path() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("export.xlsx");
    std::fs::write(&path, smart_assistance_export()).unwrap();

    let layout = Layout::mobilserv().unwrap();
    let options = ConvertOptions {
        sheet: "Plant*".to_owned(),
        ..ConvertOptions::default()
    };
    let document = convert_file(&path, layout, &options).unwrap();
    // the title row is kept as a record when no rows are skipped
    assert_eq!(document.summary.rows, 3);
}

#[test]
fn missing_sheet_is_fatal() {
    let layout = Layout::mobilserv().unwrap();
    let options = ConvertOptions {
        sheet: "Data".to_owned(),
        ..ConvertOptions::default()
    };
    let error = convert_document(smart_assistance_export(), layout, &options).err().unwrap();
    assert!(matches!(error, ConverterError::SpreadsheetError(SpreadsheetError::SheetNotFound { .. })));
}

#[test]
fn unreadable_document_is_fatal() {
    let layout = Layout::mobilserv().unwrap();
    let error = convert_document(b"PK\x03\x04 truncated".to_vec(), layout, &ConvertOptions::default())
        .err()
        .unwrap();
    assert!(matches!(error, ConverterError::SpreadsheetError(SpreadsheetError::MalformedDocument { .. })));
}

#[test]
fn missing_file_is_fatal() {
    let directory = tempfile::tempdir().unwrap();
    let layout = Layout::mobilserv().unwrap();
    let result = convert_file(directory.path().join("absent.xlsx"), layout, &ConvertOptions::default());
    assert!(result.is_err());
}
