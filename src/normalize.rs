//! # Normalization Passes
//!
//! Pure transforms over a remapped, renamed table:
//!
//! - dates: date columns (by header name) become [`Value::Date`]
//! - integers: integer columns (by position) become [`Value::Integer`]
//! - decimals: decimal columns (by position) become [`Value::Number`] rounded to 2 places
//! - status: rows with a report status get `Sample Status = "Completed"`
//!
//! A cell that cannot be coerced becomes [`Value::Missing`], or zero for
//! numeric columns under [`NumericFallback::Zero`]. Failures on non-empty
//! cells are reported as [`Warning::CoercionFailure`]; nothing here aborts.
use crate::convert::NumericFallback;
use crate::convert::Warning;
use crate::layout::ColumnKind;
use crate::layout::Layout;
use crate::table::Table;
use crate::table::Value;
use chrono::Datelike;
use chrono::NaiveDate;
use tracing::debug;

/// Literal written to the sample status of reported rows.
pub const COMPLETED: &str = "Completed";

/// Date formats accepted for the date portion of a text cell.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

/// Runs every pass in order and returns the coercion warnings.
pub fn normalize(table: &mut Table, layout: &Layout, fallback: NumericFallback) -> Vec<Warning> {
    let mut warnings = Vec::<Warning>::new();
    normalize_dates(table, layout, &mut warnings);
    normalize_integers(table, layout, fallback, &mut warnings);
    normalize_decimals(table, layout, fallback, &mut warnings);
    complete_status(table, layout);
    warnings
}

/// Parses every cell of the layout's date columns; absent columns are skipped.
pub fn normalize_dates(table: &mut Table, layout: &Layout, warnings: &mut Vec<Warning>) {
    for name in layout.date_columns() {
        if let Some(col) = table.position(name) {
            coerce_column(table, col, warnings, |value| to_date(value).map(Value::Date), Value::Missing);
        }
    }
}

/// Coerces integer columns to whole numbers, rounding fractional values.
pub fn normalize_integers(table: &mut Table, layout: &Layout, fallback: NumericFallback, warnings: &mut Vec<Warning>) {
    let default = match fallback {
        NumericFallback::Missing => Value::Missing,
        NumericFallback::Zero => Value::Integer(0),
    };
    for col in layout.positions(ColumnKind::Integer) {
        if col < table.width() {
            coerce_column(table, col, warnings, |value| to_integer(value).map(Value::Integer), default.clone());
        }
    }
}

/// Coerces decimal columns to numbers rounded to 2 decimal places.
pub fn normalize_decimals(table: &mut Table, layout: &Layout, fallback: NumericFallback, warnings: &mut Vec<Warning>) {
    let default = match fallback {
        NumericFallback::Missing => Value::Missing,
        NumericFallback::Zero => Value::Number(0.0),
    };
    for col in layout.positions(ColumnKind::Decimal) {
        if col < table.width() {
            coerce_column(
                table,
                col,
                warnings,
                |value| to_decimal(value).map(|number| Value::Number(round2(number))),
                default.clone(),
            );
        }
    }
}

/// Sets `Sample Status` to "Completed" on every row whose `Report Status`
/// is not empty; whitespace counts as a value. Rows without a report status
/// keep their sample status.
pub fn complete_status(table: &mut Table, layout: &Layout) {
    let report = table.position(layout.report_status());
    let sample = table.position(layout.sample_status());
    if let Some((report, sample)) = report.zip(sample) {
        let mut completed = 0usize;
        for row in table.rows_mut() {
            if !row[report].is_empty() {
                row[sample] = Value::Text(COMPLETED.to_owned());
                completed += 1;
            }
        }
        debug!(completed, "status completion");
    }
}

fn coerce_column<F>(table: &mut Table, col: usize, warnings: &mut Vec<Warning>, coerce: F, default: Value)
where
    F: Fn(&Value) -> Option<Value>,
{
    let column = table.headers()[col].to_owned();
    for (index, row) in table.rows_mut().iter_mut().enumerate() {
        let cell = &mut row[col];
        *cell = match coerce(cell) {
            Some(value) => value,
            None => {
                if !cell.is_blank() {
                    debug!(column = %column, row = index, value = %cell, "coercion failed");
                    warnings.push(Warning::CoercionFailure {
                        column: column.to_owned(),
                        row: index,
                        value: cell.to_string(),
                    });
                }
                default.clone()
            }
        };
    }
}

/// Date portion of a cell. Text may carry a trailing time component,
/// separated by a space or `T`, which is ignored. Dates before 1900 have no
/// spreadsheet serial and are rejected.
pub fn to_date(value: &Value) -> Option<NaiveDate> {
    let date = match value {
        Value::Date(date) => Some(*date),
        Value::DateTime(datetime) => Some(datetime.date()),
        Value::Text(text) => {
            let text = text.trim();
            let date_part = text
                .split_once(|c: char| c == ' ' || c == 'T')
                .map(|(date, _)| date)
                .unwrap_or(text);
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())
        }
        _ => None,
    }?;
    (date.year() >= 1900).then_some(date)
}

pub fn to_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Integer(integer) => Some(*integer),
        Value::Boolean(boolean) => Some(*boolean as i64),
        Value::Number(number) => float_to_integer(*number),
        Value::Text(text) => {
            let text = text.trim();
            text.parse::<i64>()
                .ok()
                .or_else(|| text.parse::<f64>().ok().and_then(float_to_integer))
        }
        _ => None,
    }
}

pub fn to_decimal(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) if number.is_finite() => Some(*number),
        Value::Integer(integer) => Some(*integer as f64),
        Value::Boolean(boolean) => Some(if *boolean { 1.0 } else { 0.0 }),
        Value::Text(text) => text.trim().parse::<f64>().ok().filter(|number| number.is_finite()),
        _ => None,
    }
}

fn float_to_integer(number: f64) -> Option<i64> {
    let rounded = number.round();
    (rounded.is_finite() && rounded.abs() < i64::MAX as f64).then_some(rounded as i64)
}

pub fn round2(number: f64) -> f64 {
    (number * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_layout() -> Layout {
        Layout::new(
            &[],
            &["Sample Status", "Report Status", "Date Reported", "Count", "Ratio"],
            &[("D", ColumnKind::Integer), ("E", ColumnKind::Decimal)],
            &["Date Reported"],
        )
        .unwrap()
    }

    fn table(rows: Vec<Vec<Value>>) -> Table {
        let layout = status_layout();
        Table::new(layout.headers().to_vec(), rows)
    }

    fn text(value: &str) -> Value {
        Value::from(value)
    }

    #[test]
    fn status_completed_when_reported() {
        let layout = status_layout();
        let mut table = table(vec![
            vec![text("Pending"), text("done")],
            vec![Value::Empty, text("x")],
            vec![text("Pending"), Value::Empty],
            vec![Value::Empty, text("")],
            vec![Value::Empty, text(" ")],
            vec![Value::Empty, Value::Missing],
        ]);
        complete_status(&mut table, &layout);

        let sample: Vec<&Value> = table.column(0).collect();
        assert_eq!(
            sample,
            vec![&text(COMPLETED), &text(COMPLETED), &text("Pending"), &Value::Empty, &text(COMPLETED), &Value::Empty]
        );
    }

    #[test]
    fn status_skipped_without_columns() {
        let layout = Layout::new(&[], &["Sample Status", "Other"], &[], &[]).unwrap();
        let mut table = Table::new(layout.headers().to_vec(), vec![vec![text("a"), text("b")]]);
        complete_status(&mut table, &layout);
        assert_eq!(table.get(0, 0), Some(&text("a")));
    }

    #[test]
    fn dates_keep_date_portion() {
        let layout = status_layout();
        let mut table = table(vec![
            vec![Value::Empty, Value::Empty, text("2024-03-05 10:00:00")],
            vec![Value::Empty, Value::Empty, text("2024-03-05T10:00:00")],
            vec![Value::Empty, Value::Empty, text("03/05/2024")],
            vec![Value::Empty, Value::Empty, text("not a date")],
            vec![Value::Empty, Value::Empty, Value::Empty],
            vec![Value::Empty, Value::Empty, text("0024-03-05")],
        ]);
        let mut warnings = Vec::new();
        normalize_dates(&mut table, &layout, &mut warnings);

        let march_fifth = Value::Date(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap());
        assert_eq!(table.get(0, 2), Some(&march_fifth));
        assert_eq!(table.get(1, 2), Some(&march_fifth));
        assert_eq!(table.get(2, 2), Some(&march_fifth));
        assert_eq!(table.get(3, 2), Some(&Value::Missing));
        assert_eq!(table.get(4, 2), Some(&Value::Missing));
        assert_eq!(table.get(5, 2), Some(&Value::Missing));
        assert_eq!(march_fifth.to_string(), "03/05/2024");
        assert_eq!(warnings.len(), 2);
        assert!(matches!(&warnings[0], Warning::CoercionFailure { row: 3, .. }));
        assert!(matches!(&warnings[1], Warning::CoercionFailure { row: 5, .. }));
    }

    #[test]
    fn integers_missing_policy() {
        let layout = status_layout();
        let row = |value: Value| vec![Value::Empty, Value::Empty, Value::Empty, value];
        let mut table = table(vec![
            row(text("42")),
            row(Value::Number(7.0)),
            row(text(" 3.6 ")),
            row(text("n/a")),
            row(Value::Empty),
        ]);
        let mut warnings = Vec::new();
        normalize_integers(&mut table, &layout, NumericFallback::Missing, &mut warnings);

        let values: Vec<&Value> = table.column(3).collect();
        assert_eq!(
            values,
            vec![&Value::Integer(42), &Value::Integer(7), &Value::Integer(4), &Value::Missing, &Value::Missing]
        );
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn integers_zero_policy() {
        let layout = status_layout();
        let mut table = table(vec![vec![Value::Empty, Value::Empty, Value::Empty, text("n/a")]]);
        normalize_integers(&mut table, &layout, NumericFallback::Zero, &mut Vec::new());
        assert_eq!(table.get(0, 3), Some(&Value::Integer(0)));
    }

    #[test]
    fn integers_idempotent() {
        let layout = status_layout();
        let row = |value: Value| vec![Value::Empty, Value::Empty, Value::Empty, value];
        let mut table = table(vec![row(text("12.2")), row(text("x")), row(Value::Integer(-3))]);
        normalize_integers(&mut table, &layout, NumericFallback::Missing, &mut Vec::new());
        let once = table.clone();
        let mut warnings = Vec::new();
        normalize_integers(&mut table, &layout, NumericFallback::Missing, &mut warnings);
        assert_eq!(table, once);
        assert!(warnings.is_empty());
    }

    #[test]
    fn decimals_round_two_places() {
        let layout = status_layout();
        let row = |value: Value| vec![Value::Empty, Value::Empty, Value::Empty, Value::Empty, value];
        let mut table = table(vec![row(Value::Number(3.14159)), row(text("2.005e1")), row(Value::Integer(2)), row(text("NaN"))]);
        let mut warnings = Vec::new();
        normalize_decimals(&mut table, &layout, NumericFallback::Missing, &mut warnings);

        let values: Vec<&Value> = table.column(4).collect();
        assert_eq!(values[0], &Value::Number(3.14));
        assert_eq!(values[1], &Value::Number(20.05));
        assert_eq!(values[2], &Value::Number(2.0));
        assert_eq!(values[3], &Value::Missing);
        assert_eq!(warnings.len(), 1);
    }

    #[test]
    fn typed_columns_beyond_table_skipped() {
        let layout = Layout::new(&[], &["a"], &[("Z", ColumnKind::Integer), ("Y", ColumnKind::Decimal)], &["Nope"])
            .unwrap();
        let mut table = Table::new(layout.headers().to_vec(), vec![vec![text("x")]]);
        let warnings = normalize(&mut table, &layout, NumericFallback::Missing);
        assert!(warnings.is_empty());
        assert_eq!(table.get(0, 0), Some(&text("x")));
    }
}
