//! In-memory tables passed between the pipeline stages.

use chrono::NaiveDate;
use chrono::NaiveDateTime;
use std::fmt::Display;

/// A single cell value.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Value {
    /// No value in the source.
    #[default]
    Empty,
    /// A typed cell whose value could not be coerced.
    Missing,
    Text(String),
    Number(f64),
    Integer(i64),
    Boolean(bool),
    Date(NaiveDate),
    DateTime(NaiveDateTime),
}

impl Value {
    /// True for `Empty`, `Missing` and whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Empty | Value::Missing => true,
            Value::Text(text) => text.trim().is_empty(),
            _ => false,
        }
    }

    /// True for `Empty`, `Missing` and the empty string only.
    pub fn is_empty(&self) -> bool {
        match self {
            Value::Empty | Value::Missing => true,
            Value::Text(text) => text.is_empty(),
            _ => false,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Empty | Value::Missing => Ok(()),
            Value::Text(text) => write!(f, "{text}"),
            Value::Number(number) => write!(f, "{number}"),
            Value::Integer(integer) => write!(f, "{integer}"),
            Value::Boolean(boolean) => write!(f, "{}", if *boolean { "TRUE" } else { "FALSE" }),
            Value::Date(date) => write!(f, "{}", date.format("%m/%d/%Y")),
            Value::DateTime(datetime) => write!(f, "{}", datetime.format("%m/%d/%Y %H:%M:%S")),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

/// Position-addressed input rows. Rows may be ragged; cells past the end of
/// a row read as [`Value::Empty`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<Vec<Value>>,
    width: usize,
}

impl RawTable {
    pub fn new(rows: Vec<Vec<Value>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Number of columns, counted from column A to the right-most cell.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn get(&self, row: usize, col: usize) -> &Value {
        static EMPTY: Value = Value::Empty;
        self.rows
            .get(row)
            .and_then(|record| record.get(col))
            .unwrap_or(&EMPTY)
    }
}

/// Rows under named columns. Every row holds exactly `headers.len()` cells.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Builds a table, padding or truncating every row to the header count.
    pub fn new(headers: Vec<String>, mut rows: Vec<Vec<Value>>) -> Self {
        let width = headers.len();
        for row in &mut rows {
            row.resize(width, Value::Empty);
        }
        Self { headers, rows }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn width(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Position of the first column with the given name.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&Value> {
        self.rows.get(row)?.get(col)
    }

    pub fn column(&self, col: usize) -> impl Iterator<Item = &Value> + '_ {
        self.rows.iter().filter_map(move |row| row.get(col))
    }

    pub(crate) fn rows_mut(&mut self) -> &mut [Vec<Value>] {
        &mut self.rows
    }
}
