use crate::spreadsheet::reference::index_to_reference;
use crate::table::Value;
use chrono::Duration;
use chrono::NaiveDate;
use chrono::NaiveDateTime;
use chrono::Timelike;

/// Types of cell data in workbook parts.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub(crate) enum CellType {
    #[default]
    Empty,
    /// Boolean values (true/false)
    Boolean,
    /// Numeric values
    Number,
    /// Date/time values stored as numbers from 1900 epoch
    NumberDateTime1900,
    /// Date values stored as numbers from 1900 epoch
    NumberDate1900,
    /// Time values stored as numbers from 1900 epoch
    NumberTime1900,
    /// Date/time values stored as numbers from 1904 epoch
    NumberDateTime1904,
    /// Date values stored as numbers from 1904 epoch
    NumberDate1904,
    /// Time values stored as numbers from 1904 epoch
    NumberTime1904,
    /// ISO 8601 date/time strings
    IsoDateTime,
    /// Inline string values
    InlineString,
    /// Shared string table references
    SharedString,
}

impl CellType {
    /// Parses built-in number format IDs to determine cell type.
    pub(crate) fn parse_builtin_number_format_id(id: &str, is_1904: bool) -> Option<Self> {
        match id {
            "22" => Some(if is_1904 { Self::NumberDateTime1904 } else { Self::NumberDateTime1900 }),
            "14" | "15" | "16" | "17" => Some(if is_1904 { Self::NumberDate1904 } else { Self::NumberDate1900 }),
            "18" | "19" | "20" | "21" | "45" | "46" | "47" => Some(if is_1904 { Self::NumberTime1904 } else { Self::NumberTime1900 }),
            _ => None,
        }
    }

    /// Parses custom number format strings to determine cell type.
    /// Quoted literals, escapes and bracketed sections (colors, locales) are skipped.
    pub(crate) fn parse_custom_number_format(format: &str, is_1904: bool) -> Self {
        let mut is_escaped = false;
        let mut is_literal = false;
        let mut is_bracket = false;
        let mut is_date = false;
        let mut is_time = false;
        for character in format.chars() {
            match character {
                _ if is_escaped => is_escaped = false,
                '_' | '\\' => is_escaped = true,

                '"' if is_literal => is_literal = false,
                '"' if !is_bracket => is_literal = true,

                ']' if is_bracket => is_bracket = false,
                '[' if !is_literal => is_bracket = true,
                _ if is_literal || is_bracket => (),

                'Y' | 'y' | 'D' | 'd' => is_date = true,
                'H' | 'h' | 'S' | 's' => is_time = true,
                _ => (),
            }
        }

        match (is_date, is_time, is_1904) {
            (true, true, false) => Self::NumberDateTime1900,
            (true, true, true) => Self::NumberDateTime1904,
            (true, false, false) => Self::NumberDate1900,
            (true, false, true) => Self::NumberDate1904,
            (false, true, false) => Self::NumberTime1900,
            (false, true, true) => Self::NumberTime1904,
            (false, false, _) => Self::Number,
        }
    }

    fn is_1904(&self) -> bool {
        matches!(self, Self::NumberDateTime1904 | Self::NumberDate1904 | Self::NumberTime1904)
    }
}

/// A single non-empty cell read from a worksheet.
#[derive(Clone, Debug)]
pub(crate) struct Cell {
    /// Row index (0-based)
    pub(crate) row: usize,
    /// Column index (0-based)
    pub(crate) col: usize,
    /// Cell data type
    pub(crate) kind: CellType,
    /// Raw cell value
    pub(crate) value: String,
}

impl Cell {
    /// Returns the cell reference (e.g., "A1", "B2").
    pub(crate) fn reference(&self) -> String {
        index_to_reference(self.row, self.col)
    }

    /// Converts the raw value to a table value.
    ///
    /// Shared strings resolve against `shared_strings`; date-formatted
    /// numbers become dates or date-times. Values that cannot be read back
    /// fall back to text so no input is silently dropped.
    pub(crate) fn to_value(&self, shared_strings: &[String]) -> Result<Value, String> {
        let value = match self.kind {
            CellType::Empty => Value::Empty,
            CellType::Boolean => Value::Boolean(self.value == "1" || self.value.eq_ignore_ascii_case("true")),
            CellType::InlineString => Value::Text(self.value.to_owned()),
            CellType::SharedString => {
                let index = self.value.parse::<usize>()
                    .map_err(|_| format!("invalid shared string index '{}' at {}", self.value, self.reference()))?;
                let text = shared_strings.get(index)
                    .ok_or_else(|| format!("shared string {} out of range at {}", index, self.reference()))?;
                Value::Text(text.to_owned())
            }
            CellType::Number => self.to_double().map(Value::Number).unwrap_or_else(|_| self.to_text()),
            CellType::NumberDate1900 | CellType::NumberDate1904 => {
                match self.to_double().ok().and_then(|serial| serial_to_datetime(serial, self.kind.is_1904())) {
                    Some(datetime) => Value::Date(datetime.date()),
                    None => self.to_text(),
                }
            }
            CellType::NumberDateTime1900 | CellType::NumberDateTime1904 => {
                match self.to_double().ok().and_then(|serial| serial_to_datetime(serial, self.kind.is_1904())) {
                    Some(datetime) => Value::DateTime(datetime),
                    None => self.to_text(),
                }
            }
            CellType::NumberTime1900 | CellType::NumberTime1904 => {
                match self.to_double().ok().and_then(|serial| serial_to_datetime(serial.fract(), false)) {
                    Some(datetime) => Value::Text(datetime.time().format("%H:%M:%S").to_string()),
                    None => self.to_text(),
                }
            }
            CellType::IsoDateTime => {
                if self.value.contains('T') {
                    NaiveDateTime::parse_from_str(&self.value, "%Y-%m-%dT%H:%M:%S%.f")
                        .map(Value::DateTime)
                        .unwrap_or_else(|_| self.to_text())
                } else {
                    NaiveDate::parse_from_str(&self.value, "%Y-%m-%d")
                        .map(Value::Date)
                        .unwrap_or_else(|_| self.to_text())
                }
            }
        };
        Ok(value)
    }

    fn to_double(&self) -> Result<f64, String> {
        self.value.trim().parse::<f64>().map_err(|_| format!("parse '{}' to double failed", self.value))
    }

    fn to_text(&self) -> Value {
        Value::Text(self.value.to_owned())
    }
}

/// Day zero of the 1900 date system, as Excel counts it.
fn epoch_1900() -> NaiveDate {
    NaiveDate::from_ymd_opt(1899, 12, 30).expect("NaiveDate Literal")
}

/// Converts a serial day number to a date-time.
/// Serials below 60 are shifted by one day for the Lotus 1-2-3 leap year bug.
pub(crate) fn serial_to_datetime(serial: f64, is_1904: bool) -> Option<NaiveDateTime> {
    if !serial.is_finite() || serial < 0.0 || serial > 2_958_465.0 {
        return None;
    }
    let days = serial.trunc() as i64;
    let offset = if is_1904 {
        1462
    } else if days < 60 {
        1
    } else {
        0
    };
    let milliseconds = (serial.fract() * 86_400_000f64).round() as i64;
    let midnight = epoch_1900().checked_add_signed(Duration::days(days + offset))?.and_hms_opt(0, 0, 0)?;
    midnight.checked_add_signed(Duration::milliseconds(milliseconds))
}

/// Converts a date to its 1900-system serial day number.
pub(crate) fn date_to_serial(date: NaiveDate) -> f64 {
    let days = (date - epoch_1900()).num_days();
    // 1900-02-29 does not exist but owns serial 60
    (if days <= 60 { days - 1 } else { days }) as f64
}

/// Converts a date-time to its 1900-system serial number.
pub(crate) fn datetime_to_serial(datetime: NaiveDateTime) -> f64 {
    let time = datetime.time();
    let milliseconds = time.num_seconds_from_midnight() as f64 * 1_000f64 + (time.nanosecond() / 1_000_000) as f64;
    date_to_serial(datetime.date()) + milliseconds / 86_400_000f64
}
