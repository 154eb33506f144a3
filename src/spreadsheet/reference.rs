//! Conversions between spreadsheet-style addresses ("A", "AA", "BD7") and
//! zero-based positions.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

static CELL_REFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\$?([A-Za-z]+)\$?(\d+)$").expect("Hardcode regex pattern"));

/// Errors related to column address decoding.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AddressError {
    #[error("Invalid column address '{0}'")]
    InvalidAddress(String),
}

/// Decodes a column address as a base-26 numeral (A=1 … Z=26, AA=27) and
/// returns the zero-based column position.
///
/// Lowercase input is accepted. Empty strings, characters outside A–Z and
/// addresses too long to fit a `usize` are rejected.
pub fn address_to_index(address: &str) -> Result<usize, AddressError> {
    let invalid = || AddressError::InvalidAddress(address.to_owned());
    if address.is_empty() {
        return Err(invalid());
    }

    let mut value = 0usize;
    for character in address.chars().map(|c| c.to_ascii_uppercase()) {
        if !character.is_ascii_uppercase() {
            return Err(invalid());
        }
        let digit = (character as usize) - ('A' as usize) + 1;
        value = value
            .checked_mul(26)
            .and_then(|value| value.checked_add(digit))
            .ok_or_else(invalid)?;
    }
    Ok(value - 1)
}

/// Encodes a zero-based column position as its column address.
pub fn index_to_address(index: usize) -> String {
    let mut column = index + 1;
    let mut address = Vec::<u8>::new();
    while column > 0 {
        column -= 1;
        address.push(b'A' + (column % 26) as u8);
        column /= 26;
    }
    address.reverse();
    String::from_utf8(address).expect("ASCII letters")
}

/// Parses a cell reference such as "BD7" into zero-based (row, col).
pub(crate) fn reference_to_index(reference: &str) -> Option<(usize, usize)> {
    let captures = CELL_REFERENCE.captures(reference)?;
    let col = address_to_index(captures.get(1)?.as_str()).ok()?;
    let row = captures.get(2)?.as_str().parse::<usize>().ok()?.checked_sub(1)?;
    Some((row, col))
}

/// Formats zero-based (row, col) as a cell reference such as "BD7".
pub(crate) fn index_to_reference(row: usize, col: usize) -> String {
    format!("{}{}", index_to_address(col), row + 1)
}
