//! # Conversion Layout
//!
//! The static configuration of a conversion: which source column moves to
//! which destination column, the destination header row, and which
//! destination columns carry dates, integers or decimals. A [`Layout`] is
//! validated when it is built, so the remapping engine and the normalization
//! passes can rely on every address being decodable and every destination
//! being written by at most one rule.
mod mobilserv;

use crate::spreadsheet::reference::address_to_index;
use crate::spreadsheet::reference::index_to_address;
use crate::spreadsheet::reference::AddressError;
use std::collections::HashMap;
use std::sync::LazyLock;
use thiserror::Error;

static MOBILSERV: LazyLock<Result<Layout, LayoutError>> = LazyLock::new(Layout::build_mobilserv);

/// Errors raised while validating a layout. These are configuration bugs,
/// never caused by user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    #[error("{0}")]
    InvalidAddress(#[from] AddressError),

    #[error("Destination column '{destination}' is written by both '{first}' and '{second}'")]
    DuplicateDestination {
        destination: String,
        first: String,
        second: String,
    },

    #[error("Column '{address}' is classified as both {first} and {second}")]
    ConflictingColumnKind {
        address: String,
        first: ColumnKind,
        second: ColumnKind,
    },

    #[error("Layout has no destination headers")]
    EmptyHeaders,
}

/// Coercion applied to a destination column after remapping.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnKind {
    Date,
    Integer,
    Decimal,
}

impl std::fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Date => "date",
            Self::Integer => "integer",
            Self::Decimal => "decimal",
        })
    }
}

/// Copies a whole source column to a destination column.
#[derive(Clone, Debug, PartialEq)]
pub struct MoveRule {
    pub source_address: String,
    pub destination_address: String,
    pub source: usize,
    pub destination: usize,
}

impl MoveRule {
    pub fn new(source_address: &str, destination_address: &str) -> Result<Self, AddressError> {
        Ok(Self {
            source: address_to_index(source_address)?,
            destination: address_to_index(destination_address)?,
            source_address: source_address.to_ascii_uppercase(),
            destination_address: destination_address.to_ascii_uppercase(),
        })
    }
}

/// A validated conversion layout.
#[derive(Clone, Debug)]
pub struct Layout {
    rules: Vec<MoveRule>,
    headers: Vec<String>,
    /// Typed destination columns, keyed by position.
    kinds: HashMap<usize, ColumnKind>,
    /// Date columns are located by header name after renaming.
    date_columns: Vec<String>,
    report_status: String,
    sample_status: String,
}

impl Layout {
    /// Builds and validates a layout.
    ///
    /// # Arguments
    /// * `moves` - (source, destination) address pairs
    /// * `headers` - destination header row, column A first
    /// * `typed_columns` - (destination address, kind) pairs for integer and decimal columns
    /// * `date_columns` - header names of date columns
    pub fn new(
        moves: &[(&str, &str)],
        headers: &[&str],
        typed_columns: &[(&str, ColumnKind)],
        date_columns: &[&str],
    ) -> Result<Self, LayoutError> {
        if headers.is_empty() {
            return Err(LayoutError::EmptyHeaders);
        }

        let mut rules = Vec::<MoveRule>::with_capacity(moves.len());
        let mut writers = HashMap::<usize, String>::new();
        for (source, destination) in moves {
            let rule = MoveRule::new(source, destination)?;
            if let Some(first) = writers.insert(rule.destination, rule.source_address.to_owned()) {
                return Err(LayoutError::DuplicateDestination {
                    destination: rule.destination_address,
                    first,
                    second: rule.source_address,
                });
            }
            rules.push(rule);
        }

        let mut kinds = HashMap::<usize, ColumnKind>::new();
        for (address, kind) in typed_columns {
            let position = address_to_index(address)?;
            match kinds.insert(position, *kind) {
                Some(first) if first != *kind => {
                    return Err(LayoutError::ConflictingColumnKind {
                        address: address.to_ascii_uppercase(),
                        first,
                        second: *kind,
                    })
                }
                _ => (),
            }
        }

        Ok(Self {
            rules,
            headers: headers.iter().map(|header| header.to_string()).collect(),
            kinds,
            date_columns: date_columns.iter().map(|name| name.to_string()).collect(),
            report_status: mobilserv::REPORT_STATUS.to_owned(),
            sample_status: mobilserv::SAMPLE_STATUS.to_owned(),
        })
    }

    /// The built-in Smart Assistance → MobilServ layout, validated once per process.
    pub fn mobilserv() -> Result<&'static Layout, LayoutError> {
        MOBILSERV.as_ref().map_err(Clone::clone)
    }

    fn build_mobilserv() -> Result<Layout, LayoutError> {
        let moves: Vec<(&str, &str)> = [mobilserv::SAMPLE_MOVES, mobilserv::ELEMENT_MOVES, mobilserv::ANALYSIS_MOVES]
            .concat();
        let typed: Vec<(&str, ColumnKind)> = mobilserv::INTEGER_COLUMNS
            .iter()
            .map(|address| (*address, ColumnKind::Integer))
            .chain(mobilserv::DECIMAL_COLUMNS.iter().map(|address| (*address, ColumnKind::Decimal)))
            .collect();
        Layout::new(&moves, mobilserv::HEADERS, &typed, mobilserv::DATE_COLUMNS)
    }

    pub fn rules(&self) -> &[MoveRule] {
        &self.rules
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn date_columns(&self) -> &[String] {
        &self.date_columns
    }

    pub fn report_status(&self) -> &str {
        &self.report_status
    }

    pub fn sample_status(&self) -> &str {
        &self.sample_status
    }

    /// Positions classified as `kind`, in ascending order.
    pub fn positions(&self, kind: ColumnKind) -> Vec<usize> {
        let mut positions: Vec<usize> = self
            .kinds
            .iter()
            .filter(|(_, k)| **k == kind)
            .map(|(position, _)| *position)
            .collect();
        positions.sort_unstable();
        positions
    }

    /// Kind of the destination column at `position`.
    ///
    /// Integer and decimal columns are keyed by position; date columns by
    /// the header name at that position.
    pub fn column_kind(&self, position: usize) -> Option<ColumnKind> {
        self.kinds.get(&position).copied().or_else(|| {
            let header = self.headers.get(position)?;
            self.date_columns
                .iter()
                .any(|name| name == header)
                .then_some(ColumnKind::Date)
        })
    }

    /// Destination address and header name for a position.
    pub fn describe(&self, position: usize) -> (String, Option<&str>) {
        (index_to_address(position), self.headers.get(position).map(String::as_str))
    }
}
