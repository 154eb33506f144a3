//! # MobilServ Converter
//!
//! Converts Smart Assistance lubricant-analysis exports into the column
//! layout MobilServ imports.
//!
//! ## Pipeline
//!
//! - **Read**: one sheet of an `.xlsx`/`.xlsm` workbook, addressed by column
//!   position only (see [`spreadsheet::Workbook`])
//! - **Remap**: copy source columns to their destination positions and name
//!   them with the canonical MobilServ headers (see [`remap::remap`])
//! - **Normalize**: dates, integers, decimals, and sample status completion
//!   (see [`normalize::normalize`])
//! - **Write**: a single-sheet workbook with per-column number formats
//!   (see [`spreadsheet::writer::write_document`])
//!
//! [`convert::convert_file`] and [`convert::convert_document`] run the whole
//! pipeline. Rule and cell problems are returned as [`Warning`]s; only
//! unreadable documents and missing sheets fail a conversion.
pub mod convert;
pub mod error;
pub(crate) mod helpers;
pub mod layout;
pub mod normalize;
pub mod remap;
pub mod spreadsheet;
pub mod table;

pub use crate::convert::convert;
pub use crate::convert::convert_document;
pub use crate::convert::convert_file;
pub use crate::convert::ConversionSummary;
pub use crate::convert::ConvertOptions;
pub use crate::convert::ConvertedDocument;
pub use crate::convert::NumericFallback;
pub use crate::convert::Warning;
pub use crate::error::ConverterError;
pub use crate::layout::Layout;
pub use crate::spreadsheet::read_output;
pub use crate::spreadsheet::Workbook;
pub use crate::table::RawTable;
pub use crate::table::Table;
pub use crate::table::Value;
