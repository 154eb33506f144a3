use thiserror::Error;

/// Main error type for the converter.
/// Aggregates errors from the standard library, dependencies, and internal modules.
/// Every variant is fatal for the conversion request; recoverable problems are
/// reported as [`crate::convert::Warning`] instead.
#[derive(Error, Debug)]
pub enum ConverterError {
    #[error("{0}")]
    WithContextError(String),

    // Standard library errors
    #[error("{0}")]
    IoError(#[from] std::io::Error),

    #[error("{0}")]
    ParseIntError(#[from] std::num::ParseIntError),

    // Third-party library errors
    #[error("{0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("{0}")]
    XmlError(#[from] quick_xml::Error),

    #[error("{0}")]
    XmlEncodingError(#[from] quick_xml::encoding::EncodingError),

    #[error("{0}")]
    XmlAttributeError(#[from] quick_xml::events::attributes::AttrError),

    #[error("{0}")]
    XlsxWriterError(#[from] rust_xlsxwriter::XlsxError),

    // Helper module errors
    #[error("{0}")]
    XmlHelperError(#[from] crate::helpers::xml::XmlError),

    // Domain module errors
    #[error("{0}")]
    AddressError(#[from] crate::spreadsheet::reference::AddressError),

    #[error("{0}")]
    LayoutError(#[from] crate::layout::LayoutError),

    #[error("{0}")]
    SpreadsheetError(#[from] crate::spreadsheet::SpreadsheetError),
}

pub(crate) trait ResultMessage {
    fn with_prefix(self, message: &str) -> Self;
}

impl<T> ResultMessage for Result<T, ConverterError> {
    fn with_prefix(self, message: &str) -> Self {
        self.map_err(|e| ConverterError::WithContextError(format!("{}: {}", message, e)))
    }
}
