//! Error types for Shelfmark Core

use thiserror::Error;

/// Result type alias using ShelfmarkError
pub type Result<T> = std::result::Result<T, ShelfmarkError>;

/// Top-level error type for all Shelfmark operations
#[derive(Debug, Error)]
pub enum ShelfmarkError {
    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while reading a serialized record
#[derive(Debug, Error)]
pub enum ParseError {
    #[error("Invalid XML: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("Invalid date: {0}")]
    Date(#[from] DateParseError),

    #[error("Malformed content: {0}")]
    MalformedContent(String),
}

impl From<quick_xml::events::attributes::AttrError> for ParseError {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        ParseError::Xml(quick_xml::Error::from(err))
    }
}

impl From<quick_xml::escape::EscapeError> for ParseError {
    fn from(err: quick_xml::escape::EscapeError) -> Self {
        ParseError::Xml(quick_xml::Error::from(err))
    }
}

/// A timestamp that cannot be read back
#[derive(Debug, Error)]
pub enum DateParseError {
    #[error("'{text}' is not a valid timestamp: {source}")]
    Format {
        text: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("'{text}' names an unknown time zone '{zone}'")]
    UnknownZone { text: String, zone: String },

    #[error("'{text}' is out of the supported date range")]
    OutOfRange { text: String },
}

impl DateParseError {
    /// The rejected input
    pub fn text(&self) -> &str {
        match self {
            DateParseError::Format { text, .. }
            | DateParseError::UnknownZone { text, .. }
            | DateParseError::OutOfRange { text } => text,
        }
    }
}
