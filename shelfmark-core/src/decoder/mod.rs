//! Decoders rebuilding records from their XML form
//!
//! Each decoder is a state machine fed by [`read_document`]. A decoder
//! handles exactly one document and hands out its record only after the
//! document ended cleanly.

mod book;
mod bookmark;

pub use book::{BookDecoder, BookState};
pub use bookmark::{BookmarkDecoder, BookmarkState};

use crate::error::ParseError;
use crate::types::{Book, Bookmark, FileResolver};
use crate::xml::{read_document, ReadOutcome, XmlHandler};

/// A state machine that turns one document into one record
pub trait RecordDecoder: XmlHandler {
    /// The record produced
    type Record;

    /// Record kind, for log messages
    const KIND: &'static str;

    /// The decoded record, if the document was complete and valid
    fn into_result(self) -> Option<Self::Record>;
}

/// Run `decoder` over `xml`
///
/// Reader errors are returned; a rejected or incomplete document is
/// `Ok(None)`.
pub fn try_decode_with<D: RecordDecoder>(
    mut decoder: D,
    xml: &str,
) -> Result<Option<D::Record>, ParseError> {
    match read_document(xml, &mut decoder)? {
        ReadOutcome::Completed => Ok(decoder.into_result()),
        ReadOutcome::Rejected => {
            tracing::debug!("Rejected {} document", D::KIND);
            Ok(None)
        }
    }
}

/// Run `decoder` over `xml`, turning every failure into `None`
pub fn decode_with<D: RecordDecoder>(decoder: D, xml: &str) -> Option<D::Record> {
    match try_decode_with(decoder, xml) {
        Ok(Some(record)) => Some(record),
        Ok(None) => {
            tracing::debug!("No valid {} in document", D::KIND);
            None
        }
        Err(e) => {
            tracing::debug!("Failed to read {} document: {}", D::KIND, e);
            None
        }
    }
}

/// Decode a book, resolving its file URL with `resolver`
pub fn decode_book<R: FileResolver + ?Sized>(xml: &str, resolver: &R) -> Option<Book> {
    decode_with(BookDecoder::new(resolver), xml)
}

/// Decode a bookmark
pub fn decode_bookmark(xml: &str) -> Option<Bookmark> {
    decode_with(BookmarkDecoder::new(), xml)
}
