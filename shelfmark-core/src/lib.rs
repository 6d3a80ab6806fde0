//! Shelfmark Core Library
//!
//! Converts library records (books and bookmarks) to and from a small XML
//! dialect. Encoding writes the XML text directly; decoding runs a dedicated
//! state machine over the reader's start/end/text events instead of building
//! a document tree.

pub mod date;
pub mod decoder;
pub mod encoder;
pub mod error;
pub mod serializer;
pub mod types;
pub mod xml;

pub use decoder::{decode_book, decode_bookmark};
pub use encoder::{encode_book, encode_bookmark};
pub use error::{DateParseError, ParseError, Result, ShelfmarkError};
pub use serializer::{Serializer, XmlSerializer};
pub use types::{
    Author, Book, BookFile, Bookmark, DateType, FileResolver, LibraryResolver, SeriesIndex,
    SeriesInfo, Tag, UrlResolver,
};
