//! Serializer front end

use crate::decoder::{
    decode_book, decode_bookmark, try_decode_with, BookDecoder, BookmarkDecoder,
};
use crate::encoder::{encode_book, encode_bookmark};
use crate::error::Result;
use crate::types::{Book, Bookmark, FileResolver, UrlResolver};
use std::io::Read;

/// Converts records to and from a textual form
pub trait Serializer: Send + Sync {
    fn serialize_book(&self, book: &Book) -> String;

    /// `None` when the text does not hold a valid book
    fn deserialize_book(&self, data: &str) -> Option<Book>;

    fn serialize_bookmark(&self, bookmark: &Bookmark) -> String;

    /// `None` when the text does not hold a valid bookmark
    fn deserialize_bookmark(&self, data: &str) -> Option<Bookmark>;
}

/// XML serializer
#[derive(Debug, Clone, Default)]
pub struct XmlSerializer<R = UrlResolver> {
    resolver: R,
}

impl XmlSerializer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<R: FileResolver> XmlSerializer<R> {
    /// Use `resolver` to turn book file URLs into file handles
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }

    /// Read a book document from `reader`
    ///
    /// I/O and XML syntax errors are reported; a well-formed document without
    /// a valid book is `Ok(None)`.
    pub fn read_book<Rd: Read>(&self, mut reader: Rd) -> Result<Option<Book>> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Ok(try_decode_with(BookDecoder::new(&self.resolver), &xml)?)
    }

    /// Read a bookmark document from `reader`
    pub fn read_bookmark<Rd: Read>(&self, mut reader: Rd) -> Result<Option<Bookmark>> {
        let mut xml = String::new();
        reader.read_to_string(&mut xml)?;
        Ok(try_decode_with(BookmarkDecoder::new(), &xml)?)
    }
}

impl<R: FileResolver + Send + Sync> Serializer for XmlSerializer<R> {
    fn serialize_book(&self, book: &Book) -> String {
        encode_book(book)
    }

    fn deserialize_book(&self, data: &str) -> Option<Book> {
        decode_book(data, &self.resolver)
    }

    fn serialize_bookmark(&self, bookmark: &Bookmark) -> String {
        encode_bookmark(bookmark)
    }

    fn deserialize_bookmark(&self, data: &str) -> Option<Bookmark> {
        decode_bookmark(data)
    }
}
