//! CLI command implementations

mod batch;
mod decode;
mod encode;
mod validate;

pub use batch::batch;
pub use decode::decode;
pub use encode::encode;
pub use validate::validate;

use anyhow::{bail, Context, Result};
use clap::ValueEnum;
use serde::Serialize;
use shelfmark_core::types::{Book, BookFile, Bookmark, FileResolver, LibraryResolver, UrlResolver};
use shelfmark_core::xml::{read_document, Attributes, ElementAction, XmlHandler};
use shelfmark_core::XmlSerializer;
use std::fmt;
use std::fs;
use std::path::Path;

/// Kind of record a document holds
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RecordKind {
    Book,
    Bookmark,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Book => f.write_str("book"),
            RecordKind::Bookmark => f.write_str("bookmark"),
        }
    }
}

/// Record kind as given on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Auto,
    Book,
    Bookmark,
}

/// A decoded record of either kind
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Record {
    Book(Book),
    Bookmark(Bookmark),
}

impl Record {
    pub fn kind(&self) -> RecordKind {
        match self {
            Record::Book(_) => RecordKind::Book,
            Record::Bookmark(_) => RecordKind::Bookmark,
        }
    }

    /// Short human-readable description
    pub fn summary(&self) -> String {
        match self {
            Record::Book(book) => format!(
                "book {} '{}' ({} authors, {} tags)",
                book.id,
                book.title.as_deref().unwrap_or("untitled"),
                book.authors.len(),
                book.tags.len()
            ),
            Record::Bookmark(bookmark) => format!(
                "bookmark in book {} at paragraph {}",
                bookmark.book_id, bookmark.paragraph_index
            ),
        }
    }

    pub fn to_json(&self, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(self)?
        } else {
            serde_json::to_string(self)?
        };
        Ok(json)
    }
}

/// Resolves book links as-is, or against `--library-root`
#[derive(Debug, Clone)]
pub enum LinkResolver {
    Url(UrlResolver),
    Library(LibraryResolver),
}

impl LinkResolver {
    pub fn new(library_root: Option<&str>) -> Self {
        match library_root {
            Some(root) => LinkResolver::Library(LibraryResolver::new(root)),
            None => LinkResolver::Url(UrlResolver),
        }
    }
}

impl FileResolver for LinkResolver {
    fn resolve(&self, url: &str) -> Option<BookFile> {
        match self {
            LinkResolver::Url(resolver) => resolver.resolve(url),
            LinkResolver::Library(resolver) => resolver.resolve(url),
        }
    }
}

/// Records the name of the root element and stops reading
#[derive(Default)]
struct RootElement {
    name: Option<String>,
}

impl XmlHandler for RootElement {
    fn start_element(&mut self, tag: &str, _attributes: &Attributes) -> ElementAction {
        self.name = Some(tag.to_string());
        ElementAction::Reject
    }

    fn end_element(&mut self, _tag: &str) {}

    fn characters(&mut self, _text: &str) {}
}

/// Work out the record kind from the document's root element
pub fn detect_kind(xml: &str) -> Result<RecordKind> {
    let mut root = RootElement::default();
    read_document(xml, &mut root).context("Failed to read document")?;

    match root.name.as_deref() {
        Some("entry") => Ok(RecordKind::Book),
        Some("bookmark") => Ok(RecordKind::Bookmark),
        Some(other) => bail!("Unknown root element <{}>", other),
        None => bail!("Document has no root element"),
    }
}

/// Decode the document at `path`
///
/// Returns `Ok(None)` when the document is well-formed XML but does not hold
/// a valid record of the requested kind.
pub fn decode_file(
    path: &Path,
    kind: KindArg,
    serializer: &XmlSerializer<LinkResolver>,
) -> Result<Option<Record>> {
    let xml = fs::read_to_string(path)
        .with_context(|| format!("Failed to read input file: {}", path.display()))?;

    let kind = match kind {
        KindArg::Auto => detect_kind(&xml)?,
        KindArg::Book => RecordKind::Book,
        KindArg::Bookmark => RecordKind::Bookmark,
    };
    tracing::debug!("Decoding {:?} as {}", path, kind);

    let record = match kind {
        RecordKind::Book => serializer.read_book(xml.as_bytes())?.map(Record::Book),
        RecordKind::Bookmark => serializer
            .read_bookmark(xml.as_bytes())?
            .map(Record::Bookmark),
    };
    Ok(record)
}
