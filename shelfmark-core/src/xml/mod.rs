//! XML plumbing shared by the encoder and the decoders

mod escape;
mod reader;

pub use escape::escape_xml;
pub use reader::{read_document, Attributes, ElementAction, ReadOutcome, XmlHandler};

/// Dublin Core namespace, bound to the `dc` prefix
pub const NS_DUBLIN_CORE: &str = "http://purl.org/dc/elements/1.1/";

/// Calibre metadata namespace, bound to the `calibre` prefix
pub const NS_CALIBRE: &str = "http://calibre.kovidgoyal.net/2009/metadata";

/// Link relation of the book file link
pub const REL_ACQUISITION: &str = "http://opds-spec.org/acquisition";

/// Media type written on the book file link
pub const MIME_EPUB: &str = "application/epub+zip";
