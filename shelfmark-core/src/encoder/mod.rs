//! Encoders producing the XML form of books and bookmarks
//!
//! Output layout is fixed: every start tag and every text element is followed
//! by a newline, closing tags of container elements are not.

mod book;
mod bookmark;

pub use book::{encode_book, write_book};
pub use bookmark::{encode_bookmark, write_bookmark};

pub(crate) use bookmark::UNSAVED_ID;

use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Write a start tag (or a self-closing tag when `empty` is set)
///
/// Attributes with a `None` value are left out.
fn write_tag<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    empty: bool,
    attributes: &[(&str, Option<&str>)],
) -> Result<(), quick_xml::Error> {
    let mut elem = BytesStart::new(name);
    for (key, value) in attributes {
        if let Some(value) = value {
            elem.push_attribute((*key, *value));
        }
    }
    if empty {
        writer.write_event(Event::Empty(elem))?;
    } else {
        writer.write_event(Event::Start(elem))?;
    }
    write_newline(writer)
}

/// Write a simple text element; nothing is written for `None`
fn write_text_element<W: Write>(
    writer: &mut Writer<W>,
    name: &str,
    content: Option<&str>,
) -> Result<(), quick_xml::Error> {
    let Some(content) = content else {
        return Ok(());
    };
    writer.write_event(Event::Start(BytesStart::new(name)))?;
    writer.write_event(Event::Text(BytesText::new(content)))?;
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    write_newline(writer)
}

fn write_close_tag<W: Write>(writer: &mut Writer<W>, name: &str) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::End(BytesEnd::new(name)))?;
    Ok(())
}

fn write_newline<W: Write>(writer: &mut Writer<W>) -> Result<(), quick_xml::Error> {
    writer.write_event(Event::Text(BytesText::from_escaped("\n")))?;
    Ok(())
}

/// Run `write` against an in-memory buffer and return the text
fn encode_to_string<F>(kind: &str, write: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> Result<(), quick_xml::Error>,
{
    let mut buffer = Vec::new();
    if let Err(e) = write(&mut buffer) {
        tracing::error!("Failed to encode {}: {}", kind, e);
    }
    String::from_utf8(buffer).unwrap_or_default()
}
