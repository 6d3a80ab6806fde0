//! Event-driven XML reading
//!
//! Wraps the quick-xml pull parser in a push interface: the reader walks the
//! document and reports start tags, end tags and text to an [`XmlHandler`].
//! A handler steers the walk through the [`ElementAction`] it returns for
//! every start tag.

use crate::error::ParseError;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::borrow::Cow;

/// What the reader should do with an element the handler has just seen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementAction {
    /// Report the element's children and its end tag
    Descend,
    /// Skip the element's children and its end tag
    SkipSubtree,
    /// Stop reading; the document is invalid
    Reject,
}

/// How a call to [`read_document`] ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadOutcome {
    /// Every event was delivered, including `end_document`
    Completed,
    /// The handler rejected the document; `end_document` was not delivered
    Rejected,
}

/// Receiver of document events
pub trait XmlHandler {
    fn start_document(&mut self) {}

    fn start_element(&mut self, tag: &str, attributes: &Attributes) -> ElementAction;

    fn end_element(&mut self, tag: &str);

    fn characters(&mut self, text: &str);

    fn end_document(&mut self) {}
}

/// Attributes of a start tag, in document order, with entities resolved
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    entries: Vec<(String, String)>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value of the first attribute called `name`
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    fn from_start(start: &BytesStart<'_>) -> Result<Self, ParseError> {
        let mut attributes = Self::new();
        for attr in start.attributes() {
            let attr = attr?;
            let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            attributes.entries.push((key, value));
        }
        Ok(attributes)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Feed `xml` to `handler`
///
/// Self-closing elements are reported as a start tag followed by an end tag.
/// Comments, processing instructions and declarations are not reported.
/// On a syntax error the walk stops without calling `end_document`.
pub fn read_document<H: XmlHandler + ?Sized>(
    xml: &str,
    handler: &mut H,
) -> Result<ReadOutcome, ParseError> {
    let mut reader = Reader::from_str(xml);
    handler.start_document();

    loop {
        match reader.read_event()? {
            Event::Start(e) => {
                let tag = tag_name(&e);
                let attributes = Attributes::from_start(&e)?;
                match handler.start_element(&tag, &attributes) {
                    ElementAction::Descend => {}
                    ElementAction::SkipSubtree => {
                        tracing::trace!("Skipping <{}>", tag);
                        let end = e.to_end().into_owned();
                        reader.read_to_end(end.name())?;
                    }
                    ElementAction::Reject => return Ok(ReadOutcome::Rejected),
                }
            }
            Event::Empty(e) => {
                let tag = tag_name(&e);
                let attributes = Attributes::from_start(&e)?;
                match handler.start_element(&tag, &attributes) {
                    ElementAction::Descend => handler.end_element(&tag),
                    ElementAction::SkipSubtree => tracing::trace!("Skipping <{}/>", tag),
                    ElementAction::Reject => return Ok(ReadOutcome::Rejected),
                }
            }
            Event::End(e) => {
                let tag = String::from_utf8_lossy(e.name().as_ref()).into_owned();
                handler.end_element(&tag);
            }
            Event::Text(e) => {
                let text = e.unescape()?;
                if !text.is_empty() {
                    handler.characters(&text);
                }
            }
            Event::CData(e) => {
                let data = e.into_inner();
                handler.characters(&String::from_utf8_lossy(&data));
            }
            Event::Eof => break,
            _ => {}
        }
    }

    handler.end_document();
    Ok(ReadOutcome::Completed)
}

fn tag_name<'a>(start: &'a BytesStart<'_>) -> Cow<'a, str> {
    String::from_utf8_lossy(start.name().into_inner())
}
