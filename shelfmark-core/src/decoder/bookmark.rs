//! Bookmark decoder state machine

use super::RecordDecoder;
use crate::date::parse_optional;
use crate::encoder::UNSAVED_ID;
use crate::error::ParseError;
use crate::types::Bookmark;
use crate::xml::{Attributes, ElementAction, XmlHandler};
use chrono::{DateTime, Utc};
use std::str::FromStr;

/// Position of the bookmark decoder inside a `bookmark` document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkState {
    Nothing,
    Bookmark,
    Text,
    /// The document failed validation; no record will be produced
    Rejected,
}

/// Rebuilds a [`Bookmark`] from the events of one `bookmark` document
///
/// Unlike the book decoder this one is strict: an attribute that fails to
/// parse inside `bookmark`, `book`, `history` or `position` rejects the whole
/// document.
pub struct BookmarkDecoder {
    state: BookmarkState,

    id: Option<u64>,
    book_id: Option<u64>,
    book_title: Option<String>,
    text: String,
    created: Option<DateTime<Utc>>,
    modified: Option<DateTime<Utc>>,
    accessed: Option<DateTime<Utc>>,
    access_count: u32,
    model_id: Option<String>,
    paragraph_index: i32,
    element_index: i32,
    char_index: i32,
    visible: bool,

    bookmark: Option<Bookmark>,
}

impl Default for BookmarkDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkDecoder {
    pub fn new() -> Self {
        Self {
            state: BookmarkState::Nothing,
            id: None,
            book_id: None,
            book_title: None,
            text: String::new(),
            created: None,
            modified: None,
            accessed: None,
            access_count: 0,
            model_id: None,
            paragraph_index: 0,
            element_index: 0,
            char_index: 0,
            visible: false,
            bookmark: None,
        }
    }

    pub fn state(&self) -> BookmarkState {
        self.state
    }

    /// The decoded bookmark; `None` while a document is being read
    pub fn result(&self) -> Option<&Bookmark> {
        match self.state {
            BookmarkState::Nothing => self.bookmark.as_ref(),
            _ => None,
        }
    }

    /// `id` must be [`UNSAVED_ID`] or a non-negative integer; other negative
    /// values reject the document
    fn read_root(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        let id = required(attributes, "id")?;
        self.id = if id == UNSAVED_ID {
            None
        } else {
            Some(parse_number(id, "id")?)
        };
        self.visible = attributes
            .get("visible")
            .is_some_and(|v| v.eq_ignore_ascii_case("true"));
        Ok(())
    }

    fn read_book(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.book_id = Some(parse_number(required(attributes, "id")?, "book id")?);
        self.book_title = attributes.get("title").map(str::to_string);
        Ok(())
    }

    fn read_history(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.created = parse_optional(attributes.get("date-creation"))?;
        self.modified = parse_optional(attributes.get("date-modification"))?;
        self.accessed = parse_optional(attributes.get("date-access"))?;
        self.access_count = parse_number(required(attributes, "access-count")?, "access-count")?;
        Ok(())
    }

    fn read_position(&mut self, attributes: &Attributes) -> Result<(), ParseError> {
        self.model_id = attributes.get("model").map(str::to_string);
        self.paragraph_index = parse_number(required(attributes, "paragraph")?, "paragraph")?;
        self.element_index = parse_number(required(attributes, "element")?, "element")?;
        self.char_index = parse_number(required(attributes, "char")?, "char")?;
        Ok(())
    }

    /// Apply a block reader; a failure rejects the document
    fn accept(&mut self, tag: &str, result: Result<(), ParseError>) -> ElementAction {
        match result {
            Ok(()) => ElementAction::Descend,
            Err(e) => {
                tracing::debug!("Invalid <{}> in bookmark: {}", tag, e);
                self.state = BookmarkState::Rejected;
                ElementAction::Reject
            }
        }
    }
}

impl XmlHandler for BookmarkDecoder {
    fn start_document(&mut self) {
        *self = Self::new();
    }

    fn start_element(&mut self, tag: &str, attributes: &Attributes) -> ElementAction {
        match self.state {
            BookmarkState::Nothing => {
                if tag != "bookmark" {
                    return ElementAction::SkipSubtree;
                }
                let result = self.read_root(attributes);
                let action = self.accept(tag, result);
                if action == ElementAction::Descend {
                    self.state = BookmarkState::Bookmark;
                }
                action
            }
            BookmarkState::Bookmark => match tag {
                "book" => {
                    let result = self.read_book(attributes);
                    self.accept(tag, result)
                }
                "text" => {
                    self.state = BookmarkState::Text;
                    ElementAction::Descend
                }
                "history" => {
                    let result = self.read_history(attributes);
                    self.accept(tag, result)
                }
                "position" => {
                    let result = self.read_position(attributes);
                    self.accept(tag, result)
                }
                _ => ElementAction::SkipSubtree,
            },
            BookmarkState::Text => {
                tracing::debug!("Unexpected <{}> inside bookmark text", tag);
                self.state = BookmarkState::Rejected;
                ElementAction::Reject
            }
            BookmarkState::Rejected => ElementAction::Reject,
        }
    }

    fn end_element(&mut self, tag: &str) {
        match self.state {
            BookmarkState::Bookmark => {
                if tag == "bookmark" {
                    self.state = BookmarkState::Nothing;
                }
            }
            BookmarkState::Text => self.state = BookmarkState::Bookmark,
            BookmarkState::Nothing | BookmarkState::Rejected => {}
        }
    }

    fn characters(&mut self, text: &str) {
        if self.state == BookmarkState::Text {
            self.text.push_str(text);
        }
    }

    fn end_document(&mut self) {
        let Some(book_id) = self.book_id else {
            return;
        };
        self.bookmark = Some(Bookmark {
            id: self.id,
            book_id,
            book_title: self.book_title.take(),
            text: std::mem::take(&mut self.text),
            created: self.created,
            modified: self.modified,
            accessed: self.accessed,
            access_count: self.access_count,
            model_id: self.model_id.take(),
            paragraph_index: self.paragraph_index,
            element_index: self.element_index,
            char_index: self.char_index,
            visible: self.visible,
        });
    }
}

impl RecordDecoder for BookmarkDecoder {
    type Record = Bookmark;

    const KIND: &'static str = "bookmark";

    fn into_result(self) -> Option<Bookmark> {
        match self.state {
            BookmarkState::Nothing => self.bookmark,
            _ => None,
        }
    }
}

fn required<'a>(attributes: &'a Attributes, name: &str) -> Result<&'a str, ParseError> {
    attributes
        .get(name)
        .ok_or_else(|| ParseError::MalformedContent(format!("missing '{}' attribute", name)))
}

fn parse_number<T: FromStr>(value: &str, what: &str) -> Result<T, ParseError> {
    value
        .parse()
        .map_err(|_| ParseError::MalformedContent(format!("invalid {} '{}'", what, value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decoder::decode_bookmark;
    use chrono::TimeZone;

    const FULL_BOOKMARK: &str = r#"<bookmark id="17" visible="true">
<book id="5" title="Paul Clifford"/>
<text>It was a dark &amp; stormy night</text>
<history date-creation="Jan 5, 2013 3:07:09 PM Coordinated Universal Time" date-access="Feb 1, 2013 8:30:00 AM Coordinated Universal Time" access-count="2"/>
<position model="footnote-3" paragraph="12" element="4" char="31"/>
</bookmark>"#;

    #[test]
    fn test_decode_full_bookmark() {
        let bookmark = decode_bookmark(FULL_BOOKMARK).unwrap();
        assert_eq!(bookmark.id, Some(17));
        assert!(bookmark.visible);
        assert_eq!(bookmark.book_id, 5);
        assert_eq!(bookmark.book_title.as_deref(), Some("Paul Clifford"));
        assert_eq!(bookmark.text, "It was a dark & stormy night");
        assert_eq!(
            bookmark.created,
            Some(Utc.with_ymd_and_hms(2013, 1, 5, 15, 7, 9).unwrap())
        );
        assert_eq!(bookmark.modified, None);
        assert_eq!(
            bookmark.accessed,
            Some(Utc.with_ymd_and_hms(2013, 2, 1, 8, 30, 0).unwrap())
        );
        assert_eq!(bookmark.access_count, 2);
        assert_eq!(bookmark.model_id.as_deref(), Some("footnote-3"));
        assert_eq!(
            (bookmark.paragraph_index, bookmark.element_index, bookmark.char_index),
            (12, 4, 31)
        );
    }

    #[test]
    fn test_missing_book_yields_nothing() {
        let xml = r#"<bookmark id="1" visible="true"><text>orphan</text></bookmark>"#;
        assert!(decode_bookmark(xml).is_none());
    }

    #[test]
    fn test_defaults_for_missing_blocks() {
        let xml = r#"<bookmark id="-1" visible="false"><book id="9"/></bookmark>"#;
        let bookmark = decode_bookmark(xml).unwrap();
        assert_eq!(bookmark, Bookmark::new(9, ""));
    }

    #[test]
    fn test_invalid_root_attributes_reject() {
        assert!(decode_bookmark(r#"<bookmark visible="true"><book id="9"/></bookmark>"#).is_none());
        assert!(decode_bookmark(r#"<bookmark id="x"><book id="9"/></bookmark>"#).is_none());
    }

    #[test]
    fn test_only_minus_one_marks_unsaved_id() {
        let xml = r#"<bookmark id="-1"><book id="9"/></bookmark>"#;
        assert_eq!(decode_bookmark(xml).unwrap().id, None);
        let xml = r#"<bookmark id="0"><book id="9"/></bookmark>"#;
        assert_eq!(decode_bookmark(xml).unwrap().id, Some(0));

        for id in ["-2", "-100", "- 1", "-1.0"] {
            let xml = format!(r#"<bookmark id="{}"><book id="9"/></bookmark>"#, id);
            assert!(decode_bookmark(&xml).is_none(), "id {} was accepted", id);
        }
    }

    #[test]
    fn test_history_dates_in_local_zones() {
        let xml = FULL_BOOKMARK.replace(
            "Jan 5, 2013 3:07:09 PM Coordinated Universal Time",
            "Jan 5, 2013 7:07:09 AM Pacific Standard Time",
        );
        let bookmark = decode_bookmark(&xml).unwrap();
        assert_eq!(
            bookmark.created,
            Some(Utc.with_ymd_and_hms(2013, 1, 5, 15, 7, 9).unwrap())
        );

        let xml = FULL_BOOKMARK.replace("Coordinated Universal Time", "Mars Time");
        assert!(decode_bookmark(&xml).is_none());
    }

    #[test]
    fn test_visibility_is_lenient() {
        let xml = r#"<bookmark id="3" visible="TRUE"><book id="9"/></bookmark>"#;
        assert!(decode_bookmark(xml).unwrap().visible);
        let xml = r#"<bookmark id="3" visible="yes"><book id="9"/></bookmark>"#;
        assert!(!decode_bookmark(xml).unwrap().visible);
    }

    #[test]
    fn test_invalid_book_id_rejects() {
        let xml = r#"<bookmark id="1"><book id="five"/><text>x</text></bookmark>"#;
        assert!(decode_bookmark(xml).is_none());
    }

    #[test]
    fn test_invalid_access_count_rejects_whole_document() {
        let xml = FULL_BOOKMARK.replace("access-count=\"2\"", "access-count=\"many\"");
        assert!(decode_bookmark(&xml).is_none());
    }

    #[test]
    fn test_invalid_date_rejects_whole_document() {
        let xml = FULL_BOOKMARK.replace("Jan 5, 2013", "2013-01-05");
        assert!(decode_bookmark(&xml).is_none());
    }

    #[test]
    fn test_invalid_position_rejects() {
        let xml = FULL_BOOKMARK.replace("element=\"4\"", "element=\"\"");
        assert!(decode_bookmark(&xml).is_none());
        let xml = FULL_BOOKMARK.replace(" char=\"31\"", "");
        assert!(decode_bookmark(&xml).is_none());
    }

    #[test]
    fn test_nested_tag_in_text_rejects() {
        let xml = r#"<bookmark id="1"><book id="2"/><text>bold <b>move</b></text></bookmark>"#;
        assert!(decode_bookmark(xml).is_none());
    }

    #[test]
    fn test_unknown_elements_are_skipped() {
        let xml = r#"<bookmark id="1"><style color="red"><text>ignored</text></style><book id="2"/><text>kept</text></bookmark>"#;
        let bookmark = decode_bookmark(xml).unwrap();
        assert_eq!(bookmark.text, "kept");
    }

    #[test]
    fn test_rejected_state_is_sticky() {
        let mut decoder = BookmarkDecoder::new();
        decoder.start_document();
        let mut attributes = Attributes::new();
        attributes.insert("id", "oops");
        assert_eq!(
            decoder.start_element("bookmark", &attributes),
            ElementAction::Reject
        );
        assert_eq!(decoder.state(), BookmarkState::Rejected);
        decoder.end_element("bookmark");
        decoder.end_document();
        assert!(decoder.result().is_none());
    }
}
