//! Bookmark encoder

use super::{encode_to_string, write_close_tag, write_tag, write_text_element};
use crate::date::format_optional;
use crate::types::Bookmark;
use quick_xml::Writer;
use std::io::Write;

/// Wire value of the identifier of a bookmark that was never stored
pub(crate) const UNSAVED_ID: &str = "-1";

/// Encode a bookmark to its XML text
pub fn encode_bookmark(bookmark: &Bookmark) -> String {
    encode_to_string("bookmark", |buffer| write_bookmark(buffer, bookmark))
}

/// Write the XML form of a bookmark to `sink`
pub fn write_bookmark<W: Write>(sink: W, bookmark: &Bookmark) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new(sink);

    let id = bookmark
        .id
        .map(|id| id.to_string())
        .unwrap_or_else(|| UNSAVED_ID.to_string());
    let visible = bookmark.visible.to_string();
    write_tag(
        &mut writer,
        "bookmark",
        false,
        &[("id", Some(id.as_str())), ("visible", Some(visible.as_str()))],
    )?;

    let book_id = bookmark.book_id.to_string();
    write_tag(
        &mut writer,
        "book",
        true,
        &[
            ("id", Some(book_id.as_str())),
            ("title", bookmark.book_title.as_deref()),
        ],
    )?;

    write_text_element(&mut writer, "text", Some(bookmark.text.as_str()))?;

    let created = format_optional(bookmark.created.as_ref());
    let modified = format_optional(bookmark.modified.as_ref());
    let accessed = format_optional(bookmark.accessed.as_ref());
    let access_count = bookmark.access_count.to_string();
    write_tag(
        &mut writer,
        "history",
        true,
        &[
            ("date-creation", created.as_deref()),
            ("date-modification", modified.as_deref()),
            ("date-access", accessed.as_deref()),
            ("access-count", Some(access_count.as_str())),
        ],
    )?;

    let paragraph = bookmark.paragraph_index.to_string();
    let element = bookmark.element_index.to_string();
    let char_index = bookmark.char_index.to_string();
    write_tag(
        &mut writer,
        "position",
        true,
        &[
            ("model", bookmark.model_id.as_deref()),
            ("paragraph", Some(paragraph.as_str())),
            ("element", Some(element.as_str())),
            ("char", Some(char_index.as_str())),
        ],
    )?;

    write_close_tag(&mut writer, "bookmark")
}
