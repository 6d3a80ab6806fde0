//! Book encoder (Atom-style `entry` element)

use super::{encode_to_string, write_close_tag, write_tag, write_text_element};
use crate::types::{Book, TAG_SEPARATOR};
use crate::xml::{MIME_EPUB, NS_CALIBRE, NS_DUBLIN_CORE, REL_ACQUISITION};
use quick_xml::Writer;
use std::io::Write;

/// Encode a book to its XML text
pub fn encode_book(book: &Book) -> String {
    encode_to_string("book", |buffer| write_book(buffer, book))
}

/// Write the XML form of a book to `sink`
pub fn write_book<W: Write>(sink: W, book: &Book) -> Result<(), quick_xml::Error> {
    let mut writer = Writer::new(sink);

    write_tag(
        &mut writer,
        "entry",
        false,
        &[
            ("xmlns:dc", Some(NS_DUBLIN_CORE)),
            ("xmlns:calibre", Some(NS_CALIBRE)),
        ],
    )?;

    let id = book.id.to_string();
    write_text_element(&mut writer, "id", Some(id.as_str()))?;
    write_text_element(&mut writer, "title", book.title.as_deref())?;
    write_text_element(&mut writer, "dc:language", book.language.as_deref())?;
    write_text_element(&mut writer, "dc:encoding", book.encoding.as_deref())?;

    for author in &book.authors {
        write_tag(&mut writer, "author", false, &[])?;
        write_text_element(&mut writer, "uri", non_empty(&author.sort_key))?;
        write_text_element(&mut writer, "name", non_empty(&author.display_name))?;
        write_close_tag(&mut writer, "author")?;
    }

    for tag in &book.tags {
        let term = tag.to_path_string(TAG_SEPARATOR);
        write_tag(
            &mut writer,
            "category",
            true,
            &[("term", Some(term.as_str())), ("label", Some(tag.name()))],
        )?;
    }

    if let Some(ref series) = book.series {
        write_text_element(&mut writer, "calibre:series", Some(series.title.as_str()))?;
        write_text_element(
            &mut writer,
            "calibre:series_index",
            series.index.as_ref().map(|index| index.as_str()),
        )?;
    }

    // TODO: derive the media type from the book file instead of assuming EPUB
    write_tag(
        &mut writer,
        "link",
        true,
        &[
            ("href", book.file.as_ref().map(|file| file.url())),
            ("type", Some(MIME_EPUB)),
            ("rel", Some(REL_ACQUISITION)),
        ],
    )?;

    write_close_tag(&mut writer, "entry")
}

fn non_empty(s: &str) -> Option<&str> {
    (!s.is_empty()).then_some(s)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Author, BookFile, SeriesIndex, SeriesInfo, Tag};

    #[test]
    fn test_minimal_book() {
        let xml = encode_book(&Book::new(42));
        assert_eq!(
            xml,
            "<entry xmlns:dc=\"http://purl.org/dc/elements/1.1/\" \
             xmlns:calibre=\"http://calibre.kovidgoyal.net/2009/metadata\">\n\
             <id>42</id>\n\
             <link type=\"application/epub+zip\" rel=\"http://opds-spec.org/acquisition\"/>\n\
             </entry>"
        );
    }

    #[test]
    fn test_optional_fields_are_omitted() {
        let xml = encode_book(&Book::new(1).with_title("Only a title"));
        assert!(xml.contains("<title>Only a title</title>"));
        assert!(!xml.contains("dc:language>"));
        assert!(!xml.contains("dc:encoding>"));
        assert!(!xml.contains("calibre:series"));
    }

    #[test]
    fn test_text_is_escaped() {
        let book = Book::new(1).with_title("Fish & \"Chips\" <deluxe>");
        let xml = encode_book(&book);
        assert!(xml.contains("<title>Fish &amp; &quot;Chips&quot; &lt;deluxe&gt;</title>"));
    }

    #[test]
    fn test_attribute_values_are_escaped() {
        let mut book = Book::new(1);
        book.add_tag(Tag::from_path(["Arts & \"Crafts\"", "<Knots>"]));
        let xml = encode_book(&book);
        assert!(xml.contains(
            "<category term=\"Arts &amp; &quot;Crafts&quot;/&lt;Knots&gt;\" label=\"&lt;Knots&gt;\"/>"
        ));
    }

    #[test]
    fn test_authors_tags_series_and_link() {
        let mut book = Book::new(9)
            .with_file(BookFile::new("file:///books/o'brien.epub"))
            .with_series(SeriesInfo::new("Aubrey-Maturin", Some(SeriesIndex::from(3))));
        book.add_author(Author::new("Patrick O'Brian", "o'brian patrick"));
        book.add_tag(Tag::from_path(["Fiction", "Historical"]));

        let xml = encode_book(&book);
        assert!(xml.contains(
            "<author>\n<uri>o&apos;brian patrick</uri>\n<name>Patrick O&apos;Brian</name>\n</author>"
        ));
        assert!(xml.contains("<category term=\"Fiction/Historical\" label=\"Historical\"/>\n"));
        assert!(xml.contains("<calibre:series>Aubrey-Maturin</calibre:series>\n"));
        assert!(xml.contains("<calibre:series_index>3</calibre:series_index>\n"));
        assert!(xml.contains("<link href=\"file:///books/o&apos;brien.epub\" type="));
        assert!(xml.ends_with("</entry>"));
    }

    #[test]
    fn test_incomplete_author_omits_missing_children() {
        let mut book = Book::new(1);
        book.add_author(Author::new("Anonymous", ""));
        let xml = encode_book(&book);
        assert!(xml.contains("<author>\n<name>Anonymous</name>\n</author>"));
        assert!(!xml.contains("<uri>"));
    }
}
