//! Escaping of text for XML content and attribute values

use std::borrow::Cow;

/// Replace `&`, `<`, `>`, `'` and `"` with their entity references
///
/// This is the escaping quick-xml applies when writing text and attribute
/// values, exposed for callers that build markup by hand. Text without
/// reserved characters is returned unchanged and unallocated.
pub fn escape_xml(text: &str) -> Cow<'_, str> {
    quick_xml::escape::escape(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use quick_xml::events::{BytesStart, BytesText, Event};
    use quick_xml::Writer;

    #[test]
    fn test_escape_reserved_characters() {
        assert_eq!(
            escape_xml(r#"Tom & Jerry <"cat" & 'mouse'>"#),
            "Tom &amp; Jerry &lt;&quot;cat&quot; &amp; &apos;mouse&apos;&gt;"
        );
    }

    #[test]
    fn test_entities_not_escaped_twice() {
        assert_eq!(escape_xml("<&>"), "&lt;&amp;&gt;");
        assert_eq!(escape_xml("&lt;"), "&amp;lt;");
    }

    #[test]
    fn test_plain_text_is_borrowed() {
        assert!(matches!(escape_xml(""), Cow::Borrowed("")));
        assert!(matches!(escape_xml("Vingt mille lieues"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_multibyte_text() {
        assert_eq!(escape_xml("Жюль «Верн» & Ко"), "Жюль «Верн» &amp; Ко");
    }

    #[test]
    fn test_writer_output_matches_escape_xml() {
        for text in [
            r#"Tom & Jerry <"cat" & 'mouse'>"#,
            "",
            "plain",
            "&lt;",
            "Жюль «Верн» & Ко",
        ] {
            let mut writer = Writer::new(Vec::new());
            let mut elem = BytesStart::new("t");
            elem.push_attribute(("a", text));
            writer.write_event(Event::Start(elem)).unwrap();
            writer.write_event(Event::Text(BytesText::new(text))).unwrap();

            let written = String::from_utf8(writer.into_inner()).unwrap();
            let escaped = escape_xml(text);
            assert_eq!(written, format!(r#"<t a="{}">{}"#, escaped, escaped));
        }
    }
}
