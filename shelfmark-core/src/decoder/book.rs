//! Book decoder state machine

use super::RecordDecoder;
use crate::types::{Author, Book, FileResolver, SeriesInfo, Tag};
use crate::xml::{Attributes, ElementAction, XmlHandler};

/// Position of the book decoder inside an `entry` document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookState {
    Nothing,
    Entry,
    Id,
    Title,
    Language,
    Encoding,
    Author,
    AuthorUri,
    AuthorName,
    SeriesTitle,
    SeriesIndex,
}

/// Rebuilds a [`Book`] from the events of one `entry` document
///
/// End tags are not matched against start tags: the reader guarantees
/// well-formed nesting, and elements the machine does not know are skipped
/// as a whole.
pub struct BookDecoder<'r, R: FileResolver + ?Sized> {
    resolver: &'r R,
    state: BookState,

    id: Option<u64>,
    id_text: String,
    url: Option<String>,
    title: String,
    language: String,
    encoding: String,
    authors: Vec<Author>,
    tags: Vec<Tag>,
    author_sort_key: String,
    author_name: String,
    series_title: String,
    series_index: String,

    book: Option<Book>,
}

impl<'r, R: FileResolver + ?Sized> BookDecoder<'r, R> {
    pub fn new(resolver: &'r R) -> Self {
        Self {
            resolver,
            state: BookState::Nothing,
            id: None,
            id_text: String::new(),
            url: None,
            title: String::new(),
            language: String::new(),
            encoding: String::new(),
            authors: Vec::new(),
            tags: Vec::new(),
            author_sort_key: String::new(),
            author_name: String::new(),
            series_title: String::new(),
            series_index: String::new(),
            book: None,
        }
    }

    pub fn state(&self) -> BookState {
        self.state
    }

    /// The decoded book; `None` while a document is being read
    pub fn result(&self) -> Option<&Book> {
        match self.state {
            BookState::Nothing => self.book.as_ref(),
            _ => None,
        }
    }

    fn start_in_entry(&mut self, tag: &str, attributes: &Attributes) -> ElementAction {
        match tag {
            "id" => {
                self.id_text.clear();
                self.state = BookState::Id;
            }
            "title" => self.state = BookState::Title,
            "dc:language" => self.state = BookState::Language,
            "dc:encoding" => self.state = BookState::Encoding,
            "author" => {
                self.author_name.clear();
                self.author_sort_key.clear();
                self.state = BookState::Author;
            }
            "category" => {
                if let Some(parsed) = attributes.get("term").and_then(Tag::parse) {
                    self.tags.push(parsed);
                }
            }
            "calibre:series" => self.state = BookState::SeriesTitle,
            "calibre:series_index" => self.state = BookState::SeriesIndex,
            "link" => {
                // TODO: pick the link by its "rel" attribute once books carry
                // more than the acquisition link
                self.url = attributes.get("href").map(str::to_string);
            }
            _ => return ElementAction::SkipSubtree,
        }
        ElementAction::Descend
    }
}

impl<R: FileResolver + ?Sized> XmlHandler for BookDecoder<'_, R> {
    fn start_document(&mut self) {
        *self = Self::new(self.resolver);
    }

    fn start_element(&mut self, tag: &str, attributes: &Attributes) -> ElementAction {
        match self.state {
            BookState::Nothing => {
                if tag != "entry" {
                    return ElementAction::SkipSubtree;
                }
                self.state = BookState::Entry;
                ElementAction::Descend
            }
            BookState::Entry => self.start_in_entry(tag, attributes),
            BookState::Author => match tag {
                "uri" => {
                    self.state = BookState::AuthorUri;
                    ElementAction::Descend
                }
                "name" => {
                    self.state = BookState::AuthorName;
                    ElementAction::Descend
                }
                _ => ElementAction::SkipSubtree,
            },
            // Text-only elements have no children worth reading
            _ => ElementAction::SkipSubtree,
        }
    }

    fn end_element(&mut self, tag: &str) {
        match self.state {
            BookState::Nothing => {}
            BookState::Entry => {
                if tag == "entry" {
                    self.state = BookState::Nothing;
                }
            }
            BookState::AuthorUri | BookState::AuthorName => self.state = BookState::Author,
            BookState::Author => {
                if !self.author_sort_key.is_empty() && !self.author_name.is_empty() {
                    self.authors.push(Author::new(
                        self.author_name.as_str(),
                        self.author_sort_key.as_str(),
                    ));
                }
                self.state = BookState::Entry;
            }
            _ => self.state = BookState::Entry,
        }
    }

    fn characters(&mut self, text: &str) {
        match self.state {
            BookState::Id => {
                self.id_text.push_str(text);
                if let Ok(id) = self.id_text.trim().parse::<u64>() {
                    self.id = Some(id);
                }
            }
            BookState::Title => self.title.push_str(text),
            BookState::Language => self.language.push_str(text),
            BookState::Encoding => self.encoding.push_str(text),
            BookState::AuthorUri => self.author_sort_key.push_str(text),
            BookState::AuthorName => self.author_name.push_str(text),
            BookState::SeriesTitle => self.series_title.push_str(text),
            BookState::SeriesIndex => self.series_index.push_str(text),
            BookState::Nothing | BookState::Entry | BookState::Author => {}
        }
    }

    fn end_document(&mut self) {
        let Some(id) = self.id else {
            return;
        };

        let mut book = Book::new(id);
        book.file = self
            .url
            .as_deref()
            .and_then(|url| self.resolver.resolve(url));
        book.title = take_non_empty(&mut self.title);
        book.language = take_non_empty(&mut self.language);
        book.encoding = take_non_empty(&mut self.encoding);
        book.authors = std::mem::take(&mut self.authors);
        book.tags = std::mem::take(&mut self.tags);
        book.series = SeriesInfo::from_parts(
            take_non_empty(&mut self.series_title),
            take_non_empty(&mut self.series_index),
        );
        self.book = Some(book);
    }
}

impl<R: FileResolver + ?Sized> RecordDecoder for BookDecoder<'_, R> {
    type Record = Book;

    const KIND: &'static str = "book";

    fn into_result(self) -> Option<Book> {
        match self.state {
            BookState::Nothing => self.book,
            _ => None,
        }
    }
}

/// Move the buffer out, mapping an empty buffer to `None`
fn take_non_empty(buffer: &mut String) -> Option<String> {
    if buffer.is_empty() {
        None
    } else {
        Some(std::mem::take(buffer))
    }
}
