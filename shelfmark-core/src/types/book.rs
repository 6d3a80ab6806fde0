//! The library Book record

use super::{Author, BookFile, SeriesInfo, Tag};
use serde::{Deserialize, Serialize};

/// A book entry in the library
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Book {
    /// Database identifier
    pub id: u64,

    /// Book title
    pub title: Option<String>,

    /// Language code
    pub language: Option<String>,

    /// Text encoding of the book file
    pub encoding: Option<String>,

    /// File the book was loaded from
    pub file: Option<BookFile>,

    /// Authors in display order
    pub authors: Vec<Author>,

    /// Tags in insertion order, without duplicates
    pub tags: Vec<Tag>,

    /// Series information
    pub series: Option<SeriesInfo>,
}

impl Book {
    /// Create an empty book with the given identifier
    pub fn new(id: u64) -> Self {
        Self {
            id,
            title: None,
            language: None,
            encoding: None,
            file: None,
            authors: Vec::new(),
            tags: Vec::new(),
            series: None,
        }
    }

    /// Set the title
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Set the encoding
    pub fn with_encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }

    /// Set the file handle
    pub fn with_file(mut self, file: BookFile) -> Self {
        self.file = Some(file);
        self
    }

    /// Set the series information
    pub fn with_series(mut self, series: SeriesInfo) -> Self {
        self.series = Some(series);
        self
    }

    /// Add an author unless an equal one is already listed
    ///
    /// Returns whether the author was added.
    pub fn add_author(&mut self, author: Author) -> bool {
        if self.authors.contains(&author) {
            return false;
        }
        self.authors.push(author);
        true
    }

    /// Add a tag unless an equal one is already present
    ///
    /// Returns whether the tag was added.
    pub fn add_tag(&mut self, tag: Tag) -> bool {
        if self.tags.contains(&tag) {
            return false;
        }
        self.tags.push(tag);
        true
    }

    /// Whether the book is listed under `author`
    ///
    /// [`Author::NULL`] matches books with no authors at all.
    pub fn has_author(&self, author: &Author) -> bool {
        if author.is_null() {
            self.authors.is_empty()
        } else {
            self.authors.contains(author)
        }
    }

    /// Get the primary author (first listed)
    pub fn primary_author(&self) -> Option<&Author> {
        self.authors.first()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new(7)
            .with_title("Voyage au centre de la Terre")
            .with_language("fr");
        assert_eq!(book.id, 7);
        assert_eq!(book.title.as_deref(), Some("Voyage au centre de la Terre"));
        assert_eq!(book.language.as_deref(), Some("fr"));
        assert!(book.encoding.is_none());
        assert!(book.authors.is_empty());
    }

    #[test]
    fn test_add_author_rejects_duplicates() {
        let mut book = Book::new(1);
        assert!(book.add_author(Author::new("Jules Verne", "verne jules")));
        assert!(!book.add_author(Author::new("Jules Verne", "verne jules")));
        assert!(book.add_author(Author::new("Michel Verne", "verne michel")));
        assert_eq!(book.authors.len(), 2);
        assert_eq!(book.primary_author().unwrap().display_name, "Jules Verne");
    }

    #[test]
    fn test_add_tag_rejects_duplicates() {
        let mut book = Book::new(1);
        assert!(book.add_tag(Tag::from_path(["Fiction", "Adventure"])));
        assert!(!book.add_tag(Tag::from_path(["Fiction", "Adventure"])));
        assert!(book.add_tag(Tag::from_path(["Fiction"])));
        assert_eq!(book.tags.len(), 2);
    }

    #[test]
    fn test_has_author_null_matches_authorless_books() {
        let mut book = Book::new(1);
        assert!(book.has_author(&Author::NULL));

        let verne = Author::new("Jules Verne", "verne jules");
        book.add_author(verne.clone());
        assert!(!book.has_author(&Author::NULL));
        assert!(book.has_author(&verne));
    }

    #[test]
    fn test_book_serialization() {
        let book = Book::new(3).with_title("Serialization Test");
        let json = serde_json::to_string(&book).unwrap();
        let deserialized: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, deserialized);
    }
}
