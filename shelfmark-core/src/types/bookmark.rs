//! Bookmarks: a saved reading position with its surrounding text

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Which of the bookmark timestamps to read
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DateType {
    Creation,
    Modification,
    Access,
}

/// A saved position inside a book
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Bookmark {
    /// Database identifier; `None` until the bookmark is stored
    pub id: Option<u64>,

    /// Identifier of the book this bookmark belongs to
    pub book_id: u64,

    /// Title of the owning book (denormalized copy)
    pub book_title: Option<String>,

    /// Text around the bookmarked position
    pub text: String,

    pub created: Option<DateTime<Utc>>,
    pub modified: Option<DateTime<Utc>>,
    pub accessed: Option<DateTime<Utc>>,

    /// How many times the bookmark was opened
    pub access_count: u32,

    /// Text model the indices refer to (`None` for the main text)
    pub model_id: Option<String>,

    pub paragraph_index: i32,
    pub element_index: i32,
    pub char_index: i32,

    /// Whether the bookmark is shown in bookmark lists
    pub visible: bool,
}

impl Bookmark {
    /// Create an unsaved bookmark for `book_id` with default position
    pub fn new(book_id: u64, text: impl Into<String>) -> Self {
        Self {
            id: None,
            book_id,
            book_title: None,
            text: text.into(),
            created: None,
            modified: None,
            accessed: None,
            access_count: 0,
            model_id: None,
            paragraph_index: 0,
            element_index: 0,
            char_index: 0,
            visible: false,
        }
    }

    /// Set the stored identifier
    pub fn with_id(mut self, id: u64) -> Self {
        self.id = Some(id);
        self
    }

    /// Set the owning book title
    pub fn with_book_title(mut self, title: impl Into<String>) -> Self {
        self.book_title = Some(title.into());
        self
    }

    /// Set the position inside the text model
    pub fn at_position(
        mut self,
        model_id: Option<String>,
        paragraph_index: i32,
        element_index: i32,
        char_index: i32,
    ) -> Self {
        self.model_id = model_id;
        self.paragraph_index = paragraph_index;
        self.element_index = element_index;
        self.char_index = char_index;
        self
    }

    /// Get one of the three timestamps
    pub fn date(&self, date_type: DateType) -> Option<DateTime<Utc>> {
        match date_type {
            DateType::Creation => self.created,
            DateType::Modification => self.modified,
            DateType::Access => self.accessed,
        }
    }

    /// Most recent of the three timestamps
    pub fn latest_date(&self) -> Option<DateTime<Utc>> {
        [self.created, self.modified, self.accessed]
            .into_iter()
            .flatten()
            .max()
    }

    /// Record an access at `now`
    pub fn mark_accessed(&mut self, now: DateTime<Utc>) {
        self.accessed = Some(now);
        self.access_count = self.access_count.saturating_add(1);
    }
}
