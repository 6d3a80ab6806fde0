//! Book author with display name and sort key

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// A book author
///
/// Two authors are equal when both the display name and the sort key match.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Author {
    /// Name as shown to the reader (e.g. "Jules Verne")
    pub display_name: String,

    /// Normalized key used for ordering (e.g. "verne jules")
    pub sort_key: String,
}

impl Author {
    /// Placeholder for books without any known author
    pub const NULL: Author = Author {
        display_name: String::new(),
        sort_key: String::new(),
    };

    pub fn new(display_name: impl Into<String>, sort_key: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
            sort_key: sort_key.into(),
        }
    }

    /// Whether this is the "no author" placeholder
    pub fn is_null(&self) -> bool {
        *self == Self::NULL
    }

    /// Display name, or `fallback` for the placeholder author
    pub fn display_name_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.is_null() {
            fallback
        } else {
            &self.display_name
        }
    }

    /// Whether both fields are present, i.e. the author survives serialization
    pub fn is_complete(&self) -> bool {
        !self.display_name.is_empty() && !self.sort_key.is_empty()
    }
}

impl PartialOrd for Author {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Author {
    fn cmp(&self, other: &Self) -> Ordering {
        self.sort_key
            .cmp(&other.sort_key)
            .then_with(|| self.display_name.cmp(&other.display_name))
    }
}
