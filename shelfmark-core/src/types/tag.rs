//! Hierarchical tags ("Fiction/Mystery")

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator used for tag paths on the wire
pub const TAG_SEPARATOR: &str = "/";

/// A hierarchical label, stored as its path from the root
///
/// Two tags are equal iff every path segment matches.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Tag {
    path: Vec<String>,
}

impl Tag {
    /// Build a tag from its path segments, root first
    pub fn from_path<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            path: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// Build a tag from a slash-delimited term; empty segments are dropped
    pub fn parse(term: &str) -> Option<Self> {
        let path: Vec<String> = term
            .split(TAG_SEPARATOR)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
        if path.is_empty() {
            None
        } else {
            Some(Self { path })
        }
    }

    /// Path segments, root first
    pub fn path(&self) -> &[String] {
        &self.path
    }

    /// Leaf segment
    pub fn name(&self) -> &str {
        self.path.last().map(String::as_str).unwrap_or_default()
    }

    /// Enclosing tag, if this one is not a root
    pub fn parent(&self) -> Option<Tag> {
        if self.path.len() > 1 {
            Some(Self {
                path: self.path[..self.path.len() - 1].to_vec(),
            })
        } else {
            None
        }
    }

    /// Join the path with `separator`
    pub fn to_path_string(&self, separator: &str) -> String {
        self.path.join(separator)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path_string(TAG_SEPARATOR))
    }
}
