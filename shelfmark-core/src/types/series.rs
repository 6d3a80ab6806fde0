//! Series membership

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

/// Series information for books that are part of a series
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SeriesInfo {
    /// Series name
    pub title: String,

    /// Position in series
    pub index: Option<SeriesIndex>,
}

impl SeriesInfo {
    pub fn new(title: impl Into<String>, index: Option<SeriesIndex>) -> Self {
        Self {
            title: title.into(),
            index,
        }
    }

    /// Series info from optional parts; `None` unless a title is present
    pub fn from_parts(title: Option<String>, index: Option<String>) -> Option<Self> {
        title.map(|title| Self {
            title,
            index: index.map(SeriesIndex::new),
        })
    }
}

/// Ordering value within a series
///
/// Kept verbatim ("3", "2.5", "IV") so it survives serialization unchanged.
/// Numeric values compare numerically; anything else compares as text and
/// sorts after numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct SeriesIndex(String);

impl SeriesIndex {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, if the index is a number
    pub fn as_number(&self) -> Option<f64> {
        self.0.trim().parse::<f64>().ok().filter(|n| n.is_finite())
    }
}

impl From<u32> for SeriesIndex {
    fn from(n: u32) -> Self {
        Self(n.to_string())
    }
}

impl From<&str> for SeriesIndex {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl fmt::Display for SeriesIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialOrd for SeriesIndex {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SeriesIndex {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) => a.total_cmp(&b).then_with(|| self.0.cmp(&other.0)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.0.cmp(&other.0),
        }
    }
}
