//! Records handled by the Shelfmark codec

mod author;
mod book;
mod bookmark;
mod file;
mod series;
mod tag;

pub use author::Author;
pub use book::Book;
pub use bookmark::{Bookmark, DateType};
pub use file::{BookFile, FileResolver, LibraryResolver, UrlResolver};
pub use series::{SeriesIndex, SeriesInfo};
pub use tag::{Tag, TAG_SEPARATOR};
