//! Book file handles and the resolver that produces them

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const FILE_SCHEME: &str = "file://";

/// Handle to the file a book was loaded from
///
/// The handle is opaque to the codec: it is created by a [`FileResolver`]
/// and written back out through its URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct BookFile {
    url: String,
}

impl BookFile {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Handle for a local path, using a `file://` URL
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self {
            url: format!("{}{}", FILE_SCHEME, path.as_ref().display()),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Local path for `file://` URLs and bare paths
    pub fn path(&self) -> Option<PathBuf> {
        if let Some(rest) = self.url.strip_prefix(FILE_SCHEME) {
            Some(PathBuf::from(rest))
        } else if self.url.contains("://") {
            None
        } else {
            Some(PathBuf::from(&self.url))
        }
    }
}

/// Turns the URL stored in a serialized book back into a file handle
pub trait FileResolver {
    fn resolve(&self, url: &str) -> Option<BookFile>;
}

impl<F> FileResolver for F
where
    F: Fn(&str) -> Option<BookFile>,
{
    fn resolve(&self, url: &str) -> Option<BookFile> {
        self(url)
    }
}

/// Resolver that wraps the URL unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlResolver;

impl FileResolver for UrlResolver {
    fn resolve(&self, url: &str) -> Option<BookFile> {
        if url.is_empty() {
            None
        } else {
            Some(BookFile::new(url))
        }
    }
}

/// Resolver that anchors relative paths to a library directory
#[derive(Debug, Clone)]
pub struct LibraryResolver {
    root: PathBuf,
}

impl LibraryResolver {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl FileResolver for LibraryResolver {
    fn resolve(&self, url: &str) -> Option<BookFile> {
        if url.is_empty() {
            return None;
        }
        if url.contains("://") || Path::new(url).is_absolute() {
            return Some(BookFile::new(url));
        }
        Some(BookFile::from_path(self.root.join(url)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_from_url() {
        assert_eq!(
            BookFile::new("file:///books/verne.epub").path(),
            Some(PathBuf::from("/books/verne.epub"))
        );
        assert_eq!(
            BookFile::new("books/verne.epub").path(),
            Some(PathBuf::from("books/verne.epub"))
        );
        assert_eq!(BookFile::new("https://example.org/verne.epub").path(), None);
    }

    #[test]
    fn test_url_resolver() {
        assert_eq!(UrlResolver.resolve(""), None);
        assert_eq!(
            UrlResolver.resolve("file:///a.epub").unwrap().url(),
            "file:///a.epub"
        );
    }

    #[test]
    fn test_library_resolver() {
        let resolver = LibraryResolver::new("/library");
        assert_eq!(
            resolver.resolve("verne/voyage.epub").unwrap().path(),
            Some(PathBuf::from("/library/verne/voyage.epub"))
        );
        assert_eq!(
            resolver.resolve("https://example.org/a.epub").unwrap().url(),
            "https://example.org/a.epub"
        );
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |url: &str| Some(BookFile::new(url.to_uppercase()));
        assert_eq!(resolver.resolve("a.epub").unwrap().url(), "A.EPUB");
    }
}
