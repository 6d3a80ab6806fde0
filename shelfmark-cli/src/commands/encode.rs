//! Encode command implementation

use super::RecordKind;
use anyhow::{Context, Result};
use shelfmark_core::types::{Book, Bookmark};
use shelfmark_core::{encode_book, encode_bookmark};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;

/// Encode a JSON record as XML
pub fn encode(input: &str, kind: RecordKind, output: Option<&str>) -> Result<()> {
    let file = File::open(Path::new(input))
        .with_context(|| format!("Failed to open input file: {}", input))?;
    let reader = BufReader::new(file);

    let xml = match kind {
        RecordKind::Book => {
            let book: Book = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse book JSON in {}", input))?;
            tracing::info!("Encoding book {}", book.id);
            encode_book(&book)
        }
        RecordKind::Bookmark => {
            let bookmark: Bookmark = serde_json::from_reader(reader)
                .with_context(|| format!("Failed to parse bookmark JSON in {}", input))?;
            tracing::info!("Encoding bookmark for book {}", bookmark.book_id);
            encode_bookmark(&bookmark)
        }
    };

    match output {
        Some(path) => {
            fs::write(path, &xml)
                .with_context(|| format!("Failed to write output file: {}", path))?;
            tracing::info!("Wrote {} -> {}", kind, path);
        }
        None => println!("{}", xml),
    }

    Ok(())
}
