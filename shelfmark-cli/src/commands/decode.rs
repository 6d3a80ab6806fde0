//! Decode command implementation

use super::{decode_file, KindArg, LinkResolver};
use anyhow::{Context, Result};
use shelfmark_core::XmlSerializer;
use std::path::Path;

/// Decode an XML document and print the record as JSON
pub fn decode(input: &str, kind: KindArg, pretty: bool, library_root: Option<&str>) -> Result<()> {
    let serializer = XmlSerializer::with_resolver(LinkResolver::new(library_root));

    let record = decode_file(Path::new(input), kind, &serializer)?
        .with_context(|| format!("No valid record in {}", input))?;

    tracing::info!("Decoded {}", record.summary());
    println!("{}", record.to_json(pretty)?);

    Ok(())
}
