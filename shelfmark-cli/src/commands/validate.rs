//! Validate command implementation

use super::{decode_file, KindArg, LinkResolver};
use anyhow::{bail, Result};
use shelfmark_core::XmlSerializer;
use std::path::Path;

/// Check that an XML document holds a valid record
pub fn validate(input: &str, library_root: Option<&str>) -> Result<()> {
    let serializer = XmlSerializer::with_resolver(LinkResolver::new(library_root));

    match decode_file(Path::new(input), KindArg::Auto, &serializer) {
        Ok(Some(record)) => {
            println!("Valid {} document", record.kind());
            println!("  {}", record.summary());
            Ok(())
        }
        Ok(None) => {
            eprintln!("Invalid document: no complete record");
            bail!("Validation failed for {}", input);
        }
        Err(e) => {
            eprintln!("Invalid document: {:#}", e);
            bail!("Validation failed for {}", input);
        }
    }
}
