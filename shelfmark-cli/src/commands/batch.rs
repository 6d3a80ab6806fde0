//! Batch decode command implementation

use super::{decode_file, KindArg, LinkResolver};
use anyhow::{bail, Context, Result};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use rayon::prelude::*;
use shelfmark_core::XmlSerializer;
use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Batch decode a directory of XML documents to JSON
pub fn batch(
    input_dir: &str,
    output_dir: &str,
    jobs: usize,
    library_root: Option<&str>,
) -> Result<()> {
    let input_path = Path::new(input_dir);
    let output_path = Path::new(output_dir);

    // Ensure output directory exists
    fs::create_dir_all(output_path)
        .with_context(|| format!("Failed to create output directory: {}", output_dir))?;

    // Find all XML documents
    let mut files: Vec<_> = fs::read_dir(input_path)
        .with_context(|| format!("Failed to read input directory: {}", input_dir))?
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .map(|ext| ext.eq_ignore_ascii_case("xml"))
                .unwrap_or(false)
        })
        .collect();
    files.sort();

    if files.is_empty() {
        println!("No XML documents found in {}", input_dir);
        return Ok(());
    }

    println!("Found {} documents to decode", files.len());

    let serializer = XmlSerializer::with_resolver(LinkResolver::new(library_root));

    // Set up progress tracking
    let multi_progress = MultiProgress::new();
    let overall_pb = multi_progress.add(ProgressBar::new(files.len() as u64));
    overall_pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos:>7}/{len:7} {msg}")?
            .progress_chars("##-"),
    );

    let success_count = AtomicUsize::new(0);
    let error_count = AtomicUsize::new(0);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(jobs)
        .build()
        .context("Failed to build thread pool")?;

    // Process files in parallel
    pool.install(|| {
        files.par_iter().for_each(|file_path| {
            match process_file(file_path, output_path, &serializer) {
                Ok(_) => {
                    success_count.fetch_add(1, Ordering::Relaxed);
                }
                Err(e) => {
                    error_count.fetch_add(1, Ordering::Relaxed);
                    tracing::error!("Failed to decode {:?}: {:#}", file_path, e);
                }
            }

            overall_pb.inc(1);
        });
    });

    overall_pb.finish();

    let success = success_count.load(Ordering::Relaxed);
    let errors = error_count.load(Ordering::Relaxed);

    println!("\nBatch decoding complete:");
    println!("  Success: {}", success);
    println!("  Errors:  {}", errors);

    if errors > 0 {
        bail!("Batch decoding completed with {} errors", errors);
    }

    Ok(())
}

fn process_file(
    input_path: &Path,
    output_dir: &Path,
    serializer: &XmlSerializer<LinkResolver>,
) -> Result<()> {
    let record = decode_file(input_path, KindArg::Auto, serializer)?
        .context("No valid record in document")?;

    // Build output path
    let stem = input_path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Could not determine output filename from input")?;
    let output_file = output_dir.join(format!("{}.json", stem));

    fs::write(&output_file, record.to_json(true)?)?;

    tracing::info!("Decoded {:?} -> {:?}", input_path, output_file);

    Ok(())
}
