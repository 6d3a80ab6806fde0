//! Shelfmark CLI - Command-line interface for the library record codec

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{KindArg, RecordKind};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Parse and validate jobs argument (must be at least 1)
fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n < 1 {
        Err("jobs must be at least 1".to_string())
    } else {
        Ok(n)
    }
}

#[derive(Parser)]
#[command(name = "shelfmark")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encode a JSON record as XML
    Encode {
        /// Input JSON file path
        input: String,

        /// Record kind held by the input
        #[arg(short, long, value_enum)]
        kind: RecordKind,

        /// Output file path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Decode an XML document to JSON
    Decode {
        /// Input XML file path
        input: String,

        /// Record kind, detected from the root element by default
        #[arg(short, long, value_enum, default_value = "auto")]
        kind: KindArg,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Directory that relative book links are resolved against
        #[arg(long)]
        library_root: Option<String>,
    },

    /// Check that an XML document holds a valid record
    Validate {
        /// Input XML file path
        input: String,

        /// Directory that relative book links are resolved against
        #[arg(long)]
        library_root: Option<String>,
    },

    /// Batch decode a directory of XML documents to JSON
    Batch {
        /// Input directory
        input_dir: String,

        /// Output directory
        #[arg(short, long)]
        output_dir: String,

        /// Number of parallel jobs (must be at least 1)
        #[arg(short, long, default_value = "4", value_parser = parse_jobs)]
        jobs: usize,

        /// Directory that relative book links are resolved against
        #[arg(long)]
        library_root: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let filter = if cli.verbose {
        "shelfmark_cli=debug,shelfmark_core=debug"
    } else {
        "shelfmark_cli=info"
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(filter))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command {
        Commands::Encode {
            input,
            kind,
            output,
        } => commands::encode(&input, kind, output.as_deref()),

        Commands::Decode {
            input,
            kind,
            pretty,
            library_root,
        } => commands::decode(&input, kind, pretty, library_root.as_deref()),

        Commands::Validate {
            input,
            library_root,
        } => commands::validate(&input, library_root.as_deref()),

        Commands::Batch {
            input_dir,
            output_dir,
            jobs,
            library_root,
        } => commands::batch(&input_dir, &output_dir, jobs, library_root.as_deref()),
    }
}
