//! CLI for bib2pubs - Turn a BibTeX database into one markdown page per publication.

use std::fmt;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bib2pubs::{load_records, render_documents, write_documents, Config, ReferencePolicy};

// ---------------------------------------------------------------------------
// CLI definition
// ---------------------------------------------------------------------------

/// Turn a BibTeX database into one markdown page per publication
#[derive(Parser)]
#[command(name = "bib2pubs")]
#[command(version)]
#[command(after_help = "\
Without arguments, reads bib.bib and writes into the existing directory out/.

Examples:
  bib2pubs
  bib2pubs --input papers.bib --output-dir _publications
  bib2pubs --config bib2pubs.toml --policy author-prefixed")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// BibTeX file to convert (overrides the configuration)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Existing directory to write pages into (overrides the configuration)
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// Reference style: 'plain' or 'author-prefixed' (overrides the configuration)
    #[arg(short, long)]
    policy: Option<ReferencePolicy>,
}

// ---------------------------------------------------------------------------
// AppError — semantic exit codes
// ---------------------------------------------------------------------------

enum AppError {
    /// Exit 10 — configuration file not found / invalid
    Config(String),
    /// Exit 11 — bibliography file not found / invalid
    BibFile(String),
    /// Exit 12 — an entry cannot be formatted
    Format(String),
    /// Exit 13 — cannot write output files
    Output(String),
}

impl AppError {
    fn exit_code(&self) -> i32 {
        match self {
            AppError::Config(_) => 10,
            AppError::BibFile(_) => 11,
            AppError::Format(_) => 12,
            AppError::Output(_) => 13,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(msg) => {
                write!(f, "{}\n  hint: check the configuration file path and keys", msg)
            }
            AppError::BibFile(msg) => {
                write!(f, "{}\n  hint: the file must be a valid BibTeX database", msg)
            }
            AppError::Format(msg) => {
                write!(
                    f,
                    "{}\n  hint: every entry needs a year; months must be names like 'Jan' or numbers 1-12",
                    msg
                )
            }
            AppError::Output(msg) => {
                write!(
                    f,
                    "{}\n  hint: create the output directory first and check that it is writable",
                    msg
                )
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

fn main() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "bib2pubs=info".to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(e.exit_code());
    }
}

fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = resolve_config(cli)?;
    convert(&config)
}

/// Merges the configuration file (if any) with command-line overrides.
fn resolve_config(cli: Cli) -> Result<Config, AppError> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .map_err(|e| AppError::Config(format!("'{}': {}", path.display(), e)))?,
        None => Config::default(),
    };

    if let Some(input) = cli.input {
        config.input = input;
    }
    if let Some(output_dir) = cli.output_dir {
        config.output_dir = output_dir;
    }
    if let Some(policy) = cli.policy {
        config.format.policy = policy;
    }

    Ok(config)
}

// ---------------------------------------------------------------------------
// Conversion
// ---------------------------------------------------------------------------

/// Loads, sorts, renders and writes every entry.
fn convert(config: &Config) -> Result<(), AppError> {
    // 1. Load records
    let records = load_records(&config.input)
        .map_err(|e| AppError::BibFile(format!("'{}': {}", config.input.display(), e)))?;

    // 2. Sort and render (fails on the first bad entry)
    let documents = render_documents(records, &config.format)
        .map_err(|e| AppError::Format(e.to_string()))?;

    // 3. Write one file per document
    let written = write_documents(&config.output_dir, &documents)
        .map_err(|e| AppError::Output(e.to_string()))?;

    for doc in &documents {
        println!("{}", doc.file_name);
    }
    info!(
        count = written.len(),
        policy = %config.format.policy,
        "converted {}",
        config.input.display()
    );

    Ok(())
}
