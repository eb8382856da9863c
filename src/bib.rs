//! BibTeX loading.
//!
//! Reads a `.bib` file with the `biblatex` parser and flattens each entry
//! into a [`Record`], keeping the order of the file.

use std::fs;
use std::path::Path;

use biblatex::{Bibliography, Chunk, Spanned};
use thiserror::Error;
use tracing::debug;

use crate::record::Record;

/// Errors that can occur when loading a bibliography.
#[derive(Error, Debug)]
pub enum BibError {
    #[error("Failed to read file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid BibTeX: {0}")]
    ParseError(String),
}

/// Loads every entry of a BibTeX file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid BibTeX.
pub fn load_records(path: &Path) -> Result<Vec<Record>, BibError> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Parses BibTeX source into records.
///
/// Field names are matched case-insensitively; fields the formatter does not
/// use are ignored. Inline math keeps its `$` delimiters.
pub fn parse_records(content: &str) -> Result<Vec<Record>, BibError> {
    let bibliography =
        Bibliography::parse(content).map_err(|e| BibError::ParseError(e.to_string()))?;

    let records: Vec<Record> = bibliography
        .iter()
        .map(|entry| {
            let mut record = Record::new(entry.key.clone());
            for (name, chunks) in &entry.fields {
                record.set_field(name, chunks_to_string(chunks));
            }
            record
        })
        .collect();

    debug!(count = records.len(), "parsed bibliography");
    Ok(records)
}

fn chunks_to_string(chunks: &[Spanned<Chunk>]) -> String {
    chunks
        .iter()
        .map(|c| match &c.v {
            Chunk::Normal(s) | Chunk::Verbatim(s) => s.clone(),
            Chunk::Math(s) => format!("${}$", s),
        })
        .collect()
}
