//! Writing rendered documents to the output directory.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::document::Document;

/// Errors that can occur when writing documents.
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Output directory does not exist: {}", .0.display())]
    MissingDirectory(PathBuf),

    #[error("Failed to write '{}': {source}", path.display())]
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Writes each document into `dir`, overwriting existing files.
///
/// The directory must already exist. Documents sharing a filename overwrite
/// each other in order; this is logged but not an error.
///
/// # Returns
///
/// The paths written, in document order.
pub fn write_documents(dir: &Path, documents: &[Document]) -> Result<Vec<PathBuf>, OutputError> {
    if !dir.is_dir() {
        return Err(OutputError::MissingDirectory(dir.to_path_buf()));
    }

    let mut seen = HashSet::new();
    let mut written = Vec::with_capacity(documents.len());

    for doc in documents {
        if !seen.insert(doc.file_name.as_str()) {
            warn!(file = %doc.file_name, "filename collision, earlier entry will be overwritten");
        }

        let path = dir.join(&doc.file_name);
        fs::write(&path, &doc.contents).map_err(|source| OutputError::IoError {
            path: path.clone(),
            source,
        })?;
        info!(path = %path.display(), "wrote publication page");
        written.push(path);
    }

    Ok(written)
}
