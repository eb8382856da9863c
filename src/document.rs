//! Markdown document assembly.
//!
//! Each record becomes one page: a front-matter header followed by the
//! reference line, identifier links, authors and abstract.

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::authors::{format_author_line, parse_authors, AuthorError, AuthorLimits};
use crate::date::{date_key, DateError, DateKey};
use crate::filename::file_name;
use crate::record::{clean, Record};
use crate::reference::{
    arxiv_link, author_prefixed_reference, doi_link, reference, ReferencePolicy,
};

/// Errors that can occur while formatting a record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("entry '{key}': {source}")]
    Date { key: String, source: DateError },

    #[error("entry '{key}': {source}")]
    Author { key: String, source: AuthorError },
}

/// Formatting choices, fixed for a whole run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FormatOptions {
    pub policy: ReferencePolicy,
    /// Limits for the author line under the reference
    pub short_authors: AuthorLimits,
    /// Limits for the author prefix of author-prefixed references
    pub long_authors: AuthorLimits,
}

impl Default for FormatOptions {
    fn default() -> Self {
        FormatOptions {
            policy: ReferencePolicy::Plain,
            short_authors: AuthorLimits::SHORT,
            long_authors: AuthorLimits::LONG,
        }
    }
}

/// A rendered page and the name it is written under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub file_name: String,
    pub contents: String,
}

/// The `---` delimited header read by the site generator.
pub fn front_matter(title: &str) -> String {
    format!(
        "---\nusemathjax: true\nlayout: publication\ntitle: {}\n---\n\n",
        title
    )
}

/// Computes date keys and orders records by (year, month).
///
/// Records with equal dates keep their source order.
pub fn prepare_records(records: Vec<Record>) -> Result<Vec<(DateKey, Record)>, FormatError> {
    let mut dated = records
        .into_iter()
        .map(
            |record| match date_key(record.year.as_deref(), record.month.as_deref()) {
                Ok(date) => Ok((date, record)),
                Err(source) => Err(FormatError::Date {
                    key: record.key.clone(),
                    source,
                }),
            },
        )
        .collect::<Result<Vec<_>, _>>()?;

    dated.sort_by(|(a, _), (b, _)| a.cmp(b));
    Ok(dated)
}

/// Renders one record.
pub fn render_document(
    record: &Record,
    date: &DateKey,
    options: &FormatOptions,
) -> Result<Document, FormatError> {
    let authors = parse_authors(&clean(record.author.as_deref())).map_err(|source| {
        FormatError::Author {
            key: record.key.clone(),
            source,
        }
    })?;

    let mut text = front_matter(&clean(record.title.as_deref()));
    let reference_line = reference(record, options.policy, &authors, options.long_authors);
    let abstract_text = clean(record.r#abstract.as_deref());

    text.push_str(&reference_line);
    text.push_str("\n\n");
    text.push_str(&doi_link(record.doi.as_deref()));
    text.push_str("\n\n");
    text.push_str(&arxiv_link(record.eprint.as_deref()));
    text.push_str("\n\n");

    match options.policy {
        ReferencePolicy::Plain => {
            text.push('_');
            text.push_str(&format_author_line(&authors, options.short_authors));
            text.push_str("_\n\n\n");
            text.push_str(&abstract_text);
            text.push_str("\n\n");
        }
        ReferencePolicy::AuthorPrefixed => {
            text.push_str(&abstract_text);
            text.push_str("\n\n");
            text.push_str(" * ");
            text.push_str(&author_prefixed_reference(record, &authors, options.long_authors));
            text.push('\n');
        }
    }

    let name = file_name(date, record);
    debug!(key = %record.key, file = %name, "rendered entry");

    Ok(Document {
        file_name: name,
        contents: text,
    })
}

/// Sorts the records and renders every one of them, stopping at the first error.
pub fn render_documents(
    records: Vec<Record>,
    options: &FormatOptions,
) -> Result<Vec<Document>, FormatError> {
    prepare_records(records)?
        .iter()
        .map(|(date, record)| render_document(record, date, options))
        .collect()
}
