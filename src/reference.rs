//! Reference lines and identifier links.
//!
//! A reference line is the one-line citation shown at the top of each page,
//! e.g. `Phys Rev **12**, 345 (2021)`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::authors::{format_author_line, Author, AuthorLimits};
use crate::record::{clean, present, Record};

const ARXIV_ABS_URL: &str = "http://arxiv.org/abs/";
const DOI_URL: &str = "http://dx.doi.org/";

/// How the reference line is built.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReferencePolicy {
    /// Journal, volume, pages and year only
    #[default]
    Plain,
    /// Author line first, journal part linked to the DOI
    AuthorPrefixed,
}

impl FromStr for ReferencePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" => Ok(ReferencePolicy::Plain),
            "author-prefixed" => Ok(ReferencePolicy::AuthorPrefixed),
            other => Err(format!(
                "unknown reference policy '{}' (expected 'plain' or 'author-prefixed')",
                other
            )),
        }
    }
}

impl fmt::Display for ReferencePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReferencePolicy::Plain => write!(f, "plain"),
            ReferencePolicy::AuthorPrefixed => write!(f, "author-prefixed"),
        }
    }
}

/// `[arXiv:<id>](http://arxiv.org/abs/<id>)`, or `""` without an identifier.
pub fn arxiv_link(eprint: Option<&str>) -> String {
    match present(eprint) {
        Some(id) => format!("[arXiv:{}]({}{})", id, ARXIV_ABS_URL, id),
        None => String::new(),
    }
}

/// `[doi:<id>](http://dx.doi.org/<id>)`, or `""` without a DOI.
pub fn doi_link(doi: Option<&str>) -> String {
    match present(doi) {
        Some(id) => format!("[doi:{}]({}{})", id, DOI_URL, id),
        None => String::new(),
    }
}

/// `<journal> **<volume>**, <pages> (<year>)` when both volume and pages exist.
fn journal_volume_pages(record: &Record) -> Option<String> {
    let volume = present(record.volume.as_deref())?;
    let pages = present(record.pages.as_deref())?;
    Some(format!(
        "{} **{}**, {} ({})",
        clean(record.journal.as_deref()),
        volume,
        pages,
        clean(record.year.as_deref())
    ))
}

fn journal_year(record: &Record) -> String {
    format!(
        "{} ({})",
        clean(record.journal.as_deref()).trim(),
        clean(record.year.as_deref())
    )
    .trim()
    .to_string()
}

/// Builds the reference line without authors.
///
/// Falls back from journal/volume/pages to the arXiv identifier, then to
/// journal and year.
pub fn plain_reference(record: &Record) -> String {
    if let Some(full) = journal_volume_pages(record) {
        full
    } else if let Some(id) = present(record.eprint.as_deref()) {
        format!("arXiv:{}", id)
    } else {
        journal_year(record)
    }
}

/// Builds the reference line prefixed with the author line.
///
/// The journal part links to the DOI when there is one; preprints link to
/// arXiv. Records without authors get no prefix.
pub fn author_prefixed_reference(
    record: &Record,
    authors: &[Author],
    limits: AuthorLimits,
) -> String {
    let body = if let Some(full) = journal_volume_pages(record) {
        match present(record.doi.as_deref()) {
            Some(doi) => format!("[{}]({}{})", full, DOI_URL, doi),
            None => full,
        }
    } else if present(record.eprint.as_deref()).is_some() {
        arxiv_link(record.eprint.as_deref())
    } else {
        journal_year(record)
    };

    if authors.is_empty() {
        body
    } else {
        format!("{}, {}", format_author_line(authors, limits), body)
    }
}

/// Builds the reference line for the given policy.
pub fn reference(
    record: &Record,
    policy: ReferencePolicy,
    authors: &[Author],
    limits: AuthorLimits,
) -> String {
    match policy {
        ReferencePolicy::Plain => plain_reference(record),
        ReferencePolicy::AuthorPrefixed => author_prefixed_reference(record, authors, limits),
    }
}
