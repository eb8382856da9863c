//! bib2pubs: turn a BibTeX database into one markdown page per publication.
//!
//! This library provides functionality to:
//! - Load BibTeX entries into records
//! - Order records by publication date
//! - Format reference lines, author lines and identifier links
//! - Derive date-prefixed filenames and write the pages

pub mod authors;
pub mod bib;
pub mod config;
pub mod date;
pub mod document;
pub mod filename;
pub mod output;
pub mod record;
pub mod reference;

pub use authors::{format_author_line, parse_authors, Author, AuthorLimits};
pub use bib::{load_records, parse_records};
pub use config::Config;
pub use date::{date_key, DateKey, Month};
pub use document::{render_document, render_documents, Document, FormatOptions};
pub use filename::{file_name, slug};
pub use output::write_documents;
pub use record::{clean, present, Record};
pub use reference::{arxiv_link, doi_link, reference, ReferencePolicy};
