//! Output filenames: `<date-key>-<slug>.md`.

use crate::date::DateKey;
use crate::record::{clean, Record};

/// Turns a title into a filesystem-safe slug.
///
/// Commas, periods and slashes are dropped, every word is reduced to its
/// alphanumeric characters and the surviving words are joined with `_`.
pub fn slug(title: &str) -> String {
    clean(Some(title))
        .replace([',', '.', '/'], "")
        .split_whitespace()
        .map(|word| word.chars().filter(|c| c.is_alphanumeric()).collect::<String>())
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join("_")
}

/// Builds the output filename for a record.
///
/// Records whose title leaves nothing to slug are named after their citation
/// key instead.
pub fn file_name(date: &DateKey, record: &Record) -> String {
    let mut name = slug(record.title.as_deref().unwrap_or_default());
    if name.is_empty() {
        name = slug(&record.key.replace(['-', ':'], " "));
    }
    format!("{}-{}.md", date, name)
}
