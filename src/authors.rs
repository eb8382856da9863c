//! Author list parsing and display.
//!
//! BibTeX author fields look like `"Smith, John and Doe, Jane"`. They are
//! turned into display names (`John Smith`) and joined into an author line,
//! truncated with "et al." past a configurable threshold.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Deserialize;
use thiserror::Error;

/// Names are separated by the word `and`, possibly wrapped across lines.
/// Only the leading whitespace is consumed so that `and and` yields two separators.
static AND_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|\s+)and\b").unwrap());

/// Errors that can occur when parsing an author field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthorError {
    #[error("Empty author name at position {position}")]
    EmptyName { position: usize },

    #[error("Malformed author name: '{0}'")]
    MalformedName(String),
}

/// A single author, kept in the parts BibTeX gives us.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Author {
    pub family: String,
    /// Generational suffix from the `Last, Jr, First` form
    pub suffix: Option<String>,
    pub given: Option<String>,
}

impl fmt::Display for Author {
    /// Writes the name in "First Last" order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<&str> = [self.given.as_deref(), self.suffix.as_deref()]
            .into_iter()
            .flatten()
            .chain(std::iter::once(self.family.as_str()))
            .filter(|p| !p.is_empty())
            .collect();
        write!(f, "{}", parts.join(" "))
    }
}

impl Author {
    fn parse(raw: &str) -> Result<Self, AuthorError> {
        let parts: Vec<String> = raw
            .split(',')
            .map(|p| p.split_whitespace().collect::<Vec<_>>().join(" "))
            .collect();

        let non_empty = |s: &String| if s.is_empty() { None } else { Some(s.clone()) };

        match parts.as_slice() {
            [full] => Ok(Author {
                family: full.clone(),
                suffix: None,
                given: None,
            }),
            [family, given] => Ok(Author {
                family: family.clone(),
                suffix: None,
                given: non_empty(given),
            }),
            [family, suffix, given] => Ok(Author {
                family: family.clone(),
                suffix: non_empty(suffix),
                given: non_empty(given),
            }),
            _ => Err(AuthorError::MalformedName(raw.trim().to_string())),
        }
    }
}

/// Thresholds for the "et al." truncation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthorLimits {
    /// Longest list that is shown in full
    pub max_full: usize,
    /// How many names to keep when truncating
    pub et_al_count: usize,
}

impl AuthorLimits {
    /// The author line under the reference.
    pub const SHORT: AuthorLimits = AuthorLimits {
        max_full: 10,
        et_al_count: 3,
    };

    /// The author prefix of an author-prefixed reference.
    pub const LONG: AuthorLimits = AuthorLimits {
        max_full: 99,
        et_al_count: 4,
    };
}

/// Parses a cleaned BibTeX author field into display-ready authors.
///
/// An empty field gives an empty list. Source order is preserved.
///
/// # Errors
///
/// Returns [`AuthorError::EmptyName`] for an empty name between separators and
/// [`AuthorError::MalformedName`] for names with more than two commas.
///
/// # Examples
///
/// ```
/// use bib2pubs::authors::parse_authors;
///
/// let authors = parse_authors("Smith, John and Doe, Jane").unwrap();
/// let names: Vec<String> = authors.iter().map(|a| a.to_string()).collect();
/// assert_eq!(names, ["John Smith", "Jane Doe"]);
/// ```
pub fn parse_authors(field: &str) -> Result<Vec<Author>, AuthorError> {
    if field.trim().is_empty() {
        return Ok(Vec::new());
    }

    split_names(field.trim())
        .into_iter()
        .enumerate()
        .map(|(i, raw)| {
            if raw.trim().is_empty() {
                return Err(AuthorError::EmptyName { position: i + 1 });
            }
            Author::parse(raw)
        })
        .collect()
}

/// Splits on every standalone `and`; `and-Jones` is part of a name.
fn split_names(field: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;

    for m in AND_SEPARATOR.find_iter(field) {
        let standalone = field[m.end()..]
            .chars()
            .next()
            .map_or(true, char::is_whitespace);
        if standalone {
            pieces.push(&field[start..m.start()]);
            start = m.end();
        }
    }

    pieces.push(&field[start..]);
    pieces
}

/// Joins display names with `", "`, truncating with `_et al._` when the list
/// is longer than `limits.max_full`.
pub fn format_author_line(authors: &[Author], limits: AuthorLimits) -> String {
    let shown = if authors.len() <= limits.max_full {
        authors
    } else {
        &authors[..limits.et_al_count.min(authors.len())]
    };

    let line = shown
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(", ");

    if authors.len() > limits.max_full {
        format!("{}, _et al._", line)
    } else {
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(authors: &[Author]) -> Vec<String> {
        authors.iter().map(|a| a.to_string()).collect()
    }

    fn authors_named(n: usize) -> Vec<Author> {
        (1..=n)
            .map(|i| Author {
                family: format!("Author{}", i),
                suffix: None,
                given: Some("A.".to_string()),
            })
            .collect()
    }

    // --- Tests for parse_authors ---

    #[test]
    fn test_parse_authors_reverses_last_first() {
        let authors = parse_authors("Smith, John and Doe, Jane").unwrap();
        assert_eq!(names(&authors), vec!["John Smith", "Jane Doe"]);
    }

    #[test]
    fn test_parse_authors_keeps_first_last_names() {
        let authors = parse_authors("John Smith and Doe, Jane").unwrap();
        assert_eq!(names(&authors), vec!["John Smith", "Jane Doe"]);
    }

    #[test]
    fn test_parse_authors_with_suffix() {
        // Given: the three-part "Last, Jr, First" form
        let authors = parse_authors("King, Jr., Martin Luther").unwrap();

        // Then: parts are reversed like every other name
        assert_eq!(authors[0].suffix.as_deref(), Some("Jr."));
        assert_eq!(names(&authors), vec!["Martin Luther Jr. King"]);
    }

    #[test]
    fn test_parse_authors_line_wrapped_list() {
        let field = "Smith, John and\n    Doe, Jane and  Roe,   Richard";
        let authors = parse_authors(field).unwrap();
        assert_eq!(names(&authors), vec!["John Smith", "Jane Doe", "Richard Roe"]);
    }

    #[test]
    fn test_parse_authors_does_not_split_inside_names() {
        let authors = parse_authors("Anderson, Alexandra and Sandberg, Lars").unwrap();
        assert_eq!(names(&authors), vec!["Alexandra Anderson", "Lars Sandberg"]);
    }

    #[test]
    fn test_parse_authors_empty_field() {
        assert!(parse_authors("").unwrap().is_empty());
        assert!(parse_authors("   ").unwrap().is_empty());
    }

    #[test]
    fn test_parse_authors_empty_name_is_error() {
        let err = parse_authors("Smith, John and  and Doe, Jane").unwrap_err();
        assert_eq!(err, AuthorError::EmptyName { position: 2 });
    }

    #[test]
    fn test_parse_authors_trailing_and_is_error() {
        let err = parse_authors("Smith, John and").unwrap_err();
        assert_eq!(err, AuthorError::EmptyName { position: 2 });
    }

    #[test]
    fn test_parse_authors_leading_and_is_error() {
        let err = parse_authors("and Doe, Jane").unwrap_err();
        assert_eq!(err, AuthorError::EmptyName { position: 1 });
    }

    #[test]
    fn test_parse_authors_hyphenated_and_is_not_a_separator() {
        let authors = parse_authors("Smith and-Jones, Ann and Doe, Jane").unwrap();
        assert_eq!(names(&authors), vec!["Ann Smith and-Jones", "Jane Doe"]);
    }

    #[test]
    fn test_parse_authors_too_many_commas_is_error() {
        let err = parse_authors("A, B, C, D").unwrap_err();
        assert!(matches!(err, AuthorError::MalformedName(_)));
    }

    // --- Tests for format_author_line ---

    #[test]
    fn test_format_author_line_full_list() {
        let authors = parse_authors("Smith, John and Doe, Jane").unwrap();
        assert_eq!(
            format_author_line(&authors, AuthorLimits::SHORT),
            "John Smith, Jane Doe"
        );
    }

    #[test]
    fn test_format_author_line_truncates() {
        // Given: five authors and a threshold of three
        let authors = authors_named(5);
        let limits = AuthorLimits {
            max_full: 3,
            et_al_count: 2,
        };

        // When: we format the line
        let line = format_author_line(&authors, limits);

        // Then: the first two are kept and et al. is appended
        assert_eq!(line, "A. Author1, A. Author2, _et al._");
    }

    #[test]
    fn test_format_author_line_et_al_count_covers_whole_list() {
        // Given: four authors, over the threshold, but all of them kept
        let authors = authors_named(4);
        let limits = AuthorLimits {
            max_full: 3,
            et_al_count: 4,
        };

        // When: we format the line
        let line = format_author_line(&authors, limits);

        // Then: the list is still marked as truncated
        assert_eq!(
            line,
            "A. Author1, A. Author2, A. Author3, A. Author4, _et al._"
        );
    }

    #[test]
    fn test_format_author_line_at_threshold_is_full() {
        let authors = authors_named(10);
        let line = format_author_line(&authors, AuthorLimits::SHORT);
        assert!(!line.contains("et al."));
        assert!(line.ends_with("A. Author10"));
    }

    #[test]
    fn test_format_author_line_long_preset() {
        let authors = authors_named(100);
        let line = format_author_line(&authors, AuthorLimits::LONG);
        assert_eq!(
            line,
            "A. Author1, A. Author2, A. Author3, A. Author4, _et al._"
        );
    }

    #[test]
    fn test_format_author_line_empty() {
        assert_eq!(format_author_line(&[], AuthorLimits::SHORT), "");
    }
}
