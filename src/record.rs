//! Bibliographic records and field cleaning.
//!
//! A [`Record`] holds the handful of BibTeX fields the formatter reads. Every
//! field is optional; [`clean`] and [`present`] are the only places that decide
//! what an absent or empty value looks like.

/// One bibliographic entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    /// The citation key (e.g. `smith2021`)
    pub key: String,
    pub title: Option<String>,
    /// `"Last, First and Last, First"` list
    pub author: Option<String>,
    pub journal: Option<String>,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub year: Option<String>,
    /// Month name, abbreviation or numeral
    pub month: Option<String>,
    pub doi: Option<String>,
    /// arXiv identifier
    pub eprint: Option<String>,
    pub r#abstract: Option<String>,
}

impl Record {
    /// Creates an empty record with the given citation key.
    pub fn new(key: impl Into<String>) -> Self {
        Record {
            key: key.into(),
            ..Default::default()
        }
    }

    /// Sets a field by its (case-insensitive) BibTeX name.
    ///
    /// Returns `false` for fields the formatter does not use.
    pub fn set_field(&mut self, name: &str, value: String) -> bool {
        let slot = match name.to_ascii_lowercase().as_str() {
            "title" => &mut self.title,
            "author" => &mut self.author,
            "journal" => &mut self.journal,
            "volume" => &mut self.volume,
            "pages" => &mut self.pages,
            "year" => &mut self.year,
            "month" => &mut self.month,
            "doi" => &mut self.doi,
            "eprint" => &mut self.eprint,
            "abstract" => &mut self.r#abstract,
            _ => return false,
        };
        *slot = Some(value);
        true
    }

    /// Builder-style variant of [`Record::set_field`].
    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.set_field(name, value.to_string());
        self
    }
}

/// Removes the brace markup left over from BibTeX.
///
/// Absent values become the empty string.
pub fn clean(text: Option<&str>) -> String {
    match text {
        Some(t) => t.chars().filter(|c| *c != '{' && *c != '}').collect(),
        None => String::new(),
    }
}

/// Returns the cleaned, trimmed value when there is something left of it.
pub fn present(text: Option<&str>) -> Option<String> {
    let cleaned = clean(text);
    let trimmed = cleaned.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
