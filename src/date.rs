//! Month parsing and the `YYYY-MM-01` date keys used for ordering and filenames.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::record::present;

/// Errors that can occur when building a date key.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DateError {
    #[error("Unrecognized month: '{0}'")]
    UnknownMonth(String),

    #[error("Missing year")]
    MissingYear,
}

const MONTH_NAMES: [&str; 12] = [
    "january",
    "february",
    "march",
    "april",
    "may",
    "june",
    "july",
    "august",
    "september",
    "october",
    "november",
    "december",
];

/// A calendar month, 1 through 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Month(u8);

impl Month {
    pub const JANUARY: Month = Month(1);

    /// Returns the month number (1-12).
    pub fn number(self) -> u8 {
        self.0
    }
}

impl FromStr for Month {
    type Err = DateError;

    /// Accepts `Jul`, `July` or `7`, ignoring case and surrounding whitespace.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.trim().to_ascii_lowercase();

        if let Ok(n) = lower.parse::<u8>() {
            if (1..=12).contains(&n) {
                return Ok(Month(n));
            }
            return Err(DateError::UnknownMonth(s.to_string()));
        }

        MONTH_NAMES
            .iter()
            .position(|name| lower == *name || (lower.len() == 3 && name.starts_with(&lower)))
            .map(|i| Month(i as u8 + 1))
            .ok_or_else(|| DateError::UnknownMonth(s.to_string()))
    }
}

/// A month-granularity date, rendered as `YYYY-MM-01`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateKey {
    year: String,
    month: Month,
}

impl DateKey {
    pub fn year(&self) -> &str {
        &self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{:02}-01", self.year, self.month.number())
    }
}

impl Ord for DateKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let numeric = |k: &DateKey| k.year.parse::<i64>().ok();
        numeric(self)
            .cmp(&numeric(other))
            .then_with(|| self.year.cmp(&other.year))
            .then_with(|| self.month.cmp(&other.month))
    }
}

impl PartialOrd for DateKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Builds the date key for a record's `year` and `month` fields.
///
/// A missing month counts as January. The year is used as written.
///
/// # Errors
///
/// Returns [`DateError::MissingYear`] when there is no year and
/// [`DateError::UnknownMonth`] when the month cannot be parsed.
pub fn date_key(year: Option<&str>, month: Option<&str>) -> Result<DateKey, DateError> {
    let year = present(year).ok_or(DateError::MissingYear)?;
    let month = match present(month) {
        Some(m) => m.parse()?,
        None => Month::JANUARY,
    };
    Ok(DateKey { year, month })
}
