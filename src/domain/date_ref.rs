//! Date argument parsing and resolution

use crate::error::{BerichtsheftError, Result};
use chrono::NaiveDate;
use std::str::FromStr;

/// A user-supplied date: either a keyword for the current day or an ISO date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateReference {
    /// Current day ("today" or "heute")
    Today,
    /// Specific date in YYYY-MM-DD form
    SpecificDate(NaiveDate),
}

impl DateReference {
    /// Parse a date argument
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();

        match normalized.as_str() {
            "today" | "heute" => Ok(DateReference::Today),
            _ => NaiveDate::parse_from_str(&normalized, "%Y-%m-%d")
                .map(DateReference::SpecificDate)
                .map_err(|_| BerichtsheftError::InvalidDate(input.trim().to_string())),
        }
    }

    /// Resolve to an actual date relative to `today`
    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            DateReference::Today => today,
            DateReference::SpecificDate(date) => *date,
        }
    }
}

impl FromStr for DateReference {
    type Err = BerichtsheftError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Parse and resolve in one step; `None` means today
pub fn resolve_date(input: Option<&str>, today: NaiveDate) -> Result<NaiveDate> {
    match input {
        Some(raw) if !raw.trim().is_empty() => Ok(DateReference::parse(raw)?.resolve(today)),
        _ => Ok(today),
    }
}
