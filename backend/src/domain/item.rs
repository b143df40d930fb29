//! Items with an availability date.

use chrono::NaiveDate;
use serde::Serialize;

/// Calendar date format accepted for date parameters.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Stock item that becomes available on a given date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    id: u32,
    name: String,
    available_from: NaiveDate,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, available_from: NaiveDate) -> Self {
        Self {
            id,
            name: name.into(),
            available_from,
        }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn available_from(&self) -> NaiveDate {
        self.available_from
    }
}

/// Parse a `YYYY-MM-DD` calendar date.
///
/// # Examples
/// ```
/// use lookup_api::domain::parse_date;
///
/// assert!(parse_date("2024-02-29").is_ok());
/// assert!(parse_date("2023-02-29").is_err());
/// assert!(parse_date("29/02/2024").is_err());
/// ```
pub fn parse_date(raw: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
}

/// Items available on or after `start_date`; no date matches all items.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemFilter {
    pub start_date: Option<NaiveDate>,
}

impl ItemFilter {
    pub fn matches(&self, item: &Item) -> bool {
        self.start_date
            .is_none_or(|start| item.available_from() >= start)
    }
}
