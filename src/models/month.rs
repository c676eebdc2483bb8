//! Calendar month key used for budget matching and display
//!
//! A `MonthKey` renders as `"YYYY-MM"`, the exact 7-character sequence the
//! month-to-date accounting searches for inside transaction date strings.

use chrono::{Datelike, Local, NaiveDate};
use std::fmt;

/// A calendar month (year + month number)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthKey {
    pub year: i32,
    pub month: u32,
}

impl MonthKey {
    /// Create a month key from a year and a 1-based month number
    pub const fn new(year: i32, month: u32) -> Self {
        Self { year, month }
    }

    /// The month containing today, from the local wall clock
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    /// The month containing a given date
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    /// Parse a month key from "YYYY-MM"
    pub fn parse(s: &str) -> Result<Self, MonthParseError> {
        let s = s.trim();
        let Some((year_part, month_part)) = s.split_once('-') else {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        };

        let year: i32 = year_part
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;
        let month: u32 = month_part
            .parse()
            .map_err(|_| MonthParseError::InvalidFormat(s.to_string()))?;

        if !(1..=12).contains(&month) {
            return Err(MonthParseError::InvalidFormat(s.to_string()));
        }

        Ok(Self { year, month })
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Error type for month key parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MonthParseError {
    InvalidFormat(String),
}

impl fmt::Display for MonthParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MonthParseError::InvalidFormat(s) => write!(f, "Invalid month (expected YYYY-MM): {}", s),
        }
    }
}

impl std::error::Error for MonthParseError {}
