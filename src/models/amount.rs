//! Amount type for representing currency amounts
//!
//! Amounts are whole currency units stored as u64: the ledger deals in
//! integer dollars only, and the type makes negative transaction amounts
//! unrepresentable. Provides parsing, arithmetic, and `$1,234`-style
//! formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign};

/// A non-negative monetary amount in whole currency units
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Amount(u64);

impl Amount {
    /// Create an Amount from whole currency units
    pub const fn new(units: u64) -> Self {
        Self(units)
    }

    /// Create a zero Amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole currency units
    pub const fn units(&self) -> u64 {
        self.0
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Parse an amount from a string
    ///
    /// Accepts whole-unit integers with an optional leading currency symbol:
    /// "250", "$250". Decimals, signs, and separators are rejected.
    pub fn parse(s: &str) -> Result<Self, AmountParseError> {
        let s = s.trim();
        let s = s.strip_prefix('$').unwrap_or(s);

        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(AmountParseError::InvalidFormat(s.to_string()));
        }

        s.parse::<u64>()
            .map(Self)
            .map_err(|_| AmountParseError::InvalidFormat(s.to_string()))
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${}", group_digits(self.0))
    }
}

impl Add for Amount {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl AddAssign for Amount {
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl std::iter::Sum for Amount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Amount::zero(), |acc, a| acc + a)
    }
}

/// Format a signed unit count the way `Amount` displays unsigned ones
///
/// Balances and remaining-budget figures can go negative even though
/// individual amounts cannot.
pub fn format_signed(units: i64) -> String {
    if units < 0 {
        format!("-${}", group_digits(units.unsigned_abs()))
    } else {
        format!("${}", group_digits(units as u64))
    }
}

fn group_digits(value: u64) -> String {
    let digits = value.to_string();
    let bytes = digits.as_bytes();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 && (bytes.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*b as char);
    }
    out
}

/// Error type for amount parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AmountParseError {
    InvalidFormat(String),
}

impl fmt::Display for AmountParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AmountParseError::InvalidFormat(s) => write!(f, "Invalid amount: {}", s),
        }
    }
}

impl std::error::Error for AmountParseError {}
