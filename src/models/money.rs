//! Money type for representing currency amounts
//!
//! Amounts are whole currency units stored as i64 (the ledger is kept in yen,
//! which has no minor unit). Integer storage keeps sums exact; only derived
//! projection figures are computed in floating point. Arithmetic saturates at
//! the i64 bounds instead of overflowing.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Symbol used by `Display`; settings may override it when formatting
pub const DEFAULT_SYMBOL: &str = "¥";

/// A monetary amount in whole currency units
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Largest amount accepted for a single entered value (10^15 units)
    pub const MAX_ENTRY: Money = Money(1_000_000_000_000_000);

    /// Create a Money amount from whole units
    ///
    /// # Examples
    /// ```
    /// use kakeibo::models::Money;
    /// let rent = Money::from_units(85_000);
    /// assert_eq!(rent.units(), 85_000);
    /// ```
    pub const fn from_units(units: i64) -> Self {
        Self(units)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in whole units
    pub const fn units(&self) -> i64 {
        self.0
    }

    /// The amount as a float, for derived-quantity arithmetic
    pub fn as_f64(&self) -> f64 {
        self.0 as f64
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.saturating_abs())
    }

    /// Whether the amount is above [`Money::MAX_ENTRY`] in either direction
    pub const fn exceeds_entry_limit(&self) -> bool {
        self.0.unsigned_abs() > Self::MAX_ENTRY.0.unsigned_abs()
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "250000", "250,000", "¥250,000", "$1200", "-3500"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let trimmed = s.trim();

        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed),
        };

        // Drop a leading currency symbol, whatever it is
        let rest = rest.trim_start_matches(|c: char| !c.is_ascii_digit());

        let digits: String = rest.chars().filter(|c| *c != ',' && *c != '_').collect();
        if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
            return Err(MoneyParseError::InvalidFormat(trimmed.to_string()));
        }

        let units: i64 = digits
            .parse()
            .map_err(|_| MoneyParseError::OutOfRange(trimmed.to_string()))?;

        Ok(Self(if negative { -units } else { units }))
    }

    /// Format with a currency symbol and thousands separators
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_negative() {
            format!("-{}{}", symbol, grouped)
        } else {
            format!("{}{}", symbol, grouped)
        }
    }

    /// Format with an explicit `+` on positive amounts (calendar annotations)
    pub fn format_signed(&self) -> String {
        let grouped = group_thousands(self.0.unsigned_abs());
        if self.is_positive() {
            format!("+{}", grouped)
        } else if self.is_negative() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}

/// Insert a comma between every group of three digits
pub(crate) fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format_with_symbol(DEFAULT_SYMBOL))
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
            MoneyParseError::OutOfRange(s) => write!(f, "Amount out of range: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
