use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{DateError, Instant, RANGE_SEPARATOR, prelude::*};

/// An open interval between two instants.
/// `from` must not be after `to`; `from == to` is allowed and contains nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
#[display(fmt = "{from}/{to}")]
pub struct DateRange {
    from: Instant,
    to:   Instant,
}

/// Error type for date range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// `from` is after `to`.
    #[error("Invalid range: from date must be before to date (from {from}, to {to})")]
    InvalidRange { from: Instant, to: Instant },

    /// Error parsing one of the bounds.
    #[error(transparent)]
    Date(#[from] DateError),

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl DateRange {
    /// Creates a new date range with validation.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if `from` is after `to`.
    pub fn new(from: Instant, to: Instant) -> Result<Self, RangeError> {
        if from > to {
            return Err(RangeError::InvalidRange { from, to });
        }
        Ok(Self { from, to })
    }

    /// Returns the lower bound of the range
    pub const fn from(&self) -> Instant {
        self.from
    }

    /// Returns the upper bound of the range
    pub const fn to(&self) -> Instant {
        self.to
    }

    /// Returns both bounds as a tuple
    pub const fn bounds(&self) -> (Instant, Instant) {
        (self.from, self.to)
    }

    /// Checks if `date` lies strictly between the bounds.
    /// Either bound itself is outside the range.
    pub fn contains(&self, date: &Instant) -> bool {
        self.from < *date && *date < self.to
    }
}

/// True iff `date` lies strictly between `from` and `to`.
///
/// # Errors
/// Returns `RangeError::InvalidRange` if `from` is after `to`, whatever `date` is.
pub fn is_within_range(date: &Instant, from: &Instant, to: &Instant) -> Result<bool, RangeError> {
    let range = DateRange::new(*from, *to)?;
    Ok(range.contains(date))
}

impl FromStr for DateRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();

        // ISO 8601 interval notation: RANGE_SEPARATOR between the bounds
        let parts: Vec<&str> = trimmed.split(RANGE_SEPARATOR).map(str::trim).collect();

        match parts.as_slice() {
            [_] => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            [from, to] => {
                let from = from.parse::<Instant>()?;
                let to = to.parse::<Instant>()?;

                Self::new(from, to)
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {}",
                parts.len() - 1
            ))),
        }
    }
}

impl Serialize for DateRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for DateRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
