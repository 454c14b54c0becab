use crate::consts::{DAYS_PER_WEEK, MILLIS_PER_MINUTE, MILLIS_PER_SECOND, MONTHS_PER_YEAR};
use crate::prelude::*;
use crate::DateError;
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::ops::Neg;
use std::str::FromStr;

/// A calendar year. Any `i32` is accepted; no bounds are enforced here.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    From,
    Into,
    FromStr,
)]
#[serde(transparent)]
pub struct Year(i32);

impl Year {
    pub const fn new(value: i32) -> Self {
        Self(value)
    }

    /// Returns the year value as i32
    #[inline]
    pub const fn get(self) -> i32 {
        self.0
    }
}

/// Granularity used to interpret an [`Amount`] in date arithmetic.
///
/// `Days` is the default. Names that match no unit also resolve to `Days`
/// (see [`Unit::parse_lenient`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Unit {
    #[display(fmt = "seconds")]
    Seconds,
    #[display(fmt = "minutes")]
    Minutes,
    #[default]
    #[display(fmt = "days")]
    Days,
    #[display(fmt = "weeks")]
    Weeks,
    #[display(fmt = "months")]
    Months,
    #[display(fmt = "years")]
    Years,
}

/// How a unit moves an instant: by elapsed milliseconds, by whole days, or by
/// whole calendar months. Each carries the factor applied to the amount.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Step {
    Millis(f64),
    Days(f64),
    Months(f64),
}

impl Unit {
    pub const ALL: [Self; 6] = [
        Self::Seconds,
        Self::Minutes,
        Self::Days,
        Self::Weeks,
        Self::Months,
        Self::Years,
    ];

    /// Resolves a unit name, accepting plural, singular and short forms.
    ///
    /// Short forms are case sensitive where they collide: `m` is minutes and
    /// `M` is months. Anything unrecognized falls back to [`Unit::Days`].
    pub fn parse_lenient(name: &str) -> Self {
        let trimmed = name.trim();
        match trimmed {
            "m" => return Self::Minutes,
            "M" => return Self::Months,
            _ => {}
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "s" | "second" | "seconds" => Self::Seconds,
            "minute" | "minutes" => Self::Minutes,
            "d" | "day" | "days" => Self::Days,
            "w" | "week" | "weeks" => Self::Weeks,
            "month" | "months" => Self::Months,
            "y" | "year" | "years" => Self::Years,
            _ => {
                log::debug!("unrecognized unit {trimmed:?}, falling back to days");
                Self::Days
            }
        }
    }

    pub(crate) const fn step(self) -> Step {
        match self {
            Self::Seconds => Step::Millis(MILLIS_PER_SECOND),
            Self::Minutes => Step::Millis(MILLIS_PER_MINUTE),
            Self::Days => Step::Days(1.0),
            Self::Weeks => Step::Days(DAYS_PER_WEEK),
            Self::Months => Step::Months(1.0),
            Self::Years => Step::Months(MONTHS_PER_YEAR),
        }
    }
}

impl FromStr for Unit {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl From<&str> for Unit {
    fn from(name: &str) -> Self {
        Self::parse_lenient(name)
    }
}

impl From<String> for Unit {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl From<Unit> for String {
    fn from(unit: Unit) -> Self {
        unit.to_string()
    }
}

/// A finite quantity of some [`Unit`]. NaN and infinities are unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Display, Into)]
pub struct Amount(f64);

impl Amount {
    /// Creates a new Amount, validating that it's finite
    ///
    /// # Errors
    /// Returns `DateError::InvalidAmount` if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Self, DateError> {
        if value.is_finite() {
            Ok(Self(value))
        } else {
            Err(DateError::InvalidAmount(value.to_string()))
        }
    }

    /// Returns the amount as f64
    #[inline]
    pub const fn get(self) -> f64 {
        self.0
    }

    /// Multiplies by `factor` and rounds half away from zero.
    /// Returns `None` when the result does not fit in an `i64`.
    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub(crate) fn scaled(self, factor: f64) -> Option<i64> {
        let value = (self.0 * factor).round();
        if value.is_finite() && value >= i64::MIN as f64 && value < i64::MAX as f64 {
            Some(value as i64)
        } else {
            None
        }
    }
}

impl TryFrom<f64> for Amount {
    type Error = DateError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<i64> for Amount {
    type Error = DateError;

    #[allow(clippy::cast_precision_loss)]
    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::new(value as f64)
    }
}

impl FromStr for Amount {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s
            .trim()
            .parse::<f64>()
            .map_err(|_| DateError::InvalidAmount(s.to_owned()))?;
        Self::new(value)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}
