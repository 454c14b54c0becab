mod clock;
mod consts;
mod holidays;
mod prelude;
mod range;
#[cfg(test)]
mod test_utils;
mod types;

pub use clock::{Clock, FixedClock, SystemClock, current_year, get_current_year};
pub use consts::*;
pub use holidays::{HolidayCalendar, HolidayConfig, HolidayKind, get_holidays, is_holiday};
pub use range::{DateRange, RangeError, is_within_range};
pub use types::{Amount, Unit, Year};

use crate::prelude::*;
use chrono::{
    DateTime, Datelike, Months, NaiveDate, NaiveDateTime, SecondsFormat, SubsecRound, TimeDelta,
    TimeZone, Utc,
};
use std::str::FromStr;
use types::Step;

/// A point in time with millisecond precision, anchored to UTC.
///
/// Every `Instant` is a valid calendar date and time: malformed or impossible
/// inputs are rejected when one is built, never later during arithmetic.
/// Operations never mutate an `Instant`; they return new ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{}", "_0.to_rfc3339_opts(SecondsFormat::Millis, true)")]
pub struct Instant(DateTime<Utc>);

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid date provided: {_0}")]
    InvalidDate(String),
    #[display(fmt = "Invalid amount provided: {_0}")]
    InvalidAmount(String),
    #[display(fmt = "Date arithmetic out of range: cannot add {unit} to {date}")]
    Overflow { date: Instant, unit: Unit },
}

impl std::error::Error for DateError {}

impl Instant {
    /// Current wall-clock time. Prefer going through a [`Clock`].
    pub fn now() -> Self {
        Self::from_datetime(Utc::now())
    }

    /// Midnight UTC on the given calendar day
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the day does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DateError> {
        Self::from_ymd_hms(year, month, day, 0, 0, 0)
    }

    /// # Errors
    /// Returns `DateError::InvalidDate` if the date or time of day does not exist.
    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DateError> {
        Utc.with_ymd_and_hms(year, month, day, hour, minute, second)
            .single()
            .map(Self)
            .ok_or_else(|| {
                DateError::InvalidDate(format!(
                    "{year:04}-{month:02}-{day:02}T{hour:02}:{minute:02}:{second:02}"
                ))
            })
    }

    /// # Errors
    /// Returns `DateError::InvalidDate` if the timestamp is outside the supported range.
    pub fn from_timestamp_millis(millis: i64) -> Result<Self, DateError> {
        DateTime::from_timestamp_millis(millis)
            .map(Self)
            .ok_or_else(|| DateError::InvalidDate(format!("timestamp {millis}ms")))
    }

    fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.trunc_subsecs(3))
    }

    /// Milliseconds since the Unix epoch
    pub fn timestamp_millis(&self) -> i64 {
        self.0.timestamp_millis()
    }

    /// Calendar year (UTC)
    pub fn year(&self) -> Year {
        Year::new(self.0.year())
    }

    /// Calendar month (UTC), 1-12
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (UTC), 1-31
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Calendar day (UTC) this instant falls on
    pub(crate) fn calendar_day(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Returns a new instant `amount` units after this one.
    ///
    /// Seconds and minutes move by elapsed milliseconds. Days and weeks move
    /// by whole days and months and years by whole calendar months, rounding
    /// fractional amounts half away from zero. Month arithmetic clamps to the
    /// last day of the target month: Jan 31 plus one month is Feb 28 (or 29).
    ///
    /// # Errors
    /// Returns `DateError::Overflow` if the result is outside the supported range.
    pub fn add(&self, amount: Amount, unit: Unit) -> Result<Self, DateError> {
        let overflow = || DateError::Overflow { date: *self, unit };

        let shifted = match unit.step() {
            Step::Millis(per_unit) => amount
                .scaled(per_unit)
                .and_then(TimeDelta::try_milliseconds)
                .and_then(|delta| self.0.checked_add_signed(delta)),
            Step::Days(per_unit) => amount
                .scaled(per_unit)
                .and_then(TimeDelta::try_days)
                .and_then(|delta| self.0.checked_add_signed(delta)),
            Step::Months(per_unit) => amount
                .scaled(per_unit)
                .and_then(|months| shift_months(self.0, months)),
        };

        shifted.map(Self).ok_or_else(overflow)
    }

    /// Strictly earlier than `other`
    pub fn is_before(&self, other: &Self) -> bool {
        self < other
    }

    /// Same UTC calendar day as `other`, whatever the time of day
    pub fn is_same_day(&self, other: &Self) -> bool {
        self.calendar_day() == other.calendar_day()
    }
}

fn shift_months(datetime: DateTime<Utc>, months: i64) -> Option<DateTime<Utc>> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        datetime.checked_add_months(magnitude)
    } else {
        datetime.checked_sub_months(magnitude)
    }
}

impl FromStr for Instant {
    type Err = DateError;

    /// Accepts RFC 3339 (any offset, converted to UTC), a `Z` date and time
    /// with a signed or wider-than-four-digit year as `Display` writes it, a
    /// date and time without offset (read as UTC), or a bare `YYYY-MM-DD`
    /// (midnight UTC).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::InvalidDate("empty input".to_owned()));
        }

        if let Ok(datetime) = DateTime::parse_from_rfc3339(trimmed) {
            return Ok(Self::from_datetime(datetime.with_timezone(&Utc)));
        }

        // RFC 3339 stops at four-digit years; Display writes `-0500-..` and `+12025-..`
        let naive = NaiveDateTime::parse_from_str(trimmed, UTC_DATE_TIME_FORMAT)
            .or_else(|_| NaiveDateTime::parse_from_str(trimmed, NAIVE_DATE_TIME_FORMAT));
        if let Ok(naive) = naive {
            return Ok(Self::from_datetime(Utc.from_utc_datetime(&naive)));
        }

        NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| Self(Utc.from_utc_datetime(&naive)))
            .ok_or_else(|| DateError::InvalidDate(trimmed.to_owned()))
    }
}

impl serde::Serialize for Instant {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Instant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Adds `amount` of `unit` to `date`, returning a new instant.
///
/// Pass [`Unit::default()`] (days) when no particular unit is needed.
///
/// # Errors
/// Returns `DateError::InvalidAmount` if `amount` is NaN or infinite, and
/// `DateError::Overflow` if the result is outside the supported range.
pub fn add(date: &Instant, amount: f64, unit: Unit) -> Result<Instant, DateError> {
    let amount = Amount::new(amount)?;
    date.add(amount, unit)
}

/// True iff `date` is strictly earlier than `compare_date`.
pub fn is_date_before(date: &Instant, compare_date: &Instant) -> bool {
    date.is_before(compare_date)
}

/// True iff both instants fall on the same UTC calendar day.
pub fn is_same_day(date: &Instant, compare_date: &Instant) -> bool {
    date.is_same_day(compare_date)
}
