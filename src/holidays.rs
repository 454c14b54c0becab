//! A fixed holiday calendar behind a simulated lookup.
//!
//! Lookups do no I/O. They wait out a configured delay with
//! `tokio::time::sleep` and then resolve to the same three dates every year,
//! so callers can exercise latency without a real holiday service.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts::{
    CHRISTMAS_DAY, DECEMBER, HOLIDAY_LOOKUP_DELAY_MS, JANUARY, NEW_YEARS_DAY, NEW_YEARS_EVE_DAY,
};
use crate::{Instant, Year, prelude::*};

/// The holidays in the calendar, in calendar order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum HolidayKind {
    #[display(fmt = "New Year's Day")]
    NewYearsDay,
    #[display(fmt = "Christmas")]
    Christmas,
    #[display(fmt = "New Year's Eve")]
    NewYearsEve,
}

impl HolidayKind {
    /// Every holiday, in calendar order
    pub const ALL: [Self; 3] = [Self::NewYearsDay, Self::Christmas, Self::NewYearsEve];

    /// (month, day) the holiday falls on every year
    pub const fn month_day(self) -> (u32, u32) {
        match self {
            Self::NewYearsDay => (JANUARY, NEW_YEARS_DAY),
            Self::Christmas => (DECEMBER, CHRISTMAS_DAY),
            Self::NewYearsEve => (DECEMBER, NEW_YEARS_EVE_DAY),
        }
    }

    /// Midnight UTC on this holiday in `year`, or `None` when the year is
    /// outside the representable range.
    pub fn on(self, year: Year) -> Option<Instant> {
        let (month, day) = self.month_day();
        Instant::from_ymd(year.get(), month, day).ok()
    }
}

/// Settings for a [`HolidayCalendar`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HolidayConfig {
    /// How long each lookup waits before resolving
    pub lookup_delay_ms: u64,
}

impl Default for HolidayConfig {
    fn default() -> Self {
        Self {
            lookup_delay_ms: HOLIDAY_LOOKUP_DELAY_MS,
        }
    }
}

impl HolidayConfig {
    /// The lookup delay as a `Duration`
    pub const fn lookup_delay(&self) -> Duration {
        Duration::from_millis(self.lookup_delay_ms)
    }
}

/// Answers holiday lookups for any year, using a [`HolidayConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HolidayCalendar {
    config: HolidayConfig,
}

impl HolidayCalendar {
    /// Creates a calendar with the given settings
    pub const fn new(config: HolidayConfig) -> Self {
        Self { config }
    }

    /// Returns the calendar's settings
    pub const fn config(&self) -> &HolidayConfig {
        &self.config
    }

    /// Holidays of `year` in calendar order, after the configured delay.
    ///
    /// Never fails. Holidays that cannot be represented (years beyond the
    /// supported range) are left out.
    pub async fn holidays(&self, year: Year) -> Vec<Instant> {
        tokio::time::sleep(self.config.lookup_delay()).await;

        let holidays: Vec<Instant> = HolidayKind::ALL
            .into_iter()
            .filter_map(|kind| {
                let date = kind.on(year);
                if date.is_none() {
                    log::warn!("{kind} is not representable in year {year}, skipping");
                }
                date
            })
            .collect();

        log::debug!("resolved {} holidays for {year}", holidays.len());
        holidays
    }

    /// True iff `date` falls on one of the holidays of its own year.
    pub async fn is_holiday(&self, date: &Instant) -> bool {
        self.holidays(date.year())
            .await
            .iter()
            .any(|holiday| holiday.is_same_day(date))
    }
}

/// Holidays of `year` from the default calendar.
pub async fn get_holidays(year: impl Into<Year>) -> Vec<Instant> {
    HolidayCalendar::default().holidays(year.into()).await
}

/// Whether `date` is a holiday in the default calendar.
pub async fn is_holiday(date: &Instant) -> bool {
    HolidayCalendar::default().is_holiday(date).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{instant, ymd};

    #[tokio::test(start_paused = true)]
    async fn test_get_holidays_for_year() {
        let holidays = get_holidays(2025).await;

        assert_eq!(holidays.len(), 3);
        assert_eq!(holidays[0].to_string(), "2025-01-01T00:00:00.000Z");
        assert_eq!(holidays[1].to_string(), "2025-12-25T00:00:00.000Z");
        assert_eq!(holidays[2].to_string(), "2025-12-31T00:00:00.000Z");
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_holidays_any_year() {
        for year in [1, 1900, 2024, 9999, -500] {
            let holidays = get_holidays(year).await;
            let expected: Vec<Instant> = [(1, 1), (12, 25), (12, 31)]
                .into_iter()
                .map(|(month, day)| ymd(year, month, day))
                .collect();
            assert_eq!(holidays, expected, "holidays for {year}");
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_get_holidays_unrepresentable_year_resolves_empty() {
        let holidays = get_holidays(i32::MAX).await;
        assert!(holidays.is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_waits_for_configured_delay() {
        let start = tokio::time::Instant::now();
        get_holidays(2025).await;
        assert!(start.elapsed() >= Duration::from_millis(HOLIDAY_LOOKUP_DELAY_MS));

        let calendar = HolidayCalendar::new(HolidayConfig { lookup_delay_ms: 250 });
        let start = tokio::time::Instant::now();
        calendar.is_holiday(&ymd(2025, 1, 1)).await;
        assert!(start.elapsed() >= Duration::from_millis(250));
    }

    #[tokio::test(start_paused = true)]
    async fn test_lookup_does_not_resolve_early() {
        let lookup = tokio::spawn(get_holidays(2025));
        // let the lookup start its timer at t=0
        tokio::task::yield_now().await;

        tokio::time::advance(Duration::from_millis(HOLIDAY_LOOKUP_DELAY_MS - 1)).await;
        assert!(!lookup.is_finished());

        let holidays = lookup.await.unwrap();
        assert_eq!(holidays.len(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_holiday_known_holiday() {
        assert!(is_holiday(&instant("2025-01-01T10:00:00Z")).await);
        assert!(is_holiday(&instant("2025-12-25T23:59:59Z")).await);
        assert!(is_holiday(&instant("2031-12-31T00:00:00Z")).await);
    }

    #[tokio::test(start_paused = true)]
    async fn test_is_holiday_non_holiday() {
        assert!(!is_holiday(&instant("2025-01-02T00:00:00Z")).await);
        assert!(!is_holiday(&instant("2025-12-24T23:59:59Z")).await);
        assert!(!is_holiday(&instant("2025-07-04T12:00:00Z")).await);
    }

    #[tokio::test]
    async fn test_zero_delay_calendar() {
        let calendar = HolidayCalendar::new(HolidayConfig { lookup_delay_ms: 0 });
        assert_eq!(calendar.holidays(Year::new(2025)).await.len(), 3);
    }

    #[test]
    fn test_holiday_kind_names_and_dates() {
        let names: Vec<String> = HolidayKind::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(names, ["New Year's Day", "Christmas", "New Year's Eve"]);

        assert_eq!(HolidayKind::Christmas.on(Year::new(2025)), Some(ymd(2025, 12, 25)));
        assert_eq!(HolidayKind::NewYearsEve.on(Year::new(i32::MIN)), None);
    }

    #[test]
    fn test_config_default_and_serde() {
        let config = HolidayConfig::default();
        assert_eq!(config.lookup_delay(), Duration::from_millis(100));
        assert_eq!(HolidayCalendar::default().config(), &config);

        let parsed: HolidayConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, config);

        let parsed: HolidayConfig = serde_json::from_str(r#"{"lookup_delay_ms": 5}"#).unwrap();
        assert_eq!(parsed.lookup_delay(), Duration::from_millis(5));
    }
}
