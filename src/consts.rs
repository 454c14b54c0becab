/// Simulated latency of a holiday lookup, in milliseconds
pub const HOLIDAY_LOOKUP_DELAY_MS: u64 = 100;

/// Milliseconds in one second
pub const MILLIS_PER_SECOND: f64 = 1_000.0;
/// Milliseconds in one minute
pub const MILLIS_PER_MINUTE: f64 = 60_000.0;
/// Days in one week
pub const DAYS_PER_WEEK: f64 = 7.0;
/// Months in one year
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Month number for January
pub const JANUARY: u32 = 1;
/// Month number for December
pub const DECEMBER: u32 = 12;

/// Day of month for New Year's Day
pub const NEW_YEARS_DAY: u32 = 1;
/// Day of month for Christmas
pub const CHRISTMAS_DAY: u32 = 25;
/// Day of month for New Year's Eve
pub const NEW_YEARS_EVE_DAY: u32 = 31;

/// Calendar date without time (ISO 8601)
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Date and time without an offset, read as UTC
pub const NAIVE_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";
/// Date and time in UTC; `%Y` also takes signed years beyond four digits
pub const UTC_DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.fZ";

/// Range separator (ISO 8601 interval notation)
pub const RANGE_SEPARATOR: char = '/';
