//! Fixture constructors shared by the unit tests.

use crate::Instant;

pub fn instant(s: &str) -> Instant {
    s.parse()
        .unwrap_or_else(|err| panic!("test fixture {s:?} should parse: {err}"))
}

pub fn ymd(year: i32, month: u32, day: u32) -> Instant {
    ymd_hms(year, month, day, 0, 0, 0)
}

pub fn ymd_hms(year: i32, month: u32, day: u32, hour: u32, minute: u32, second: u32) -> Instant {
    Instant::from_ymd_hms(year, month, day, hour, minute, second)
        .unwrap_or_else(|err| panic!("test fixture date should be valid: {err}"))
}
