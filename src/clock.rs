use crate::{Instant, Year};

/// Source of "now".
///
/// Anything that needs the current time takes a `Clock` instead of reading
/// the system clock, so tests can pin the time with a [`FixedClock`].
pub trait Clock: Send + Sync {
    /// The current instant as this clock sees it.
    fn now(&self) -> Instant;
}

/// Reads the operating system's wall clock.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// Always reports the same instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock {
    now: Instant,
}

impl FixedClock {
    /// A clock stopped at `now`
    pub const fn new(now: Instant) -> Self {
        Self { now }
    }
}

impl Clock for FixedClock {
    fn now(&self) -> Instant {
        self.now
    }
}

/// Calendar year (UTC) of `clock`'s current time.
pub fn current_year<C: Clock + ?Sized>(clock: &C) -> Year {
    clock.now().year()
}

/// Calendar year (UTC) of the system clock's current time.
pub fn get_current_year() -> Year {
    current_year(&SystemClock)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{instant, ymd};

    #[test]
    fn test_current_year_follows_fixed_clock() {
        let clock = FixedClock::new(instant("2025-05-15T12:00:00Z"));
        assert_eq!(current_year(&clock), Year::new(2025));
    }

    #[test]
    fn test_current_year_at_year_boundary() {
        let clock = FixedClock::new(instant("2025-12-31T23:59:59.999Z"));
        assert_eq!(current_year(&clock), Year::new(2025));

        let clock = FixedClock::new(instant("2026-01-01T00:00:00Z"));
        assert_eq!(current_year(&clock), Year::new(2026));
    }

    #[test]
    fn test_clock_trait_object_works() {
        let clock: Box<dyn Clock> = Box::new(FixedClock::new(ymd(1999, 6, 1)));
        assert_eq!(current_year(clock.as_ref()), Year::new(1999));
    }

    #[test]
    fn test_system_clock_matches_get_current_year() {
        let before = SystemClock.now().year();
        let year = get_current_year();
        let after = SystemClock.now().year();
        assert!(before <= year && year <= after);
    }
}
