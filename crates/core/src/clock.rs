//! Time source for message timestamps.

use chrono::{DateTime, Local};

/// A source of the current local time.
pub trait Clock: Send + Sync + 'static {
    /// Returns the current local time.
    fn now(&self) -> DateTime<Local>;
}

/// The wall clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// A clock that is stuck at one instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub DateTime<Local>);

impl Clock for FixedClock {
    #[inline]
    fn now(&self) -> DateTime<Local> {
        self.0
    }
}

/// Formats a time the way the widget displays it, e.g. `3:07 PM`.
#[inline]
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    time.format("%-I:%M %p").to_string()
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_timestamp() {
        let afternoon = Local.with_ymd_and_hms(2025, 1, 1, 15, 7, 0).unwrap();
        assert_eq!(format_timestamp(&afternoon), "3:07 PM");
        let midnight = Local.with_ymd_and_hms(2025, 1, 1, 0, 30, 0).unwrap();
        assert_eq!(format_timestamp(&midnight), "12:30 AM");
        let noon = Local.with_ymd_and_hms(2025, 1, 1, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(&FixedClock(noon).now()), "12:00 PM");
    }
}
