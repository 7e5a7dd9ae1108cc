//! UTC calendar utilities without timezone dependencies.
//!
//! The only calendar fact resolution needs is the current UTC year for
//! copyright templating, derived from the unix epoch with plain civil-date
//! arithmetic. No external date crates.

use std::time::SystemTime;

/// Days in each month of a non-leap year, cumulative at month start.
#[cfg(test)]
const DAYS_BEFORE_MONTH: [u32; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

/// Current UTC year as reported by the system clock.
///
/// This is the single clock read performed during resolution; everything
/// else in the crate is a pure function of its inputs.
pub fn current_year() -> u16 {
    let secs = SystemTime::now()
        .duration_since(SystemTime::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    year_of_unix_seconds(secs)
}

/// Convert unix seconds to a UTC calendar year.
pub fn year_of_unix_seconds(secs: u64) -> u16 {
    let mut days = secs / 86_400;
    let mut year: u16 = 1970;
    loop {
        let year_days = if is_leap_year(year) { 366 } else { 365 };
        if days < year_days {
            break;
        }
        days -= year_days;
        year += 1;
    }
    year
}

#[inline]
#[allow(clippy::manual_is_multiple_of)] // Manual impl for const fn
const fn is_leap_year(year: u16) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Day-of-year (0-based) for a given month/day, used only in tests to build
/// epoch-second fixtures.
#[cfg(test)]
fn day_of_year(year: u16, month: u8, day: u8) -> u32 {
    let mut doy = DAYS_BEFORE_MONTH[(month - 1) as usize] + u32::from(day) - 1;
    if month > 2 && is_leap_year(year) {
        doy += 1;
    }
    doy
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unix_seconds(year: u16, month: u8, day: u8) -> u64 {
        let mut days: u64 = 0;
        for y in 1970..year {
            days += if is_leap_year(y) { 366 } else { 365 };
        }
        days += u64::from(day_of_year(year, month, day));
        days * 86_400
    }

    #[test]
    fn test_epoch_is_1970() {
        assert_eq!(year_of_unix_seconds(0), 1970);
    }

    #[test]
    fn test_known_dates() {
        assert_eq!(year_of_unix_seconds(unix_seconds(2024, 6, 15)), 2024);
        assert_eq!(year_of_unix_seconds(unix_seconds(2000, 1, 1)), 2000);
        // Leap day itself
        assert_eq!(year_of_unix_seconds(unix_seconds(2024, 2, 29)), 2024);
    }

    #[test]
    fn test_year_boundary() {
        let dec31 = unix_seconds(2023, 12, 31) + 86_399;
        let jan1 = unix_seconds(2024, 1, 1);
        assert_eq!(year_of_unix_seconds(dec31), 2023);
        assert_eq!(year_of_unix_seconds(jan1), 2024);
    }

    #[test]
    fn test_current_year_sane() {
        // The build clock is at least in this decade.
        assert!(current_year() >= 2024);
    }
}
