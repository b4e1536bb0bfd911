//! Utility date and time equations for time zone data

mod neri_schneider;

pub use neri_schneider::{epoch_days_from_gregorian_date, ymd_from_epoch_days};

pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 60 * SECONDS_PER_MINUTE;
pub const SECONDS_PER_DAY: i64 = 24 * SECONDS_PER_HOUR;

/// Days from the epoch covered by the supported instant range.
pub const MAX_EPOCH_DAYS: i64 = 100_000_000;

pub const fn is_leap(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        _ if is_leap(year) => 29,
        _ => 28,
    }
}

/// Returns the day of the week for `epoch_days`, where Sunday is 0.
pub const fn epoch_days_to_day_of_week(epoch_days: i64) -> u8 {
    // 1970-01-01 was a Thursday.
    (epoch_days + 4).rem_euclid(7) as u8
}

/// Returns the gregorian year, month and day for `epoch_seconds`.
pub const fn ymd_from_epoch_seconds(epoch_seconds: i64) -> (i32, u8, u8) {
    ymd_from_epoch_days(epoch_seconds.div_euclid(SECONDS_PER_DAY) as i32)
}
