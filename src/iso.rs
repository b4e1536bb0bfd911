//! This module implements the wall-clock field records.
//!
//! The three record types are:
//!   - `IsoDateTime`
//!   - `IsoDate`
//!   - `IsoTime`
//!
//! An `IsoDate` represents the year, month and day of the proleptic
//! Gregorian calendar. An `IsoTime` represents the hour, minute, second
//! and nanosecond of a day. An `IsoDateTime` has both.
//!
//! None of these records carry a time zone; they are the fields a clock
//! on the wall would display in some zone.

use core::fmt;

use tzdb_provider::utils::{self, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

use crate::{ZoneError, ZoneResult, NS_PER_SECOND};

/// `IsoDateTime` is the record of the `IsoDate` and `IsoTime` fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDateTime {
    pub date: IsoDate,
    pub time: IsoTime,
}

impl IsoDateTime {
    /// Creates a new `IsoDateTime` without any validation.
    pub(crate) const fn new_unchecked(date: IsoDate, time: IsoTime) -> Self {
        Self { date, time }
    }

    /// Creates a new validated `IsoDateTime` that is within valid limits.
    pub fn new(date: IsoDate, time: IsoTime) -> ZoneResult<Self> {
        let result = Self::new_unchecked(date, time);
        if !result.is_within_limits() {
            return Err(ZoneError::range().with_message("IsoDateTime not within a valid range."));
        }
        Ok(result)
    }

    /// Creates an `IsoDateTime` from its individual fields.
    pub fn try_from_fields(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
        nanosecond: u32,
    ) -> ZoneResult<Self> {
        Self::new(
            IsoDate::new(year, month, day)?,
            IsoTime::new(hour, minute, second, nanosecond)?,
        )
    }

    /// Creates the `IsoDateTime` that a clock reads `local_seconds` seconds and
    /// `nanosecond` nanoseconds after 1970-01-01T00:00:00.
    pub(crate) fn from_local_epoch_seconds(local_seconds: i64, nanosecond: u32) -> Self {
        let epoch_days = local_seconds.div_euclid(SECONDS_PER_DAY);
        let seconds_in_day = local_seconds.rem_euclid(SECONDS_PER_DAY);
        let (year, month, day) = utils::ymd_from_epoch_days(epoch_days as i32);
        let time = IsoTime {
            hour: (seconds_in_day / SECONDS_PER_HOUR) as u8,
            minute: ((seconds_in_day % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE) as u8,
            second: (seconds_in_day % SECONDS_PER_MINUTE) as u8,
            nanosecond,
        };
        Self::new_unchecked(IsoDate { year, month, day }, time)
    }

    /// Returns the seconds since 1970-01-01T00:00:00 on the wall clock,
    /// ignoring the sub-second part.
    pub fn to_local_epoch_seconds(&self) -> i64 {
        self.date.to_epoch_days() * SECONDS_PER_DAY + self.time.seconds_in_day()
    }

    /// Returns the nanoseconds since 1970-01-01T00:00:00 on the wall clock.
    pub(crate) fn to_local_epoch_nanoseconds(&self) -> i128 {
        i128::from(self.to_local_epoch_seconds()) * NS_PER_SECOND
            + i128::from(self.time.nanosecond)
    }

    fn is_within_limits(&self) -> bool {
        // Within a day of the instant range, so any offset can be applied.
        let days = self.date.to_epoch_days();
        days.abs() <= utils::MAX_EPOCH_DAYS + 1
    }
}

impl fmt::Display for IsoDateTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}T{}", self.date, self.time)
    }
}

/// `IsoDate` is the record of the year, month and day fields.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoDate {
    pub year: i32,
    pub month: u8,
    pub day: u8,
}

impl Default for IsoDate {
    fn default() -> Self {
        Self {
            year: 1970,
            month: 1,
            day: 1,
        }
    }
}

impl IsoDate {
    /// Creates a new validated `IsoDate`.
    pub fn new(year: i32, month: u8, day: u8) -> ZoneResult<Self> {
        if !(1..=12).contains(&month) {
            return Err(ZoneError::range().with_message("month is not within a valid range."));
        }
        if day == 0 || day > utils::iso_days_in_month(year, month) {
            return Err(ZoneError::range().with_message("day is not within a valid range."));
        }
        if !(-271_821..=275_760).contains(&year) {
            return Err(ZoneError::range().with_message("year is not within a valid range."));
        }
        Ok(Self { year, month, day })
    }

    /// Days since 1970-01-01.
    pub fn to_epoch_days(&self) -> i64 {
        utils::epoch_days_from_gregorian_date(self.year, self.month, self.day)
    }

    /// Returns the day of the week, with Monday as 1 and Sunday as 7.
    pub fn day_of_week(&self) -> u8 {
        match utils::epoch_days_to_day_of_week(self.to_epoch_days()) {
            0 => 7,
            day => day,
        }
    }
}

impl fmt::Display for IsoDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if (0..=9999).contains(&self.year) {
            write!(f, "{:04}", self.year)?;
        } else {
            // Expanded years always carry a sign and six digits.
            let sign = if self.year < 0 { '-' } else { '+' };
            write!(f, "{sign}{:06}", self.year.unsigned_abs())?;
        }
        write!(f, "-{:02}-{:02}", self.month, self.day)
    }
}

/// `IsoTime` is the record of the time of day fields.
#[non_exhaustive]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct IsoTime {
    pub hour: u8,
    pub minute: u8,
    pub second: u8,
    pub nanosecond: u32,
}

impl IsoTime {
    /// Creates a new validated `IsoTime`.
    pub fn new(hour: u8, minute: u8, second: u8, nanosecond: u32) -> ZoneResult<Self> {
        if hour > 23 || minute > 59 || second > 59 || i128::from(nanosecond) >= NS_PER_SECOND {
            return Err(ZoneError::range().with_message("IsoTime is not within a valid range."));
        }
        Ok(Self {
            hour,
            minute,
            second,
            nanosecond,
        })
    }

    pub(crate) fn seconds_in_day(&self) -> i64 {
        i64::from(self.hour) * SECONDS_PER_HOUR
            + i64::from(self.minute) * SECONDS_PER_MINUTE
            + i64::from(self.second)
    }
}

impl fmt::Display for IsoTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}:{:02}", self.hour, self.minute, self.second)?;
        write_fraction(f, self.nanosecond)
    }
}

/// Writes `.fffffffff` with trailing zeros removed, or nothing for zero.
fn write_fraction(f: &mut fmt::Formatter<'_>, nanosecond: u32) -> fmt::Result {
    if nanosecond == 0 {
        return Ok(());
    }
    let mut digits = nanosecond;
    let mut width = 9;
    while digits % 10 == 0 {
        digits /= 10;
        width -= 1;
    }
    write!(f, ".{digits:0width$}")
}

#[cfg(test)]
mod tests {
    use super::{IsoDate, IsoDateTime, IsoTime};

    #[test]
    fn validates_fields() {
        assert!(IsoDate::new(2023, 2, 29).is_err());
        assert!(IsoDate::new(2024, 2, 29).is_ok());
        assert!(IsoDate::new(2024, 13, 1).is_err());
        assert!(IsoDate::new(2024, 4, 31).is_err());
        assert!(IsoTime::new(24, 0, 0, 0).is_err());
        assert!(IsoTime::new(23, 59, 59, 999_999_999).is_ok());
        assert!(IsoTime::new(23, 59, 59, 1_000_000_000).is_err());
    }

    #[test]
    fn local_epoch_seconds_round_trip() {
        let dt = IsoDateTime::try_from_fields(1999, 12, 31, 14, 0, 0, 0).unwrap();
        let seconds = dt.to_local_epoch_seconds();
        assert_eq!(seconds, 946_648_800);
        assert_eq!(IsoDateTime::from_local_epoch_seconds(seconds, 0), dt);

        let before_epoch = IsoDateTime::from_local_epoch_seconds(-1, 5);
        assert_eq!(before_epoch.to_string(), "1969-12-31T23:59:59.000000005");
    }

    #[test]
    fn display() {
        let dt = IsoDateTime::try_from_fields(2000, 1, 1, 10, 5, 0, 120_000_000).unwrap();
        assert_eq!(dt.to_string(), "2000-01-01T10:05:00.12");
        let date = IsoDate::new(-5, 3, 1).unwrap();
        assert_eq!(date.to_string(), "-000005-03-01");
        let date = IsoDate::new(12_345, 3, 1).unwrap();
        assert_eq!(date.to_string(), "+012345-03-01");
    }

    #[test]
    fn day_of_week() {
        // 2000-01-01 was a Saturday
        assert_eq!(IsoDate::new(2000, 1, 1).unwrap().day_of_week(), 6);
        assert_eq!(IsoDate::new(2023, 12, 31).unwrap().day_of_week(), 7);
    }
}
