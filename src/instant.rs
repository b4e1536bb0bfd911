//! An implementation of a UTC referenced instant.

use core::fmt;

use crate::{
    iso::IsoDateTime,
    ZoneError, ZoneResult, NS_MAX_INSTANT, NS_MIN_INSTANT, NS_PER_SECOND,
};

const NS_PER_MILLISECOND: i128 = 1_000_000;

/// An absolute point in time, stored as nanoseconds since the Unix epoch.
///
/// Valid instants lie within 10^8 days on either side of
/// 1970-01-01T00:00:00Z.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant(i128);

// ==== Public API ====

impl Instant {
    /// Creates a new `Instant` from epoch nanoseconds.
    pub fn try_new(epoch_nanoseconds: i128) -> ZoneResult<Self> {
        if !is_valid_epoch_nanos(epoch_nanoseconds) {
            return Err(ZoneError::range()
                .with_message("Instant nanoseconds are not within a valid epoch range."));
        }
        Ok(Self(epoch_nanoseconds))
    }

    /// Creates a new `Instant` from epoch seconds.
    pub fn from_epoch_seconds(epoch_seconds: i64) -> ZoneResult<Self> {
        Self::try_new(i128::from(epoch_seconds) * NS_PER_SECOND)
    }

    /// Creates a new `Instant` from epoch milliseconds.
    pub fn from_epoch_milliseconds(epoch_milliseconds: i64) -> ZoneResult<Self> {
        Self::try_new(i128::from(epoch_milliseconds) * NS_PER_MILLISECOND)
    }

    /// Creates the `Instant` at which a UTC clock reads `date_time`.
    pub fn from_utc(date_time: IsoDateTime) -> ZoneResult<Self> {
        Self::try_new(date_time.to_local_epoch_nanoseconds())
    }

    /// Creates an `Instant` from UTC calendar fields.
    ///
    /// ```rust
    /// use zoned_rs::Instant;
    ///
    /// let instant = Instant::utc(2000, 1, 1, 0, 0, 0).unwrap();
    /// assert_eq!(instant.epoch_seconds(), 946_684_800);
    /// ```
    pub fn utc(
        year: i32,
        month: u8,
        day: u8,
        hour: u8,
        minute: u8,
        second: u8,
    ) -> ZoneResult<Self> {
        Self::from_utc(IsoDateTime::try_from_fields(
            year, month, day, hour, minute, second, 0,
        )?)
    }

    /// Returns the current system time as an `Instant`.
    #[cfg(feature = "sys")]
    pub fn now() -> ZoneResult<Self> {
        Self::try_new(crate::sys::get_system_nanoseconds()?)
    }

    /// Returns the whole seconds since the epoch, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_seconds(&self) -> i64 {
        self.0.div_euclid(NS_PER_SECOND) as i64
    }

    /// Returns the whole milliseconds since the epoch, rounded toward negative infinity.
    #[must_use]
    pub fn epoch_milliseconds(&self) -> i64 {
        self.0.div_euclid(NS_PER_MILLISECOND) as i64
    }

    /// Returns the nanoseconds since the epoch.
    #[must_use]
    pub const fn epoch_nanoseconds(&self) -> i128 {
        self.0
    }

    /// Returns the wall-clock fields of this instant in UTC.
    #[must_use]
    pub fn to_utc_date_time(&self) -> IsoDateTime {
        self.to_date_time_with_offset(0)
    }
}

// ==== Private API ====

impl Instant {
    /// The nanosecond within the current second.
    pub(crate) fn subsecond_nanoseconds(&self) -> u32 {
        self.0.rem_euclid(NS_PER_SECOND) as u32
    }

    /// Renders this instant as a wall clock `offset_seconds` east of UTC.
    pub(crate) fn to_date_time_with_offset(&self, offset_seconds: i64) -> IsoDateTime {
        IsoDateTime::from_local_epoch_seconds(
            self.epoch_seconds() + offset_seconds,
            self.subsecond_nanoseconds(),
        )
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Z", self.to_utc_date_time())
    }
}

#[inline]
fn is_valid_epoch_nanos(nanos: i128) -> bool {
    (NS_MIN_INSTANT..=NS_MAX_INSTANT).contains(&nanos)
}

#[cfg(test)]
mod tests {
    use super::Instant;
    use crate::{ErrorKind, NS_MAX_INSTANT, NS_MIN_INSTANT};

    #[test]
    fn max_and_min_limits() {
        assert!(Instant::try_new(NS_MAX_INSTANT).is_ok());
        assert!(Instant::try_new(NS_MIN_INSTANT).is_ok());
        let err = Instant::try_new(NS_MAX_INSTANT + 1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Range);
        assert!(Instant::try_new(NS_MIN_INSTANT - 1).is_err());
    }

    #[test]
    fn epoch_accessors_floor() {
        let instant = Instant::try_new(-1).unwrap();
        assert_eq!(instant.epoch_seconds(), -1);
        assert_eq!(instant.epoch_milliseconds(), -1);
        assert_eq!(instant.subsecond_nanoseconds(), 999_999_999);

        let instant = Instant::from_epoch_milliseconds(1_500).unwrap();
        assert_eq!(instant.epoch_seconds(), 1);
        assert_eq!(instant.epoch_nanoseconds(), 1_500_000_000);
    }

    #[test]
    fn display_is_utc() {
        let instant = Instant::utc(2000, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(instant.to_string(), "2000-01-01T10:00:00Z");

        let instant = Instant::try_new(-1).unwrap();
        assert_eq!(instant.to_string(), "1969-12-31T23:59:59.999999999Z");
    }

    #[test]
    fn utc_fields_round_trip() {
        let instant = Instant::from_epoch_seconds(951_782_400).unwrap();
        let fields = instant.to_utc_date_time();
        assert_eq!((fields.date.year, fields.date.month, fields.date.day), (2000, 2, 29));
        assert_eq!(Instant::from_utc(fields).unwrap(), instant);
    }
}
