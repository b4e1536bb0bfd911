//! This module implements `ZonedTime`.

use alloc::borrow::Cow;
use core::fmt;

use tzdb_provider::TzdbProvider;

use crate::{
    iso::IsoDateTime, options::Disambiguation, timezone::UtcOffset, Instant, TimeZone,
    ZoneResult, NS_PER_SECOND,
};


/// An instant paired with the zone it is displayed in.
///
/// `date_time` is always the wall clock of `time_zone` at `instant`, i.e.
/// `instant + offset` in the ISO calendar.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZonedTime {
    instant: Instant,
    time_zone: TimeZone,
    offset: UtcOffset,
    is_dst: bool,
    date_time: IsoDateTime,
}

// ==== Public API ====

impl ZonedTime {
    /// Renders `instant` in `time_zone`.
    pub fn from_instant_with_provider(
        instant: Instant,
        time_zone: TimeZone,
        provider: &(impl TzdbProvider + ?Sized),
    ) -> ZoneResult<Self> {
        let record = time_zone.get_local_time_record_for(&instant, provider)?;
        let offset = UtcOffset::try_from(record.offset)?;
        Ok(Self {
            date_time: instant.to_date_time_with_offset(i64::from(offset.seconds())),
            instant,
            time_zone,
            offset,
            is_dst: record.is_dst,
        })
    }

    /// Reads `date_time` as local time in `time_zone`.
    ///
    /// Local times skipped or repeated by a transition are resolved with
    /// `disambiguation`. The resulting wall clock differs from `date_time`
    /// only when it falls in a gap.
    pub fn from_date_time_with_provider(
        date_time: IsoDateTime,
        time_zone: TimeZone,
        disambiguation: Disambiguation,
        provider: &(impl TzdbProvider + ?Sized),
    ) -> ZoneResult<Self> {
        let resolved = time_zone.get_epoch_seconds_for(
            date_time.to_local_epoch_seconds(),
            disambiguation,
            provider,
        )?;
        let instant = Instant::try_new(
            i128::from(resolved.seconds) * NS_PER_SECOND + i128::from(date_time.time.nanosecond),
        )?;
        let offset = UtcOffset::try_from(resolved.record.offset)?;
        Ok(Self {
            date_time: instant.to_date_time_with_offset(i64::from(offset.seconds())),
            instant,
            time_zone,
            offset,
            is_dst: resolved.record.is_dst,
        })
    }

    /// Returns the absolute instant.
    #[inline]
    #[must_use]
    pub fn instant(&self) -> Instant {
        self.instant
    }

    /// Returns the zone this value is displayed in.
    #[inline]
    #[must_use]
    pub fn time_zone(&self) -> &TimeZone {
        &self.time_zone
    }

    /// Returns the UTC offset in effect at the instant.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> UtcOffset {
        self.offset
    }

    /// Returns the wall-clock fields.
    #[inline]
    #[must_use]
    pub fn date_time(&self) -> IsoDateTime {
        self.date_time
    }

    /// Returns the local year.
    #[inline]
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date_time.date.year
    }

    /// Returns the local month, 1 through 12.
    #[inline]
    #[must_use]
    pub fn month(&self) -> u8 {
        self.date_time.date.month
    }

    /// Returns the local day of the month.
    #[inline]
    #[must_use]
    pub fn day(&self) -> u8 {
        self.date_time.date.day
    }

    /// Returns the local hour, 0 through 23.
    #[inline]
    #[must_use]
    pub fn hour(&self) -> u8 {
        self.date_time.time.hour
    }

    /// Returns the local minute.
    #[inline]
    #[must_use]
    pub fn minute(&self) -> u8 {
        self.date_time.time.minute
    }

    /// Returns the local second.
    #[inline]
    #[must_use]
    pub fn second(&self) -> u8 {
        self.date_time.time.second
    }

    /// Returns the sub-second part in nanoseconds.
    #[inline]
    #[must_use]
    pub fn nanosecond(&self) -> u32 {
        self.date_time.time.nanosecond
    }

    /// Returns the day of the week, with Monday as 1 and Sunday as 7.
    #[must_use]
    pub fn day_of_week(&self) -> u8 {
        self.date_time.date.day_of_week()
    }

    /// Whether daylight saving time is in effect at the instant.
    #[inline]
    #[must_use]
    pub fn is_dst(&self) -> bool {
        self.is_dst
    }

    /// Returns the display name of the zone, e.g. `"Hawaii"`.
    #[must_use]
    pub fn zone_name(&self) -> Cow<'_, str> {
        self.time_zone.name()
    }

    /// Formats as an RFC 3339 timestamp with a numeric offset.
    ///
    /// ```rust
    /// use zoned_rs::{Instant, ZoneContext};
    ///
    /// let context = ZoneContext::default();
    /// let instant = Instant::utc(2024, 7, 1, 12, 0, 0).unwrap();
    /// let paris = context.convert_to_zone(instant, "Europe/Paris").unwrap();
    /// assert_eq!(paris.to_rfc3339(), "2024-07-01T14:00:00+02:00");
    /// ```
    #[must_use]
    pub fn to_rfc3339(&self) -> String {
        format!("{}{}", self.date_time, self.offset)
    }
}

impl fmt::Display for ZonedTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}[{}]",
            self.date_time,
            self.offset,
            self.time_zone.identifier()
        )
    }
}
