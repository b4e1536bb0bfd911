//! POSIX TZ string resolution shared by the TZif backed providers.
//!
//! A TZif footer describes the rule in effect after the last transition
//! in the file, e.g. `EST5EDT,M3.2.0,M11.1.0` or `HST10`.

use core::ops::Range;

use tzif::data::posix::{DstTransitionInfo, PosixTzString, TransitionDate, TransitionDay};

use crate::{
    provider::{LocalTimeRecord, UtcOffsetSeconds},
    utils::{self, SECONDS_PER_DAY},
    TzdbProviderError, TzdbProviderResult,
};

/// Stores the information about DST transitions for a given year
pub(crate) struct DstTransitionInfoForYear {
    pub(crate) dst_start_seconds: i64,
    pub(crate) dst_end_seconds: i64,
    pub(crate) std_offset: UtcOffsetSeconds,
    pub(crate) dst_offset: UtcOffsetSeconds,
}

impl DstTransitionInfoForYear {
    pub(crate) fn compute(
        posix_tz_string: &PosixTzString,
        dst_variant: &DstTransitionInfo,
        year: i32,
    ) -> TzdbProviderResult<Self> {
        let std_offset = UtcOffsetSeconds::from(&posix_tz_string.std_info);
        let dst_offset = UtcOffsetSeconds::from(&dst_variant.variant_info);
        // The start is written in standard local time, the end in DST local time.
        let dst_start_seconds =
            calculate_transition_seconds_for_year(year, dst_variant.start_date, std_offset)?;
        let dst_end_seconds =
            calculate_transition_seconds_for_year(year, dst_variant.end_date, dst_offset)?;
        Ok(Self {
            dst_start_seconds,
            dst_end_seconds,
            std_offset,
            dst_offset,
        })
    }

    // Returns the range between offsets in this year
    // This may cover DST or standard time, whichever starts first
    pub(crate) fn transition_range(&self) -> Range<i64> {
        if self.dst_start_seconds > self.dst_end_seconds {
            self.dst_end_seconds..self.dst_start_seconds
        } else {
            self.dst_start_seconds..self.dst_end_seconds
        }
    }

    /// Whether DST is in effect at `epoch_seconds`.
    pub(crate) fn is_dst_at(&self, epoch_seconds: i64) -> bool {
        let in_range = self.transition_range().contains(&epoch_seconds);
        // Southern hemisphere rules end DST before they start it.
        if self.dst_start_seconds > self.dst_end_seconds {
            !in_range
        } else {
            in_range
        }
    }
}

/// Resolves the local time record for `epoch_seconds` from a POSIX TZ string.
pub(crate) fn resolve_posix_tz_string_for_epoch_seconds(
    posix_tz_string: &PosixTzString,
    epoch_seconds: i64,
) -> TzdbProviderResult<LocalTimeRecord> {
    let Some(dst_variant) = &posix_tz_string.dst_info else {
        // Regardless of the time, there is one variant and we can return it.
        return Ok(LocalTimeRecord::standard(UtcOffsetSeconds::from(
            &posix_tz_string.std_info,
        )));
    };

    // Transitions never sit close enough to the new year for the
    // standard-time year to pick the wrong rule pair.
    let std_offset = UtcOffsetSeconds::from(&posix_tz_string.std_info);
    let (year, _, _) = utils::ymd_from_epoch_seconds(epoch_seconds + std_offset.0);
    let info = DstTransitionInfoForYear::compute(posix_tz_string, dst_variant, year)?;

    if info.is_dst_at(epoch_seconds) {
        Ok(LocalTimeRecord {
            offset: info.dst_offset,
            is_dst: true,
        })
    } else {
        Ok(LocalTimeRecord::standard(info.std_offset))
    }
}

/// Returns the epoch seconds at which `transition_date` occurs in `year`,
/// given the offset in effect just before the transition.
pub(crate) fn calculate_transition_seconds_for_year(
    year: i32,
    transition_date: TransitionDate,
    offset: UtcOffsetSeconds,
) -> TzdbProviderResult<i64> {
    let year_epoch_days = utils::epoch_days_from_gregorian_date(year, 1, 1);
    let is_leap = utils::is_leap(year);

    // Zero-indexed day of the year of the transition.
    let days = match transition_date.day {
        // Jn: 1..=365, February 29th is never counted.
        TransitionDay::NoLeap(day) if day > 59 => i64::from(day) - 1 + i64::from(is_leap),
        TransitionDay::NoLeap(day) => i64::from(day) - 1,
        // n: 0..=365, February 29th is counted in leap years.
        TransitionDay::WithLeap(day) => i64::from(day),
        TransitionDay::Mwd(month, week, day) => {
            let month = u8::try_from(month)
                .ok()
                .filter(|month| (1..=12).contains(month))
                .ok_or(TzdbProviderError::Malformed("POSIX rule month out of range"))?;
            let month_epoch_days = utils::epoch_days_from_gregorian_date(year, month, 1);
            let first_weekday = i64::from(utils::epoch_days_to_day_of_week(month_epoch_days));
            // Day of the month (1-indexed) of the first `day` in the month.
            let first = 1 + (i64::from(day) - first_weekday).rem_euclid(7);
            let mut day_of_month = first + (i64::from(week) - 1) * 7;
            // Week 5 means the last such weekday of the month.
            let days_in_month = i64::from(utils::iso_days_in_month(year, month));
            while day_of_month > days_in_month {
                day_of_month -= 7;
            }
            month_epoch_days - year_epoch_days + day_of_month - 1
        }
    };

    // Transition time is on local time, so we need to subtract the UTC offset to get the
    // UTC timestamp for the transition.
    Ok((year_epoch_days + days) * SECONDS_PER_DAY + transition_date.time.0 - offset.0)
}

#[cfg(test)]
mod tests {
    use tzif::data::{posix::TransitionDate, posix::TransitionDay, time::Seconds};

    use super::calculate_transition_seconds_for_year;
    use crate::{provider::UtcOffsetSeconds, utils, TzdbProviderError};

    fn utc_seconds(year: i32, month: u8, day: u8, hour: i64) -> i64 {
        utils::epoch_days_from_gregorian_date(year, month, day) * utils::SECONDS_PER_DAY
            + hour * utils::SECONDS_PER_HOUR
    }

    #[test]
    fn second_sunday_of_march() {
        // M3.2.0/2 in EST: 2017-03-12T02:00 local == 07:00 UTC
        let date = TransitionDate {
            day: TransitionDay::Mwd(3, 2, 0),
            time: Seconds(7200),
        };
        let seconds = calculate_transition_seconds_for_year(2017, date, UtcOffsetSeconds(-18000)).unwrap();
        assert_eq!(seconds, utc_seconds(2017, 3, 12, 7));
    }

    #[test]
    fn last_sunday_of_october() {
        // M10.5.0/3 in CEST: 2021-10-31T03:00 local == 01:00 UTC
        let date = TransitionDate {
            day: TransitionDay::Mwd(10, 5, 0),
            time: Seconds(10800),
        };
        let seconds = calculate_transition_seconds_for_year(2021, date, UtcOffsetSeconds(7200)).unwrap();
        assert_eq!(seconds, utc_seconds(2021, 10, 31, 1));
    }

    #[test]
    fn julian_days_skip_leap_day() {
        // J60 is March 1st in every year.
        let date = TransitionDate {
            day: TransitionDay::NoLeap(60),
            time: Seconds(0),
        };
        let seconds = calculate_transition_seconds_for_year(2024, date, UtcOffsetSeconds(0)).unwrap();
        assert_eq!(seconds, utc_seconds(2024, 3, 1, 0));

        // n = 59 is February 29th in a leap year.
        let date = TransitionDate {
            day: TransitionDay::WithLeap(59),
            time: Seconds(0),
        };
        let seconds = calculate_transition_seconds_for_year(2024, date, UtcOffsetSeconds(0)).unwrap();
        assert_eq!(seconds, utc_seconds(2024, 2, 29, 0));
    }

    #[test]
    fn month_outside_the_year_is_malformed() {
        for month in [0, 13] {
            let date = TransitionDate {
                day: TransitionDay::Mwd(month, 1, 0),
                time: Seconds(7200),
            };
            assert_eq!(
                calculate_transition_seconds_for_year(2024, date, UtcOffsetSeconds(0)),
                Err(TzdbProviderError::Malformed("POSIX rule month out of range"))
            );
        }
    }
}
