//! The `TzdbProvider` trait.

use alloc::borrow::Cow;

use crate::{utils::SECONDS_PER_DAY, TzdbProviderResult};

/// `UtcOffsetSeconds` represents the amount of seconds we need to add to the UTC to reach the local time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Hash)]
pub struct UtcOffsetSeconds(pub i64);

#[cfg(feature = "tzif")]
use tzif::data::{posix::TimeZoneVariantInfo, tzif::LocalTimeTypeRecord};

#[cfg(feature = "tzif")]
impl From<&TimeZoneVariantInfo> for UtcOffsetSeconds {
    fn from(value: &TimeZoneVariantInfo) -> Self {
        // The POSIX tz string stores offsets as negative offsets;
        // i.e. "seconds that must be added to reach UTC"
        Self(-value.offset.0)
    }
}

#[cfg(feature = "tzif")]
impl From<LocalTimeTypeRecord> for UtcOffsetSeconds {
    fn from(value: LocalTimeTypeRecord) -> Self {
        Self(value.utoff.0)
    }
}

/// `LocalTimeRecord` represents the local time type in effect at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocalTimeRecord {
    /// The time zone offset.
    pub offset: UtcOffsetSeconds,
    /// Whether the local time record is a Daylight Savings Time.
    pub is_dst: bool,
}

impl LocalTimeRecord {
    /// A standard time record with `offset`.
    pub const fn standard(offset: UtcOffsetSeconds) -> Self {
        Self {
            offset,
            is_dst: false,
        }
    }
}

#[cfg(feature = "tzif")]
impl From<LocalTimeTypeRecord> for LocalTimeRecord {
    fn from(value: LocalTimeTypeRecord) -> Self {
        Self {
            offset: value.into(),
            is_dst: value.is_dst,
        }
    }
}

/// An epoch seconds value and the local time record in effect at it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct EpochSecondsAndRecord {
    /// The resolved epoch seconds value
    pub seconds: i64,
    /// The local time record in effect at `seconds`
    pub record: LocalTimeRecord,
}

/// The offsets on either side of a skipped range of local time.
///
/// Returned when a local date-time falls into a gap, so callers can shift
/// the wall clock by the size of the transition.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GapEntryOffsets {
    /// The offset in effect before the gap.
    pub offset_before: UtcOffsetSeconds,
    /// The offset in effect after the gap.
    pub offset_after: UtcOffsetSeconds,
}

/// The potential candidates for a given local datetime
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CandidateEpochSeconds {
    /// The local time was skipped.
    Zero(GapEntryOffsets),
    /// The local time occurs once.
    One(EpochSecondsAndRecord),
    /// The local time is repeated, earlier instant first.
    Two([EpochSecondsAndRecord; 2]),
}

impl CandidateEpochSeconds {
    /// Returns the candidates in ascending order.
    pub fn as_slice(&self) -> &[EpochSecondsAndRecord] {
        match *self {
            Self::Zero(..) => &[],
            Self::One(ref one) => core::slice::from_ref(one),
            Self::Two(ref multiple) => &multiple[..],
        }
    }

    /// Whether the local time was skipped.
    pub fn is_empty(&self) -> bool {
        matches!(*self, Self::Zero(..))
    }

    /// Returns the number of candidates, at most two.
    pub fn len(&self) -> usize {
        match *self {
            Self::Zero(..) => 0,
            Self::One(..) => 1,
            Self::Two(..) => 2,
        }
    }

    /// Returns the earliest candidate.
    pub fn first(&self) -> Option<EpochSecondsAndRecord> {
        match *self {
            Self::Zero(..) => None,
            Self::One(one) | Self::Two([one, _]) => Some(one),
        }
    }

    /// Returns the latest candidate.
    pub fn last(&self) -> Option<EpochSecondsAndRecord> {
        match *self {
            Self::Zero(..) => None,
            Self::One(last) | Self::Two([_, last]) => Some(last),
        }
    }
}

/// The `TzdbProvider` trait provides methods required for a provider
/// to implement in order to source time zone data from that provider.
pub trait TzdbProvider {
    /// Returns the canonical spelling of `identifier`, or
    /// [`TzdbProviderError::UnknownIdentifier`][crate::TzdbProviderError::UnknownIdentifier]
    /// if the provider has no data for it.
    fn normalize_identifier(&self, identifier: &str) -> TzdbProviderResult<Cow<'_, str>>;

    /// Returns the local time record in effect at `epoch_seconds`.
    fn get_local_time_record(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> TzdbProviderResult<LocalTimeRecord>;

    /// Returns the epoch seconds at which the wall clock of `identifier`
    /// reads `local_seconds` (seconds since the epoch with the offset applied).
    ///
    /// There can be zero (a gap), one, or two (an overlap) such values.
    fn get_possible_epoch_seconds(
        &self,
        identifier: &str,
        local_seconds: i64,
    ) -> TzdbProviderResult<CandidateEpochSeconds> {
        // Any offset that could apply to `local_seconds` is in effect within
        // a day of it, so probing either side bounds the candidates.
        let before = self.get_local_time_record(identifier, local_seconds - SECONDS_PER_DAY)?;
        let after = self.get_local_time_record(identifier, local_seconds + SECONDS_PER_DAY)?;

        let mut found: [Option<EpochSecondsAndRecord>; 2] = [None, None];
        for (slot, offset) in [before.offset, after.offset].into_iter().enumerate() {
            if slot == 1 && offset == before.offset {
                break;
            }
            let seconds = local_seconds - offset.0;
            let record = self.get_local_time_record(identifier, seconds)?;
            if record.offset == offset {
                found[slot] = Some(EpochSecondsAndRecord { seconds, record });
            }
        }

        Ok(match found {
            [Some(one), Some(two)] if one.seconds == two.seconds => CandidateEpochSeconds::One(one),
            [Some(one), Some(two)] if one.seconds < two.seconds => {
                CandidateEpochSeconds::Two([one, two])
            }
            [Some(one), Some(two)] => CandidateEpochSeconds::Two([two, one]),
            [Some(one), None] | [None, Some(one)] => CandidateEpochSeconds::One(one),
            [None, None] => CandidateEpochSeconds::Zero(GapEntryOffsets {
                offset_before: before.offset,
                offset_after: after.offset,
            }),
        })
    }
}
