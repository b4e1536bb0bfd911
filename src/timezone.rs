//! This module implements `TimeZone`, `UtcOffset` and `ZoneArg`.

use alloc::{borrow::Cow, string::String, sync::Arc};
use core::{fmt, iter::Peekable, str::Chars, str::FromStr};

use tzdb_provider::{
    provider::{CandidateEpochSeconds, EpochSecondsAndRecord, LocalTimeRecord},
    utils::{SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE},
    TzdbProvider, UtcOffsetSeconds,
};

use crate::{options::Disambiguation, Instant, ZoneError, ZoneResult, ZoneUnwrap};

// ==== UtcOffset ====

/// A fixed distance from UTC in whole seconds, positive east of Greenwich.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UtcOffset(i32);

impl UtcOffset {
    /// The zero offset.
    pub const UTC: Self = Self(0);

    /// Creates an offset from seconds east of UTC.
    ///
    /// The magnitude must be less than 24 hours.
    pub fn from_seconds(seconds: i64) -> ZoneResult<Self> {
        if seconds.abs() >= SECONDS_PER_DAY {
            return Err(ZoneError::range().with_message("UTC offset must be less than 24 hours."));
        }
        Ok(Self(seconds as i32))
    }

    /// Creates an offset from fractional hours east of UTC, e.g. `5.5`.
    pub fn from_hours(hours: f64) -> ZoneResult<Self> {
        if !hours.is_finite() {
            return Err(ZoneError::range().with_message("UTC offset must be finite."));
        }
        let seconds = (hours * SECONDS_PER_HOUR as f64).round();
        if seconds.abs() >= SECONDS_PER_DAY as f64 {
            return Err(ZoneError::range().with_message("UTC offset must be less than 24 hours."));
        }
        Self::from_seconds(seconds as i64)
    }

    /// Returns the offset in seconds.
    #[inline]
    #[must_use]
    pub const fn seconds(&self) -> i32 {
        self.0
    }
}

impl From<UtcOffset> for UtcOffsetSeconds {
    fn from(value: UtcOffset) -> Self {
        Self(i64::from(value.0))
    }
}

impl TryFrom<UtcOffsetSeconds> for UtcOffset {
    type Error = ZoneError;

    fn try_from(value: UtcOffsetSeconds) -> Result<Self, Self::Error> {
        Self::from_seconds(value.0)
    }
}

impl fmt::Display for UtcOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { '-' } else { '+' };
        let total = i64::from(self.0).abs();
        let hour = total / SECONDS_PER_HOUR;
        let minute = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let second = total % SECONDS_PER_MINUTE;
        write!(f, "{sign}{hour:02}:{minute:02}")?;
        if second != 0 {
            write!(f, ":{second:02}")?;
        }
        Ok(())
    }
}

impl FromStr for UtcOffset {
    type Err = ZoneError;

    /// Parses `Z`, `±HH`, `±HH:MM` or `±HHMM`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "Z" {
            return Ok(Self::UTC);
        }
        let mut cursor = s.chars().peekable();
        if !cursor.peek().is_some_and(is_ascii_sign) {
            return Err(ZoneError::range().with_message("Offset string must start with a sign."));
        }
        parse_offset(&mut cursor)
    }
}

fn parse_offset(chars: &mut Peekable<Chars<'_>>) -> ZoneResult<UtcOffset> {
    let sign = chars.next().map_or(1, |c| if c == '+' { 1 } else { -1 });
    // First offset portion
    let hours = parse_digit_pair(chars)?;
    if hours > 23 {
        return Err(ZoneError::range().with_message("Offset hours must be within 0..=23."));
    }

    let sep = chars.peek().is_some_and(|ch| *ch == ':');
    if sep {
        let _ = chars.next();
    }

    let minutes = match chars.peek().map(char::is_ascii_digit) {
        Some(true) => parse_digit_pair(chars)?,
        Some(false) => return Err(non_ascii_digit()),
        None if sep => return Err(abrupt_end()),
        None => 0,
    };
    if minutes > 59 {
        return Err(ZoneError::range().with_message("Offset minutes must be within 0..=59."));
    }
    if chars.next().is_some() {
        return Err(ZoneError::range().with_message("Unexpected trailing offset characters."));
    }

    UtcOffset::from_seconds(sign * (hours * SECONDS_PER_HOUR + minutes * SECONDS_PER_MINUTE))
}

fn parse_digit_pair(chars: &mut Peekable<Chars<'_>>) -> ZoneResult<i64> {
    let mut value = 0;
    for _ in 0..2 {
        let digit = chars
            .next()
            .ok_or_else(abrupt_end)?
            .to_digit(10)
            .ok_or_else(non_ascii_digit)?;
        value = value * 10 + i64::from(digit);
    }
    Ok(value)
}

fn abrupt_end() -> ZoneError {
    ZoneError::range().with_message("Abrupt end while parsing offset string")
}

fn non_ascii_digit() -> ZoneError {
    ZoneError::range().with_message("Non ascii digit found while parsing offset string")
}

fn is_ascii_sign(ch: &char) -> bool {
    *ch == '+' || *ch == '-'
}

// ==== TimeZone ====

/// A resolved time zone handle.
///
/// Cloning is cheap. Two handles resolved from the same identifier compare
/// equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TimeZone {
    /// A zone backed by the time zone database.
    Named {
        /// The display name, e.g. `"Hawaii"` or `"America/New_York"`.
        name: Arc<str>,
        /// The canonical IANA identifier, e.g. `"Pacific/Honolulu"`.
        identifier: Arc<str>,
    },
    /// A zone with one offset at every instant.
    Fixed(UtcOffset),
}

impl Default for TimeZone {
    fn default() -> Self {
        Self::utc()
    }
}

impl TimeZone {
    /// The UTC zone.
    #[must_use]
    pub const fn utc() -> Self {
        Self::Fixed(UtcOffset::UTC)
    }

    /// Creates a named zone handle without checking the identifier.
    pub fn named(name: impl Into<Arc<str>>, identifier: impl Into<Arc<str>>) -> Self {
        Self::Named {
            name: name.into(),
            identifier: identifier.into(),
        }
    }

    /// Returns the display name of this zone.
    #[must_use]
    pub fn name(&self) -> Cow<'_, str> {
        match self {
            Self::Named { name, .. } => Cow::Borrowed(name),
            Self::Fixed(offset) => Cow::Owned(offset.to_string()),
        }
    }

    /// Returns the identifier used to render this zone, e.g. in brackets
    /// after an RFC 9557 timestamp.
    #[must_use]
    pub fn identifier(&self) -> Cow<'_, str> {
        match self {
            Self::Named { identifier, .. } => Cow::Borrowed(identifier),
            Self::Fixed(offset) => Cow::Owned(offset.to_string()),
        }
    }
}

impl fmt::Display for TimeZone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier())
    }
}

// ==== Offset resolution ====

impl TimeZone {
    /// Returns the local time record in effect at `instant`.
    pub(crate) fn get_local_time_record_for(
        &self,
        instant: &Instant,
        provider: &(impl TzdbProvider + ?Sized),
    ) -> ZoneResult<LocalTimeRecord> {
        match self {
            Self::Fixed(offset) => Ok(LocalTimeRecord::standard((*offset).into())),
            Self::Named { identifier, .. } => provider
                .get_local_time_record(identifier, instant.epoch_seconds())
                .map_err(Into::into),
        }
    }

    /// Returns the epoch seconds at which the wall clock of this zone reads
    /// `local_seconds`, resolving gaps and overlaps with `disambiguation`.
    pub(crate) fn get_epoch_seconds_for(
        &self,
        local_seconds: i64,
        disambiguation: Disambiguation,
        provider: &(impl TzdbProvider + ?Sized),
    ) -> ZoneResult<EpochSecondsAndRecord> {
        let identifier = match self {
            Self::Fixed(offset) => {
                return Ok(EpochSecondsAndRecord {
                    seconds: local_seconds - i64::from(offset.seconds()),
                    record: LocalTimeRecord::standard((*offset).into()),
                })
            }
            Self::Named { identifier, .. } => identifier,
        };

        let candidates = provider.get_possible_epoch_seconds(identifier, local_seconds)?;
        if let CandidateEpochSeconds::Zero(gap) = candidates {
            // A skipped wall clock time is shifted by the size of the gap:
            // backward for `Earlier`, forward otherwise.
            let seconds = match disambiguation {
                Disambiguation::Reject => {
                    return Err(ZoneError::range()
                        .with_message("Rejecting local time skipped by a transition."))
                }
                Disambiguation::Earlier => local_seconds - gap.offset_after.0,
                Disambiguation::Compatible | Disambiguation::Later => {
                    local_seconds - gap.offset_before.0
                }
            };
            let record = provider.get_local_time_record(identifier, seconds)?;
            return Ok(EpochSecondsAndRecord { seconds, record });
        }

        if candidates.len() == 1 {
            return candidates.first().zone_unwrap();
        }
        match disambiguation {
            Disambiguation::Compatible | Disambiguation::Earlier => candidates.first().zone_unwrap(),
            Disambiguation::Later => candidates.last().zone_unwrap(),
            Disambiguation::Reject => {
                Err(ZoneError::range().with_message("Rejecting ambiguous local time in an overlap."))
            }
        }
    }
}

// ==== ZoneArg ====

/// A zone argument accepted by the conversion operations.
///
/// Strings are looked up as friendly names, offset strings or IANA
/// identifiers. Numbers are offsets: hours when their magnitude is at most
/// 13, otherwise seconds. A resolved [`TimeZone`] is used as is.
#[derive(Debug, Clone, PartialEq)]
pub enum ZoneArg<'a> {
    /// A zone name or offset string.
    Identifier(&'a str),
    /// A numeric UTC offset.
    Offset(f64),
    /// An already resolved zone.
    Resolved(TimeZone),
}

impl<'a> From<&'a str> for ZoneArg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Identifier(value)
    }
}

impl<'a> From<&'a String> for ZoneArg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Identifier(value.as_str())
    }
}

impl From<i32> for ZoneArg<'_> {
    fn from(value: i32) -> Self {
        Self::Offset(f64::from(value))
    }
}

impl From<i64> for ZoneArg<'_> {
    fn from(value: i64) -> Self {
        Self::Offset(value as f64)
    }
}

impl From<f64> for ZoneArg<'_> {
    fn from(value: f64) -> Self {
        Self::Offset(value)
    }
}

impl From<TimeZone> for ZoneArg<'_> {
    fn from(value: TimeZone) -> Self {
        Self::Resolved(value)
    }
}

impl From<&TimeZone> for ZoneArg<'_> {
    fn from(value: &TimeZone) -> Self {
        Self::Resolved(value.clone())
    }
}

impl From<UtcOffset> for ZoneArg<'_> {
    fn from(value: UtcOffset) -> Self {
        Self::Resolved(TimeZone::Fixed(value))
    }
}
