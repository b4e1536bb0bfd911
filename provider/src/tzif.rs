//! TZif data and local time record resolution.
//!
//! NOTE: tzif data is computed in glibc's `__tzfile_compute` in `tzfile.c`;
//! the lookup below follows the same rules: the v2+ data block is searched
//! for the last transition at or before the instant, instants before the
//! first transition use local time type 0, and instants after the last
//! transition are resolved with the POSIX TZ footer.

use combine::Parser;

use tzif::data::{
    posix::PosixTzString,
    time::Seconds,
    tzif::{DataBlock, LocalTimeTypeRecord, TzifData, TzifHeader},
};

use crate::{
    common::resolve_posix_tz_string_for_epoch_seconds, provider::LocalTimeRecord,
    TzdbProviderError, TzdbProviderResult,
};

/// `TZif` stands for Time zone information format is laid out by [RFC 8536][rfc8536] and
/// laid out by the [tzdata manual][tzif-manual]
///
/// To be specific, this representation of `TZif` is solely to extend functionality
/// fo the parsed type from the `tzif` [rust crate][tzif-crate], which has further detail on the
/// layout in Rust.
///
/// [rfc8536]: https://datatracker.ietf.org/doc/html/rfc8536
/// [tzif-manual]: https://man7.org/linux/man-pages/man5/tzfile.5.html
/// [tzif-crate]: https://docs.rs/tzif/latest/tzif/
#[derive(Debug, Clone)]
pub struct Tzif {
    pub header1: TzifHeader,
    pub data_block1: DataBlock,
    pub header2: Option<TzifHeader>,
    pub data_block2: Option<DataBlock>,
    pub footer: Option<PosixTzString>,
}

impl From<TzifData> for Tzif {
    fn from(value: TzifData) -> Self {
        let TzifData {
            header1,
            data_block1,
            header2,
            data_block2,
            footer,
        } = value;

        Self {
            header1,
            data_block1,
            header2,
            data_block2,
            footer,
        }
    }
}

impl Tzif {
    /// Parses a complete TZif file.
    pub fn from_bytes(data: &[u8]) -> TzdbProviderResult<Self> {
        let Ok((parse_result, _)) = tzif::parse::tzif::tzif().parse(data) else {
            return Err(TzdbProviderError::Malformed("illformed TZif data"));
        };
        Ok(Self::from(parse_result))
    }

    /// The POSIX TZ footer, if the file has one.
    pub fn posix_tz_string(&self) -> Option<&PosixTzString> {
        self.footer.as_ref()
    }

    /// The v2+ data block with 64-bit transition times.
    pub fn get_data_block2(&self) -> TzdbProviderResult<&DataBlock> {
        self.data_block2
            .as_ref()
            .ok_or(TzdbProviderError::Malformed("only TZif v2+ is supported"))
    }

    /// Returns the local time record in effect at `epoch_seconds`.
    pub fn get(&self, epoch_seconds: i64) -> TzdbProviderResult<LocalTimeRecord> {
        let db = self.get_data_block2()?;

        match db.transition_times.binary_search(&Seconds(epoch_seconds)) {
            // A transition takes effect at its own timestamp.
            Ok(idx) => get_local_record(db, idx),
            // <https://datatracker.ietf.org/doc/html/rfc8536#section-3.2>
            // If there are no transitions, local time for all timestamps is specified by the TZ
            // string in the footer if present and nonempty; otherwise, it is
            // specified by time type 0.
            Err(_) if db.transition_times.is_empty() => match self.posix_tz_string() {
                Some(posix_tz_string) => {
                    resolve_posix_tz_string_for_epoch_seconds(posix_tz_string, epoch_seconds)
                }
                None => first_local_record(db),
            },
            // Local time for timestamps before the first transition is
            // specified by the first time type (time type 0).
            Err(0) => first_local_record(db),
            Err(idx) if idx >= db.transition_times.len() => match self.posix_tz_string() {
                // The transition time provided is beyond the length of
                // the available transition time, so the time zone is
                // resolved with the POSIX tz string.
                Some(posix_tz_string) => {
                    resolve_posix_tz_string_for_epoch_seconds(posix_tz_string, epoch_seconds)
                }
                None => get_local_record(db, idx - 1),
            },
            Err(idx) => get_local_record(db, idx - 1),
        }
    }
}

#[inline]
fn get_local_record(db: &DataBlock, idx: usize) -> TzdbProviderResult<LocalTimeRecord> {
    // NOTE: Transition type can be empty. If no transition_type exists,
    // then use 0 as the default index of local_time_type_records.
    let type_idx = db.transition_types.get(idx).copied().unwrap_or(0);
    db.local_time_type_records
        .get(type_idx)
        .copied()
        .map(LocalTimeRecord::from)
        .ok_or(TzdbProviderError::Malformed("transition type out of bounds"))
}

#[inline]
fn first_local_record(db: &DataBlock) -> TzdbProviderResult<LocalTimeRecord> {
    db.local_time_type_records
        .first()
        .copied()
        .map(|record: LocalTimeTypeRecord| record.into())
        .ok_or(TzdbProviderError::Malformed("no local time type records"))
}
