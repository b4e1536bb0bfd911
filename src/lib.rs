//! The `zoned_rs` crate wraps UTC instants with time zones.
//!
//! A [`ZoneContext`] resolves zone arguments (friendly names such as
//! `"Hawaii"`, IANA identifiers, offset strings, numeric offsets or an
//! already resolved [`TimeZone`]) and produces [`ZonedTime`] values in two
//! ways:
//!
//! - [`ZoneContext::convert_to_zone`] keeps the instant and renders it in
//!   the new zone.
//! - [`ZoneContext::reinterpret_in_zone`] keeps the wall-clock fields and
//!   reads them as local time in the new zone.
//!
//! The context also holds a default zone, used by the `*_current_zone`
//! operations.
//!
//! ```rust
//! use zoned_rs::{Instant, ZoneContext};
//!
//! let context = ZoneContext::default();
//! let t = Instant::utc(2000, 1, 1, 0, 0, 0).unwrap();
//!
//! let converted = context.convert_to_zone(t, "Hawaii").unwrap();
//! assert_eq!(converted.to_string(), "1999-12-31T14:00:00-10:00[Pacific/Honolulu]");
//! assert_eq!(converted.instant(), t);
//!
//! let reinterpreted = context.reinterpret_in_zone(t, "Hawaii").unwrap();
//! assert_eq!(reinterpreted.to_rfc3339(), "2000-01-01T00:00:00-10:00");
//! assert_eq!(reinterpreted.instant().to_string(), "2000-01-01T10:00:00Z");
//! ```
#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap
)]

extern crate alloc;

pub mod error;
pub mod iso;
pub mod options;
pub mod registry;

mod context;
mod instant;
mod timezone;
mod zoned;

#[cfg(feature = "sys")]
pub(crate) mod sys;

#[doc(inline)]
pub use error::{ErrorKind, ZoneError};

pub use crate::{
    context::ZoneContext,
    instant::Instant,
    iso::{IsoDate, IsoDateTime, IsoTime},
    options::Disambiguation,
    timezone::{TimeZone, UtcOffset, ZoneArg},
    zoned::ZonedTime,
};

/// Re-export of the time zone data providers.
pub mod provider {
    pub use tzdb_provider::{
        provider::{CandidateEpochSeconds, LocalTimeRecord, TzdbProvider, UtcOffsetSeconds},
        CompiledTzdbProvider, FsTzdbProvider, TzdbProviderError,
    };
}

/// The `zoned_rs` result type
pub type ZoneResult<T> = Result<T, ZoneError>;

/// A library specific trait for unwrapping values that an internal
/// invariant guarantees to be present.
pub(crate) trait ZoneUnwrap {
    type Output;

    /// Panics in debug builds, returns an [`ErrorKind::Assert`] error otherwise.
    fn zone_unwrap(self) -> ZoneResult<Self::Output>;
}

impl<T> ZoneUnwrap for Option<T> {
    type Output = T;

    fn zone_unwrap(self) -> ZoneResult<Self::Output> {
        debug_assert!(self.is_some());
        self.ok_or_else(ZoneError::assert)
    }
}

// Relevant numeric constants
/// Nanoseconds per second constant: 1e+9
pub const NS_PER_SECOND: i128 = 1_000_000_000;
/// Nanoseconds per day constant: 8.64e+13
pub const NS_PER_DAY: i128 = 86_400 * NS_PER_SECOND;
/// Max Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MAX_INSTANT: i128 = NS_PER_DAY * 100_000_000i128;
/// Min Instant nanosecond constant
#[doc(hidden)]
pub(crate) const NS_MIN_INSTANT: i128 = -NS_MAX_INSTANT;
