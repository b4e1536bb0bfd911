//! Data providers for time zone data
//!
//! This crate supplies the time zone database consumed by `zoned_rs`:
//! the [`TzdbProvider`] trait and, behind the `tzif` feature, providers
//! backed by the bundled `jiff-tzdb` data set or a `zoneinfo` directory.
//!

#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

extern crate alloc;

pub mod provider;
pub mod utils;

#[cfg(feature = "tzif")]
pub(crate) mod common;
#[cfg(feature = "tzif")]
pub mod compiled;
#[cfg(feature = "tzif")]
pub mod fs;
#[cfg(feature = "tzif")]
pub mod tzif;

pub use provider::{
    CandidateEpochSeconds, EpochSecondsAndRecord, GapEntryOffsets, LocalTimeRecord, TzdbProvider,
    UtcOffsetSeconds,
};

#[cfg(feature = "tzif")]
pub use compiled::CompiledTzdbProvider;
#[cfg(feature = "tzif")]
pub use fs::FsTzdbProvider;

use core::fmt;

/// The result type of provider operations.
pub type TzdbProviderResult<T> = Result<T, TzdbProviderError>;

/// An error returned by a [`TzdbProvider`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TzdbProviderError {
    /// The identifier does not name a zone known to the provider.
    UnknownIdentifier,
    /// The zone data could not be read or is not valid TZif.
    Malformed(&'static str),
    /// A computation left the supported range.
    Range(&'static str),
}

impl fmt::Display for TzdbProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownIdentifier => f.write_str("unknown time zone identifier"),
            Self::Malformed(msg) => write!(f, "malformed time zone data: {msg}"),
            Self::Range(msg) => write!(f, "out of range: {msg}"),
        }
    }
}

impl std::error::Error for TzdbProviderError {}
