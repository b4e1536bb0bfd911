//! This module implements `ZoneError`.

use alloc::borrow::Cow;
use core::fmt;

use tzdb_provider::TzdbProviderError;

/// `ZoneError`'s error type.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Error.
    #[default]
    Generic,
    /// The zone identifier or offset is not known.
    UnknownZone,
    /// A "current zone" operation ran without a default zone.
    NoDefaultZone,
    /// A value is outside its valid range.
    Range,
    /// Assert error.
    Assert,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic => "Error",
            Self::UnknownZone => "UnknownZone",
            Self::NoDefaultZone => "NoDefaultZone",
            Self::Range => "RangeError",
            Self::Assert => "ImplementationError",
        }
        .fmt(f)
    }
}

/// The error type for `zoned_rs`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ZoneError {
    kind: ErrorKind,
    msg: Cow<'static, str>,
}

impl ZoneError {
    fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            msg: Cow::Borrowed(""),
        }
    }

    /// Create a generic error
    #[must_use]
    pub fn general<S>(msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        Self::new(ErrorKind::Generic).with_message(msg)
    }

    /// Create an unknown zone error.
    #[must_use]
    pub fn unknown_zone() -> Self {
        Self::new(ErrorKind::UnknownZone)
    }

    /// Create a missing default zone error.
    #[must_use]
    pub fn no_default_zone() -> Self {
        Self::new(ErrorKind::NoDefaultZone).with_message("no default time zone has been set")
    }

    /// Create a range error.
    #[must_use]
    pub fn range() -> Self {
        Self::new(ErrorKind::Range)
    }

    /// Create an assertion error.
    #[must_use]
    pub fn assert() -> Self {
        Self::new(ErrorKind::Assert)
    }

    /// Add a message to the error.
    #[must_use]
    pub fn with_message<S>(mut self, msg: S) -> Self
    where
        S: Into<Cow<'static, str>>,
    {
        self.msg = msg.into();
        self
    }

    /// Returns this error's kind.
    #[inline]
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the error message.
    #[inline]
    #[must_use]
    pub fn message(&self) -> &str {
        &self.msg
    }
}

impl fmt::Display for ZoneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind)?;

        let msg = self.msg.trim();
        if !msg.is_empty() {
            write!(f, ": {msg}")?;
        }

        Ok(())
    }
}

impl std::error::Error for ZoneError {}

impl From<TzdbProviderError> for ZoneError {
    fn from(value: TzdbProviderError) -> Self {
        match value {
            TzdbProviderError::UnknownIdentifier => {
                Self::unknown_zone().with_message("time zone identifier does not exist")
            }
            TzdbProviderError::Range(msg) => Self::range().with_message(msg),
            TzdbProviderError::Malformed(msg) => Self::general(msg),
        }
    }
}
