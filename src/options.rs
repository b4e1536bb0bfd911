//! Options for operations that read wall-clock fields as local time.

use core::{fmt, str::FromStr};

/// Controls how a local date-time that is skipped or repeated by a zone
/// transition is mapped to an instant.
///
/// A local date-time inside a gap (e.g. 02:30 on a spring-forward day) has no
/// instant; one inside an overlap (e.g. 01:30 on a fall-back day) has two.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Disambiguation {
    /// Earlier instant in an overlap, shift forward by the gap size in a gap.
    #[default]
    Compatible,
    /// Earlier instant in an overlap, shift backward by the gap size in a gap.
    Earlier,
    /// Later instant in an overlap, shift forward by the gap size in a gap.
    Later,
    /// Fail with a range error on any gap or overlap.
    Reject,
}

/// A parsing error on `Disambiguation` options.
#[derive(Debug, Clone, Copy)]
pub struct ParseDisambiguationError;

impl fmt::Display for ParseDisambiguationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("provided string was not a valid disambiguation value")
    }
}

impl std::error::Error for ParseDisambiguationError {}

impl FromStr for Disambiguation {
    type Err = ParseDisambiguationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "compatible" => Ok(Self::Compatible),
            "earlier" => Ok(Self::Earlier),
            "later" => Ok(Self::Later),
            "reject" => Ok(Self::Reject),
            _ => Err(ParseDisambiguationError),
        }
    }
}

impl fmt::Display for Disambiguation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compatible => "compatible",
            Self::Earlier => "earlier",
            Self::Later => "later",
            Self::Reject => "reject",
        }
        .fmt(f)
    }
}
