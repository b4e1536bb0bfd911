//! Host clock and host time zone access.

use web_time::{SystemTime, UNIX_EPOCH};

use crate::{ZoneError, ZoneResult};

/// Returns the system time in nanoseconds since the Unix epoch.
pub(crate) fn get_system_nanoseconds() -> ZoneResult<i128> {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_err(|_| ZoneError::general("Error fetching system time"))
        .map(|d| d.as_nanos() as i128)
}

/// Returns the host's IANA time zone identifier.
#[inline]
pub(crate) fn get_system_timezone_identifier() -> ZoneResult<String> {
    iana_time_zone::get_timezone()
        .map_err(|_| ZoneError::general("Error fetching system time zone"))
}
