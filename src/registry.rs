//! Zone lookup by friendly name, offset or IANA identifier.
//!
//! A [`ZoneRegistry`] turns the loosely typed zone arguments accepted by
//! [`ZoneContext`](crate::ZoneContext) into [`TimeZone`] handles. A string is
//! tried, in order, as
//!
//! 1. a friendly name from the built-in table (`"Hawaii"`,
//!    `"Eastern Time (US & Canada)"`),
//! 2. `"Z"` or a UTC offset string (`"+05:30"`, `"-0800"`, `"+09"`),
//! 3. an identifier known to the [`TzdbProvider`] (`"Europe/Paris"`).
//!
//! ```rust
//! use zoned_rs::{provider::CompiledTzdbProvider, registry::ZoneRegistry};
//!
//! let registry = ZoneRegistry::new(CompiledTzdbProvider::new());
//! let hawaii = registry.lookup("Hawaii").unwrap();
//! assert_eq!(hawaii.name(), "Hawaii");
//! assert_eq!(hawaii.identifier(), "Pacific/Honolulu");
//!
//! assert_eq!(registry.lookup_offset(-10.0).unwrap(), hawaii);
//! ```

use alloc::format;

use tzdb_provider::{CompiledTzdbProvider, TzdbProvider, TzdbProviderError};

use crate::{
    timezone::{TimeZone, UtcOffset, ZoneArg},
    ZoneError, ZoneResult, ZoneUnwrap,
};

mod mapping;

use mapping::MAPPING;

/// Numeric offsets up to this magnitude are read as hours, larger ones as seconds.
const MAX_OFFSET_HOURS: f64 = 13.0;

/// An entry of the built-in friendly name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FriendlyZone {
    /// The friendly name, e.g. `"Hawaii"`.
    pub name: &'static str,
    /// The IANA identifier it maps to, e.g. `"Pacific/Honolulu"`.
    pub identifier: &'static str,
    offset: i32,
}

impl FriendlyZone {
    /// The standard offset of the zone.
    pub fn base_offset(&self) -> ZoneResult<UtcOffset> {
        UtcOffset::from_seconds(i64::from(self.offset))
            .ok()
            .zone_unwrap()
    }
}

/// Iterates the friendly zones ordered by standard offset, then by name.
pub fn friendly_zones() -> impl Iterator<Item = FriendlyZone> {
    MAPPING
        .iter()
        .map(|&(name, identifier, offset)| FriendlyZone {
            name,
            identifier,
            offset,
        })
}

/// Resolves zone arguments to [`TimeZone`] handles over a [`TzdbProvider`].
#[derive(Debug, Default)]
pub struct ZoneRegistry<P = CompiledTzdbProvider> {
    provider: P,
}

impl<P> ZoneRegistry<P> {
    /// Creates a registry backed by `provider`.
    pub const fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Returns the provider backing this registry.
    pub const fn provider(&self) -> &P {
        &self.provider
    }
}

impl<P: TzdbProvider> ZoneRegistry<P> {
    /// Resolves any zone argument. Resolved handles are returned unchanged.
    pub fn resolve(&self, zone: ZoneArg<'_>) -> ZoneResult<TimeZone> {
        match zone {
            ZoneArg::Resolved(zone) => Ok(zone),
            ZoneArg::Identifier(identifier) => self.lookup(identifier),
            ZoneArg::Offset(offset) => self.lookup_offset(offset),
        }
    }

    /// Looks up a friendly name, offset string or IANA identifier.
    pub fn lookup(&self, identifier: &str) -> ZoneResult<TimeZone> {
        if let Some(&(name, iana, _)) = MAPPING.iter().find(|(name, ..)| *name == identifier) {
            return self.friendly(name, iana);
        }

        if identifier == "Z" || identifier.starts_with(['+', '-']) {
            let offset = identifier.parse::<UtcOffset>().map_err(|err| {
                ZoneError::unknown_zone()
                    .with_message(format!("invalid offset {identifier:?}: {}", err.message()))
            })?;
            return Ok(TimeZone::Fixed(offset));
        }

        let canonical = self
            .provider
            .normalize_identifier(identifier)
            .map_err(|err| unknown_identifier(identifier, err))?;
        #[cfg(feature = "log")]
        log::trace!("resolved time zone {identifier:?} to {canonical}");
        Ok(TimeZone::named(&*canonical, &*canonical))
    }

    /// Looks up the first friendly zone whose standard offset equals `offset`.
    ///
    /// Values with a magnitude of at most 13 are hours, larger values are
    /// seconds, so `-10`, `-10.0` and `-36000` all find `"Hawaii"`.
    pub fn lookup_offset(&self, offset: f64) -> ZoneResult<TimeZone> {
        if !offset.is_finite() {
            return Err(ZoneError::unknown_zone().with_message("offset must be finite"));
        }
        let seconds = if offset.abs() <= MAX_OFFSET_HOURS {
            offset * 3600.0
        } else {
            offset
        }
        .round();

        MAPPING
            .iter()
            .find(|&&(.., base)| f64::from(base) == seconds)
            .map_or_else(
                || {
                    Err(ZoneError::unknown_zone()
                        .with_message(format!("no time zone with offset {offset}")))
                },
                |&(name, iana, _)| self.friendly(name, iana),
            )
    }

    fn friendly(&self, name: &str, iana: &str) -> ZoneResult<TimeZone> {
        let canonical = self
            .provider
            .normalize_identifier(iana)
            .map_err(|err| unknown_identifier(iana, err))?;
        #[cfg(feature = "log")]
        log::trace!("resolved friendly zone {name:?} to {canonical}");
        Ok(TimeZone::named(name, &*canonical))
    }
}

fn unknown_identifier(identifier: &str, err: TzdbProviderError) -> ZoneError {
    match err {
        TzdbProviderError::UnknownIdentifier => ZoneError::unknown_zone()
            .with_message(format!("time zone {identifier:?} does not exist")),
        err => err.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::{friendly_zones, ZoneRegistry};
    use crate::{
        provider::{CompiledTzdbProvider, FsTzdbProvider, TzdbProvider},
        ErrorKind, TimeZone, UtcOffset, ZoneArg,
    };

    fn registry() -> ZoneRegistry {
        ZoneRegistry::new(CompiledTzdbProvider::new())
    }

    #[test]
    fn friendly_names() {
        let registry = registry();
        let zone = registry.lookup("Pacific Time (US & Canada)").unwrap();
        assert_eq!(zone.name(), "Pacific Time (US & Canada)");
        assert_eq!(zone.identifier(), "America/Los_Angeles");

        let zone = registry.lookup("UTC").unwrap();
        assert_eq!(zone.identifier(), "Etc/UTC");
    }

    #[test]
    fn iana_identifiers_are_canonicalized() {
        let registry = registry();
        let zone = registry.lookup("america/new_york").unwrap();
        assert_eq!(zone, TimeZone::named("America/New_York", "America/New_York"));
        assert_eq!(zone, registry.lookup("America/New_York").unwrap());
    }

    #[test]
    fn offset_strings() {
        let registry = registry();
        assert_eq!(
            registry.lookup("+05:30").unwrap(),
            TimeZone::Fixed(UtcOffset::from_seconds(19_800).unwrap())
        );
        assert_eq!(registry.lookup("Z").unwrap(), TimeZone::utc());
        let err = registry.lookup("+25:00").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownZone);
    }

    #[test]
    fn unknown_zones() {
        let registry = registry();
        for identifier in ["Narnia/Nowhere", "", "hawaii"] {
            let err = registry.lookup(identifier).unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnknownZone, "{identifier}");
        }
        assert_eq!(
            registry.lookup_offset(-10.5).unwrap_err().kind(),
            ErrorKind::UnknownZone
        );
        assert!(registry.lookup_offset(f64::INFINITY).is_err());
    }

    #[test]
    fn numeric_offsets() {
        let registry = registry();
        let hawaii = registry.lookup("Hawaii").unwrap();
        assert_eq!(registry.lookup_offset(-10.0).unwrap(), hawaii);
        assert_eq!(registry.lookup_offset(-36_000.0).unwrap(), hawaii);
        assert_eq!(registry.resolve(ZoneArg::from(-10)).unwrap(), hawaii);
        assert_eq!(registry.lookup_offset(5.5).unwrap().name(), "Chennai");
    }

    #[test]
    fn resolved_zones_pass_through() {
        let registry = registry();
        let zone = TimeZone::named("Custom", "Europe/Paris");
        assert_eq!(registry.resolve(ZoneArg::from(&zone)).unwrap(), zone);
    }

    #[test]
    fn friendly_zones_are_ordered_and_known() {
        let provider = CompiledTzdbProvider::new();
        let zones = friendly_zones().collect::<Vec<_>>();
        for pair in zones.windows(2) {
            let key = |z: &super::FriendlyZone| (z.base_offset().unwrap(), z.name);
            assert!(key(&pair[0]) < key(&pair[1]), "{:?} before {:?}", pair[0], pair[1]);
        }
        for zone in &zones {
            assert!(zone.base_offset().is_ok(), "{}", zone.name);
            assert!(
                provider.normalize_identifier(zone.identifier).is_ok(),
                "{} maps to unknown {}",
                zone.name,
                zone.identifier
            );
        }
    }

    #[test]
    fn friendly_zone_offsets() {
        let hawaii = friendly_zones().find(|z| z.name == "Hawaii").unwrap();
        assert_eq!(hawaii.base_offset().unwrap().seconds(), -36_000);
        let kathmandu = friendly_zones().find(|z| z.name == "Kathmandu").unwrap();
        assert_eq!(kathmandu.base_offset().unwrap().seconds(), 20_700);
    }

    #[test]
    fn non_tzif_files_are_unknown_zones() {
        let dir = std::env::temp_dir().join(format!("zoned-rs-zoneinfo-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join("zone.tab"), "# not a TZif file\n").unwrap();

        let registry = ZoneRegistry::new(FsTzdbProvider::new(dir.clone()));
        let err = registry.lookup("zone.tab").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownZone);
        std::fs::remove_dir_all(dir).unwrap();
    }
}
