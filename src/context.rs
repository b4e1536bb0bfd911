//! This module implements `ZoneContext`, the default-zone slot and the
//! conversion operations.

use std::sync::{PoisonError, RwLock};

use tzdb_provider::{CompiledTzdbProvider, TzdbProvider};

use crate::{
    iso::IsoDateTime, options::Disambiguation, registry::ZoneRegistry, Instant, TimeZone,
    ZoneArg, ZoneError, ZoneResult, ZonedTime,
};

#[cfg(test)]
mod tests;

/// Resolves zones and converts instants and wall-clock values between them.
///
/// A context owns a [`ZoneRegistry`] and a default zone slot. The slot starts
/// out empty. The `*_current_zone` operations read it and fail with
/// [`ErrorKind::NoDefaultZone`](crate::ErrorKind::NoDefaultZone) while it is
/// unset.
///
/// Independent contexts never share state. [`ZoneContext::global`] returns a
/// process-wide context for callers that want a single shared slot.
///
/// ```rust
/// use zoned_rs::{ErrorKind, Instant, ZoneContext};
///
/// let context = ZoneContext::default();
/// let t = Instant::utc(2000, 1, 1, 0, 0, 0).unwrap();
///
/// let err = context.convert_to_current_zone(t).unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::NoDefaultZone);
///
/// context.set_default_zone("Hawaii").unwrap();
/// let zoned = context.convert_to_current_zone(t).unwrap();
/// assert_eq!(zoned.hour(), 14);
/// ```
#[derive(Debug)]
pub struct ZoneContext<P = CompiledTzdbProvider> {
    registry: ZoneRegistry<P>,
    default_zone: RwLock<Option<TimeZone>>,
}

impl Default for ZoneContext {
    fn default() -> Self {
        Self::new(CompiledTzdbProvider::new())
    }
}

impl ZoneContext {
    /// Returns the process-wide context, backed by the bundled zone data.
    pub fn global() -> &'static Self {
        static GLOBAL: ZoneContext = ZoneContext::new(CompiledTzdbProvider::new());
        &GLOBAL
    }
}

impl<P> ZoneContext<P> {
    /// Creates a context over `provider` with no default zone.
    pub const fn new(provider: P) -> Self {
        Self {
            registry: ZoneRegistry::new(provider),
            default_zone: RwLock::new(None),
        }
    }

    /// Returns the registry used to resolve zone arguments.
    pub const fn registry(&self) -> &ZoneRegistry<P> {
        &self.registry
    }

    /// Returns the default zone, if one is set.
    pub fn default_zone(&self) -> Option<TimeZone> {
        self.default_zone
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Clears the default zone.
    pub fn reset_default_zone(&self) {
        #[cfg(feature = "log")]
        log::debug!("resetting default time zone");
        *self
            .default_zone
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }

    fn current_zone(&self) -> ZoneResult<TimeZone> {
        self.default_zone().ok_or_else(ZoneError::no_default_zone)
    }
}

impl<P: TzdbProvider> ZoneContext<P> {
    /// Resolves `zone` and stores it as the default zone.
    ///
    /// Returns the stored handle. Nothing is stored if `zone` is unknown.
    pub fn set_default_zone<'a>(&self, zone: impl Into<ZoneArg<'a>>) -> ZoneResult<TimeZone> {
        let zone = self.resolve(zone)?;
        #[cfg(feature = "log")]
        log::debug!("setting default time zone to {}", zone.name());
        *self
            .default_zone
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(zone.clone());
        Ok(zone)
    }

    /// Resolves `zone` to a handle. Resolved handles pass through unchanged.
    pub fn resolve<'a>(&self, zone: impl Into<ZoneArg<'a>>) -> ZoneResult<TimeZone> {
        self.registry.resolve(zone.into())
    }

    /// Renders `instant` in `zone`, keeping the instant.
    pub fn convert_to_zone<'a>(
        &self,
        instant: Instant,
        zone: impl Into<ZoneArg<'a>>,
    ) -> ZoneResult<ZonedTime> {
        let zone = self.resolve(zone)?;
        ZonedTime::from_instant_with_provider(instant, zone, self.registry.provider())
    }

    /// Renders `instant` in the default zone.
    pub fn convert_to_current_zone(&self, instant: Instant) -> ZoneResult<ZonedTime> {
        self.convert_to_zone(instant, self.current_zone()?)
    }

    /// Reads the UTC wall-clock fields of `instant` as local time in `zone`.
    ///
    /// The result keeps the fields and denotes a different instant whenever
    /// the zone is not at a zero offset.
    pub fn reinterpret_in_zone<'a>(
        &self,
        instant: Instant,
        zone: impl Into<ZoneArg<'a>>,
    ) -> ZoneResult<ZonedTime> {
        self.reinterpret_date_time_in_zone(
            instant.to_utc_date_time(),
            zone,
            Disambiguation::Compatible,
        )
    }

    /// Reads the UTC wall-clock fields of `instant` as local time in the
    /// default zone.
    pub fn reinterpret_in_current_zone(&self, instant: Instant) -> ZoneResult<ZonedTime> {
        self.reinterpret_in_zone(instant, self.current_zone()?)
    }

    /// Reads `date_time` as local time in `zone`, resolving skipped and
    /// repeated local times with `disambiguation`.
    pub fn reinterpret_date_time_in_zone<'a>(
        &self,
        date_time: IsoDateTime,
        zone: impl Into<ZoneArg<'a>>,
        disambiguation: Disambiguation,
    ) -> ZoneResult<ZonedTime> {
        let zone = self.resolve(zone)?;
        ZonedTime::from_date_time_with_provider(
            date_time,
            zone,
            disambiguation,
            self.registry.provider(),
        )
    }

    /// Renders the instant of `zoned` in `zone`.
    pub fn convert_zoned<'a>(
        &self,
        zoned: &ZonedTime,
        zone: impl Into<ZoneArg<'a>>,
    ) -> ZoneResult<ZonedTime> {
        self.convert_to_zone(zoned.instant(), zone)
    }

    /// Reads the wall-clock fields of `zoned` as local time in `zone`.
    pub fn reinterpret_zoned<'a>(
        &self,
        zoned: &ZonedTime,
        zone: impl Into<ZoneArg<'a>>,
    ) -> ZoneResult<ZonedTime> {
        self.reinterpret_date_time_in_zone(zoned.date_time(), zone, Disambiguation::Compatible)
    }
}

#[cfg(feature = "sys")]
impl<P: TzdbProvider> ZoneContext<P> {
    /// Stores the host's time zone as the default zone.
    pub fn set_default_zone_from_system(&self) -> ZoneResult<TimeZone> {
        let identifier = crate::sys::get_system_timezone_identifier()?;
        self.set_default_zone(identifier.as_str())
    }

    /// Returns the current time in the default zone.
    pub fn now_in_current_zone(&self) -> ZoneResult<ZonedTime> {
        self.convert_to_current_zone(Instant::now()?)
    }
}
