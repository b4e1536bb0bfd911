//! A provider over the TZif data compiled into the binary by `jiff-tzdb`.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use std::sync::{PoisonError, RwLock};

use crate::{
    provider::{LocalTimeRecord, TzdbProvider},
    tzif::Tzif,
    TzdbProviderError, TzdbProviderResult,
};

/// A [`TzdbProvider`] backed by the bundled `jiff-tzdb` data set.
///
/// Identifier lookup is case-insensitive and normalizes to the canonical
/// casing (`"america/new_york"` becomes `"America/New_York"`). Parsed files
/// are cached for the lifetime of the provider.
#[derive(Debug, Default)]
pub struct CompiledTzdbProvider {
    cache: RwLock<BTreeMap<String, Arc<Tzif>>>,
}

impl CompiledTzdbProvider {
    /// Creates a provider with an empty cache.
    pub const fn new() -> Self {
        Self {
            cache: RwLock::new(BTreeMap::new()),
        }
    }

    /// Returns the parsed TZif data for `identifier`.
    pub fn get(&self, identifier: &str) -> TzdbProviderResult<Arc<Tzif>> {
        let Some((canonical_name, data)) = jiff_tzdb::get(identifier) else {
            return Err(TzdbProviderError::UnknownIdentifier);
        };
        if let Some(tzif) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(canonical_name)
        {
            return Ok(tzif.clone());
        }

        #[cfg(feature = "log")]
        log::trace!("parsing bundled TZif data for {canonical_name}");
        let tzif = Arc::new(Tzif::from_bytes(data)?);

        Ok(self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(canonical_name.into())
            .or_insert(tzif)
            .clone())
    }

    /// Iterates over every identifier in the bundled data set.
    pub fn available_identifiers(&self) -> impl Iterator<Item = &'static str> {
        jiff_tzdb::available()
    }
}

impl TzdbProvider for CompiledTzdbProvider {
    fn normalize_identifier(&self, identifier: &str) -> TzdbProviderResult<Cow<'_, str>> {
        jiff_tzdb::get(identifier)
            .map(|(canonical_name, _)| Cow::Borrowed(canonical_name))
            .ok_or(TzdbProviderError::UnknownIdentifier)
    }

    fn get_local_time_record(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> TzdbProviderResult<LocalTimeRecord> {
        self.get(identifier)?.get(epoch_seconds)
    }
}
