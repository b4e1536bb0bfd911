//! A provider reading TZif files from a `zoneinfo` directory.

use alloc::borrow::Cow;
use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::sync::Arc;
use std::path::{Component, Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use crate::{
    provider::{LocalTimeRecord, TzdbProvider},
    tzif::Tzif,
    TzdbProviderError, TzdbProviderResult,
};

const UNIX_ZONEINFO_DIR: &str = "/usr/share/zoneinfo/";
const TZIF_MAGIC: &[u8] = b"TZif";

/// A [`TzdbProvider`] over the TZif files of a `zoneinfo` directory.
///
/// Identifiers are file paths relative to the directory and are therefore
/// case-sensitive on most file systems.
#[derive(Debug)]
pub struct FsTzdbProvider {
    path: PathBuf,
    cache: RwLock<BTreeMap<String, Arc<Tzif>>>,
}

impl Default for FsTzdbProvider {
    fn default() -> Self {
        Self::new(PathBuf::from(UNIX_ZONEINFO_DIR))
    }
}

impl FsTzdbProvider {
    /// Creates a provider reading from the `zoneinfo` directory at `path`.
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            cache: RwLock::default(),
        }
    }

    /// The directory this provider reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the parsed TZif file for `identifier`, reading it on first use.
    ///
    /// Files without the `TZif` magic, such as `zone.tab` or `leapseconds`,
    /// are not zones and report [`TzdbProviderError::UnknownIdentifier`].
    pub fn get(&self, identifier: &str) -> TzdbProviderResult<Arc<Tzif>> {
        if let Some(tzif) = self
            .cache
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(identifier)
        {
            return Ok(tzif.clone());
        }

        let path = self.resolve_path(identifier)?;
        #[cfg(feature = "log")]
        log::trace!("reading TZif file {}", path.display());
        let data = std::fs::read(&path)
            .map_err(|_| TzdbProviderError::Malformed("unable to read TZif file"))?;
        if !data.starts_with(TZIF_MAGIC) {
            return Err(TzdbProviderError::UnknownIdentifier);
        }
        let tzif = Arc::new(Tzif::from_bytes(&data)?);

        Ok(self
            .cache
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .entry(identifier.into())
            .or_insert(tzif)
            .clone())
    }

    /// Maps `identifier` onto a file inside the zoneinfo directory.
    fn resolve_path(&self, identifier: &str) -> TzdbProviderResult<PathBuf> {
        let relative = Path::new(identifier);
        let is_plain = !identifier.is_empty()
            && relative
                .components()
                .all(|component| matches!(component, Component::Normal(_)));
        if !is_plain {
            return Err(TzdbProviderError::UnknownIdentifier);
        }
        let path = self.path.join(relative);
        if !path.is_file() {
            return Err(TzdbProviderError::UnknownIdentifier);
        }
        Ok(path)
    }
}

impl TzdbProvider for FsTzdbProvider {
    fn normalize_identifier(&self, identifier: &str) -> TzdbProviderResult<Cow<'_, str>> {
        self.get(identifier)?;
        Ok(Cow::Owned(identifier.into()))
    }

    fn get_local_time_record(
        &self,
        identifier: &str,
        epoch_seconds: i64,
    ) -> TzdbProviderResult<LocalTimeRecord> {
        self.get(identifier)?.get(epoch_seconds)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::FsTzdbProvider;
    use crate::{provider::TzdbProvider, TzdbProviderError};

    fn scratch_zoneinfo(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("{name}-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn rejects_paths_outside_the_directory() {
        let provider = FsTzdbProvider::default();
        for identifier in ["../etc/passwd", "/etc/passwd", "America/../../etc", ""] {
            assert_eq!(
                provider.normalize_identifier(identifier),
                Err(TzdbProviderError::UnknownIdentifier),
                "{identifier}"
            );
        }
    }

    #[test]
    fn missing_directory_has_no_zones() {
        let provider = FsTzdbProvider::new(PathBuf::from("/nonexistent/zoneinfo"));
        assert_eq!(
            provider.get_local_time_record("America/New_York", 0),
            Err(TzdbProviderError::UnknownIdentifier)
        );
    }

    #[test]
    fn reads_system_zoneinfo_when_present() {
        let provider = FsTzdbProvider::default();
        if !provider.path().join("America/New_York").is_file() {
            return;
        }
        let record = provider
            .get_local_time_record("America/New_York", 1_701_308_952)
            .unwrap();
        assert_eq!(record.offset.0, -18_000);
    }

    #[test]
    fn non_tzif_files_are_not_zones() {
        let dir = scratch_zoneinfo("tzdb-provider-non-tzif");
        std::fs::write(dir.join("zone.tab"), "# not a TZif file\n").unwrap();
        std::fs::write(dir.join("leapseconds"), "").unwrap();

        let provider = FsTzdbProvider::new(dir.clone());
        for identifier in ["zone.tab", "leapseconds"] {
            assert_eq!(
                provider.normalize_identifier(identifier),
                Err(TzdbProviderError::UnknownIdentifier),
                "{identifier}"
            );
            assert_eq!(
                provider.get_local_time_record(identifier, 0),
                Err(TzdbProviderError::UnknownIdentifier),
                "{identifier}"
            );
        }
        std::fs::remove_dir_all(dir).unwrap();
    }

    #[test]
    fn truncated_tzif_file_is_malformed() {
        let dir = scratch_zoneinfo("tzdb-provider-truncated");
        std::fs::write(dir.join("Broken"), b"TZif2").unwrap();

        let provider = FsTzdbProvider::new(dir.clone());
        assert!(matches!(
            provider.normalize_identifier("Broken"),
            Err(TzdbProviderError::Malformed(_))
        ));
        std::fs::remove_dir_all(dir).unwrap();
    }
}
