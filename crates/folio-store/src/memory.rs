//! In-memory version store.
//!
//! [`InMemoryVersionStore`] keeps every version in a `BTreeMap` behind a
//! `RwLock`. It can be seeded from a JSON archive (an array of versions in
//! the site's export format), which is how the local fallback data is served.

use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use folio_types::{ArticleVersion, VersionStatus};
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::traits::VersionStore;

type VersionKey = (String, u32);

/// An in-memory implementation of [`VersionStore`].
///
/// Data is lost when the store is dropped.
pub struct InMemoryVersionStore {
    versions: RwLock<BTreeMap<VersionKey, ArticleVersion>>,
}

impl InMemoryVersionStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            versions: RwLock::new(BTreeMap::new()),
        }
    }

    /// Create a store holding `versions`.
    pub fn from_versions<I>(versions: I) -> StoreResult<Self>
    where
        I: IntoIterator<Item = ArticleVersion>,
    {
        let store = Self::new();
        for version in versions {
            store.insert(version)?;
        }
        Ok(store)
    }

    /// Parse a JSON array of versions.
    pub fn from_json_str(json: &str) -> StoreResult<Self> {
        let versions: Vec<ArticleVersion> = serde_json::from_str(json)?;
        Self::from_versions(versions)
    }

    /// Load a JSON archive file.
    pub fn load_json(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let store = Self::from_json_str(&json)?;
        let count = store.len()?;
        debug!(path = %path.display(), versions = count, "loaded version archive");
        Ok(store)
    }

    /// Number of stored versions, published or not.
    pub fn len(&self) -> StoreResult<usize> {
        Ok(self.read_map()?.len())
    }

    /// Returns `true` if the store holds no versions at all.
    pub fn is_empty(&self) -> StoreResult<bool> {
        Ok(self.read_map()?.is_empty())
    }

    fn read_map(&self) -> StoreResult<RwLockReadGuard<'_, BTreeMap<VersionKey, ArticleVersion>>> {
        self.versions
            .read()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }

    fn write_map(&self) -> StoreResult<RwLockWriteGuard<'_, BTreeMap<VersionKey, ArticleVersion>>> {
        self.versions
            .write()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))
    }
}

impl Default for InMemoryVersionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionStore for InMemoryVersionStore {
    fn insert(&self, version: ArticleVersion) -> StoreResult<()> {
        let key = (version.article_slug.clone(), version.version_number);
        let mut map = self.write_map()?;
        if map.contains_key(&key) {
            return Err(StoreError::DuplicateVersion {
                slug: key.0,
                version: key.1,
            });
        }
        debug!(slug = %key.0, version = key.1, status = ?version.status, "stored version");
        map.insert(key, version);
        Ok(())
    }

    fn versions(&self, slug: &str) -> StoreResult<Vec<ArticleVersion>> {
        let map = self.read_map()?;
        let mut versions: Vec<ArticleVersion> = map
            .range((slug.to_string(), u32::MIN)..=(slug.to_string(), u32::MAX))
            .map(|(_, v)| v)
            .filter(|v| v.status.is_published())
            .cloned()
            .collect();
        versions.reverse();
        Ok(versions)
    }

    fn version(&self, slug: &str, number: u32) -> StoreResult<Option<ArticleVersion>> {
        let map = self.read_map()?;
        Ok(map
            .get(&(slug.to_string(), number))
            .filter(|v| v.status != VersionStatus::Draft)
            .cloned())
    }

    fn slugs(&self) -> StoreResult<Vec<String>> {
        let map = self.read_map()?;
        let mut slugs: Vec<String> = map
            .iter()
            .filter(|(_, v)| v.status.is_published())
            .map(|((slug, _), _)| slug.clone())
            .collect();
        slugs.dedup();
        Ok(slugs)
    }
}

impl std::fmt::Debug for InMemoryVersionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryVersionStore")
            .field("version_count", &self.len().ok())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::ContentBlock;
    use std::io::Write;

    fn version(slug: &str, number: u32) -> ArticleVersion {
        ArticleVersion::new(slug, number, vec![ContentBlock::paragraph(format!("v{number}"))])
    }

    #[test]
    fn insert_and_get() {
        let store = InMemoryVersionStore::new();
        store.insert(version("post", 1)).unwrap();

        let v = store.version("post", 1).unwrap().unwrap();
        assert_eq!(v.version_number, 1);
        assert!(store.version("post", 2).unwrap().is_none());
        assert!(store.version("other", 1).unwrap().is_none());
    }

    #[test]
    fn duplicate_insert_rejected() {
        let store = InMemoryVersionStore::new();
        store.insert(version("post", 1)).unwrap();
        let err = store.insert(version("post", 1)).unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateVersion { ref slug, version: 1 } if slug == "post"
        ));
        assert_eq!(store.len().unwrap(), 1);
    }

    #[test]
    fn versions_newest_first() {
        let store = InMemoryVersionStore::from_versions([
            version("post", 2),
            version("post", 10),
            version("post", 1),
            version("zzz", 5),
            version("aaa", 7),
        ])
        .unwrap();

        let numbers: Vec<u32> = store
            .versions("post")
            .unwrap()
            .iter()
            .map(|v| v.version_number)
            .collect();
        assert_eq!(numbers, vec![10, 2, 1]);
    }

    #[test]
    fn unpublished_versions_are_hidden() {
        let store = InMemoryVersionStore::from_versions([
            version("post", 1),
            version("post", 2).with_status(VersionStatus::Draft),
            version("post", 3).with_status(VersionStatus::Archived),
        ])
        .unwrap();

        assert_eq!(store.len().unwrap(), 3);
        assert_eq!(store.versions("post").unwrap().len(), 1);
        assert!(store.version("post", 2).unwrap().is_none());
        assert!(!store.has_versions("post").unwrap());
        assert_eq!(store.current_version("post").unwrap().unwrap().version_number, 1);
    }

    #[test]
    fn archived_version_still_addressable_by_number() {
        let store = InMemoryVersionStore::from_versions([
            version("post", 1).with_status(VersionStatus::Archived),
            version("post", 2),
        ])
        .unwrap();
        assert_eq!(store.versions("post").unwrap().len(), 1);
        let archived = store.version("post", 1).unwrap().unwrap();
        assert_eq!(archived.status, VersionStatus::Archived);
    }

    #[test]
    fn current_version_prefers_flag() {
        let store = InMemoryVersionStore::from_versions([
            version("post", 1),
            version("post", 2).current(),
            version("post", 3),
        ])
        .unwrap();
        assert_eq!(store.current_version("post").unwrap().unwrap().version_number, 2);
    }

    #[test]
    fn current_version_falls_back_to_latest() {
        let store =
            InMemoryVersionStore::from_versions([version("post", 1), version("post", 4)]).unwrap();
        assert_eq!(store.current_version("post").unwrap().unwrap().version_number, 4);
        assert!(store.current_version("missing").unwrap().is_none());
    }

    #[test]
    fn has_versions_needs_two() {
        let store = InMemoryVersionStore::from_versions([version("solo", 1)]).unwrap();
        assert!(!store.has_versions("solo").unwrap());
        store.insert(version("solo", 2)).unwrap();
        assert!(store.has_versions("solo").unwrap());
    }

    #[test]
    fn slugs_sorted_and_distinct() {
        let store = InMemoryVersionStore::from_versions([
            version("b", 1),
            version("a", 1),
            version("b", 2),
            version("draft-only", 1).with_status(VersionStatus::Draft),
        ])
        .unwrap();
        assert_eq!(store.slugs().unwrap(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn from_json_str_parses_archive() {
        let json = r#"[
            {"articleSlug": "post", "versionNumber": 1, "content": [{"type": "paragraph", "text": "hi"}]},
            {"articleSlug": "post", "versionNumber": 2, "isCurrentVersion": true, "content": []}
        ]"#;
        let store = InMemoryVersionStore::from_json_str(json).unwrap();
        assert_eq!(store.len().unwrap(), 2);
        assert!(store.version("post", 2).unwrap().unwrap().is_current_version);
    }

    #[test]
    fn from_json_str_rejects_malformed() {
        let err = InMemoryVersionStore::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, StoreError::Serialization(_)));
    }

    #[test]
    fn load_json_from_file() {
        let versions = vec![
            version("post", 1)
                .with_published_date(chrono::NaiveDate::from_ymd_opt(2024, 1, 2).unwrap()),
            version("post", 2),
        ];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&versions).unwrap().as_bytes())
            .unwrap();

        let store = InMemoryVersionStore::load_json(file.path()).unwrap();
        assert_eq!(store.versions("post").unwrap().len(), 2);
        assert_eq!(store.version("post", 1).unwrap().unwrap(), versions[0]);
    }

    #[test]
    fn load_json_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = InMemoryVersionStore::load_json(dir.path().join("nope.json")).unwrap_err();
        assert!(matches!(err, StoreError::Io(_)));
    }

    #[test]
    fn concurrent_reads() {
        let store = std::sync::Arc::new(
            InMemoryVersionStore::from_versions([version("post", 1), version("post", 2)]).unwrap(),
        );
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let store = store.clone();
                std::thread::spawn(move || store.versions("post").unwrap().len())
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), 2);
        }
    }

    #[test]
    fn poisoned_lock_surfaces_as_error() {
        let store = std::sync::Arc::new(InMemoryVersionStore::from_versions([version("post", 1)]).unwrap());
        let poisoner = store.clone();
        let _ = std::thread::spawn(move || {
            let _guard = poisoner.versions.write().unwrap();
            panic!("writer died");
        })
        .join();

        assert!(matches!(store.len(), Err(StoreError::LockPoisoned(_))));
        assert!(matches!(store.is_empty(), Err(StoreError::LockPoisoned(_))));
        assert!(matches!(store.versions("post"), Err(StoreError::LockPoisoned(_))));
        assert!(format!("{store:?}").contains("None"));
    }
}
