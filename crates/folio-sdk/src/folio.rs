use std::sync::Arc;

use folio_diff::{compare_versions, DiffOptions, VersionDiff};
use folio_store::{InMemoryVersionStore, VersionStore};
use folio_types::ArticleVersion;
use tracing::debug;

use crate::config::{DiffLimits, FolioConfig};
use crate::error::{SdkError, SdkResult};

/// High-level Folio API.
///
/// Cheap to clone; clones share the underlying store.
#[derive(Clone)]
pub struct Folio {
    store: Arc<dyn VersionStore>,
    config: FolioConfig,
}

impl Folio {
    /// Wrap an existing store.
    pub fn new(store: impl VersionStore + 'static, config: FolioConfig) -> Self {
        Self {
            store: Arc::new(store),
            config,
        }
    }

    /// Load the archive named by `config` into an in-memory store.
    pub fn from_config(config: FolioConfig) -> SdkResult<Self> {
        let archive = config.archive.as_ref().ok_or(SdkError::NoArchive)?;
        let store = InMemoryVersionStore::load_json(archive)?;
        Ok(Self::new(store, config))
    }

    pub fn config(&self) -> &FolioConfig {
        &self.config
    }

    pub fn store(&self) -> &dyn VersionStore {
        self.store.as_ref()
    }

    // ---- Version access ----

    /// Articles with at least one published version.
    pub fn articles(&self) -> SdkResult<Vec<String>> {
        Ok(self.store.slugs()?)
    }

    /// Published versions of an article, newest first.
    pub fn versions(&self, slug: &str) -> SdkResult<Vec<ArticleVersion>> {
        let versions = self.store.versions(slug)?;
        if versions.is_empty() {
            return Err(SdkError::ArticleNotFound(slug.to_string()));
        }
        Ok(versions)
    }

    pub fn version(&self, slug: &str, number: u32) -> SdkResult<ArticleVersion> {
        self.store
            .version(slug, number)?
            .ok_or_else(|| SdkError::VersionNotFound {
                slug: slug.to_string(),
                version: number,
            })
    }

    pub fn current_version(&self, slug: &str) -> SdkResult<ArticleVersion> {
        self.store
            .current_version(slug)?
            .ok_or_else(|| SdkError::ArticleNotFound(slug.to_string()))
    }

    pub fn has_versions(&self, slug: &str) -> SdkResult<bool> {
        Ok(self.store.has_versions(slug)?)
    }

    /// The latest published version numbered below `number`.
    ///
    /// `number` itself must be addressable (published or archived). Returns
    /// `Ok(None)` when nothing was published before it.
    pub fn previous_version(&self, slug: &str, number: u32) -> SdkResult<Option<ArticleVersion>> {
        self.version(slug, number)?;
        Ok(self
            .versions(slug)?
            .into_iter()
            .find(|v| v.version_number < number))
    }

    // ---- Comparison ----

    /// Compare two versions of an article with the configured options.
    pub fn compare(&self, slug: &str, from: u32, to: u32) -> SdkResult<VersionDiff> {
        self.compare_with(slug, from, to, &self.config.diff)
    }

    /// Compare two versions of an article with explicit options.
    pub fn compare_with(
        &self,
        slug: &str,
        from: u32,
        to: u32,
        options: &DiffOptions,
    ) -> SdkResult<VersionDiff> {
        let from_version = self.version(slug, from)?;
        let to_version = self.version(slug, to)?;

        check_limits(&from_version, &self.config.limits)?;
        check_limits(&to_version, &self.config.limits)?;

        debug!(slug, from, to, ?options, "comparing versions");
        Ok(compare_versions(&from_version, &to_version, options))
    }

    /// Compare the current version against the one published before it.
    ///
    /// Returns `Ok(None)` when the current version is the oldest one.
    pub fn compare_with_previous(&self, slug: &str) -> SdkResult<Option<VersionDiff>> {
        let current = self.current_version(slug)?;
        match self.previous_version(slug, current.version_number)? {
            Some(previous) => self
                .compare(slug, previous.version_number, current.version_number)
                .map(Some),
            None => Ok(None),
        }
    }
}

impl std::fmt::Debug for Folio {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Folio").field("config", &self.config).finish()
    }
}

fn check_limits(version: &ArticleVersion, limits: &DiffLimits) -> SdkResult<()> {
    let too_large = |reason: String| SdkError::InputTooLarge {
        slug: version.article_slug.clone(),
        version: version.version_number,
        reason,
    };

    if version.content.len() > limits.max_blocks {
        return Err(too_large(format!(
            "{} blocks exceeds the limit of {}",
            version.content.len(),
            limits.max_blocks
        )));
    }
    if let Some((pos, words)) = version
        .content
        .iter()
        .map(|b| b.word_count())
        .enumerate()
        .find(|(_, words)| *words > limits.max_words_per_block)
    {
        return Err(too_large(format!(
            "block {pos} has {words} words, the limit is {}",
            limits.max_words_per_block
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_diff::ChangeType;
    use folio_types::{ContentBlock, VersionStatus};

    fn sample_store() -> InMemoryVersionStore {
        InMemoryVersionStore::from_versions([
            ArticleVersion::new(
                "rust-tips",
                1,
                vec![
                    ContentBlock::heading(1, "Rust tips").unwrap(),
                    ContentBlock::paragraph("Use clippy often."),
                ],
            ),
            ArticleVersion::new(
                "rust-tips",
                2,
                vec![
                    ContentBlock::heading(1, "Rust tips").unwrap(),
                    ContentBlock::paragraph("Use clippy very often."),
                    ContentBlock::Divider,
                ],
            )
            .current(),
            ArticleVersion::new("rust-tips", 3, vec![]).with_status(VersionStatus::Draft),
        ])
        .unwrap()
    }

    fn folio() -> Folio {
        Folio::new(sample_store(), FolioConfig::default())
    }

    #[test]
    fn compare_resolves_and_diffs() {
        let diff = folio().compare("rust-tips", 1, 2).unwrap();
        assert_eq!(diff.summary.added, 1);
        assert_eq!(diff.summary.modified, 1);
        assert_eq!(diff.summary.removed, 0);
        let modified = diff
            .changes
            .iter()
            .find(|c| c.change == ChangeType::Modified)
            .unwrap();
        assert!(modified.word_diffs.is_some());
    }

    #[test]
    fn compare_uses_configured_options() {
        let config = FolioConfig {
            diff: DiffOptions {
                compare_words: false,
                ignore_whitespace: false,
            },
            ..FolioConfig::default()
        };
        let folio = Folio::new(sample_store(), config);
        let diff = folio.compare("rust-tips", 1, 2).unwrap();
        assert!(diff.changes.iter().all(|c| c.word_diffs.is_none()));
    }

    #[test]
    fn missing_version_is_not_found() {
        let err = folio().compare("rust-tips", 1, 9).unwrap_err();
        assert!(matches!(err, SdkError::VersionNotFound { version: 9, .. }));
    }

    #[test]
    fn draft_version_is_not_found() {
        let err = folio().version("rust-tips", 3).unwrap_err();
        assert!(matches!(err, SdkError::VersionNotFound { version: 3, .. }));
    }

    #[test]
    fn unknown_article() {
        let err = folio().versions("nope").unwrap_err();
        assert!(matches!(err, SdkError::ArticleNotFound(ref s) if s == "nope"));
        assert!(matches!(
            folio().current_version("nope"),
            Err(SdkError::ArticleNotFound(_))
        ));
    }

    #[test]
    fn block_limit_enforced() {
        let config = FolioConfig {
            limits: DiffLimits {
                max_blocks: 2,
                ..DiffLimits::default()
            },
            ..FolioConfig::default()
        };
        let folio = Folio::new(sample_store(), config);
        let err = folio.compare("rust-tips", 1, 2).unwrap_err();
        assert!(matches!(err, SdkError::InputTooLarge { version: 2, .. }));
    }

    #[test]
    fn word_limit_enforced() {
        let config = FolioConfig {
            limits: DiffLimits {
                max_words_per_block: 3,
                ..DiffLimits::default()
            },
            ..FolioConfig::default()
        };
        let folio = Folio::new(sample_store(), config);
        // Version 1 tops out at three words per block; version 2 has four.
        let err = folio.compare("rust-tips", 1, 2).unwrap_err();
        assert!(matches!(err, SdkError::InputTooLarge { version: 2, .. }));
    }

    #[test]
    fn unbounded_limits_accept_everything() {
        let config = FolioConfig {
            limits: DiffLimits::unbounded(),
            ..FolioConfig::default()
        };
        let folio = Folio::new(sample_store(), config);
        assert!(folio.compare("rust-tips", 2, 1).is_ok());
    }

    #[test]
    fn compare_with_previous_uses_current() {
        let diff = folio().compare_with_previous("rust-tips").unwrap().unwrap();
        assert_eq!(diff.from_version.version_number, 1);
        assert_eq!(diff.to_version.version_number, 2);
    }

    #[test]
    fn previous_version_skips_unpublished() {
        let store = InMemoryVersionStore::from_versions([
            ArticleVersion::new("post", 1, vec![]),
            ArticleVersion::new("post", 2, vec![]).with_status(VersionStatus::Archived),
            ArticleVersion::new("post", 3, vec![]).current(),
            ArticleVersion::new("post", 4, vec![]).with_status(VersionStatus::Draft),
        ])
        .unwrap();
        let folio = Folio::new(store, FolioConfig::default());

        let previous = |n| folio.previous_version("post", n).unwrap().map(|v| v.version_number);
        assert_eq!(previous(3), Some(1));
        // An archived version is addressable and resolves like any other.
        assert_eq!(previous(2), Some(1));
        assert_eq!(previous(1), None);

        let err = folio.previous_version("post", 4).unwrap_err();
        assert!(matches!(err, SdkError::VersionNotFound { version: 4, .. }));
    }

    #[test]
    fn compare_with_previous_on_first_version() {
        let store = InMemoryVersionStore::from_versions([ArticleVersion::new("solo", 1, vec![])])
            .unwrap();
        let folio = Folio::new(store, FolioConfig::default());
        assert!(folio.compare_with_previous("solo").unwrap().is_none());
    }

    #[test]
    fn self_comparison_has_no_changes() {
        let diff = folio().compare("rust-tips", 2, 2).unwrap();
        assert!(diff.is_empty());
        assert_eq!(diff.change_summary(), "Aucune modification");
    }

    #[test]
    fn from_config_requires_archive() {
        let err = Folio::from_config(FolioConfig::default()).unwrap_err();
        assert!(matches!(err, SdkError::NoArchive));
    }

    #[test]
    fn from_config_loads_archive() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("versions.json");
        let versions = vec![
            ArticleVersion::new("post", 1, vec![ContentBlock::paragraph("a")]),
            ArticleVersion::new("post", 2, vec![ContentBlock::paragraph("a b")]),
        ];
        std::fs::write(&archive, serde_json::to_string(&versions).unwrap()).unwrap();

        let folio = Folio::from_config(FolioConfig::default().with_archive(&archive)).unwrap();
        assert_eq!(folio.articles().unwrap(), vec!["post".to_string()]);
        assert!(folio.has_versions("post").unwrap());
    }

    #[test]
    fn from_config_missing_archive_is_store_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = FolioConfig::default().with_archive(dir.path().join("none.json"));
        let err = Folio::from_config(config).unwrap_err();
        assert!(matches!(err, SdkError::Store(_)));
    }
}
