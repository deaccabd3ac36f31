use folio_types::ArticleVersion;

use crate::error::StoreResult;

/// Storage backend for article versions.
///
/// Implementations must be thread-safe (`Send + Sync`). Listings only ever
/// contain published versions; archived versions stay addressable by number.
pub trait VersionStore: Send + Sync {
    /// Insert a new version.
    ///
    /// Fails with `DuplicateVersion` if the slug already has a version with
    /// the same number: published versions are never replaced.
    fn insert(&self, version: ArticleVersion) -> StoreResult<()>;

    /// All published versions of an article, newest first.
    fn versions(&self, slug: &str) -> StoreResult<Vec<ArticleVersion>>;

    /// A version by number.
    ///
    /// Published and archived versions are returned; drafts are not. Returns
    /// `Ok(None)` if no such version exists.
    fn version(&self, slug: &str, number: u32) -> StoreResult<Option<ArticleVersion>>;

    /// Distinct slugs that have at least one published version, sorted.
    fn slugs(&self) -> StoreResult<Vec<String>>;

    /// The version readers see by default.
    ///
    /// This is the version flagged current, or failing that the latest
    /// published version.
    fn current_version(&self, slug: &str) -> StoreResult<Option<ArticleVersion>> {
        let versions = self.versions(slug)?;
        let current = versions.iter().position(|v| v.is_current_version);
        Ok(match current {
            Some(pos) => versions.into_iter().nth(pos),
            None => versions.into_iter().next(),
        })
    }

    /// Whether the article has more than one published version to compare.
    fn has_versions(&self, slug: &str) -> StoreResult<bool> {
        Ok(self.versions(slug)?.len() > 1)
    }
}
