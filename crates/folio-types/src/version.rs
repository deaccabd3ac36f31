use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::block::ContentBlock;
use crate::error::TypeError;

/// Unique identifier for an article version (UUID v7 when generated locally).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct VersionId(uuid::Uuid);

impl VersionId {
    /// Generate a new time-ordered version ID (UUID v7).
    pub fn new() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Create from an existing UUID.
    pub fn from_uuid(uuid: uuid::Uuid) -> Self {
        Self(uuid)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &uuid::Uuid {
        &self.0
    }

    /// Short representation (first 8 characters of UUID).
    pub fn short_id(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for VersionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "VersionId({})", self.short_id())
    }
}

impl fmt::Display for VersionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for VersionId {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        uuid::Uuid::parse_str(s)
            .map(Self)
            .map_err(|e| TypeError::InvalidVersionId(format!("{s}: {e}")))
    }
}

/// Visibility of a version. Only published versions are listed to readers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VersionStatus {
    #[default]
    Published,
    Draft,
    Archived,
}

impl VersionStatus {
    pub fn is_published(&self) -> bool {
        matches!(self, Self::Published)
    }
}

/// One immutable snapshot of an article body.
///
/// Versions are created once when published and never mutated afterwards.
/// The wire format uses camelCase keys, matching the site's exported data.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleVersion {
    #[serde(default)]
    pub id: VersionId,
    pub article_slug: String,
    /// 1-based and monotonically increasing; gaps are allowed.
    pub version_number: u32,
    #[serde(default)]
    pub version_label: String,
    #[serde(default)]
    pub published_date: Option<NaiveDate>,
    #[serde(default)]
    pub is_current_version: bool,
    #[serde(default)]
    pub change_summary: String,
    #[serde(default)]
    pub content: Vec<ContentBlock>,
    #[serde(default)]
    pub status: VersionStatus,
}

impl ArticleVersion {
    /// A published, non-current version with a fresh ID and no metadata.
    pub fn new(article_slug: impl Into<String>, version_number: u32, content: Vec<ContentBlock>) -> Self {
        Self {
            id: VersionId::new(),
            article_slug: article_slug.into(),
            version_number,
            version_label: String::new(),
            published_date: None,
            is_current_version: false,
            change_summary: String::new(),
            content,
            status: VersionStatus::Published,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.version_label = label.into();
        self
    }

    pub fn with_published_date(mut self, date: NaiveDate) -> Self {
        self.published_date = Some(date);
        self
    }

    pub fn with_change_summary(mut self, summary: impl Into<String>) -> Self {
        self.change_summary = summary.into();
        self
    }

    pub fn with_status(mut self, status: VersionStatus) -> Self {
        self.status = status;
        self
    }

    pub fn current(mut self) -> Self {
        self.is_current_version = true;
        self
    }

    /// The display label, falling back to `v{number}.0` when none was set.
    pub fn label(&self) -> String {
        if self.version_label.is_empty() {
            format!("v{}.0", self.version_number)
        } else {
            self.version_label.clone()
        }
    }

    /// Total words across the text of all top-level blocks.
    pub fn word_count(&self) -> usize {
        self.content.iter().map(ContentBlock::word_count).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn version_ids_are_unique() {
        assert_ne!(VersionId::new(), VersionId::new());
    }

    #[test]
    fn version_id_parse_roundtrip() {
        let id = VersionId::new();
        let parsed: VersionId = id.to_string().parse().unwrap();
        assert_eq!(id, parsed);
        assert_eq!(id.short_id().len(), 8);
    }

    #[test]
    fn version_id_parse_rejects_garbage() {
        let err = "not-a-uuid".parse::<VersionId>().unwrap_err();
        assert!(matches!(err, TypeError::InvalidVersionId(_)));
    }

    #[test]
    fn label_falls_back_to_number() {
        let v = ArticleVersion::new("rust-tips", 3, vec![]);
        assert_eq!(v.label(), "v3.0");
        let v = v.with_label("v3.1-beta");
        assert_eq!(v.label(), "v3.1-beta");
    }

    #[test]
    fn builder_sets_metadata() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        let v = ArticleVersion::new("slug", 2, vec![ContentBlock::paragraph("a b")])
            .with_published_date(date)
            .with_change_summary("typo fixes")
            .with_status(VersionStatus::Archived)
            .current();
        assert_eq!(v.published_date, Some(date));
        assert_eq!(v.change_summary, "typo fixes");
        assert_eq!(v.status, VersionStatus::Archived);
        assert!(v.is_current_version);
        assert_eq!(v.word_count(), 2);
    }

    #[test]
    fn deserialize_site_export() {
        let v: ArticleVersion = serde_json::from_value(json!({
            "id": "0190f1e2-7c3a-7d4e-8f00-123456789abc",
            "articleSlug": "hello-world",
            "versionNumber": 2,
            "versionLabel": "v2.0",
            "publishedDate": "2024-03-12",
            "isCurrentVersion": true,
            "changeSummary": "Rewrote the intro",
            "content": [
                {"type": "heading_1", "text": "Hello"},
                {"type": "divider"}
            ],
            "status": "Published"
        }))
        .unwrap();
        assert_eq!(v.article_slug, "hello-world");
        assert_eq!(v.version_number, 2);
        assert_eq!(v.published_date, NaiveDate::from_ymd_opt(2024, 3, 12));
        assert!(v.is_current_version);
        assert_eq!(v.content.len(), 2);
        assert!(v.status.is_published());
    }

    #[test]
    fn deserialize_minimal_defaults() {
        let v: ArticleVersion = serde_json::from_value(json!({
            "articleSlug": "bare",
            "versionNumber": 1
        }))
        .unwrap();
        assert_eq!(v.status, VersionStatus::Published);
        assert!(v.content.is_empty());
        assert!(!v.is_current_version);
        assert_eq!(v.published_date, None);
    }
}
