//! Version-level diff: compare two article versions end to end.

use folio_types::ArticleVersion;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::blocks::{align_blocks, BlockDiff};
use crate::change::ChangeType;
use crate::summary::change_summary;

/// Switches controlling a comparison.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Compute word-level diffs for modified headings and paragraphs.
    pub compare_words: bool,
    /// Trim leading and trailing whitespace before word diffing.
    pub ignore_whitespace: bool,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            compare_words: true,
            ignore_whitespace: false,
        }
    }
}

/// Counts of changed blocks. Unchanged blocks are not counted.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DiffSummary {
    pub added: usize,
    pub removed: usize,
    pub modified: usize,
}

impl DiffSummary {
    /// Tally the change types of `changes`.
    pub fn from_changes(changes: &[BlockDiff]) -> Self {
        let mut summary = Self::default();
        for change in changes {
            match change.change {
                ChangeType::Added => summary.added += 1,
                ChangeType::Removed => summary.removed += 1,
                ChangeType::Modified => summary.modified += 1,
                ChangeType::Unchanged => {}
            }
        }
        summary
    }

    /// Total number of changed blocks.
    pub fn total(&self) -> usize {
        self.added + self.removed + self.modified
    }

    /// Returns `true` if nothing changed.
    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// The complete comparison of two versions.
///
/// `changes` always contains every position of the edit script, unchanged
/// blocks included; renderers filter them with [`VersionDiff::visible_changes`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionDiff {
    pub from_version: ArticleVersion,
    pub to_version: ArticleVersion,
    pub changes: Vec<BlockDiff>,
    pub summary: DiffSummary,
}

impl VersionDiff {
    /// Returns `true` if the two versions have identical content.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
    }

    /// Number of rows in the edit script.
    pub fn len(&self) -> usize {
        self.changes.len()
    }

    /// Rows that represent an actual change.
    pub fn visible_changes(&self) -> impl Iterator<Item = &BlockDiff> {
        self.changes.iter().filter(|c| c.change.is_change())
    }

    /// Number of unchanged rows.
    pub fn unchanged(&self) -> usize {
        self.len() - self.summary.total()
    }

    /// Human-readable summary of the counts.
    pub fn change_summary(&self) -> String {
        change_summary(&self.summary)
    }
}

/// Compare `from` against `to`.
///
/// Neither input is modified; the result owns copies of both versions and of
/// every block it reports.
pub fn compare_versions(from: &ArticleVersion, to: &ArticleVersion, options: &DiffOptions) -> VersionDiff {
    let changes = align_blocks(&from.content, &to.content, options);
    let summary = DiffSummary::from_changes(&changes);

    debug!(
        slug = %to.article_slug,
        from = from.version_number,
        to = to.version_number,
        added = summary.added,
        removed = summary.removed,
        modified = summary.modified,
        rows = changes.len(),
        "compared versions"
    );

    VersionDiff {
        from_version: from.clone(),
        to_version: to.clone(),
        changes,
        summary,
    }
}
