//! Block-level diff: align two block sequences and classify every position.
//!
//! Blocks are aligned with an LCS whose match predicate is [`blocks_similar`].
//! Aligned pairs are then either unchanged (structurally equal) or modified.
//! Nested children of toggles, tables and column lists are opaque payload:
//! they take part in the equality check but are never diffed recursively.

use folio_types::{BlockKind, ContentBlock};
use serde::{Deserialize, Serialize};

use crate::change::ChangeType;
use crate::lcs::{edit_script, Step};
use crate::similarity::{similarity, SIMILARITY_THRESHOLD};
use crate::version_diff::DiffOptions;
use crate::words::{diff_words, WordDiff};

/// One row of the block-level diff.
///
/// Removed rows carry only `old_content`, added rows only `new_content`;
/// modified and unchanged rows carry both.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlockDiff {
    #[serde(rename = "type")]
    pub change: ChangeType,
    pub block_type: BlockKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_content: Option<ContentBlock>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_content: Option<ContentBlock>,
    /// Word-level detail, only for modified headings and paragraphs.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word_diffs: Option<Vec<WordDiff>>,
    /// Position of this row in the emitted edit script.
    pub index: usize,
}

impl BlockDiff {
    fn added(block: &ContentBlock, index: usize) -> Self {
        Self {
            change: ChangeType::Added,
            block_type: block.kind(),
            old_content: None,
            new_content: Some(block.clone()),
            word_diffs: None,
            index,
        }
    }

    fn removed(block: &ContentBlock, index: usize) -> Self {
        Self {
            change: ChangeType::Removed,
            block_type: block.kind(),
            old_content: Some(block.clone()),
            new_content: None,
            word_diffs: None,
            index,
        }
    }

    fn aligned(old: &ContentBlock, new: &ContentBlock, index: usize, options: &DiffOptions) -> Self {
        if old == new {
            return Self {
                change: ChangeType::Unchanged,
                block_type: new.kind(),
                old_content: Some(old.clone()),
                new_content: Some(new.clone()),
                word_diffs: None,
                index,
            };
        }

        let word_diffs = match (old.text(), new.text()) {
            (Some(old_text), Some(new_text)) if options.compare_words && old.is_word_diffable() => {
                Some(diff_words(old_text, new_text, options.ignore_whitespace))
            }
            _ => None,
        };

        Self {
            change: ChangeType::Modified,
            block_type: new.kind(),
            old_content: Some(old.clone()),
            new_content: Some(new.clone()),
            word_diffs,
            index,
        }
    }

    /// The block to display for this row: the new content when present,
    /// otherwise the removed block.
    pub fn content(&self) -> Option<&ContentBlock> {
        self.new_content.as_ref().or(self.old_content.as_ref())
    }
}

/// Whether two blocks are candidates for alignment.
///
/// Blocks must share a kind. When both carry non-empty text, the texts must
/// be more than [`SIMILARITY_THRESHOLD`] similar; otherwise the kind alone
/// decides.
pub fn blocks_similar(a: &ContentBlock, b: &ContentBlock) -> bool {
    if a.kind() != b.kind() {
        return false;
    }
    match (a.non_empty_text(), b.non_empty_text()) {
        (Some(a), Some(b)) => similarity(a, b) > SIMILARITY_THRESHOLD,
        _ => true,
    }
}

/// Align `old` against `new` and classify every position.
///
/// Rows are indexed sequentially in emission order. Word diffs are only
/// computed for modified headings and paragraphs, and only when
/// `options.compare_words` is set.
pub fn align_blocks(old: &[ContentBlock], new: &[ContentBlock], options: &DiffOptions) -> Vec<BlockDiff> {
    edit_script(old, new, blocks_similar)
        .into_iter()
        .enumerate()
        .map(|(index, step)| match step {
            Step::Keep(i, j) => BlockDiff::aligned(&old[i], &new[j], index, options),
            Step::Delete(i) => BlockDiff::removed(&old[i], index),
            Step::Insert(j) => BlockDiff::added(&new[j], index),
        })
        .collect()
}
