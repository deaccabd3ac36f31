//! Diff engine for Folio.
//!
//! Compares two versions of an article, aligning their content blocks with a
//! longest-common-subsequence pass driven by fuzzy text similarity, and
//! producing a structured change list with word-level detail for edited
//! headings and paragraphs.
//!
//! Everything in this crate is a pure, synchronous function of its inputs.
//! The alignment tables are `O(m * n)` in time and memory, so callers bound
//! the sizes of the documents they compare.
//!
//! # Key Types
//!
//! - [`VersionDiff`] / [`DiffSummary`] -- Full comparison of two versions
//! - [`BlockDiff`] / [`ChangeType`] -- One row of the block-level edit script
//! - [`WordDiff`] -- One token of a word-level diff
//! - [`DiffOptions`] -- Word comparison and whitespace handling switches

pub mod blocks;
pub mod change;
mod lcs;
pub mod similarity;
pub mod summary;
pub mod version_diff;
pub mod words;

pub use blocks::{align_blocks, blocks_similar, BlockDiff};
pub use change::ChangeType;
pub use similarity::{levenshtein, similarity, SIMILARITY_THRESHOLD};
pub use summary::{change_summary, NO_CHANGES};
pub use version_diff::{compare_versions, DiffOptions, DiffSummary, VersionDiff};
pub use words::{diff_words, tokenize, WordDiff};
