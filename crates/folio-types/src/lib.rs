//! Foundation types for Folio.
//!
//! This crate provides the document model shared by every other Folio crate:
//! the typed content blocks an article body is made of, and the immutable
//! article version snapshots those bodies belong to.
//!
//! # Key Types
//!
//! - [`ContentBlock`] — One structural unit of a document (heading, paragraph, list, ...)
//! - [`BlockKind`] — Fieldless tag of a [`ContentBlock`] variant
//! - [`ArticleVersion`] — Immutable snapshot of an article body
//! - [`VersionId`] — UUID identifier of a version
//! - [`VersionStatus`] — Visibility of a version (published, draft, archived)

pub mod block;
pub mod error;
pub mod version;

pub use block::{BlockKind, ContentBlock, TodoItem};
pub use error::TypeError;
pub use version::{ArticleVersion, VersionId, VersionStatus};
