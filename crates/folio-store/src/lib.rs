//! Version storage for Folio.
//!
//! The diff engine never fetches anything itself: it is handed two already
//! resolved [`ArticleVersion`]s. This crate is the collaborator that resolves
//! them. Versions are keyed by `(article slug, version number)`.
//!
//! # Storage Backends
//!
//! All backends implement the [`VersionStore`] trait:
//!
//! - [`InMemoryVersionStore`] -- `BTreeMap`-based store, loadable from a JSON archive
//!
//! # Design Rules
//!
//! 1. Versions are immutable once inserted; a second insert of the same
//!    `(slug, number)` is rejected.
//! 2. Only `Published` versions are listed. Archived versions are hidden
//!    from listings but can still be fetched by number; drafts never are.
//! 3. A missing version is `Ok(None)`, never an error.
//!
//! [`ArticleVersion`]: folio_types::ArticleVersion

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryVersionStore;
pub use traits::VersionStore;
