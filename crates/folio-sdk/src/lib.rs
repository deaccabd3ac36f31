//! High-level SDK for Folio.
//!
//! [`Folio`] ties a [`VersionStore`](folio_store::VersionStore) to the diff
//! engine: it resolves version numbers to versions, reports missing articles
//! and versions as errors, bounds input sizes, and runs the comparison.
//!
//! ```no_run
//! use folio_sdk::{Folio, FolioConfig};
//!
//! let config = FolioConfig::load("folio.toml")?;
//! let folio = Folio::from_config(config)?;
//! let diff = folio.compare("hello-world", 1, 2)?;
//! println!("{}", diff.change_summary());
//! # Ok::<(), folio_sdk::SdkError>(())
//! ```

pub mod config;
pub mod error;
pub mod folio;

pub use config::{DiffLimits, FolioConfig};
pub use error::{SdkError, SdkResult};
pub use folio::Folio;
