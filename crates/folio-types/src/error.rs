use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("unknown block kind: {0}")]
    UnknownBlockKind(String),

    #[error("invalid heading level: {0} (expected 1, 2 or 3)")]
    InvalidHeadingLevel(u8),

    #[error("invalid version id: {0}")]
    InvalidVersionId(String),
}
