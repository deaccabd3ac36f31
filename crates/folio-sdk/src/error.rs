use thiserror::Error;

#[derive(Debug, Error)]
pub enum SdkError {
    #[error("article not found: {0}")]
    ArticleNotFound(String),

    #[error("version {version} of {slug} not found")]
    VersionNotFound { slug: String, version: u32 },

    #[error("version {version} of {slug} is too large to compare: {reason}")]
    InputTooLarge {
        slug: String,
        version: u32,
        reason: String,
    },

    #[error("no version archive configured")]
    NoArchive,

    #[error("config error: {0}")]
    Config(String),

    #[error("store error: {0}")]
    Store(#[from] folio_store::StoreError),
}

pub type SdkResult<T> = Result<T, SdkError>;
