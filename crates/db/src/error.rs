use termkeeper_core::error::CoreError;

/// Error returned by repositories and the term aggregation service.
///
/// Validation failures are raised before any statement runs. Storage
/// failures are passed through untouched; when a multi-step call fails
/// part-way, the error of the failing step is returned and earlier steps
/// are left for the caller's transaction to roll back.
#[derive(Debug, thiserror::Error)]
pub enum RepoError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Storage error: {0}")]
    Storage(#[from] sqlx::Error),
}
