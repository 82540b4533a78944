use thiserror::Error;

/// Errors surfaced by the local cache repository.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The targeted row does not exist.
    #[error("entity not found")]
    NotFound,
    /// The underlying diesel statement failed.
    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
    /// A connection could not be checked out of the pool.
    #[error("connection pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;
