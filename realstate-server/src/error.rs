//! Error kinds shared by the repository and service layers

/// Boxed error for failures no layer knows how to classify.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Outcome of a failed real-state operation.
///
/// The repository produces these, the service passes them through untouched,
/// and the HTTP layer picks a status code per variant.
#[derive(Debug, thiserror::Error)]
pub enum RealStateError {
    /// No row matches the requested id.
    #[error("resource not found")]
    NotFound,

    /// The store failed to execute or decode a statement.
    #[error("application internal error")]
    Internal(#[source] sqlx::Error),

    /// Anything an implementation did not classify.
    #[error("unexpected error: {0}")]
    Unclassified(#[source] BoxError),
}

pub type RealStateResult<T> = Result<T, RealStateError>;
