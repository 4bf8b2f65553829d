use thiserror::Error;

/// Library error type for Iris.
///
/// Fetching itself never fails — every fetch reduces to an
/// [`Outcome`](crate::models::Outcome) — so the only fallible operations
/// left are constructors.
#[derive(Error, Debug)]
pub enum AppError {
    /// Building the underlying HTTP client failed.
    #[error("HTTP client error: {0}")]
    HttpClient(String),
}
