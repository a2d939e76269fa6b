//! Error taxonomy for aulakit.
//!
//! Catalog errors are defined here rather than in `aulakit-catalog` so the
//! progress service can classify upstream failures (strict vs lenient path)
//! without string matching.

use thiserror::Error;

/// Errors surfaced by the core services.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The requested quiz does not exist. Never graded as a zero score.
    #[error("quiz not found: {0}")]
    QuizNotFound(String),

    /// A quiz with this id already exists.
    #[error("quiz already exists: {0}")]
    QuizAlreadyExists(String),

    /// The requested course does not exist in the catalog.
    #[error("course not found: {0}")]
    CourseNotFound(String),

    /// The course catalog could not be reached.
    #[error("course catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// The catalog is reachable but has no courses to assign.
    #[error("no courses available to assign")]
    NoCoursesAvailable,

    /// A repository failed.
    #[error("store error: {0}")]
    Store(String),
}

impl CoreError {
    /// Returns `true` if this error maps to a Not-Found condition.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CoreError::QuizNotFound(_)
                | CoreError::CourseNotFound(_)
                | CoreError::NoCoursesAvailable
        )
    }
}

impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound(id) => CoreError::CourseNotFound(id),
            other => CoreError::CatalogUnavailable(other.to_string()),
        }
    }
}

/// Errors from a course catalog source.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The request timed out.
    #[error("catalog request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// The catalog service returned an error response.
    #[error("catalog error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The requested course was not found.
    #[error("course not found: {0}")]
    NotFound(String),
}

impl CatalogError {
    /// Returns `true` if the catalog as a whole is unavailable, as opposed
    /// to a single entry being absent.
    pub fn is_unavailable(&self) -> bool {
        !matches!(self, CatalogError::NotFound(_))
    }
}
