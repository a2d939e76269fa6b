//! Repository and catalog trait definitions.
//!
//! The grading and progress services depend only on these traits; the
//! `aulakit-store` and `aulakit-catalog` crates provide the implementations.
//! Swapping the demo in-memory stores for a real persistence backend means
//! implementing these traits, nothing else.

use async_trait::async_trait;

use crate::error::{CatalogError, CoreError};
use crate::model::{Course, CourseProgress, ProgressRecord, Quiz};

/// Quiz lookup and creation.
#[async_trait]
pub trait QuizStore: Send + Sync {
    /// Fetch a quiz by id.
    async fn get(&self, quiz_id: &str) -> Result<Option<Quiz>, CoreError>;

    /// Insert a quiz. Returns `false` without overwriting when a quiz with
    /// the same id already exists.
    async fn insert(&self, quiz: Quiz) -> Result<bool, CoreError>;

    /// Ids of all stored quizzes.
    async fn list_ids(&self) -> Result<Vec<String>, CoreError>;
}

/// Per-learner progress persistence.
#[async_trait]
pub trait ProgressStore: Send + Sync {
    /// Fetch a learner's progress record.
    async fn get(&self, learner_id: &str) -> Result<Option<ProgressRecord>, CoreError>;

    /// Replace a learner's record wholesale.
    async fn put(&self, record: ProgressRecord) -> Result<(), CoreError>;

    /// Insert the record only if the learner has no non-empty record yet,
    /// returning whatever is current afterwards. The check and the write
    /// happen under one exclusive section, so concurrent first-access
    /// bootstraps cannot clobber each other.
    async fn put_if_absent(&self, record: ProgressRecord) -> Result<ProgressRecord, CoreError>;

    /// Append a per-course entry, or update it in place when the learner
    /// already has progress for that course.
    async fn upsert_course(
        &self,
        learner_id: &str,
        progress: CourseProgress,
    ) -> Result<(), CoreError>;
}

/// A source of course catalog data.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Human-readable source name (e.g. "http", "static").
    fn name(&self) -> &str;

    /// List every course in the catalog.
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError>;

    /// Fetch a single course by id.
    async fn course(&self, course_id: &str) -> Result<Course, CatalogError>;
}
