//! Service orchestrators tying grading and allocation to the repositories.
//!
//! These are the entry points an HTTP layer (or the CLI) calls. They hold no
//! domain logic of their own beyond the strict/lenient error split between
//! the bootstrap and reassignment paths.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use rand::rngs::StdRng;
use rand::SeedableRng;
use uuid::Uuid;

use crate::allocator::{allocate, AllocationProfile};
use crate::error::CoreError;
use crate::grader::grade;
use crate::model::{
    CourseProgress, GradedAttempt, ProgressRecord, Quiz, QuizView, Submission,
};
use crate::traits::{CatalogSource, ProgressStore, QuizStore};

/// Grades submissions against stored quizzes.
pub struct EvaluationService {
    quizzes: Arc<dyn QuizStore>,
}

impl EvaluationService {
    pub fn new(quizzes: Arc<dyn QuizStore>) -> Self {
        Self { quizzes }
    }

    /// The learner-facing view of a quiz, with correctness flags stripped.
    pub async fn quiz_view(&self, quiz_id: &str) -> Result<QuizView, CoreError> {
        let quiz = self.require_quiz(quiz_id).await?;
        Ok(QuizView::from(&quiz))
    }

    /// Grade a submission against a stored quiz.
    ///
    /// A missing quiz is a Not-Found condition, never a zero score.
    pub async fn grade(
        &self,
        quiz_id: &str,
        submission: &Submission,
    ) -> Result<GradedAttempt, CoreError> {
        let quiz = self.require_quiz(quiz_id).await?;
        let result = grade(&quiz, submission);
        tracing::debug!(
            quiz_id,
            correct = result.correct,
            total = result.total,
            "graded submission"
        );
        Ok(GradedAttempt {
            id: Uuid::new_v4(),
            quiz_id: quiz.id,
            graded_at: Utc::now(),
            result,
        })
    }

    /// Store a new quiz, rejecting duplicate ids.
    pub async fn create_quiz(&self, quiz: Quiz) -> Result<(), CoreError> {
        let quiz_id = quiz.id.clone();
        if self.quizzes.insert(quiz).await? {
            Ok(())
        } else {
            Err(CoreError::QuizAlreadyExists(quiz_id))
        }
    }

    async fn require_quiz(&self, quiz_id: &str) -> Result<Quiz, CoreError> {
        self.quizzes
            .get(quiz_id)
            .await?
            .ok_or_else(|| CoreError::QuizNotFound(quiz_id.to_string()))
    }
}

/// Bootstraps and maintains per-learner course progress.
pub struct ProgressService {
    catalog: Arc<dyn CatalogSource>,
    store: Arc<dyn ProgressStore>,
    bootstrap_profile: AllocationProfile,
    rng: Mutex<StdRng>,
}

impl ProgressService {
    /// Service with OS-entropy randomness and the default bootstrap profile.
    pub fn new(catalog: Arc<dyn CatalogSource>, store: Arc<dyn ProgressStore>) -> Self {
        Self::with_seed(catalog, store, rand::random())
    }

    /// Service with a fixed seed, for reproducible allocation.
    pub fn with_seed(
        catalog: Arc<dyn CatalogSource>,
        store: Arc<dyn ProgressStore>,
        seed: u64,
    ) -> Self {
        Self {
            catalog,
            store,
            bootstrap_profile: AllocationProfile::bootstrap(),
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    /// Override the profile used by [`ensure_progress`](Self::ensure_progress).
    pub fn with_bootstrap_profile(mut self, profile: AllocationProfile) -> Self {
        self.bootstrap_profile = profile;
        self
    }

    /// Return the learner's progress, allocating it on first access.
    ///
    /// Lenient path: an unreachable catalog or an empty one degrades to an
    /// empty record rather than an error, and nothing is persisted in that
    /// case. A populated existing record is returned unchanged.
    pub async fn ensure_progress(&self, learner_id: &str) -> Result<ProgressRecord, CoreError> {
        if let Some(existing) = self.store.get(learner_id).await? {
            if !existing.is_empty() {
                return Ok(existing);
            }
        }

        let courses = match self.catalog.list_courses().await {
            Ok(courses) => courses,
            Err(e) => {
                tracing::warn!(learner_id, source = self.catalog.name(), error = %e,
                    "catalog unavailable, returning empty progress");
                return Ok(ProgressRecord::empty(learner_id));
            }
        };
        if courses.is_empty() {
            return Ok(ProgressRecord::empty(learner_id));
        }

        let record = self.allocate_record(learner_id, &courses, self.bootstrap_profile);
        tracing::info!(learner_id, count = record.courses.len(), "bootstrapped progress");

        // First writer wins if two bootstraps race for the same learner.
        self.store.put_if_absent(record).await
    }

    /// Replace the learner's progress with a fresh random assignment.
    ///
    /// Strict path: an unreachable catalog surfaces as
    /// [`CoreError::CatalogUnavailable`], an empty one as
    /// [`CoreError::NoCoursesAvailable`].
    pub async fn reassign(&self, learner_id: &str) -> Result<ProgressRecord, CoreError> {
        let courses = self.catalog.list_courses().await?;
        if courses.is_empty() {
            return Err(CoreError::NoCoursesAvailable);
        }

        let record = self.allocate_record(learner_id, &courses, AllocationProfile::reassign());
        tracing::info!(learner_id, count = record.courses.len(), "reassigned progress");

        self.store.put(record.clone()).await?;
        Ok(record)
    }

    /// Record explicit progress in one course, appending or updating.
    pub async fn record_progress(
        &self,
        learner_id: &str,
        progress: CourseProgress,
    ) -> Result<(), CoreError> {
        self.store.upsert_course(learner_id, progress).await
    }

    fn allocate_record(
        &self,
        learner_id: &str,
        courses: &[crate::model::Course],
        profile: AllocationProfile,
    ) -> ProgressRecord {
        let today = Utc::now().date_naive();
        let mut rng = self.rng.lock().expect("allocator rng poisoned");
        allocate(learner_id, courses, profile, &mut *rng, today)
    }
}
