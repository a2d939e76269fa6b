//! In-memory repository implementations.
//!
//! The original demo services kept global mutable dictionaries; these stores
//! are the same idea behind the repository traits, so a real backend can be
//! swapped in without touching grading or allocation.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use aulakit_core::error::CoreError;
use aulakit_core::model::{CourseProgress, ProgressRecord, Quiz};
use aulakit_core::traits::{ProgressStore, QuizStore};

/// Quiz store backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryQuizStore {
    quizzes: RwLock<HashMap<String, Quiz>>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store seeded with the given quizzes. Later duplicates are dropped.
    pub fn with_quizzes(quizzes: impl IntoIterator<Item = Quiz>) -> Self {
        let mut map = HashMap::new();
        for quiz in quizzes {
            map.entry(quiz.id.clone()).or_insert(quiz);
        }
        Self {
            quizzes: RwLock::new(map),
        }
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn get(&self, quiz_id: &str) -> Result<Option<Quiz>, CoreError> {
        Ok(self.quizzes.read().await.get(quiz_id).cloned())
    }

    async fn insert(&self, quiz: Quiz) -> Result<bool, CoreError> {
        let mut map = self.quizzes.write().await;
        if map.contains_key(&quiz.id) {
            return Ok(false);
        }
        map.insert(quiz.id.clone(), quiz);
        Ok(true)
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        let mut ids: Vec<String> = self.quizzes.read().await.keys().cloned().collect();
        ids.sort();
        Ok(ids)
    }
}

/// Progress store backed by a `HashMap`.
#[derive(Default)]
pub struct MemoryProgressStore {
    records: RwLock<HashMap<String, ProgressRecord>>,
}

impl MemoryProgressStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn get(&self, learner_id: &str) -> Result<Option<ProgressRecord>, CoreError> {
        Ok(self.records.read().await.get(learner_id).cloned())
    }

    async fn put(&self, record: ProgressRecord) -> Result<(), CoreError> {
        self.records
            .write()
            .await
            .insert(record.learner_id.clone(), record);
        Ok(())
    }

    async fn put_if_absent(&self, record: ProgressRecord) -> Result<ProgressRecord, CoreError> {
        // Check and write under one write lock so racing bootstraps for the
        // same learner cannot both insert.
        let mut map = self.records.write().await;
        match map.get(&record.learner_id) {
            Some(existing) if !existing.is_empty() => Ok(existing.clone()),
            _ => {
                map.insert(record.learner_id.clone(), record.clone());
                Ok(record)
            }
        }
    }

    async fn upsert_course(
        &self,
        learner_id: &str,
        progress: CourseProgress,
    ) -> Result<(), CoreError> {
        let mut map = self.records.write().await;
        let record = map
            .entry(learner_id.to_string())
            .or_insert_with(|| ProgressRecord::empty(learner_id));
        match record
            .courses
            .iter_mut()
            .find(|c| c.course_id == progress.course_id)
        {
            Some(entry) => *entry = progress,
            None => record.courses.push(progress),
        }
        Ok(())
    }
}
