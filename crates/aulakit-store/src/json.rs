//! JSON-file-backed progress store.
//!
//! Keeps every learner's record in one JSON file so CLI invocations share
//! state. A demo stand-in for real persistence behind the same trait.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::sync::RwLock;

use aulakit_core::error::CoreError;
use aulakit_core::model::{CourseProgress, ProgressRecord, Quiz};
use aulakit_core::traits::{ProgressStore, QuizStore};

/// Progress store persisted to a single JSON file.
#[derive(Debug)]
pub struct JsonProgressStore {
    path: PathBuf,
    records: RwLock<HashMap<String, ProgressRecord>>,
}

impl JsonProgressStore {
    /// Open the store, loading existing records if the file is present.
    pub fn open(path: &Path) -> Result<Self, CoreError> {
        let records = if path.exists() {
            let content = std::fs::read_to_string(path)
                .map_err(|e| CoreError::Store(format!("read {}: {e}", path.display())))?;
            serde_json::from_str(&content)
                .map_err(|e| CoreError::Store(format!("parse {}: {e}", path.display())))?
        } else {
            HashMap::new()
        };

        Ok(Self {
            path: path.to_path_buf(),
            records: RwLock::new(records),
        })
    }

    fn flush(&self, records: &HashMap<String, ProgressRecord>) -> Result<(), CoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| CoreError::Store(format!("mkdir {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| CoreError::Store(format!("serialize progress: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| CoreError::Store(format!("write {}: {e}", self.path.display())))
    }
}

#[async_trait]
impl ProgressStore for JsonProgressStore {
    async fn get(&self, learner_id: &str) -> Result<Option<ProgressRecord>, CoreError> {
        Ok(self.records.read().await.get(learner_id).cloned())
    }

    async fn put(&self, record: ProgressRecord) -> Result<(), CoreError> {
        let mut map = self.records.write().await;
        map.insert(record.learner_id.clone(), record);
        self.flush(&map)
    }

    async fn put_if_absent(&self, record: ProgressRecord) -> Result<ProgressRecord, CoreError> {
        let mut map = self.records.write().await;
        match map.get(&record.learner_id) {
            Some(existing) if !existing.is_empty() => Ok(existing.clone()),
            _ => {
                map.insert(record.learner_id.clone(), record.clone());
                self.flush(&map)?;
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
        self.flush(&map)
    }
}

/// Quiz store that loads quiz TOML files from a directory at open time.
///
/// Read-through only: quizzes created at runtime live in memory and are not
/// written back to disk.
pub struct DirectoryQuizStore {
    inner: crate::memory::MemoryQuizStore,
}

impl DirectoryQuizStore {
    pub fn open(dir: &Path) -> anyhow::Result<Self> {
        let quizzes = aulakit_core::parser::load_quiz_directory(dir)?;
        tracing::debug!(count = quizzes.len(), dir = %dir.display(), "loaded quizzes");
        Ok(Self {
            inner: crate::memory::MemoryQuizStore::with_quizzes(quizzes),
        })
    }
}

#[async_trait]
impl QuizStore for DirectoryQuizStore {
    async fn get(&self, quiz_id: &str) -> Result<Option<Quiz>, CoreError> {
        self.inner.get(quiz_id).await
    }

    async fn insert(&self, quiz: Quiz) -> Result<bool, CoreError> {
        self.inner.insert(quiz).await
    }

    async fn list_ids(&self) -> Result<Vec<String>, CoreError> {
        self.inner.list_ids().await
    }
}
