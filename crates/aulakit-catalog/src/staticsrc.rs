//! Static catalog source for offline use and testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use aulakit_core::error::CatalogError;
use aulakit_core::model::Course;
use aulakit_core::traits::CatalogSource;

/// A fixed in-memory catalog.
///
/// Used by the CLI's offline mode and by tests that need a catalog without a
/// running service. Can be told to fail, to exercise degraded paths.
pub struct StaticCatalog {
    courses: Vec<Course>,
    /// When set, every call fails with this message as a network error.
    failure: Mutex<Option<String>>,
    /// Number of list calls made.
    call_count: AtomicU32,
}

impl StaticCatalog {
    /// Create a catalog serving the given courses.
    pub fn new(courses: Vec<Course>) -> Self {
        Self {
            courses,
            failure: Mutex::new(None),
            call_count: AtomicU32::new(0),
        }
    }

    /// A catalog with no courses.
    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Make every subsequent call fail as if the upstream were unreachable.
    pub fn fail_with(&self, message: &str) {
        *self.failure.lock().unwrap() = Some(message.to_string());
    }

    /// Clear an injected failure.
    pub fn recover(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Number of list calls made against this catalog.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn check_failure(&self) -> Result<(), CatalogError> {
        match self.failure.lock().unwrap().as_ref() {
            Some(message) => Err(CatalogError::NetworkError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    fn name(&self) -> &str {
        "static"
    }

    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.check_failure()?;
        Ok(self.courses.clone())
    }

    async fn course(&self, course_id: &str) -> Result<Course, CatalogError> {
        self.check_failure()?;
        self.courses
            .iter()
            .find(|c| c.id == course_id)
            .cloned()
            .ok_or_else(|| CatalogError::NotFound(course_id.to_string()))
    }
}
