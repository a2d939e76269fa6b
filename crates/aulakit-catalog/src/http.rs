//! HTTP catalog source.
//!
//! Talks to a remote course-catalog service exposing `GET /` for the full
//! list, `GET /{id}` for one course, and `GET /health`.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use aulakit_core::error::CatalogError;
use aulakit_core::model::Course;
use aulakit_core::traits::CatalogSource;

const DEFAULT_TIMEOUT_SECS: u64 = 3;

/// Catalog source backed by a remote HTTP service.
pub struct HttpCatalog {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

#[derive(Deserialize)]
struct CourseListResponse {
    #[serde(default)]
    courses: Vec<Course>,
}

#[derive(Deserialize)]
struct HealthResponse {
    status: String,
}

impl HttpCatalog {
    pub fn new(base_url: &str) -> Self {
        Self::with_timeout(base_url, DEFAULT_TIMEOUT_SECS)
    }

    pub fn with_timeout(base_url: &str, timeout_secs: u64) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .build()
            .expect("failed to build HTTP client");

        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        }
    }

    fn map_send_error(&self, e: reqwest::Error) -> CatalogError {
        if e.is_timeout() {
            CatalogError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            CatalogError::NetworkError(format!(
                "catalog service not reachable at {}",
                self.base_url
            ))
        } else {
            CatalogError::NetworkError(e.to_string())
        }
    }

    /// Check the catalog service's health endpoint.
    pub async fn health(&self) -> Result<bool, CatalogError> {
        let response = self
            .client
            .get(format!("{}/health", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let health: HealthResponse =
            response.json().await.map_err(|e| CatalogError::ApiError {
                status: 0,
                message: format!("failed to parse health response: {e}"),
            })?;

        Ok(health.status == "ok")
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self))]
    async fn list_courses(&self) -> Result<Vec<Course>, CatalogError> {
        let response = self
            .client
            .get(format!("{}/", self.base_url))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status,
                message: body,
            });
        }

        let list: CourseListResponse =
            response.json().await.map_err(|e| CatalogError::ApiError {
                status: 0,
                message: format!("failed to parse course list: {e}"),
            })?;

        Ok(list.courses)
    }

    #[instrument(skip(self))]
    async fn course(&self, course_id: &str) -> Result<Course, CatalogError> {
        let response = self
            .client
            .get(format!("{}/{}", self.base_url, course_id))
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status().as_u16();
        if status == 404 {
            return Err(CatalogError::NotFound(course_id.to_string()));
        }
        if status >= 400 {
            let body = response.text().await.unwrap_or_default();
            return Err(CatalogError::ApiError {
                status,
                message: body,
            });
        }

        response.json().await.map_err(|e| CatalogError::ApiError {
            status: 0,
            message: format!("failed to parse course: {e}"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn lists_courses() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "courses": [
                {
                    "id": "course1",
                    "title": "Python Basics",
                    "description": "Learn Python from scratch",
                    "instructor_id": "inst1",
                    "duration_hours": 40,
                    "rating": 4.8,
                    "level": "basic"
                },
                {
                    "id": "course2",
                    "title": "Web Development",
                    "description": "Web development with Flask",
                    "instructor_id": "inst2",
                    "duration_hours": 60,
                    "rating": 4.6,
                    "level": "intermediate"
                }
            ]
        });

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let courses = catalog.list_courses().await.unwrap();
        assert_eq!(courses.len(), 2);
        assert_eq!(courses[0].id, "course1");
        assert_eq!(courses[1].duration_hours, 60);
    }

    #[tokio::test]
    async fn fetches_single_course() {
        let server = MockServer::start().await;

        let response_body = serde_json::json!({
            "id": "course1",
            "title": "Python Basics",
            "description": "Learn Python from scratch",
            "instructor_id": "inst1",
            "duration_hours": 40,
            "rating": 4.8
        });

        Mock::given(method("GET"))
            .and(path("/course1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(&response_body))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let course = catalog.course("course1").await.unwrap();
        assert_eq!(course.title, "Python Basics");
        assert!(course.level.is_none());
    }

    #[tokio::test]
    async fn missing_course_is_not_found() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/ghost"))
            .respond_with(ResponseTemplate::new(404).set_body_string("course not found"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog.course("ghost").await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(id) if id == "ghost"));
        assert!(!CatalogError::NotFound("ghost".into()).is_unavailable());
    }

    #[tokio::test]
    async fn server_error_is_api_error() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let err = catalog.list_courses().await.unwrap_err();
        assert!(matches!(err, CatalogError::ApiError { status: 500, .. }));
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn unreachable_server_is_network_error() {
        // Port 1 is reserved and should refuse connections.
        let catalog = HttpCatalog::new("http://127.0.0.1:1");
        let err = catalog.list_courses().await.unwrap_err();
        assert!(err.is_unavailable());
    }

    #[tokio::test]
    async fn health_check() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "status": "ok"
            })))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        assert!(catalog.health().await.unwrap());
    }

    #[tokio::test]
    async fn empty_course_list() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "courses": []
            })))
            .mount(&server)
            .await;

        let catalog = HttpCatalog::new(&server.uri());
        let courses = catalog.list_courses().await.unwrap();
        assert!(courses.is_empty());
    }
}
