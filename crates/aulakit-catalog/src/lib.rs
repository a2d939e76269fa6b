//! aulakit-catalog — Course catalog integrations.
//!
//! Implements the `CatalogSource` trait over HTTP for a remote catalog
//! service, plus a static in-memory source for offline use and tests, and
//! the aulakit configuration loader.

pub mod config;
pub mod http;
pub mod staticsrc;

pub use config::{load_config, load_config_from, AllocatorConfig, AulakitConfig, CatalogConfig};
pub use http::HttpCatalog;
pub use staticsrc::StaticCatalog;
