//! CLI subcommands.

pub mod assign;
pub mod courses;
pub mod grade;
pub mod init;
pub mod progress;
pub mod validate;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;

use aulakit_catalog::{load_config_from, AulakitConfig, HttpCatalog, StaticCatalog};
use aulakit_core::service::ProgressService;
use aulakit_core::traits::CatalogSource;
use aulakit_store::JsonProgressStore;

/// Build the catalog source: the configured HTTP service, or the built-in
/// demo catalog when `--offline` is given.
fn catalog_source(offline: bool, seed: u64, config: &AulakitConfig) -> Arc<dyn CatalogSource> {
    if offline {
        let mut rng = StdRng::seed_from_u64(seed);
        Arc::new(StaticCatalog::new(aulakit_store::seed::demo_courses(
            &mut rng,
        )))
    } else {
        Arc::new(HttpCatalog::with_timeout(
            &config.catalog.base_url,
            config.catalog.timeout_secs,
        ))
    }
}

/// Wire up a `ProgressService` over the file-backed progress store.
fn progress_service(
    offline: bool,
    seed: Option<u64>,
    config_path: Option<&Path>,
) -> Result<ProgressService> {
    let config = load_config_from(config_path)?;
    let seed = seed.or(config.allocator.seed).unwrap_or_else(rand::random);

    let state_path: PathBuf = config.state_dir.join("progress.json");
    let store = Arc::new(JsonProgressStore::open(&state_path)?);
    let catalog = catalog_source(offline, seed, &config);

    let profile = config.allocator.allocation_profile()?;
    Ok(ProgressService::with_seed(catalog, store, seed).with_bootstrap_profile(profile))
}

/// Render a progress record as a table.
fn progress_table(record: &aulakit_core::model::ProgressRecord) -> comfy_table::Table {
    let mut table = comfy_table::Table::new();
    table.set_header(vec![
        "Course", "Complete", "Hours", "Last lesson", "Started", "Last activity", "Grade",
    ]);
    for entry in &record.courses {
        table.add_row(vec![
            entry.course_id.clone(),
            format!("{}%", entry.completed_pct),
            entry.hours_invested.to_string(),
            entry.last_lesson.clone(),
            entry.started_on.to_string(),
            entry.last_activity.to_string(),
            entry
                .grade
                .map(|g| format!("{g:.1}"))
                .unwrap_or_else(|| "-".to_string()),
        ]);
    }
    table
}
