//! The `aulakit courses` command.

use std::path::PathBuf;

use anyhow::Result;

use aulakit_catalog::load_config_from;

pub async fn execute(offline: bool, config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;
    let seed = config.allocator.seed.unwrap_or_else(rand::random);
    let catalog = super::catalog_source(offline, seed, &config);

    let courses = catalog.list_courses().await?;

    let mut table = comfy_table::Table::new();
    table.set_header(vec!["Id", "Title", "Level", "Hours", "Rating", "Instructor"]);
    for course in &courses {
        table.add_row(vec![
            course.id.clone(),
            course.title.clone(),
            course
                .level
                .map(|l| l.to_string())
                .unwrap_or_else(|| "-".to_string()),
            course.duration_hours.to_string(),
            format!("{:.1}", course.rating),
            course.instructor_id.clone(),
        ]);
    }
    println!("{table}");
    println!("{} courses.", courses.len());
    Ok(())
}
