//! The `aulakit assign` command — forced course reassignment.

use std::path::PathBuf;

use anyhow::Result;

pub async fn execute(
    learner: String,
    offline: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let service = super::progress_service(offline, seed, config_path.as_deref())?;

    let record = service.reassign(&learner).await?;

    println!(
        "{} courses assigned to {learner}:",
        record.courses.len()
    );
    println!("{}", super::progress_table(&record));
    Ok(())
}
