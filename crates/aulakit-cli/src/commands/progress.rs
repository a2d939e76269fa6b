//! The `aulakit progress` command.

use std::path::PathBuf;

use anyhow::Result;

pub async fn execute(
    learner: String,
    offline: bool,
    seed: Option<u64>,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let service = super::progress_service(offline, seed, config_path.as_deref())?;

    let record = service.ensure_progress(&learner).await?;

    if record.is_empty() {
        println!("No progress for {learner}: no courses available.");
        return Ok(());
    }

    println!("Progress for {learner}:");
    println!("{}", super::progress_table(&record));
    Ok(())
}
