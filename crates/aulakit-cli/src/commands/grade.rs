//! The `aulakit grade` command.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};

use aulakit_core::model::Submission;
use aulakit_core::parser;
use aulakit_core::service::EvaluationService;
use aulakit_store::MemoryQuizStore;

pub async fn execute(
    quiz_path: PathBuf,
    quiz_id: Option<String>,
    answers: String,
    format: String,
) -> Result<()> {
    let quizzes = if quiz_path.is_dir() {
        parser::load_quiz_directory(&quiz_path)?
    } else {
        vec![parser::parse_quiz(&quiz_path)?]
    };
    anyhow::ensure!(!quizzes.is_empty(), "no quizzes found at {}", quiz_path.display());

    let quiz_id = match quiz_id {
        Some(id) => id,
        None if quizzes.len() == 1 => quizzes[0].id.clone(),
        None => anyhow::bail!(
            "{} quizzes found, pick one with --quiz-id",
            quizzes.len()
        ),
    };

    let submission = parse_answers(&answers)?;

    let service = EvaluationService::new(Arc::new(MemoryQuizStore::with_quizzes(quizzes)));
    let attempt = service.grade(&quiz_id, &submission).await?;

    match format.as_str() {
        "json" => println!("{}", serde_json::to_string_pretty(&attempt)?),
        "table" => {
            let mut table = comfy_table::Table::new();
            table.set_header(vec!["Quiz", "Correct", "Total", "Score"]);
            table.add_row(vec![
                attempt.quiz_id.clone(),
                attempt.result.correct.to_string(),
                attempt.result.total.to_string(),
                format!("{:.1}%", attempt.result.percentage),
            ]);
            println!("{table}");
        }
        other => anyhow::bail!("unknown format: {other}"),
    }

    Ok(())
}

/// Parse `--answers`: inline JSON, or `@path` to read a JSON file.
fn parse_answers(answers: &str) -> Result<Submission> {
    let content = match answers.strip_prefix('@') {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read answers file: {path}"))?,
        None => answers.to_string(),
    };
    serde_json::from_str(&content).context("answers must be a JSON map of question id to choice id")
}
