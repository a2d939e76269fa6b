//! TOML quiz parser.
//!
//! Loads quizzes from TOML files and directories, and validates them.

use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::{Choice, Question, Quiz};

/// Intermediate TOML structure for parsing quiz files.
#[derive(Debug, Deserialize)]
struct TomlQuizFile {
    quiz: TomlQuizHeader,
    #[serde(default)]
    questions: Vec<TomlQuestion>,
}

#[derive(Debug, Deserialize)]
struct TomlQuizHeader {
    id: String,
    title: String,
}

#[derive(Debug, Deserialize)]
struct TomlQuestion {
    id: String,
    prompt: String,
    #[serde(default)]
    choices: Vec<TomlChoice>,
}

#[derive(Debug, Deserialize)]
struct TomlChoice {
    id: String,
    label: String,
    #[serde(default)]
    correct: bool,
}

/// Parse a single TOML file into a `Quiz`.
pub fn parse_quiz(path: &Path) -> Result<Quiz> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read quiz file: {}", path.display()))?;

    parse_quiz_str(&content, path)
}

/// Parse a TOML string into a `Quiz` (useful for testing).
pub fn parse_quiz_str(content: &str, source_path: &Path) -> Result<Quiz> {
    let parsed: TomlQuizFile = toml::from_str(content)
        .with_context(|| format!("failed to parse TOML: {}", source_path.display()))?;

    let questions = parsed
        .questions
        .into_iter()
        .map(|q| Question {
            id: q.id,
            prompt: q.prompt,
            choices: q
                .choices
                .into_iter()
                .map(|c| Choice {
                    id: c.id,
                    label: c.label,
                    correct: c.correct,
                })
                .collect(),
        })
        .collect();

    Ok(Quiz {
        id: parsed.quiz.id,
        title: parsed.quiz.title,
        questions,
    })
}

/// Recursively load all `.toml` quiz files from a directory.
pub fn load_quiz_directory(dir: &Path) -> Result<Vec<Quiz>> {
    let mut quizzes = Vec::new();

    if !dir.is_dir() {
        anyhow::bail!("not a directory: {}", dir.display());
    }

    for entry in std::fs::read_dir(dir)
        .with_context(|| format!("failed to read directory: {}", dir.display()))?
    {
        let entry = entry?;
        let path = entry.path();

        if path.is_dir() {
            quizzes.extend(load_quiz_directory(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            match parse_quiz(&path) {
                Ok(quiz) => quizzes.push(quiz),
                Err(e) => {
                    tracing::warn!("skipping {}: {}", path.display(), e);
                }
            }
        }
    }

    Ok(quizzes)
}

/// A warning from quiz validation.
#[derive(Debug, Clone)]
pub struct ValidationWarning {
    /// The question ID (if applicable).
    pub question_id: Option<String>,
    /// Warning message.
    pub message: String,
}

/// Validate a quiz for common issues.
///
/// A well-formed question has at least one choice and exactly one correct
/// choice; anything else is flagged here but still tolerated by the grader.
pub fn validate_quiz(quiz: &Quiz) -> Vec<ValidationWarning> {
    let mut warnings = Vec::new();

    // Duplicate question IDs
    let mut seen_ids = std::collections::HashSet::new();
    for question in &quiz.questions {
        if !seen_ids.insert(&question.id) {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("duplicate question ID: {}", question.id),
            });
        }
    }

    for question in &quiz.questions {
        if question.prompt.trim().is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "prompt is empty".into(),
            });
        }

        if question.choices.is_empty() {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "question has no choices".into(),
            });
            continue;
        }

        // Duplicate choice IDs within a question
        let mut seen_choices = std::collections::HashSet::new();
        for choice in &question.choices {
            if !seen_choices.insert(&choice.id) {
                warnings.push(ValidationWarning {
                    question_id: Some(question.id.clone()),
                    message: format!("duplicate choice ID: {}", choice.id),
                });
            }
        }

        let correct_count = question.choices.iter().filter(|c| c.correct).count();
        if correct_count == 0 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: "no choice is marked correct; question is unscorable".into(),
            });
        } else if correct_count > 1 {
            warnings.push(ValidationWarning {
                question_id: Some(question.id.clone()),
                message: format!("{correct_count} choices marked correct, expected exactly one"),
            });
        }
    }

    if quiz.questions.is_empty() {
        warnings.push(ValidationWarning {
            question_id: None,
            message: "quiz has no questions".into(),
        });
    }

    warnings
}
