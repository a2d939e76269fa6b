//! Core data model types for aulakit.
//!
//! These are the fundamental types the whole system uses to represent
//! courses, quizzes, submissions, and per-learner progress.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A course in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Course {
    /// Unique identifier for this course.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// Description of the course contents.
    #[serde(default)]
    pub description: String,
    /// Identifier of the instructor teaching this course.
    pub instructor_id: String,
    /// Total duration in hours.
    pub duration_hours: u32,
    /// Average learner rating on a 5-point scale.
    pub rating: f64,
    /// Difficulty level, if declared.
    #[serde(default)]
    pub level: Option<Level>,
}

/// Course difficulty levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Basic,
    Intermediate,
    Advanced,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Level::Basic => write!(f, "basic"),
            Level::Intermediate => write!(f, "intermediate"),
            Level::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Level {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "basic" | "beginner" => Ok(Level::Basic),
            "intermediate" => Ok(Level::Intermediate),
            "advanced" => Ok(Level::Advanced),
            other => Err(format!("unknown level: {other}")),
        }
    }
}

/// A quiz: an ordered set of questions used to assess a learner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quiz {
    /// Unique identifier for this quiz.
    pub id: String,
    /// Human-readable title.
    pub title: String,
    /// The questions, in presentation order.
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// A single question within a quiz.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier within the quiz.
    pub id: String,
    /// The prompt shown to the learner.
    pub prompt: String,
    /// The selectable choices, in presentation order.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl Question {
    /// The id of the choice flagged correct, if any.
    ///
    /// A well-formed question has exactly one correct choice. A question with
    /// none is unscorable and counts as wrong for every submission.
    pub fn correct_choice_id(&self) -> Option<&str> {
        self.choices
            .iter()
            .find(|c| c.correct)
            .map(|c| c.id.as_str())
    }
}

/// One selectable answer to a question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Choice {
    /// Unique identifier within the question.
    pub id: String,
    /// The label shown to the learner.
    pub label: String,
    /// Whether this is the correct choice. Never shown to learners
    /// before submission; see [`QuizView`].
    #[serde(default)]
    pub correct: bool,
}

// ---------------------------------------------------------------------------
// Redacted views
// ---------------------------------------------------------------------------

/// A quiz as shown to a learner before submission.
///
/// Carries no correctness information at the type level, so a serialized view
/// cannot leak answers regardless of serializer settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizView {
    pub id: String,
    pub title: String,
    pub questions: Vec<QuestionView>,
}

/// A question with its correctness flags stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionView {
    pub id: String,
    pub prompt: String,
    pub choices: Vec<ChoiceView>,
}

/// A choice with its correctness flag stripped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChoiceView {
    pub id: String,
    pub label: String,
}

impl From<&Quiz> for QuizView {
    fn from(quiz: &Quiz) -> Self {
        QuizView {
            id: quiz.id.clone(),
            title: quiz.title.clone(),
            questions: quiz
                .questions
                .iter()
                .map(|q| QuestionView {
                    id: q.id.clone(),
                    prompt: q.prompt.clone(),
                    choices: q
                        .choices
                        .iter()
                        .map(|c| ChoiceView {
                            id: c.id.clone(),
                            label: c.label.clone(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Submissions and grading
// ---------------------------------------------------------------------------

/// A learner's submitted answers: question id → selected choice id.
///
/// Submitted once per attempt. Entries referencing unknown question ids are
/// ignored rather than failing the whole grading operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Submission {
    pub answers: HashMap<String, String>,
}

impl Submission {
    pub fn new() -> Self {
        Self::default()
    }

    /// The choice selected for a question, if the learner answered it.
    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }
}

impl<const N: usize> From<[(&str, &str); N]> for Submission {
    fn from(entries: [(&str, &str); N]) -> Self {
        Submission {
            answers: entries
                .into_iter()
                .map(|(q, c)| (q.to_string(), c.to_string()))
                .collect(),
        }
    }
}

/// The outcome of grading one submission against one quiz.
///
/// Exposes the raw counts alongside the derived percentage so callers can
/// re-derive the score with their own rounding rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GradeResult {
    /// Number of correctly answered questions.
    pub correct: u32,
    /// Total number of questions in the quiz (not answers submitted).
    pub total: u32,
    /// `correct / total * 100` as a pass-through float; 0.0 for empty quizzes.
    pub percentage: f64,
}

/// A recorded grading of one submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GradedAttempt {
    /// Unique identifier for this attempt.
    pub id: Uuid,
    /// The quiz that was graded.
    pub quiz_id: String,
    /// When grading happened.
    pub graded_at: DateTime<Utc>,
    /// The computed score.
    pub result: GradeResult,
}

// ---------------------------------------------------------------------------
// Progress
// ---------------------------------------------------------------------------

/// A learner's progress in a single course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CourseProgress {
    /// The course this entry tracks.
    pub course_id: String,
    /// Completion percentage, 0–100 inclusive.
    pub completed_pct: u8,
    /// Hours the learner has invested so far.
    pub hours_invested: u32,
    /// Marker for the last lesson reached.
    pub last_lesson: String,
    /// When the learner started the course.
    pub started_on: NaiveDate,
    /// Date of the most recent activity.
    pub last_activity: NaiveDate,
    /// Grade on a 5-point scale, present only once completion has crossed
    /// the allocation profile's eligibility threshold.
    #[serde(default)]
    pub grade: Option<f64>,
}

/// All of one learner's course progress.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressRecord {
    /// The learner this record belongs to.
    pub learner_id: String,
    /// Per-course progress entries.
    #[serde(default)]
    pub courses: Vec<CourseProgress>,
}

impl ProgressRecord {
    /// An empty record for a learner with no assigned courses.
    pub fn empty(learner_id: impl Into<String>) -> Self {
        ProgressRecord {
            learner_id: learner_id.into(),
            courses: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_quiz() -> Quiz {
        Quiz {
            id: "c1".into(),
            title: "Initial Assessment".into(),
            questions: vec![Question {
                id: "q1".into(),
                prompt: "What does print(1+1) output?".into(),
                choices: vec![
                    Choice {
                        id: "o1".into(),
                        label: "1".into(),
                        correct: false,
                    },
                    Choice {
                        id: "o2".into(),
                        label: "2".into(),
                        correct: true,
                    },
                ],
            }],
        }
    }

    #[test]
    fn level_display_and_parse() {
        assert_eq!(Level::Basic.to_string(), "basic");
        assert_eq!("Advanced".parse::<Level>().unwrap(), Level::Advanced);
        assert_eq!("beginner".parse::<Level>().unwrap(), Level::Basic);
        assert!("expert".parse::<Level>().is_err());
    }

    #[test]
    fn correct_choice_lookup() {
        let quiz = sample_quiz();
        assert_eq!(quiz.questions[0].correct_choice_id(), Some("o2"));

        let unscorable = Question {
            id: "q2".into(),
            prompt: "No right answer".into(),
            choices: vec![Choice {
                id: "o1".into(),
                label: "only".into(),
                correct: false,
            }],
        };
        assert_eq!(unscorable.correct_choice_id(), None);
    }

    #[test]
    fn quiz_view_strips_correctness() {
        let quiz = sample_quiz();
        let view = QuizView::from(&quiz);
        let json = serde_json::to_string(&view).unwrap();
        assert!(!json.contains("correct"), "view leaked answers: {json}");
        assert_eq!(view.questions[0].choices.len(), 2);
    }

    #[test]
    fn submission_serde_is_a_plain_map() {
        let submission: Submission = serde_json::from_str(r#"{"q1": "o2"}"#).unwrap();
        assert_eq!(submission.selected("q1"), Some("o2"));
        assert_eq!(submission.selected("q2"), None);

        let json = serde_json::to_string(&submission).unwrap();
        assert_eq!(json, r#"{"q1":"o2"}"#);
    }

    #[test]
    fn quiz_serde_roundtrip() {
        let quiz = sample_quiz();
        let json = serde_json::to_string(&quiz).unwrap();
        let back: Quiz = serde_json::from_str(&json).unwrap();
        assert_eq!(back.id, "c1");
        assert_eq!(back.questions[0].choices[1].id, "o2");
        assert!(back.questions[0].choices[1].correct);
    }
}
