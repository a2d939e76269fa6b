//! Quiz auto-grading.

use crate::model::{GradeResult, Quiz, Submission};

/// Grade a submission against a quiz.
///
/// Every question in the quiz counts toward the total; an unanswered question
/// counts as wrong, never as skipped. Answers referencing unknown question
/// ids are ignored. Scoring is independent of question and answer order.
pub fn grade(quiz: &Quiz, submission: &Submission) -> GradeResult {
    let total = quiz.questions.len() as u32;
    let mut correct = 0u32;

    for question in &quiz.questions {
        let Some(correct_id) = question.correct_choice_id() else {
            // Unscorable question: no choice is flagged correct.
            continue;
        };
        if submission.selected(&question.id) == Some(correct_id) {
            correct += 1;
        }
    }

    let percentage = if total > 0 {
        f64::from(correct) / f64::from(total) * 100.0
    } else {
        0.0
    };

    GradeResult {
        correct,
        total,
        percentage,
    }
}
