//! CLI integration tests using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn aulakit() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("aulakit").unwrap()
}

const SAMPLE_QUIZ: &str = r#"[quiz]
id = "c1"
title = "Initial Python Assessment"

[[questions]]
id = "q1"
prompt = "What does print(1+1) output?"

[[questions.choices]]
id = "o1"
label = "1"

[[questions.choices]]
id = "o2"
label = "2"
correct = true
"#;

fn write_quiz(dir: &TempDir) -> std::path::PathBuf {
    let path = dir.path().join("c1.toml");
    std::fs::write(&path, SAMPLE_QUIZ).unwrap();
    path
}

#[test]
fn init_creates_files() {
    let dir = TempDir::new().unwrap();

    aulakit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created aulakit.toml"))
        .stdout(predicate::str::contains("Created quizzes/example.toml"));

    assert!(dir.path().join("aulakit.toml").exists());
    assert!(dir.path().join("quizzes/example.toml").exists());
}

#[test]
fn init_skips_existing() {
    let dir = TempDir::new().unwrap();

    aulakit().current_dir(dir.path()).arg("init").assert().success();

    aulakit()
        .current_dir(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn validate_valid_quiz() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(&dir);

    aulakit()
        .arg("validate")
        .arg("--quiz")
        .arg(&quiz)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 questions"))
        .stdout(predicate::str::contains("All quizzes valid"));
}

#[test]
fn validate_flags_unscorable_question() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    std::fs::write(
        &path,
        r#"[quiz]
id = "broken"
title = "Broken"

[[questions]]
id = "q1"
prompt = "Pick"

[[questions.choices]]
id = "o1"
label = "a"
"#,
    )
    .unwrap();

    aulakit()
        .arg("validate")
        .arg("--quiz")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("unscorable"))
        .stdout(predicate::str::contains("warning(s) found"));
}

#[test]
fn validate_nonexistent_file() {
    aulakit()
        .arg("validate")
        .arg("--quiz")
        .arg("nonexistent.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn grade_correct_submission() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(&dir);

    aulakit()
        .arg("grade")
        .arg("--quiz")
        .arg(&quiz)
        .arg("--answers")
        .arg(r#"{"q1": "o2"}"#)
        .assert()
        .success()
        .stdout(predicate::str::contains("100.0%"));
}

#[test]
fn grade_empty_submission_scores_zero() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(&dir);

    aulakit()
        .arg("grade")
        .arg("--quiz")
        .arg(&quiz)
        .arg("--answers")
        .arg("{}")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.0%"));
}

#[test]
fn grade_json_output_exposes_counts() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(&dir);

    aulakit()
        .arg("grade")
        .arg("--quiz")
        .arg(&quiz)
        .arg("--answers")
        .arg(r#"{"q1": "o2"}"#)
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"correct\": 1"))
        .stdout(predicate::str::contains("\"total\": 1"));
}

#[test]
fn grade_unknown_quiz_id_is_not_found() {
    let dir = TempDir::new().unwrap();
    let quiz = write_quiz(&dir);

    aulakit()
        .arg("grade")
        .arg("--quiz")
        .arg(&quiz)
        .arg("--quiz-id")
        .arg("ghost")
        .arg("--answers")
        .arg("{}")
        .assert()
        .failure()
        .stderr(predicate::str::contains("quiz not found"));
}

#[test]
fn progress_offline_bootstrap_is_idempotent() {
    let dir = TempDir::new().unwrap();

    let run = || {
        aulakit()
            .current_dir(dir.path())
            .arg("progress")
            .arg("--learner")
            .arg("stu1")
            .arg("--offline")
            .arg("--seed")
            .arg("42")
            .output()
            .unwrap()
    };

    let first = run();
    assert!(first.status.success());
    let first_out = String::from_utf8(first.stdout).unwrap();
    assert!(first_out.contains("Progress for stu1"), "{first_out}");
    assert!(first_out.contains("ing-sys-"), "{first_out}");

    // Second invocation reads the persisted record back unchanged.
    let second = run();
    assert!(second.status.success());
    let second_out = String::from_utf8(second.stdout).unwrap();
    assert_eq!(first_out, second_out);

    assert!(dir.path().join("aulakit-state/progress.json").exists());
}

#[test]
fn assign_replaces_progress() {
    let dir = TempDir::new().unwrap();

    aulakit()
        .current_dir(dir.path())
        .arg("assign")
        .arg("--learner")
        .arg("stu2")
        .arg("--offline")
        .arg("--seed")
        .arg("7")
        .assert()
        .success()
        .stdout(predicate::str::contains("courses assigned to stu2"));

    assert!(dir.path().join("aulakit-state/progress.json").exists());
}

#[test]
fn courses_offline_lists_demo_catalog() {
    let dir = TempDir::new().unwrap();

    aulakit()
        .current_dir(dir.path())
        .arg("courses")
        .arg("--offline")
        .assert()
        .success()
        .stdout(predicate::str::contains("Programming Fundamentals"))
        .stdout(predicate::str::contains("10 courses."));
}

#[test]
fn help_output() {
    aulakit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "E-learning quiz grading and progress demo",
        ));
}

#[test]
fn version_output() {
    aulakit()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("aulakit"));
}
