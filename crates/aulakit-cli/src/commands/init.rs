//! The `aulakit init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create aulakit.toml
    if std::path::Path::new("aulakit.toml").exists() {
        println!("aulakit.toml already exists, skipping.");
    } else {
        std::fs::write("aulakit.toml", SAMPLE_CONFIG)?;
        println!("Created aulakit.toml");
    }

    // Create example quiz
    std::fs::create_dir_all("quizzes")?;
    let example_path = std::path::Path::new("quizzes/example.toml");
    if example_path.exists() {
        println!("quizzes/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_QUIZ)?;
        println!("Created quizzes/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit aulakit.toml to point at your catalog service");
    println!("  2. Run: aulakit validate --quiz quizzes/example.toml");
    println!("  3. Run: aulakit grade --quiz quizzes/example.toml --answers '{{\"q1\": \"o2\"}}'");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# aulakit configuration

state_dir = "./aulakit-state"

[catalog]
base_url = "http://localhost:8002"
timeout_secs = 3

[allocator]
# Profile for first-access bootstrap: "bootstrap" or "reassign".
profile = "bootstrap"
# Uncomment for reproducible allocation:
# seed = 42
"#;

const EXAMPLE_QUIZ: &str = r#"[quiz]
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

[[questions.choices]]
id = "o3"
label = "11"
"#;
