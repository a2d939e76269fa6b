//! aulakit CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aulakit", version, about = "E-learning quiz grading and progress demo")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Grade a submission against a quiz file
    Grade {
        /// Path to a .toml quiz file or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Quiz id to grade against (required when the path holds several)
        #[arg(long)]
        quiz_id: Option<String>,

        /// Answers as inline JSON ({"q1": "o2"}) or @file.json
        #[arg(long)]
        answers: String,

        /// Output format: table, json
        #[arg(long, default_value = "table")]
        format: String,
    },

    /// Show a learner's progress, bootstrapping it on first access
    Progress {
        /// Learner identifier
        #[arg(long)]
        learner: String,

        /// Use the built-in demo catalog instead of the catalog service
        #[arg(long)]
        offline: bool,

        /// Fixed RNG seed for reproducible allocation
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Replace a learner's progress with a fresh random assignment
    Assign {
        /// Learner identifier
        #[arg(long)]
        learner: String,

        /// Use the built-in demo catalog instead of the catalog service
        #[arg(long)]
        offline: bool,

        /// Fixed RNG seed for reproducible allocation
        #[arg(long)]
        seed: Option<u64>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the course catalog
    Courses {
        /// Use the built-in demo catalog instead of the catalog service
        #[arg(long)]
        offline: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Validate quiz TOML files
    Validate {
        /// Path to a quiz file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// Create starter config and an example quiz
    Init,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aulakit=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Grade {
            quiz,
            quiz_id,
            answers,
            format,
        } => commands::grade::execute(quiz, quiz_id, answers, format).await,
        Commands::Progress {
            learner,
            offline,
            seed,
            config,
        } => commands::progress::execute(learner, offline, seed, config).await,
        Commands::Assign {
            learner,
            offline,
            seed,
            config,
        } => commands::assign::execute(learner, offline, seed, config).await,
        Commands::Courses { offline, config } => {
            commands::courses::execute(offline, config).await
        }
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
