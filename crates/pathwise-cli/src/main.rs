//! pathwise CLI: score career aptitude questionnaires from the command line.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(
    name = "pathwise",
    version,
    about = "Career aptitude assessment scoring and recommendations"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Score an answer file and recommend career paths
    Score {
        /// JSON answer file (`{"1": 5, "2": 3, ...}`)
        #[arg(long)]
        answers: PathBuf,

        /// Question bank TOML (default: the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Recommendation rule table TOML (default: the built-in rules)
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output format: text, json, markdown
        #[arg(long)]
        format: Option<String>,

        /// Write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// Also save the JSON report under the configured output directory
        #[arg(long)]
        save: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Recommend career paths for given interest and aptitude codes
    Recommend {
        /// Top interest codes (e.g. "INVESTIGATIVE,REALISTIC")
        #[arg(long)]
        interests: String,

        /// Top aptitude codes (e.g. "LOGICAL,NUMERICAL")
        #[arg(long)]
        aptitudes: Option<String>,

        /// Recommendation rule table TOML
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Validate a question bank TOML file
    Validate {
        /// Path to the question bank
        #[arg(long)]
        bank: PathBuf,
    },

    /// List the questions in a bank
    Questions {
        /// Question bank TOML (default: the built-in bank)
        #[arg(long)]
        bank: Option<PathBuf>,

        /// Only show one category (e.g. "APTITUDE")
        #[arg(long)]
        category: Option<String>,
    },

    /// Create starter config, question bank and answer file
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("pathwise=info")),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Score {
            answers,
            bank,
            rules,
            format,
            output,
            save,
            config,
        } => commands::score::execute(answers, bank, rules, format, output, save, config),
        Commands::Recommend {
            interests,
            aptitudes,
            rules,
        } => commands::recommend::execute(interests, aptitudes, rules),
        Commands::Validate { bank } => commands::validate::execute(bank),
        Commands::Questions { bank, category } => commands::questions::execute(bank, category),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
