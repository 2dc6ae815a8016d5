//! aeon CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "aeon", version, about = "ÆON adaptive interview engine")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run an interactive interview, reading answers from stdin
    Run {
        /// Candidate name
        #[arg(long)]
        name: Option<String>,

        /// Candidate email
        #[arg(long)]
        email: Option<String>,

        /// Seed for deterministic prompt selection
        #[arg(long)]
        seed: Option<u64>,

        /// Directory to export the final report into
        #[arg(long)]
        output: Option<PathBuf>,

        /// Export format: json, markdown, all
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Analyze a single answer for one category and print the record as JSON
    Analyze {
        /// Category: personality, thinking, potential, behavior, integration
        #[arg(long)]
        category: String,

        /// The answer text to analyze
        #[arg(long)]
        text: String,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("aeon_core=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Run {
            name,
            email,
            seed,
            output,
            format,
        } => commands::run::execute(name, email, seed, output, format),
        Commands::Analyze { category, text } => commands::analyze::execute(category, text),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
