//! paperforge CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

mod commands;
mod config;
mod document;
mod manifest;

#[derive(Parser)]
#[command(name = "paperforge", version, about = "Exam paper and answer-key generator")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render student papers and grading keys
    Render {
        /// Path to a .toml/.json quiz paper or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Output directory (default: config output_dir)
        #[arg(long)]
        out: Option<PathBuf>,

        /// Override the number given to the first question
        #[arg(long)]
        start: Option<usize>,

        /// Output format: html, json, all, or a comma-separated list
        /// (e.g. html,json)
        #[arg(long, default_value = "html")]
        format: String,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check quiz papers for authoring mistakes
    Validate {
        /// Path to a quiz paper file or directory
        #[arg(long)]
        quiz: PathBuf,
    },

    /// List the blocks of quiz papers with their question numbers
    List {
        /// Path to a quiz paper file or directory
        #[arg(long)]
        quiz: PathBuf,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a starter config and example quiz paper
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("paperforge=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Render {
            quiz,
            out,
            start,
            format,
            config,
        } => commands::render::execute(quiz, out, start, format, config),
        Commands::Validate { quiz } => commands::validate::execute(quiz),
        Commands::List { quiz, config } => commands::list::execute(quiz, config),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
