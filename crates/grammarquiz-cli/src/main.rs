//! grammarquiz CLI — play multiple-choice grammar quizzes in the terminal.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod commands;
mod config;
mod screen;

#[derive(Parser)]
#[command(name = "grammarquiz", version, about = "Multiple-choice grammar quiz game")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a quiz
    Play {
        /// Topic to play (see `grammarquiz topics`); defaults to the config's default_topic
        #[arg(long)]
        topic: Option<String>,

        /// Seed for a repeatable question and option order
        #[arg(long)]
        seed: Option<u64>,

        /// Skip the feedback pause between questions
        #[arg(long)]
        fast: bool,

        /// Print events as JSON lines instead of drawing the game
        #[arg(long)]
        json: bool,

        /// Disable the terminal bell
        #[arg(long)]
        no_sound: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List built-in topics
    Topics,

    /// Create a starter config file
    Init,
}

#[tokio::main]
async fn main() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("grammarquiz=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            topic,
            seed,
            fast,
            json,
            no_sound,
            config,
        } => commands::play::execute(topic, seed, fast, json, no_sound, config).await,
        Commands::Topics => commands::topics::execute(),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
