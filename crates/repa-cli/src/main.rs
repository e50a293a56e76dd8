//! Repa CLI - score topics of an ontology snapshot.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::commands::Inputs;

#[derive(Parser)]
#[command(name = "repa")]
#[command(author, version, about = "Repa - semantic impact scoring for ontology topics", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Triple snapshot (.tsv, .jsonl or .json)
    #[arg(short, long, global = true)]
    triples: Option<String>,

    /// Specific-topic list, one topic per line
    #[arg(short, long, global = true)]
    specific: Option<String>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default repa.toml
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Show hierarchy statistics
    Stats,

    /// Score a single topic
    Score {
        /// Topic id
        topic: String,

        /// Reference topics (default: specific topics, else most central)
        #[arg(short, long = "reference")]
        references: Vec<String>,
    },

    /// Rank topics by impact
    Rank {
        /// Number of topics to keep
        #[arg(long)]
        top: Option<usize>,

        /// Rank only the specific topics
        #[arg(long)]
        specific_only: bool,

        /// Explicit candidate topics
        #[arg(long, num_args = 1..)]
        topics: Vec<String>,

        /// Write the ranking to a file
        #[arg(short, long)]
        output: Option<String>,

        /// Output format for --output
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },

    /// Impact of a topic group
    Group {
        /// Topics of the group
        #[arg(required = true)]
        topics: Vec<String>,
    },

    /// Composite impact of a topic set with overlap, coherence and coverage
    Multi {
        /// Topics of the set
        #[arg(required = true)]
        topics: Vec<String>,
    },

    /// Lin similarity and lowest common ancestor of two topics
    Similarity {
        /// First topic
        a: String,
        /// Second topic
        b: String,
    },

    /// Show most central topics
    Centrality {
        /// Number of top topics
        #[arg(long, default_value = "10")]
        top: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Csv,
    Json,
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let inputs = Inputs {
        triples: cli.triples,
        specific: cli.specific,
    };

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Stats => commands::stats::run(&inputs),
        Commands::Score { topic, references } => {
            commands::score::run(&inputs, &topic, &references)
        }
        Commands::Rank {
            top,
            specific_only,
            topics,
            output,
            format,
        } => commands::rank::run(
            &inputs,
            commands::rank::RankOptions {
                top,
                specific_only,
                topics,
                output,
                format,
            },
        ),
        Commands::Group { topics } => commands::group::group(&inputs, &topics),
        Commands::Multi { topics } => commands::group::multi(&inputs, &topics),
        Commands::Similarity { a, b } => commands::similarity::run(&inputs, &a, &b),
        Commands::Centrality { top } => commands::centrality::run(&inputs, top),
    }
}
