//! CLI command implementations.

pub mod centrality;
pub mod group;
pub mod init;
pub mod rank;
pub mod score;
pub mod similarity;
pub mod stats;

use anyhow::{bail, Context, Result};
use colored::Colorize;
use repa::prelude::*;
use std::collections::BTreeSet;
use std::path::Path;

use crate::config::Config;

/// Input paths given on the command line.
pub struct Inputs {
    pub triples: Option<String>,
    pub specific: Option<String>,
}

/// Load config, triples and specific topics, then build the scorer.
pub fn load_scorer(inputs: &Inputs) -> Result<(ImpactScorer, Config)> {
    let config = Config::load()?;

    let Some(triples_path) = inputs.triples.clone().or_else(|| config.input.triples.clone())
    else {
        bail!(
            "No triple file given. Pass {} or set {} in repa.toml.",
            "--triples".cyan(),
            "input.triples".cyan()
        );
    };

    println!("{} Loading {}...", "→".blue(), triples_path);
    let triples = read_triples(Path::new(&triples_path))
        .with_context(|| format!("Failed to load triples from {triples_path}"))?;

    let specific = match inputs.specific.clone().or_else(|| config.input.specific.clone()) {
        Some(path) => read_specific_topics(Path::new(&path))
            .with_context(|| format!("Failed to load specific topics from {path}"))?,
        None => BTreeSet::new(),
    };

    let scorer = ImpactScorer::new(&triples, specific, config.engine.clone())
        .context("Invalid engine configuration")?;
    if scorer.graph().is_empty() {
        println!("  {} {} holds no usable triples", "•".yellow(), triples_path);
    }
    println!(
        "  {} {} topics, {} edges",
        "✓".green(),
        scorer.graph().node_count().to_string().cyan(),
        scorer.graph().edge_count().to_string().cyan()
    );
    println!();

    Ok((scorer, config))
}

/// Fail with a readable message when a topic is not in the hierarchy.
pub fn require_topic(scorer: &ImpactScorer, topic: &str) -> Result<()> {
    if !scorer.contains(topic) {
        bail!("Topic {} is not in the hierarchy.", topic.yellow());
    }
    Ok(())
}
