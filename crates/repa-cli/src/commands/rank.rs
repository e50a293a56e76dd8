//! Rank topics by impact.

use anyhow::{bail, Context, Result};
use colored::Colorize;
use repa::prelude::*;
use std::path::Path;

use super::{load_scorer, Inputs};
use crate::Format;

pub struct RankOptions {
    pub top: Option<usize>,
    pub specific_only: bool,
    pub topics: Vec<String>,
    pub output: Option<String>,
    pub format: Option<Format>,
}

pub fn run(inputs: &Inputs, options: RankOptions) -> Result<()> {
    let (mut scorer, config) = load_scorer(inputs)?;
    let top = options.top.unwrap_or(config.output.top);

    if options.specific_only && options.topics.is_empty() && scorer.specific_topics().is_empty() {
        bail!(
            "No specific topics loaded. Pass {} or drop {}.",
            "--specific".cyan(),
            "--specific-only".cyan()
        );
    }

    let candidates = if options.topics.is_empty() {
        None
    } else {
        Some(options.topics.as_slice())
    };

    println!("{} Ranking topics by impact...", "→".blue());
    let ranking = scorer.rank_topics_by_impact(candidates, top, options.specific_only);
    println!();

    for (i, record) in ranking.entries.iter().enumerate() {
        let rank = format!("{}.", i + 1);
        let marker = if record.is_specific_topic { "*" } else { " " };
        println!(
            "  {} {}{} {}",
            rank.blue(),
            record.topic_label.white().bold(),
            marker.green(),
            format!(
                "(impact: {:.4}, depth: {}, influence: {:.3}, semantic: {:.3})",
                record.impact_factor, record.depth, record.influence_score, record.semantic_score
            )
            .dimmed()
        );
    }

    if !ranking.skipped.is_empty() {
        println!();
        println!(
            "  {} Skipped {} topics not in the hierarchy: {}",
            "•".yellow(),
            ranking.skipped.len(),
            ranking.skipped.join(", ")
        );
    }

    if let Some(output) = options.output {
        let path = Path::new(&output);
        let format = match options.format {
            Some(Format::Csv) => ExportFormat::Csv,
            Some(Format::Json) => ExportFormat::Json,
            None if config.output.format.eq_ignore_ascii_case("json") => ExportFormat::Json,
            None => ExportFormat::from_path(path),
        };
        write_records(&ranking.entries, path, format)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!();
        println!(
            "{} Wrote {} records to {}",
            "✓".green().bold(),
            ranking.entries.len(),
            path.display()
        );
    }

    Ok(())
}
