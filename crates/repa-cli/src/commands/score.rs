//! Score a single topic.

use anyhow::Result;
use colored::Colorize;
use repa::prelude::*;

use super::{load_scorer, require_topic, Inputs};

pub fn run(inputs: &Inputs, topic: &str, references: &[String]) -> Result<()> {
    let (mut scorer, _) = load_scorer(inputs)?;
    require_topic(&scorer, topic)?;

    for reference in references {
        if !scorer.contains(reference) {
            println!(
                "  {} reference {} is not in the hierarchy, ignored",
                "•".yellow(),
                reference
            );
        }
    }

    let record = scorer.impact_factor(topic, references)?;
    print_record(&record);
    Ok(())
}

pub fn print_record(record: &ImpactRecord) {
    let marker = if record.is_specific_topic {
        " [specific]".green().to_string()
    } else {
        String::new()
    };
    println!(
        "{} {}{}",
        "→".blue(),
        record.topic_label.white().bold(),
        marker
    );
    println!();
    println!(
        "  Impact factor:     {}",
        format!("{:.4}", record.impact_factor).cyan().bold()
    );
    println!(
        "  Depth:             {} (score {:.4})",
        record.depth, record.depth_score
    );
    println!("  Influence score:   {:.4}", record.influence_score);
    println!("  Semantic score:    {:.4}", record.semantic_score);
    println!("  Centrality:        {:.4}", record.centrality);
    println!("  Frequency:         {}", record.frequency);
    println!("  Equivalents:       {}", record.equivalents_count);
    println!("  Contributions:     {}", record.contributions_count);
}
