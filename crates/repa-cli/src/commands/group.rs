//! Group and multi-topic impact.

use anyhow::Result;
use colored::Colorize;
use repa::prelude::*;

use super::{load_scorer, Inputs};

pub fn group(inputs: &Inputs, topics: &[String]) -> Result<()> {
    let (mut scorer, _) = load_scorer(inputs)?;
    warn_unknown(&scorer, topics);

    let mut group = GroupImpactScorer::new(&mut scorer);
    match group.group_impact(topics)? {
        GroupImpact::Single(record) => {
            println!("{} Only one topic is in the hierarchy.", "•".yellow());
            println!();
            super::score::print_record(&record);
        }
        GroupImpact::Group(record) => {
            println!(
                "{} Group of {} topics",
                "→".blue(),
                record.group_topics.len().to_string().cyan()
            );
            for topic in &record.group_topics {
                println!("    {}", topic_label(topic).white());
            }
            println!();
            println!(
                "  Impact factor:     {}",
                format!("{:.4}", record.impact_factor).cyan().bold()
            );
            println!("  Depth score:       {:.4}", record.depth_score);
            println!("  Influence score:   {:.4}", record.influence_score);
            println!("  Cohesion:          {:.4}", record.semantic_cohesion);
        }
    }
    Ok(())
}

pub fn multi(inputs: &Inputs, topics: &[String]) -> Result<()> {
    let (mut scorer, _) = load_scorer(inputs)?;
    warn_unknown(&scorer, topics);

    let mut group = GroupImpactScorer::new(&mut scorer);
    let result = group.multi_topic_impact(topics, None);

    println!(
        "{} Topic set of {}",
        "→".blue(),
        result.topics.len().to_string().cyan()
    );
    println!();
    println!(
        "  Final impact:      {}",
        format!("{:.4}", result.final_impact).cyan().bold()
    );
    println!("  Base impact:       {:.4}", result.base_impact);
    println!("  Coherence:         {:.4}", result.coherence);
    println!("  Coverage:          {:.4}", result.coverage);
    println!("  Overlap:           {:.4}", result.overlap);
    Ok(())
}

fn warn_unknown(scorer: &ImpactScorer, topics: &[String]) {
    for topic in topics.iter().filter(|t| !scorer.contains(t)) {
        println!(
            "  {} {} is not in the hierarchy",
            "•".yellow(),
            topic
        );
    }
}
