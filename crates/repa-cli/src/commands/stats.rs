//! Show hierarchy statistics.

use anyhow::Result;
use colored::Colorize;

use super::{load_scorer, Inputs};

pub fn run(inputs: &Inputs) -> Result<()> {
    let (mut scorer, _) = load_scorer(inputs)?;
    let summary = scorer.summary();

    println!("{}", "Repa Hierarchy Statistics".white().bold());
    println!("{}", "═".repeat(40).dimmed());
    println!();

    println!("{}", "Graph Structure".blue().bold());
    println!("  Topics:            {}", summary.node_count.to_string().cyan());
    println!("  Edges:             {}", summary.edge_count.to_string().cyan());
    println!("  Roots:             {}", summary.roots.to_string().cyan());
    println!("  Max depth:         {}", summary.max_depth.to_string().cyan());
    println!();

    let build = scorer.graph().build_summary();
    println!("{}", "Input".blue().bold());
    println!("  Triples read:      {}", build.triples_seen.to_string().cyan());
    println!(
        "  Dropped (empty):   {}",
        build.triples_dropped.to_string().yellow()
    );
    println!(
        "  Equivalence rows:  {}",
        build.equivalence_triples.to_string().cyan()
    );
    println!(
        "  Contribution rows: {}",
        build.contribution_triples.to_string().cyan()
    );
    println!();

    println!("{}", "Side Relations".blue().bold());
    println!(
        "  Equivalent pairs:  {}",
        summary.equivalence_pairs.to_string().cyan()
    );
    println!(
        "  Contributions:     {}",
        summary.contribution_links.to_string().cyan()
    );
    println!();

    println!("{}", "Specific Topics".blue().bold());
    println!(
        "  Listed:            {}",
        summary.specific_topics.to_string().cyan()
    );
    println!(
        "  In hierarchy:      {} ({:.1}%)",
        summary.specific_in_graph.to_string().green(),
        if summary.specific_topics > 0 {
            summary.specific_in_graph as f64 / summary.specific_topics as f64 * 100.0
        } else {
            0.0
        }
    );
    println!();

    if summary.node_count > 1 {
        let max_edges = summary.node_count * (summary.node_count - 1);
        let density = summary.edge_count as f64 / max_edges as f64;
        println!("{}", "Density".blue().bold());
        println!("  Graph density:     {:.6}", density);
        println!();
    }

    println!("{}", "═".repeat(40).dimmed());

    Ok(())
}
