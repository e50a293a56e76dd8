//! Show the most central topics.

use anyhow::Result;
use colored::Colorize;

use super::{load_scorer, Inputs};

pub fn run(inputs: &Inputs, top: usize) -> Result<()> {
    let (scorer, _) = load_scorer(inputs)?;

    println!(
        "{} Top {} central topics:",
        "→".blue(),
        top.to_string().cyan()
    );
    println!();

    for (i, topic) in scorer.top_by_centrality(top).into_iter().enumerate() {
        let Some(c) = scorer.centrality_breakdown(topic) else {
            continue;
        };
        let rank = format!("{}.", i + 1);
        println!(
            "  {} {} {}",
            rank.blue(),
            topic.white().bold(),
            format!(
                "({:.4}; degree {:.3}, closeness {:.3}, betweenness {:.3})",
                c.combined, c.degree, c.closeness, c.betweenness
            )
            .dimmed()
        );
    }

    Ok(())
}
