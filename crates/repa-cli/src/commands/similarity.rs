//! Lin similarity between two topics.

use anyhow::Result;
use colored::Colorize;

use super::{load_scorer, require_topic, Inputs};

pub fn run(inputs: &Inputs, a: &str, b: &str) -> Result<()> {
    let (mut scorer, _) = load_scorer(inputs)?;
    require_topic(&scorer, a)?;
    require_topic(&scorer, b)?;

    let mut similarity = scorer.similarity();
    let score = similarity.lin_similarity(a, b);
    let ic_a = similarity.information_content(a);
    let ic_b = similarity.information_content(b);
    let lca = similarity.lowest_common_ancestor(a, b);

    println!(
        "{} {} ~ {}",
        "→".blue(),
        a.white().bold(),
        b.white().bold()
    );
    println!();
    println!(
        "  Lin similarity:    {}",
        format!("{:.4}", score).cyan().bold()
    );
    match lca {
        Some(lca) => println!("  Common ancestor:   {}", lca.green()),
        None => println!("  Common ancestor:   {}", "none".dimmed()),
    }
    println!("  IC({}):  {:.4}", a, ic_a);
    println!("  IC({}):  {:.4}", b, ic_b);

    Ok(())
}
