//! Other-review command handler

use anyhow::Result;
use colored::*;

use crate::cli::{ReviewArgs, table};
use crate::config::Config;
use crate::ingest;
use crate::services::classify::{ClassifyOptions, NullScorer};
use crate::services::summary::{build_daily_summary, top_unknowns};

/// Handle the review command: list normalized texts the rule table missed
pub fn handle_review(args: ReviewArgs) -> Result<()> {
    let config = Config::load()?;
    let batch = ingest::load_batch(&args.file)?;

    // Rule-only on purpose: the queue exists to grow the alias table
    let summary = build_daily_summary(&batch, &ClassifyOptions::default(), &NullScorer);
    if summary.meta.proc_column.is_none() {
        println!("No procedure column found in {}", args.file.display());
        return Ok(());
    }

    let limit = args.limit.unwrap_or(config.review.limit);
    let unknowns = top_unknowns(&summary, limit);
    if unknowns.is_empty() {
        println!("{}", "No unclassified procedures".green());
        return Ok(());
    }

    println!(
        "{}",
        "Procedure texts classified as Other (extend the alias table with these):".bold()
    );
    let headers = vec!["Normalized text".to_string(), "Count".to_string()];
    let rows: Vec<Vec<String>> = unknowns
        .into_iter()
        .map(|(text, count)| {
            let shown = if text.is_empty() { "(blank)".to_string() } else { text };
            vec![shown, count.to_string()]
        })
        .collect();
    println!("{}", table::render(&headers, &rows));

    Ok(())
}
