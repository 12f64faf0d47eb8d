//! Daily summary command handler

use anyhow::Result;
use colored::*;

use crate::cli::{SummaryArgs, table};
use crate::config::Config;
use crate::ingest;
use crate::report;
use crate::schedule::{Category, Shift};
use crate::services::classify::{ClassifyOptions, TokenSetScorer};
use crate::services::summary::{HEADLINE_CATEGORIES, build_daily_summary};

/// Handle the summary command
pub fn handle_summary(args: SummaryArgs) -> Result<()> {
    let config = Config::load()?;
    let batch = ingest::load_batch(&args.file)?;
    if batch.is_empty() {
        anyhow::bail!("No data rows in {}", args.file.display());
    }

    let options = ClassifyOptions {
        use_fuzzy: args.fuzzy || config.classify.use_fuzzy,
        fuzzy_threshold: args.threshold.unwrap_or(config.classify.fuzzy_threshold),
    }
    .clamped();
    let summary = build_daily_summary(&batch, &options, &TokenSetScorer);

    // Headline: total plus the busiest categories
    let mut headline = vec![format!("Total {}", summary.meta.cases_total)];
    for (category, count) in summary.meta.top_categories(HEADLINE_CATEGORIES) {
        headline.push(format!("{} {}", category, count));
    }
    println!("{}", headline.join("  |  ").bold());
    println!();

    // Pivot: show only categories that occur; the full zero-filled grid
    // still goes into the exported workbook
    let mut categories = summary.pivot.active_categories();
    if categories.is_empty() {
        categories.push(Category::Other);
    }

    let mut headers = vec!["Shift".to_string()];
    headers.extend(categories.iter().map(|c| c.label().to_string()));
    headers.push("Total".to_string());

    let rows: Vec<Vec<String>> = Shift::ALL
        .iter()
        .map(|shift| {
            let mut row = vec![shift.label().to_string()];
            row.extend(
                categories
                    .iter()
                    .map(|c| summary.pivot.count(*shift, *c).to_string()),
            );
            row.push(summary.pivot.shift_total(*shift).to_string());
            row
        })
        .collect();
    println!("{}", table::render(&headers, &rows));

    println!();
    println!(
        "{}",
        format!(
            "proc col: {} | time col: {} | cases: {}",
            summary.meta.proc_column.as_deref().unwrap_or("-"),
            summary.meta.time_column.as_deref().unwrap_or("-"),
            summary.meta.cases_total
        )
        .dimmed()
    );

    if let Some(export) = args.export {
        report::export_summary_workbook(&summary, &batch, config.review.limit, &export)?;
        println!("Report exported to: {}", export.display().to_string().cyan());
    }

    Ok(())
}
