//! Case list command handler

use anyhow::Result;
use colored::*;

use crate::cli::{ListArgs, table};
use crate::ingest;
use crate::schedule::sanitize::SAFE_DISPLAY_COLUMNS;
use crate::services::classify::{ClassifyOptions, NullScorer};
use crate::services::summary::build_daily_summary;
use crate::track::CompletionStore;

/// Handle the list command: sanitized case list in schedule order
pub fn handle_list(args: ListArgs) -> Result<()> {
    let batch = ingest::load_batch(&args.file)?;
    if batch.is_empty() {
        anyhow::bail!("No data rows in {}", args.file.display());
    }

    // Only the known identity-free columns are shown
    let display_columns: Vec<(usize, &str)> = SAFE_DISPLAY_COLUMNS
        .iter()
        .filter_map(|(name, label)| batch.column_index(name).map(|idx| (idx, *label)))
        .collect();
    if display_columns.is_empty() {
        println!(
            "No displayable columns (expected one of: {}) in {}",
            SAFE_DISPLAY_COLUMNS
                .iter()
                .map(|(name, _)| *name)
                .collect::<Vec<_>>()
                .join(", "),
            args.file.display()
        );
        return Ok(());
    }

    let summary = build_daily_summary(&batch, &ClassifyOptions::default(), &NullScorer);
    let store = CompletionStore::load()?;
    let completed = store.completed(&CompletionStore::file_key(&args.file));

    // Schedule order: parsed time ascending, unparseable times last
    let mut order: Vec<usize> = (0..batch.len()).collect();
    order.sort_by_key(|row| (summary.work[*row].minutes.unwrap_or(u16::MAX), *row));

    let mut headers = vec!["#".to_string(), "Time".to_string()];
    headers.extend(display_columns.iter().map(|(_, label)| label.to_string()));
    headers.push("Status".to_string());

    let rows: Vec<Vec<String>> = order
        .iter()
        .map(|row| {
            let case = &summary.work[*row];
            let mut cells = vec![row.to_string(), minutes_label(case.minutes)];
            cells.extend(
                display_columns
                    .iter()
                    .map(|(idx, _)| batch.value(*row, *idx).to_text()),
            );
            // Plain text: ANSI colors would throw off the column widths
            let status = if completed.contains(row) { "done" } else { "pending" };
            cells.push(status.to_string());
            cells
        })
        .collect();
    println!("{}", table::render(&headers, &rows));

    let remaining = batch.len() - completed.iter().filter(|r| **r < batch.len()).count();
    println!();
    println!("{}", format!("Cases remaining: {}", remaining).bold());

    Ok(())
}

fn minutes_label(minutes: Option<u16>) -> String {
    match minutes {
        Some(m) => format!("{:02}:{:02}", m / 60, m % 60),
        None => "-".to_string(),
    }
}
