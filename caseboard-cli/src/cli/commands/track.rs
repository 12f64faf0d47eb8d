//! Done/not-done tracker command handlers

use anyhow::Result;
use colored::*;

use crate::cli::{TrackArgs, TrackCommands, table};
use crate::ingest;
use crate::schedule::{PROC_TEXT_CANDIDATES, pick_column};
use crate::services::classify::{ClassifyOptions, NullScorer, classify_value};
use crate::services::summary::{build_daily_summary, ongoing_counts};
use crate::track::CompletionStore;

/// Handle the track subcommands
pub fn handle_track(args: TrackArgs) -> Result<()> {
    match args.command {
        TrackCommands::Done { file, row } => {
            let batch = ingest::load_batch(&file)?;
            if row >= batch.len() {
                anyhow::bail!(
                    "Row {} is out of range: {} has {} rows",
                    row,
                    file.display(),
                    batch.len()
                );
            }
            let category = pick_column(batch.headers(), &PROC_TEXT_CANDIDATES)
                .map(|col| {
                    classify_value(batch.value(row, col), &ClassifyOptions::default(), &NullScorer)
                        .to_string()
                })
                .unwrap_or_else(|| "-".to_string());
            let key = CompletionStore::file_key(&file);
            let mut store = CompletionStore::load()?;
            if store.mark_done(&key, row) {
                store.save()?;
                println!("Marked row {} ({}) of {} as done", row, category, file.display());
            } else {
                println!("Row {} ({}) of {} was already done", row, category, file.display());
            }
            Ok(())
        }
        TrackCommands::Reset { file } => {
            let key = CompletionStore::file_key(&file);
            let mut store = CompletionStore::load()?;
            let cleared = store.reset(&key);
            store.save()?;
            println!("Cleared {} completed rows for {}", cleared, file.display());
            Ok(())
        }
        TrackCommands::Ongoing { file } => {
            let batch = ingest::load_batch(&file)?;
            let summary = build_daily_summary(&batch, &ClassifyOptions::default(), &NullScorer);
            let store = CompletionStore::load()?;
            let completed = store.completed(&CompletionStore::file_key(&file));

            let remaining = ongoing_counts(&summary.work, &completed);
            if remaining.is_empty() {
                println!("{}", "No categorized cases left to do".green());
            } else {
                let headers = vec!["Category".to_string(), "Remaining".to_string()];
                let rows: Vec<Vec<String>> = remaining
                    .into_iter()
                    .map(|(category, count)| vec![category.to_string(), count.to_string()])
                    .collect();
                println!("{}", table::render(&headers, &rows));
            }

            let done_in_range = completed.iter().filter(|r| **r < batch.len()).count();
            println!();
            println!(
                "{}",
                format!("Cases remaining: {}", batch.len() - done_in_range).bold()
            );
            Ok(())
        }
    }
}
