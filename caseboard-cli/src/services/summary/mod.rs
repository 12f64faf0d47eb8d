//! Daily schedule summary building
//!
//! The one entry point hosts call: takes a raw record batch plus
//! classification options and produces the pivot, the metadata (columns
//! used, totals, headline), the per-record working table, the Other review
//! queue, and remaining counts against a host-owned completion set. Never
//! fails — missing columns and unparseable values degrade to
//! Other/Unknown per record.

pub mod pivot;

pub use pivot::PivotTable;

use std::collections::HashSet;

use crate::schedule::{
    Category, RecordBatch, Shift, pick_column, PROC_TEXT_CANDIDATES, TIME_CANDIDATES,
};
use crate::services::classify::{
    self, ClassifyOptions, FuzzyScorer, normalize_value, parse_minutes,
};

/// Default cap for the Other review queue
pub const DEFAULT_REVIEW_LIMIT: usize = 25;
/// Headline width: the busiest categories shown next to the total
pub const HEADLINE_CATEGORIES: usize = 4;

/// One record after classification and shift bucketing
#[derive(Debug, Clone)]
pub struct CaseWork {
    /// Row position in the input batch (the record's identity)
    pub row: usize,
    /// Normalized procedure text ("" when the column is missing/blank)
    pub normalized: String,
    /// Category from the rule cascade alone
    pub rule_category: Category,
    /// Final category (rule result, possibly rescued by fuzzy)
    pub category: Category,
    /// Parsed minutes since midnight
    pub minutes: Option<u16>,
    /// Shift bucket derived from `minutes`
    pub shift: Shift,
}

/// Which columns were used and what the batch added up to
#[derive(Debug, Clone)]
pub struct SummaryMeta {
    pub proc_column: Option<String>,
    pub time_column: Option<String>,
    pub cases_total: usize,
    /// Per-category totals excluding Other, descending count
    pub category_totals: Vec<(Category, u32)>,
}

impl SummaryMeta {
    /// The busiest categories (excluding Other), at most `n`
    pub fn top_categories(&self, n: usize) -> &[(Category, u32)] {
        &self.category_totals[..self.category_totals.len().min(n)]
    }
}

/// Everything the host needs to render a day's board
#[derive(Debug, Clone)]
pub struct DailySummary {
    pub pivot: PivotTable,
    pub meta: SummaryMeta,
    pub work: Vec<CaseWork>,
}

/// Classify and bucket a whole batch, then aggregate
pub fn build_daily_summary(
    batch: &RecordBatch,
    options: &ClassifyOptions,
    scorer: &dyn FuzzyScorer,
) -> DailySummary {
    let options = options.clamped();
    let proc_idx = pick_column(batch.headers(), &PROC_TEXT_CANDIDATES);
    let time_idx = pick_column(batch.headers(), &TIME_CANDIDATES);

    let mut work = Vec::with_capacity(batch.len());
    for row in 0..batch.len() {
        let (normalized, rule_category) = match proc_idx {
            Some(col) => {
                let normalized = normalize_value(batch.value(row, col));
                let rule_category = classify::classify_rules(&normalized);
                (normalized, rule_category)
            }
            None => (String::new(), Category::Other),
        };
        let category = classify::resolve_category(rule_category, &normalized, &options, scorer);
        let minutes = time_idx.and_then(|col| parse_minutes(batch.value(row, col)));
        let shift = Shift::from_minutes(minutes);
        work.push(CaseWork {
            row,
            normalized,
            rule_category,
            category,
            minutes,
            shift,
        });
    }

    let pivot = PivotTable::from_cases(&work);
    let meta = SummaryMeta {
        proc_column: proc_idx.map(|i| batch.headers()[i].clone()),
        time_column: time_idx.map(|i| batch.headers()[i].clone()),
        cases_total: batch.len(),
        category_totals: category_totals(&pivot),
    };

    DailySummary { pivot, meta, work }
}

/// Non-zero per-category totals excluding Other, descending count;
/// equal counts keep canonical category order
fn category_totals(pivot: &PivotTable) -> Vec<(Category, u32)> {
    let mut totals: Vec<(Category, u32)> = Category::ALL
        .iter()
        .filter(|category| !category.is_other())
        .map(|category| (*category, pivot.category_total(*category)))
        .filter(|(_, count)| *count > 0)
        .collect();
    totals.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.index().cmp(&b.0.index())));
    totals
}

/// The Other review queue: normalized texts the rule cascade could not
/// place, by descending frequency (ties keep first appearance), capped
///
/// Rule-only on purpose — a fuzzy rescue should still surface the text so
/// the alias table can be extended. Returns nothing when the batch had no
/// procedure column (there is no text to review).
pub fn top_unknowns(summary: &DailySummary, limit: usize) -> Vec<(String, u32)> {
    if summary.meta.proc_column.is_none() {
        return Vec::new();
    }
    let mut order: Vec<&str> = Vec::new();
    let mut counts: Vec<u32> = Vec::new();
    for case in &summary.work {
        if !case.rule_category.is_other() {
            continue;
        }
        match order.iter().position(|text| *text == case.normalized) {
            Some(i) => counts[i] += 1,
            None => {
                order.push(&case.normalized);
                counts.push(1);
            }
        }
    }
    let mut entries: Vec<(usize, u32)> = counts.iter().copied().enumerate().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries
        .into_iter()
        .take(limit)
        .map(|(i, count)| (order[i].to_string(), count))
        .collect()
}

/// Remaining (not yet completed) cases per category, excluding Other,
/// descending; the completion set is owned by the host and passed in
///
/// Completed rows outside the batch are ignored — the schedule file may
/// have shrunk since the set was recorded.
pub fn ongoing_counts(work: &[CaseWork], completed: &HashSet<usize>) -> Vec<(Category, u32)> {
    let mut totals = [0u32; Category::ALL.len()];
    let mut done = [0u32; Category::ALL.len()];
    for case in work {
        totals[case.category.index()] += 1;
        if completed.contains(&case.row) {
            done[case.category.index()] += 1;
        }
    }
    let mut remaining: Vec<(Category, u32)> = Category::ALL
        .iter()
        .filter(|category| !category.is_other())
        .map(|category| (*category, totals[category.index()] - done[category.index()]))
        .filter(|(_, count)| *count > 0)
        .collect();
    remaining.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.index().cmp(&b.0.index())));
    remaining
}
