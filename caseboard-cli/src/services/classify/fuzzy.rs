//! Fuzzy fallback scoring for texts the rule list cannot place
//!
//! Matching is token-set based: word order and repetition do not affect the
//! score, so "drainage incision" still lands on the I+D canon. The scorer is
//! a capability behind a trait — hosts without it plug in `NullScorer` and
//! the classifier silently keeps the rule-only result.

use std::collections::BTreeSet;

use crate::schedule::Category;

/// Best canonical phrase found for an unmatched text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FuzzyMatch {
    pub category: Category,
    pub term: &'static str,
    /// Token-set similarity, 0-100
    pub score: u8,
}

/// Capability interface for approximate category matching
pub trait FuzzyScorer {
    fn best_match(&self, text: &str) -> Option<FuzzyMatch>;
}

/// Canonical phrases per non-Other category, scanned in order
const CANONICAL_TERMS: [(Category, &[&str]); 13] = [
    (Category::IncisionDrainage, &["i+d", "incision drainage"]),
    (Category::Excision, &["excision"]),
    (Category::NailExtraction, &["nail extraction"]),
    (Category::OffPermCatheter, &["off perm", "off catheter"]),
    (Category::LymphnodeBiopsy, &["lymph node biopsy", "ln biopsy"]),
    (Category::Debridement, &["debridement"]),
    (Category::Ec, &["ec"]),
    (Category::Frenectomy, &["frenectomy"]),
    (Category::Morpheus, &["morpheus"]),
    (Category::Cooltech, &["cooltech"]),
    (Category::Laser, &["laser"]),
    (Category::EyelidCorrection, &["ptosis correction", "eyelid correction"]),
    (Category::Facelift, &["facelift"]),
];

/// Token-set similarity scorer over the canonical phrase table
#[derive(Debug, Default, Clone, Copy)]
pub struct TokenSetScorer;

impl FuzzyScorer for TokenSetScorer {
    fn best_match(&self, text: &str) -> Option<FuzzyMatch> {
        if text.trim().is_empty() {
            return None;
        }
        let mut best: Option<FuzzyMatch> = None;
        for (category, terms) in CANONICAL_TERMS.iter() {
            for &term in terms.iter() {
                let score = token_set_ratio(text, term);
                // Strictly-greater keeps the first phrase in table order on ties
                if best.is_none_or(|b| score > b.score) {
                    best = Some(FuzzyMatch {
                        category: *category,
                        term,
                        score,
                    });
                }
            }
        }
        best
    }
}

/// Null object: no fuzzy capability available
pub struct NullScorer;

impl FuzzyScorer for NullScorer {
    fn best_match(&self, _text: &str) -> Option<FuzzyMatch> {
        None
    }
}

/// Token-set similarity ratio, 0-100
///
/// Both sides are split into sorted deduplicated token sets. The joined
/// intersection and the two full sorted strings are compared pairwise by
/// indel similarity and the best pairing wins; a token-subset relationship
/// scores 100 regardless of word order or extra repetition.
pub fn token_set_ratio(a: &str, b: &str) -> u8 {
    let tokens_a: BTreeSet<&str> = a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = b.split_whitespace().collect();
    if tokens_a.is_empty() || tokens_b.is_empty() {
        return if tokens_a.is_empty() && tokens_b.is_empty() {
            100
        } else {
            0
        };
    }

    let common: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let base = common.join(" ");
    let full_a = join_sorted(&base, &only_a.join(" "));
    let full_b = join_sorted(&base, &only_b.join(" "));

    let best = indel_similarity(&base, &full_a)
        .max(indel_similarity(&base, &full_b))
        .max(indel_similarity(&full_a, &full_b));
    (best * 100.0).round() as u8
}

fn join_sorted(base: &str, rest: &str) -> String {
    match (base.is_empty(), rest.is_empty()) {
        (true, _) => rest.to_string(),
        (_, true) => base.to_string(),
        _ => format!("{} {}", base, rest),
    }
}

/// Normalized indel similarity over characters, 0.0-1.0
fn indel_similarity(a: &str, b: &str) -> f64 {
    let chars_a: Vec<char> = a.chars().collect();
    let chars_b: Vec<char> = b.chars().collect();
    let total = chars_a.len() + chars_b.len();
    if total == 0 {
        return 1.0;
    }
    let lcs = lcs_length(&chars_a, &chars_b);
    1.0 - (total - 2 * lcs) as f64 / total as f64
}

/// Longest common subsequence length, two-row DP
fn lcs_length(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];
    for &ch_a in a {
        for (j, &ch_b) in b.iter().enumerate() {
            curr[j + 1] = if ch_a == ch_b {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_strings_score_100() {
        assert_eq!(token_set_ratio("incision drainage", "incision drainage"), 100);
    }

    #[test]
    fn test_word_order_is_ignored() {
        assert_eq!(token_set_ratio("drainage incision", "incision drainage"), 100);
    }

    #[test]
    fn test_token_subset_scores_100() {
        assert_eq!(token_set_ratio("off", "off perm"), 100);
        assert_eq!(token_set_ratio("ptosis correction surgery", "ptosis correction"), 100);
    }

    #[test]
    fn test_repetition_is_ignored() {
        assert_eq!(token_set_ratio("laser laser laser", "laser"), 100);
    }

    #[test]
    fn test_disjoint_strings_score_low() {
        assert!(token_set_ratio("appendectomy", "facelift") < 60);
    }

    #[test]
    fn test_near_miss_score_is_pinned() {
        // One-letter typo in "ptosis" against "ptosis correction"
        assert_eq!(
            token_set_ratio("ptossis correction done", "ptosis correction"),
            85
        );
    }

    #[test]
    fn test_empty_sides() {
        assert_eq!(token_set_ratio("", ""), 100);
        assert_eq!(token_set_ratio("", "laser"), 0);
        assert_eq!(token_set_ratio("laser", ""), 0);
    }

    #[test]
    fn test_best_match_rescues_word_order() {
        let m = TokenSetScorer.best_match("drainage incision").unwrap();
        assert_eq!(m.category, Category::IncisionDrainage);
        assert_eq!(m.score, 100);
    }

    #[test]
    fn test_best_match_tie_break_is_table_order() {
        // "off" is a token subset of both Off perm/catheter phrases; the
        // first phrase in table order wins the tie
        let m = TokenSetScorer.best_match("off").unwrap();
        assert_eq!(m.category, Category::OffPermCatheter);
        assert_eq!(m.term, "off perm");
        assert_eq!(m.score, 100);
    }

    #[test]
    fn test_best_match_empty_text_is_none() {
        assert!(TokenSetScorer.best_match("").is_none());
        assert!(TokenSetScorer.best_match("   ").is_none());
    }

    #[test]
    fn test_null_scorer_never_matches() {
        assert!(NullScorer.best_match("laser").is_none());
    }
}
