//! Procedure text classification pipeline
//!
//! Normalization, ordered rule matching, and an optional fuzzy retry for
//! texts the rules leave in `Other`. Everything here is a pure function of
//! its input plus fixed process-wide tables; nothing ever returns an error —
//! unplaceable input degrades to `Category::Other`.

pub mod fuzzy;
pub mod normalize;
pub mod rules;
pub mod time;

pub use fuzzy::{FuzzyMatch, FuzzyScorer, NullScorer, TokenSetScorer};
pub use normalize::{normalize_text, normalize_value};
pub use rules::classify_rules;
pub use time::parse_minutes;

use crate::schedule::{Category, CellValue};

/// Lowest accepted fuzzy threshold
pub const MIN_FUZZY_THRESHOLD: u8 = 60;
/// Highest accepted fuzzy threshold
pub const MAX_FUZZY_THRESHOLD: u8 = 95;
/// Default fuzzy threshold
pub const DEFAULT_FUZZY_THRESHOLD: u8 = 85;

/// Options for the classification pass
#[derive(Debug, Clone, Copy)]
pub struct ClassifyOptions {
    /// Retry `Other` results with the fuzzy scorer
    pub use_fuzzy: bool,
    /// Minimum similarity (0-100) for accepting a fuzzy hit
    pub fuzzy_threshold: u8,
}

impl Default for ClassifyOptions {
    fn default() -> Self {
        Self {
            use_fuzzy: false,
            fuzzy_threshold: DEFAULT_FUZZY_THRESHOLD,
        }
    }
}

impl ClassifyOptions {
    /// Clamp the threshold into its supported range
    pub fn clamped(mut self) -> Self {
        self.fuzzy_threshold = self
            .fuzzy_threshold
            .clamp(MIN_FUZZY_THRESHOLD, MAX_FUZZY_THRESHOLD);
        self
    }
}

/// Classify one raw cell into exactly one category
pub fn classify_value(
    value: &CellValue,
    options: &ClassifyOptions,
    scorer: &dyn FuzzyScorer,
) -> Category {
    let normalized = normalize::normalize_value(value);
    let rule_category = rules::classify_rules(&normalized);
    resolve_category(rule_category, &normalized, options, scorer)
}

/// Apply the fuzzy retry policy to a rule result
///
/// The scorer is only consulted when fuzzy mode is on, the rules returned
/// the catch-all, and there is text to score. A scorer without a capable
/// backend (`NullScorer`) returns no match, which keeps the rule result.
pub fn resolve_category(
    rule_category: Category,
    normalized: &str,
    options: &ClassifyOptions,
    scorer: &dyn FuzzyScorer,
) -> Category {
    if !options.use_fuzzy || !rule_category.is_other() || normalized.is_empty() {
        return rule_category;
    }
    match scorer.best_match(normalized) {
        Some(m) if m.score >= options.fuzzy_threshold => m.category,
        _ => Category::Other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_is_total_over_value_types() {
        let options = ClassifyOptions::default();
        let values = [
            CellValue::Null,
            CellValue::String(String::new()),
            CellValue::String("   ".into()),
            CellValue::Int(42),
            CellValue::Float(3.5),
            CellValue::Bool(true),
            CellValue::String("I&D abscess".into()),
        ];
        for value in &values {
            let category = classify_value(value, &options, &NullScorer);
            assert!(Category::ALL.contains(&category));
        }
    }

    #[test]
    fn test_fuzzy_disabled_keeps_rule_result() {
        let options = ClassifyOptions::default();
        let value = CellValue::String("ptossis correction done".into());
        assert_eq!(
            classify_value(&value, &options, &TokenSetScorer),
            Category::Other
        );
    }

    #[test]
    fn test_fuzzy_enabled_rescues_near_miss() {
        let options = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 85,
        };
        let value = CellValue::String("ptossis correction done".into());
        assert_eq!(
            classify_value(&value, &options, &TokenSetScorer),
            Category::EyelidCorrection
        );
    }

    #[test]
    fn test_null_scorer_degrades_to_rules() {
        let options = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 60,
        };
        let value = CellValue::String("ptossis correction done".into());
        assert_eq!(classify_value(&value, &options, &NullScorer), Category::Other);
    }

    #[test]
    fn test_fuzzy_never_runs_on_rule_hits() {
        // "laser" is a rule hit; the scorer must not override it
        let options = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 60,
        };
        let value = CellValue::String("laser wart".into());
        assert_eq!(
            classify_value(&value, &options, &TokenSetScorer),
            Category::Laser
        );
    }

    #[test]
    fn test_empty_text_skips_fuzzy() {
        let options = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 60,
        };
        assert_eq!(
            classify_value(&CellValue::Null, &options, &TokenSetScorer),
            Category::Other
        );
    }

    #[test]
    fn test_threshold_clamping() {
        let low = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 10,
        }
        .clamped();
        assert_eq!(low.fuzzy_threshold, MIN_FUZZY_THRESHOLD);

        let high = ClassifyOptions {
            use_fuzzy: true,
            fuzzy_threshold: 100,
        }
        .clamped();
        assert_eq!(high.fuzzy_threshold, MAX_FUZZY_THRESHOLD);
    }
}
