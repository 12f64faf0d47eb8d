//! Ordered first-match-wins category rules
//!
//! The rule order is semantically load-bearing: earlier categories can be
//! substrings of conditions tested later ("debrided ec wound" must hit the
//! Debridement rule before the isolated-"ec" rule gets a look). Keep this
//! an explicit ordered list, never a map.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schedule::Category;

static EXCISION: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bexcis").expect("rule pattern"));

static NAIL_EXTRACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bnail\s*(?:extraction|extract|ext)\b").expect("rule pattern"));

static OFF_PERM_CATHETER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\boff\s*perm\b|\boff\s*catheter\b").expect("rule pattern"));

static LYMPHNODE_BIOPSY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:lymph\s*node|lymphnode|ln)\s*biopsy\b").expect("rule pattern")
});

static DEBRIDEMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bdebrid").expect("rule pattern"));

/// Isolated "ec" token; the regex crate has no look-around, so the
/// boundary is spelled out as non-alphanumeric context
static EC_TOKEN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:^|[^a-z0-9])ec(?:[^a-z0-9]|$)").expect("rule pattern"));

static FRENECTOMY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bfren(?:ectomy|ulectomy)\b").expect("rule pattern"));

static MORPHEUS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bmorpheus\b").expect("rule pattern"));

static COOLTECH: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bcool\s*tech\b").expect("rule pattern"));

static LASER: Lazy<Regex> = Lazy::new(|| Regex::new(r"\blaser\b").expect("rule pattern"));

static PTOSIS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(?:blepharo)?ptosis\b").expect("rule pattern"));

static FACELIFT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bface\s*lift\b|\brhytidectomy\b").expect("rule pattern"));

fn has_incision_drainage(s: &str) -> bool {
    s.contains("i+d") || s.contains("incision drainage")
}

fn has_excision(s: &str) -> bool {
    EXCISION.is_match(s)
}

fn has_nail_extraction(s: &str) -> bool {
    NAIL_EXTRACTION.is_match(s)
}

fn has_off_perm_catheter(s: &str) -> bool {
    OFF_PERM_CATHETER.is_match(s)
}

fn has_lymphnode_biopsy(s: &str) -> bool {
    LYMPHNODE_BIOPSY.is_match(s)
}

fn has_debridement(s: &str) -> bool {
    DEBRIDEMENT.is_match(s)
}

fn has_isolated_ec(s: &str) -> bool {
    EC_TOKEN.is_match(s)
}

fn has_frenectomy(s: &str) -> bool {
    FRENECTOMY.is_match(s)
}

fn has_morpheus(s: &str) -> bool {
    MORPHEUS.is_match(s)
}

fn has_cooltech(s: &str) -> bool {
    COOLTECH.is_match(s)
}

fn has_laser(s: &str) -> bool {
    LASER.is_match(s)
}

fn has_ptosis(s: &str) -> bool {
    PTOSIS.is_match(s)
}

fn has_facelift(s: &str) -> bool {
    FACELIFT.is_match(s)
}

type Predicate = fn(&str) -> bool;

/// The rule cascade, in precedence order
static RULES: [(Predicate, Category); 13] = [
    (has_incision_drainage, Category::IncisionDrainage),
    (has_excision, Category::Excision),
    (has_nail_extraction, Category::NailExtraction),
    (has_off_perm_catheter, Category::OffPermCatheter),
    (has_lymphnode_biopsy, Category::LymphnodeBiopsy),
    (has_debridement, Category::Debridement),
    (has_isolated_ec, Category::Ec),
    (has_frenectomy, Category::Frenectomy),
    (has_morpheus, Category::Morpheus),
    (has_cooltech, Category::Cooltech),
    (has_laser, Category::Laser),
    (has_ptosis, Category::EyelidCorrection),
    (has_facelift, Category::Facelift),
];

/// Map normalized text to the first matching category, or `Other`
pub fn classify_rules(normalized: &str) -> Category {
    for (matches, category) in RULES.iter() {
        if matches(normalized) {
            return *category;
        }
    }
    Category::Other
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::classify::normalize::normalize_text;

    fn classify(raw: &str) -> Category {
        classify_rules(&normalize_text(raw))
    }

    #[test]
    fn test_every_category_is_reachable() {
        assert_eq!(classify("I&D abscess"), Category::IncisionDrainage);
        assert_eq!(classify("Excision of mass"), Category::Excision);
        assert_eq!(classify("nail extraction left big toe"), Category::NailExtraction);
        assert_eq!(classify("off perm catheter"), Category::OffPermCatheter);
        assert_eq!(classify("lymph node biopsy"), Category::LymphnodeBiopsy);
        assert_eq!(classify("debridement of wound"), Category::Debridement);
        assert_eq!(classify("EC"), Category::Ec);
        assert_eq!(classify("frenectomy"), Category::Frenectomy);
        assert_eq!(classify("Morpheus face"), Category::Morpheus);
        assert_eq!(classify("cool tech session"), Category::Cooltech);
        assert_eq!(classify("laser wart"), Category::Laser);
        assert_eq!(classify("blepharoptosis repair"), Category::EyelidCorrection);
        assert_eq!(classify("face lift"), Category::Facelift);
        assert_eq!(classify("appendectomy"), Category::Other);
    }

    #[test]
    fn test_rule_order_debridement_before_ec() {
        assert_eq!(classify("debrided ec wound"), Category::Debridement);
    }

    #[test]
    fn test_ec_never_fires_inside_words() {
        assert_eq!(classify("injection of steroid"), Category::Other);
        assert_eq!(classify("ec under la"), Category::Ec);
        assert_eq!(classify("E.C."), Category::Ec);
    }

    #[test]
    fn test_word_prefix_rules() {
        assert_eq!(classify("excisional biopsy"), Category::Excision);
        assert_eq!(classify("debride pressure sore"), Category::Debridement);
    }

    #[test]
    fn test_nail_extraction_variants() {
        assert_eq!(classify("nail ext right thumb"), Category::NailExtraction);
        assert_eq!(classify("nail extract"), Category::NailExtraction);
        // "ext" glued into a longer word must not count
        assert_eq!(classify("nail extra care"), Category::Other);
    }

    #[test]
    fn test_lymphnode_variants() {
        assert_eq!(classify("lymphnode biopsy neck"), Category::LymphnodeBiopsy);
        assert_eq!(classify("LN biopsy"), Category::LymphnodeBiopsy);
    }

    #[test]
    fn test_facelift_variants() {
        assert_eq!(classify("facelift"), Category::Facelift);
        assert_eq!(classify("rhytidectomy"), Category::Facelift);
    }

    #[test]
    fn test_aliases_feed_the_rules() {
        assert_eq!(classify("I & D abscess"), Category::IncisionDrainage);
        assert_eq!(classify("incision and drainage"), Category::IncisionDrainage);
        assert_eq!(classify("off cath"), Category::OffPermCatheter);
        assert_eq!(classify("levator advancement"), Category::EyelidCorrection);
    }

    #[test]
    fn test_blank_text_is_other() {
        assert_eq!(classify(""), Category::Other);
        assert_eq!(classify("   "), Category::Other);
    }
}
