//! Procedure text normalization
//!
//! Canonicalizes free-text procedure names before rule matching: casing,
//! whitespace, punctuation, and a fixed alias table folding the synonyms,
//! abbreviations and misspellings seen in real schedule exports. The result
//! is idempotent: normalizing an already-normalized string is a no-op.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schedule::CellValue;

/// Alias table: literal phrase -> canonical short form, applied in order.
///
/// Each phrase is matched with word boundaries at its word-character edges,
/// so entries never fire inside longer words and folding cannot re-expand
/// its own output ("debride" -> "debridement" stays stable).
const ALIASES: [(&str, &str); 40] = [
    ("i&d", "i+d"),
    ("i/d", "i+d"),
    ("i d", "i+d"),
    ("i and d", "i+d"),
    ("i n d", "i+d"),
    ("incision and drainage", "incision drainage"),
    ("incision & drainage", "incision drainage"),
    ("incision drainage", "incision drainage"),
    ("debridement", "debridement"),
    ("debride", "debridement"),
    ("debrided", "debridement"),
    ("db", "debridement"),
    ("d/b", "debridement"),
    ("d&b", "debridement"),
    ("excisional debridement", "debridement"),
    ("off permanent catheter", "off perm"),
    ("off perm cath", "off perm"),
    ("off perm catheter", "off perm"),
    ("off cath", "off perm"),
    ("off tcc", "off perm"),
    ("e.c.", "ec"),
    ("e. c.", "ec"),
    ("e c", "ec"),
    ("ec.", "ec"),
    ("ec,", "ec"),
    ("ec;", "ec"),
    ("blepharoptosis repair", "ptosis correction"),
    ("correction of blepharoptosis", "ptosis correction"),
    ("upper eyelid ptosis repair", "ptosis correction"),
    ("upper lid ptosis correction", "ptosis correction"),
    ("eyelid ptosis correction", "ptosis correction"),
    ("ptosis repair", "ptosis correction"),
    ("ptosis surgery", "ptosis correction"),
    ("levator advancement", "ptosis correction"),
    ("levator aponeurosis advancement", "ptosis correction"),
    ("levator resection", "ptosis correction"),
    ("levator plication", "ptosis correction"),
    ("frontalis sling", "ptosis correction"),
    ("frontalis suspension", "ptosis correction"),
    ("upper eyelid correction", "ptosis correction"),
];

static WHITESPACE_RUN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// "e c", "e.c", "e-c" and friends collapse to the token "ec"
static EC_GLUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\be\s*[.\-\s]\s*c\b").expect("ec pattern is valid"));

/// "i + d", "i & d", "i and d" fold to "i+d"
static I_AND_D: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bi\s*(?:\+|&|\band\b)\s*d\b").expect("i+d pattern is valid"));

static INCISION_DRAINAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\bincision\s*(?:&|\band\b)?\s*drainage\b").expect("incision pattern is valid")
});

static PUNCTUATION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[,.;:()\[\]{}]").expect("punctuation pattern is valid"));

static ALIAS_PATTERNS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    ALIASES
        .iter()
        .map(|(phrase, canonical)| {
            let regex =
                Regex::new(&boundary_pattern(phrase)).expect("alias phrases compile to patterns");
            (regex, *canonical)
        })
        .collect()
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Escape a literal phrase, anchoring word-character edges on word boundaries
fn boundary_pattern(phrase: &str) -> String {
    let mut pattern = String::new();
    if phrase.chars().next().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern.push_str(&regex::escape(phrase));
    if phrase.chars().last().is_some_and(is_word_char) {
        pattern.push_str(r"\b");
    }
    pattern
}

/// Normalize a raw cell; blank cells yield the empty string
pub fn normalize_value(value: &CellValue) -> String {
    if value.is_null() {
        return String::new();
    }
    normalize_text(&value.to_text())
}

/// Normalize raw procedure text
pub fn normalize_text(raw: &str) -> String {
    let mut s = raw.to_lowercase().trim().to_string();
    s = s.replace('\u{a0}', " ");
    s = WHITESPACE_RUN.replace_all(&s, " ").into_owned();
    s = EC_GLUE.replace_all(&s, "ec").into_owned();
    for (pattern, canonical) in ALIAS_PATTERNS.iter() {
        s = pattern.replace_all(&s, *canonical).into_owned();
    }
    s = I_AND_D.replace_all(&s, "i+d").into_owned();
    s = INCISION_DRAINAGE
        .replace_all(&s, "incision drainage")
        .into_owned();
    s = PUNCTUATION.replace_all(&s, " ").into_owned();
    WHITESPACE_RUN.replace_all(&s, " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_is_empty() {
        assert_eq!(normalize_value(&CellValue::Null), "");
        assert_eq!(normalize_text(""), "");
        assert_eq!(normalize_text("   "), "");
    }

    #[test]
    fn test_casing_and_whitespace() {
        assert_eq!(normalize_text("  EXCISION\u{a0}\u{a0}Mass  "), "excision mass");
        assert_eq!(normalize_text("laser\t\ttoe"), "laser toe");
    }

    #[test]
    fn test_i_and_d_foldings() {
        assert_eq!(normalize_text("I & D abscess"), "i+d abscess");
        assert_eq!(normalize_text("I&D abscess"), "i+d abscess");
        assert_eq!(normalize_text("i and d left thigh"), "i+d left thigh");
        assert_eq!(normalize_text("I/D finger"), "i+d finger");
    }

    #[test]
    fn test_incision_drainage_foldings() {
        assert_eq!(normalize_text("Incision & Drainage"), "incision drainage");
        assert_eq!(normalize_text("incision and drainage"), "incision drainage");
    }

    #[test]
    fn test_ec_glue_folding() {
        assert_eq!(normalize_text("E.C. today"), "ec today");
        assert_eq!(normalize_text("e - c"), "ec");
        assert_eq!(normalize_text("e c under LA"), "ec under la");
    }

    #[test]
    fn test_debride_family_folds_once() {
        assert_eq!(normalize_text("debride wound"), "debridement wound");
        assert_eq!(normalize_text("debrided wound"), "debridement wound");
        assert_eq!(normalize_text("excisional debridement"), "debridement");
        // Already-canonical text must not grow
        assert_eq!(normalize_text("debridement"), "debridement");
    }

    #[test]
    fn test_long_off_perm_phrases_fold() {
        assert_eq!(normalize_text("off perm catheter"), "off perm");
        assert_eq!(normalize_text("Off Permanent Catheter"), "off perm");
        assert_eq!(normalize_text("off cath right neck"), "off perm right neck");
    }

    #[test]
    fn test_ptosis_phrasings_fold() {
        assert_eq!(normalize_text("Levator Resection"), "ptosis correction");
        assert_eq!(
            normalize_text("upper eyelid ptosis repair, both"),
            "ptosis correction both"
        );
        assert_eq!(normalize_text("frontalis sling (left)"), "ptosis correction left");
    }

    #[test]
    fn test_aliases_respect_word_boundaries() {
        // "i d" must not fire inside unrelated words
        assert_eq!(normalize_text("ski dive"), "ski dive");
        // "db" only as a standalone token
        assert_eq!(normalize_text("rigid bronchoscope"), "rigid bronchoscope");
    }

    #[test]
    fn test_punctuation_strips_to_spaces() {
        assert_eq!(normalize_text("excision; (mass) [arm]"), "excision mass arm");
        // "+" is preserved: it is part of the canonical i+d token
        assert_eq!(normalize_text("i+d abscess."), "i+d abscess");
    }

    #[test]
    fn test_numeric_cells_coerce_to_text() {
        assert_eq!(normalize_value(&CellValue::Int(930)), "930");
        assert_eq!(normalize_value(&CellValue::Float(930.0)), "930");
    }

    #[test]
    fn test_idempotence() {
        let samples = [
            "I & D abscess",
            "debride wound",
            "Off Perm Catheter",
            "E.C. ",
            "upper eyelid ptosis repair, both",
            "excisional debridement; deep",
            "unrelated procedure text",
            "",
        ];
        for raw in samples {
            let once = normalize_text(raw);
            let twice = normalize_text(&once);
            assert_eq!(once, twice, "normalize must be idempotent for {:?}", raw);
        }
    }
}
