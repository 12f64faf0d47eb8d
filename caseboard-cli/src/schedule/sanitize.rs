//! Person-identifying column removal
//!
//! Record-level output (case lists, workbook exports) must not leak patient
//! or staff identity. Columns are dropped both by exact name and by a
//! pattern over header names; summaries are aggregate-only and unaffected.

use once_cell::sync::Lazy;
use regex::Regex;

/// Columns always dropped, whatever the export looks like
const DROP_EXACT: [&str; 8] = [
    "dspname",
    "surgstfnm",
    "surgeon",
    "anesthetist",
    "hn",
    "an",
    "patient",
    "name",
];

/// Header-name pattern for identity-bearing columns (English and Thai)
static SENSITIVE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(name|ชื่อ|แพทย์|doctor|physician|surge|anesth|staff)")
        .expect("sensitive-column pattern is valid")
});

/// Columns safe to show in the case list, with display labels
pub const SAFE_DISPLAY_COLUMNS: [(&str, &str); 2] =
    [("icd9cm_name", "Operation"), ("procnote", "Proc note")];

/// Check whether a column may carry person identity
pub fn is_sensitive_column(name: &str) -> bool {
    let trimmed = name.trim();
    let lower = trimmed.to_lowercase();
    DROP_EXACT.contains(&lower.as_str()) || SENSITIVE_PATTERN.is_match(trimmed)
}

/// Indices of columns that survive sanitization, in header order
pub fn safe_column_indices(headers: &[String]) -> Vec<usize> {
    headers
        .iter()
        .enumerate()
        .filter(|(_, h)| !is_sensitive_column(h))
        .map(|(i, _)| i)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_names_are_sensitive() {
        assert!(is_sensitive_column("HN"));
        assert!(is_sensitive_column("surgeon"));
        assert!(is_sensitive_column(" patient "));
    }

    #[test]
    fn test_pattern_matches_inside_names() {
        assert!(is_sensitive_column("icd9cm_name")); // contains "name"
        assert!(is_sensitive_column("anesth_code"));
        assert!(is_sensitive_column("ชื่อผู้ป่วย"));
        assert!(is_sensitive_column("SurgStfNm"));
    }

    #[test]
    fn test_safe_columns_survive() {
        let headers: Vec<String> = ["procnote", "estmtime", "ward", "hn"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        assert_eq!(safe_column_indices(&headers), vec![0, 1, 2]);
    }
}
