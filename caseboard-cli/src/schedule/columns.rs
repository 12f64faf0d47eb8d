//! Column selection for heterogeneous schedule exports
//!
//! Different hospital systems export the same schedule under different
//! column names (and sometimes in Thai). The candidate lists are data, not
//! scattered literals; first candidate with a match wins.

/// Candidate names for the procedure-text column, in preference order
pub const PROC_TEXT_CANDIDATES: [&str; 7] = [
    "icd9cm_name",
    "operation",
    "opname",
    "procedure",
    "proc",
    "หัตถการ",
    "ผ่าตัด",
];

/// Candidate names for the scheduled-time column, in preference order
pub const TIME_CANDIDATES: [&str; 7] = [
    "estmtime",
    "reqtime",
    "opetime",
    "time",
    "เวลา",
    "เวลาผ่า",
    "เวลาเริ่ม",
];

/// Pick the first candidate that matches a header, case-insensitively
pub fn pick_column(headers: &[String], candidates: &[&str]) -> Option<usize> {
    for candidate in candidates {
        let wanted = candidate.to_lowercase();
        if let Some(idx) = headers
            .iter()
            .position(|h| h.trim().to_lowercase() == wanted)
        {
            return Some(idx);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_case_insensitive_match() {
        let h = headers(&["HN", "Operation", "EstmTime"]);
        assert_eq!(pick_column(&h, &PROC_TEXT_CANDIDATES), Some(1));
        assert_eq!(pick_column(&h, &TIME_CANDIDATES), Some(2));
    }

    #[test]
    fn test_first_candidate_wins() {
        // Both "icd9cm_name" and "operation" present: candidate order decides
        let h = headers(&["operation", "icd9cm_name"]);
        assert_eq!(pick_column(&h, &PROC_TEXT_CANDIDATES), Some(1));
    }

    #[test]
    fn test_thai_aliases() {
        let h = headers(&["หัตถการ", "เวลา"]);
        assert_eq!(pick_column(&h, &PROC_TEXT_CANDIDATES), Some(0));
        assert_eq!(pick_column(&h, &TIME_CANDIDATES), Some(1));
    }

    #[test]
    fn test_no_match() {
        let h = headers(&["hn", "ward"]);
        assert_eq!(pick_column(&h, &PROC_TEXT_CANDIDATES), None);
        assert_eq!(pick_column(&h, &TIME_CANDIDATES), None);
    }
}
