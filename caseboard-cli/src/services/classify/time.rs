//! Scheduled-time parsing
//!
//! Exports carry times as military integers (915, 1330), spreadsheet
//! numerics (930.0) or "H:MM"/"HH:MM" strings. Anything else is "no value"
//! and buckets as an Unknown shift downstream.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::schedule::CellValue;

static HH_MM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{1,2}):(\d{2})$").expect("time pattern is valid"));

/// Parse a raw cell into minutes since midnight (0-1439)
pub fn parse_minutes(value: &CellValue) -> Option<u16> {
    match value {
        CellValue::Null | CellValue::Bool(_) => None,
        CellValue::Int(i) => military_minutes(*i),
        CellValue::Float(f) => float_minutes(*f),
        CellValue::String(s) => {
            let s = s.trim();
            // Military integer first ("930", "930.0"), then H:MM
            if let Ok(f) = s.parse::<f64>() {
                return float_minutes(f);
            }
            let captures = HH_MM.captures(s)?;
            let hours: i64 = captures[1].parse().ok()?;
            let minutes: i64 = captures[2].parse().ok()?;
            clock_minutes(hours, minutes)
        }
    }
}

fn float_minutes(f: f64) -> Option<u16> {
    if !f.is_finite() {
        return None;
    }
    military_minutes(f.trunc() as i64)
}

fn military_minutes(value: i64) -> Option<u16> {
    if value < 0 {
        return None;
    }
    clock_minutes(value / 100, value % 100)
}

fn clock_minutes(hours: i64, minutes: i64) -> Option<u16> {
    if (0..=23).contains(&hours) && (0..=59).contains(&minutes) {
        Some((hours * 60 + minutes) as u16)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_military_integers() {
        assert_eq!(parse_minutes(&CellValue::Int(915)), Some(9 * 60 + 15));
        assert_eq!(parse_minutes(&CellValue::Int(0)), Some(0));
        assert_eq!(parse_minutes(&CellValue::Int(2359)), Some(23 * 60 + 59));
        // Either side of the noon boundary
        assert_eq!(parse_minutes(&CellValue::Int(1159)), Some(719));
        assert_eq!(parse_minutes(&CellValue::Int(1200)), Some(720));
    }

    #[test]
    fn test_military_range_checks() {
        assert_eq!(parse_minutes(&CellValue::Int(2400)), None);
        assert_eq!(parse_minutes(&CellValue::Int(1299)), None); // 12:99
        assert_eq!(parse_minutes(&CellValue::Int(-100)), None);
    }

    #[test]
    fn test_spreadsheet_floats_truncate() {
        assert_eq!(parse_minutes(&CellValue::Float(930.0)), Some(9 * 60 + 30));
        assert_eq!(parse_minutes(&CellValue::Float(930.7)), Some(9 * 60 + 30));
        assert_eq!(parse_minutes(&CellValue::Float(f64::NAN)), None);
    }

    #[test]
    fn test_numeric_strings() {
        assert_eq!(parse_minutes(&CellValue::String("1400".into())), Some(14 * 60));
        assert_eq!(parse_minutes(&CellValue::String(" 930.0 ".into())), Some(9 * 60 + 30));
    }

    #[test]
    fn test_clock_strings() {
        assert_eq!(parse_minutes(&CellValue::String("9:15".into())), Some(9 * 60 + 15));
        assert_eq!(parse_minutes(&CellValue::String("09:15".into())), Some(9 * 60 + 15));
        assert_eq!(parse_minutes(&CellValue::String("12:00".into())), Some(720));
    }

    #[test]
    fn test_malformed_strings() {
        assert_eq!(parse_minutes(&CellValue::String("abc".into())), None);
        assert_eq!(parse_minutes(&CellValue::String("25:99".into())), None);
        assert_eq!(parse_minutes(&CellValue::String("7:5".into())), None); // minute must be 2 digits
        assert_eq!(parse_minutes(&CellValue::String("9:15:00".into())), None);
        assert_eq!(parse_minutes(&CellValue::String("".into())), None);
    }

    #[test]
    fn test_non_time_values() {
        assert_eq!(parse_minutes(&CellValue::Null), None);
        assert_eq!(parse_minutes(&CellValue::Bool(true)), None);
    }
}
