//! Shared utilities for format-rule productions.

use regex::Captures;

use crate::calendar::CalendarDate;

/// Extract an integer from a capture group. Patterns only put digit runs in
/// the groups this is called on, so a failed parse means overflow and the
/// value cannot be part of a real date anyway.
pub fn group_u32(caps: &Captures<'_>, idx: usize) -> Option<u32> {
    caps.get(idx)?.as_str().parse().ok()
}

/// Month number from a name or 3-letter abbreviation (already lowercased by
/// the caller or matched case-insensitively). `"sept"` is accepted alongside
/// `"sep"`.
pub fn month_from_name(name: &str) -> Option<u32> {
    let normalized = name.trim().trim_end_matches('.').to_lowercase();
    let key = if normalized.len() > 3 { &normalized[..3] } else { normalized.as_str() };
    match key {
        "jan" => Some(1),
        "feb" => Some(2),
        "mar" => Some(3),
        "apr" => Some(4),
        "may" => Some(5),
        "jun" => Some(6),
        "jul" => Some(7),
        "aug" => Some(8),
        "sep" => Some(9),
        "oct" => Some(10),
        "nov" => Some(11),
        "dec" => Some(12),
        _ => None,
    }
}

/// Pivot a two-digit year to the most recent year ending in those digits
/// that is not after `today`. With today in 2025: `24` -> 2024, `31` -> 1931,
/// `25` -> 2025.
pub fn pivot_two_digit_year(two_digit: u32, today: CalendarDate) -> i32 {
    let century = today.year().div_euclid(100) * 100;
    let mut year = century + two_digit as i32;
    if year > today.year() {
        year -= 100;
    }
    year
}

/// Regex alternation matching an English month name or abbreviation.
/// Kept in one place so the textual rules stay in sync.
pub const MONTH_PATTERN: &str = "jan(?:uary)?|feb(?:ruary)?|mar(?:ch)?|apr(?:il)?|may|jun(?:e)?|jul(?:y)?|aug(?:ust)?|sep(?:t(?:ember)?)?|oct(?:ober)?|nov(?:ember)?|dec(?:ember)?";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_and_abbreviations_resolve() {
        let cases: Vec<(u32, &str)> = vec![
            (1, "January"),
            (1, "jan"),
            (2, "FEB"),
            (3, "March"),
            (5, "may"),
            (9, "September"),
            (9, "Sep"),
            (9, "Sept"),
            (9, "sept."),
            (12, "Dec."),
        ];
        for (expected, name) in cases {
            assert_eq!(month_from_name(name), Some(expected), "{name}");
        }
        assert_eq!(month_from_name("frob"), None);
        assert_eq!(month_from_name(""), None);
    }

    #[test]
    fn two_digit_pivot_never_lands_in_the_future() {
        let today = CalendarDate::new(2025, 6, 1).unwrap();
        assert_eq!(pivot_two_digit_year(24, today), 2024);
        assert_eq!(pivot_two_digit_year(25, today), 2025);
        assert_eq!(pivot_two_digit_year(26, today), 1926);
        assert_eq!(pivot_two_digit_year(31, today), 1931);
        assert_eq!(pivot_two_digit_year(0, today), 2000);
        assert_eq!(pivot_two_digit_year(99, today), 1999);
    }

    #[test]
    fn two_digit_pivot_tracks_the_reference_century() {
        let today = CalendarDate::new(1999, 1, 1).unwrap();
        assert_eq!(pivot_two_digit_year(99, today), 1999);
        assert_eq!(pivot_two_digit_year(0, today), 1900);
        assert_eq!(pivot_two_digit_year(42, today), 1942);
    }
}
