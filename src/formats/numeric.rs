//! Slash/dash-delimited numeric dates with the year last: `MM/DD/YYYY`,
//! `DD/MM/YYYY`, and their 2-digit-year variants.
//!
//! Ordering heuristic: a first component above 12 cannot be a month, so the
//! input is read day-first; otherwise month-first wins ties. That default is
//! load-bearing for round-trip compatibility with previously generated
//! output — do not change it.

use regex::Captures;

use crate::calendar::{CalendarDate, ParseFlags};
use crate::formats::helpers::{group_u32, pivot_two_digit_year};
use crate::{Context, FormatRule};

pub(crate) fn rules() -> Vec<FormatRule> {
    vec![FormatRule {
        name: "mm/dd/yyyy|dd/mm/yyyy",
        pattern: regex!(r"^(\d{1,2})[-/](\d{1,2})[-/](\d{4}|\d{2})$"),
        priority: 20,
        production: produce,
    }]
}

fn produce(caps: &Captures<'_>, ctx: &Context) -> Option<(CalendarDate, ParseFlags)> {
    let first = group_u32(caps, 1)?;
    let second = group_u32(caps, 2)?;
    let year_digits = caps.get(3)?.as_str();

    let mut flags = ParseFlags::empty();

    let year = if year_digits.len() == 2 {
        flags |= ParseFlags::TWO_DIGIT_YEAR;
        pivot_two_digit_year(group_u32(caps, 3)?, ctx.today)
    } else {
        group_u32(caps, 3)? as i32
    };

    let (month, day) = if first > 12 { (second, first) } else { (first, second) };

    // Both readings valid and distinct: record that the month-first default
    // decided the interpretation.
    if first != second && (1..=12).contains(&first) && (1..=12).contains(&second) {
        flags |= ParseFlags::MONTH_FIRST_ASSUMED;
    }

    CalendarDate::new(year, month, day).map(|date| (date, flags))
}
