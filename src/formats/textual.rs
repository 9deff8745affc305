//! Month-name formats: `Month D, YYYY`, `Month D YYYY`, `D Month YYYY`, with
//! 3-letter abbreviations, optional comma, optional ordinal suffix on the
//! day, case-insensitive.
//!
//! Month names live in the pattern itself, so "Frobuary 14 1879" is an
//! unrecognized format rather than an invalid date.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::calendar::{CalendarDate, ParseFlags};
use crate::formats::helpers::{MONTH_PATTERN, group_u32, month_from_name};
use crate::{Context, FormatRule};

static MONTH_DAY_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^({MONTH_PATTERN})\.?\s+(\d{{1,2}})(?:st|nd|rd|th)?(?:\s*,\s*|\s+)(\d{{4}})$"))
        .unwrap()
});

static DAY_MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(r"(?i)^(\d{{1,2}})(?:st|nd|rd|th)?\s+({MONTH_PATTERN})\.?,?\s+(\d{{4}})$")).unwrap()
});

pub(crate) fn rules() -> Vec<FormatRule> {
    vec![
        FormatRule {
            name: "<month> <day> <year>",
            pattern: &*MONTH_DAY_YEAR,
            priority: 10,
            production: produce_month_first,
        },
        FormatRule {
            name: "<day> <month> <year>",
            pattern: &*DAY_MONTH_YEAR,
            priority: 9,
            production: produce_day_first,
        },
    ]
}

fn produce_month_first(caps: &Captures<'_>, _ctx: &Context) -> Option<(CalendarDate, ParseFlags)> {
    let month = month_from_name(caps.get(1)?.as_str())?;
    let day = group_u32(caps, 2)?;
    let year = group_u32(caps, 3)? as i32;

    CalendarDate::new(year, month, day).map(|date| (date, ParseFlags::empty()))
}

fn produce_day_first(caps: &Captures<'_>, _ctx: &Context) -> Option<(CalendarDate, ParseFlags)> {
    let day = group_u32(caps, 1)?;
    let month = month_from_name(caps.get(2)?.as_str())?;
    let year = group_u32(caps, 3)? as i32;

    CalendarDate::new(year, month, day).map(|date| (date, ParseFlags::empty()))
}
