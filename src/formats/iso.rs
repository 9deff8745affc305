//! Year-first numeric formats: `YYYY-MM-DD` and `YYYY/MM/DD`.
//!
//! A 4-digit leading year cannot be confused with a month or day, so this
//! rule outranks everything else.

use regex::Captures;

use crate::calendar::{CalendarDate, ParseFlags};
use crate::formats::helpers::group_u32;
use crate::{Context, FormatRule};

pub(crate) fn rules() -> Vec<FormatRule> {
    vec![FormatRule {
        name: "yyyy-mm-dd",
        pattern: regex!(r"^(\d{4})[-/](\d{1,2})[-/](\d{1,2})$"),
        priority: 30,
        production: produce,
    }]
}

fn produce(caps: &Captures<'_>, _ctx: &Context) -> Option<(CalendarDate, ParseFlags)> {
    let year = group_u32(caps, 1)? as i32;
    let month = group_u32(caps, 2)?;
    let day = group_u32(caps, 3)?;

    CalendarDate::new(year, month, day).map(|date| (date, ParseFlags::empty()))
}
