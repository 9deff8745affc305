use chrono::Local;
use once_cell::sync::Lazy;

use crate::FormatRule;
use crate::calendar::{CalendarDate, ParseFlags};
use crate::error::NormalizeError;

static DEFAULT_RULES: Lazy<Vec<FormatRule>> = Lazy::new(crate::formats::get);

/// Parsing context.
///
/// Holds the reference date used for two-digit-year pivoting and "current
/// age" computation. Passing it in explicitly keeps the core a pure function
/// instead of a hidden clock reference.
#[derive(Debug, Clone)]
pub struct Context {
    /// Reference date; "today" for live runs.
    pub today: CalendarDate,
}

impl Default for Context {
    fn default() -> Self {
        if cfg!(test) {
            Self { today: CalendarDate::new(2025, 6, 1).unwrap() }
        } else {
            Self { today: CalendarDate::from_naive(Local::now().date_naive()) }
        }
    }
}

/// A successfully normalized date.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Parsed {
    pub date: CalendarDate,
    /// Caveats worth surfacing to the user (two-digit year pivot,
    /// month-first tie-break).
    pub flags: ParseFlags,
    /// Name of the format rule that matched.
    pub rule: &'static str,
}

/// Resolve a free-form date string to a [`CalendarDate`].
///
/// Rules are tried in priority order and the first whose pattern matches
/// commits the interpretation. Empty or whitespace-only input is
/// [`NormalizeError::Empty`], distinct from a malformed date.
///
/// # Example
/// ```
/// use aevum::{Context, normalize};
///
/// let parsed = normalize("March 14 1879", &Context::default()).unwrap();
/// assert_eq!(parsed.date.to_string(), "1879-03-14");
/// ```
pub fn normalize(raw: &str, ctx: &Context) -> Result<Parsed, NormalizeError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(NormalizeError::Empty);
    }

    for rule in DEFAULT_RULES.iter() {
        let Some(caps) = rule.pattern.captures(trimmed) else {
            continue;
        };

        // The shape matched; the production's verdict is final.
        return match (rule.production)(&caps, ctx) {
            Some((date, flags)) => {
                tracing::debug!(rule = rule.name, %date, "normalized");
                Ok(Parsed { date, flags, rule: rule.name })
            }
            None => Err(NormalizeError::InvalidDate(trimmed.to_string())),
        };
    }

    Err(NormalizeError::Unrecognized(trimmed.to_string()))
}

/// Like [`normalize`], but maps empty input to `Ok(None)` so callers can
/// treat a blank field as "no date provided".
pub fn normalize_opt(raw: &str, ctx: &Context) -> Result<Option<Parsed>, NormalizeError> {
    match normalize(raw, ctx) {
        Ok(parsed) => Ok(Some(parsed)),
        Err(NormalizeError::Empty) => Ok(None),
        Err(err) => Err(err),
    }
}
