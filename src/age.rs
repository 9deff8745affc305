//! Calendar-accurate age arithmetic.
//!
//! Whole elapsed years between two dates, not a day-count division: the year
//! difference is decremented when the end's (month, day) falls before the
//! start's, so an age ticks over exactly on the anniversary.

use crate::calendar::CalendarDate;
use crate::error::AgeError;

/// Living/deceased marker for a computed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Living,
    Deceased,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Living => write!(f, "Living"),
            Self::Deceased => write!(f, "Deceased"),
        }
    }
}

/// Age figures for one person.
///
/// `would_be_age_today` is present exactly when the person is deceased: it is
/// the hypothetical current age had they lived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ages {
    /// Current age for the living, age at death for the deceased.
    pub current_or_death_age: i32,
    /// Hypothetical current age, deceased only.
    pub would_be_age_today: Option<i32>,
    pub status: Status,
}

/// Whole years elapsed from `start` to `end`.
///
/// `end` earlier than `start` is an [`AgeError::InvalidRange`]; equal dates
/// are zero years.
pub fn years_between(start: CalendarDate, end: CalendarDate) -> Result<i32, AgeError> {
    if end < start {
        return Err(AgeError::InvalidRange { start, end });
    }

    let mut years = end.year() - start.year();
    if (end.month(), end.day()) < (start.month(), start.day()) {
        years -= 1;
    }
    Ok(years)
}

/// Compute the [`Ages`] for a birth date, optional death date, and reference
/// date.
///
/// `today` comes in as a parameter so the computation stays pure; callers
/// decide whether it is the real current date or a pinned reference.
/// A death date earlier than the birth date is an [`AgeError::InvalidRange`].
pub fn compute_age(birth: CalendarDate, death: Option<CalendarDate>, today: CalendarDate) -> Result<Ages, AgeError> {
    match death {
        None => Ok(Ages {
            current_or_death_age: years_between(birth, today)?,
            would_be_age_today: None,
            status: Status::Living,
        }),
        Some(death) => Ok(Ages {
            current_or_death_age: years_between(birth, death)?,
            would_be_age_today: Some(years_between(birth, today)?),
            status: Status::Deceased,
        }),
    }
}
