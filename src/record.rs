//! Per-record evaluation: raw person records in, age results out.

use crate::age::{Status, compute_age};
use crate::api::{Context, normalize, normalize_opt};
use crate::calendar::{CalendarDate, ParseFlags};
use crate::error::RecordError;

/// A raw input record, as delivered by a record source (CSV row or
/// interactive entry). Dates are still strings at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonRecord {
    pub name: String,
    pub birth_raw: String,
    /// `None` when the source had no death field at all; an empty string is
    /// also treated as absent during evaluation.
    pub death_raw: Option<String>,
}

impl PersonRecord {
    pub fn new(
        name: impl Into<String>,
        birth_raw: impl Into<String>,
        death_raw: Option<impl Into<String>>,
    ) -> Self {
        Self { name: name.into(), birth_raw: birth_raw.into(), death_raw: death_raw.map(Into::into) }
    }
}

/// A fully evaluated record.
///
/// Invariants: `would_be_age_today` is present iff `death` is present, and
/// `status` is `Deceased` iff `death` is present. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgeResult {
    pub name: String,
    pub birth: CalendarDate,
    pub death: Option<CalendarDate>,
    /// Current age for the living, age at death for the deceased.
    pub current_or_death_age: i32,
    /// Hypothetical current age, deceased only.
    pub would_be_age_today: Option<i32>,
    pub status: Status,
    /// Union of the parse caveats from both date fields.
    pub flags: ParseFlags,
}

/// Evaluate one record: normalize both date fields, then compute the ages.
///
/// The birthdate is required, so an empty birth field is an error here; a
/// blank death field just means the person is living.
pub fn evaluate(record: &PersonRecord, ctx: &Context) -> Result<AgeResult, RecordError> {
    let birth = normalize(&record.birth_raw, ctx)
        .map_err(|source| RecordError::Birthdate { name: record.name.clone(), source })?;

    let death = match &record.death_raw {
        Some(raw) => {
            normalize_opt(raw, ctx).map_err(|source| RecordError::DeathDate { name: record.name.clone(), source })?
        }
        None => None,
    };

    let ages = compute_age(birth.date, death.map(|p| p.date), ctx.today)
        .map_err(|source| RecordError::Range { name: record.name.clone(), source })?;

    let mut flags = birth.flags;
    if let Some(parsed) = &death {
        flags |= parsed.flags;
    }

    Ok(AgeResult {
        name: record.name.clone(),
        birth: birth.date,
        death: death.map(|p| p.date),
        current_or_death_age: ages.current_or_death_age,
        would_be_age_today: ages.would_be_age_today,
        status: ages.status,
        flags,
    })
}

/// Evaluate a batch of records in input order.
///
/// A failing record is reported in place and never aborts the rest of the
/// batch; the output vector lines up index-for-index with the input.
pub fn evaluate_batch(records: &[PersonRecord], ctx: &Context) -> Vec<Result<AgeResult, RecordError>> {
    records
        .iter()
        .map(|record| {
            let outcome = evaluate(record, ctx);
            if let Err(err) = &outcome {
                tracing::warn!(%err, "record skipped");
            }
            outcome
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AgeError, NormalizeError};

    fn ctx() -> Context {
        Context { today: CalendarDate::new(2025, 6, 1).unwrap() }
    }

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn evaluates_a_living_person() {
        let record = PersonRecord::new("Ada", "1985-03-15", None::<String>);
        let result = evaluate(&record, &ctx()).unwrap();

        assert_eq!(result.birth, date(1985, 3, 15));
        assert_eq!(result.death, None);
        assert_eq!(result.current_or_death_age, 40);
        assert_eq!(result.would_be_age_today, None);
        assert_eq!(result.status, Status::Living);
    }

    #[test]
    fn evaluates_a_deceased_person_across_formats() {
        let record = PersonRecord::new("Albert Einstein", "March 14 1879", Some("April 18 1955"));
        let result = evaluate(&record, &ctx()).unwrap();

        assert_eq!(result.birth, date(1879, 3, 14));
        assert_eq!(result.death, Some(date(1955, 4, 18)));
        assert_eq!(result.current_or_death_age, 76);
        assert_eq!(result.would_be_age_today, Some(146));
        assert_eq!(result.status, Status::Deceased);
    }

    #[test]
    fn blank_death_field_means_living() {
        let record = PersonRecord::new("Ada", "1985-03-15", Some("   "));
        let result = evaluate(&record, &ctx()).unwrap();
        assert_eq!(result.status, Status::Living);
        assert_eq!(result.would_be_age_today, None);
    }

    #[test]
    fn missing_birthdate_is_an_error() {
        let record = PersonRecord::new("Ada", "  ", None::<String>);
        let err = evaluate(&record, &ctx()).unwrap_err();
        assert_eq!(err, RecordError::Birthdate { name: "Ada".to_string(), source: NormalizeError::Empty });
    }

    #[test]
    fn malformed_death_date_is_not_treated_as_absent() {
        let record = PersonRecord::new("Ada", "1985-03-15", Some("sometime in spring"));
        let err = evaluate(&record, &ctx()).unwrap_err();
        assert!(matches!(err, RecordError::DeathDate { .. }), "{err}");
    }

    #[test]
    fn death_before_birth_is_an_invalid_range() {
        let record = PersonRecord::new("Ada", "1990-05-20", Some("1985-03-15"));
        let err = evaluate(&record, &ctx()).unwrap_err();
        assert_eq!(
            err,
            RecordError::Range {
                name: "Ada".to_string(),
                source: AgeError::InvalidRange { start: date(1990, 5, 20), end: date(1985, 3, 15) },
            }
        );
    }

    #[test]
    fn flags_from_both_fields_are_merged() {
        let record = PersonRecord::new("Ada", "03/04/1990", Some("05/20/24"));
        let result = evaluate(&record, &ctx()).unwrap();
        assert!(result.flags.contains(ParseFlags::MONTH_FIRST_ASSUMED));
        assert!(result.flags.contains(ParseFlags::TWO_DIGIT_YEAR));
    }

    #[test]
    fn batch_keeps_going_past_failures_and_preserves_order() {
        let records = vec![
            PersonRecord::new("Ada", "1985-03-15", None::<String>),
            PersonRecord::new("Broken", "not a date", None::<String>),
            PersonRecord::new("Grace", "1906-12-09", Some("1992-01-01")),
        ];

        let outcomes = evaluate_batch(&records, &ctx());
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].as_ref().unwrap().name, "Ada");
        assert!(outcomes[1].is_err());
        assert_eq!(outcomes[2].as_ref().unwrap().name, "Grace");
        assert_eq!(outcomes[2].as_ref().unwrap().current_or_death_age, 85);
    }
}
