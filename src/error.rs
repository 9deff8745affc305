//! Error taxonomy.
//!
//! Split by blast radius: [`NormalizeError`] and [`AgeError`] are per-value,
//! [`RecordError`] is per-record (the batch keeps going), [`SourceError`] is
//! fatal setup trouble surfaced before any record is processed.

use std::path::PathBuf;

use thiserror::Error;

use crate::calendar::CalendarDate;

/// A raw date string could not be resolved to a calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NormalizeError {
    /// Empty or whitespace-only input. Distinct from a malformed date so a
    /// blank death-date cell can be treated as "absent" rather than broken.
    #[error("no date provided")]
    Empty,

    /// No format rule matched the input at all.
    #[error("unrecognized date format: '{0}'")]
    Unrecognized(String),

    /// A format rule matched the shape, but the components are not a real
    /// calendar date. The input is never coerced to a nearby valid date.
    #[error("'{0}' is not a valid calendar date")]
    InvalidDate(String),
}

/// Age arithmetic over an impossible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AgeError {
    /// The end date precedes the start date (a death before a birth).
    #[error("end date {end} precedes start date {start}")]
    InvalidRange { start: CalendarDate, end: CalendarDate },
}

/// A single record failed; carries the person's name and the failing field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("{name}: birthdate: {source}")]
    Birthdate {
        name: String,
        #[source]
        source: NormalizeError,
    },

    #[error("{name}: death date: {source}")]
    DeathDate {
        name: String,
        #[source]
        source: NormalizeError,
    },

    #[error("{name}: {source}")]
    Range {
        name: String,
        #[source]
        source: AgeError,
    },
}

impl RecordError {
    /// Name of the person the failing record belongs to.
    pub fn name(&self) -> &str {
        match self {
            Self::Birthdate { name, .. } | Self::DeathDate { name, .. } | Self::Range { name, .. } => name,
        }
    }
}

/// Fatal record-source/sink errors.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The given path does not exist. Interactive mode recovers from this by
    /// re-prompting instead of aborting.
    #[error("file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// No header matched a required column's aliases.
    #[error("missing required column '{wanted}' (available: {available})")]
    MissingColumn { wanted: &'static str, available: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
