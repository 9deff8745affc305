use regex::{Captures, Regex};

#[macro_use]
mod macros;

mod age;
mod api;
mod calendar;
mod csv_io;
mod error;
mod formats;
mod record;

pub use age::{Ages, Status, compute_age, years_between};
pub use api::{Context, Parsed, normalize, normalize_opt};
pub use calendar::{CalendarDate, ParseFlags};
pub use csv_io::{OUTPUT_HEADER, read_records, write_results};
pub use error::{AgeError, NormalizeError, RecordError, SourceError};
pub use record::{AgeResult, PersonRecord, evaluate, evaluate_batch};

// --- Internal format-rule plumbing ------------------------------------------

/// Production function of a format rule: receives the captures of the rule's
/// anchored pattern plus the parsing context, and either assembles a valid
/// date (with any caveat flags) or reports that the matched shape does not
/// form a real calendar date.
pub(crate) type Production = fn(&Captures<'_>, &Context) -> Option<(CalendarDate, ParseFlags)>;

/// A date-format rule: a name, an anchored `pattern` matched against the
/// whole trimmed input, and a `production` turning the captures into a date.
///
/// Rules are tried in descending `priority` order and the first whose
/// pattern matches commits: a matching shape with impossible components is a
/// definitive failure, never a fall-through to lower-priority rules.
pub(crate) struct FormatRule {
    pub name: &'static str,
    pub pattern: &'static Regex,
    pub priority: u16,
    pub production: Production,
}

impl std::fmt::Debug for FormatRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FormatRule")
            .field("name", &self.name)
            .field("pattern", &self.pattern.as_str())
            .field("priority", &self.priority)
            .field("production", &"<function>")
            .finish()
    }
}
