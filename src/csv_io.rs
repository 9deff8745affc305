//! CSV record source and sink.
//!
//! Column detection is an explicit alias table: each canonical field maps to
//! the header spellings it accepts, matched case-insensitively against the
//! trimmed headers. No fuzzy matching.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Writer};

use crate::age::Status;
use crate::error::SourceError;
use crate::record::{AgeResult, PersonRecord};

const NAME_ALIASES: &[&str] = &["name", "person", "full name", "fullname"];
const BIRTH_ALIASES: &[&str] = &["birthdate", "birth date", "birth_date", "dob", "date of birth"];
const DEATH_ALIASES: &[&str] = &["death date", "deathdate", "death_date", "dod", "date of death", "deceased date"];

/// Header of the exported results file. Kept re-ingestible: `Name` and
/// `Birthdate`/`Death Date` resolve through the alias table above.
pub const OUTPUT_HEADER: [&str; 6] = ["Name", "Birthdate", "Death Date", "Current Age", "Deceased Age", "Status"];

#[derive(Debug, Clone, Copy)]
struct ColumnMap {
    name: usize,
    birth: usize,
    death: Option<usize>,
}

fn resolve_columns(headers: &StringRecord) -> Result<ColumnMap, SourceError> {
    let normalized: Vec<String> = headers.iter().map(|h| h.trim().to_lowercase()).collect();
    let find = |aliases: &[&str]| normalized.iter().position(|h| aliases.contains(&h.as_str()));
    let available = || headers.iter().map(str::trim).collect::<Vec<_>>().join(", ");

    let name = find(NAME_ALIASES).ok_or_else(|| SourceError::MissingColumn { wanted: "name", available: available() })?;
    let birth =
        find(BIRTH_ALIASES).ok_or_else(|| SourceError::MissingColumn { wanted: "birthdate", available: available() })?;

    Ok(ColumnMap { name, birth, death: find(DEATH_ALIASES) })
}

/// Read person records from a CSV file.
///
/// Column mapping is validated against the whole header before any row is
/// read, so a missing required column fails up front rather than mid-batch.
/// Rows with both the name and birth cells empty are skipped as padding.
pub fn read_records(path: &Path) -> Result<Vec<PersonRecord>, SourceError> {
    if !path.exists() {
        return Err(SourceError::NotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new().trim(csv::Trim::All).from_path(path)?;
    let columns = resolve_columns(reader.headers()?)?;

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let cell = |idx: usize| row.get(idx).unwrap_or("").trim();

        let name = cell(columns.name);
        let birth = cell(columns.birth);
        if name.is_empty() && birth.is_empty() {
            continue;
        }

        let death = columns.death.map(cell).filter(|s| !s.is_empty()).map(String::from);
        records.push(PersonRecord { name: name.to_string(), birth_raw: birth.to_string(), death_raw: death });
    }

    tracing::debug!(count = records.len(), path = %path.display(), "loaded records");
    Ok(records)
}

/// Write results to a CSV file in the documented schema.
///
/// Living: `Current Age` only. Deceased: `Deceased Age` holds the age at
/// death and `Current Age` the would-be-today figure. Dates are written in
/// normalized `YYYY-MM-DD` form so the file re-ingests losslessly.
pub fn write_results(path: &Path, results: &[AgeResult]) -> Result<(), SourceError> {
    let mut writer = Writer::from_path(path)?;
    writer.write_record(OUTPUT_HEADER)?;

    for result in results {
        let (current, deceased) = match result.status {
            Status::Living => (result.current_or_death_age.to_string(), String::new()),
            Status::Deceased => (
                result.would_be_age_today.map(|age| age.to_string()).unwrap_or_default(),
                result.current_or_death_age.to_string(),
            ),
        };
        let birth = result.birth.to_string();
        let death = result.death.map(|d| d.to_string()).unwrap_or_default();
        let status = result.status.to_string();

        writer.write_record([
            result.name.as_str(),
            birth.as_str(),
            death.as_str(),
            current.as_str(),
            deceased.as_str(),
            status.as_str(),
        ])?;
    }

    writer.flush()?;
    tracing::debug!(count = results.len(), path = %path.display(), "wrote results");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Context;
    use crate::calendar::CalendarDate;
    use crate::record::evaluate_batch;

    fn ctx() -> Context {
        Context { today: CalendarDate::new(2025, 6, 1).unwrap() }
    }

    fn write_temp(contents: &str) -> tempfile::NamedTempFile {
        let file = tempfile::NamedTempFile::new().unwrap();
        std::fs::write(file.path(), contents).unwrap();
        file
    }

    #[test]
    fn reads_records_with_canonical_headers() {
        let file = write_temp("Name,Birthdate,Death Date\nAda,1985-03-15,\nAlbert,March 14 1879,April 18 1955\n");
        let records = read_records(file.path()).unwrap();

        assert_eq!(records.len(), 2);
        assert_eq!(records[0], PersonRecord::new("Ada", "1985-03-15", None::<String>));
        assert_eq!(records[1], PersonRecord::new("Albert", "March 14 1879", Some("April 18 1955")));
    }

    #[test]
    fn header_aliases_resolve_case_insensitively() {
        let cases = [
            "person,dob\nAda,1985-03-15\n",
            "Full Name,Date Of Birth\nAda,1985-03-15\n",
            "FULLNAME,BIRTH_DATE\nAda,1985-03-15\n",
        ];
        for contents in cases {
            let file = write_temp(contents);
            let records = read_records(file.path()).unwrap();
            assert_eq!(records.len(), 1, "{contents}");
            assert_eq!(records[0].death_raw, None);
        }
    }

    #[test]
    fn death_column_aliases_resolve() {
        for header in ["deathdate", "DOD", "Date of Death", "Deceased Date"] {
            let file = write_temp(&format!("name,birthdate,{header}\nAda,1985-03-15,2000-01-01\n"));
            let records = read_records(file.path()).unwrap();
            assert_eq!(records[0].death_raw.as_deref(), Some("2000-01-01"), "{header}");
        }
    }

    #[test]
    fn missing_birth_column_fails_before_any_row() {
        let file = write_temp("who,when\nAda,1985-03-15\n");
        let err = read_records(file.path()).unwrap_err();
        match err {
            SourceError::MissingColumn { wanted, available } => {
                assert_eq!(wanted, "name");
                assert_eq!(available, "who, when");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = read_records(Path::new("/no/such/file.csv")).unwrap_err();
        assert!(matches!(err, SourceError::NotFound(_)), "{err}");
    }

    #[test]
    fn blank_rows_are_skipped_but_named_rows_survive() {
        let file = write_temp("name,birthdate\nAda,1985-03-15\n,\nNoDate,\n");
        let records = read_records(file.path()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].name, "NoDate");
        assert_eq!(records[1].birth_raw, "");
    }

    #[test]
    fn export_then_reimport_round_trips_dates_exactly() {
        let input = write_temp(
            "Name,Birthdate,Death Date\n\
             Ada,03/15/1985,\n\
             Albert Einstein,March 14 1879,April 18 1955\n\
             Edith,20/05/1931,05/20/24\n",
        );
        let records = read_records(input.path()).unwrap();
        let originals: Vec<AgeResult> =
            evaluate_batch(&records, &ctx()).into_iter().collect::<Result<_, _>>().unwrap();

        let output = tempfile::NamedTempFile::new().unwrap();
        write_results(output.path(), &originals).unwrap();

        let reread = read_records(output.path()).unwrap();
        let reevaluated: Vec<AgeResult> =
            evaluate_batch(&reread, &ctx()).into_iter().collect::<Result<_, _>>().unwrap();

        assert_eq!(originals.len(), reevaluated.len());
        for (original, reevaluated) in originals.iter().zip(&reevaluated) {
            assert_eq!(original.name, reevaluated.name);
            assert_eq!(original.birth, reevaluated.birth);
            assert_eq!(original.death, reevaluated.death);
            assert_eq!(original.current_or_death_age, reevaluated.current_or_death_age);
            assert_eq!(original.would_be_age_today, reevaluated.would_be_age_today);
            assert_eq!(original.status, reevaluated.status);
        }
    }

    #[test]
    fn written_schema_matches_the_documented_example() {
        let records =
            vec![PersonRecord::new("Ada", "1985-03-15", None::<String>), PersonRecord::new("Albert Einstein", "1879-03-14", Some("1955-04-18"))];
        let results: Vec<AgeResult> = evaluate_batch(&records, &ctx()).into_iter().collect::<Result<_, _>>().unwrap();

        let output = tempfile::NamedTempFile::new().unwrap();
        write_results(output.path(), &results).unwrap();

        let contents = std::fs::read_to_string(output.path()).unwrap();
        let mut lines = contents.lines();
        assert_eq!(lines.next(), Some("Name,Birthdate,Death Date,Current Age,Deceased Age,Status"));
        assert_eq!(lines.next(), Some("Ada,1985-03-15,,40,,Living"));
        assert_eq!(lines.next(), Some("Albert Einstein,1879-03-14,1955-04-18,146,76,Deceased"));
    }
}
