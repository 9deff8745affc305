use aevum::{AgeResult, ParseFlags, RecordError, Status};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

use ansi::Palette;

/// Render the evaluated batch: one block per person, failures as warnings,
/// and a one-line tally at the end.
pub fn print_outcomes(outcomes: &[Result<AgeResult, RecordError>], color: bool) {
    let palette = Palette::new(color);

    println!("\n{}", palette.paint("=".repeat(80), ansi::GRAY));
    println!("{}", palette.bold("RESULTS"));
    println!("{}", palette.paint("=".repeat(80), ansi::GRAY));
    println!();

    let mut ok = 0usize;
    let mut failed = 0usize;

    for outcome in outcomes {
        match outcome {
            Ok(result) => {
                ok += 1;
                print_result(result, &palette);
            }
            Err(err) => {
                failed += 1;
                println!("{}", palette.paint(format!("warning: {err} (record skipped)"), ansi::YELLOW));
                println!();
            }
        }
    }

    let tally = format!("{ok} processed, {failed} skipped");
    println!("{}", palette.dim(tally));
}

fn print_result(result: &AgeResult, palette: &Palette) {
    println!("Name: {}", palette.bold(&result.name));
    println!("  Birthdate: {}", result.birth);

    match result.status {
        Status::Deceased => {
            if let Some(death) = result.death {
                println!("  Death Date: {death}");
            }
            println!("  Age at Death: {} years", result.current_or_death_age);
            if let Some(age) = result.would_be_age_today {
                println!("  Would be Age Today: {age} years");
            }
        }
        Status::Living => {
            println!("  Current Age: {} {}", result.current_or_death_age, palette.paint("years", ansi::GREEN));
        }
    }

    for note in flag_notes(result.flags) {
        println!("  {}", palette.dim(format!("note: {note}")));
    }
    println!();
}

fn flag_notes(flags: ParseFlags) -> Vec<&'static str> {
    let mut notes = Vec::new();
    if flags.contains(ParseFlags::TWO_DIGIT_YEAR) {
        notes.push("a two-digit year was pivoted to the most recent matching year");
    }
    if flags.contains(ParseFlags::MONTH_FIRST_ASSUMED) {
        notes.push("ambiguous numeric date read month-first (the documented default)");
    }
    notes
}
