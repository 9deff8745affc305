mod report;

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::{Path, PathBuf};

use aevum::{CalendarDate, Context, SourceError, evaluate_batch, read_records, write_results};
use chrono::{Datelike, Local, NaiveDate};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

struct CliConfig {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    reference: Option<CalendarDate>,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;
    let mut reference: Option<CalendarDate> = None;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1);

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                println!("{}", help_text());
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("aevum {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--input" | "-i" => {
                let value = args.next().ok_or_else(|| "error: --input expects a value".to_string())?;
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(PathBuf::from(value));
            }
            "--output" | "-o" => {
                let value = args.next().ok_or_else(|| "error: --output expects a value".to_string())?;
                output = Some(PathBuf::from(value));
            }
            "--reference" => {
                let value = args.next().ok_or_else(|| "error: --reference expects a value".to_string())?;
                reference = Some(parse_reference(&value)?);
            }
            _ if arg.starts_with("--input=") => {
                let value = arg.trim_start_matches("--input=");
                if input.is_some() {
                    return Err("error: input provided multiple times".to_string());
                }
                input = Some(PathBuf::from(value));
            }
            _ if arg.starts_with("--output=") => {
                output = Some(PathBuf::from(arg.trim_start_matches("--output=")));
            }
            _ if arg.starts_with("--reference=") => {
                reference = Some(parse_reference(arg.trim_start_matches("--reference="))?);
            }
            _ => {
                return Err(format!("error: unknown option '{arg}'\n\n{}", help_text()));
            }
        }
    }

    Ok(CliConfig { input, output, reference, color })
}

fn parse_reference(value: &str) -> Result<CalendarDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|d| CalendarDate::new(d.year(), d.month(), d.day()))
        .ok_or_else(|| format!("error: invalid --reference '{value}' (expected YYYY-MM-DD)"))
}

fn run(config: &CliConfig) -> Result<(), SourceError> {
    let ctx = match config.reference {
        Some(today) => Context { today },
        None => Context::default(),
    };
    match &config.input {
        Some(path) => run_batch(path, config.output.as_deref(), &ctx, config.color),
        None => interactive(config.output.as_deref(), &ctx, config.color),
    }
}

fn run_batch(path: &Path, output: Option<&Path>, ctx: &Context, color: bool) -> Result<(), SourceError> {
    let records = read_records(path)?;
    println!("Loaded {} record(s) from {}.", records.len(), path.display());

    let outcomes = evaluate_batch(&records, ctx);
    report::print_outcomes(&outcomes, color);

    if let Some(path) = output {
        let results: Vec<_> = outcomes.into_iter().filter_map(Result::ok).collect();
        write_results(path, &results)?;
        println!("Results saved to: {}", path.display());
    }

    Ok(())
}

// --- Interactive mode -------------------------------------------------------

fn interactive(output: Option<&Path>, ctx: &Context, color: bool) -> Result<(), SourceError> {
    println!("{}", "=".repeat(60));
    println!("Age Calculator");
    println!("{}", "=".repeat(60));
    println!();

    let records = if prompt_yes_no("Do you have a CSV file with names and dates? (yes/no): ")? {
        match load_csv_interactively()? {
            Some(records) => records,
            None => return Ok(()),
        }
    } else {
        manual_entry()?
    };

    if records.is_empty() {
        println!("\nNo data to process. Exiting.");
        return Ok(());
    }

    let outcomes = evaluate_batch(&records, ctx);
    report::print_outcomes(&outcomes, color);

    let results: Vec<_> = outcomes.into_iter().filter_map(Result::ok).collect();
    if results.is_empty() {
        return Ok(());
    }

    match output {
        Some(path) => {
            write_results(path, &results)?;
            println!("Results saved to: {}", path.display());
        }
        None => {
            if prompt_yes_no("Save results to CSV file? (yes/no): ")? {
                let default = Local::now().format("age_results_%Y%m%d_%H%M%S.csv").to_string();
                let mut filename = prompt(&format!("Enter filename (default: {default}): "))?;
                if filename.is_empty() {
                    filename = default;
                }
                if !filename.ends_with(".csv") {
                    filename.push_str(".csv");
                }
                write_results(Path::new(&filename), &results)?;
                println!("Results saved to: {filename}");
            }
        }
    }

    Ok(())
}

/// Prompt for a CSV path until one loads, the user gives up, or the file's
/// columns are unusable. `Ok(None)` means the user declined to continue.
fn load_csv_interactively() -> Result<Option<Vec<aevum::PersonRecord>>, SourceError> {
    loop {
        let path = prompt("\nEnter the path to your CSV file: ")?;
        if path.is_empty() {
            return Ok(None);
        }

        match read_records(Path::new(&path)) {
            Ok(records) => {
                println!("Successfully loaded {} record(s) from CSV.", records.len());
                return Ok(Some(records));
            }
            Err(err @ (SourceError::NotFound(_) | SourceError::Csv(_))) => {
                println!("Error: {err}");
                if !prompt_yes_no("Try another file? (yes/no): ")? {
                    return Ok(None);
                }
            }
            // A bad column layout won't be fixed by retyping the path.
            Err(err) => return Err(err),
        }
    }
}

fn manual_entry() -> Result<Vec<aevum::PersonRecord>, SourceError> {
    println!("\nManual Entry Mode");
    println!("{}", "=".repeat(60));
    println!("Date formats supported: YYYY-MM-DD, MM/DD/YYYY, DD/MM/YYYY, Month D YYYY, ...");
    println!("Press Enter without a name to finish entering data.");
    println!();

    let mut records = Vec::new();
    loop {
        let name = prompt("Enter name: ")?;
        if name.is_empty() {
            break;
        }

        let birthdate = prompt("Enter birthdate: ")?;
        if birthdate.is_empty() {
            println!("Birthdate is required. Skipping this entry.\n");
            continue;
        }

        let death_date = if prompt_yes_no("Is this person deceased? (yes/no): ")? {
            let value = prompt("Enter death date: ")?;
            if value.is_empty() { None } else { Some(value) }
        } else {
            None
        };

        println!("Added {name}\n");
        records.push(aevum::PersonRecord::new(name, birthdate, death_date));
    }

    Ok(records)
}

// --- Prompt helpers ---------------------------------------------------------

fn prompt(message: &str) -> Result<String, SourceError> {
    print!("{message}");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

fn prompt_yes_no(message: &str) -> Result<bool, SourceError> {
    loop {
        match prompt(message)?.to_lowercase().as_str() {
            "yes" | "y" => return Ok(true),
            // EOF reads back as an empty line; treat it as a "no" so piped
            // input can't spin forever.
            "no" | "n" | "" => return Ok(false),
            _ => println!("Please enter 'yes' or 'no'."),
        }
    }
}

fn help_text() -> String {
    format!(
        "aevum {version}

Date normalizer and age calculator.

Usage:
  aevum                       Interactive mode.
  aevum [OPTIONS] --input <csv>

Options:
  -i, --input <csv>          CSV file with name/birthdate (and optional
                             death date) columns.
  -o, --output <csv>         Write results to this CSV file.
  --reference <date>         Reference date in YYYY-MM-DD (default: today).
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Exit codes:
  0  Success.
  1  Processing error.
  2  Invalid arguments.
",
        version = env!("CARGO_PKG_VERSION")
    )
}
