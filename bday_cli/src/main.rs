use bday_core::*;
use chrono::{Datelike, Local, NaiveDate};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "bday")]
#[command(about = "Birthday milestone reminder", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Birthday file: one Name<TAB>MM/DD[/YYYY] per line
    #[arg(long, global = true)]
    file: Option<PathBuf>,

    /// Verbose logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// List upcoming milestones sorted by proximity (default)
    Upcoming {
        /// Reference date, MM/DD/YYYY or MM/DD (current year); defaults to today
        #[arg(long)]
        today: Option<String>,

        /// How many days ahead to look
        #[arg(long)]
        days_ahead: Option<i64>,

        /// Maximum number of rows
        #[arg(long)]
        max: Option<usize>,

        /// Period selector, subset of "ymwdh": y=1 year, m=100 months,
        /// w=100 weeks, d=1000 days, h=half year
        #[arg(long)]
        periods: Option<String>,

        /// Emit milestones as JSON lines
        #[arg(long)]
        json: bool,
    },

    /// Search people by name
    Search {
        /// Name query; omit to list everyone
        query: Option<String>,

        /// Reference date for ages, MM/DD/YYYY or MM/DD; defaults to today
        #[arg(long)]
        today: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        logging::init_with_level("debug");
    } else {
        logging::init();
    }

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::load()?;
    let file = cli
        .file
        .or_else(|| config.data.file.clone())
        .ok_or_else(|| {
            Error::Config("no birthday file; pass --file or set data.file in config.toml".into())
        })?;

    match cli.command {
        Some(Commands::Upcoming {
            today,
            days_ahead,
            max,
            periods,
            json,
        }) => cmd_upcoming(&file, &config, today, days_ahead, max, periods, json),
        Some(Commands::Search { query, today }) => cmd_search(&file, query, today),
        None => cmd_upcoming(&file, &config, None, None, None, None, false),
    }
}

fn cmd_upcoming(
    file: &Path,
    config: &Config,
    today: Option<String>,
    days_ahead: Option<i64>,
    max: Option<usize>,
    periods: Option<String>,
    json: bool,
) -> Result<()> {
    let today = reference_date(today.as_deref())?;
    let days_ahead = days_ahead.unwrap_or(config.remind.days_ahead);
    let max = max.unwrap_or(config.remind.max_results);
    let code = periods.unwrap_or_else(|| config.remind.periods.clone());

    let entries = load_file(file)?;
    let periods = periods_from_code(&code);
    tracing::debug!(
        "reminding for {} entries, {} periods, {} days ahead",
        entries.len(),
        periods.len(),
        days_ahead
    );

    let reminder = Reminder::new(&entries, &periods, today)?;
    for milestone in reminder
        .take_while(|m| m.days_away < days_ahead)
        .take(max)
    {
        if json {
            println!("{}", serde_json::to_string(&milestone)?);
        } else {
            let marker = if milestone.days_away == 0 { "*" } else { " " };
            println!(
                "{} {} {:>18}  {}",
                marker,
                calendar::to_string_with_weekday(milestone.date)?,
                milestone.age_label(),
                milestone.name
            );
        }
    }
    Ok(())
}

fn cmd_search(file: &Path, query: Option<String>, today: Option<String>) -> Result<()> {
    let today = reference_date(today.as_deref())?;
    let query = Query::new(query.as_deref().unwrap_or(""));

    let entries = load_file(file)?;
    let matched: Vec<Entry> = entries
        .into_iter()
        .filter(|e| query.matches(&e.name))
        .collect();

    println!(
        "{:<24} {:>10} {:>7} {:>7} {:>7} {:>7}",
        "Name", "Birthday", "Years", "Months", "Weeks", "Days"
    );
    for entry in entries_sorted_by_name(&matched) {
        let birthday = calendar::to_string(entry.birthday);
        if calendar::has_year(entry.birthday) {
            println!(
                "{:<24} {:>10} {:>7} {:>7} {:>7} {:>7}",
                entry.name,
                birthday,
                calendar::diff_in_years(today, entry.birthday),
                calendar::diff_in_months(today, entry.birthday),
                calendar::diff_in_weeks(today, entry.birthday),
                calendar::diff_in_days(today, entry.birthday)
            );
        } else {
            println!(
                "{:<24} {:>10} {:>7} {:>7} {:>7} {:>7}",
                entry.name, birthday, "?", "?", "?", "?"
            );
        }
    }
    Ok(())
}

/// Resolves the reference date: the given text as MM/DD/YYYY, MM/DD against
/// the current year, or today's local date when absent.
fn reference_date(arg: Option<&str>) -> Result<NaiveDate> {
    let today = Local::now().date_naive();
    match arg {
        None => Ok(today),
        Some(text) => {
            let parsed = calendar::parse(text)?;
            if calendar::has_year(parsed) {
                Ok(parsed)
            } else {
                Ok(calendar::ymd_normalized(
                    today.year() as i64,
                    parsed.month() as i64,
                    parsed.day() as i64,
                ))
            }
        }
    }
}
