//! LineCal command-line renderer.
//!
//! # Responsibility
//! - Parse a config file and ad-hoc events from the command line.
//! - Drive `CalendarService` over an in-memory source and print text layouts.
//!
//! Rendering is presentation only; every placement decision comes from core.

mod render;

use chrono::{Datelike, NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use linecal_core::calendar::date::{date_from_ymd, local_today, next_day_start, start_of_day};
use linecal_core::config::CONFIG_PATH_ENV;
use linecal_core::{
    init_logging, CalendarConfig, CalendarEvent, CalendarService, InMemoryEventSource,
};
use log::info;
use std::error::Error;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "linecal", version, about = "Linear year calendar in the terminal")]
struct Cli {
    /// JSON config file.
    #[arg(long, global = true, env = CONFIG_PATH_ENV)]
    config: Option<PathBuf>,
    /// Event as `title|start|end`; dates are `YYYY-MM-DD` (all-day) or `YYYY-MM-DDTHH:MM`.
    #[arg(long = "event", global = true)]
    events: Vec<String>,
    /// Override today's date (`YYYY-MM-DD`).
    #[arg(long, global = true)]
    today: Option<NaiveDate>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Linear year view: one row per month.
    Year {
        #[arg(long)]
        year: Option<i32>,
    },
    /// Classic month grid.
    Month {
        #[arg(long)]
        year: Option<i32>,
        #[arg(long)]
        month: Option<u32>,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("linecal: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn Error>> {
    let config = match &cli.config {
        Some(path) => CalendarConfig::from_file(path)?,
        None => CalendarConfig::default(),
    };
    if let Some(logging) = config.logging() {
        init_logging(&logging)?;
    }

    let events = cli
        .events
        .iter()
        .enumerate()
        .map(|(index, raw)| parse_event(index, raw))
        .collect::<Result<Vec<_>, _>>()?;
    info!(
        "event=cli_start module=cli status=ok core_version={} events={}",
        linecal_core::core_version(),
        events.len()
    );

    let today = cli.today.unwrap_or_else(local_today);
    let mut service =
        CalendarService::with_config(InMemoryEventSource::with_events(events), &config);
    service.request_access();

    match cli.command {
        Commands::Year { year } => {
            let anchor = anchor_date(year.unwrap_or_else(|| today.year()), 1, 1)?;
            service.refresh_year(anchor);
            let layout = service.layout_year(anchor, today);
            print!("{}", render::year(&layout));
        }
        Commands::Month { year, month } => {
            let anchor = match (year, month) {
                (None, None) => today,
                (year, month) => anchor_date(
                    year.unwrap_or_else(|| today.year()),
                    month.unwrap_or(1),
                    1,
                )?,
            };
            service.refresh_year(anchor);
            let grid = service.layout_month_grid(anchor, today);
            print!("{}", render::month_grid(&grid));
        }
    }

    if let Some(notice) = service.take_notice() {
        eprintln!("note: {notice}");
    }
    Ok(())
}

fn anchor_date(year: i32, month: u32, day: u32) -> Result<NaiveDate, Box<dyn Error>> {
    Ok(date_from_ymd(year, month, day)?)
}

fn parse_event(index: usize, raw: &str) -> Result<CalendarEvent, Box<dyn Error>> {
    let parts: Vec<&str> = raw.split('|').map(str::trim).collect();
    let [title, start, end] = parts.as_slice() else {
        return Err(format!("event `{raw}` must look like `title|start|end`").into());
    };
    let (start, start_all_day) = parse_instant(start)?;
    let (end, end_all_day) = parse_instant(end)?;
    let is_all_day = start_all_day && end_all_day;
    // All-day input names the last day inclusively; store an exclusive midnight end.
    let end = if end_all_day {
        next_day_start(end.date())
    } else {
        end
    };
    let event = CalendarEvent::with_id(format!("cli-{index}"), *title, start, end)?;
    Ok(event.all_day(is_all_day))
}

fn parse_instant(raw: &str) -> Result<(NaiveDateTime, bool), Box<dyn Error>> {
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok((start_of_day(date), true));
    }
    let instant = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map_err(|err| format!("invalid date `{raw}`: {err}"))?;
    Ok((instant, false))
}

#[cfg(test)]
mod tests {
    use super::{parse_event, parse_instant};
    use chrono::NaiveDate;

    #[test]
    fn all_day_event_end_is_inclusive_on_input() {
        let event = parse_event(0, "Trip|2024-01-30|2024-02-02").expect("valid event");
        assert!(event.is_all_day());
        assert_eq!(
            event.last_day(),
            NaiveDate::from_ymd_opt(2024, 2, 2).expect("valid date")
        );
        assert_eq!(event.id(), "cli-0");
    }

    #[test]
    fn timed_event_keeps_exact_instants() {
        let event = parse_event(3, "Standup|2024-05-06T09:00|2024-05-06T09:15").expect("valid");
        assert!(!event.is_all_day());
        assert!(!event.is_multi_day());
    }

    #[test]
    fn malformed_events_are_rejected() {
        assert!(parse_event(0, "missing end|2024-01-01").is_err());
        assert!(parse_event(0, "backwards|2024-02-02|2024-01-01").is_err());
        assert!(parse_instant("01/02/2024").is_err());
    }
}
