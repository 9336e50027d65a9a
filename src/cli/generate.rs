use std::path::PathBuf;

use anyhow::Result;
use clap::{ArgGroup, Args};
use luach_recurrence::{
    AnchorInput, EventConfig, RecurrenceEngine, build_calendar, ics::IcsOptions,
};
use luach_solar::SpaSunset;
use time::{Date, OffsetDateTime, macros::format_description};
use time_tz::{ToTimezone, timezones};

use crate::{config::Config, locations::LocationRegistry};

#[derive(Debug, Args)]
#[command(group(
    ArgGroup::new("anchor")
        .required(true)
        .args(["date", "hebrew_month"]),
))]
pub struct GenerateArgs {
    /// Event title
    #[arg(long)]
    pub title: String,

    /// Civil anchor date (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub date: Option<Date>,

    /// The event happened after sunset on --date
    #[arg(long, requires = "date")]
    pub after_sunset: bool,

    /// Hebrew month (1 = Nisan ... 12 = Adar / Adar I, 13 = Adar II)
    #[arg(long, requires = "hebrew_day")]
    pub hebrew_month: Option<u8>,

    /// Hebrew day of month (1-30)
    #[arg(long, requires = "hebrew_month")]
    pub hebrew_day: Option<u8>,

    /// Location name (defaults to the configured default location)
    #[arg(long)]
    pub location: Option<String>,

    /// Skip the sunset events
    #[arg(long)]
    pub no_sunset: bool,

    /// Write the calendar here instead of stdout
    #[arg(long, short)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs {
    fn anchor_input(&self) -> Result<AnchorInput> {
        match (self.date, self.hebrew_month, self.hebrew_day) {
            (Some(date), _, _) => Ok(AnchorInput::Gregorian {
                year: date.year(),
                month: u8::from(date.month()),
                day: date.day(),
                after_sunset: self.after_sunset,
            }),
            (None, Some(month), Some(day)) => Ok(AnchorInput::Hebrew { month, day }),
            _ => anyhow::bail!("either --date or --hebrew-month with --hebrew-day is required"),
        }
    }
}

fn parse_date(value: &str) -> Result<Date, String> {
    Date::parse(value, format_description!("[year]-[month]-[day]"))
        .map_err(|e| format!("expected YYYY-MM-DD: {e}"))
}

#[tracing::instrument(skip_all, fields(title = %args.title))]
pub fn run(config: Config, args: GenerateArgs) -> Result<()> {
    let locations = LocationRegistry::from_config(&config)?;
    let location = match &args.location {
        Some(name) => locations.resolve(name),
        None => locations.default_location(),
    };

    let now = OffsetDateTime::now_utc();
    let today = match timezones::get_by_name(&location.timezone) {
        Some(tz) => now.to_timezone(tz).date(),
        None => now.date(),
    };

    let event_config = EventConfig {
        title: args.title.clone(),
        create_sunset_event: !args.no_sunset,
        location: location.geo(),
        timezone: location.timezone.clone(),
        sunset_title_prefix: config.calendar.sunset_title_prefix.clone(),
        uid_domain: config.calendar.uid_domain.clone(),
    };
    let engine = RecurrenceEngine::new(config.calendar.horizon_years);

    let calendar = build_calendar(
        args.anchor_input()?,
        today,
        &event_config,
        &engine,
        &SpaSunset,
    )?;
    let body = calendar.render(&IcsOptions::download(now));

    match &args.output {
        Some(path) => {
            std::fs::write(path, body)?;
            tracing::info!(
                path = %path.display(),
                events = calendar.occurrences.len(),
                "Calendar written"
            );
        }
        None => print!("{body}"),
    }

    Ok(())
}
