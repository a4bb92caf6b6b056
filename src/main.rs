// Recruit Calendar
// Command-line entry point: shows the calendar page and applies reschedules

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use recruit_calendar::models::access::User;
use recruit_calendar::models::ui::ViewMode;
use recruit_calendar::services::calendar::CalendarPage;
use recruit_calendar::services::clock::{Clock, FixedClock, SystemClock};
use recruit_calendar::services::event::{
    EventSource, EventStore, JsonEventSource, SampleEventSource,
};
use recruit_calendar::services::settings::SettingsService;
use recruit_calendar::ui::views::{
    render_day, render_event_details, render_month, render_week, MonthViewOptions,
};

#[derive(Parser)]
#[command(name = "recruit-calendar", version, about = "Recruitment CRM calendar")]
struct Cli {
    /// Settings file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,
    /// JSON events file; overrides the settings
    #[arg(long)]
    events: Option<PathBuf>,
    /// Month to display, as YYYY-MM
    #[arg(long, value_parser = parse_month)]
    month: Option<NaiveDate>,
    /// Pin "today" instead of reading the system clock, as YYYY-MM-DD
    #[arg(long)]
    today: Option<NaiveDate>,
    /// Sign in with this email (role follows the demo login rules)
    #[arg(long, default_value = "employee@agency.example")]
    user: String,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Show the calendar in the given view
    Show {
        #[arg(long, value_enum)]
        view: Option<ViewArg>,
    },
    /// Move an event to another day, keeping its time and duration
    Move { id: String, date: NaiveDate },
    /// Show one event's details
    Details { id: String },
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum ViewArg {
    Month,
    Week,
    Day,
}

impl From<ViewArg> for ViewMode {
    fn from(arg: ViewArg) -> Self {
        match arg {
            ViewArg::Month => ViewMode::Month,
            ViewArg::Week => ViewMode::Week,
            ViewArg::Day => ViewMode::Day,
        }
    }
}

fn parse_month(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(&format!("{}-01", value), "%Y-%m-%d")
        .map_err(|e| format!("expected YYYY-MM: {}", e))
}

fn main() -> Result<()> {
    // Initialize logging
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Starting Recruit Calendar");

    let settings_service = match cli.config {
        Some(ref path) => SettingsService::new(path),
        None => SettingsService::from_project_dirs()?,
    };
    let settings = settings_service.get()?;

    let clock: Box<dyn Clock> = match cli.today {
        Some(date) => Box::new(FixedClock(date)),
        None => Box::new(SystemClock::new(settings.tz()?)),
    };

    let events = match cli.events.as_ref().or(settings.events_file.as_ref()) {
        Some(path) => JsonEventSource::new(path).load()?,
        None => {
            let month = cli.month.unwrap_or_else(|| clock.today());
            SampleEventSource::for_month(month).load()?
        }
    };
    let store = EventStore::new(events).context("Event collection rejected")?;

    let user = User::demo_login(cli.user.as_str());
    let mut page = CalendarPage::new(store, settings, clock, Some(user));
    if let Some(month) = cli.month {
        page.set_current_date(month);
    }

    let options = MonthViewOptions {
        show_week_numbers: page.settings().show_week_numbers,
        list_events: true,
    };

    match cli.command.unwrap_or(Command::Show { view: None }) {
        Command::Show { view } => {
            if let Some(view) = view {
                page.set_view_mode(view.into());
            }
            let text = match page.view_mode() {
                ViewMode::Month => render_month(&page.grid()?, options),
                ViewMode::Week => render_week(&page.week()?),
                ViewMode::Day => render_day(page.day_events()),
            };
            print!("{}", text);
        }
        Command::Move { id, date } => {
            page.begin_drag(&id)?;
            let moved = page
                .drop_on(date)?
                .ok_or_else(|| anyhow!("Nothing was moved"))?;
            println!(
                "Moved '{}' from {} to {}",
                moved.updated.title, moved.previous.start, moved.updated.start
            );
            page.set_current_date(date);
            print!("{}", render_month(&page.grid()?, options));
        }
        Command::Details { id } => {
            let event = page.select(&id)?;
            print!("{}", render_event_details(event));
        }
    }

    Ok(())
}
