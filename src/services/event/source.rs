//! Where the calendar's events come from.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::models::event::{Event, EventKind};

/// Provider of the event collection shown on the calendar.
pub trait EventSource {
    fn load(&self) -> Result<Vec<Event>>;
}

/// Built-in demo events placed in the month of `month`.
#[derive(Debug, Clone, Copy)]
pub struct SampleEventSource {
    month: NaiveDate,
}

impl SampleEventSource {
    pub fn for_month(month: NaiveDate) -> Self {
        Self { month }
    }

    fn at(&self, day: u32, hour: u32, minute: u32) -> Result<NaiveDateTime> {
        NaiveDate::from_ymd_opt(self.month.year(), self.month.month(), day)
            .and_then(|date| date.and_hms_opt(hour, minute, 0))
            .with_context(|| format!("Sample event day {} does not exist in {}", day, self.month))
    }
}

impl EventSource for SampleEventSource {
    fn load(&self) -> Result<Vec<Event>> {
        let events = vec![
            Event::builder()
                .id("1")
                .title("Interview with John Smith")
                .start(self.at(15, 10, 0)?)
                .end(self.at(15, 11, 0)?)
                .color("#3B82F6")
                .candidate("cand-1")
                .kind(EventKind::Interview)
                .build()?,
            Event::builder()
                .id("2")
                .title("Tech assessment with Sarah Lee")
                .start(self.at(18, 14, 0)?)
                .end(self.at(18, 15, 30)?)
                .color("#10B981")
                .candidate("cand-2")
                .kind(EventKind::Interview)
                .build()?,
            Event::builder()
                .id("3")
                .title("Client meeting with TechCorp")
                .start(self.at(20, 9, 0)?)
                .end(self.at(20, 10, 0)?)
                .color("#8B5CF6")
                .company("comp-1")
                .kind(EventKind::Meeting)
                .build()?,
            Event::builder()
                .id("4")
                .title("Follow-up call with Mark Johnson")
                .start(self.at(22, 13, 0)?)
                .end(self.at(22, 13, 30)?)
                .color("#F59E0B")
                .candidate("cand-3")
                .kind(EventKind::Followup)
                .build()?,
        ];
        Ok(events)
    }
}

/// Events read from a JSON array on disk.
#[derive(Debug, Clone)]
pub struct JsonEventSource {
    path: PathBuf,
}

impl JsonEventSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl EventSource for JsonEventSource {
    fn load(&self) -> Result<Vec<Event>> {
        let content = std::fs::read_to_string(&self.path)
            .with_context(|| format!("Failed to read events file {}", self.path.display()))?;
        let events: Vec<Event> = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse events file {}", self.path.display()))?;
        log::info!("Loaded {} events from {}", events.len(), self.path.display());
        Ok(events)
    }
}
