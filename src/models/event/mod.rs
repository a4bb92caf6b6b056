// Event module
// Schedulable CRM item (interview, follow-up, meeting) shown on the calendar

use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::utils::date::shift_days;

/// What kind of appointment an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Interview,
    Followup,
    Meeting,
    #[default]
    Other,
}

impl EventKind {
    /// Capitalised display name ("Interview", "Followup", ...).
    pub fn label(&self) -> &'static str {
        match self {
            Self::Interview => "Interview",
            Self::Followup => "Followup",
            Self::Meeting => "Meeting",
            Self::Other => "Other",
        }
    }
}

/// CRM record an event is attached to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventLink {
    #[serde(rename = "candidate_id")]
    Candidate(String),
    #[serde(rename = "company_id")]
    Company(String),
}

/// Calendar event. Timestamps are local wall-clock values without a zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(flatten)]
    pub link: Option<EventLink>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: EventKind,
}

/// Reasons an event is rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EventValidationError {
    #[error("Event id cannot be empty")]
    EmptyId,
    #[error("Event title cannot be empty")]
    EmptyTitle,
    #[error("Event end time cannot be before start time")]
    EndBeforeStart,
    #[error("Color must be in hex format (#RRGGBB or #RGB)")]
    InvalidColor,
    #[error("Event {0} is required")]
    MissingField(&'static str),
}

impl Event {
    /// Create a new event with required fields
    ///
    /// # Examples
    /// ```
    /// use recruit_calendar::models::event::{Event, EventKind};
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap().and_hms_opt(10, 0, 0).unwrap();
    /// let end = start + chrono::Duration::hours(1);
    /// let event = Event::new("1", "Interview with John Smith", start, end, EventKind::Interview).unwrap();
    /// assert_eq!(event.time_range_label(), "10:00 - 11:00");
    /// ```
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        kind: EventKind,
    ) -> Result<Self, EventValidationError> {
        let event = Self {
            id: id.into(),
            title: title.into(),
            start,
            end,
            color: None,
            link: None,
            description: None,
            kind,
        };
        event.validate()?;
        Ok(event)
    }

    /// Create a builder for constructing events with optional fields
    pub fn builder() -> EventBuilder {
        EventBuilder::new()
    }

    /// Validate the event
    pub fn validate(&self) -> Result<(), EventValidationError> {
        if self.id.trim().is_empty() {
            return Err(EventValidationError::EmptyId);
        }

        if self.title.trim().is_empty() {
            return Err(EventValidationError::EmptyTitle);
        }

        if self.end < self.start {
            return Err(EventValidationError::EndBeforeStart);
        }

        if let Some(ref color) = self.color {
            if !is_valid_hex_color(color) {
                return Err(EventValidationError::InvalidColor);
            }
        }

        Ok(())
    }

    /// Calendar day the event is bound to.
    pub fn start_date(&self) -> NaiveDate {
        self.start.date()
    }

    /// Get the duration of the event
    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Copy of this event moved by whole calendar days.
    ///
    /// Time of day and duration are kept. Returns `None` if the shift leaves
    /// chrono's representable range.
    pub fn shifted_by_days(&self, days: i64) -> Option<Self> {
        Some(Self {
            start: shift_days(self.start, days)?,
            end: shift_days(self.end, days)?,
            ..self.clone()
        })
    }

    /// "HH:MM - HH:MM" label used in cells and the detail view.
    pub fn time_range_label(&self) -> String {
        format!("{} - {}", self.start.format("%H:%M"), self.end.format("%H:%M"))
    }

    pub fn candidate_id(&self) -> Option<&str> {
        match self.link {
            Some(EventLink::Candidate(ref id)) => Some(id),
            _ => None,
        }
    }

    pub fn company_id(&self) -> Option<&str> {
        match self.link {
            Some(EventLink::Company(ref id)) => Some(id),
            _ => None,
        }
    }
}

/// Check if a string is a #RGB or #RRGGBB hex color.
fn is_valid_hex_color(color: &str) -> bool {
    match color.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}

/// Builder for creating events with optional fields
#[derive(Default)]
pub struct EventBuilder {
    id: Option<String>,
    title: Option<String>,
    start: Option<NaiveDateTime>,
    end: Option<NaiveDateTime>,
    color: Option<String>,
    link: Option<EventLink>,
    description: Option<String>,
    kind: EventKind,
}

impl EventBuilder {
    /// Create a new event builder
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn start(mut self, start: NaiveDateTime) -> Self {
        self.start = Some(start);
        self
    }

    pub fn end(mut self, end: NaiveDateTime) -> Self {
        self.end = Some(end);
        self
    }

    /// Set the event color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn candidate(mut self, candidate_id: impl Into<String>) -> Self {
        self.link = Some(EventLink::Candidate(candidate_id.into()));
        self
    }

    pub fn company(mut self, company_id: impl Into<String>) -> Self {
        self.link = Some(EventLink::Company(company_id.into()));
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn kind(mut self, kind: EventKind) -> Self {
        self.kind = kind;
        self
    }

    /// Build the event
    pub fn build(self) -> Result<Event, EventValidationError> {
        let id = self.id.ok_or(EventValidationError::MissingField("id"))?;
        let title = self.title.ok_or(EventValidationError::MissingField("title"))?;
        let start = self.start.ok_or(EventValidationError::MissingField("start time"))?;
        let end = self.end.ok_or(EventValidationError::MissingField("end time"))?;

        let event = Event {
            id,
            title,
            start,
            end,
            color: self.color,
            link: self.link,
            description: self.description,
            kind: self.kind,
        };

        event.validate()?;
        Ok(event)
    }
}
