// Settings module
// User-level calendar preferences, stored as TOML

use std::path::PathBuf;

use chrono::Weekday;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::access::Role;
use crate::models::ui::ViewMode;
use crate::utils::date::weekday_from_index;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// 0 = Sunday, 1 = Monday, ... 6 = Saturday
    pub first_day_of_week: u8,
    pub show_week_numbers: bool,
    /// IANA zone used to decide which day is "today"; local time when unset
    pub timezone: Option<String>,
    pub default_view: ViewMode,
    /// Minimum role allowed to drag events to another day
    pub reschedule_role: Role,
    /// JSON file with events; the built-in sample events are used when unset
    pub events_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_day_of_week: 1, // Monday
            show_week_numbers: false,
            timezone: None,
            default_view: ViewMode::Month,
            reschedule_role: Role::Employee,
            events_file: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SettingsError {
    #[error("first_day_of_week must be between 0 (Sunday) and 6 (Saturday), got {0}")]
    InvalidFirstDay(u8),
    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),
}

impl Settings {
    pub fn validate(&self) -> Result<(), SettingsError> {
        if weekday_from_index(self.first_day_of_week).is_none() {
            return Err(SettingsError::InvalidFirstDay(self.first_day_of_week));
        }
        self.tz()?;
        Ok(())
    }

    /// First column of the grid. Falls back to Monday for out-of-range values.
    pub fn week_start(&self) -> Weekday {
        weekday_from_index(self.first_day_of_week).unwrap_or(Weekday::Mon)
    }

    /// Parsed timezone, if one is configured.
    pub fn tz(&self) -> Result<Option<chrono_tz::Tz>, SettingsError> {
        match self.timezone.as_deref() {
            None => Ok(None),
            Some(name) => name
                .parse::<chrono_tz::Tz>()
                .map(Some)
                .map_err(|_| SettingsError::UnknownTimezone(name.to_string())),
        }
    }
}
