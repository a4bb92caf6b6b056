// Test fixtures - reusable test data
// Provides consistent dates and events across the integration tests

#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use recruit_calendar::models::event::{Event, EventKind};

/// Sample dates for testing
pub mod dates {
    use super::*;

    pub fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    pub fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        ymd(year, month, day).and_hms_opt(hour, minute, 0).unwrap()
    }

    /// Thursday, June 1 2023
    pub fn june_1_2023() -> NaiveDate {
        ymd(2023, 6, 1)
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        ymd(2024, 2, 29)
    }
}

/// Sample events for testing
pub mod events {
    use super::*;

    /// June 15 2023, 10:00-11:00
    pub fn june_interview() -> Event {
        Event::builder()
            .id("1")
            .title("Interview with John Smith")
            .start(dates::at(2023, 6, 15, 10, 0))
            .end(dates::at(2023, 6, 15, 11, 0))
            .color("#3B82F6")
            .candidate("cand-1")
            .kind(EventKind::Interview)
            .build()
            .unwrap()
    }

    /// Crosses midnight from June 30 into July 1
    pub fn overnight_handover() -> Event {
        Event::builder()
            .id("night")
            .title("Overnight assessment centre")
            .start(dates::at(2023, 6, 30, 22, 0))
            .end(dates::at(2023, 7, 1, 2, 0))
            .kind(EventKind::Other)
            .build()
            .unwrap()
    }
}
