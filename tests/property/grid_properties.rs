// Property-based tests for the month grid, event binding and drag rescheduling
// Checks the grid invariants over random months and event sets

#[path = "../fixtures/mod.rs"]
mod fixtures;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use proptest::prelude::*;

use recruit_calendar::models::event::{Event, EventKind};
use recruit_calendar::services::calendar::build_month_grid;
use recruit_calendar::services::calendar::drag::{rescheduled_to, DragRescheduler};
use recruit_calendar::services::event::EventStore;
use recruit_calendar::utils::date::days_in_month;

fn weekday_strategy() -> impl Strategy<Value = Weekday> {
    (0u8..7).prop_map(|i| recruit_calendar::utils::date::weekday_from_index(i).unwrap())
}

fn month_strategy() -> impl Strategy<Value = NaiveDate> {
    (1900..2200i32, 1..=12u32).prop_map(|(y, m)| NaiveDate::from_ymd_opt(y, m, 1).unwrap())
}

fn timestamp_strategy() -> impl Strategy<Value = NaiveDateTime> {
    (2023..2025i32, 1..=12u32, 1..=28u32, 0..24u32, 0..60u32).prop_map(|(y, mo, d, h, mi)| {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, 0)
            .unwrap()
    })
}

fn events_strategy() -> impl Strategy<Value = Vec<Event>> {
    prop::collection::vec((timestamp_strategy(), 0..(3 * 24 * 60i64)), 0..20).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (start, minutes))| {
                Event::new(
                    i.to_string(),
                    format!("Event {}", i),
                    start,
                    start + Duration::minutes(minutes),
                    EventKind::Meeting,
                )
                .unwrap()
            })
            .collect()
    })
}

proptest! {
    /// Property: rows cover the month and dates run without gaps or repeats
    #[test]
    fn prop_grid_is_contiguous(month in month_strategy(), week_start in weekday_strategy()) {
        let grid = build_month_grid(month, &[], month, week_start).unwrap();

        prop_assert!(grid.cell_count() >= days_in_month(month) as usize);
        prop_assert!(grid.cell_count() < days_in_month(month) as usize + 14);

        let dates: Vec<NaiveDate> = grid.cells().map(|c| c.date).collect();
        for pair in dates.windows(2) {
            prop_assert_eq!(pair[1] - pair[0], Duration::days(1));
        }
        prop_assert_eq!(dates[0].weekday(), week_start);
    }

    /// Property: every day of the month appears exactly once as a current-month cell
    #[test]
    fn prop_each_day_once_in_current_month(month in month_strategy(), week_start in weekday_strategy()) {
        let grid = build_month_grid(month, &[], month, week_start).unwrap();
        for day in 1..=days_in_month(month) {
            let date = month.with_day(day).unwrap();
            let hits = grid.cells().filter(|c| c.date == date && c.is_current_month).count();
            prop_assert_eq!(hits, 1);
        }
        let current = grid.cells().filter(|c| c.is_current_month).count();
        prop_assert_eq!(current, days_in_month(month) as usize);
    }

    /// Property: at most one today cell, and only if today lies in the displayed month
    #[test]
    fn prop_at_most_one_today(month in month_strategy(), offset in -60i64..60) {
        let today = month + Duration::days(offset);
        let grid = build_month_grid(month, &[], today, Weekday::Mon).unwrap();
        let flagged: Vec<_> = grid.cells().filter(|c| c.is_today).collect();

        prop_assert!(flagged.len() <= 1);
        let in_month = today.year() == month.year() && today.month() == month.month();
        if in_month {
            prop_assert_eq!(flagged.len(), 1);
            prop_assert_eq!(flagged[0].date, today);
            prop_assert!(flagged[0].is_current_month);
        } else {
            prop_assert!(flagged.is_empty());
        }
    }

    /// Property: an event is in a cell exactly when it starts on that cell's date
    #[test]
    fn prop_binding_matches_start_date(events in events_strategy(), month_offset in 0u32..24) {
        let month = NaiveDate::from_ymd_opt(2023 + (month_offset / 12) as i32, month_offset % 12 + 1, 1).unwrap();
        let grid = build_month_grid(month, &events, month, Weekday::Mon).unwrap();

        for cell in grid.cells() {
            for event in &events {
                let bound = cell.events.iter().any(|e| e.id == event.id);
                prop_assert_eq!(bound, event.start_date() == cell.date);
            }
        }
    }

    /// Property: moving an event keeps its duration and time of day
    #[test]
    fn prop_reschedule_preserves_duration(events in events_strategy(), day_shift in -400i64..400) {
        for event in &events {
            let target = event.start_date() + Duration::days(day_shift);
            let moved = rescheduled_to(event, target).unwrap();
            prop_assert_eq!(moved.duration(), event.duration());
            prop_assert_eq!(moved.start.time(), event.start.time());
            prop_assert_eq!(moved.start_date(), target);
        }
    }

    /// Property: dropping an event on its own start date leaves it unchanged
    #[test]
    fn prop_drop_on_own_day_is_identity(events in events_strategy()) {
        prop_assume!(!events.is_empty());
        let mut store = EventStore::new(events.clone()).unwrap();
        let mut drag = DragRescheduler::new();

        for event in &events {
            drag.begin(event, store.version());
            let moved = drag.drop_on(event.start_date(), &mut store).unwrap().unwrap();
            prop_assert_eq!(moved.diff_days, 0);
            prop_assert_eq!(&moved.updated, event);
        }
        prop_assert_eq!(store.events(), events.as_slice());
    }
}

#[test]
fn test_leap_february_grid() {
    let grid = build_month_grid(fixtures::dates::leap_day_2024(), &[], fixtures::dates::leap_day_2024(), Weekday::Mon).unwrap();
    let leap = grid.cell_for(fixtures::dates::leap_day_2024()).unwrap();
    assert!(leap.is_today);
    assert!(leap.is_current_month);
    assert_eq!(grid.weeks().len(), 5);
}
