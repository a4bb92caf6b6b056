//! Binds events to calendar days.
//!
//! An event belongs to the day its start timestamp falls on, and only that
//! day, even when it runs past midnight. Events keep the relative order they
//! have in the collection; nothing here sorts by time.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::models::event::Event;

/// Events starting on `date`, in collection order.
pub fn events_on(events: &[Event], date: NaiveDate) -> impl Iterator<Item = &Event> + '_ {
    events.iter().filter(move |e| e.start_date() == date)
}

/// Group events by start date, keeping collection order inside each day.
pub fn index_by_start_date(events: &[Event]) -> HashMap<NaiveDate, Vec<&Event>> {
    let mut index: HashMap<NaiveDate, Vec<&Event>> = HashMap::new();
    for event in events {
        index.entry(event.start_date()).or_default().push(event);
    }
    index
}

/// Chronological copy of a day's events for callers that want it.
pub fn sorted_by_start<'a>(events: impl IntoIterator<Item = &'a Event>) -> Vec<&'a Event> {
    let mut sorted: Vec<&Event> = events.into_iter().collect();
    sorted.sort_by_key(|e| e.start);
    sorted
}
