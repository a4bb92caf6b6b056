//! Month grid construction.
//!
//! The grid always covers the whole month in full weeks: filler days from the
//! neighbouring months pad the first and last rows so every row has exactly
//! seven cells. With the default Monday start the first row opens with
//! `weekday_index(1st) - 1` filler days, where Monday is 1 and Sunday is 7.

use std::collections::HashMap;

use chrono::{Datelike, Days, NaiveDate, Weekday};
use thiserror::Error;

use super::binder::index_by_start_date;
use crate::models::event::Event;
use crate::utils::date::{days_in_month, days_since_week_start, first_of_month};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("the grid for {} runs past the supported date range", .0.format("%Y-%m"))]
    OutOfRange(NaiveDate),
}

/// One day slot of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Events starting on `date`, in collection order
    pub events: Vec<Event>,
    pub is_current_month: bool,
    pub is_today: bool,
}

/// Seven consecutive cells starting at the configured first weekday.
pub type WeekRow = [CalendarCell; 7];

/// A month laid out as full weeks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    month: NaiveDate,
    week_start: Weekday,
    weeks: Vec<WeekRow>,
}

impl MonthGrid {
    /// First day of the displayed month.
    pub fn month(&self) -> NaiveDate {
        self.month
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    pub fn weeks(&self) -> &[WeekRow] {
        &self.weeks
    }

    /// Cells in reading order: row by row, first weekday to last.
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|row| row.iter())
    }

    pub fn cell_count(&self) -> usize {
        self.weeks.len() * 7
    }

    /// (row, column) of `date`, if the grid shows it.
    pub fn position_of(&self, date: NaiveDate) -> Option<(usize, usize)> {
        let first = self.weeks.first()?[0].date;
        let offset = usize::try_from((date - first).num_days()).ok()?;
        (offset < self.cell_count()).then_some((offset / 7, offset % 7))
    }

    pub fn cell_for(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.position_of(date)
            .map(|(row, col)| &self.weeks[row][col])
    }

    /// ISO week number shown beside a row, taken from the middle of the row.
    pub fn week_number(&self, row: usize) -> Option<u32> {
        self.weeks.get(row).map(|cells| cells[3].date.iso_week().week())
    }
}

/// Number of filler cells before the 1st of the month.
pub fn leading_cells(month: NaiveDate, week_start: Weekday) -> u32 {
    days_since_week_start(first_of_month(month), week_start)
}

/// Rows needed to show the whole month.
pub fn week_count(month: NaiveDate, week_start: Weekday) -> u32 {
    (days_in_month(month) + leading_cells(month, week_start)).div_ceil(7)
}

/// First day of the week (per `week_start`) containing `date`.
pub fn week_start_of(date: NaiveDate, week_start: Weekday) -> Option<NaiveDate> {
    date.checked_sub_days(Days::new(u64::from(days_since_week_start(date, week_start))))
}

/// First and last date shown in the grid of the month containing `month`.
///
/// `None` when the padding runs past the dates chrono can represent, which
/// only happens for the first and last months of its range.
pub fn grid_span(month: NaiveDate, week_start: Weekday) -> Option<(NaiveDate, NaiveDate)> {
    let month = first_of_month(month);
    let first = month.checked_sub_days(Days::new(u64::from(leading_cells(month, week_start))))?;
    let last = first.checked_add_days(Days::new(u64::from(week_count(month, week_start) * 7 - 1)))?;
    Some((first, last))
}

/// Build the grid for the month containing `reference`.
///
/// `today` is passed in rather than read from the clock so the result is a
/// pure function of its arguments. Only a current-month cell is ever flagged
/// as today; a filler cell with today's date is not.
pub fn build_month_grid(
    reference: NaiveDate,
    events: &[Event],
    today: NaiveDate,
    week_start: Weekday,
) -> Result<MonthGrid, GridError> {
    let month = first_of_month(reference);
    let (first_cell, _) = grid_span(month, week_start).ok_or(GridError::OutOfRange(month))?;
    let rows = u64::from(week_count(month, week_start));
    let index = index_by_start_date(events);
    let today = Some(today).filter(|t| first_of_month(*t) == month);

    let weeks = (0..rows)
        .map(|week| {
            let row_start = first_cell
                .checked_add_days(Days::new(week * 7))
                .ok_or(GridError::OutOfRange(month))?;
            build_row(row_start, month, today, &index)
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "Built {} grid: {} rows, {} leading cells, {} events",
        month.format("%Y-%m"),
        rows,
        leading_cells(month, week_start),
        events.len()
    );

    Ok(MonthGrid {
        month,
        week_start,
        weeks,
    })
}

/// Build the single week row containing `reference`, for the week view.
///
/// `is_current_month` is relative to the month of `reference`. Today is
/// flagged wherever it falls in the row.
pub fn build_week_row(
    reference: NaiveDate,
    events: &[Event],
    today: NaiveDate,
    week_start: Weekday,
) -> Result<WeekRow, GridError> {
    let month = first_of_month(reference);
    let row_start = week_start_of(reference, week_start).ok_or(GridError::OutOfRange(month))?;
    build_row(row_start, month, Some(today), &index_by_start_date(events))
}

fn build_row(
    row_start: NaiveDate,
    month: NaiveDate,
    today: Option<NaiveDate>,
    index: &HashMap<NaiveDate, Vec<&Event>>,
) -> Result<WeekRow, GridError> {
    let dates: [NaiveDate; 7] = row_start
        .iter_days()
        .take(7)
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| GridError::OutOfRange(month))?;

    Ok(dates.map(|date| CalendarCell {
        date,
        events: index
            .get(&date)
            .map(|bound| bound.iter().map(|e| (*e).clone()).collect())
            .unwrap_or_default(),
        is_current_month: date.year() == month.year() && date.month() == month.month(),
        is_today: today == Some(date),
    }))
}
