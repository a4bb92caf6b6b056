//! State behind the calendar page.
//!
//! The page owns the event store; grids are rebuilt from it on demand and
//! hold copies, never references into it.

use chrono::{Duration, NaiveDate};
use thiserror::Error;

use super::binder::events_on;
use super::drag::{DragRescheduler, DragState, Reschedule, RescheduleError};
use super::grid::{build_month_grid, build_week_row, grid_span, GridError, MonthGrid, WeekRow};
use crate::models::access::{self, Role, User};
use crate::models::event::Event;
use crate::models::settings::Settings;
use crate::models::ui::{NavDirection, ViewMode};
use crate::services::clock::Clock;
use crate::services::event::EventStore;
use crate::utils::date::add_months_clamped;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PageError {
    #[error("{} privileges are required to reschedule events", .0.label())]
    AccessDenied(Role),
    #[error("no event with id '{0}'")]
    UnknownEvent(String),
    #[error(transparent)]
    Reschedule(#[from] RescheduleError),
    #[error(transparent)]
    Grid(#[from] GridError),
}

pub struct CalendarPage<C: Clock> {
    store: EventStore,
    current_date: NaiveDate,
    view_mode: ViewMode,
    drag: DragRescheduler,
    selected: Option<String>,
    user: Option<User>,
    settings: Settings,
    clock: C,
}

impl<C: Clock> CalendarPage<C> {
    /// Open the page on today's date in the configured default view.
    pub fn new(store: EventStore, settings: Settings, clock: C, user: Option<User>) -> Self {
        let current_date = clock.today();
        Self {
            store,
            current_date,
            view_mode: settings.default_view,
            drag: DragRescheduler::new(),
            selected: None,
            user,
            settings,
            clock,
        }
    }

    pub fn store(&self) -> &EventStore {
        &self.store
    }

    pub fn events(&self) -> &[Event] {
        self.store.events()
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    pub fn set_user(&mut self, user: Option<User>) {
        self.user = user;
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    pub fn set_current_date(&mut self, date: NaiveDate) {
        self.current_date = date;
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view_mode = mode;
    }

    pub fn drag_state(&self) -> &DragState {
        self.drag.state()
    }

    /// Month grid for the current date, rebuilt from the store.
    pub fn grid(&self) -> Result<MonthGrid, PageError> {
        Ok(build_month_grid(
            self.current_date,
            self.store.events(),
            self.clock.today(),
            self.settings.week_start(),
        )?)
    }

    /// Week row containing the current date.
    pub fn week(&self) -> Result<WeekRow, PageError> {
        Ok(build_week_row(
            self.current_date,
            self.store.events(),
            self.clock.today(),
            self.settings.week_start(),
        )?)
    }

    /// Events starting on the current date, in collection order.
    pub fn day_events(&self) -> Vec<&Event> {
        events_on(self.store.events(), self.current_date).collect()
    }

    /// Step one month, week or day depending on the view mode.
    ///
    /// Stays put when the target month's grid cannot be laid out.
    pub fn navigate(&mut self, direction: NavDirection) {
        let sign = match direction {
            NavDirection::Prev => -1,
            NavDirection::Next => 1,
        };
        let next = match self.view_mode {
            ViewMode::Month => add_months_clamped(self.current_date, sign),
            ViewMode::Week => self
                .current_date
                .checked_add_signed(Duration::days(7 * i64::from(sign))),
            ViewMode::Day => self
                .current_date
                .checked_add_signed(Duration::days(i64::from(sign))),
        };
        match next.filter(|date| grid_span(*date, self.settings.week_start()).is_some()) {
            Some(date) => self.current_date = date,
            None => log::warn!("Cannot navigate past {}", self.current_date),
        }
    }

    pub fn go_to_today(&mut self) {
        self.current_date = self.clock.today();
    }

    /// Open the detail view for an event.
    pub fn select(&mut self, id: &str) -> Result<&Event, PageError> {
        let event = self
            .store
            .get(id)
            .ok_or_else(|| PageError::UnknownEvent(id.to_string()))?;
        self.selected = Some(id.to_string());
        Ok(event)
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.selected.as_deref().and_then(|id| self.store.get(id))
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Pick up an event. Requires the configured reschedule role.
    pub fn begin_drag(&mut self, id: &str) -> Result<(), PageError> {
        let required = self.settings.reschedule_role;
        if !access::can_access(self.user.as_ref(), required) {
            log::warn!("Drag of '{}' refused: {} role required", id, required.label());
            return Err(PageError::AccessDenied(required));
        }

        let event = self
            .store
            .get(id)
            .ok_or_else(|| PageError::UnknownEvent(id.to_string()))?;
        self.drag.begin(event, self.store.version());
        Ok(())
    }

    /// Release a drag outside any day cell.
    pub fn cancel_drag(&mut self) {
        self.drag.cancel();
    }

    /// Drop the dragged event on `date`. No-op when nothing is dragged.
    pub fn drop_on(&mut self, date: NaiveDate) -> Result<Option<Reschedule>, PageError> {
        Ok(self.drag.drop_on(date, &mut self.store)?)
    }
}
