//! Drag-and-drop rescheduling: an Idle/Dragging state machine that moves an
//! event by whole days when it is dropped on another cell.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::models::event::Event;
use crate::services::event::{EventStore, StoreError};
use crate::utils::date::shift_days;

/// Snapshot taken when an event starts being dragged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DragContext {
    pub event_id: String,
    pub original_start: NaiveDateTime,
    pub original_end: NaiveDateTime,
    /// Store version at drag start
    pub store_version: u64,
}

impl DragContext {
    pub fn from_event(event: &Event, store_version: u64) -> Self {
        Self {
            event_id: event.id.clone(),
            original_start: event.start,
            original_end: event.end,
            store_version,
        }
    }

    /// Whole calendar days between the original start date and `target`.
    pub fn day_delta(&self, target: NaiveDate) -> i64 {
        (target - self.original_start.date()).num_days()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum DragState {
    #[default]
    Idle,
    Dragging(DragContext),
}

/// A completed move, with the event before and after.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reschedule {
    pub event_id: String,
    pub diff_days: i64,
    pub previous: Event,
    pub updated: Event,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RescheduleError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("moving event '{id}' by {days} days leaves the supported date range")]
    OutOfRange { id: String, days: i64 },
}

/// Drag-and-drop state machine for moving events between days.
///
/// `Idle -> Dragging` on [`begin`](Self::begin); back to `Idle` on
/// [`drop_on`](Self::drop_on) or [`cancel`](Self::cancel). A drop always
/// ends the drag, whether or not the move succeeds.
#[derive(Debug, Default)]
pub struct DragRescheduler {
    state: DragState,
}

impl DragRescheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &DragState {
        &self.state
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, DragState::Dragging(_))
    }

    pub fn active(&self) -> Option<&DragContext> {
        match self.state {
            DragState::Dragging(ref context) => Some(context),
            DragState::Idle => None,
        }
    }

    /// Start dragging `event`. A drag already in progress is replaced.
    pub fn begin(&mut self, event: &Event, store_version: u64) {
        if let Some(previous) = self.active() {
            log::debug!("Drag of '{}' replaced by '{}'", previous.event_id, event.id);
        }
        self.state = DragState::Dragging(DragContext::from_event(event, store_version));
    }

    /// Abandon the drag without touching any event.
    pub fn cancel(&mut self) -> Option<DragContext> {
        match std::mem::take(&mut self.state) {
            DragState::Dragging(context) => {
                log::debug!("Drag of '{}' cancelled", context.event_id);
                Some(context)
            }
            DragState::Idle => None,
        }
    }

    /// Drop the dragged event on `target`.
    ///
    /// Start and end move by the same number of calendar days, so time of
    /// day and duration are unchanged. Returns `Ok(None)` when nothing was
    /// being dragged.
    pub fn drop_on(
        &mut self,
        target: NaiveDate,
        store: &mut EventStore,
    ) -> Result<Option<Reschedule>, RescheduleError> {
        let context = match std::mem::take(&mut self.state) {
            DragState::Dragging(context) => context,
            DragState::Idle => {
                log::debug!("Drop on {} ignored, no drag in progress", target);
                return Ok(None);
            }
        };

        if context.store_version != store.version() {
            log::debug!(
                "Store changed during drag of '{}' (version {} -> {})",
                context.event_id,
                context.store_version,
                store.version()
            );
        }

        let days = context.day_delta(target);
        let out_of_range = || RescheduleError::OutOfRange {
            id: context.event_id.clone(),
            days,
        };
        let new_start = shift_days(context.original_start, days).ok_or_else(out_of_range)?;
        let new_end = shift_days(context.original_end, days).ok_or_else(out_of_range)?;

        let previous = store
            .get(&context.event_id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(context.event_id.clone()))?;

        let updated = store
            .update(&context.event_id, |event| {
                event.start = new_start;
                event.end = new_end;
            })?
            .clone();

        log::info!(
            "Moved event '{}' by {} day(s) to {}",
            context.event_id,
            days,
            updated.start
        );

        Ok(Some(Reschedule {
            event_id: context.event_id,
            diff_days: days,
            previous,
            updated,
        }))
    }
}

/// `event` moved so that it starts on `target`, keeping time and duration.
pub fn rescheduled_to(event: &Event, target: NaiveDate) -> Option<Event> {
    event.shifted_by_days((target - event.start_date()).num_days())
}
