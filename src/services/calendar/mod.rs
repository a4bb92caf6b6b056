//! Calendar engine: month grid, event binding and drag rescheduling, plus
//! the page state that ties them to an event store.

pub mod binder;
pub mod drag;
pub mod grid;
pub mod page;

pub use drag::{DragContext, DragRescheduler, DragState, Reschedule, RescheduleError};
pub use grid::{build_month_grid, build_week_row, grid_span, CalendarCell, GridError, MonthGrid, WeekRow};
pub use page::{CalendarPage, PageError};
