mod event_details;
mod month_view;
mod week_view;

pub use event_details::render_event_details;
pub use month_view::{render_month, MonthViewOptions};
pub use week_view::{render_day, render_week};
