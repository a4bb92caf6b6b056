use crate::models::event::Event;
use crate::services::calendar::binder::sorted_by_start;
use crate::services::calendar::WeekRow;

/// Render a week as one block per day, events listed in collection order.
pub fn render_week(week: &WeekRow) -> String {
    let mut out = String::new();
    for cell in week.iter() {
        let marker = if cell.is_today { " (today)" } else { "" };
        out.push_str(&format!("{}{}\n", cell.date.format("%a %d %b"), marker));
        if cell.events.is_empty() {
            out.push_str("  -\n");
        }
        for event in &cell.events {
            out.push_str(&event_line(event));
        }
    }
    out
}

/// Render a single day's agenda in start-time order.
pub fn render_day<'a>(events: impl IntoIterator<Item = &'a Event>) -> String {
    let sorted = sorted_by_start(events);
    if sorted.is_empty() {
        return "  No events\n".to_string();
    }
    sorted.into_iter().map(event_line).collect()
}

fn event_line(event: &Event) -> String {
    format!("  {}  {}\n", event.time_range_label(), event.title)
}
