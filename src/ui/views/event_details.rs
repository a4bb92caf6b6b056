use crate::models::event::{Event, EventLink};

/// Plain-text detail view for one event.
pub fn render_event_details(event: &Event) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n", event.title));
    out.push_str(&format!(
        "Date & Time: {} {}\n",
        event.start.format("%Y-%m-%d"),
        event.time_range_label()
    ));
    out.push_str(&format!("Type: {}\n", event.kind.label()));

    if let Some(description) = event.description.as_deref().filter(|d| !d.trim().is_empty()) {
        out.push_str(&format!("Description: {}\n", description));
    }

    match event.link {
        Some(EventLink::Candidate(ref id)) => out.push_str(&format!("Candidate: {}\n", id)),
        Some(EventLink::Company(ref id)) => out.push_str(&format!("Company: {}\n", id)),
        None => {}
    }

    out
}
