// Unit tests for the event model's public surface
// Covers validation rules, kind handling and the JSON event format

use chrono::{NaiveDate, NaiveDateTime};
use test_case::test_case;

use recruit_calendar::models::event::{Event, EventKind, EventValidationError};

fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2023, 6, day)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn base() -> recruit_calendar::models::event::EventBuilder {
    Event::builder()
        .id("1")
        .title("Interview with John Smith")
        .start(at(15, 10, 0))
        .end(at(15, 11, 0))
}

#[test_case("#3B82F6" ; "long uppercase")]
#[test_case("#10b981" ; "long lowercase")]
#[test_case("#FFF" ; "short")]
fn test_valid_colors(color: &str) {
    assert!(base().color(color).build().is_ok());
}

#[test_case("3B82F6" ; "missing hash")]
#[test_case("#3B82F" ; "five digits")]
#[test_case("#GGGGGG" ; "not hex")]
#[test_case("blue" ; "named color")]
fn test_invalid_colors(color: &str) {
    assert_eq!(
        base().color(color).build(),
        Err(EventValidationError::InvalidColor)
    );
}

#[test_case(EventKind::Interview, "\"interview\"")]
#[test_case(EventKind::Followup, "\"followup\"")]
#[test_case(EventKind::Meeting, "\"meeting\"")]
#[test_case(EventKind::Other, "\"other\"")]
fn test_kind_wire_names(kind: EventKind, json: &str) {
    assert_eq!(serde_json::to_string(&kind).unwrap(), json);
    assert_eq!(serde_json::from_str::<EventKind>(json).unwrap(), kind);
}

#[test]
fn test_deserialize_crm_event() {
    let json = r##"{
        "id": "3",
        "title": "Client meeting - Tech Corp",
        "start": "2023-06-20T11:00:00",
        "end": "2023-06-20T12:00:00",
        "color": "#8B5CF6",
        "company_id": "comp-1",
        "type": "meeting"
    }"##;

    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.kind, EventKind::Meeting);
    assert_eq!(event.company_id(), Some("comp-1"));
    assert_eq!(event.candidate_id(), None);
    assert_eq!(event.start, at(20, 11, 0));
    assert!(event.validate().is_ok());
}

#[test]
fn test_deserialize_without_type_defaults_to_other() {
    let json = r#"{
        "id": "x",
        "title": "Untyped",
        "start": "2023-06-20T11:00:00",
        "end": "2023-06-20T11:30:00"
    }"#;

    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.kind, EventKind::Other);
    assert_eq!(event.color, None);
    assert_eq!(event.link, None);
}

#[test]
fn test_deserialized_event_is_not_validated_until_asked() {
    let json = r#"{
        "id": "bad",
        "title": "Backwards",
        "start": "2023-06-20T11:00:00",
        "end": "2023-06-20T10:00:00"
    }"#;

    let event: Event = serde_json::from_str(json).unwrap();
    assert_eq!(event.validate(), Err(EventValidationError::EndBeforeStart));
}

#[test_case(0, 15 ; "same day")]
#[test_case(5, 20 ; "forward")]
#[test_case(-14, 1 ; "back to first")]
fn test_shift_lands_on_day(days: i64, expected_day: u32) {
    let event = base().build().unwrap();
    let moved = event.shifted_by_days(days).unwrap();
    assert_eq!(moved.start, at(expected_day, 10, 0));
    assert_eq!(moved.end, at(expected_day, 11, 0));
}

#[test]
fn test_shift_across_month_end() {
    let event = Event::new("n", "Late call", at(30, 23, 30), at(30, 23, 45), EventKind::Followup).unwrap();
    let moved = event.shifted_by_days(1).unwrap();
    assert_eq!(
        moved.start,
        NaiveDate::from_ymd_opt(2023, 7, 1).unwrap().and_hms_opt(23, 30, 0).unwrap()
    );
    assert_eq!(moved.duration(), event.duration());
}
