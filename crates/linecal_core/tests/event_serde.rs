use chrono::NaiveDate;
use linecal_core::{layout_year, CalendarEvent};

#[test]
fn event_json_is_validated_on_load() {
    let event: CalendarEvent = serde_json::from_str(
        r#"{
            "id": "evt-1",
            "title": "Planning",
            "start": "2024-03-04T09:00:00",
            "end": "2024-03-04T10:30:00"
        }"#,
    )
    .unwrap();
    assert_eq!(event.id(), "evt-1");
    assert_eq!(event.color().as_str(), "blue");
    assert!(!event.is_all_day());
    assert!(event.location().is_none());

    let backwards = serde_json::from_str::<CalendarEvent>(
        r#"{"id": "evt-2", "title": "x", "start": "2024-03-04T10:00:00", "end": "2024-03-04T09:00:00"}"#,
    );
    assert!(backwards.is_err());

    let blank_id = serde_json::from_str::<CalendarEvent>(
        r#"{"id": " ", "title": "x", "start": "2024-03-04T10:00:00", "end": "2024-03-04T11:00:00"}"#,
    );
    assert!(blank_id.is_err());
}

#[test]
fn year_layout_serializes_cells_with_kind_tags() {
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let layout = layout_year(date, &[], date);
    let json = serde_json::to_value(&layout).unwrap();

    let january = &json["months"][0];
    assert_eq!(january["month_name"], "January");
    assert_eq!(january["cells"][0]["kind"], "day");
    assert_eq!(january["cells"][0]["day_number"], 1);
    assert_eq!(january["cells"][31]["kind"], "empty");
    assert_eq!(january["cells"][31]["padding"], "after_month");
}
