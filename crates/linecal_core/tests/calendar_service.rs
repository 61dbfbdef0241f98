use chrono::NaiveDate;
use linecal_core::{
    CalendarConfig, CalendarEvent, CalendarService, CalendarServiceError, DisabledEventSource,
    EventDraft, InMemoryEventSource, ShellEffect, ShellIntent, ShellState, SourceError, ViewType,
};

fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn meeting(id: &str, date: NaiveDate) -> CalendarEvent {
    let start = date.and_hms_opt(10, 0, 0).unwrap();
    let end = date.and_hms_opt(11, 0, 0).unwrap();
    CalendarEvent::with_id(id, id, start, end).unwrap()
}

#[test]
fn refresh_year_loads_only_that_year() {
    let source = InMemoryEventSource::with_events([
        meeting("old", ymd(2023, 12, 31)),
        meeting("now", ymd(2024, 4, 2)),
        meeting("next", ymd(2025, 1, 1)),
    ]);
    let mut service = CalendarService::new(source);
    assert!(service.request_access());

    let loaded: Vec<&str> = service
        .refresh_year(ymd(2024, 8, 1))
        .iter()
        .map(CalendarEvent::id)
        .collect();
    assert_eq!(loaded, vec!["now"]);
    assert_eq!(service.events_on(ymd(2024, 4, 2)).len(), 1);
    assert!(service.notice().is_none());
}

#[test]
fn denied_access_produces_empty_layout_not_error() {
    let mut service = CalendarService::new(InMemoryEventSource::denying_access());
    assert!(!service.request_access());
    assert!(!service.has_access());
    assert!(service.calendars().is_empty());

    service.refresh_year(ymd(2024, 1, 1));
    let layout = service.layout_year(ymd(2024, 1, 1), ymd(2024, 1, 1));
    assert_eq!(layout.months.len(), 12);
    assert_eq!(layout.day_cells().count(), 366);
    assert!(layout.day_cells().all(|day| day.events.is_empty()));
    assert!(service.take_notice().is_some());
}

#[test]
fn disabled_source_rejects_writes() {
    let mut service = CalendarService::new(DisabledEventSource);
    let mut draft = EventDraft::for_dates(ymd(2024, 3, 1), None);
    draft.title = "Offsite".to_string();

    let err = service.create_event(&draft).unwrap_err();
    assert_eq!(err, CalendarServiceError::Source(SourceError::AccessDenied));
    assert!(service.notice().is_some());
}

#[test]
fn selection_to_saved_event_flows_into_layout() {
    let today = ymd(2024, 1, 15);
    let mut shell = ShellState::new(today);
    let mut service = CalendarService::new(InMemoryEventSource::new());
    service.request_access();
    service.refresh_year(today);

    let effect = shell.apply(ShellIntent::CreateRequested {
        start: ymd(2024, 1, 30),
        end: Some(ymd(2024, 2, 2)),
    });
    let ShellEffect::OpenCreateForm(mut draft) = effect else {
        panic!("expected create form");
    };
    draft.title = "Trip".to_string();
    assert!(draft.is_all_day());

    let created = service.create_event(&draft).unwrap();
    assert_eq!(created.calendar_id(), Some("local"));

    let layout = service.layout_year(today, today);
    for date in [ymd(2024, 1, 30), ymd(2024, 2, 2)] {
        assert_eq!(layout.day_cell(date).unwrap().lane_of(created.id()), Some(0));
    }
    assert!(layout.day_cell(ymd(2024, 2, 3)).unwrap().events.is_empty());

    service.delete_event(created.id()).unwrap();
    assert!(service.events().is_empty());
    assert_eq!(shell.view(), ViewType::Year);
}

#[test]
fn config_caps_reach_both_layouts() {
    let config = CalendarConfig::from_json_str(
        r#"{"linear_max_events_per_day": 2, "month_grid_max_events_per_day": 1}"#,
    )
    .unwrap();
    let day = ymd(2024, 9, 9);
    let events = (0..3).map(|index| meeting(&format!("m{index}"), day));
    let mut service = CalendarService::with_config(InMemoryEventSource::with_events(events), &config);
    service.refresh_year(day);

    let linear = service.layout_year(day, day);
    assert_eq!(linear.day_cell(day).unwrap().overflow_count, 1);

    let grid = service.layout_month_grid(day, day);
    let grid_day = grid.day(day).unwrap();
    assert_eq!(grid_day.events.len(), 1);
    assert_eq!(grid_day.overflow_count, 2);
}
