//! Read-only event detail view-model.

use chrono::NaiveDateTime;

use crate::model::event::CalendarEvent;

const DATE_FORMAT: &str = "%b %-d, %Y";
const TIME_FORMAT: &str = "%H:%M";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDetail {
    pub event_id: String,
    pub title: String,
    pub is_all_day: bool,
    /// One or two display lines describing when the event happens.
    pub time_lines: Vec<String>,
    pub location: Option<String>,
    pub notes: Option<String>,
    pub calendar_id: Option<String>,
}

impl EventDetail {
    pub fn from_event(event: &CalendarEvent) -> Self {
        Self {
            event_id: event.id().to_string(),
            title: event.title().to_string(),
            is_all_day: event.is_all_day(),
            time_lines: time_lines(event),
            location: non_empty(event.location()),
            notes: non_empty(event.notes()),
            calendar_id: event.calendar_id().map(str::to_string),
        }
    }
}

fn time_lines(event: &CalendarEvent) -> Vec<String> {
    let first_day = event.start().date();
    let last_day = event.last_day();
    if event.is_all_day() {
        if first_day == last_day {
            return vec![first_day.format(DATE_FORMAT).to_string()];
        }
        return vec![format!(
            "{} - {}",
            first_day.format(DATE_FORMAT),
            last_day.format(DATE_FORMAT)
        )];
    }
    if event.start().date() == event.end().date() {
        return vec![
            first_day.format(DATE_FORMAT).to_string(),
            format!(
                "{} - {}",
                event.start().format(TIME_FORMAT),
                event.end().format(TIME_FORMAT)
            ),
        ];
    }
    vec![
        format!("{} -", date_time(event.start())),
        date_time(event.end()),
    ]
}

fn date_time(value: NaiveDateTime) -> String {
    format!("{} {}", value.format(DATE_FORMAT), value.format(TIME_FORMAT))
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .filter(|text| !text.trim().is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::EventDetail;
    use crate::model::event::CalendarEvent;
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 7, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid test instant")
    }

    #[test]
    fn timed_same_day_event_shows_date_and_clock_range() {
        let event = CalendarEvent::with_id("a", "sync", at(3, 9), at(3, 10))
            .expect("valid event")
            .located_at("")
            .with_notes("agenda");
        let detail = EventDetail::from_event(&event);
        assert_eq!(detail.time_lines, vec!["Jul 3, 2024", "09:00 - 10:00"]);
        assert_eq!(detail.location, None);
        assert_eq!(detail.notes.as_deref(), Some("agenda"));
    }

    #[test]
    fn timed_cross_day_event_shows_two_date_times() {
        let event =
            CalendarEvent::with_id("b", "flight", at(3, 22), at(4, 6)).expect("valid event");
        let detail = EventDetail::from_event(&event);
        assert_eq!(detail.time_lines, vec!["Jul 3, 2024 22:00 -", "Jul 4, 2024 06:00"]);
    }

    #[test]
    fn all_day_events_show_inclusive_day_range() {
        let single = CalendarEvent::with_id("c", "holiday", at(4, 0), at(5, 0))
            .expect("valid event")
            .all_day(true);
        assert_eq!(EventDetail::from_event(&single).time_lines, vec!["Jul 4, 2024"]);

        let range = CalendarEvent::with_id("d", "vacation", at(8, 0), at(13, 0))
            .expect("valid event")
            .all_day(true);
        assert_eq!(
            EventDetail::from_event(&range).time_lines,
            vec!["Jul 8, 2024 - Jul 12, 2024"]
        );
    }
}
