//! In-process event store used for local calendars and tests.

use chrono::NaiveDateTime;
use log::{info, warn};
use std::collections::BTreeMap;
use uuid::Uuid;

use crate::model::event::{compare_by_start, CalendarEvent, EventColor, EventId};
use crate::source::{CalendarRef, EventSource, NewEvent, SourceError, SourceResult};

const LOCAL_CALENDAR_ID: &str = "local";
const LOCAL_CALENDAR_TITLE: &str = "Local";

/// Event source backed by an ordered in-memory map.
#[derive(Debug, Clone)]
pub struct InMemoryEventSource {
    events: BTreeMap<EventId, CalendarEvent>,
    calendars: Vec<CalendarRef>,
    allow_access: bool,
}

impl Default for InMemoryEventSource {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryEventSource {
    /// Creates an empty source with one local calendar that grants access.
    pub fn new() -> Self {
        Self {
            events: BTreeMap::new(),
            calendars: vec![CalendarRef {
                id: LOCAL_CALENDAR_ID.to_string(),
                title: LOCAL_CALENDAR_TITLE.to_string(),
                color: EventColor::default(),
            }],
            allow_access: true,
        }
    }

    /// Creates a source pre-filled with `events`; later duplicates replace earlier ids.
    pub fn with_events(events: impl IntoIterator<Item = CalendarEvent>) -> Self {
        let mut source = Self::new();
        for event in events {
            source.insert(event);
        }
        source
    }

    /// Creates a source that refuses access, for exercising error paths.
    pub fn denying_access() -> Self {
        Self {
            allow_access: false,
            ..Self::new()
        }
    }

    /// Inserts or replaces an event by id.
    pub fn insert(&mut self, event: CalendarEvent) {
        self.events.insert(event.id().to_string(), event);
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    fn ensure_access(&self) -> SourceResult<()> {
        if self.allow_access {
            Ok(())
        } else {
            Err(SourceError::AccessDenied)
        }
    }
}

impl EventSource for InMemoryEventSource {
    fn request_access(&mut self) -> bool {
        self.allow_access
    }

    fn load_events(
        &self,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> SourceResult<Vec<CalendarEvent>> {
        self.ensure_access()?;
        let mut events: Vec<CalendarEvent> = self
            .events
            .values()
            .filter(|event| event.overlaps(range_start, range_end))
            .cloned()
            .collect();
        events.sort_by(compare_by_start);
        Ok(events)
    }

    fn create_event(&mut self, request: NewEvent) -> SourceResult<CalendarEvent> {
        self.ensure_access()?;
        let event = request.into_event(Uuid::new_v4().to_string(), self.calendars.first())?;
        info!(
            "event=event_create module=source status=ok source=memory event_id={}",
            event.id()
        );
        self.insert(event.clone());
        Ok(event)
    }

    fn delete_event(&mut self, id: &str) -> SourceResult<()> {
        self.ensure_access()?;
        if self.events.remove(id).is_none() {
            warn!(
                "event=event_delete module=source status=error source=memory error_code=not_found event_id={}",
                id
            );
            return Err(SourceError::EventNotFound(id.to_string()));
        }
        info!(
            "event=event_delete module=source status=ok source=memory event_id={}",
            id
        );
        Ok(())
    }

    fn list_calendars(&self) -> Vec<CalendarRef> {
        if self.allow_access {
            self.calendars.clone()
        } else {
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::InMemoryEventSource;
    use crate::source::{EventSource, NewEvent, SourceError};
    use chrono::{NaiveDate, NaiveDateTime};

    fn at(day: u32, hour: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 4, day)
            .and_then(|date| date.and_hms_opt(hour, 0, 0))
            .expect("valid test instant")
    }

    #[test]
    fn created_events_get_local_calendar_and_fresh_ids() {
        let mut source = InMemoryEventSource::new();
        let request = NewEvent::new("review", at(2, 9), at(2, 10), false, None, None)
            .expect("valid request");
        let first = source.create_event(request.clone()).expect("create");
        let second = source.create_event(request).expect("create");

        assert_ne!(first.id(), second.id());
        assert_eq!(first.calendar_id(), Some("local"));
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn denied_source_rejects_every_call() {
        let mut source = InMemoryEventSource::denying_access();
        assert!(!source.request_access());
        assert_eq!(
            source.load_events(at(1, 0), at(30, 0)).expect_err("denied"),
            SourceError::AccessDenied
        );
        assert!(source.list_calendars().is_empty());
    }
}
