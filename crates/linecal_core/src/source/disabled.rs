//! Source used when platform calendar access is switched off.

use chrono::NaiveDateTime;
use log::warn;

use crate::model::event::CalendarEvent;
use crate::source::{CalendarRef, EventSource, NewEvent, SourceError, SourceResult};

/// Platform calendar integration that has been disabled.
///
/// Access is always refused; the app keeps working with an empty event set.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledEventSource;

impl EventSource for DisabledEventSource {
    fn request_access(&mut self) -> bool {
        warn!("event=access_request module=source status=error source=disabled error_code=access_disabled");
        false
    }

    fn load_events(
        &self,
        _range_start: NaiveDateTime,
        _range_end: NaiveDateTime,
    ) -> SourceResult<Vec<CalendarEvent>> {
        Err(SourceError::SourceUnavailable(
            "platform calendar access is disabled".to_string(),
        ))
    }

    fn create_event(&mut self, _request: NewEvent) -> SourceResult<CalendarEvent> {
        Err(SourceError::AccessDenied)
    }

    fn delete_event(&mut self, _id: &str) -> SourceResult<()> {
        Err(SourceError::AccessDenied)
    }

    fn list_calendars(&self) -> Vec<CalendarRef> {
        Vec::new()
    }
}
