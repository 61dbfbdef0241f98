//! Event Source contract and in-process implementations.
//!
//! # Responsibility
//! - Define the boundary to whatever owns events (platform calendar, local store).
//! - Report access and availability failures as semantic errors.
//!
//! # Invariants
//! - Sources hand out fully materialized, validated events only.
//! - `load_events` returns events overlapping the half-open range, sorted by
//!   start then id.
//! - Layout code never calls a source; the service does.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::model::event::{CalendarEvent, EventColor, EventId, EventValidationError};

pub mod disabled;
pub mod memory;

pub use disabled::DisabledEventSource;
pub use memory::InMemoryEventSource;

pub type SourceResult<T> = Result<T, SourceError>;

/// Event Source failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceError {
    /// The user or platform refused calendar access.
    AccessDenied,
    /// The backing service cannot be reached or is switched off.
    SourceUnavailable(String),
    /// No event with this id exists in the source.
    EventNotFound(EventId),
    /// The request would construct an invalid event.
    InvalidEvent(EventValidationError),
}

impl Display for SourceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied => write!(f, "calendar access was denied"),
            Self::SourceUnavailable(reason) => write!(f, "calendar source unavailable: {reason}"),
            Self::EventNotFound(id) => write!(f, "event not found: {id}"),
            Self::InvalidEvent(err) => write!(f, "{err}"),
        }
    }
}

impl Error for SourceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidEvent(err) => Some(err),
            Self::AccessDenied | Self::SourceUnavailable(_) | Self::EventNotFound(_) => None,
        }
    }
}

impl From<EventValidationError> for SourceError {
    fn from(value: EventValidationError) -> Self {
        Self::InvalidEvent(value)
    }
}

/// One calendar exposed by a source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRef {
    pub id: String,
    pub title: String,
    pub color: EventColor,
}

/// Validated creation request; the source assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEvent {
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    is_all_day: bool,
    location: Option<String>,
    notes: Option<String>,
}

impl NewEvent {
    /// # Errors
    /// - Returns `EndBeforeStart` when `end < start`.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        is_all_day: bool,
        location: Option<String>,
        notes: Option<String>,
    ) -> Result<Self, EventValidationError> {
        if end < start {
            return Err(EventValidationError::EndBeforeStart { start, end });
        }
        Ok(Self {
            title: title.into(),
            start,
            end,
            is_all_day,
            location,
            notes,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn start(&self) -> NaiveDateTime {
        self.start
    }

    pub fn end(&self) -> NaiveDateTime {
        self.end
    }

    pub fn is_all_day(&self) -> bool {
        self.is_all_day
    }

    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    pub fn notes(&self) -> Option<&str> {
        self.notes.as_deref()
    }

    /// Materializes the request as an event with `id` in `calendar`.
    pub fn into_event(
        self,
        id: impl Into<EventId>,
        calendar: Option<&CalendarRef>,
    ) -> Result<CalendarEvent, EventValidationError> {
        let mut event =
            CalendarEvent::with_id(id, self.title, self.start, self.end)?.all_day(self.is_all_day);
        if let Some(location) = self.location {
            event = event.located_at(location);
        }
        if let Some(notes) = self.notes {
            event = event.with_notes(notes);
        }
        if let Some(calendar) = calendar {
            event = event
                .in_calendar(calendar.id.clone())
                .colored(calendar.color.clone());
        }
        Ok(event)
    }
}

/// Capability set every event backend exposes.
pub trait EventSource {
    /// Asks for calendar access; `false` means every other call will fail.
    fn request_access(&mut self) -> bool;
    fn load_events(
        &self,
        range_start: NaiveDateTime,
        range_end: NaiveDateTime,
    ) -> SourceResult<Vec<CalendarEvent>>;
    fn create_event(&mut self, request: NewEvent) -> SourceResult<CalendarEvent>;
    fn delete_event(&mut self, id: &str) -> SourceResult<()>;
    fn list_calendars(&self) -> Vec<CalendarRef>;
}
