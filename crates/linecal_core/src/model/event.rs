//! Calendar event domain model.
//!
//! # Responsibility
//! - Define the immutable `CalendarEvent` value handed to layout passes.
//! - Provide day-occurrence and multi-day predicates plus deterministic ordering.
//!
//! # Invariants
//! - `start <= end` for every constructed event (zero duration is allowed).
//! - `id` is non-blank and stable for the lifetime of the event.
//! - Events are never mutated after construction; a correction is a new value.
//!
//! # See also
//! - `layout::linear` for how occurrence and ordering drive lane assignment.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

use crate::calendar::date::{next_day_start, start_of_day};

/// Opaque, externally assigned or generated event identifier.
pub type EventId = String;

const DEFAULT_EVENT_COLOR: &str = "blue";

/// Display color token. Opaque to layout; only renderers interpret it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventColor(String);

impl EventColor {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for EventColor {
    fn default() -> Self {
        Self(DEFAULT_EVENT_COLOR.to_string())
    }
}

/// Event construction errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventValidationError {
    /// Identifier is empty after trim.
    BlankId,
    /// `end` is earlier than `start`.
    EndBeforeStart {
        start: NaiveDateTime,
        end: NaiveDateTime,
    },
}

impl Display for EventValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankId => write!(f, "event id must not be blank"),
            Self::EndBeforeStart { start, end } => {
                write!(f, "event end ({end}) must be >= event start ({start})")
            }
        }
    }
}

impl Error for EventValidationError {}

/// One calendar event as seen by the layout engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "CalendarEventRecord")]
pub struct CalendarEvent {
    id: EventId,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    is_all_day: bool,
    location: Option<String>,
    notes: Option<String>,
    color: EventColor,
    calendar_id: Option<String>,
}

impl CalendarEvent {
    /// Creates an event with a generated UUID v4 identifier.
    ///
    /// # Errors
    /// - Returns `EndBeforeStart` when `end < start`.
    pub fn new(
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventValidationError> {
        Self::with_id(Uuid::new_v4().to_string(), title, start, end)
    }

    /// Creates an event with a caller-provided identifier.
    ///
    /// Used by event sources whose identity already exists externally.
    pub fn with_id(
        id: impl Into<EventId>,
        title: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
    ) -> Result<Self, EventValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(EventValidationError::BlankId);
        }
        if end < start {
            return Err(EventValidationError::EndBeforeStart { start, end });
        }
        Ok(Self {
            id,
            title: title.into(),
            start,
            end,
            is_all_day: false,
            location: None,
            notes: None,
            color: EventColor::default(),
            calendar_id: None,
        })
    }

    pub fn all_day(mut self, is_all_day: bool) -> Self {
        self.is_all_day = is_all_day;
        self
    }

    pub fn located_at(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    pub fn colored(mut self, color: EventColor) -> Self {
        self.color = color;
        self
    }

    pub fn in_calendar(mut self, calendar_id: impl Into<String>) -> Self {
        self.calendar_id = Some(calendar_id.into());
        self
    }

    pub fn id(&self) -> &str {
        &self.id
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

    pub fn color(&self) -> &EventColor {
        &self.color
    }

    pub fn calendar_id(&self) -> Option<&str> {
        self.calendar_id.as_deref()
    }

    /// Returns whether the event intersects the half-open instant range.
    ///
    /// A zero-duration event intersects the range containing its instant.
    pub fn overlaps(&self, range_start: NaiveDateTime, range_end: NaiveDateTime) -> bool {
        if self.start == self.end {
            return range_start <= self.start && self.start < range_end;
        }
        self.start < range_end && self.end > range_start
    }

    /// Returns whether `[start, end)` intersects the day `date`.
    ///
    /// An event ending exactly at midnight does not occur on the next day.
    pub fn occurs_on(&self, date: NaiveDate) -> bool {
        self.overlaps(start_of_day(date), next_day_start(date))
    }

    /// Returns whether start and end fall on different calendar days.
    ///
    /// A midnight-to-midnight all-day event counts as multi-day even though
    /// `occurs_on` only reports its first day.
    pub fn is_multi_day(&self) -> bool {
        self.start.date() != self.end.date()
    }

    /// Last calendar day the event occurs on.
    ///
    /// An end at exactly midnight belongs to the previous day.
    pub fn last_day(&self) -> NaiveDate {
        let end_date = self.end.date();
        if self.end > self.start && self.end == start_of_day(end_date) {
            end_date.pred_opt().unwrap_or(end_date)
        } else {
            end_date
        }
    }

    /// Returns whether the event started before `date`.
    pub fn continues_before(&self, date: NaiveDate) -> bool {
        self.start < start_of_day(date)
    }

    /// Returns whether the event runs past the end of `date`.
    pub fn continues_after(&self, date: NaiveDate) -> bool {
        self.end > next_day_start(date)
    }
}

/// Deterministic ordering: ascending start instant, ties broken by id.
pub fn compare_by_start(a: &CalendarEvent, b: &CalendarEvent) -> Ordering {
    a.start.cmp(&b.start).then_with(|| a.id.cmp(&b.id))
}

/// Events occurring on `date`, sorted by start then id.
pub fn events_on(events: &[CalendarEvent], date: NaiveDate) -> Vec<&CalendarEvent> {
    let mut selected: Vec<&CalendarEvent> =
        events.iter().filter(|event| event.occurs_on(date)).collect();
    selected.sort_by(|a, b| compare_by_start(a, b));
    selected
}

/// Events intersecting the half-open range, sorted by start then id.
pub fn events_in_range(
    events: &[CalendarEvent],
    range_start: NaiveDateTime,
    range_end: NaiveDateTime,
) -> Vec<&CalendarEvent> {
    let mut selected: Vec<&CalendarEvent> = events
        .iter()
        .filter(|event| event.overlaps(range_start, range_end))
        .collect();
    selected.sort_by(|a, b| compare_by_start(a, b));
    selected
}

/// Wire shape accepted by `Deserialize`; validated into `CalendarEvent`.
#[derive(Debug, Deserialize)]
struct CalendarEventRecord {
    id: EventId,
    title: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    #[serde(default)]
    is_all_day: bool,
    #[serde(default)]
    location: Option<String>,
    #[serde(default)]
    notes: Option<String>,
    #[serde(default)]
    color: EventColor,
    #[serde(default)]
    calendar_id: Option<String>,
}

impl TryFrom<CalendarEventRecord> for CalendarEvent {
    type Error = EventValidationError;

    fn try_from(record: CalendarEventRecord) -> Result<Self, Self::Error> {
        let mut event = Self::with_id(record.id, record.title, record.start, record.end)?;
        event.is_all_day = record.is_all_day;
        event.location = record.location;
        event.notes = record.notes;
        event.color = record.color;
        event.calendar_id = record.calendar_id;
        Ok(event)
    }
}
