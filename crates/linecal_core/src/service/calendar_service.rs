//! Calendar use-case service.
//!
//! # Responsibility
//! - Own the working event set fetched from an `EventSource`.
//! - Run layout passes over that set for the year and month views.
//! - Forward create/delete intents to the source.
//!
//! # Invariants
//! - A failed load leaves an empty working set plus a user-facing notice.
//! - Layout is only ever fed the materialized working set.
//! - The working set stays sorted by start then id.

use chrono::{NaiveDate, NaiveDateTime};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Instant;

use crate::calendar::date::year_instant_range;
use crate::config::CalendarConfig;
use crate::layout::linear::{LinearLayoutEngine, YearLayout};
use crate::layout::month_grid::{layout_month_grid, MonthGrid};
use crate::model::event::{compare_by_start, events_on, CalendarEvent};
use crate::shell::form::{DraftError, EventDraft};
use crate::source::{CalendarRef, EventSource, SourceError};

pub type ServiceResult<T> = Result<T, CalendarServiceError>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CalendarServiceError {
    /// Form input was rejected before reaching the source.
    Draft(DraftError),
    /// The source refused or failed the request.
    Source(SourceError),
}

impl Display for CalendarServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Draft(err) => write!(f, "{err}"),
            Self::Source(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CalendarServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Draft(err) => Some(err),
            Self::Source(err) => Some(err),
        }
    }
}

impl From<DraftError> for CalendarServiceError {
    fn from(value: DraftError) -> Self {
        Self::Draft(value)
    }
}

impl From<SourceError> for CalendarServiceError {
    fn from(value: SourceError) -> Self {
        Self::Source(value)
    }
}

/// User-facing advisory text for a source failure.
pub fn advisory_for(err: &SourceError) -> String {
    match err {
        SourceError::AccessDenied => {
            "Calendar access is not available; showing an empty calendar.".to_string()
        }
        SourceError::SourceUnavailable(reason) => {
            format!("Calendar source is unavailable ({reason}); showing an empty calendar.")
        }
        SourceError::EventNotFound(_) => "The event no longer exists.".to_string(),
        SourceError::InvalidEvent(err) => format!("The event could not be saved: {err}."),
    }
}

/// Use-case service over one event source.
pub struct CalendarService<S: EventSource> {
    source: S,
    engine: LinearLayoutEngine,
    month_grid_max_events: usize,
    events: Vec<CalendarEvent>,
    has_access: bool,
    notice: Option<String>,
}

impl<S: EventSource> CalendarService<S> {
    /// Creates a service with default layout caps.
    pub fn new(source: S) -> Self {
        Self::with_config(source, &CalendarConfig::default())
    }

    pub fn with_config(source: S, config: &CalendarConfig) -> Self {
        Self {
            source,
            engine: config.linear_engine(),
            month_grid_max_events: config.month_grid_max_events_per_day.max(1),
            events: Vec::new(),
            has_access: false,
            notice: None,
        }
    }

    /// Asks the source for access; on refusal the working set is emptied.
    pub fn request_access(&mut self) -> bool {
        self.has_access = self.source.request_access();
        if !self.has_access {
            self.events.clear();
            self.notice = Some(advisory_for(&SourceError::AccessDenied));
            warn!("event=access_request module=service status=error error_code=access_denied");
        } else {
            info!("event=access_request module=service status=ok");
        }
        self.has_access
    }

    pub fn has_access(&self) -> bool {
        self.has_access
    }

    /// Replaces the working set with events overlapping `[range_start, range_end)`.
    ///
    /// Source failures never propagate: the set becomes empty and a notice is recorded.
    /// A successful load clears any earlier notice.
    pub fn refresh(&mut self, range_start: NaiveDateTime, range_end: NaiveDateTime) -> &[CalendarEvent] {
        let started_at = Instant::now();
        match self.source.load_events(range_start, range_end) {
            Ok(mut events) => {
                events.sort_by(compare_by_start);
                info!(
                    "event=events_load module=service status=ok count={} duration_ms={}",
                    events.len(),
                    started_at.elapsed().as_millis()
                );
                self.events = events;
                self.notice = None;
            }
            Err(err) => {
                warn!(
                    "event=events_load module=service status=error duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                self.events.clear();
                self.notice = Some(advisory_for(&err));
            }
        }
        &self.events
    }

    /// Refreshes the working set for the whole year containing `anchor`.
    pub fn refresh_year(&mut self, anchor: NaiveDate) -> &[CalendarEvent] {
        let (start, end) = year_instant_range(anchor);
        self.refresh(start, end)
    }

    pub fn events(&self) -> &[CalendarEvent] {
        &self.events
    }

    pub fn events_on(&self, date: NaiveDate) -> Vec<&CalendarEvent> {
        events_on(&self.events, date)
    }

    /// Validates the draft, creates the event in the source and adds it to the set.
    pub fn create_event(&mut self, draft: &EventDraft) -> ServiceResult<CalendarEvent> {
        let request = draft.build()?;
        match self.source.create_event(request) {
            Ok(event) => {
                let position = self
                    .events
                    .partition_point(|existing| compare_by_start(existing, &event).is_lt());
                self.events.insert(position, event.clone());
                Ok(event)
            }
            Err(err) => {
                warn!(
                    "event=event_create module=service status=error error={}",
                    err
                );
                self.notice = Some(advisory_for(&err));
                Err(err.into())
            }
        }
    }

    /// Deletes an event in the source and drops it from the set.
    pub fn delete_event(&mut self, id: &str) -> ServiceResult<()> {
        match self.source.delete_event(id) {
            Ok(()) => {
                self.events.retain(|event| event.id() != id);
                Ok(())
            }
            Err(err) => {
                warn!(
                    "event=event_delete module=service status=error event_id={} error={}",
                    id, err
                );
                self.notice = Some(advisory_for(&err));
                Err(err.into())
            }
        }
    }

    pub fn calendars(&self) -> Vec<CalendarRef> {
        self.source.list_calendars()
    }

    /// Latest advisory message, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Returns and clears the advisory message (user dismissed it).
    pub fn take_notice(&mut self) -> Option<String> {
        self.notice.take()
    }

    /// Linear year layout over the working set.
    pub fn layout_year(&self, anchor: NaiveDate, today: NaiveDate) -> YearLayout {
        self.engine.layout_year(anchor, &self.events, today)
    }

    /// Month grid layout over the working set.
    pub fn layout_month_grid(&self, anchor: NaiveDate, today: NaiveDate) -> MonthGrid {
        layout_month_grid(anchor, &self.events, today, self.month_grid_max_events)
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
