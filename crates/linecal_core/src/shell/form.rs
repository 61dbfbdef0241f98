//! Event creation form model.
//!
//! # Responsibility
//! - Hold editable form fields and their defaults.
//! - Turn a filled form into a validated `NewEvent`.
//!
//! # Invariants
//! - A draft without an explicit end lasts one hour.
//! - All-day drafts cover whole days as a half-open range.

use chrono::{Duration, NaiveDate, NaiveDateTime, NaiveTime};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::calendar::date::{next_day_start, start_of_day};
use crate::model::event::EventValidationError;
use crate::source::NewEvent;

const DEFAULT_EVENT_DURATION_HOURS: i64 = 1;

/// Form submission errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DraftError {
    /// Title is empty after trim; the save action stays disabled.
    BlankTitle,
    /// Time window is reversed.
    Event(EventValidationError),
}

impl Display for DraftError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "event title must not be blank"),
            Self::Event(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DraftError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BlankTitle => None,
            Self::Event(err) => Some(err),
        }
    }
}

impl From<EventValidationError> for DraftError {
    fn from(value: EventValidationError) -> Self {
        Self::Event(value)
    }
}

/// Editable state of the create-event form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventDraft {
    pub title: String,
    pub location: String,
    pub notes: String,
    start: NaiveDateTime,
    end: NaiveDateTime,
    is_all_day: bool,
}

impl EventDraft {
    /// Starts a timed draft; `end` defaults to one hour after `start`.
    pub fn new(start: NaiveDateTime, end: Option<NaiveDateTime>) -> Self {
        Self {
            title: String::new(),
            location: String::new(),
            notes: String::new(),
            start,
            end: end.unwrap_or(start + Duration::hours(DEFAULT_EVENT_DURATION_HOURS)),
            is_all_day: false,
        }
    }

    /// Draft for a double-click (single day) or a drag (day range).
    ///
    /// A day range becomes an all-day draft covering every selected day.
    pub fn for_dates(start: NaiveDate, end: Option<NaiveDate>) -> Self {
        match end {
            Some(end) => {
                let mut draft = Self::new(start_of_day(start), Some(next_day_start(end.max(start))));
                draft.is_all_day = true;
                draft
            }
            None => Self::new(start_of_day(start), None),
        }
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

    pub fn set_start(&mut self, start: NaiveDateTime) {
        self.start = start;
    }

    pub fn set_end(&mut self, end: NaiveDateTime) {
        self.end = end;
    }

    /// Toggles all-day; switching on snaps both ends to day boundaries.
    pub fn set_all_day(&mut self, is_all_day: bool) {
        self.is_all_day = is_all_day;
        if !is_all_day {
            return;
        }
        self.start = start_of_day(self.start.date());
        let end_is_boundary = self.end.time() == NaiveTime::MIN && self.end > self.start;
        if !end_is_boundary {
            self.end = next_day_start(self.end.date());
        }
    }

    /// Whether the save action should be enabled.
    pub fn can_save(&self) -> bool {
        !self.title.trim().is_empty()
    }

    /// Validates the form into a creation request.
    ///
    /// # Errors
    /// - `BlankTitle` when the trimmed title is empty.
    /// - `Event(EndBeforeStart)` when the end precedes the start.
    pub fn build(&self) -> Result<NewEvent, DraftError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(DraftError::BlankTitle);
        }
        Ok(NewEvent::new(
            title,
            self.start,
            self.end,
            self.is_all_day,
            non_blank(&self.location),
            non_blank(&self.notes),
        )?)
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
