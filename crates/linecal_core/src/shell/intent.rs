//! User intents emitted by a renderer and the state they drive.

use chrono::NaiveDate;

use crate::model::event::CalendarEvent;
use crate::shell::detail::EventDetail;
use crate::shell::form::EventDraft;
use crate::shell::navigation::{date_title, navigate, Direction, ViewType};

/// Something the user asked for by clicking, double-clicking or dragging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellIntent {
    /// Single click on a day cell.
    DateSelected(NaiveDate),
    /// Double click (no end) or finished drag (with end).
    CreateRequested {
        start: NaiveDate,
        end: Option<NaiveDate>,
    },
    /// Click on an event bar or pill.
    EventSelected(CalendarEvent),
}

/// What the renderer should show next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEffect {
    ShowDay(NaiveDate),
    OpenCreateForm(EventDraft),
    OpenEventDetail(EventDetail),
}

/// Current anchor date and view type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShellState {
    anchor: NaiveDate,
    view: ViewType,
}

impl ShellState {
    /// Starts on the year view anchored at `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            anchor: today,
            view: ViewType::Year,
        }
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn view(&self) -> ViewType {
        self.view
    }

    pub fn set_view(&mut self, view: ViewType) {
        self.view = view;
    }

    pub fn go(&mut self, direction: Direction) {
        self.anchor = navigate(self.anchor, self.view, direction);
    }

    pub fn go_today(&mut self, today: NaiveDate) {
        self.anchor = today;
    }

    pub fn title(&self) -> String {
        date_title(self.view, self.anchor)
    }

    /// Applies one intent and returns the follow-up the renderer should present.
    pub fn apply(&mut self, intent: ShellIntent) -> ShellEffect {
        match intent {
            ShellIntent::DateSelected(date) => {
                self.anchor = date;
                self.view = ViewType::Day;
                ShellEffect::ShowDay(date)
            }
            ShellIntent::CreateRequested { start, end } => {
                ShellEffect::OpenCreateForm(EventDraft::for_dates(start, end))
            }
            ShellIntent::EventSelected(event) => {
                ShellEffect::OpenEventDetail(EventDetail::from_event(&event))
            }
        }
    }
}
