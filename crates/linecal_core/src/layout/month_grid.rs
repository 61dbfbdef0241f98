//! Sunday-first month grid layout (classic wall-calendar page).
//!
//! # Responsibility
//! - Cover whole weeks around one month, including adjacent-month days.
//! - List up to `max_visible` events per day and count the rest.
//!
//! # Invariants
//! - The grid starts on a Sunday and ends on a Saturday.
//! - Every week row has exactly 7 days.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::calendar::date::{is_weekend, weekday_index, WeekStart, YearMonth};
use crate::calendar::names::weekday_names;
use crate::model::event::{events_on, CalendarEvent};

/// Week start used by the month grid view.
pub const MONTH_GRID_WEEK_START: WeekStart = WeekStart::Sunday;
/// Visible events per grid day before the `+n more` indicator.
pub const DEFAULT_GRID_MAX_EVENTS_PER_DAY: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GridDay {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub is_weekend: bool,
    /// Visible events sorted by start then id.
    pub events: Vec<CalendarEvent>,
    pub overflow_count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub month: YearMonth,
    pub weekday_labels: [&'static str; 7],
    pub weeks: Vec<Vec<GridDay>>,
}

impl MonthGrid {
    pub fn days(&self) -> impl Iterator<Item = &GridDay> {
        self.weeks.iter().flatten()
    }

    pub fn day(&self, date: NaiveDate) -> Option<&GridDay> {
        self.days().find(|day| day.date == date)
    }
}

/// Lays out the month containing `anchor` as whole Sunday-first weeks.
pub fn layout_month_grid(
    anchor: NaiveDate,
    events: &[CalendarEvent],
    today: NaiveDate,
    max_visible: usize,
) -> MonthGrid {
    let max_visible = max_visible.max(1);
    let month = YearMonth::of(anchor);
    let first = month.first_day();
    let last = month.last_day();
    let grid_start = first - Duration::days(i64::from(weekday_index(first, MONTH_GRID_WEEK_START)));
    let grid_end = last + Duration::days(i64::from(6 - weekday_index(last, MONTH_GRID_WEEK_START)));

    let days: Vec<GridDay> = grid_start
        .iter_days()
        .take_while(|date| *date <= grid_end)
        .map(|date| {
            let occurring = events_on(events, date);
            let overflow_count = occurring.len().saturating_sub(max_visible);
            GridDay {
                date,
                in_current_month: date.month() == month.month() && date.year() == month.year(),
                is_today: date == today,
                is_weekend: is_weekend(date),
                events: occurring
                    .into_iter()
                    .take(max_visible)
                    .cloned()
                    .collect(),
                overflow_count,
            }
        })
        .collect();

    MonthGrid {
        month,
        weekday_labels: weekday_names(MONTH_GRID_WEEK_START),
        weeks: days.chunks(7).map(<[GridDay]>::to_vec).collect(),
    }
}
