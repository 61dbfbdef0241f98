//! Linear year layout: one row per month, weekday-aligned day columns.
//!
//! # Responsibility
//! - Place every day of a year on a fixed-width, Monday-first column grid.
//! - Assign event lanes per day, pinning multi-day events to one lane.
//! - Cap visible events per day and count the overflow.
//!
//! # Invariants
//! - Column `c` of every month row shows the same weekday (`c % 7`, Monday = 0).
//! - Given the same events and year, every lane is identical across calls.
//! - A multi-day event displayed on several days uses the same lane on each.
//! - `overflow_count == total events that day - displayed events`.

use chrono::{Datelike, NaiveDate};
use log::debug;
use serde::Serialize;
use std::collections::BTreeSet;
use std::time::Instant;

use crate::calendar::date::{is_weekend, months_in_year, Day, WeekStart, YearMonth};
use crate::calendar::names::weekday_name;
use crate::layout::lanes::{lowest_free_lane, LaneAssignments};
use crate::model::event::{events_in_range, CalendarEvent};

/// Week start used by the linear year view.
pub const LINEAR_WEEK_START: WeekStart = WeekStart::Monday;
/// Day columns per month row: 31 days plus the largest leading offset (6).
pub const LINEAR_GRID_COLUMNS: usize = 37;
/// Visible events per day cell before the rest is folded into the overflow count.
pub const DEFAULT_MAX_EVENTS_PER_DAY: usize = 4;

/// Why a grid column holds no day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PaddingKind {
    BeforeMonth,
    AfterMonth,
}

/// Visual bar shape derived from continuation flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BarShape {
    /// Starts and ends on this day.
    Single,
    /// Starts here and continues into the next day.
    Start,
    /// Continues from the previous day and into the next.
    Middle,
    /// Continues from the previous day and ends here.
    End,
}

/// One event drawn inside a day cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EventPlacement {
    pub event: CalendarEvent,
    pub lane: usize,
    pub continues_prev: bool,
    pub continues_next: bool,
    /// Title is drawn where the bar starts and again at each month's first day.
    pub show_title: bool,
}

impl EventPlacement {
    fn new(event: &CalendarEvent, date: NaiveDate, lane: usize) -> Self {
        let continues_prev = event.continues_before(date);
        Self {
            event: event.clone(),
            lane,
            continues_prev,
            continues_next: event.continues_after(date),
            show_title: !continues_prev || date.day() == 1,
        }
    }

    pub fn shape(&self) -> BarShape {
        match (self.continues_prev, self.continues_next) {
            (false, false) => BarShape::Single,
            (false, true) => BarShape::Start,
            (true, true) => BarShape::Middle,
            (true, false) => BarShape::End,
        }
    }
}

/// A grid column holding a real day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub day_number: u32,
    pub column: usize,
    pub weekday_index: u32,
    pub is_today: bool,
    pub is_weekend: bool,
    /// Displayed events ordered by lane.
    pub events: Vec<EventPlacement>,
    pub overflow_count: usize,
}

impl DayCell {
    /// Total events occurring on this day, displayed or not.
    pub fn total_events(&self) -> usize {
        self.events.len() + self.overflow_count
    }

    pub fn lane_of(&self, event_id: &str) -> Option<usize> {
        self.events
            .iter()
            .find(|placement| placement.event.id() == event_id)
            .map(|placement| placement.lane)
    }
}

/// Output unit per (month row, column).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LayoutCell {
    Empty { column: usize, padding: PaddingKind },
    Day(DayCell),
}

impl LayoutCell {
    pub fn as_day(&self) -> Option<&DayCell> {
        match self {
            Self::Day(cell) => Some(cell),
            Self::Empty { .. } => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }
}

/// One month of the linear year view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthRow {
    pub month: YearMonth,
    pub month_name: String,
    pub first_weekday: u32,
    /// Exactly `LINEAR_GRID_COLUMNS` cells.
    pub cells: Vec<LayoutCell>,
}

impl MonthRow {
    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.cells.iter().filter_map(LayoutCell::as_day)
    }

    pub fn day(&self, day_number: u32) -> Option<&DayCell> {
        self.day_cells().find(|cell| cell.day_number == day_number)
    }
}

/// Result of one full-year pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct YearLayout {
    pub year: i32,
    /// January through December.
    pub months: Vec<MonthRow>,
    /// Lanes pinned for multi-day events during this pass.
    pub lanes: LaneAssignments,
}

impl YearLayout {
    pub fn month(&self, month: u32) -> Option<&MonthRow> {
        self.months.iter().find(|row| row.month.month() == month)
    }

    pub fn day_cell(&self, date: NaiveDate) -> Option<&DayCell> {
        if date.year() != self.year {
            return None;
        }
        self.month(date.month())?.day(date.day())
    }

    pub fn day_cells(&self) -> impl Iterator<Item = &DayCell> {
        self.months.iter().flat_map(MonthRow::day_cells)
    }
}

/// Linear year layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinearLayoutEngine {
    max_events_per_day: usize,
}

impl Default for LinearLayoutEngine {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_EVENTS_PER_DAY)
    }
}

impl LinearLayoutEngine {
    /// Creates an engine; a zero cap is raised to one.
    pub fn new(max_events_per_day: usize) -> Self {
        Self {
            max_events_per_day: max_events_per_day.max(1),
        }
    }

    pub fn max_events_per_day(&self) -> usize {
        self.max_events_per_day
    }

    /// Lays out the year containing `anchor` with a freshly built lane map.
    pub fn layout_year(
        &self,
        anchor: NaiveDate,
        events: &[CalendarEvent],
        today: NaiveDate,
    ) -> YearLayout {
        let started_at = Instant::now();
        let mut lanes = LaneAssignments::new();
        let months = months_in_year(anchor)
            .into_iter()
            .map(|first_day| self.layout_month(YearMonth::of(first_day), events, today, &mut lanes))
            .collect::<Vec<_>>();

        let placed: usize = months
            .iter()
            .flat_map(MonthRow::day_cells)
            .map(|cell| cell.events.len())
            .sum();
        debug!(
            "event=layout_year module=layout status=ok year={} events={} placed={} pinned={} duration_ms={}",
            anchor.year(),
            events.len(),
            placed,
            lanes.len(),
            started_at.elapsed().as_millis()
        );

        YearLayout {
            year: anchor.year(),
            months,
            lanes,
        }
    }

    /// Lays out one month row, reading and extending `lanes`.
    ///
    /// Months must be fed in ascending order for multi-day lanes to carry over.
    pub fn layout_month(
        &self,
        month: YearMonth,
        events: &[CalendarEvent],
        today: NaiveDate,
        lanes: &mut LaneAssignments,
    ) -> MonthRow {
        let first_weekday = month.first_weekday(LINEAR_WEEK_START);
        let leading = first_weekday as usize;
        let day_count = month.day_count() as usize;
        let (range_start, range_end) = month.instant_range();
        let month_events = events_in_range(events, range_start, range_end);

        let cells = (0..LINEAR_GRID_COLUMNS)
            .map(|column| {
                if column < leading {
                    return LayoutCell::Empty {
                        column,
                        padding: PaddingKind::BeforeMonth,
                    };
                }
                if column >= leading + day_count {
                    return LayoutCell::Empty {
                        column,
                        padding: PaddingKind::AfterMonth,
                    };
                }
                let day_number = (column - leading + 1) as u32;
                match month.day(day_number) {
                    Some(date) => {
                        LayoutCell::Day(self.layout_day(date, column, &month_events, today, lanes))
                    }
                    None => LayoutCell::Empty {
                        column,
                        padding: PaddingKind::AfterMonth,
                    },
                }
            })
            .collect();

        MonthRow {
            month,
            month_name: month.name().to_string(),
            first_weekday,
            cells,
        }
    }

    fn layout_day(
        &self,
        date: NaiveDate,
        column: usize,
        month_events: &[&CalendarEvent],
        today: NaiveDate,
        lanes: &mut LaneAssignments,
    ) -> DayCell {
        // `month_events` is already sorted by start then id; partition keeps that order.
        let (multi_day, single_day): (Vec<&CalendarEvent>, Vec<&CalendarEvent>) = month_events
            .iter()
            .copied()
            .filter(|event| event.occurs_on(date))
            .partition(|event| event.is_multi_day());
        let total = multi_day.len() + single_day.len();

        // Pinned lanes stay reserved even when their event ends up hidden.
        let mut occupied: BTreeSet<usize> = multi_day
            .iter()
            .filter_map(|event| lanes.get(event.id()))
            .collect();

        let mut placements = Vec::with_capacity(total.min(self.max_events_per_day));
        for event in &multi_day {
            if placements.len() >= self.max_events_per_day {
                break;
            }
            let lane = match lanes.get(event.id()) {
                Some(lane) => lane,
                None => {
                    let lane = lowest_free_lane(&occupied);
                    occupied.insert(lane);
                    lanes.pin(event.id(), lane)
                }
            };
            placements.push(EventPlacement::new(event, date, lane));
        }
        for event in &single_day {
            if placements.len() >= self.max_events_per_day {
                break;
            }
            let lane = lowest_free_lane(&occupied);
            occupied.insert(lane);
            placements.push(EventPlacement::new(event, date, lane));
        }
        placements.sort_by_key(|placement| placement.lane);

        let day = Day::new(date, LINEAR_WEEK_START, today);
        DayCell {
            date,
            day_number: date.day(),
            column,
            weekday_index: day.weekday_index,
            is_today: day.is_today,
            is_weekend: is_weekend(date),
            overflow_count: total - placements.len(),
            events: placements,
        }
    }
}

/// Lays out the year containing `anchor` with the default per-day cap.
pub fn layout_year(anchor: NaiveDate, events: &[CalendarEvent], today: NaiveDate) -> YearLayout {
    LinearLayoutEngine::default().layout_year(anchor, events, today)
}

/// Grid column of `day_number` in `month`.
pub fn column_of(month: YearMonth, day_number: u32) -> usize {
    month.first_weekday(LINEAR_WEEK_START) as usize + day_number.saturating_sub(1) as usize
}

/// Monday-first weekday label for every grid column.
pub fn weekday_header(columns: usize) -> Vec<&'static str> {
    (0..columns)
        .map(|column| weekday_name((column % 7) as u32, LINEAR_WEEK_START))
        .collect()
}

/// Saturday and Sunday columns of the Monday-first grid.
pub fn is_weekend_column(column: usize) -> bool {
    matches!(column % 7, 5 | 6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    fn at(year: i32, month: u32, day: u32, hour: u32) -> NaiveDateTime {
        ymd(year, month, day)
            .and_hms_opt(hour, 0, 0)
            .expect("valid test time")
    }

    fn event(id: &str, start: NaiveDateTime, end: NaiveDateTime) -> CalendarEvent {
        CalendarEvent::with_id(id, id, start, end).expect("valid test event")
    }

    #[test]
    fn month_row_has_fixed_width_and_padding() {
        // 2024-09-01 is a Sunday: the widest possible leading offset.
        let engine = LinearLayoutEngine::default();
        let mut lanes = LaneAssignments::new();
        let month = YearMonth::new(2024, 9).expect("valid month");
        let row = engine.layout_month(month, &[], ymd(2024, 1, 1), &mut lanes);

        assert_eq!(row.cells.len(), LINEAR_GRID_COLUMNS);
        assert_eq!(row.first_weekday, 6);
        assert_eq!(
            row.cells[5],
            LayoutCell::Empty {
                column: 5,
                padding: PaddingKind::BeforeMonth
            }
        );
        let first = row.cells[6].as_day().expect("day 1 at column 6");
        assert_eq!(first.day_number, 1);
        let last = row.cells[35].as_day().expect("day 30 at column 35");
        assert_eq!(last.day_number, 30);
        assert_eq!(
            row.cells[36],
            LayoutCell::Empty {
                column: 36,
                padding: PaddingKind::AfterMonth
            }
        );
    }

    #[test]
    fn pinned_lane_is_reserved_before_new_assignments() {
        let engine = LinearLayoutEngine::default();
        let long = event("long", at(2024, 3, 1, 8), at(2024, 3, 3, 8));
        let short = event("short", at(2024, 3, 2, 0), at(2024, 3, 2, 1));
        let layout = engine.layout_year(ymd(2024, 6, 1), &[long, short], ymd(2024, 1, 1));

        let day_two = layout.day_cell(ymd(2024, 3, 2)).expect("march 2");
        assert_eq!(day_two.lane_of("long"), Some(0));
        assert_eq!(day_two.lane_of("short"), Some(1));
    }

    #[test]
    fn title_reappears_on_first_day_of_month() {
        let engine = LinearLayoutEngine::default();
        let trip = event("trip", at(2024, 1, 30, 10), at(2024, 2, 2, 10));
        let layout = engine.layout_year(ymd(2024, 1, 1), &[trip], ymd(2024, 1, 1));

        let show = |date: NaiveDate| {
            layout.day_cell(date).expect("day in year").events[0].show_title
        };
        assert!(show(ymd(2024, 1, 30)));
        assert!(!show(ymd(2024, 1, 31)));
        assert!(show(ymd(2024, 2, 1)));
        assert!(!show(ymd(2024, 2, 2)));

        let shape = |date: NaiveDate| layout.day_cell(date).expect("day in year").events[0].shape();
        assert_eq!(shape(ymd(2024, 1, 30)), BarShape::Start);
        assert_eq!(shape(ymd(2024, 1, 31)), BarShape::Middle);
        assert_eq!(shape(ymd(2024, 2, 2)), BarShape::End);
    }

    #[test]
    fn weekday_header_is_monday_first() {
        let header = weekday_header(LINEAR_GRID_COLUMNS);
        assert_eq!(header.len(), LINEAR_GRID_COLUMNS);
        assert_eq!(header[0], "Mo");
        assert_eq!(header[6], "Su");
        assert_eq!(header[7], "Mo");
        assert!(is_weekend_column(5));
        assert!(is_weekend_column(13));
        assert!(!is_weekend_column(7));
    }

    #[test]
    fn zero_cap_is_raised_to_one() {
        assert_eq!(LinearLayoutEngine::new(0).max_events_per_day(), 1);
    }
}
