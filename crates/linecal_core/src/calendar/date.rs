//! Gregorian date helpers used by every layout pass.
//!
//! # Responsibility
//! - Compute month/year/day boundaries and enumerate days and months.
//! - Map a date to its weekday column for a given week-start convention.
//!
//! # Invariants
//! - `days_in_month` always returns 28..=31 ascending dates.
//! - `months_in_year` always returns 12 first-of-month dates, January first.
//! - Construction from raw components never wraps silently.

use chrono::{Datelike, Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

use crate::calendar::names::{month_name, weekday_name};

/// First column of a displayed week.
///
/// The linear year view is Monday-first; the month grid view is Sunday-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeekStart {
    Monday,
    Sunday,
}

/// Date construction errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarDateError {
    /// Components do not name a real Gregorian date (e.g. month 13, Feb 30).
    InvalidDateComponents { year: i32, month: u32, day: u32 },
}

impl Display for CalendarDateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidDateComponents { year, month, day } => write!(
                f,
                "invalid date components: year={year} month={month} day={day}"
            ),
        }
    }
}

impl Error for CalendarDateError {}

/// Builds a date from raw components.
///
/// # Errors
/// - Returns `InvalidDateComponents` when the components are out of range.
pub fn date_from_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, CalendarDateError> {
    NaiveDate::from_ymd_opt(year, month, day)
        .ok_or(CalendarDateError::InvalidDateComponents { year, month, day })
}

/// Gregorian leap-year rule.
pub fn is_leap_year(year: i32) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in the given month (28..=31).
pub fn month_length(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        _ => 28,
    }
}

/// First day of the month containing `date`.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Last day of the month containing `date`.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let last = month_length(date.year(), date.month());
    date.with_day(last).unwrap_or(date)
}

/// January 1st of the year containing `date`.
pub fn start_of_year(date: NaiveDate) -> NaiveDate {
    date.with_ordinal(1).unwrap_or(date)
}

/// December 31st of the year containing `date`.
pub fn end_of_year(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), 12, 31).unwrap_or(date)
}

/// First instant of `date`.
pub fn start_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Last whole second of `date`.
pub fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1) - Duration::seconds(1)
}

/// Exclusive upper bound of `date`, i.e. midnight of the following day.
pub fn next_day_start(date: NaiveDate) -> NaiveDateTime {
    start_of_day(date) + Duration::days(1)
}

/// Every calendar day of the month containing `date`, ascending.
pub fn days_in_month(date: NaiveDate) -> Vec<NaiveDate> {
    start_of_month(date)
        .iter_days()
        .take(month_length(date.year(), date.month()) as usize)
        .collect()
}

/// The 12 first-of-month dates of the year containing `date`.
pub fn months_in_year(date: NaiveDate) -> Vec<NaiveDate> {
    (1..=12)
        .filter_map(|month| NaiveDate::from_ymd_opt(date.year(), month, 1))
        .collect()
}

/// Day-of-week position in `[0, 6]`, 0 being the first day of the week.
pub fn weekday_index(date: NaiveDate, week_start: WeekStart) -> u32 {
    match week_start {
        WeekStart::Monday => date.weekday().num_days_from_monday(),
        WeekStart::Sunday => date.weekday().num_days_from_sunday(),
    }
}

/// Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

/// A year+month pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    /// # Errors
    /// - Returns `InvalidDateComponents` when `month` is outside `1..=12`.
    pub fn new(year: i32, month: u32) -> Result<Self, CalendarDateError> {
        date_from_ymd(year, month, 1)?;
        Ok(Self { year, month })
    }

    /// Month containing `date`.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(self) -> i32 {
        self.year
    }

    pub fn month(self) -> u32 {
        self.month
    }

    pub fn first_day(self) -> NaiveDate {
        NaiveDate::from_ymd_opt(self.year, self.month, 1).unwrap_or(NaiveDate::MIN)
    }

    pub fn last_day(self) -> NaiveDate {
        end_of_month(self.first_day())
    }

    pub fn day_count(self) -> u32 {
        month_length(self.year, self.month)
    }

    /// Day `day` of this month, if it exists.
    pub fn day(self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// Weekday index of the 1st under `week_start`.
    pub fn first_weekday(self, week_start: WeekStart) -> u32 {
        weekday_index(self.first_day(), week_start)
    }

    pub fn name(self) -> &'static str {
        // `YearMonth::new` already rejected months outside 1..=12.
        month_name(self.month).unwrap_or_default()
    }

    /// Half-open instant range `[first day 00:00, next month 00:00)`.
    pub fn instant_range(self) -> (NaiveDateTime, NaiveDateTime) {
        (start_of_day(self.first_day()), next_day_start(self.last_day()))
    }
}

impl Display for YearMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Derived per-day facts used by renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Day {
    pub date: NaiveDate,
    pub weekday_index: u32,
    pub is_today: bool,
}

impl Day {
    pub fn new(date: NaiveDate, week_start: WeekStart, today: NaiveDate) -> Self {
        Self {
            date,
            weekday_index: weekday_index(date, week_start),
            is_today: date == today,
        }
    }

    pub fn weekday_name(&self, week_start: WeekStart) -> &'static str {
        weekday_name(self.weekday_index, week_start)
    }
}

/// Half-open instant range covering the whole year containing `date`.
pub fn year_instant_range(date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
    (
        start_of_day(start_of_year(date)),
        next_day_start(end_of_year(date)),
    )
}

/// Today's date on the local calendar.
pub fn local_today() -> NaiveDate {
    Local::now().date_naive()
}
