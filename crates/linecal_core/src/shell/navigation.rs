//! View switching and previous/next navigation.

use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};

/// Calendar view granularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewType {
    Day,
    Week,
    Month,
    Year,
}

impl ViewType {
    pub const ALL: [ViewType; 4] = [Self::Day, Self::Week, Self::Month, Self::Year];

    pub fn label(self) -> &'static str {
        match self {
            Self::Day => "Day",
            Self::Week => "Week",
            Self::Month => "Month",
            Self::Year => "Year",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// Moves `date` one step of `view` in `direction`.
///
/// Month and year steps clamp to the last valid day (Jan 31 + 1 month = Feb 29/28).
/// Dates outside chrono's range are returned unchanged.
pub fn navigate(date: NaiveDate, view: ViewType, direction: Direction) -> NaiveDate {
    let moved = match (view, direction) {
        (ViewType::Day, Direction::Previous) => date.checked_sub_signed(Duration::days(1)),
        (ViewType::Day, Direction::Next) => date.checked_add_signed(Duration::days(1)),
        (ViewType::Week, Direction::Previous) => date.checked_sub_signed(Duration::weeks(1)),
        (ViewType::Week, Direction::Next) => date.checked_add_signed(Duration::weeks(1)),
        (ViewType::Month, Direction::Previous) => date.checked_sub_months(Months::new(1)),
        (ViewType::Month, Direction::Next) => date.checked_add_months(Months::new(1)),
        (ViewType::Year, Direction::Previous) => date.checked_sub_months(Months::new(12)),
        (ViewType::Year, Direction::Next) => date.checked_add_months(Months::new(12)),
    };
    moved.unwrap_or(date)
}

/// Toolbar title for `view`; the year view shows none.
pub fn date_title(view: ViewType, date: NaiveDate) -> String {
    match view {
        ViewType::Year => String::new(),
        ViewType::Month | ViewType::Week => date.format("%B %Y").to_string(),
        ViewType::Day => format!("{} {}, {}", date.format("%B"), date.day(), date.year()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn navigate_steps_each_view() {
        let date = ymd(2024, 1, 31);
        assert_eq!(navigate(date, ViewType::Day, Direction::Next), ymd(2024, 2, 1));
        assert_eq!(navigate(date, ViewType::Week, Direction::Previous), ymd(2024, 1, 24));
        assert_eq!(navigate(date, ViewType::Month, Direction::Next), ymd(2024, 2, 29));
        assert_eq!(navigate(ymd(2024, 2, 29), ViewType::Year, Direction::Next), ymd(2025, 2, 28));
    }

    #[test]
    fn titles_follow_view() {
        let date = ymd(2024, 3, 5);
        assert_eq!(date_title(ViewType::Year, date), "");
        assert_eq!(date_title(ViewType::Month, date), "March 2024");
        assert_eq!(date_title(ViewType::Day, date), "March 5, 2024");
    }

    #[test]
    fn view_labels_cover_every_view() {
        let labels: Vec<&str> = ViewType::ALL.iter().map(|view| view.label()).collect();
        assert_eq!(labels, vec!["Day", "Week", "Month", "Year"]);
    }
}
