//! Fixed-locale display names.

use crate::calendar::date::WeekStart;

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const MONTH_SHORT_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Monday-first short weekday labels.
const WEEKDAY_NAMES_MONDAY_FIRST: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
/// Sunday-first short weekday labels.
const WEEKDAY_NAMES_SUNDAY_FIRST: [&str; 7] = ["Su", "Mo", "Tu", "We", "Th", "Fr", "Sa"];

/// Full month name for a 1-based month; `None` outside `1..=12`.
pub fn month_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)?;
    MONTH_NAMES.get(index as usize).copied()
}

/// Three-letter month name for a 1-based month; `None` outside `1..=12`.
pub fn month_short_name(month: u32) -> Option<&'static str> {
    let index = month.checked_sub(1)?;
    MONTH_SHORT_NAMES.get(index as usize).copied()
}

/// Two-letter weekday label for a weekday index under `week_start`.
pub fn weekday_name(index: u32, week_start: WeekStart) -> &'static str {
    let table = match week_start {
        WeekStart::Monday => &WEEKDAY_NAMES_MONDAY_FIRST,
        WeekStart::Sunday => &WEEKDAY_NAMES_SUNDAY_FIRST,
    };
    table[(index % 7) as usize]
}

/// All seven weekday labels in display order.
pub fn weekday_names(week_start: WeekStart) -> [&'static str; 7] {
    match week_start {
        WeekStart::Monday => WEEKDAY_NAMES_MONDAY_FIRST,
        WeekStart::Sunday => WEEKDAY_NAMES_SUNDAY_FIRST,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_names_are_indexed_from_one() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_short_name(9), Some("Sep"));
    }

    #[test]
    fn month_names_reject_out_of_range_months() {
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
        assert_eq!(month_short_name(0), None);
        assert_eq!(month_short_name(13), None);
    }

    #[test]
    fn weekday_names_follow_week_start() {
        assert_eq!(weekday_name(0, WeekStart::Monday), "Mo");
        assert_eq!(weekday_name(0, WeekStart::Sunday), "Su");
        assert_eq!(weekday_name(6, WeekStart::Monday), "Su");
        assert_eq!(weekday_names(WeekStart::Sunday)[6], "Sa");
    }
}
