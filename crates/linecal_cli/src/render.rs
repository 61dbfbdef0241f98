//! Plain-text drawing of core layouts.

use chrono::Datelike;
use linecal_core::layout::linear::{is_weekend_column, weekday_header, BarShape};
use linecal_core::{LayoutCell, MonthGrid, MonthRow, YearLayout, LINEAR_GRID_COLUMNS};

const LABEL_WIDTH: usize = 5;

fn bar(shape: BarShape) -> &'static str {
    match shape {
        BarShape::Single => "[]",
        BarShape::Start => "[=",
        BarShape::Middle => "==",
        BarShape::End => "=]",
    }
}

/// Renders the linear year: one header, then day numbers, lane bars and overflow per month.
pub fn year(layout: &YearLayout) -> String {
    let mut out = format!("{}\n", layout.year);
    out.push_str(&" ".repeat(LABEL_WIDTH));
    for (column, label) in weekday_header(LINEAR_GRID_COLUMNS).into_iter().enumerate() {
        if is_weekend_column(column) {
            out.push_str(&label.to_ascii_uppercase());
        } else {
            out.push_str(label);
        }
        out.push(' ');
    }
    out.push('\n');

    for row in &layout.months {
        month_row(&mut out, row);
    }
    out
}

fn month_row(out: &mut String, row: &MonthRow) {
    let short: String = row.month_name.chars().take(3).collect();
    out.push_str(&format!("{short:<LABEL_WIDTH$}"));
    for cell in &row.cells {
        match cell {
            LayoutCell::Day(day) => out.push_str(&format!("{:>2} ", day.day_number)),
            LayoutCell::Empty { .. } => out.push_str("   "),
        }
    }
    out.push('\n');

    let lane_count = row
        .day_cells()
        .flat_map(|day| day.events.iter().map(|placement| placement.lane + 1))
        .max()
        .unwrap_or(0);
    for lane in 0..lane_count {
        out.push_str(&" ".repeat(LABEL_WIDTH));
        for cell in &row.cells {
            let token = cell
                .as_day()
                .and_then(|day| day.events.iter().find(|placement| placement.lane == lane))
                .map(|placement| bar(placement.shape()))
                .unwrap_or("  ");
            out.push_str(token);
            out.push(' ');
        }
        out.push('\n');
    }

    if row.day_cells().any(|day| day.overflow_count > 0) {
        out.push_str(&" ".repeat(LABEL_WIDTH));
        for cell in &row.cells {
            match cell.as_day().filter(|day| day.overflow_count > 0) {
                Some(day) => out.push_str(&format!("+{:<1} ", day.overflow_count.min(9))),
                None => out.push_str("   "),
            }
        }
        out.push('\n');
    }

    for day in row.day_cells() {
        for placement in day.events.iter().filter(|placement| placement.show_title) {
            out.push_str(&format!(
                "{:LABEL_WIDTH$}{} {}: {}\n",
                "",
                row.month_name,
                day.day_number,
                placement.event.title()
            ));
        }
    }
}

/// Renders a month grid page with per-week event listings.
pub fn month_grid(grid: &MonthGrid) -> String {
    let mut out = format!("{} {}\n", grid.month.name(), grid.month.year());
    if let Some(today) = grid.days().find(|day| day.is_today && day.in_current_month) {
        out.push_str(&format!("today: {}\n", today.date.format("%b %-d")));
    }
    out.push_str(&grid.weekday_labels.join(" "));
    out.push('\n');

    for week in &grid.weeks {
        let numbers: Vec<String> = week
            .iter()
            .map(|day| {
                if day.in_current_month {
                    format!("{:>2}", day.date.day())
                } else {
                    " .".to_string()
                }
            })
            .collect();
        out.push_str(&numbers.join(" "));
        out.push('\n');

        for day in week.iter().filter(|day| day.in_current_month) {
            if day.events.is_empty() {
                continue;
            }
            let mut titles: Vec<String> = day
                .events
                .iter()
                .map(|event| event.title().to_string())
                .collect();
            if day.overflow_count > 0 {
                titles.push(format!("+{} more", day.overflow_count));
            }
            out.push_str(&format!("  {}: {}\n", day.date.format("%b %-d"), titles.join(", ")));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::{month_grid, year};
    use chrono::NaiveDate;
    use linecal_core::{layout_month_grid, layout_year, CalendarEvent};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).expect("valid test date")
    }

    #[test]
    fn year_text_shows_bars_and_titles() {
        let start = ymd(2024, 1, 30).and_hms_opt(0, 0, 0).expect("valid time");
        let end = ymd(2024, 2, 3).and_hms_opt(0, 0, 0).expect("valid time");
        let trip = CalendarEvent::with_id("trip", "Trip", start, end)
            .expect("valid event")
            .all_day(true);

        let text = year(&layout_year(ymd(2024, 6, 1), &[trip], ymd(2024, 6, 1)));
        assert!(text.starts_with("2024\n"));
        assert!(text.contains("[="));
        assert!(text.contains("=]"));
        assert!(text.contains("January 30: Trip"));
        assert!(text.contains("February 1: Trip"));
    }

    #[test]
    fn month_text_marks_outside_days() {
        let text = month_grid(&layout_month_grid(ymd(2024, 2, 1), &[], ymd(2024, 2, 1), 3));
        assert!(text.starts_with("February 2024\ntoday: Feb 1\nSu Mo"));
        assert!(text.contains(" ."));
    }
}
