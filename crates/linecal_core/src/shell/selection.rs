//! Drag selection across day cells.

use chrono::NaiveDate;

use crate::shell::intent::ShellIntent;

/// In-progress drag over day cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DateSelection {
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
}

impl DateSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Starts a drag on `date` unless one is already running.
    pub fn begin(&mut self, date: NaiveDate) {
        if self.start.is_none() {
            self.start = Some(date);
        }
    }

    /// Moves the drag end to `date`; ignored when no drag is running.
    pub fn extend(&mut self, date: NaiveDate) {
        if self.start.is_some() {
            self.end = Some(date);
        }
    }

    /// Inclusive, order-insensitive membership.
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start.min(end) <= date && date <= start.max(end),
            (Some(start), None) => start == date,
            _ => false,
        }
    }

    /// Ends the drag and produces a create request, earliest day first.
    pub fn finish(&mut self) -> Option<ShellIntent> {
        let start = self.start.take()?;
        let end = self.end.take();
        let intent = match end {
            Some(end) if end < start => ShellIntent::CreateRequested {
                start: end,
                end: Some(start),
            },
            Some(end) if end == start => ShellIntent::CreateRequested { start, end: None },
            _ => ShellIntent::CreateRequested { start, end },
        };
        Some(intent)
    }

    pub fn clear(&mut self) {
        self.start = None;
        self.end = None;
    }
}
