//! Core domain logic for LineCal.
//! This crate is the single source of truth for calendar math, layout and
//! event invariants; renderers only draw what it produces.

pub mod calendar;
pub mod config;
pub mod layout;
pub mod logging;
pub mod model;
pub mod service;
pub mod shell;
pub mod source;

pub use calendar::date::{Day, WeekStart, YearMonth};
pub use config::{CalendarConfig, ConfigError};
pub use layout::linear::{
    layout_year, DayCell, EventPlacement, LayoutCell, LinearLayoutEngine, MonthRow, YearLayout,
    LINEAR_GRID_COLUMNS,
};
pub use layout::month_grid::{layout_month_grid, GridDay, MonthGrid};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig, LoggingError};
pub use model::event::{CalendarEvent, EventColor, EventId, EventValidationError};
pub use service::calendar_service::{CalendarService, CalendarServiceError, ServiceResult};
pub use shell::form::{DraftError, EventDraft};
pub use shell::intent::{ShellEffect, ShellIntent, ShellState};
pub use shell::navigation::{Direction, ViewType};
pub use source::{
    CalendarRef, DisabledEventSource, EventSource, InMemoryEventSource, NewEvent, SourceError,
    SourceResult,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
