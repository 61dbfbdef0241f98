//! Calendar date arithmetic substrate.
//!
//! # Responsibility
//! - Provide pure, total date helpers (boundaries, enumeration, weekday index).
//! - Reject out-of-range date components at construction boundaries.
//!
//! # Invariants
//! - Every helper is defined for every representable `NaiveDate`.
//! - Weekday indexes are always relative to an explicit `WeekStart`.

pub mod date;
pub mod names;
