//! Calendar layout engines.
//!
//! # Responsibility
//! - Turn a materialized event list into renderer-ready cells.
//! - Keep lane assignment deterministic so repeated renders never jitter.
//!
//! # Invariants
//! - Layout never mutates its input events and performs no I/O.
//! - Lane state lives only inside one explicit `LaneAssignments` value.

pub mod lanes;
pub mod linear;
pub mod month_grid;
