//! Event domain model.
//!
//! # Responsibility
//! - Define the canonical event value shared by layout, sources and shell.
//!
//! # Invariants
//! - Every event is identified by a stable `EventId`.
//! - Construction rejects reversed time windows before the layout engine sees them.

pub mod event;
