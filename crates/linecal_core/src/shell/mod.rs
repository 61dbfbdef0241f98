//! View-shell contract: what a UI toolkit feeds in and gets back.
//!
//! # Responsibility
//! - Model user intents, navigation state and drag selection without any
//!   widget dependency.
//! - Provide form and detail view-models for event creation and display.
//!
//! # Invariants
//! - No layout logic lives here; renderers consume `layout` output directly.

pub mod detail;
pub mod form;
pub mod intent;
pub mod navigation;
pub mod selection;
