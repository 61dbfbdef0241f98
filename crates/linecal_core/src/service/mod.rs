//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate Event Source calls into renderer-facing use cases.
//! - Translate source failures into advisory notices instead of aborting layout.

pub mod calendar_service;
