//! Lane bookkeeping for multi-day events.

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

use crate::model::event::EventId;

/// Event id -> lane map scoped to one year layout pass.
///
/// A multi-day event keeps the lane recorded here on every day it spans.
/// Single-day events are never recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LaneAssignments {
    lanes: BTreeMap<EventId, usize>,
}

impl LaneAssignments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the pinned lane for `event_id`, if any.
    pub fn get(&self, event_id: &str) -> Option<usize> {
        self.lanes.get(event_id).copied()
    }

    /// Pins `event_id` to `lane` unless it already has one.
    ///
    /// Returns the lane the event ends up with.
    pub fn pin(&mut self, event_id: &str, lane: usize) -> usize {
        *self.lanes.entry(event_id.to_string()).or_insert(lane)
    }

    pub fn len(&self) -> usize {
        self.lanes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lanes.is_empty()
    }

    /// Pinned entries in event id order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.lanes.iter().map(|(id, lane)| (id.as_str(), *lane))
    }
}

/// Lowest non-negative lane not present in `occupied`.
pub fn lowest_free_lane(occupied: &BTreeSet<usize>) -> usize {
    let mut candidate = 0;
    for lane in occupied {
        if *lane != candidate {
            break;
        }
        candidate += 1;
    }
    candidate
}
