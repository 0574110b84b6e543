//! Ordered collection of committed strokes.

use crate::stroke::{Stroke, StrokeId};
use serde::{Deserialize, Serialize};

/// All committed strokes of a drawing surface, in insertion order.
/// Insertion order is the visible z-order: later strokes paint over
/// earlier ones. Strokes are never mutated in place; the only mutation
/// primitives are [`append`](Self::append),
/// [`replace_set`](Self::replace_set), and [`clear`](Self::clear).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StrokeStore {
    strokes: Vec<Stroke>,
}

impl StrokeStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a stroke on top of the z-order.
    pub fn append(&mut self, stroke: Stroke) {
        self.strokes.push(stroke);
    }

    /// Atomically remove the given strokes and append the replacements.
    pub fn replace_set(&mut self, remove: &[StrokeId], append: Vec<Stroke>) {
        self.strokes.retain(|stroke| !remove.contains(&stroke.id()));
        self.strokes.extend(append);
    }

    /// Remove all strokes.
    pub fn clear(&mut self) {
        self.strokes.clear();
    }

    /// Read-only view of all strokes in z-order, e.g. for persistence or
    /// rasterization handoff.
    pub fn strokes(&self) -> &[Stroke] {
        &self.strokes
    }

    /// Get a stroke by ID.
    pub fn get(&self, id: StrokeId) -> Option<&Stroke> {
        self.strokes.iter().find(|stroke| stroke.id() == id)
    }

    /// Check if a stroke is present.
    pub fn contains(&self, id: StrokeId) -> bool {
        self.get(id).is_some()
    }

    /// Get the number of strokes.
    pub fn len(&self) -> usize {
        self.strokes.len()
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.strokes.is_empty()
    }

    /// Serialize the store to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserialize a store from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
