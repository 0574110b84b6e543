//! Host-facing drawing session: gesture lifecycle, erasing, snapshots.
//!
//! The host (UI layer) owns pointer plumbing, rendering, and history; it
//! drives this session with gesture events and reads the store back. All
//! operations are synchronous and total: denied or stale input degrades to
//! a no-op, never an abort.

use crate::builder::StrokeBuilder;
use crate::eraser;
use crate::fitter::QualityTier;
use crate::gate::{self, DeviceKind};
use crate::store::StrokeStore;
use crate::stroke::{SerializableColor, Stroke, StrokeId, Tool};
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// Host environment profile, fixed for the session's lifetime.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SurfaceProfile {
    /// Quality tier governing filtering, curve fitting, and precision.
    pub tier: QualityTier,
    /// Tablet-class surfaces gate drawing tools to the stylus.
    pub large_surface: bool,
}

/// Handle to the gesture currently being captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureId(u64);

/// Outcome of [`DrawingSession::begin_gesture`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureStart {
    /// Capture started; pass the handle to updates and the final end call.
    Started(GestureId),
    /// The input gate denied the gesture. Expected on large surfaces when
    /// a drawing tool is driven by touch; the host simply does not enter
    /// capture mode.
    Blocked,
}

/// Result of ending a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommitResult {
    /// Whether a stroke was appended to the store.
    pub committed: bool,
    /// The committed stroke, when there is one.
    pub stroke_id: Option<StrokeId>,
}

/// A drawing surface session: one store, one active gesture at a time.
#[derive(Debug, Clone)]
pub struct DrawingSession {
    profile: SurfaceProfile,
    store: StrokeStore,
    builder: StrokeBuilder,
    active: Option<GestureId>,
    next_gesture: u64,
    commit_seq: u64,
}

impl DrawingSession {
    /// Create a session with an empty store.
    pub fn new(profile: SurfaceProfile) -> Self {
        Self::with_store(profile, StrokeStore::new())
    }

    /// Create a session over an existing store, e.g. one restored from a
    /// persisted snapshot. New commits are stamped after every restored
    /// stroke.
    pub fn with_store(profile: SurfaceProfile, store: StrokeStore) -> Self {
        let last = store
            .strokes()
            .iter()
            .map(|stroke| stroke.created_at)
            .fold(-1.0, f64::max);
        let commit_seq = (last.floor() as i64 + 1).max(0) as u64;
        Self {
            profile,
            store,
            builder: StrokeBuilder::new(profile.tier),
            active: None,
            next_gesture: 0,
            commit_seq,
        }
    }

    /// Begin a gesture. The gate decision is made here, once, and held
    /// for the gesture's lifetime.
    pub fn begin_gesture(
        &mut self,
        tool: Tool,
        color: SerializableColor,
        base_width: f64,
        device: DeviceKind,
    ) -> GestureStart {
        if !gate::admit(tool, device, self.profile.large_surface) {
            return GestureStart::Blocked;
        }

        let handle = GestureId(self.next_gesture);
        self.next_gesture += 1;
        self.builder.begin(tool, color, base_width, device);
        self.active = Some(handle);
        GestureStart::Started(handle)
    }

    /// Record a sample for the active gesture and return the refreshed
    /// live preview encoding. Stale handles and eraser gestures return
    /// `None`.
    pub fn update_gesture(&mut self, handle: GestureId, point: Point) -> Option<String> {
        if self.active != Some(handle) {
            return None;
        }
        self.builder.update(point)
    }

    /// End the active gesture, committing a stroke when it produced
    /// renderable geometry. The gesture state is discarded either way.
    pub fn end_gesture(&mut self, handle: GestureId) -> CommitResult {
        if self.active != Some(handle) {
            return CommitResult {
                committed: false,
                stroke_id: None,
            };
        }
        self.active = None;

        match self.builder.finish(self.commit_seq as f64) {
            Some(stroke) => {
                self.commit_seq += 1;
                let stroke_id = stroke.id();
                self.store.append(stroke);
                CommitResult {
                    committed: true,
                    stroke_id: Some(stroke_id),
                }
            }
            None => CommitResult {
                committed: false,
                stroke_id: None,
            },
        }
    }

    /// Erase the material of all strokes within `radius` of `center`.
    /// Returns `true` when the store changed.
    pub fn erase_at(&mut self, center: Point, radius: f64) -> bool {
        eraser::erase_at(&mut self.store, center, radius)
    }

    /// Read-only export of the committed strokes in z-order.
    pub fn snapshot(&self) -> &[Stroke] {
        self.store.strokes()
    }

    /// The underlying store.
    pub fn store(&self) -> &StrokeStore {
        &self.store
    }

    /// Remove all committed strokes.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// The session's surface profile.
    pub fn profile(&self) -> SurfaceProfile {
        self.profile
    }
}
