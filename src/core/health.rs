//! Health module - segmented health bar
//!
//! Health is a fixed-capacity stack of segments. Each hit pops one segment;
//! the session ends while the final segment is still standing, so a full bar
//! of six absorbs five hits before the sixth is fatal.

use arrayvec::ArrayVec;

use crate::types::HEALTH_CAPACITY;

/// Opaque handle for one health segment, so hosts can map segments to their
/// own display objects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentId(pub u32);

/// Result of a single deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthEvent {
    /// A segment was removed; the session continues.
    Damaged,
    /// The last segment was reached; the session is over. The segment is
    /// left standing.
    GameOver,
}

/// The health bar.
#[derive(Debug, Clone)]
pub struct HealthTracker {
    segments: ArrayVec<SegmentId, { HEALTH_CAPACITY }>,
}

impl HealthTracker {
    /// A full bar of [`HEALTH_CAPACITY`] segments.
    pub fn new() -> Self {
        let mut tracker = Self {
            segments: ArrayVec::new(),
        };
        tracker.initialize();
        tracker
    }

    /// Remaining segments.
    pub fn lives(&self) -> u32 {
        self.segments.len() as u32
    }

    pub fn segments(&self) -> &[SegmentId] {
        &self.segments
    }

    /// Take one hit.
    ///
    /// With more than one segment standing, pops the topmost and reports
    /// [`HealthEvent::Damaged`]. With exactly one left, reports
    /// [`HealthEvent::GameOver`] without removing it.
    pub fn deduct(&mut self) -> HealthEvent {
        if self.segments.len() > 1 {
            self.segments.pop();
            HealthEvent::Damaged
        } else {
            HealthEvent::GameOver
        }
    }

    /// Build a fresh bar at full capacity. Call [`Self::reset`] first when
    /// reusing a tracker between sessions.
    pub fn initialize(&mut self) {
        self.segments.clear();
        for i in 0..HEALTH_CAPACITY as u32 {
            self.segments.push(SegmentId(i));
        }
    }

    /// Tear the bar down to zero segments.
    pub fn reset(&mut self) {
        self.segments.clear();
    }
}

impl Default for HealthTracker {
    fn default() -> Self {
        Self::new()
    }
}
