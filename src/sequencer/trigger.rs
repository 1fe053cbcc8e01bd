//! Signal Latch Layer
//!
//! Captures asynchronous transitions of the trigger inputs (PTT, RTS)
//! into consistent boolean state for the polling cycle. Each latch is a
//! level snapshot, not an edge count: the edge-watch task re-reads the
//! pin after every transition and stores the observed level, nothing
//! more. Spurious or contended reads reflect electrical noise and are
//! tolerated by the state machine's timing margins, not filtered here.

use core::sync::atomic::{AtomicBool, Ordering};

/// Latched level of one asynchronous trigger input
///
/// Single writer (the trigger's edge-watch task), single reader (the
/// polling cycle). A bare atomic is all the sharing this needs; the
/// sequencing protocol tolerates a capture landing at any point,
/// including mid-sequence, because it re-reads the live input at its
/// checkpoints.
pub struct TriggerLatch {
    level: AtomicBool,
}

impl TriggerLatch {
    /// Create a latch holding the inactive level
    #[must_use]
    pub const fn new() -> Self {
        Self {
            level: AtomicBool::new(false),
        }
    }

    /// Store the level observed after an edge
    ///
    /// The entire job of the edge path. No delays, no blocking calls.
    pub fn capture(&self, active: bool) {
        self.level.store(active, Ordering::Relaxed);
    }

    /// Most recently captured level
    #[must_use]
    pub fn current(&self) -> bool {
        self.level.load(Ordering::Relaxed)
    }
}

impl Default for TriggerLatch {
    fn default() -> Self {
        Self::new()
    }
}
