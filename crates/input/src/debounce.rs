//! Trailing-edge debounce for directional input.
//!
//! Every directional event restarts a quiet timer and replaces the pending
//! direction; the direction is released only once no new event has arrived
//! for a full window. Bursts therefore collapse into their last direction and
//! at most one move is dispatched per window.
//!
//! The debouncer is driven by elapsed time from the caller's fixed tick, so it
//! never reads a clock itself.

use crate::types::{Direction, DEFAULT_DEBOUNCE_MS};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    window_ms: u32,
    pending: Option<Direction>,
    quiet_ms: u32,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::with_window_ms(DEFAULT_DEBOUNCE_MS)
    }

    pub fn with_window_ms(window_ms: u32) -> Self {
        Self {
            window_ms,
            pending: None,
            quiet_ms: 0,
        }
    }

    pub fn window_ms(&self) -> u32 {
        self.window_ms
    }

    /// Direction waiting for the window to close.
    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    /// Record a directional event, superseding any pending one.
    pub fn push(&mut self, direction: Direction) {
        self.pending = Some(direction);
        self.quiet_ms = 0;
    }

    /// Advance the quiet timer; yields the pending direction once the window
    /// has elapsed without new events.
    pub fn update(&mut self, elapsed_ms: u32) -> Option<Direction> {
        if self.pending.is_none() {
            return None;
        }
        self.quiet_ms = self.quiet_ms.saturating_add(elapsed_ms);
        if self.quiet_ms < self.window_ms {
            return None;
        }
        self.quiet_ms = 0;
        self.pending.take()
    }

    /// Drop any pending direction.
    pub fn reset(&mut self) {
        self.pending = None;
        self.quiet_ms = 0;
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new()
    }
}
