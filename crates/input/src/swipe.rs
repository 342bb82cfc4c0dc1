//! Swipe classification: a touch delta becomes at most one direction.

use crate::types::Direction;

/// Gestures shorter than this (in screen units) are treated as taps.
pub const DEFAULT_SWIPE_MIN_DISTANCE: f32 = 30.0;

/// Displacement between touch start and touch end, in screen coordinates
/// (x grows to the right, y grows downward).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeInput {
    pub delta_x: f32,
    pub delta_y: f32,
}

impl SwipeInput {
    pub fn new(delta_x: f32, delta_y: f32) -> Self {
        Self { delta_x, delta_y }
    }

    /// Classify with [`DEFAULT_SWIPE_MIN_DISTANCE`].
    pub fn direction(&self) -> Option<Direction> {
        self.direction_with_threshold(DEFAULT_SWIPE_MIN_DISTANCE)
    }

    /// The dominant axis wins; ties and short or non-finite gestures map to `None`.
    pub fn direction_with_threshold(&self, min_distance: f32) -> Option<Direction> {
        let (dx, dy) = (self.delta_x, self.delta_y);
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        let (ax, ay) = (dx.abs(), dy.abs());
        if ax.max(ay) < min_distance || ax == ay {
            return None;
        }

        if ax > ay {
            Some(if dx > 0.0 { Direction::Right } else { Direction::Left })
        } else {
            Some(if dy > 0.0 { Direction::Down } else { Direction::Up })
        }
    }
}
