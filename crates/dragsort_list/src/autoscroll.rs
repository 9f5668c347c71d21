//! Edge autoscroll controller
//!
//! While a drag holds an item past the viewport edge, the widget runs a
//! scroll loop: one fixed-size step per frame until the remaining
//! distance is spent. This controller owns the loop state and the
//! direction-reversal debounce; the widget applies the side effects
//! (viewport scrolling and item transforms) as it polls `step`.

use smallvec::SmallVec;
use tracing::debug;

use crate::config::DIRECTION_WINDOW;

/// Vertical drag direction as sampled from move deltas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalDirection {
    Up,
    Down,
}

/// Scroll-loop state for one sortable container
///
/// At most one step is ever pending; a loop must retire or be cancelled
/// before another can start.
#[derive(Debug, Default)]
pub struct AutoScroll {
    /// Direction of the most recent loop
    direction: Option<VerticalDirection>,
    /// Pixels left before the loop retires
    remaining: f32,
    /// Whether a step is scheduled
    pending: bool,
    /// Most recent move directions, oldest first
    samples: SmallVec<[VerticalDirection; DIRECTION_WINDOW]>,
}

impl AutoScroll {
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a loop covering `distance` px, the sign picking the
    /// direction. Declines zero distances and does nothing while a loop
    /// is already pending. Returns whether a loop started.
    pub fn start(&mut self, distance: f32) -> bool {
        if self.pending || distance == 0.0 {
            return false;
        }
        self.direction = Some(if distance < 0.0 {
            VerticalDirection::Up
        } else {
            VerticalDirection::Down
        });
        self.remaining = distance.abs();
        self.pending = true;
        debug!(distance, "starting edge scroll loop");
        true
    }

    /// Take one step, returning the signed pixel delta to apply this
    /// frame, or None when no loop is pending. The final step still
    /// covers the full `speed`, so a loop may overshoot the requested
    /// distance by up to one step.
    pub fn step(&mut self, speed: f32) -> Option<f32> {
        if !self.pending {
            return None;
        }
        let direction = self.direction?;
        let delta = match direction {
            VerticalDirection::Up => -speed,
            VerticalDirection::Down => speed,
        };
        self.remaining -= speed;
        if self.remaining <= 0.0 {
            self.remaining = 0.0;
            self.pending = false;
        }
        Some(delta)
    }

    /// Stop the loop and forget direction state
    pub fn cancel(&mut self) {
        if self.pending {
            debug!("cancelling edge scroll loop");
        }
        self.pending = false;
        self.remaining = 0.0;
        self.direction = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn direction(&self) -> Option<VerticalDirection> {
        self.direction
    }

    /// Record the vertical direction of one move sample. The buffer
    /// holds the `DIRECTION_WINDOW` most recent samples.
    pub fn record_direction(&mut self, direction: VerticalDirection) {
        if self.samples.len() == DIRECTION_WINDOW {
            self.samples.remove(0);
        }
        self.samples.push(direction);
    }

    /// True when the buffer is full and every sample agrees with
    /// `direction`. Confirmation consumes the buffer, so the next one
    /// needs a full window of fresh samples.
    pub fn confirm_reversal(&mut self, direction: VerticalDirection) -> bool {
        if self.samples.len() < DIRECTION_WINDOW {
            return false;
        }
        if self.samples.iter().all(|&sample| sample == direction) {
            self.samples.clear();
            debug!(?direction, "drag direction reversal confirmed");
            return true;
        }
        false
    }

    /// Forget accumulated direction samples
    pub fn clear_samples(&mut self) {
        self.samples.clear();
    }
}
