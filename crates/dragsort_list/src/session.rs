//! Drag session state
//!
//! One `DragSession` lives for the duration of a single drag: pressed,
//! dragging, settling, back to idle. Phase transitions are pattern
//! matches over interaction events; the rest of the engine consults the
//! phase instead of keeping its own flags.

use std::hash::Hash;

use dragsort_core::events::ItemId;
use dragsort_core::geometry::Rect;

/// Trait for state types that transition on interaction events
///
/// Implement this on a state enum to define how events cause state
/// transitions, one `(state, event)` match arm per edge.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Lifecycle phase of a drag interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DragPhase {
    /// No interaction in progress
    #[default]
    Idle,
    /// Press resolved to an item, not yet lifted
    Pressed,
    /// Item lifted and following the pointer
    Dragging,
    /// Item released, settle animation running
    Settling,
}

impl StateTransitions for DragPhase {
    fn on_event(&self, event: u32) -> Option<Self> {
        use dragsort_core::events::event_types::*;
        match (self, event) {
            (DragPhase::Idle, TRACK_START) => Some(DragPhase::Pressed),
            (DragPhase::Pressed, DRAG_LIFT) => Some(DragPhase::Dragging),
            (DragPhase::Dragging, TRACK_END) => Some(DragPhase::Settling),
            (DragPhase::Settling, TRANSITION_END) => Some(DragPhase::Idle),
            // Hard teardown recovers from any phase
            (DragPhase::Pressed, CANCEL) => Some(DragPhase::Idle),
            (DragPhase::Dragging, CANCEL) => Some(DragPhase::Idle),
            (DragPhase::Settling, CANCEL) => Some(DragPhase::Idle),
            _ => None,
        }
    }
}

/// Per-drag state, reset when the session returns to idle
#[derive(Debug, Default)]
pub struct DragSession {
    /// Item under drag, None outside a session
    pub target: Option<ItemId>,
    /// Slot rect the target occupied at drag start
    pub start_rect: Rect,
    /// Where the target visually sits right now, container-relative
    pub virtual_x: f32,
    pub virtual_y: f32,
    /// Pixels the scroll loop has shifted the item this session
    pub scroll_compensation: f32,
}

impl DragSession {
    pub fn begin(&mut self, target: ItemId, start_rect: Rect) {
        self.target = Some(target);
        self.start_rect = start_rect;
        self.virtual_x = start_rect.x();
        self.virtual_y = start_rect.y();
        self.scroll_compensation = 0.0;
    }

    /// Recompute the virtual position from gesture deltas. Both the
    /// cumulative and the incremental delta land on each axis; the
    /// vertical axis also carries everything edge scrolling shifted the
    /// item so far.
    pub fn track(&mut self, dx: f32, dy: f32, ddx: f32, ddy: f32) {
        self.virtual_x = self.start_rect.x() + dx + ddx;
        self.virtual_y = self.start_rect.y() + dy + ddy + self.scroll_compensation;
    }

    /// Shift the item with the viewport as a scroll step lands
    pub fn apply_scroll(&mut self, dy: f32) {
        self.scroll_compensation += dy;
        self.virtual_y += dy;
    }

    /// The target's rect at its virtual position
    pub fn virtual_rect(&self) -> Rect {
        self.start_rect.at(self.virtual_x, self.virtual_y)
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
