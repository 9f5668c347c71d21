//! Track gesture events
//!
//! The host's gesture recognizer feeds the engine one `TrackEvent` per
//! pointer frame. Deltas come in two granularities: `dx`/`dy` are
//! cumulative since the press, `ddx`/`ddy` are the change since the
//! previous frame. The engine uses both on each axis.

use smallvec::SmallVec;

/// Event type identifier
pub type EventType = u32;

/// Interaction event types understood by the drag state machine
pub mod event_types {
    use super::EventType;

    /// Press resolved to a sortable item
    pub const TRACK_START: EventType = 1;
    /// Pointer moved while tracking
    pub const TRACK_MOVE: EventType = 2;
    /// Pointer released
    pub const TRACK_END: EventType = 3;
    /// Dragged item lifted into transform mode
    pub const DRAG_LIFT: EventType = 4;
    /// Settle animation finished
    pub const TRANSITION_END: EventType = 5;
    /// Hard teardown
    pub const CANCEL: EventType = 6;
}

/// Opaque identity of a host item
///
/// The engine never inspects item content; ids are compared, reordered,
/// and handed back through renderer calls and notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ItemId(pub u64);

/// Phase of a track gesture
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TrackPhase {
    Start,
    Move,
    End,
}

/// One frame of a track gesture
#[derive(Clone, Debug)]
pub struct TrackEvent {
    pub phase: TrackPhase,
    /// Cumulative horizontal displacement since the press
    pub dx: f32,
    /// Cumulative vertical displacement since the press
    pub dy: f32,
    /// Horizontal displacement since the previous frame
    pub ddx: f32,
    /// Vertical displacement since the previous frame
    pub ddy: f32,
    /// Hit path under the press point, innermost element first
    pub path: SmallVec<[ItemId; 8]>,
}

impl TrackEvent {
    /// A press frame. Only start frames carry a hit path.
    pub fn start(path: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            phase: TrackPhase::Start,
            dx: 0.0,
            dy: 0.0,
            ddx: 0.0,
            ddy: 0.0,
            path: path.into_iter().collect(),
        }
    }

    /// A pointer-move frame
    pub fn moved(dx: f32, dy: f32, ddx: f32, ddy: f32) -> Self {
        Self {
            phase: TrackPhase::Move,
            dx,
            dy,
            ddx,
            ddy,
            path: SmallVec::new(),
        }
    }

    /// A release frame
    pub fn end() -> Self {
        Self {
            phase: TrackPhase::End,
            dx: 0.0,
            dy: 0.0,
            ddx: 0.0,
            ddy: 0.0,
            path: SmallVec::new(),
        }
    }
}
