//! dragsort Core Primitives
//!
//! This crate provides the foundational types for the dragsort interaction
//! engine:
//!
//! - **Geometry**: f32 points, sizes, and rectangles in container space
//! - **Track Events**: pointer-gesture frames fed in by the host
//! - **Notification**: listener registries for observing engine state
//!
//! # Example
//!
//! ```rust
//! use dragsort_core::events::{ItemId, TrackEvent, TrackPhase};
//! use dragsort_core::geometry::Rect;
//!
//! // A press that landed on item 3, nested inside item 7's subtree.
//! let press = TrackEvent::start([ItemId(3), ItemId(7)]);
//! assert_eq!(press.phase, TrackPhase::Start);
//!
//! // A pointer frame: 12px right of the press point, 2px since last frame.
//! let frame = TrackEvent::moved(12.0, 0.0, 2.0, 0.0);
//! assert_eq!(frame.dx, 12.0);
//!
//! let slot = Rect::new(0.0, 50.0, 100.0, 50.0);
//! assert_eq!(slot.bottom(), 100.0);
//! ```

pub mod events;
pub mod geometry;
pub mod notify;

pub use events::{EventType, ItemId, TrackEvent, TrackPhase};
pub use geometry::{Point, Rect, Size};
pub use notify::{ListenerId, Listeners};
