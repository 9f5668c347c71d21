//! dragsort List Engine
//!
//! A renderer-agnostic drag-to-reorder engine. The host feeds track
//! gestures in; the engine resolves which slot the dragged item covers,
//! permutes the order, positions items through the host's [`Renderer`],
//! and scrolls the host's [`Viewport`] while a drag hugs its edge.
//!
//! - **Snapshot hit testing**: overlap queries run against the slot
//!   rects captured at drag start, never live layout
//! - **Array-move reordering**: a swap shifts intervening items by one
//! - **Edge autoscroll**: fixed-size scroll steps pumped by the host's
//!   frame loop, with debounced direction-reversal cancellation
//! - **Headless backends**: in-memory renderer and viewport doubles for
//!   tests and scripted hosts
//!
//! # Example
//!
//! ```rust
//! use dragsort_core::events::{ItemId, TrackEvent};
//! use dragsort_list::headless::HeadlessRenderer;
//! use dragsort_list::SortableList;
//!
//! let items: Vec<ItemId> = (0..4).map(ItemId).collect();
//! let mut list = SortableList::new(HeadlessRenderer::row(&items, 100.0, 50.0));
//! list.attach(&items).unwrap();
//! list.on_sort_finished(|item| println!("sorted: {item:?}"));
//!
//! list.on_track(&TrackEvent::start([ItemId(1)]));
//! list.on_track(&TrackEvent::moved(-100.0, 0.0, -10.0, 0.0));
//! list.on_track(&TrackEvent::end());
//! list.on_transition_end();
//!
//! assert_eq!(list.items(), &[ItemId(1), ItemId(0), ItemId(2), ItemId(3)]);
//! ```

pub mod autoscroll;
pub mod config;
pub mod error;
pub mod headless;
pub mod list;
pub mod order;
pub mod renderer;
pub mod session;
pub mod snapshot;

pub use autoscroll::{AutoScroll, VerticalDirection};
pub use config::{SortableConfig, DIRECTION_WINDOW, OVERLAP_AREA_RATIO};
pub use error::{Result, SortableError};
pub use list::{SortableFilter, SortableList};
pub use renderer::{FixedViewport, Renderer, Viewport};
pub use session::{DragPhase, DragSession, StateTransitions};
pub use snapshot::GeometrySnapshot;
