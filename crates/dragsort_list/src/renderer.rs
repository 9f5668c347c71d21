//! Host integration seams
//!
//! The engine drives the host's visual tree exclusively through these
//! traits. `Renderer` answers geometry queries and applies per-item
//! visual mutations; `Viewport` covers the scrollable surface around
//! the container. Every method is synchronous and best-effort; the
//! engine never waits on the host.

use dragsort_core::events::ItemId;
use dragsort_core::geometry::Rect;

/// Visual backend for one sortable container
pub trait Renderer {
    /// Layout rect of an item relative to the container's content box
    fn item_rect(&self, item: ItemId) -> Rect;

    /// Position an item at (x, y). `z` is a layer-promotion hint.
    fn set_transform(&mut self, item: ItemId, x: f32, y: f32, z: f32);

    /// Toggle the pressed highlight on an item
    fn set_pressed_visual(&mut self, item: ItemId, pressed: bool);

    /// Toggle the dragged styling on an item
    fn set_dragged_visual(&mut self, item: ItemId, dragged: bool);

    /// Take an item out of normal flow, fixed at `rect`, so that
    /// `set_transform` alone positions it from here on. Stashing styles
    /// for later restore is the renderer's concern.
    fn enter_transform_mode(&mut self, item: ItemId, rect: Rect);

    /// Materialize `order` in the host structure and return every item
    /// to normal flow
    fn commit_final_order(&mut self, order: &[ItemId]);

    /// Haptic pulse on drag start. Hosts without haptics keep the
    /// default empty body.
    fn vibrate(&mut self, _duration_ms: u32) {}
}

/// Scrollable surface containing the sortable container
pub trait Viewport {
    /// The container's content box in viewport coordinates
    fn container_bounds(&self) -> Rect;

    /// Height of the visible viewport
    fn height(&self) -> f32;

    /// Scroll the viewport by `dy` pixels, positive scrolling down
    fn scroll_by(&mut self, dy: f32);
}

/// Null viewport for hosts without a scrollable surface
///
/// The container is pinned at the viewport origin and `scroll_by` is
/// ignored, so edge-autoscroll triggers can never fire.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedViewport;

impl Viewport for FixedViewport {
    fn container_bounds(&self) -> Rect {
        Rect::ZERO
    }

    fn height(&self) -> f32 {
        0.0
    }

    fn scroll_by(&mut self, _dy: f32) {}
}
