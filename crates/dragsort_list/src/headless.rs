//! Headless host backends
//!
//! In-memory `Renderer` and `Viewport` implementations that record
//! every engine call. They back the integration tests and let hosts
//! script the engine without a real UI backend.

use rustc_hash::{FxHashMap, FxHashSet};

use dragsort_core::events::ItemId;
use dragsort_core::geometry::Rect;

use crate::renderer::{Renderer, Viewport};

/// Recorded `set_transform` position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Renderer double backed by per-item tables
#[derive(Debug, Default)]
pub struct HeadlessRenderer {
    layout: FxHashMap<ItemId, Rect>,
    transforms: FxHashMap<ItemId, Transform>,
    pressed: FxHashSet<ItemId>,
    dragged: FxHashSet<ItemId>,
    transform_mode: FxHashMap<ItemId, Rect>,
    committed: Vec<Vec<ItemId>>,
    vibrations: Vec<u32>,
}

impl HeadlessRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lay `items` out as one horizontal row of equal slots starting at
    /// the container origin
    pub fn row(items: &[ItemId], slot_width: f32, slot_height: f32) -> Self {
        let mut renderer = Self::default();
        for (index, &item) in items.iter().enumerate() {
            renderer.place(
                item,
                Rect::new(index as f32 * slot_width, 0.0, slot_width, slot_height),
            );
        }
        renderer
    }

    /// Lay `items` out as one vertical column of equal slots
    pub fn column(items: &[ItemId], slot_width: f32, slot_height: f32) -> Self {
        let mut renderer = Self::default();
        for (index, &item) in items.iter().enumerate() {
            renderer.place(
                item,
                Rect::new(0.0, index as f32 * slot_height, slot_width, slot_height),
            );
        }
        renderer
    }

    /// Record an item's layout rect
    pub fn place(&mut self, item: ItemId, rect: Rect) {
        self.layout.insert(item, rect);
    }

    pub fn transform_of(&self, item: ItemId) -> Option<Transform> {
        self.transforms.get(&item).copied()
    }

    pub fn is_pressed(&self, item: ItemId) -> bool {
        self.pressed.contains(&item)
    }

    pub fn is_dragged(&self, item: ItemId) -> bool {
        self.dragged.contains(&item)
    }

    pub fn in_transform_mode(&self, item: ItemId) -> bool {
        self.transform_mode.contains_key(&item)
    }

    /// Every order handed to `commit_final_order`, in call order
    pub fn committed_orders(&self) -> &[Vec<ItemId>] {
        &self.committed
    }

    /// Every haptic pulse duration requested so far
    pub fn vibrations(&self) -> &[u32] {
        &self.vibrations
    }
}

impl Renderer for HeadlessRenderer {
    fn item_rect(&self, item: ItemId) -> Rect {
        self.layout.get(&item).copied().unwrap_or(Rect::ZERO)
    }

    fn set_transform(&mut self, item: ItemId, x: f32, y: f32, z: f32) {
        self.transforms.insert(item, Transform { x, y, z });
    }

    fn set_pressed_visual(&mut self, item: ItemId, pressed: bool) {
        if pressed {
            self.pressed.insert(item);
        } else {
            self.pressed.remove(&item);
        }
    }

    fn set_dragged_visual(&mut self, item: ItemId, dragged: bool) {
        if dragged {
            self.dragged.insert(item);
        } else {
            self.dragged.remove(&item);
        }
    }

    fn enter_transform_mode(&mut self, item: ItemId, rect: Rect) {
        self.transform_mode.insert(item, rect);
    }

    fn commit_final_order(&mut self, order: &[ItemId]) {
        self.committed.push(order.to_vec());
        // Committing restores normal flow: transforms and fixed
        // positioning are gone.
        self.transform_mode.clear();
        self.transforms.clear();
    }

    fn vibrate(&mut self, duration_ms: u32) {
        self.vibrations.push(duration_ms);
    }
}

/// Viewport double with a scriptable page scroll
#[derive(Debug, Clone, Default)]
pub struct HeadlessViewport {
    base_bounds: Rect,
    viewport_height: f32,
    scroll_offset: f32,
    scroll_log: Vec<f32>,
}

impl HeadlessViewport {
    /// `base_bounds` is the container content box in viewport
    /// coordinates before any scrolling
    pub fn new(base_bounds: Rect, viewport_height: f32) -> Self {
        Self {
            base_bounds,
            viewport_height,
            scroll_offset: 0.0,
            scroll_log: Vec::new(),
        }
    }

    /// Net page scroll applied so far
    pub fn scroll_offset(&self) -> f32 {
        self.scroll_offset
    }

    /// Every `scroll_by` delta, in call order
    pub fn scroll_log(&self) -> &[f32] {
        &self.scroll_log
    }
}

impl Viewport for HeadlessViewport {
    fn container_bounds(&self) -> Rect {
        // Scrolling the page down moves the container up on screen.
        self.base_bounds.offset(0.0, -self.scroll_offset)
    }

    fn height(&self) -> f32 {
        self.viewport_height
    }

    fn scroll_by(&mut self, dy: f32) {
        self.scroll_offset += dy;
        self.scroll_log.push(dy);
    }
}
