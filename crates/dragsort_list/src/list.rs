//! Drag-to-reorder list widget
//!
//! `SortableList` orchestrates one container: it consumes track
//! gestures, maintains item order, drives the renderer, and runs edge
//! autoscroll while a drag hugs the viewport edge. Hosts feed gestures
//! through [`SortableList::on_track`], pump [`SortableList::tick`]
//! while it reports pending work, and report settle-animation
//! completion with [`SortableList::on_transition_end`].
//!
//! # Example
//!
//! ```rust
//! use dragsort_core::events::{ItemId, TrackEvent};
//! use dragsort_list::headless::HeadlessRenderer;
//! use dragsort_list::list::SortableList;
//!
//! let items: Vec<ItemId> = (0..3).map(ItemId).collect();
//! let renderer = HeadlessRenderer::row(&items, 100.0, 50.0);
//! let mut list = SortableList::new(renderer);
//! list.attach(&items).unwrap();
//!
//! // Drag item 0 a full slot to the right and let it settle.
//! list.on_track(&TrackEvent::start([ItemId(0)]));
//! list.on_track(&TrackEvent::moved(100.0, 0.0, 10.0, 0.0));
//! list.on_track(&TrackEvent::end());
//! list.on_transition_end();
//!
//! assert_eq!(list.items(), &[ItemId(1), ItemId(0), ItemId(2)]);
//! ```

use tracing::{debug, trace, warn};

use dragsort_core::events::event_types::{
    CANCEL, DRAG_LIFT, TRACK_END, TRACK_START, TRANSITION_END,
};
use dragsort_core::events::{ItemId, TrackEvent, TrackPhase};
use dragsort_core::notify::{ListenerId, Listeners};

use crate::autoscroll::{AutoScroll, VerticalDirection};
use crate::config::SortableConfig;
use crate::error::Result;
use crate::order::{check_unique, OrderedItems};
use crate::renderer::{FixedViewport, Renderer, Viewport};
use crate::session::{DragPhase, DragSession, StateTransitions};
use crate::snapshot::GeometrySnapshot;

/// Filter deciding which attached items participate in sorting
pub type SortableFilter = Box<dyn Fn(ItemId) -> bool + Send>;

/// Drag-to-reorder widget for one container of items
pub struct SortableList<R: Renderer, V: Viewport = FixedViewport> {
    renderer: R,
    viewport: V,
    config: SortableConfig,
    items: OrderedItems,
    snapshot: GeometrySnapshot,
    session: DragSession,
    phase: DragPhase,
    autoscroll: AutoScroll,
    sortable_filter: Option<SortableFilter>,
    /// Membership update received mid-session, applied after settle
    deferred_items: Option<Vec<ItemId>>,
    items_changed: Listeners<Vec<ItemId>>,
    dragging_changed: Listeners<bool>,
    sort_finished: Listeners<ItemId>,
}

impl<R: Renderer> SortableList<R, FixedViewport> {
    /// Widget without a scrollable viewport; edge autoscroll never fires
    pub fn new(renderer: R) -> Self {
        Self::with_viewport(renderer, FixedViewport::default())
    }
}

impl<R: Renderer, V: Viewport> SortableList<R, V> {
    pub fn with_viewport(renderer: R, viewport: V) -> Self {
        Self {
            renderer,
            viewport,
            config: SortableConfig::default(),
            items: OrderedItems::new(),
            snapshot: GeometrySnapshot::default(),
            session: DragSession::default(),
            phase: DragPhase::Idle,
            autoscroll: AutoScroll::new(),
            sortable_filter: None,
            deferred_items: None,
            items_changed: Listeners::new(),
            dragging_changed: Listeners::new(),
            sort_finished: Listeners::new(),
        }
    }

    pub fn with_config(renderer: R, viewport: V, config: SortableConfig) -> Result<Self> {
        config.validate()?;
        let mut list = Self::with_viewport(renderer, viewport);
        list.config = config;
        Ok(list)
    }

    pub fn set_config(&mut self, config: SortableConfig) -> Result<()> {
        config.validate()?;
        self.config = config;
        Ok(())
    }

    pub fn config(&self) -> &SortableConfig {
        &self.config
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn renderer_mut(&mut self) -> &mut R {
        &mut self.renderer
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    // =========================================================================
    // Membership
    // =========================================================================

    /// Set initial membership, resetting any interaction state
    pub fn attach(&mut self, items: &[ItemId]) -> Result<()> {
        self.reset_interaction();
        self.deferred_items = None;
        self.update_items(items)
    }

    /// Replace membership. While a session is live the update is
    /// deferred and applied once the engine settles back to idle.
    pub fn update_items(&mut self, items: &[ItemId]) -> Result<()> {
        let filtered = self.filtered(items);
        check_unique(&filtered)?;
        if self.phase != DragPhase::Idle {
            debug!(count = filtered.len(), "deferring membership update during drag");
            self.deferred_items = Some(filtered);
            return Ok(());
        }
        self.items.replace(&filtered)?;
        self.emit_items_changed();
        Ok(())
    }

    /// Tear down: cancel any live session, restore the host structure,
    /// and drop all listeners
    pub fn detach(&mut self) {
        if self.phase != DragPhase::Idle {
            debug!(phase = ?self.phase, "detaching mid-session");
            if let Some(target) = self.session.target {
                self.renderer.set_pressed_visual(target, false);
                self.renderer.set_dragged_visual(target, false);
            }
            self.renderer.commit_final_order(self.items.as_slice());
        }
        self.reset_interaction();
        self.deferred_items = None;
        self.items_changed.clear();
        self.dragging_changed.clear();
        self.sort_finished.clear();
    }

    /// Restrict which attached items participate in sorting. Takes
    /// effect on the next membership update.
    pub fn set_sortable_filter<F>(&mut self, filter: F)
    where
        F: Fn(ItemId) -> bool + Send + 'static,
    {
        self.sortable_filter = Some(Box::new(filter));
    }

    pub fn clear_sortable_filter(&mut self) {
        self.sortable_filter = None;
    }

    // =========================================================================
    // Read state and notification
    // =========================================================================

    pub fn items(&self) -> &[ItemId] {
        self.items.as_slice()
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == DragPhase::Dragging
    }

    /// Observe the item order, fired on every applied swap and
    /// membership update
    pub fn on_items_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&Vec<ItemId>) + Send + 'static,
    {
        self.items_changed.add(listener)
    }

    pub fn remove_items_changed(&mut self, id: ListenerId) -> bool {
        self.items_changed.remove(id)
    }

    /// Observe the dragging flag, fired on lift and release
    pub fn on_dragging_changed<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&bool) + Send + 'static,
    {
        self.dragging_changed.add(listener)
    }

    pub fn remove_dragging_changed(&mut self, id: ListenerId) -> bool {
        self.dragging_changed.remove(id)
    }

    /// Observe completed sorts, fired with the dragged item when a
    /// session commits
    pub fn on_sort_finished<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&ItemId) + Send + 'static,
    {
        self.sort_finished.add(listener)
    }

    pub fn remove_sort_finished(&mut self, id: ListenerId) -> bool {
        self.sort_finished.remove(id)
    }

    // =========================================================================
    // Interaction entry points
    // =========================================================================

    /// Single entry point for track gestures from the host
    pub fn on_track(&mut self, event: &TrackEvent) {
        match event.phase {
            TrackPhase::Start => self.track_start(event),
            TrackPhase::Move => self.track_move(event),
            TrackPhase::End => self.track_end(),
        }
    }

    /// Context menu opening mid-drag force-ends the session
    pub fn on_context_menu(&mut self) {
        if self.phase == DragPhase::Dragging {
            debug!("context menu during drag, forcing end");
            self.track_end();
        }
    }

    /// Host signal that the settle animation finished
    pub fn on_transition_end(&mut self) {
        if self.phase != DragPhase::Settling {
            return;
        }
        let Some(target) = self.session.target else {
            return;
        };
        self.renderer.commit_final_order(self.items.as_slice());
        self.renderer.set_dragged_visual(target, false);
        self.session.reset();
        self.snapshot = GeometrySnapshot::default();
        self.advance(TRANSITION_END);
        self.apply_deferred_items();
        debug!(?target, "sort committed");
        self.sort_finished.emit(&target);
    }

    /// Frame pump. Runs one pending scroll step; returns true while the
    /// loop needs more frames.
    pub fn tick(&mut self) -> bool {
        if self.phase == DragPhase::Dragging && self.autoscroll.is_pending() {
            self.apply_scroll_step();
        }
        self.autoscroll.is_pending()
    }

    // =========================================================================
    // Gesture handling
    // =========================================================================

    fn track_start(&mut self, event: &TrackEvent) {
        if self.config.disabled {
            trace!("ignoring track start while disabled");
            return;
        }
        if self.phase != DragPhase::Idle {
            debug!(phase = ?self.phase, "ignoring track start during active session");
            return;
        }
        // Innermost path entry that is a sortable item wins.
        let Some((target, index)) = event
            .path
            .iter()
            .find_map(|&item| self.items.index_of(item).map(|index| (item, index)))
        else {
            trace!("track start did not hit a sortable item");
            return;
        };

        self.snapshot = GeometrySnapshot::capture(self.items.as_slice(), &self.renderer);
        let Some(start_rect) = self.snapshot.slot(index) else {
            self.snapshot = GeometrySnapshot::default();
            return;
        };
        self.advance(TRACK_START);
        self.session.begin(target, start_rect);
        debug!(?target, index, "drag session started");

        self.renderer.set_dragged_visual(target, true);
        self.renderer.set_pressed_visual(target, true);
        self.renderer.vibrate(30);

        // Freeze every item at its captured slot; transforms position
        // them from here on.
        for index in 0..self.items.len() {
            let (Some(item), Some(rect)) = (self.items.get(index), self.snapshot.slot(index))
            else {
                continue;
            };
            self.renderer.enter_transform_mode(item, rect);
            self.renderer.set_transform(item, rect.x(), rect.y(), 1.0);
        }

        self.autoscroll.clear_samples();
        self.advance(DRAG_LIFT);
        self.emit_dragging(true);
    }

    fn track_move(&mut self, event: &TrackEvent) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        self.session.track(event.dx, event.dy, event.ddx, event.ddy);

        if self.config.scroll_enabled {
            self.drive_autoscroll(event.ddy);
        }
        // While a scroll loop owns the frame, the loop's steps position
        // the target instead.
        if !self.autoscroll.is_pending() {
            if let Some(target) = self.session.target {
                self.renderer.set_transform(
                    target,
                    self.session.virtual_x,
                    self.session.virtual_y,
                    1.0,
                );
            }
        }
        self.resolve_swap();
    }

    fn track_end(&mut self) {
        if self.phase != DragPhase::Dragging {
            return;
        }
        let Some(target) = self.session.target else {
            return;
        };
        self.renderer.set_pressed_visual(target, false);
        self.autoscroll.cancel();

        // Snap to the slot the item now owns; the dragged visual stays
        // until the settle animation reports done.
        if let Some(index) = self.items.index_of(target) {
            if let Some(slot) = self.snapshot.slot(index) {
                self.renderer.set_transform(target, slot.x(), slot.y(), 1.0);
            }
        }
        self.advance(TRACK_END);
        debug!(?target, "drag released, settling");
        self.emit_dragging(false);
    }

    // =========================================================================
    // Swaps and autoscroll
    // =========================================================================

    fn resolve_swap(&mut self) {
        let Some(target) = self.session.target else {
            return;
        };
        let Some(over) = self.snapshot.resolve_overlap(
            self.session.virtual_rect(),
            self.items.as_slice(),
            target,
        ) else {
            return;
        };
        let (Some(from), Some(to)) = (self.items.index_of(target), self.items.index_of(over))
        else {
            return;
        };
        debug!(?target, ?over, from, to, "swapping");
        self.items.move_to(from, to);
        self.reposition_siblings(target);
        self.emit_items_changed();
    }

    /// Every non-target item moves to the snapshot rect of the slot it
    /// now occupies
    fn reposition_siblings(&mut self, target: ItemId) {
        for index in 0..self.items.len() {
            let (Some(item), Some(slot)) = (self.items.get(index), self.snapshot.slot(index))
            else {
                continue;
            };
            if item == target {
                continue;
            }
            self.renderer.set_transform(item, slot.x(), slot.y(), 1.0);
        }
    }

    fn drive_autoscroll(&mut self, ddy: f32) {
        // Frames without vertical motion leave the scroll state alone.
        let direction = if ddy < 0.0 {
            VerticalDirection::Up
        } else if ddy > 0.0 {
            VerticalDirection::Down
        } else {
            return;
        };
        self.autoscroll.record_direction(direction);
        if let Some(active) = self.autoscroll.direction() {
            if active != direction && self.autoscroll.confirm_reversal(direction) {
                self.autoscroll.cancel();
            }
        }
        if self.autoscroll.is_pending() {
            return;
        }

        let bounds = self.viewport.container_bounds();
        let item_top = bounds.y() + self.session.virtual_y;
        let item_height = self.session.start_rect.height();

        // Only the edge in the direction of motion can trigger a loop.
        let distance = match direction {
            VerticalDirection::Up if bounds.y() < 0.0 && item_top <= 0.0 => {
                -self.session.virtual_y.abs()
            }
            VerticalDirection::Down
                if bounds.bottom() > self.viewport.height()
                    && item_top + item_height >= self.viewport.height() =>
            {
                (bounds.height() - (self.session.virtual_y + item_height)).abs()
            }
            _ => 0.0,
        };

        if distance != 0.0 && self.autoscroll.start(distance) {
            // The first step lands on the same frame as the trigger.
            self.apply_scroll_step();
        }
    }

    fn apply_scroll_step(&mut self) {
        let Some(delta) = self.autoscroll.step(self.config.scrolling_speed) else {
            return;
        };
        self.viewport.scroll_by(delta);
        self.session.apply_scroll(delta);
        if let Some(target) = self.session.target {
            self.renderer.set_transform(
                target,
                self.session.virtual_x,
                self.session.virtual_y,
                1.0,
            );
        }
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn advance(&mut self, event: u32) {
        if let Some(next) = self.phase.on_event(event) {
            trace!(from = ?self.phase, to = ?next, "drag phase");
            self.phase = next;
        }
    }

    fn reset_interaction(&mut self) {
        self.advance(CANCEL);
        self.session.reset();
        self.snapshot = GeometrySnapshot::default();
        self.autoscroll.cancel();
        self.autoscroll.clear_samples();
    }

    fn filtered(&self, items: &[ItemId]) -> Vec<ItemId> {
        match &self.sortable_filter {
            Some(filter) => items.iter().copied().filter(|&item| filter(item)).collect(),
            None => items.to_vec(),
        }
    }

    fn apply_deferred_items(&mut self) {
        if let Some(items) = self.deferred_items.take() {
            match self.items.replace(&items) {
                Ok(()) => self.emit_items_changed(),
                Err(err) => warn!(%err, "deferred membership update rejected"),
            }
        }
    }

    fn emit_items_changed(&mut self) {
        let current = self.items.as_slice().to_vec();
        self.items_changed.emit(&current);
    }

    fn emit_dragging(&mut self, dragging: bool) {
        self.dragging_changed.emit(&dragging);
    }
}
