//! Drag-start geometry snapshot
//!
//! Every overlap decision during a drag runs against the rects captured
//! when the drag began, never against live layout. Reflow caused by the
//! drag itself cannot feed back into hit testing, and a swap only
//! changes which item occupies a slot, never the slot rects.

use tracing::trace;

use dragsort_core::events::ItemId;
use dragsort_core::geometry::Rect;

use crate::config::OVERLAP_AREA_RATIO;
use crate::renderer::Renderer;

/// Immutable slot rects captured at drag start, indexed by the order
/// the items held at that moment
#[derive(Debug, Clone, Default)]
pub struct GeometrySnapshot {
    slots: Vec<Rect>,
}

impl GeometrySnapshot {
    /// Capture one rect per item, in item order
    pub fn capture<R: Renderer>(items: &[ItemId], renderer: &R) -> Self {
        Self {
            slots: items.iter().map(|&item| renderer.item_rect(item)).collect(),
        }
    }

    pub fn slot(&self, index: usize) -> Option<Rect> {
        self.slots.get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Find the item whose slot the dragged rect covers
    ///
    /// A slot matches when the dragged rect covers at least
    /// `OVERLAP_AREA_RATIO` of the dragged rect's own area, measured by
    /// axis distance against the slot. The slot currently occupied by
    /// `target` is skipped. When several slots match, the last one in
    /// index order wins.
    pub fn resolve_overlap(
        &self,
        dragged: Rect,
        items: &[ItemId],
        target: ItemId,
    ) -> Option<ItemId> {
        let threshold = OVERLAP_AREA_RATIO * dragged.size.area();
        let mut hit = None;

        for (index, &item) in items.iter().enumerate() {
            if item == target {
                continue;
            }
            let Some(slot) = self.slot(index) else {
                continue;
            };

            let d_left = (slot.x() - dragged.x()).abs();
            let d_top = (slot.y() - dragged.y()).abs();
            if d_left > slot.width() || d_top > slot.height() {
                continue;
            }
            let covered = (slot.width() - d_left) * (slot.height() - d_top);
            if covered >= threshold {
                trace!(?item, index, covered, "overlap candidate");
                hit = Some(item);
            }
        }
        hit
    }
}
