//! Sortable list configuration

use crate::error::{Result, SortableError};

/// Fraction of the dragged item's area that must cover a slot before
/// the slot's occupant yields its position. Fixed by the interaction
/// design rather than configurable; at exactly this fraction the slot
/// still matches.
pub const OVERLAP_AREA_RATIO: f32 = 0.5;

/// Number of consecutive same-direction move samples required before a
/// direction reversal cancels an in-flight scroll loop.
pub const DIRECTION_WINDOW: usize = 10;

/// Configuration for drag-to-reorder behavior
#[derive(Debug, Clone, Copy)]
pub struct SortableConfig {
    /// Ignore all track input (default: false)
    pub disabled: bool,
    /// Scroll the viewport when an item is dragged past its edge
    /// (default: false)
    pub scroll_enabled: bool,
    /// Pixels scrolled per frame while a scroll loop runs (default: 6.0)
    pub scrolling_speed: f32,
}

impl Default for SortableConfig {
    fn default() -> Self {
        Self {
            disabled: false,
            scroll_enabled: false,
            scrolling_speed: 6.0,
        }
    }
}

impl SortableConfig {
    /// Create config with edge autoscroll enabled
    pub fn with_scrolling() -> Self {
        Self {
            scroll_enabled: true,
            ..Default::default()
        }
    }

    /// Check host-supplied tunables
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.scrolling_speed.is_finite() || self.scrolling_speed <= 0.0 {
            return Err(SortableError::InvalidScrollingSpeed(self.scrolling_speed));
        }
        Ok(())
    }
}
