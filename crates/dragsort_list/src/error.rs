//! Error types for the sortable engine
//!
//! Only invalid host data is reported as an error. Interaction-time
//! failures (a press that hits nothing, events in the wrong phase, a
//! drag interrupted by a context menu) degrade to silent no-ops.

use dragsort_core::events::ItemId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SortableError {
    #[error("duplicate item in membership list: {0:?}")]
    DuplicateItem(ItemId),

    #[error("scrolling speed must be finite and positive, got {0}")]
    InvalidScrollingSpeed(f32),
}

pub type Result<T> = std::result::Result<T, SortableError>;
