//! Ordered item sequence
//!
//! Owns the engine's view of item order. Reordering is a true array
//! move: remove at the old index, insert at the new one, shifting
//! everything between by a single position.

use rustc_hash::FxHashSet;

use dragsort_core::events::ItemId;

use crate::error::{Result, SortableError};

/// Reject membership lists that repeat an id
pub fn check_unique(items: &[ItemId]) -> Result<()> {
    let mut seen = FxHashSet::default();
    for &item in items {
        if !seen.insert(item) {
            return Err(SortableError::DuplicateItem(item));
        }
    }
    Ok(())
}

/// The current order of sortable items
#[derive(Debug, Clone, Default)]
pub struct OrderedItems {
    items: Vec<ItemId>,
}

impl OrderedItems {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Replace the whole sequence. Fails without modification when the
    /// list repeats an id.
    pub fn replace(&mut self, items: &[ItemId]) -> Result<()> {
        check_unique(items)?;
        self.items.clear();
        self.items.extend_from_slice(items);
        Ok(())
    }

    pub fn as_slice(&self) -> &[ItemId] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index_of(&self, item: ItemId) -> Option<usize> {
        self.items.iter().position(|&i| i == item)
    }

    pub fn contains(&self, item: ItemId) -> bool {
        self.index_of(item).is_some()
    }

    pub fn get(&self, index: usize) -> Option<ItemId> {
        self.items.get(index).copied()
    }

    /// Move the item at `from` so it ends up at index `to`. Indices out
    /// of range are ignored.
    pub fn move_to(&mut self, from: usize, to: usize) {
        if from == to || from >= self.items.len() || to >= self.items.len() {
            return;
        }
        let item = self.items.remove(from);
        self.items.insert(to, item);
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(raw: &[u64]) -> Vec<ItemId> {
        raw.iter().copied().map(ItemId).collect()
    }

    #[test]
    fn test_replace_rejects_duplicates_without_modification() {
        let mut order = OrderedItems::new();
        order.replace(&ids(&[1, 2, 3])).unwrap();

        let err = order.replace(&ids(&[4, 5, 4])).unwrap_err();
        assert!(matches!(err, SortableError::DuplicateItem(ItemId(4))));
        assert_eq!(order.as_slice(), ids(&[1, 2, 3]).as_slice());
    }

    #[test]
    fn test_move_forward_shifts_intervening_items_back() {
        let mut order = OrderedItems::new();
        order.replace(&ids(&[0, 1, 2, 3, 4])).unwrap();

        order.move_to(0, 3);
        assert_eq!(order.as_slice(), ids(&[1, 2, 3, 0, 4]).as_slice());
    }

    #[test]
    fn test_move_backward_shifts_intervening_items_forward() {
        let mut order = OrderedItems::new();
        order.replace(&ids(&[0, 1, 2, 3, 4])).unwrap();

        order.move_to(3, 1);
        assert_eq!(order.as_slice(), ids(&[0, 3, 1, 2, 4]).as_slice());
    }

    #[test]
    fn test_move_out_of_range_is_ignored() {
        let mut order = OrderedItems::new();
        order.replace(&ids(&[0, 1, 2])).unwrap();

        order.move_to(0, 3);
        order.move_to(5, 0);
        order.move_to(1, 1);
        assert_eq!(order.as_slice(), ids(&[0, 1, 2]).as_slice());
    }

    #[test]
    fn test_index_lookup() {
        let mut order = OrderedItems::new();
        order.replace(&ids(&[7, 3, 9])).unwrap();

        assert_eq!(order.index_of(ItemId(3)), Some(1));
        assert_eq!(order.index_of(ItemId(8)), None);
        assert!(order.contains(ItemId(9)));
        assert_eq!(order.get(2), Some(ItemId(9)));
        assert_eq!(order.get(3), None);
    }
}
