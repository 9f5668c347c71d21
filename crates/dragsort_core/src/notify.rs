//! Change notification
//!
//! Listener registries connecting the engine to host observers. Each
//! registry observes one stream of values (current order, dragging
//! flag, finished sorts) and hands out stable ids for removal.

use slotmap::{new_key_type, SlotMap};

new_key_type! {
    /// Stable handle for a registered listener
    pub struct ListenerId;
}

/// Listener callback type
pub type Listener<T> = Box<dyn FnMut(&T) + Send>;

/// A registry of callbacks observing one stream of values
pub struct Listeners<T> {
    entries: SlotMap<ListenerId, Listener<T>>,
}

impl<T> Listeners<T> {
    pub fn new() -> Self {
        Self {
            entries: SlotMap::with_key(),
        }
    }

    /// Register a listener and return the id that removes it later
    pub fn add<F>(&mut self, listener: F) -> ListenerId
    where
        F: FnMut(&T) + Send + 'static,
    {
        self.entries.insert(Box::new(listener))
    }

    /// Remove a listener. Returns false when the id was already gone.
    pub fn remove(&mut self, id: ListenerId) -> bool {
        self.entries.remove(id).is_some()
    }

    /// Invoke every registered listener with `value`
    pub fn emit(&mut self, value: &T) {
        for listener in self.entries.values_mut() {
            listener(value);
        }
    }

    /// Drop all listeners
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T> Default for Listeners<T> {
    fn default() -> Self {
        Self::new()
    }
}
