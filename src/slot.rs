//! Slot state for the open-addressed array.
//!
//! - `Empty`: never written, or reset; terminates a probe walk
//! - `Occupied`: holds a live entry
//! - `Deleted`: tombstone; probe walks continue past it, insert may reuse it

use crate::entry::Entry;

/// A single position in the table's backing array
#[derive(Clone, Debug)]
pub enum Slot<V> {
    Empty,
    Occupied(Entry<V>),
    Deleted,
}

impl<V> Default for Slot<V> {
    fn default() -> Self {
        Slot::Empty
    }
}

impl<V> Slot<V> {
    /// Check if slot was never written (or was reset)
    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// Check if slot holds a live entry
    #[inline]
    pub fn is_occupied(&self) -> bool {
        matches!(self, Slot::Occupied(_))
    }

    /// Check if slot is a tombstone
    #[inline]
    pub fn is_deleted(&self) -> bool {
        matches!(self, Slot::Deleted)
    }

    /// Check if insert may write into this slot
    #[inline]
    pub fn is_available(&self) -> bool {
        !self.is_occupied()
    }

    /// Get the entry if occupied
    #[inline]
    pub fn entry(&self) -> Option<&Entry<V>> {
        match self {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }

    /// Check if slot holds an entry for `key`
    #[inline]
    pub fn holds(&self, key: &str) -> bool {
        self.entry().is_some_and(|e| e.matches(key))
    }

    /// Take the entry out, leaving a tombstone behind.
    /// Returns `None` and leaves the slot untouched if not occupied.
    #[inline]
    pub(crate) fn take(&mut self) -> Option<Entry<V>> {
        if !self.is_occupied() {
            return None;
        }

        match std::mem::replace(self, Slot::Deleted) {
            Slot::Occupied(entry) => Some(entry),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        let slot: Slot<u32> = Slot::default();
        assert!(slot.is_empty());
        assert!(slot.is_available());
        assert!(slot.entry().is_none());
    }

    #[test]
    fn test_take_leaves_tombstone() {
        let mut slot = Slot::Occupied(Entry::new("a".to_string(), 1));
        assert!(slot.holds("a"));
        assert!(!slot.holds("b"));

        let entry = slot.take();
        assert_eq!(entry.map(|e| e.into_parts()), Some(("a".to_string(), 1)));
        assert!(slot.is_deleted());
        assert!(slot.is_available());
    }

    #[test]
    fn test_take_on_unoccupied() {
        let mut empty: Slot<u32> = Slot::Empty;
        assert!(empty.take().is_none());
        assert!(empty.is_empty());

        let mut deleted: Slot<u32> = Slot::Deleted;
        assert!(deleted.take().is_none());
        assert!(deleted.is_deleted());
    }
}
