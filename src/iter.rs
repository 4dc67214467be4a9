//! Iterators for `ProbeTable`
//!
//! All iterators walk the slot array in index order, skipping empty and
//! deleted slots. Index order is not insertion order.

use std::{iter::Enumerate, slice};

use crate::{entry::Entry, slot::Slot, table::ProbeTable};

/// An iterator over the occupied slots of a `ProbeTable` as `(index, entry)`
pub struct Iter<'a, V> {
    inner: Enumerate<slice::Iter<'a, Slot<V>>>,
}

impl<'a, V> Iter<'a, V> {
    pub(crate) fn new(slots: &'a [Slot<V>]) -> Self {
        Self {
            inner: slots.iter().enumerate(),
        }
    }
}

impl<'a, V> Iterator for Iter<'a, V> {
    type Item = (usize, &'a Entry<V>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .by_ref()
            .find_map(|(idx, slot)| slot.entry().map(|entry| (idx, entry)))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

/// An iterator over the keys of a `ProbeTable`
pub struct Keys<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Keys<'a, V> {
    pub(crate) fn new(iter: Iter<'a, V>) -> Self {
        Self { inner: iter }
    }
}

impl<'a, V> Iterator for Keys<'a, V> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, e)| e.key())
    }
}

/// An iterator over the values of a `ProbeTable`
pub struct Values<'a, V> {
    inner: Iter<'a, V>,
}

impl<'a, V> Values<'a, V> {
    pub(crate) fn new(iter: Iter<'a, V>) -> Self {
        Self { inner: iter }
    }
}

impl<'a, V> Iterator for Values<'a, V> {
    type Item = &'a V;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, e)| e.value())
    }
}

impl<'a, V, H> IntoIterator for &'a ProbeTable<V, H> {
    type Item = (usize, &'a Entry<V>);
    type IntoIter = Iter<'a, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
