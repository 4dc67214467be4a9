use std::fmt;

use log::{debug, trace, warn};

use crate::{
    entry::Entry,
    error::{Result, TableError},
    hash::{self, Checksum, KeyHasher, ProbeSequence},
    iter::{Iter, Keys, Values},
    prime,
    slot::Slot,
};

/// A fixed-capacity string-keyed hash table using open addressing with
/// double hashing
///
/// The capacity never changes. Probe walks are bounded by the capacity,
/// so a non-prime capacity whose probe cycle misses every free slot
/// reports `TableError::UnboundedProbe` instead of spinning.
pub struct ProbeTable<V, H = Checksum> {
    slots: Box<[Slot<V>]>,

    /// Occupied slot count
    count: usize,

    /// Deleted slot count
    tombstones: usize,

    /// Largest prime below capacity, drives step sizes
    secondary_modulus: usize,

    hasher: H,
}

fn empty_slots<V>(capacity: usize) -> Box<[Slot<V>]> {
    (0..capacity).map(|_| Slot::Empty).collect()
}

impl<V> ProbeTable<V, Checksum> {
    /// Create an empty table with exactly `capacity` slots
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    #[inline]
    pub fn new(capacity: usize) -> Self {
        Self::with_hasher(capacity, Checksum)
    }

    /// Create an empty table sized to the smallest prime `>= min_capacity`
    #[inline]
    pub fn with_prime_capacity(min_capacity: usize) -> Self {
        Self::new(prime::next_prime(min_capacity))
    }
}

impl<V, H> ProbeTable<V, H> {
    /// Create an empty table with provided primary hasher
    ///
    /// # Panics
    /// Panics if `capacity` is 0.
    pub fn with_hasher(capacity: usize, hasher: H) -> Self {
        assert!(capacity > 0, "capacity must be positive");

        let secondary_modulus = prime::secondary_modulus(capacity);
        debug!(
            "creating probe table: capacity={}, secondary_modulus={}",
            capacity, secondary_modulus
        );
        if !prime::is_prime(capacity) {
            warn!(
                "capacity {} is not prime, some keys may not reach every slot",
                capacity
            );
        }

        Self {
            slots: empty_slots(capacity),
            count: 0,
            tombstones: 0,
            secondary_modulus,
            hasher,
        }
    }

    /// Returns the number of entries in the table
    #[inline]
    pub fn len(&self) -> usize {
        self.count
    }

    /// Returns `true` if the table contains no entries
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `true` if every slot is occupied
    #[inline]
    pub fn is_full(&self) -> bool {
        self.count == self.capacity()
    }

    /// Returns the fixed number of slots
    #[inline]
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns the modulus used to derive probe steps
    #[inline]
    pub fn secondary_modulus(&self) -> usize {
        self.secondary_modulus
    }

    /// Returns the number of tombstoned slots
    #[inline]
    pub fn tombstones(&self) -> usize {
        self.tombstones
    }

    /// Get load factor (0.0 to 1.0)
    #[inline]
    pub fn load_factor(&self) -> f64 {
        self.count as f64 / self.capacity() as f64
    }

    /// Returns `true` when every probe sequence visits every slot,
    /// i.e. the capacity is prime
    #[inline]
    pub fn covers_all_slots(&self) -> bool {
        prime::is_prime(self.capacity())
    }

    /// Returns a reference to the hasher
    #[inline]
    pub fn hasher(&self) -> &H {
        &self.hasher
    }

    /// Get slot by index, `None` if out of range
    #[inline]
    pub fn slot(&self, index: usize) -> Option<&Slot<V>> {
        self.slots.get(index)
    }

    /// Iterate occupied slots in index order as `(index, entry)`
    #[inline]
    pub fn iter(&self) -> Iter<'_, V> {
        Iter::new(&self.slots)
    }

    /// Iterate keys in slot order
    #[inline]
    pub fn keys(&self) -> Keys<'_, V> {
        Keys::new(self.iter())
    }

    /// Iterate values in slot order
    #[inline]
    pub fn values(&self) -> Values<'_, V> {
        Values::new(self.iter())
    }

    /// Clears the table, every slot back to `Empty`
    pub fn clear(&mut self) {
        self.reset_slots();
        self.count = 0;
    }

    fn reset_slots(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.tombstones = 0;
    }
}

impl<V, H> ProbeTable<V, H>
where
    H: KeyHasher,
{
    /// Primary hash: home slot for `key`
    #[inline]
    pub fn hash1(&self, key: &str) -> usize {
        self.hasher.home_slot(key, self.capacity())
    }

    /// Secondary hash: probe step for a key whose home slot is `h1`
    #[inline]
    pub fn hash2(&self, h1: usize) -> usize {
        hash::step(h1, self.secondary_modulus)
    }

    /// Slots visited for `key`, starting at its home slot.
    /// Depends only on the key and the capacity.
    #[inline]
    pub fn probe_sequence(&self, key: &str) -> ProbeSequence {
        let home = self.hash1(key);
        ProbeSequence::new(home, self.hash2(home), self.capacity())
    }

    /// Inserts a key-value pair into the table
    ///
    /// If the table did not have this key present, `Ok(None)` is returned.
    /// If the table did have this key present, the value is updated, and
    /// the old value is returned.
    ///
    /// Fails with `TableFull` whenever every slot is occupied, even if the
    /// key is already present. Fails with `UnboundedProbe` if the key's
    /// probe cycle holds no available slot.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Result<Option<V>> {
        let capacity = self.capacity();
        if self.count == capacity {
            return Err(TableError::TableFull { capacity });
        }

        let key = key.into();
        let mut tombstone = None;
        let mut vacancy = None;

        for idx in self.probe_sequence(&key) {
            match &mut self.slots[idx] {
                Slot::Empty => {
                    vacancy = Some(idx);
                    break;
                }
                Slot::Deleted => {
                    if tombstone.is_none() {
                        tombstone = Some(idx);
                    }
                }
                Slot::Occupied(entry) => {
                    if entry.matches(&key) {
                        trace!("updating '{}' in slot {}", key, idx);
                        return Ok(Some(entry.replace_value(value)));
                    }
                }
            }
        }

        // reuse the earliest tombstone on the walk before the terminating empty slot
        let Some(idx) = tombstone.or(vacancy) else {
            debug!(
                "probe cycle of '{}' exhausted after {} probes with {} of {} slots occupied",
                key, capacity, self.count, capacity
            );
            return Err(TableError::UnboundedProbe {
                key,
                probes: capacity,
            });
        };

        if self.slots[idx].is_deleted() {
            debug!("reusing tombstone in slot {} for '{}'", idx, key);
            self.tombstones -= 1;
        }
        trace!("placing '{}' in slot {}", key, idx);

        self.slots[idx] = Slot::Occupied(Entry::new(key, value));
        self.count += 1;
        Ok(None)
    }

    /// Removes a key from the table, returning the value if the key was
    /// present
    ///
    /// The slot is tombstoned so walks of other keys keep passing through
    /// it. Removing an absent key changes nothing.
    pub fn remove(&mut self, key: &str) -> Option<V> {
        if self.count == 0 {
            return None;
        }

        let idx = self.position(key)?;
        let entry = self.slots[idx].take()?;
        self.count -= 1;
        self.tombstones += 1;
        trace!("removed '{}' from slot {}", key, idx);

        if self.count == 0 {
            // no live chains left to protect
            self.reset_slots();
        }

        let (_, value) = entry.into_parts();
        Some(value)
    }

    /// Rebuilds the slot array at the same capacity without tombstones
    ///
    /// Entries are replaced in slot order. If some entry would find no
    /// slot on its probe cycle (possible only with a non-prime capacity)
    /// the table is left untouched and `UnboundedProbe` is returned.
    pub fn compact(&mut self) -> Result<()> {
        if self.tombstones == 0 {
            return Ok(());
        }

        let capacity = self.capacity();
        let mut taken = vec![false; capacity];
        let mut moves = Vec::with_capacity(self.count);

        for (from, entry) in self.iter() {
            let to = self
                .probe_sequence(entry.key())
                .find(|&idx| !taken[idx])
                .ok_or_else(|| TableError::UnboundedProbe {
                    key: entry.key().to_string(),
                    probes: capacity,
                })?;
            taken[to] = true;
            moves.push((from, to));
        }

        let mut slots = empty_slots(capacity);
        for (from, to) in moves {
            slots[to] = std::mem::take(&mut self.slots[from]);
        }

        debug!(
            "compacted table: dropped {} tombstones, {} entries kept",
            self.tombstones, self.count
        );
        self.slots = slots;
        self.tombstones = 0;
        Ok(())
    }

    /// Index of the slot holding `key`, stopping at the first empty slot
    fn position(&self, key: &str) -> Option<usize> {
        for idx in self.probe_sequence(key) {
            match &self.slots[idx] {
                Slot::Empty => return None,
                Slot::Occupied(entry) if entry.matches(key) => return Some(idx),
                _ => {}
            }
        }
        None
    }
}

impl<V: fmt::Display, H> ProbeTable<V, H> {
    /// Renders every occupied slot in index order, one `[index] key: value`
    /// line each
    pub fn to_display_string(&self) -> String {
        self.to_string()
    }
}

impl<V: fmt::Display, H> fmt::Display for ProbeTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, entry) in self.iter() {
            writeln!(f, "[{}] {}", idx, entry)?;
        }
        Ok(())
    }
}

impl<V: fmt::Debug, H> fmt::Debug for ProbeTable<V, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProbeTable")
            .field("capacity", &self.capacity())
            .field("len", &self.count)
            .field("tombstones", &self.tombstones)
            .field("secondary_modulus", &self.secondary_modulus)
            .field("slots", &self.slots)
            .finish()
    }
}
