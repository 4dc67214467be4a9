//! Construction options for `ProbeTable`

use crate::{
    error::{Result, TableError},
    hash::Checksum,
    prime,
    table::ProbeTable,
};

/// Builder for a `ProbeTable`
///
/// ```
/// use probetable::{ProbeTable, TableBuilder};
///
/// let table: ProbeTable<String> = TableBuilder::new(10).round_to_prime(true).build().unwrap();
/// assert_eq!(table.capacity(), 11);
/// ```
#[derive(Clone, Debug)]
pub struct TableBuilder<H = Checksum> {
    capacity: usize,
    round_to_prime: bool,
    hasher: H,
}

impl TableBuilder<Checksum> {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            round_to_prime: false,
            hasher: Checksum,
        }
    }
}

impl<H> TableBuilder<H> {
    /// Round the capacity up to the next prime so every probe sequence
    /// covers the whole table
    pub fn round_to_prime(mut self, round: bool) -> Self {
        self.round_to_prime = round;
        self
    }

    /// Use `hasher` as the primary hash
    pub fn hasher<H2>(self, hasher: H2) -> TableBuilder<H2> {
        TableBuilder {
            capacity: self.capacity,
            round_to_prime: self.round_to_prime,
            hasher,
        }
    }

    /// Capacity the built table will have
    pub fn effective_capacity(&self) -> usize {
        if self.round_to_prime {
            prime::next_prime(self.capacity)
        } else {
            self.capacity
        }
    }

    pub fn build<V>(self) -> Result<ProbeTable<V, H>> {
        if self.capacity == 0 {
            return Err(TableError::ZeroCapacity);
        }

        let capacity = self.effective_capacity();
        Ok(ProbeTable::with_hasher(capacity, self.hasher))
    }
}

#[cfg(test)]
mod tests {
    use std::hash::RandomState;

    use super::*;
    use crate::hash::StdHasher;

    #[test]
    fn test_defaults() {
        let table: ProbeTable<u32> = TableBuilder::new(10).build().unwrap();
        assert_eq!(table.capacity(), 10);
        assert!(!table.covers_all_slots());
    }

    #[test]
    fn test_round_to_prime() {
        let builder = TableBuilder::new(24).round_to_prime(true);
        assert_eq!(builder.effective_capacity(), 29);

        let table: ProbeTable<u32> = builder.build().unwrap();
        assert_eq!(table.capacity(), 29);
        assert_eq!(table.secondary_modulus(), 23);
    }

    #[test]
    fn test_zero_capacity() {
        let result: Result<ProbeTable<u32>> = TableBuilder::new(0).round_to_prime(true).build();
        assert!(matches!(result, Err(TableError::ZeroCapacity)));
    }

    #[test]
    fn test_custom_hasher() {
        let mut table = TableBuilder::new(7)
            .hasher(StdHasher(RandomState::new()))
            .build()
            .unwrap();

        table.insert("hello", 1).unwrap();
        table.insert("world", 2).unwrap();
        assert_eq!(table.len(), 2);
    }
}
