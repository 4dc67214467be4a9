//! Fixed-capacity string-keyed hash table with open addressing and double
//! hashing.
//!
//! - Primary hash picks a home slot, secondary hash picks a fixed step
//! - Tombstones keep probe chains intact across removals
//! - Probe walks are bounded by the capacity, so non-prime capacities fail
//!   fast instead of spinning

pub mod config;
pub mod entry;
pub mod error;
pub mod hash;
pub mod iter;
pub mod prime;
pub mod slot;
pub mod table;

pub use config::TableBuilder;
pub use entry::Entry;
pub use error::TableError;
pub use hash::{Checksum, KeyHasher, ProbeSequence, StdHasher};
pub use slot::Slot;
pub use table::ProbeTable;
