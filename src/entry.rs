//! Key/value pair stored in an occupied slot

use std::fmt;

/// An entry in a `ProbeTable`
///
/// Two entries are equal when their keys are equal, the value takes no
/// part in identity.
#[derive(Clone, Debug)]
pub struct Entry<V> {
    key: String,
    value: V,
}

impl<V> Entry<V> {
    pub(crate) fn new(key: String, value: V) -> Self {
        Self { key, value }
    }

    /// Gets a reference to the key in the entry
    #[inline]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Gets a reference to the value in the entry
    #[inline]
    pub fn value(&self) -> &V {
        &self.value
    }

    /// Returns `true` if this entry is stored under `key`
    #[inline]
    pub fn matches(&self, key: &str) -> bool {
        self.key == key
    }

    /// Sets the value of the entry, and returns the entry's old value
    #[inline]
    pub(crate) fn replace_value(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }

    /// Splits the entry into its key and value
    #[inline]
    pub fn into_parts(self) -> (String, V) {
        (self.key, self.value)
    }
}

impl<V> PartialEq for Entry<V> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<V> Eq for Entry<V> {}

impl<V: fmt::Display> fmt::Display for Entry<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.key, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_ignores_value() {
        let a = Entry::new("John".to_string(), 1);
        let b = Entry::new("John".to_string(), 2);
        let c = Entry::new("Jane".to_string(), 1);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_replace_value() {
        let mut entry = Entry::new("John".to_string(), "John Doe");

        let old = entry.replace_value("Johnny Doe");
        assert_eq!(old, "John Doe");
        assert_eq!(entry.value(), &"Johnny Doe");
        assert!(entry.matches("John"));
    }

    #[test]
    fn test_display() {
        let entry = Entry::new("Jane".to_string(), "Jane Doe");
        assert_eq!(entry.to_string(), "Jane: Jane Doe");
    }
}
