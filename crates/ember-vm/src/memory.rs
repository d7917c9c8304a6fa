//! Growable array storage shared by the bytecode containers.
//!
//! All append-only sequences in a chunk (code bytes, line numbers, constant
//! values) go through one generic container with a common growth policy:
//! when an append would exceed the current capacity, the capacity doubles
//! (starting at 8) and the backing storage is reserved up front, so the
//! amortized cost of N appends stays proportional to N.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Next capacity after `capacity` under the doubling policy.
#[inline]
pub fn grow_capacity(capacity: usize) -> usize {
    if capacity < 8 {
        8
    } else {
        capacity * 2
    }
}

/// Append-only growable array.
///
/// Invariant: `len() <= capacity()` at all times. There is no removal
/// operation; `clear` drops the backing storage entirely and resets the
/// array to `{len: 0, capacity: 0}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DynArray<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> DynArray<T> {
    /// Create a new empty array (no storage allocated yet).
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            capacity: 0,
        }
    }

    /// Number of items stored.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Current capacity under the growth policy.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Append an item, growing the storage if needed.
    ///
    /// Growth reserves storage for the full new capacity in one step; if the
    /// allocator cannot satisfy it the process aborts (there is no partial
    /// buffer state to recover to at this layer).
    pub fn push(&mut self, item: T) {
        if self.items.len() + 1 > self.capacity {
            self.capacity = grow_capacity(self.capacity);
            self.items.reserve_exact(self.capacity - self.items.len());
        }
        self.items.push(item);
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Release the backing storage and reset to the empty state.
    pub fn clear(&mut self) {
        self.items = Vec::new();
        self.capacity = 0;
    }
}

impl<T> Default for DynArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for DynArray<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut array = Self::new();
        for item in iter {
            array.push(item);
        }
        array
    }
}

// Serialized as a plain sequence; deserialization rebuilds through `push` so
// a reloaded array ends up with the same capacity history as a freshly
// written one.
impl<T: Serialize> Serialize for DynArray<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for DynArray<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let items = Vec::<T>::deserialize(deserializer)?;
        Ok(items.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_starts_empty() {
        let array: DynArray<u8> = DynArray::new();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
        assert!(array.is_empty());
    }

    #[test]
    fn test_first_grow_reserves_eight() {
        let mut array = DynArray::new();
        array.push(1u8);
        assert_eq!(array.len(), 1);
        assert_eq!(array.capacity(), 8);
    }

    #[test]
    fn test_capacity_doubles() {
        let mut array = DynArray::new();
        for i in 0..9u32 {
            array.push(i);
        }
        assert_eq!(array.len(), 9);
        assert_eq!(array.capacity(), 16);
    }

    #[test]
    fn test_clear_resets_to_empty() {
        let mut array = DynArray::new();
        for i in 0..20u32 {
            array.push(i);
        }
        array.clear();
        assert_eq!(array.len(), 0);
        assert_eq!(array.capacity(), 0);
    }

    #[test]
    fn test_get_and_slice() {
        let mut array = DynArray::new();
        array.push(10u8);
        array.push(20u8);
        assert_eq!(array.get(0), Some(&10));
        assert_eq!(array.get(2), None);
        assert_eq!(array.as_slice(), &[10, 20]);
    }

    proptest! {
        #[test]
        fn growth_invariant_holds(count in 0usize..600) {
            let mut array = DynArray::new();
            for i in 0..count {
                let before = array.capacity();
                array.push(i);
                prop_assert_eq!(array.len(), i + 1);
                prop_assert!(array.len() <= array.capacity());
                if array.capacity() != before {
                    prop_assert_eq!(array.capacity(), grow_capacity(before));
                }
            }
        }
    }
}
