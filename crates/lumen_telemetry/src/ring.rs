//! # Ring Buffer
//!
//! Fixed-capacity FIFO storage. Once full, pushing evicts the oldest entry.
//!
//! All memory is pre-allocated at construction; pushes never allocate.

/// A fixed-capacity ring buffer.
///
/// Eviction is enforced structurally: the buffer physically cannot hold
/// more than `capacity` entries, so consumers get O(capacity) memory
/// regardless of how long the process runs.
pub struct RingBuffer<T> {
    /// Pre-allocated slot storage.
    storage: Box<[Option<T>]>,
    /// Index of the oldest entry.
    head: usize,
    /// Number of occupied slots.
    len: usize,
}

impl<T> RingBuffer<T> {
    /// Creates a buffer with the specified capacity.
    ///
    /// All memory is pre-allocated upfront.
    ///
    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "Capacity must be greater than zero");

        let storage: Vec<Option<T>> = (0..capacity).map(|_| None).collect();

        Self {
            storage: storage.into_boxed_slice(),
            head: 0,
            len: 0,
        }
    }

    /// Appends an entry, evicting and returning the oldest when full.
    ///
    /// This is a **O(1)** operation with **zero heap allocations**.
    pub fn push(&mut self, value: T) -> Option<T> {
        let capacity = self.storage.len();

        if self.len < capacity {
            let slot = (self.head + self.len) % capacity;
            self.storage[slot] = Some(value);
            self.len += 1;
            None
        } else {
            let evicted = self.storage[self.head].replace(value);
            self.head = (self.head + 1) % capacity;
            evicted
        }
    }

    /// Returns the number of stored entries.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if no entries are stored.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the total capacity.
    #[inline]
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.storage.len()
    }

    /// Returns true if the next push will evict.
    #[inline]
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.len == self.storage.len()
    }

    /// The oldest entry, if any.
    #[must_use]
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.storage[self.head].as_ref()
    }

    /// The newest entry, if any.
    #[must_use]
    pub fn back(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let slot = (self.head + self.len - 1) % self.storage.len();
        self.storage[slot].as_ref()
    }

    /// Iterates oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        let capacity = self.storage.len();
        (0..self.len).filter_map(move |offset| self.storage[(self.head + offset) % capacity].as_ref())
    }

    /// Iterates over the `count` newest entries, oldest of those first.
    pub fn recent(&self, count: usize) -> impl Iterator<Item = &T> {
        self.iter().skip(self.len.saturating_sub(count))
    }

    /// Drops all entries. Memory is not freed.
    pub fn clear(&mut self) {
        for slot in self.storage.iter_mut() {
            *slot = None;
        }
        self.head = 0;
        self.len = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_until_full() {
        let mut ring: RingBuffer<u32> = RingBuffer::new(3);
        assert!(ring.is_empty());

        assert_eq!(ring.push(1), None);
        assert_eq!(ring.push(2), None);
        assert_eq!(ring.push(3), None);
        assert!(ring.is_full());
        assert_eq!(ring.len(), 3);
    }

    #[test]
    fn test_eviction_is_fifo() {
        let mut ring: RingBuffer<u32> = RingBuffer::new(3);
        for value in 1..=3 {
            let _ = ring.push(value);
        }

        assert_eq!(ring.push(4), Some(1));
        assert_eq!(ring.push(5), Some(2));
        assert_eq!(ring.front(), Some(&3));
        assert_eq!(ring.back(), Some(&5));

        let contents: Vec<u32> = ring.iter().copied().collect();
        assert_eq!(contents, vec![3, 4, 5]);
    }

    #[test]
    fn test_recent_window() {
        let mut ring: RingBuffer<u32> = RingBuffer::new(10);
        for value in 0..10 {
            let _ = ring.push(value);
        }

        let recent: Vec<u32> = ring.recent(3).copied().collect();
        assert_eq!(recent, vec![7, 8, 9]);

        // Window larger than contents returns everything.
        let all: Vec<u32> = ring.recent(100).copied().collect();
        assert_eq!(all.len(), 10);
    }

    #[test]
    fn test_clear() {
        let mut ring: RingBuffer<u32> = RingBuffer::new(4);
        for value in 0..6 {
            let _ = ring.push(value);
        }

        ring.clear();
        assert!(ring.is_empty());
        assert_eq!(ring.front(), None);
        assert_eq!(ring.iter().count(), 0);

        // Usable again after clearing.
        let _ = ring.push(42);
        assert_eq!(ring.front(), Some(&42));
    }

    #[test]
    #[should_panic(expected = "Capacity must be greater than zero")]
    fn test_zero_capacity_panics() {
        let _ring: RingBuffer<u32> = RingBuffer::new(0);
    }
}
