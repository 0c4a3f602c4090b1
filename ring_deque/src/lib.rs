
pub mod error;
pub mod iter;
// This mimics the log crate to avoid checking for the feature available
#[macro_use]
mod log;

pub use error::AccessError;
pub use iter::Iter;

/// Fixed-capacity double-ended ring buffer.
///
/// Holds up to `capacity` elements in a preallocated slot array. Pushing on
/// a full ring evicts the element at the opposite end instead of growing,
/// which makes it a bounded history or sliding window over a stream.
///
/// Logical index `i` lives at physical slot `(shift + i) % capacity`; the
/// mapping is the whole trick, everything else is bookkeeping on `shift`
/// and `size`.
#[derive(Debug, Clone)]
pub struct RingDeque<T> {
    storage: Vec<Option<T>>,
    capacity: usize,
    shift: usize,
    size: usize,
}

impl<T> RingDeque<T> {
    /// Allocates `capacity` empty slots. A zero-capacity ring is valid: it
    /// is permanently empty and full, and every push is dropped.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut storage = Vec::new();
        storage.resize_with(capacity, || None);
        Self {
            storage,
            capacity,
            shift: 0,
            size: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn is_full(&self) -> bool {
        self.size == self.capacity
    }

    // Callers guarantee index < size, so capacity is nonzero here.
    fn slot(&self, index: usize) -> usize {
        (self.shift + index) % self.capacity
    }

    // A slot inside the live window always holds a value.
    fn occupied(&self, slot: usize) -> &T {
        match &self.storage[slot] {
            Some(value) => value,
            None => unreachable!("live slot {slot} is vacant"),
        }
    }

    /// Returns the element at logical position `index`, 0 being the front.
    pub fn get(&self, index: usize) -> Result<&T, AccessError> {
        if index >= self.size {
            return Err(AccessError::OutOfRange {
                index,
                len: self.size,
            });
        }
        Ok(self.occupied(self.slot(index)))
    }

    pub fn front(&self) -> Result<&T, AccessError> {
        if self.is_empty() {
            return Err(AccessError::Empty);
        }
        Ok(self.occupied(self.slot(0)))
    }

    pub fn back(&self) -> Result<&T, AccessError> {
        if self.is_empty() {
            return Err(AccessError::Empty);
        }
        Ok(self.occupied(self.slot(self.size - 1)))
    }

    /// Appends at the back. On a full ring the front element is evicted
    /// first and handed back to the caller; the ring never grows on its
    /// own. The new element always lands in the slot right after the old
    /// back.
    pub fn push_back(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return None;
        }
        let evicted = if self.is_full() { self.pop_front() } else { None };
        let slot = self.slot(self.size);
        self.storage[slot] = Some(value);
        self.size += 1;
        evicted
    }

    /// Appends at the front, evicting the back element when full. The
    /// front slot moves one step back (mod capacity) to make room.
    pub fn push_front(&mut self, value: T) -> Option<T> {
        if self.capacity == 0 {
            return None;
        }
        let evicted = if self.is_full() { self.pop_back() } else { None };
        self.shift = (self.shift + self.capacity - 1) % self.capacity;
        self.storage[self.shift] = Some(value);
        self.size += 1;
        evicted
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.storage[self.shift].take();
        self.shift = (self.shift + 1) % self.capacity;
        self.size -= 1;
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.slot(self.size - 1);
        self.size -= 1;
        self.storage[slot].take()
    }

    /// Drops every live element. `shift` keeps its position, so the next
    /// push lands wherever the old front was.
    pub fn clear(&mut self) {
        for index in 0..self.size {
            let slot = self.slot(index);
            self.storage[slot] = None;
        }
        self.size = 0;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    pub fn for_each<F>(&self, mut visit: F)
    where
        F: FnMut(&T),
    {
        for item in self.iter() {
            visit(item);
        }
    }

    /// Visits front to back, stopping at the first visitor error and
    /// propagating it verbatim. Elements already visited stay visited.
    pub fn try_for_each<F, E>(&self, mut visit: F) -> Result<(), E>
    where
        F: FnMut(&T) -> Result<(), E>,
    {
        for item in self.iter() {
            visit(item)?;
        }
        Ok(())
    }

    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// The backing storage as physically laid out, vacant slots included.
    /// Diagnostic view only: no logical ordering is implied, and after a
    /// shrinking [`resize`](Self::resize) the slice may be longer than
    /// [`capacity`](Self::capacity).
    pub fn raw_view(&self) -> &[Option<T>] {
        &self.storage
    }

    /// Rotates the storage in place so the logical front sits in physical
    /// slot 0 and `shift` becomes 0. Logical content and order are
    /// untouched. O(capacity) time, O(1) extra space.
    pub fn defragment(&mut self) {
        if self.shift == 0 {
            return;
        }
        trace!("defragment: rotating {} slots left by {}", self.capacity, self.shift);
        self.storage[..self.capacity].rotate_left(self.shift);
        self.shift = 0;
    }

    /// Changes the capacity. Always defragments first, since growth appends
    /// slots at the physical end and a wrapped live window would end up out
    /// of order. Shrinking below the current length drops elements from the
    /// back. Physical storage only ever grows; `capacity()` still reports
    /// the requested value. O(capacity) even when nothing grows.
    pub fn resize(&mut self, new_capacity: usize) {
        self.defragment();
        debug!(
            "resize: capacity {} -> {} with {} live elements",
            self.capacity, new_capacity, self.size
        );
        if new_capacity > self.size {
            if self.storage.len() < new_capacity {
                self.storage.resize_with(new_capacity, || None);
            }
        } else {
            for slot in &mut self.storage[new_capacity..self.size] {
                *slot = None;
            }
            self.size = new_capacity;
        }
        self.capacity = new_capacity;
    }
}

impl<T> Extend<T> for RingDeque<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        for value in iter {
            self.push_back(value);
        }
    }
}
