// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::{error::Error, width::Width};

/// Fixed-capacity packed element storage addressed circularly.
///
/// The buffer holds `capacity * 8` bytes, enough for `capacity` elements even
/// at the widest encoding. `start` is the byte offset of logical index 0 and
/// is always a multiple of the current width, as is the buffer length, so a
/// slot never straddles the wrap point.
///
/// The scratch buffer is allocated once and reused for every linearization and
/// repack, keeping relocation off the stack.
pub(crate) struct AdaptiveStore {
    buf: Box<[u8]>,
    scratch: Box<[u8]>,
    start: usize,
    len: usize,
    width: Width,
    capacity: usize,
}

impl AdaptiveStore {
    /// Creates storage for up to `capacity` elements.
    ///
    /// `capacity` must be a nonzero power of two so circular offsets reduce to
    /// a mask.
    pub(crate) fn new(capacity: usize) -> Result<Self, Error> {
        if capacity == 0 || !capacity.is_power_of_two() {
            return Err(Error::InvalidCapacity(capacity));
        }

        let buf_len = capacity * 8;

        Ok(Self {
            buf: vec![0; buf_len].into_boxed_slice(),
            scratch: vec![0; buf_len].into_boxed_slice(),
            start: 0,
            len: 0,
            width: Width::U8,
            capacity,
        })
    }

    pub(crate) fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.capacity
    }

    pub(crate) fn width(&self) -> Width {
        self.width
    }

    fn mask(&self) -> usize {
        self.buf.len() - 1
    }

    /// Returns the physical byte offset of the slot at logical `index`.
    fn offset_of(&self, index: usize) -> usize {
        (self.start + index * self.width.bytes()) & self.mask()
    }

    pub(crate) fn get(&self, index: usize) -> u64 {
        debug_assert!(index < self.len, "index must be below the logical length");

        self.width.read(&self.buf, self.offset_of(index))
    }

    pub(crate) fn put(&mut self, index: usize, value: u64) {
        let pos = self.offset_of(index);
        self.width.write(&mut self.buf, pos, value);
    }

    /// Reads slot `index` of a companion buffer sharing this store's layout.
    ///
    /// The prefix-sum index is such a companion: it mirrors the store's start
    /// offset and width so both arrays shift together on front operations.
    pub(crate) fn get_companion(&self, companion: &[u8], index: usize) -> u64 {
        self.width.read(companion, self.offset_of(index))
    }

    /// Writes slot `index` of a companion buffer sharing this store's layout.
    pub(crate) fn put_companion(&self, companion: &mut [u8], index: usize, value: u64) {
        self.width.write(companion, self.offset_of(index), value);
    }

    /// Appends a slot at the back holding `value`.
    ///
    /// The caller has already checked capacity and ensured the width.
    pub(crate) fn append_back(&mut self, value: u64) {
        let index = self.len;
        self.len += 1;
        self.put(index, value);
    }

    /// Opens a slot at the front holding `value`.
    pub(crate) fn append_front(&mut self, value: u64) {
        self.start = self.start.wrapping_sub(self.width.bytes()) & self.mask();
        self.len += 1;
        self.put(0, value);
    }

    pub(crate) fn drop_back(&mut self) {
        debug_assert!(self.len > 0, "cannot drop from an empty store");

        self.len -= 1;
    }

    pub(crate) fn drop_front(&mut self) {
        debug_assert!(self.len > 0, "cannot drop from an empty store");

        self.start = (self.start + self.width.bytes()) & self.mask();
        self.len -= 1;
    }

    /// Resets to the empty state.
    ///
    /// The width stays promoted: widths never shrink over a store's lifetime.
    pub(crate) fn clear(&mut self) {
        self.len = 0;
        self.start = 0;
    }

    /// Rewrites the buffer so logical index 0 sits at physical offset 0.
    ///
    /// Required before any operation that needs the live elements contiguous:
    /// interior insert and erase, and width promotion.
    pub(crate) fn linearize(&mut self) {
        if self.start == 0 {
            return;
        }

        let used = self.len * self.width.bytes();
        let tail_len = self.buf.len() - self.start;

        if used <= tail_len {
            self.scratch[..used].copy_from_slice(&self.buf[self.start..self.start + used]);
        } else {
            let wrapped = used - tail_len;
            self.scratch[..tail_len].copy_from_slice(&self.buf[self.start..]);
            self.scratch[tail_len..used].copy_from_slice(&self.buf[..wrapped]);
        }

        self.buf[..used].copy_from_slice(&self.scratch[..used]);
        self.start = 0;
    }

    /// Repacks every element at `new_width` if it is wider than the current
    /// width. Narrower or equal widths are a no-op: widths never shrink.
    pub(crate) fn promote(&mut self, new_width: Width) {
        if new_width <= self.width {
            return;
        }

        self.linearize();

        let old_width = self.width;
        let used = self.len * old_width.bytes();
        self.scratch[..used].copy_from_slice(&self.buf[..used]);
        self.width = new_width;

        for i in 0..self.len {
            let value = old_width.read(&self.scratch, i * old_width.bytes());
            new_width.write(&mut self.buf, i * new_width.bytes(), value);
        }
    }

    /// Shifts elements `[pos, len)` one slot right, opening a hole at `pos`
    /// and growing the length. Requires a linearized buffer.
    pub(crate) fn open_slot(&mut self, pos: usize) {
        debug_assert_eq!(self.start, 0, "the buffer must be linearized");

        let w = self.width.bytes();
        self.buf.copy_within(pos * w..self.len * w, (pos + 1) * w);
        self.len += 1;
    }

    /// Removes the slot at `pos`, shifting elements `[pos + 1, len)` one slot
    /// left. Requires a linearized buffer.
    pub(crate) fn close_slot(&mut self, pos: usize) {
        debug_assert_eq!(self.start, 0, "the buffer must be linearized");

        let w = self.width.bytes();
        self.buf.copy_within((pos + 1) * w..self.len * w, pos * w);
        self.len -= 1;
    }

    pub(crate) fn iter(&self) -> Iter<'_> {
        Iter {
            store: self,
            front: 0,
            back: self.len,
        }
    }
}

/// An iterator over a deque's values in logical order.
///
/// Created by the `iter()` methods on [`VbDeque`](crate::VbDeque) and
/// [`SumDeque`](crate::SumDeque).
pub struct Iter<'a> {
    store: &'a AdaptiveStore,
    front: usize,
    back: usize,
}

impl Iterator for Iter<'_> {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }

        let value = self.store.get(self.front);
        self.front += 1;

        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Iter<'_> {
    fn next_back(&mut self) -> Option<u64> {
        if self.front == self.back {
            return None;
        }

        self.back -= 1;

        Some(self.store.get(self.back))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_capacities_that_are_not_powers_of_two() {
        assert!(matches!(AdaptiveStore::new(0), Err(Error::InvalidCapacity(0))));
        assert!(matches!(AdaptiveStore::new(12), Err(Error::InvalidCapacity(12))));
        assert!(AdaptiveStore::new(1).is_ok());
        assert!(AdaptiveStore::new(1024).is_ok());
    }

    #[test]
    fn front_slots_wrap_around() {
        let mut store = AdaptiveStore::new(4).unwrap();

        // Index 0 lands at the last byte of the buffer
        store.append_front(7);
        store.append_back(9);

        assert_eq!(store.get(0), 7);
        assert_eq!(store.get(1), 9);
    }

    #[test]
    fn linearize_handles_wrapped_contents() {
        let mut store = AdaptiveStore::new(4).unwrap();
        store.append_back(1);
        store.append_front(2);
        store.append_front(3);

        store.linearize();

        assert_eq!(store.get(0), 3);
        assert_eq!(store.get(1), 2);
        assert_eq!(store.get(2), 1);
    }

    #[test]
    fn promote_preserves_values_and_never_shrinks() {
        let mut store = AdaptiveStore::new(8).unwrap();
        for value in [3, 250, 90] {
            store.append_back(value);
        }

        store.promote(Width::U32);
        assert_eq!(store.width(), Width::U32);
        assert_eq!(store.iter().collect::<Vec<_>>(), [3, 250, 90]);

        store.promote(Width::U8);
        assert_eq!(store.width(), Width::U32);
    }

    #[test]
    fn promote_works_on_wrapped_contents() {
        let mut store = AdaptiveStore::new(4).unwrap();
        store.append_front(10);
        store.append_front(20);
        store.append_back(30);

        store.promote(Width::U64);

        assert_eq!(store.iter().collect::<Vec<_>>(), [20, 10, 30]);
    }
}
