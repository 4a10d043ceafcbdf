// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::Error,
    store::{AdaptiveStore, Iter},
    width::Width,
};

/// A fixed-capacity double-ended sequence of `u64` values packed at an
/// adaptive byte width.
///
/// Every element is stored at a uniform width of 1, 2, 4, or 8 bytes in a
/// circular byte buffer of `capacity * 8` bytes. Pushing a value too large for
/// the current width repacks the whole deque at the next sufficient width;
/// widths never shrink afterwards, even if every large value is removed.
///
/// Operations at either end run in constant time (amortized, counting
/// repacks). Interior [`insert`](Self::insert) and [`erase`](Self::erase)
/// shift the packed bytes and are *O*(*n*). Prefix-sum queries scan; use
/// [`SumDeque`](crate::SumDeque) when [`psum`](Self::psum) and
/// [`search`](Self::search) need to be fast.
///
/// # Examples
///
/// ```
/// use vbdeque::VbDeque;
///
/// # fn main() -> Result<(), vbdeque::Error> {
/// let mut deque = VbDeque::with_capacity(8)?;
/// deque.push_back(300)?;
/// deque.push_front(7)?;
///
/// assert_eq!(deque.to_vec(), [7, 300]);
/// assert_eq!(deque.pop_back(), Some(300));
/// # Ok(())
/// # }
/// ```
pub struct VbDeque {
    store: AdaptiveStore,
}

impl VbDeque {
    /// Creates an empty deque holding up to `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is not a nonzero power
    /// of two.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        Ok(Self {
            store: AdaptiveStore::new(capacity)?,
        })
    }

    /// Creates a deque holding up to `capacity` elements, initialized with
    /// `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is not a nonzero power
    /// of two, or [`Error::CapacityExceeded`] if `values` has more than
    /// `capacity` elements.
    pub fn from_values(capacity: usize, values: &[u64]) -> Result<Self, Error> {
        let mut deque = Self::with_capacity(capacity)?;
        for &value in values {
            deque.push_back(value)?;
        }

        Ok(deque)
    }

    /// Returns the number of stored elements.
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Returns `true` if the deque contains no elements.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns the fixed element capacity.
    pub fn capacity(&self) -> usize {
        self.store.capacity()
    }

    /// Returns the current encoding width.
    pub fn width(&self) -> Width {
        self.store.width()
    }

    /// Removes every element.
    ///
    /// The encoding width stays promoted; widths never shrink over a deque's
    /// lifetime.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Appends `value` at the back.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the deque is full.
    pub fn push_back(&mut self, value: u64) -> Result<(), Error> {
        self.check_capacity()?;
        self.store.promote(Width::for_value(value));
        self.store.append_back(value);

        Ok(())
    }

    /// Prepends `value` at the front.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the deque is full.
    pub fn push_front(&mut self, value: u64) -> Result<(), Error> {
        self.check_capacity()?;
        self.store.promote(Width::for_value(value));
        self.store.append_front(value);

        Ok(())
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    pub fn pop_back(&mut self) -> Option<u64> {
        if self.store.is_empty() {
            return None;
        }

        let value = self.store.get(self.store.len() - 1);
        self.store.drop_back();

        Some(value)
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    pub fn pop_front(&mut self) -> Option<u64> {
        if self.store.is_empty() {
            return None;
        }

        let value = self.store.get(0);
        self.store.drop_front();

        Some(value)
    }

    /// Inserts `value` before position `pos`, shifting later elements right.
    ///
    /// `insert(0, v)` and `insert(len, v)` are the constant-time end pushes;
    /// interior positions linearize the buffer and are *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos > len`, or
    /// [`Error::CapacityExceeded`] if the deque is full.
    pub fn insert(&mut self, pos: usize, value: u64) -> Result<(), Error> {
        let len = self.store.len();
        if pos > len {
            return Err(Error::InvalidPosition { position: pos, len });
        }
        if pos == 0 {
            return self.push_front(value);
        }
        if pos == len {
            return self.push_back(value);
        }
        self.check_capacity()?;

        self.store.promote(Width::for_value(value));
        self.store.linearize();
        self.store.open_slot(pos);
        self.store.put(pos, value);

        Ok(())
    }

    /// Removes and returns the element at position `pos`, shifting later
    /// elements left.
    ///
    /// Erasing either end is constant time; interior positions linearize the
    /// buffer and are *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<u64, Error> {
        let len = self.store.len();
        if pos >= len {
            return Err(Error::InvalidPosition { position: pos, len });
        }

        let value = self.store.get(pos);
        if pos == 0 {
            self.store.drop_front();
        } else if pos == len - 1 {
            self.store.drop_back();
        } else {
            self.store.linearize();
            self.store.close_slot(pos);
        }

        Ok(value)
    }

    /// Returns the element at position `pos`, or `None` if out of range.
    pub fn get(&self, pos: usize) -> Option<u64> {
        (pos < self.store.len()).then(|| self.store.get(pos))
    }

    /// Replaces the element at position `pos` with `value`, promoting the
    /// width if `value` needs a wider encoding.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`.
    pub fn set_value(&mut self, pos: usize, value: u64) -> Result<(), Error> {
        let len = self.store.len();
        if pos >= len {
            return Err(Error::InvalidPosition { position: pos, len });
        }

        self.store.promote(Width::for_value(value));
        self.store.put(pos, value);

        Ok(())
    }

    /// Adds `delta` to the element at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`, or
    /// [`Error::ValueOverflow`] if the new value would not fit in a `u64`.
    pub fn increment(&mut self, pos: usize, delta: u64) -> Result<(), Error> {
        let old = self.get(pos).ok_or(Error::InvalidPosition {
            position: pos,
            len: self.store.len(),
        })?;
        let value = old.checked_add(delta).ok_or(Error::ValueOverflow)?;

        self.set_value(pos, value)
    }

    /// Subtracts `delta` from the element at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`, or
    /// [`Error::ValueOverflow`] if `delta` exceeds the stored value.
    pub fn decrement(&mut self, pos: usize, delta: u64) -> Result<(), Error> {
        let old = self.get(pos).ok_or(Error::InvalidPosition {
            position: pos,
            len: self.store.len(),
        })?;
        let value = old.checked_sub(delta).ok_or(Error::ValueOverflow)?;

        self.set_value(pos, value)
    }

    /// Returns the sum of elements `[0, pos]` by scanning, or `None` if `pos`
    /// is out of range.
    ///
    /// The running total must stay within `u64` range; keeping it there is the
    /// caller's obligation for this container.
    pub fn psum(&self, pos: usize) -> Option<u64> {
        if pos >= self.store.len() {
            return None;
        }

        let mut sum = 0;
        for i in 0..=pos {
            sum += self.store.get(i);
        }

        Some(sum)
    }

    /// Returns the sum of every element by scanning.
    pub fn total(&self) -> u64 {
        self.iter().sum()
    }

    /// Returns the smallest position whose prefix sum is at least `target` by
    /// scanning, or `None` if `target` exceeds the total (or the deque is
    /// empty).
    pub fn search(&self, target: u64) -> Option<usize> {
        let mut sum = 0;
        for (i, value) in self.iter().enumerate() {
            sum += value;
            if sum >= target {
                return Some(i);
            }
        }

        None
    }

    /// Returns an iterator over the values in logical order.
    pub fn iter(&self) -> Iter<'_> {
        self.store.iter()
    }

    /// Collects the values into a `Vec` in logical order.
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    fn check_capacity(&self) -> Result<(), Error> {
        if self.store.len() == self.store.capacity() {
            return Err(Error::CapacityExceeded {
                capacity: self.store.capacity(),
            });
        }

        Ok(())
    }
}

impl<'a> IntoIterator for &'a VbDeque {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}
