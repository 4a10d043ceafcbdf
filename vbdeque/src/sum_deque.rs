// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use crate::{
    error::Error,
    store::{AdaptiveStore, Iter},
    width::Width,
};

/// A [`VbDeque`](crate::VbDeque) augmented with a packed split prefix-sum
/// index, answering [`psum`](Self::psum) in *O*(1) and
/// [`search`](Self::search) in *O*(log *n*).
///
/// Alongside the data array, the deque maintains a second packed array of the
/// same width and circular layout holding partial sums, split at a pivot
/// `split`: entry `i < split` holds the sum of elements `[i, split)` measured
/// backward from the pivot, and entry `i >= split` holds the sum of elements
/// `[split, i]` measured forward. Any prefix sum is then one or two slot reads
/// away, and a cumulative-value search reduces to a binary search in one half.
///
/// Because sum entries can exceed any single element, the encoding width is
/// driven by the *running total* rather than the raw values. That also bounds
/// the domain: the total must fit in a `u64` and every element must fit in an
/// `i64`, so point updates can move signed deltas through the index. Both
/// bounds are enforced and violations fail with
/// [`Error::ValueOverflow`].
///
/// Pushes and pops at the ends maintain the index incrementally in *O*(1),
/// with a full rebuild (repivoting at `len / 2`) only when a shrinking end
/// catches up to the pivot. Interior [`insert`](Self::insert) and
/// [`erase`](Self::erase) always rebuild and are *O*(*n*).
///
/// # Examples
///
/// ```
/// use vbdeque::SumDeque;
///
/// # fn main() -> Result<(), vbdeque::Error> {
/// let mut deque = SumDeque::with_capacity(8)?;
/// deque.push_back(200)?;
/// deque.push_back(100)?;
/// deque.push_front(50)?;
///
/// assert_eq!(deque.to_vec(), [50, 200, 100]);
/// assert_eq!(deque.psum(1), Some(250));
/// assert_eq!(deque.search(60), Some(1));
/// # Ok(())
/// # }
/// ```
pub struct SumDeque {
    store: AdaptiveStore,
    sums: Box<[u8]>,
    split: usize,
}

impl SumDeque {
    /// Creates an empty deque holding up to `capacity` elements.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is not a nonzero power
    /// of two.
    pub fn with_capacity(capacity: usize) -> Result<Self, Error> {
        let store = AdaptiveStore::new(capacity)?;
        let sums = vec![0; capacity * 8].into_boxed_slice();

        Ok(Self {
            store,
            sums,
            split: 0,
        })
    }

    /// Creates a deque holding up to `capacity` elements, initialized with
    /// `values` in order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidCapacity`] if `capacity` is not a nonzero power
    /// of two, [`Error::CapacityExceeded`] if `values` has more than
    /// `capacity` elements, or [`Error::ValueOverflow`] if a value or the
    /// total leaves the representable range.
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
        self.split = 0;
    }

    /// Appends `value` at the back.
    ///
    /// The new element joins the forward-measured half, so the index is
    /// extended with a single slot write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the deque is full, or
    /// [`Error::ValueOverflow`] if `value` exceeds `i64::MAX` or would push
    /// the total past `u64::MAX`.
    pub fn push_back(&mut self, value: u64) -> Result<(), Error> {
        self.check_capacity()?;
        let total = self.check_value(value)?;
        self.ensure_width(total + value);

        let tail = if self.store.is_empty() {
            0
        } else {
            self.sum_at(self.store.len() - 1)
        };
        self.store.append_back(value);
        self.set_sum(self.store.len() - 1, tail + value);

        Ok(())
    }

    /// Prepends `value` at the front.
    ///
    /// The new element becomes the outermost entry of the backward-measured
    /// half, so the index is extended with a single slot write and the pivot
    /// advances by one.
    ///
    /// # Errors
    ///
    /// Returns [`Error::CapacityExceeded`] if the deque is full, or
    /// [`Error::ValueOverflow`] if `value` exceeds `i64::MAX` or would push
    /// the total past `u64::MAX`.
    pub fn push_front(&mut self, value: u64) -> Result<(), Error> {
        self.check_capacity()?;
        let total = self.check_value(value)?;
        self.ensure_width(total + value);

        let was_empty = self.store.is_empty();
        let left = self.left_total();
        self.store.append_front(value);

        if was_empty {
            self.split = 0;
            self.set_sum(0, value);
        } else {
            self.split += 1;
            self.set_sum(0, left + value);
        }

        Ok(())
    }

    /// Removes and returns the last element, or `None` if the deque is empty.
    ///
    /// Usually *O*(1); rebuilds the index only when the forward-measured half
    /// becomes empty.
    pub fn pop_back(&mut self) -> Option<u64> {
        if self.store.is_empty() {
            return None;
        }

        Some(self.take_back())
    }

    /// Removes and returns the first element, or `None` if the deque is empty.
    ///
    /// Usually *O*(1); rebuilds the index only when the backward-measured half
    /// becomes empty.
    pub fn pop_front(&mut self) -> Option<u64> {
        if self.store.is_empty() {
            return None;
        }

        Some(self.take_front())
    }

    /// Inserts `value` before position `pos`, shifting later elements right.
    ///
    /// End positions delegate to the constant-time pushes. Interior positions
    /// linearize the buffer, splice the data array, and rebuild the entire sum
    /// index, so they are always *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos > len`,
    /// [`Error::CapacityExceeded`] if the deque is full, or
    /// [`Error::ValueOverflow`] if `value` exceeds `i64::MAX` or would push
    /// the total past `u64::MAX`.
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
        let total = self.check_value(value)?;

        self.store.promote(Width::for_value(total + value));
        self.store.linearize();
        self.store.open_slot(pos);
        self.store.put(pos, value);
        self.rebuild_sums();

        Ok(())
    }

    /// Removes and returns the element at position `pos`, shifting later
    /// elements left.
    ///
    /// End positions delegate to the pops. Interior positions linearize the
    /// buffer, splice the data array, and rebuild the entire sum index, so
    /// they are always *O*(*n*).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`.
    pub fn erase(&mut self, pos: usize) -> Result<u64, Error> {
        let len = self.store.len();
        if pos >= len {
            return Err(Error::InvalidPosition { position: pos, len });
        }
        if pos == 0 {
            return Ok(self.take_front());
        }
        if pos == len - 1 {
            return Ok(self.take_back());
        }

        let value = self.store.get(pos);
        self.store.linearize();
        self.store.close_slot(pos);
        self.rebuild_sums();

        Ok(value)
    }

    /// Returns the element at position `pos`, or `None` if out of range.
    pub fn get(&self, pos: usize) -> Option<u64> {
        (pos < self.store.len()).then(|| self.store.get(pos))
    }

    /// Replaces the element at position `pos` with `value`.
    ///
    /// The signed difference is applied to the affected half of the sum
    /// index: entries `[0, pos]` when `pos` is left of the pivot, entries
    /// `[pos, len)` otherwise. Worst case *O*(*n*), constant time when `pos`
    /// is adjacent to the pivot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`, or
    /// [`Error::ValueOverflow`] if `value` exceeds `i64::MAX` or the new
    /// total would exceed `u64::MAX`.
    pub fn set_value(&mut self, pos: usize, value: u64) -> Result<(), Error> {
        let len = self.store.len();
        if pos >= len {
            return Err(Error::InvalidPosition { position: pos, len });
        }

        let old = self.store.get(pos);
        if value == old {
            return Ok(());
        }
        if value > i64::MAX as u64 {
            return Err(Error::ValueOverflow);
        }

        let total = self.total();
        let new_total = if value > old {
            let grow = value - old;
            if grow > u64::MAX - total {
                return Err(Error::ValueOverflow);
            }
            total + grow
        } else {
            total - (old - value)
        };
        self.ensure_width(new_total);

        self.store.put(pos, value);

        // Entry i of the left half covers [i, split), so it includes pos only
        // for i <= pos; entry i of the right half covers [split, i], so it
        // includes pos only for i >= pos.
        let (lo, hi) = if pos < self.split {
            (0, pos + 1)
        } else {
            (pos, self.store.len())
        };
        if value > old {
            let grow = value - old;
            for i in lo..hi {
                let sum = self.sum_at(i) + grow;
                self.set_sum(i, sum);
            }
        } else {
            let shrink = old - value;
            for i in lo..hi {
                let sum = self.sum_at(i) - shrink;
                self.set_sum(i, sum);
            }
        }

        Ok(())
    }

    /// Adds `delta` to the element at position `pos`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] if `pos >= len`, or
    /// [`Error::ValueOverflow`] if the new value or total would leave the
    /// representable range.
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

    /// Returns the sum of elements `[0, pos]` in constant time, or `None` if
    /// `pos` is out of range.
    pub fn psum(&self, pos: usize) -> Option<u64> {
        (pos < self.store.len()).then(|| self.psum_unchecked(pos))
    }

    /// Returns the sum of every element in constant time.
    pub fn total(&self) -> u64 {
        if self.store.is_empty() {
            0
        } else {
            self.psum_unchecked(self.store.len() - 1)
        }
    }

    /// Returns the remaining room in the `u64` running total.
    pub fn sum_headroom(&self) -> u64 {
        u64::MAX - self.total()
    }

    /// Returns the smallest position whose prefix sum is at least `target`,
    /// or `None` if `target` exceeds the total (or the deque is empty).
    ///
    /// `search(0)` on a non-empty deque is position 0. The search runs as a
    /// binary search over whichever half of the index covers `target`, so it
    /// is *O*(log *n*).
    pub fn search(&self, target: u64) -> Option<usize> {
        let len = self.store.len();
        if len == 0 {
            return None;
        }
        if target == 0 {
            return Some(0);
        }
        if target > self.total() {
            return None;
        }

        let left = self.left_total();
        let result = if left >= target {
            lower_bound(0, self.split, target, |i| {
                left - self.sum_at(i) + self.store.get(i)
            })
        } else {
            lower_bound(self.split, len, target, |i| left + self.sum_at(i))
        };

        Some(result)
    }

    /// Returns an iterator over the values in logical order.
    pub fn iter(&self) -> Iter<'_> {
        self.store.iter()
    }

    /// Collects the values into a `Vec` in logical order.
    pub fn to_vec(&self) -> Vec<u64> {
        self.iter().collect()
    }

    fn sum_at(&self, index: usize) -> u64 {
        self.store.get_companion(&self.sums, index)
    }

    fn set_sum(&mut self, index: usize, value: u64) {
        self.store.put_companion(&mut self.sums, index, value);
    }

    /// Sum of the backward-measured half, `Σ data[0..split]`.
    fn left_total(&self) -> u64 {
        if self.split == 0 { 0 } else { self.sum_at(0) }
    }

    fn psum_unchecked(&self, pos: usize) -> u64 {
        let left = self.left_total();

        if pos < self.split {
            // Subtract the part of the left half beyond pos
            let above = if pos + 1 < self.split {
                self.sum_at(pos + 1)
            } else {
                0
            };
            left - above
        } else {
            left + self.sum_at(pos)
        }
    }

    /// Rebuilds the whole sum index, repivoting at `len / 2`.
    fn rebuild_sums(&mut self) {
        let len = self.store.len();
        let mid = len / 2;

        let mut sum = 0;
        for i in mid..len {
            sum += self.store.get(i);
            self.set_sum(i, sum);
        }

        sum = 0;
        for i in (0..mid).rev() {
            sum += self.store.get(i);
            self.set_sum(i, sum);
        }

        self.split = mid;
    }

    /// Repacks both arrays if `new_total` needs a wider encoding.
    ///
    /// Sum entries are bounded by the running total, so a width that holds the
    /// total holds every entry of both arrays. The index is rebuilt from the
    /// data array after the repack.
    fn ensure_width(&mut self, new_total: u64) {
        let needed = Width::for_value(new_total);
        if needed > self.store.width() {
            self.store.promote(needed);
            self.rebuild_sums();
        }
    }

    /// Removes the last element. The deque must not be empty.
    fn take_back(&mut self) -> u64 {
        let value = self.store.get(self.store.len() - 1);
        self.store.drop_back();

        if self.store.is_empty() {
            self.clear();
        } else if self.split == self.store.len() {
            // The forward-measured half is empty; repivot
            self.rebuild_sums();
        }

        value
    }

    /// Removes the first element. The deque must not be empty.
    fn take_front(&mut self) -> u64 {
        let value = self.store.get(0);
        self.store.drop_front();

        if self.store.is_empty() {
            self.clear();
        } else if self.split == 0 {
            // The backward-measured half is empty; repivot
            self.rebuild_sums();
        } else {
            self.split -= 1;
        }

        value
    }

    fn check_capacity(&self) -> Result<(), Error> {
        if self.store.len() == self.store.capacity() {
            return Err(Error::CapacityExceeded {
                capacity: self.store.capacity(),
            });
        }

        Ok(())
    }

    /// Validates `value` against the element and total bounds, returning the
    /// current total.
    fn check_value(&self, value: u64) -> Result<u64, Error> {
        if value > i64::MAX as u64 {
            return Err(Error::ValueOverflow);
        }

        let total = self.total();
        if value > u64::MAX - total {
            return Err(Error::ValueOverflow);
        }

        Ok(total)
    }
}

impl<'a> IntoIterator for &'a SumDeque {
    type Item = u64;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Returns the smallest `i` in `[lo, hi)` with `f(i) >= target`.
///
/// `f` must be non-decreasing on the range and the caller guarantees a hit
/// exists.
fn lower_bound(mut lo: usize, mut hi: usize, target: u64, f: impl Fn(usize) -> u64) -> usize {
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if f(mid) >= target {
            hi = mid;
        } else {
            lo = mid + 1;
        }
    }

    lo
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Checks every prefix sum and forward search against a scan of `model`.
    fn assert_sums_match(deque: &SumDeque, model: &[u64]) {
        assert_eq!(deque.to_vec(), model, "logical contents diverged");

        let mut acc = 0;
        for (i, &value) in model.iter().enumerate() {
            acc += value;
            assert_eq!(deque.psum(i), Some(acc), "psum({i}) diverged");
        }
        assert_eq!(deque.total(), acc, "total diverged");
        assert_eq!(deque.psum(model.len()), None, "psum past the end");

        // search(psum(i)) must come back to the first index reaching that sum
        let mut acc = 0;
        for (i, &value) in model.iter().enumerate() {
            acc += value;
            if value > 0 {
                assert_eq!(deque.search(acc), Some(i), "search(psum({i})) diverged");
            }
        }
        if acc < u64::MAX {
            assert_eq!(deque.search(acc + 1), None, "search past the total");
        }
    }

    #[test]
    fn tracks_sums_through_mixed_pushes() {
        let mut deque = SumDeque::with_capacity(8).unwrap();

        deque.push_back(200).unwrap();
        assert_eq!(deque.psum(0), Some(200));
        assert_eq!(deque.width(), Width::U8);

        // The running total (300) drives promotion, not the raw value
        deque.push_back(100).unwrap();
        assert_eq!(deque.width(), Width::U16);
        assert_eq!(deque.psum(0), Some(200));
        assert_eq!(deque.psum(1), Some(300));

        deque.push_front(50).unwrap();
        assert_eq!(deque.to_vec(), [50, 200, 100]);
        assert_eq!(deque.psum(0), Some(50));
        assert_eq!(deque.psum(1), Some(250));
        assert_eq!(deque.psum(2), Some(350));

        assert_eq!(deque.search(60), Some(1));
        assert_eq!(deque.search(400), None);
    }

    #[test]
    fn rejects_pushes_beyond_capacity() {
        let mut deque = SumDeque::from_values(8, &[1; 8]).unwrap();

        let full = Err(Error::CapacityExceeded { capacity: 8 });
        assert_eq!(deque.push_back(1), full);
        assert_eq!(deque.push_front(1), full);
        assert_eq!(deque.insert(3, 1), full);
        assert_sums_match(&deque, &[1; 8]);
    }

    #[test]
    fn rejects_values_outside_the_signed_range() {
        let mut deque = SumDeque::with_capacity(8).unwrap();

        assert_eq!(deque.push_back(i64::MAX as u64 + 1), Err(Error::ValueOverflow));
        assert_eq!(deque.push_front(u64::MAX), Err(Error::ValueOverflow));
        assert!(deque.is_empty());

        deque.push_back(5).unwrap();
        assert_eq!(deque.set_value(0, u64::MAX), Err(Error::ValueOverflow));
        assert_eq!(deque.get(0), Some(5));
    }

    #[test]
    fn rejects_totals_that_overflow() {
        let mut deque = SumDeque::with_capacity(8).unwrap();
        deque.push_back(i64::MAX as u64).unwrap();
        deque.push_back(i64::MAX as u64).unwrap();

        // The total sits at u64::MAX - 1, so there is room for exactly 1 more
        assert_eq!(deque.push_back(2), Err(Error::ValueOverflow));
        assert_eq!(deque.insert(1, 2), Err(Error::ValueOverflow));
        assert_eq!(deque.sum_headroom(), 1);
        deque.push_front(1).unwrap();
        assert_eq!(deque.total(), u64::MAX);
    }

    #[test]
    fn pop_front_repivots_when_the_left_half_empties() {
        let values = [3, 1, 4, 1, 5, 9, 2, 6];
        let mut deque = SumDeque::from_values(8, &values).unwrap();
        let mut model = values.to_vec();

        assert_eq!(deque.pop_back(), Some(6));
        deque.push_front(7).unwrap();
        model.pop();
        model.insert(0, 7);

        while let Some(expected) = model.first().copied() {
            assert_eq!(deque.pop_front(), Some(expected));
            model.remove(0);
            assert_sums_match(&deque, &model);
        }
        assert_eq!(deque.pop_front(), None);
    }

    #[test]
    fn pop_back_repivots_when_the_right_half_empties() {
        let values = [10, 20, 30, 40, 50];
        let mut deque = SumDeque::from_values(8, &values).unwrap();
        let mut model = values.to_vec();

        while let Some(expected) = model.last().copied() {
            assert_eq!(deque.pop_back(), Some(expected));
            model.pop();
            assert_sums_match(&deque, &model);
        }
        assert_eq!(deque.pop_back(), None);
    }

    #[test]
    fn interior_insert_and_erase_rebuild_the_index() {
        let mut deque = SumDeque::with_capacity(16).unwrap();
        let mut model: Vec<u64> = Vec::new();

        for &(pos, value) in &[(0, 10), (1, 30), (1, 20), (0, 5), (2, 70_000), (4, 8)] {
            deque.insert(pos, value).unwrap();
            model.insert(pos, value);
            assert_sums_match(&deque, &model);
        }

        for pos in [2, 0, 2, 1] {
            let expected = model.remove(pos);
            assert_eq!(deque.erase(pos), Ok(expected));
            assert_sums_match(&deque, &model);
        }
    }

    #[test]
    fn set_value_adjusts_both_halves() {
        let values = [1, 2, 3, 4, 5, 6];
        let mut deque = SumDeque::from_values(8, &values).unwrap();
        let mut model = values.to_vec();

        // Shuffle the pivot away from the middle first
        deque.push_front(9).unwrap();
        model.insert(0, 9);

        for (pos, value) in [(0, 4), (1, 90), (6, 0), (3, 40_000), (2, 1)] {
            deque.set_value(pos, value).unwrap();
            model[pos] = value;
            assert_sums_match(&deque, &model);
        }
    }

    #[test]
    fn set_value_to_the_same_value_is_a_no_op() {
        let mut deque = SumDeque::from_values(8, &[1, 2, 3]).unwrap();

        deque.set_value(1, 2).unwrap();

        assert_eq!(deque.width(), Width::U8);
        assert_sums_match(&deque, &[1, 2, 3]);
    }

    #[test]
    fn search_handles_zeros_and_boundaries() {
        let deque = SumDeque::from_values(8, &[0, 0, 7, 0, 3]).unwrap();

        assert_eq!(deque.search(0), Some(0));
        assert_eq!(deque.search(1), Some(2));
        assert_eq!(deque.search(7), Some(2));
        assert_eq!(deque.search(8), Some(4));
        assert_eq!(deque.search(10), Some(4));
        assert_eq!(deque.search(11), None);

        assert_eq!(SumDeque::with_capacity(8).unwrap().search(0), None);
    }

    #[test]
    fn search_binary_search_agrees_with_a_scan() {
        let values: Vec<u64> = (0..64).map(|i| (i * 37 + 11) % 101).collect();
        let mut deque = SumDeque::with_capacity(64).unwrap();

        // Split the pushes across both ends so the pivot sits off-center
        for &value in &values[..40] {
            deque.push_back(value).unwrap();
        }
        for &value in values[40..].iter().rev() {
            deque.push_front(value).unwrap();
        }

        let model: Vec<u64> = values[40..]
            .iter()
            .rev()
            .chain(&values[..40])
            .copied()
            .collect();
        assert_sums_match(&deque, &model);

        let total = deque.total();
        for target in 0..=total {
            let scan = {
                let mut sum = 0;
                model.iter().position(|&v| {
                    sum += v;
                    sum >= target
                })
            };
            let expected = if target == 0 { Some(0) } else { scan };
            assert_eq!(deque.search(target), expected, "search({target}) diverged");
        }
    }

    #[test]
    fn width_is_driven_by_the_total_and_never_shrinks() {
        let mut deque = SumDeque::with_capacity(8).unwrap();

        // Raw values all fit in one byte, but their sum does not
        for _ in 0..4 {
            deque.push_back(100).unwrap();
        }
        assert_eq!(deque.width(), Width::U16);

        deque.push_back(70_000).unwrap();
        assert_eq!(deque.width(), Width::U32);

        while deque.pop_back().is_some() {}
        assert_eq!(deque.width(), Width::U32);

        deque.clear();
        assert_eq!(deque.width(), Width::U32);
    }

    #[test]
    fn sums_survive_buffer_wraparound() {
        let mut deque = SumDeque::with_capacity(4).unwrap();
        let mut model = std::collections::VecDeque::new();

        for i in 1..64 {
            deque.push_front(i).unwrap();
            model.push_front(i);
            if model.len() == 4 {
                assert_eq!(deque.pop_back(), model.pop_back());
                assert_eq!(deque.pop_back(), model.pop_back());
            }
            let flat: Vec<u64> = model.iter().copied().collect();
            assert_sums_match(&deque, &flat);
        }
    }

    #[test]
    fn erase_validates_positions() {
        let mut deque = SumDeque::from_values(8, &[1, 2, 3]).unwrap();

        assert_eq!(
            deque.erase(3),
            Err(Error::InvalidPosition { position: 3, len: 3 })
        );
        assert_eq!(
            deque.insert(4, 9),
            Err(Error::InvalidPosition { position: 4, len: 3 })
        );
        assert_eq!(
            deque.set_value(3, 9),
            Err(Error::InvalidPosition { position: 3, len: 3 })
        );
    }

    #[test]
    fn increment_and_decrement_flow_through_the_index() {
        let mut deque = SumDeque::from_values(8, &[10, 20, 30]).unwrap();

        deque.increment(1, 5).unwrap();
        deque.decrement(2, 30).unwrap();

        assert_sums_match(&deque, &[10, 25, 0]);
        assert_eq!(deque.decrement(2, 1), Err(Error::ValueOverflow));
    }
}
