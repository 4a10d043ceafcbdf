// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

//! Compact double-ended integer containers with adaptive-width storage.
//!
//! This crate provides fixed-capacity deques of `u64` values packed into a
//! circular byte buffer at the smallest uniform width (1, 2, 4, or 8 bytes)
//! that holds their contents, widening automatically as larger values arrive.
//! [`VbDeque`] is the plain container; [`SumDeque`] additionally maintains a
//! packed prefix-sum index alongside the data, answering cumulative-sum
//! queries in constant time and cumulative-sum searches in logarithmic time
//! while staying just as compact.
//!
//! # Examples
//!
//! Packing small values tightly while widening on demand:
//!
//! ```
//! use vbdeque::{VbDeque, Width};
//!
//! # fn main() -> Result<(), vbdeque::Error> {
//! let mut deque = VbDeque::with_capacity(64)?;
//! deque.push_back(17)?;
//! deque.push_front(3)?;
//! assert_eq!(deque.width(), Width::U8);
//!
//! deque.push_back(100_000)?;
//! assert_eq!(deque.width(), Width::U32);
//! assert_eq!(deque.to_vec(), [3, 17, 100_000]);
//!
//! # Ok(())
//! # }
//! ```
//!
//! Querying running totals through the indexed variant:
//!
//! ```
//! use vbdeque::SumDeque;
//!
//! # fn main() -> Result<(), vbdeque::Error> {
//! let deque = SumDeque::from_values(64, &[5, 0, 12, 7])?;
//!
//! assert_eq!(deque.psum(2), Some(17));
//! assert_eq!(deque.total(), 24);
//! assert_eq!(deque.search(18), Some(3));
//!
//! # Ok(())
//! # }
//! ```

mod deque;
mod error;
mod store;
mod sum_deque;
mod width;

pub use deque::VbDeque;
pub use error::Error;
pub use store::Iter;
pub use sum_deque::SumDeque;
pub use width::Width;
