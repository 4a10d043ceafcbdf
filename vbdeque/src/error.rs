// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use std::{
    error,
    fmt::{self, Display, Formatter},
};

/// An error raised by a deque operation.
///
/// All failures are reported synchronously at the point of violation, and an
/// operation that fails one of its early validations leaves the deque
/// observably unchanged.
///
/// # Examples
///
/// ```
/// use vbdeque::{Error, VbDeque};
///
/// let mut deque = VbDeque::from_values(2, &[1, 2]).unwrap();
///
/// assert_eq!(deque.push_back(3), Err(Error::CapacityExceeded { capacity: 2 }));
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// The requested element capacity is not a nonzero power of two
    InvalidCapacity(usize),
    /// The operation would grow the deque beyond its fixed element capacity
    CapacityExceeded {
        /// The deque's fixed element capacity
        capacity: usize,
    },
    /// A stored value or the running total would leave the representable range
    ValueOverflow,
    /// A position argument was outside its valid range
    InvalidPosition {
        /// The offending position
        position: usize,
        /// The deque's length when the operation was attempted
        len: usize,
    },
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Error::InvalidCapacity(capacity) => {
                write!(f, "invalid capacity {capacity}: must be a nonzero power of two")
            }
            Error::CapacityExceeded { capacity } => {
                write!(f, "capacity exceeded: the deque holds at most {capacity} elements")
            }
            Error::ValueOverflow => {
                write!(f, "value overflow: a value or running total left the representable range")
            }
            Error::InvalidPosition { position, len } => {
                write!(f, "invalid position {position} for a deque of length {len}")
            }
        }
    }
}

impl error::Error for Error {}
