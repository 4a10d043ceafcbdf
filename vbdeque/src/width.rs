// Copyright 2025 Logan Magee
//
// SPDX-License-Identifier: Apache-2.0

use byteorder::{ByteOrder, LittleEndian};

/// The uniform encoding width of every element currently stored in a deque.
///
/// A deque's width only ever grows over its lifetime, even if every value that
/// required the wider encoding is later removed. Multi-byte slots are always
/// encoded little-endian regardless of the host byte order, so a packed buffer
/// means the same thing on every target.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum Width {
    /// One byte per element; values up to [`u8::MAX`]
    U8 = 1,
    /// Two bytes per element; values up to [`u16::MAX`]
    U16 = 2,
    /// Four bytes per element; values up to [`u32::MAX`]
    U32 = 4,
    /// Eight bytes per element; the full [`u64`] range
    U64 = 8,
}

impl Width {
    /// Returns the smallest width whose range holds `value`.
    pub fn for_value(value: u64) -> Self {
        if value <= u64::from(u8::MAX) {
            Width::U8
        } else if value <= u64::from(u16::MAX) {
            Width::U16
        } else if value <= u64::from(u32::MAX) {
            Width::U32
        } else {
            Width::U64
        }
    }

    /// Returns the number of bytes one slot occupies at this width.
    pub const fn bytes(self) -> usize {
        self as usize
    }

    /// Reads the slot starting at byte offset `pos` in `buf`.
    pub(crate) fn read(self, buf: &[u8], pos: usize) -> u64 {
        match self {
            Width::U8 => u64::from(buf[pos]),
            Width::U16 => u64::from(LittleEndian::read_u16(&buf[pos..pos + 2])),
            Width::U32 => u64::from(LittleEndian::read_u32(&buf[pos..pos + 4])),
            Width::U64 => LittleEndian::read_u64(&buf[pos..pos + 8]),
        }
    }

    /// Writes `value` into the slot starting at byte offset `pos` in `buf`.
    ///
    /// The value must fit in this width's range; the excess bytes of a wider
    /// value are discarded.
    pub(crate) fn write(self, buf: &mut [u8], pos: usize, value: u64) {
        match self {
            Width::U8 => buf[pos] = value as u8,
            Width::U16 => LittleEndian::write_u16(&mut buf[pos..pos + 2], value as u16),
            Width::U32 => LittleEndian::write_u32(&mut buf[pos..pos + 4], value as u32),
            Width::U64 => LittleEndian::write_u64(&mut buf[pos..pos + 8], value),
        }
    }
}
