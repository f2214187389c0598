//! Instruction and fetch line address types.
//!
//! This module defines strong types for the two address spaces the engine
//! works in, to prevent accidental mixing. It provides the following:
//! 1. **Type Safety:** Distinguishes word addresses from line addresses at
//!    compile time; a [`LineAddr`] is 16-byte aligned by construction.
//! 2. **Address Manipulation:** Lane extraction, line rounding, and
//!    wrapping byte offsets.

use super::constants::{LANE_MASK, LANE_SHIFT, LINE_OFFSET_MASK, WORD_BYTES};

/// A 32-bit instruction word address.
///
/// Every slot in the prefetch window carries one of these; consecutive
/// slots differ by exactly [`WORD_BYTES`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct InstAddr(pub u32);

/// A 32-bit fetch line address, always 16-byte aligned.
///
/// One fetch-memory response covers exactly one line (four instruction
/// words). The inner value is private so the alignment invariant cannot
/// be broken from outside this module.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct LineAddr(u32);

impl InstAddr {
    /// Creates a new word address from a raw 32-bit value.
    #[inline(always)]
    pub fn new(addr: u32) -> Self {
        Self(addr)
    }

    /// Returns the raw 32-bit address value.
    #[inline(always)]
    pub fn val(self) -> u32 {
        self.0
    }

    /// Returns the 16-byte-aligned line this address lies in.
    #[inline(always)]
    pub fn line(self) -> LineAddr {
        LineAddr(self.0 & !LINE_OFFSET_MASK)
    }

    /// Returns the word lane (0-3) this address selects within its line.
    ///
    /// Lanes are taken from address bits [3:2].
    #[inline(always)]
    pub fn lane(self) -> usize {
        ((self.0 >> LANE_SHIFT) & LANE_MASK) as usize
    }

    /// Returns this address advanced by `bytes`, wrapping at the 32-bit
    /// boundary.
    #[inline(always)]
    pub fn offset(self, bytes: u32) -> Self {
        Self(self.0.wrapping_add(bytes))
    }
}

impl LineAddr {
    /// Returns the line containing the given word address.
    #[inline(always)]
    pub fn containing(addr: InstAddr) -> Self {
        addr.line()
    }

    /// Returns the raw 32-bit line base address.
    #[inline(always)]
    pub fn val(self) -> u32 {
        self.0
    }

    /// Returns whether the given word address lies within this line.
    #[inline(always)]
    pub fn contains(self, addr: InstAddr) -> bool {
        addr.line() == self
    }

    /// Returns the word address of the given lane (0-3) within this line.
    #[inline(always)]
    pub fn word(self, lane: usize) -> InstAddr {
        InstAddr(self.0.wrapping_add(lane as u32 * WORD_BYTES))
    }
}
