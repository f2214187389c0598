//! Window and line geometry constants.
//!
//! This module defines the fixed geometry of the prefetch window and the
//! fetch-memory interface. It includes:
//! 1. **Window Geometry:** Slot count and issue width.
//! 2. **Line Geometry:** Fetch line size, word size, and lane extraction.

/// Number of instruction slots in the prefetch window.
///
/// The window is a fixed arena of four slots addressed modulo four via the
/// head index. It never grows or shrinks.
pub const SLOT_COUNT: usize = 4;

/// Number of instructions visible to decode per step.
pub const ISSUE_WIDTH: usize = 2;

/// Size of one instruction word in bytes.
pub const WORD_BYTES: u32 = 4;

/// Size of one fetch line in bytes.
///
/// The fetch memory answers each accepted address with exactly one
/// naturally-aligned 16-byte line.
pub const LINE_BYTES: u32 = 16;

/// Number of instruction words in one fetch line.
pub const LINE_WORDS: usize = 4;

/// Mask for extracting the byte offset within a fetch line.
pub const LINE_OFFSET_MASK: u32 = LINE_BYTES - 1;

/// Bit position of the word lane field within an address.
pub const LANE_SHIFT: u32 = 2;

/// Mask for the word lane field (bits [3:2] of an address).
pub const LANE_MASK: u32 = 0x3;
