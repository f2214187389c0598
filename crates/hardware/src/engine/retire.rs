//! Retirement engine: advances the head as decode consumes instructions.
//!
//! Consumed slots fall off the head and are immediately reallocated as the
//! new tail, keeping the window four consecutive words starting at the
//! canonical PC. Reallocated slots start with cleared flags; the planner's
//! requested-marking pass runs afterwards and may mark them in the same
//! step when they land in the line about to be fetched.

use crate::common::constants::{SLOT_COUNT, WORD_BYTES};

use super::signals::Consume;
use super::state::{FetchWindow, Slot};

/// Applies decode consumption to the window, returning how many slots
/// retired (0, 1, or 2).
pub fn advance(window: &mut FetchWindow, consume: Consume) -> u32 {
    let shift = consume.count();
    let old_head = window.head;
    let old_pc = window.pc;

    // The k-th retiring slot becomes the new tail entry at old_pc + 16 + 4k.
    for k in 0..shift {
        let idx = (old_head + k) % SLOT_COUNT;
        window.slots[idx] = Slot::fresh(old_pc.offset((SLOT_COUNT + k) as u32 * WORD_BYTES));
    }

    window.head = (old_head + shift) % SLOT_COUNT;
    window.pc = old_pc.offset(shift as u32 * WORD_BYTES);
    shift as u32
}
