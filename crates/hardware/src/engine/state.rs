//! Slot store: the four-slot window and its head/PC bookkeeping.
//!
//! The window is a fixed arena of [`SLOT_COUNT`] slots addressed modulo
//! four via the head index. At every step the slots at logical offsets
//! 0..3 hold the four consecutive word addresses `pc`, `pc+4`, `pc+8`,
//! `pc+12`; the two decode-visible slots are offsets 0 and 1.

use crate::common::addr::{InstAddr, LineAddr};
use crate::common::constants::SLOT_COUNT;

/// One buffered instruction slot.
///
/// A slot moves through three implicit states: unrequested, then
/// requested-pending once the planner selects its line, then filled once
/// the response arrives. Retirement destroys it by overwriting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Slot {
    /// Instruction word address this slot represents.
    pub pc: InstAddr,
    /// Instruction word, valid only when `ready`.
    pub data: u32,
    /// Data has arrived from fetch memory.
    pub ready: bool,
    /// A fetch request covering this slot's line has been issued.
    ///
    /// Used only by the planner; independent of `ready`.
    pub requested: bool,
}

impl Slot {
    /// Creates a freshly-allocated slot for `pc` with cleared flags.
    pub fn fresh(pc: InstAddr) -> Self {
        Self {
            pc,
            data: 0,
            ready: false,
            requested: false,
        }
    }
}

/// The four-slot window, its head index, and the canonical PC.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchWindow {
    /// The slot arena, addressed modulo [`SLOT_COUNT`] via `head`.
    pub slots: [Slot; SLOT_COUNT],
    /// Physical index of the slot at logical offset 0.
    pub head: usize,
    /// Canonical PC: always equal to `slot_at(0).pc`.
    pub pc: InstAddr,
}

impl FetchWindow {
    /// Returns the slot at the given logical offset (0-3) from the head.
    #[inline]
    pub fn slot_at(&self, offset: usize) -> &Slot {
        &self.slots[(self.head + offset) % SLOT_COUNT]
    }
}

/// Complete engine state, advanced wholesale once per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EngineState {
    /// The slot store.
    pub window: FetchWindow,
    /// The line currently presented to fetch memory. Re-evaluated every
    /// step by the planner.
    pub request: LineAddr,
    /// The line presented one step earlier; an arriving response is
    /// matched against this, modeling the one-step round trip.
    pub outstanding: LineAddr,
}
