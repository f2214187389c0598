//! Reset/redirect handler: atomic window re-creation from a base address.

use crate::common::addr::InstAddr;
use crate::common::constants::{SLOT_COUNT, WORD_BYTES};

use super::state::{EngineState, FetchWindow, Slot};

/// Builds a fresh engine state with the window starting at `base`.
///
/// The presented request becomes the line containing `base`; slots whose
/// address already lies inside that line are pre-marked `requested`, since
/// the response now in flight will cover them. The outstanding line is set
/// to the same value so that response matches when it arrives; anything
/// in flight for the old stream no longer matches and is dropped.
pub fn restart(base: InstAddr) -> EngineState {
    let line = base.line();
    let mut slots = [Slot::fresh(base); SLOT_COUNT];
    for (i, slot) in slots.iter_mut().enumerate() {
        let pc = base.offset(i as u32 * WORD_BYTES);
        *slot = Slot::fresh(pc);
        slot.requested = line.contains(pc);
    }
    EngineState {
        window: FetchWindow {
            slots,
            head: 0,
            pc: base,
        },
        request: line,
        outstanding: line,
    }
}
