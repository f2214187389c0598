//! Fill integrator: writes an arriving fetch line into pending slots.

use crate::common::addr::LineAddr;

use super::signals::LineResponse;
use super::state::FetchWindow;

/// Outcome of integrating one response.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FillOutcome {
    /// The response matched the outstanding line; this many slot words
    /// were filled (possibly zero if every covered slot was already ready
    /// or no slot lies in the line).
    Filled(u32),
    /// The response was for a different line and was dropped.
    Stale,
}

/// Integrates `response` into the window if it answers `outstanding`.
///
/// Every non-ready slot whose address lies in the line takes its word from
/// the lane selected by address bits [3:2]. Slots that are already ready
/// are left untouched, which makes re-delivery of the same line a no-op.
pub fn integrate(
    window: &mut FetchWindow,
    outstanding: LineAddr,
    response: &LineResponse,
) -> FillOutcome {
    if response.line != outstanding {
        return FillOutcome::Stale;
    }
    let mut filled = 0;
    for slot in &mut window.slots {
        if !slot.ready && outstanding.contains(slot.pc) {
            slot.data = response.data[slot.pc.lane()];
            slot.ready = true;
            filled += 1;
        }
    }
    FillOutcome::Filled(filled)
}
