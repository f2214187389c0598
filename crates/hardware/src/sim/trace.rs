//! Per-step window dump rendering.
//!
//! The engine core exposes its state read-only; this collaborator turns a
//! snapshot into the one-line dump emitted through `tracing`. Slot flags
//! read `q` for requested and `r` for ready.

use crate::common::constants::SLOT_COUNT;
use crate::engine::state::EngineState;

/// Renders one engine state as a single trace line.
pub fn render(state: &EngineState) -> String {
    let window = &state.window;
    let mut out = format!(
        "pc={:08x} head={} req={:08x} out={:08x} |",
        window.pc.val(),
        window.head,
        state.request.val(),
        state.outstanding.val()
    );
    for offset in 0..SLOT_COUNT {
        let slot = window.slot_at(offset);
        out.push_str(&format!(
            " [{:08x} {}{} {:08x}]",
            slot.pc.val(),
            if slot.requested { 'q' } else { '-' },
            if slot.ready { 'r' } else { '-' },
            slot.data
        ));
    }
    out
}
