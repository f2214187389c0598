//! Window planner: picks the next line to request from fetch memory.
//!
//! A pure function of the pre-retirement window. It scans slots in logical
//! order and stops at the first slot whose line has not been requested;
//! that slot's line becomes the next request. The scan is a genuine
//! short-circuiting prefix walk: a later requested slot behind an earlier
//! gap does not count. When no gap exists the planner runs ahead of
//! consumption and requests the line after the window's earliest slot.

use crate::common::addr::LineAddr;
use crate::common::constants::{LINE_BYTES, SLOT_COUNT};

use super::signals::PlanKind;
use super::state::FetchWindow;

/// The planner's choice for the next request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Plan {
    /// Line to present to fetch memory next step.
    pub line: LineAddr,
    /// Which mode chose it.
    pub kind: PlanKind,
}

/// Computes the next request line from the current window.
pub fn plan(window: &FetchWindow) -> Plan {
    let mut requested_prefix = 0;
    while requested_prefix < SLOT_COUNT && window.slot_at(requested_prefix).requested {
        requested_prefix += 1;
    }

    if requested_prefix < SLOT_COUNT {
        Plan {
            line: window.slot_at(requested_prefix).pc.line(),
            kind: PlanKind::CatchUp,
        }
    } else {
        Plan {
            line: window.slot_at(0).pc.offset(LINE_BYTES).line(),
            kind: PlanKind::Speculative,
        }
    }
}
