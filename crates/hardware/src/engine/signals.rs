//! Engine port structures: per-step inputs, decode-facing outputs, and the
//! step effects summary.
//!
//! These are the latch-like types carried across the engine boundary each
//! step. Inputs are sampled once per step; outputs are pure projections of
//! the current state.

use crate::common::addr::{InstAddr, LineAddr};
use crate::common::constants::{ISSUE_WIDTH, LINE_WORDS};

/// A fetch-memory response: one 16-byte line of four instruction words.
///
/// `line` names the request this response answers; the integrator matches
/// it against the outstanding line and silently drops mismatches (stale
/// post-redirect responses).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LineResponse {
    /// Line address this response answers.
    pub line: LineAddr,
    /// The four word lanes, in address order.
    pub data: [u32; LINE_WORDS],
}

/// Decode-side consumption acknowledgements for the two visible slots.
///
/// Only `{none, first-only, both}` are legal; asserting the second without
/// the first violates the decode contract and has no defined effect.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Consume {
    /// The instruction at logical offset 0 was consumed.
    pub first: bool,
    /// The instruction at logical offset 1 was consumed.
    pub second: bool,
}

impl Consume {
    /// Consume neither visible slot.
    pub fn none() -> Self {
        Self::default()
    }

    /// Consume only the first visible slot.
    pub fn first_only() -> Self {
        Self {
            first: true,
            second: false,
        }
    }

    /// Consume both visible slots.
    pub fn both() -> Self {
        Self {
            first: true,
            second: true,
        }
    }

    /// Number of slots consumed this step (0, 1, or 2).
    ///
    /// Second-without-first is a decode contract violation; it trips a
    /// debug assertion and consumes nothing in release builds, matching
    /// the modeled hardware where neither retirement branch fires.
    pub fn count(self) -> usize {
        debug_assert!(
            self.first || !self.second,
            "decode must not consume the second slot without the first"
        );
        match (self.first, self.second) {
            (true, true) => 2,
            (true, false) => 1,
            _ => 0,
        }
    }
}

/// All inputs sampled by the engine for one step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepInputs {
    /// Synchronous reset; restarts the window from the configured vector.
    /// Takes priority over `redirect`.
    pub reset: bool,
    /// Control-flow retarget; restarts the window from the carried address.
    pub redirect: Option<InstAddr>,
    /// Fetch-memory response arriving this step, if any.
    pub response: Option<LineResponse>,
    /// Decode consumption acknowledgements.
    pub consume: Consume,
}

/// One decode-visible instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssueSlot {
    /// Instruction address.
    pub pc: InstAddr,
    /// Instruction word; meaningful only when `ready`.
    pub inst: u32,
    /// The word has arrived from fetch memory.
    pub ready: bool,
}

/// The two decode-visible instructions, logical offsets 0 and 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IssueView {
    /// Visible slots in program order.
    pub slots: [IssueSlot; ISSUE_WIDTH],
}

/// Why the window restarted this step.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RestartCause {
    /// The reset input was asserted.
    Reset,
    /// A redirect target was applied.
    Redirect,
}

/// Which planner mode chose the next request line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlanKind {
    /// The request pointer walked forward to the earliest slot whose line
    /// has not been requested yet.
    CatchUp,
    /// All four slots were requested; the line after the window's earliest
    /// slot was requested speculatively.
    Speculative,
}

/// Summary of what one step did, consumed by the statistics layer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StepEffects {
    /// The window restarted, and why.
    pub restart: Option<RestartCause>,
    /// An arriving response did not match the outstanding line (or arrived
    /// together with a restart) and was dropped.
    pub stale_drop: bool,
    /// Number of slot words filled from an integrated response.
    pub filled_words: u32,
    /// Planner mode for the next request line (absent on restart steps).
    pub plan: Option<PlanKind>,
    /// Number of instructions retired from the window head.
    pub consumed: u32,
    /// The presented request line changed this step.
    pub new_request: bool,
}
