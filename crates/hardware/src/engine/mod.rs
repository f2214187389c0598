//! The prefetch window engine.
//!
//! A two-wide instruction prefetch unit that decouples fetch-memory
//! latency from decode consumption. It maintains a four-slot in-order
//! window of instruction addresses, computes the next aligned line to
//! request every step, integrates arriving lines, and walks the window
//! forward as decode consumes instructions. Five cooperating rules share
//! one state store:
//! 1. **Slot Store:** the window, head index, and canonical PC
//!    ([`state`]).
//! 2. **Reset/Redirect:** atomic restart on any control-flow change
//!    ([`reset`]).
//! 3. **Fill Integrator:** response matching and slot fill ([`fill`]).
//! 4. **Window Planner:** next-request selection ([`planner`]).
//! 5. **Retirement:** head advance and tail reallocation ([`retire`]).
//!
//! All transitions use classic synchronous-update semantics: the whole
//! state advances through one pure [`next_state`] function per step,
//! computed from the previous step's snapshot. No rule ever observes a
//! partially-updated state.

use crate::common::addr::{InstAddr, LineAddr};
use crate::common::constants::ISSUE_WIDTH;
use crate::config::Config;
use crate::stats::FetchStats;

/// Fill integrator.
pub mod fill;
/// Window planner.
pub mod planner;
/// Reset/redirect handler.
pub mod reset;
/// Retirement engine.
pub mod retire;
/// Port structures (inputs, outputs, effects).
pub mod signals;
/// Slot store and engine state.
pub mod state;

pub use self::signals::{
    Consume, IssueSlot, IssueView, LineResponse, PlanKind, RestartCause, StepEffects, StepInputs,
};
pub use self::state::{EngineState, FetchWindow, Slot};

use self::fill::FillOutcome;

/// Computes the successor state for one step.
///
/// Pure: reads only the previous snapshot and the sampled inputs, and
/// returns the complete next state together with a summary of what
/// happened. Reset takes priority over redirect; either discards the
/// previous window and any in-flight response wholesale. On ordinary
/// steps the order of effects is fill, plan (from the pre-retirement
/// window), retire, then requested-marking against the planned line.
pub fn next_state(
    prev: &EngineState,
    inputs: &StepInputs,
    reset_vector: InstAddr,
) -> (EngineState, StepEffects) {
    let mut effects = StepEffects::default();

    if let Some((base, cause)) = restart_base(inputs, reset_vector) {
        effects.restart = Some(cause);
        effects.stale_drop = inputs.response.is_some();
        effects.new_request = true;
        return (reset::restart(base), effects);
    }

    let mut window = prev.window;

    if let Some(response) = &inputs.response {
        match fill::integrate(&mut window, prev.outstanding, response) {
            FillOutcome::Filled(words) => effects.filled_words = words,
            FillOutcome::Stale => effects.stale_drop = true,
        }
    }

    let plan = planner::plan(&prev.window);
    effects.plan = Some(plan.kind);

    effects.consumed = retire::advance(&mut window, inputs.consume);
    mark_requested(&mut window, plan.line);

    effects.new_request = plan.line != prev.request;
    let next = EngineState {
        window,
        request: plan.line,
        outstanding: prev.request,
    };
    (next, effects)
}

/// Resolves the restart base address, honoring reset-over-redirect
/// priority.
fn restart_base(inputs: &StepInputs, reset_vector: InstAddr) -> Option<(InstAddr, RestartCause)> {
    if inputs.reset {
        Some((reset_vector, RestartCause::Reset))
    } else {
        inputs
            .redirect
            .map(|target| (target, RestartCause::Redirect))
    }
}

/// Marks every still-unrequested slot whose address falls in `line`.
///
/// Monotonic: flags are only raised here; they clear only through
/// reallocation or restart.
fn mark_requested(window: &mut FetchWindow, line: LineAddr) {
    for slot in &mut window.slots {
        if !slot.requested && line.contains(slot.pc) {
            slot.requested = true;
        }
    }
}

/// The prefetch window engine: state, reset vector, and statistics.
///
/// Construction performs the initial reset, so a fresh unit already
/// presents the line containing the reset vector.
#[derive(Debug, Clone)]
pub struct PrefetchUnit {
    state: EngineState,
    reset_vector: InstAddr,
    stats: FetchStats,
}

impl PrefetchUnit {
    /// Creates a unit reset to the configured vector.
    pub fn new(config: &Config) -> Self {
        let reset_vector = InstAddr::new(config.general.reset_vector);
        Self {
            state: reset::restart(reset_vector),
            reset_vector,
            stats: FetchStats::default(),
        }
    }

    /// Advances the engine by one step with the sampled inputs.
    pub fn step(&mut self, inputs: &StepInputs) -> StepEffects {
        let (next, effects) = next_state(&self.state, inputs, self.reset_vector);
        self.state = next;
        self.stats.record(&effects);
        effects
    }

    /// The line currently presented to fetch memory. Always 16-byte
    /// aligned; at most one new value appears per step.
    pub fn request(&self) -> LineAddr {
        self.state.request
    }

    /// The two decode-visible instructions with their readiness flags.
    pub fn issue(&self) -> IssueView {
        let mut slots = [IssueSlot {
            pc: self.state.window.pc,
            inst: 0,
            ready: false,
        }; ISSUE_WIDTH];
        for (offset, out) in slots.iter_mut().enumerate() {
            let slot = self.state.window.slot_at(offset);
            *out = IssueSlot {
                pc: slot.pc,
                inst: slot.data,
                ready: slot.ready,
            };
        }
        IssueView { slots }
    }

    /// Read-only projection of the complete engine state, for
    /// observability collaborators.
    pub fn state(&self) -> &EngineState {
        &self.state
    }

    /// Statistics accumulated so far.
    pub fn stats(&self) -> &FetchStats {
        &self.stats
    }

    /// The configured reset vector.
    pub fn reset_vector(&self) -> InstAddr {
        self.reset_vector
    }
}
