//! Simulator: owns the prefetch unit and a fetch memory side-by-side.
//!
//! Models the external world of the engine for one step at a time:
//! 1. **Request/response latency:** The line presented during a step is
//!    sampled here and delivered as the next step's response input, one
//!    request outstanding at a time.
//! 2. **Decode side:** A consumption policy reads the issue view and
//!    asserts the consumption acknowledgements.
//! 3. **Control flow:** Reset and redirect requests are latched and
//!    applied as inputs on the following step.

use crate::common::addr::InstAddr;
use crate::config::Config;
use crate::engine::signals::{Consume, IssueView, LineResponse, StepEffects, StepInputs};
use crate::engine::PrefetchUnit;
use crate::stats::FetchStats;

use super::memory::FetchMemory;
use super::trace;

/// Decode-side consumption policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConsumePolicy {
    /// Consume everything ready, up to two per step.
    #[default]
    Greedy,
    /// Consume at most one ready instruction per step.
    SingleIssue,
    /// Never consume; decode is stalled.
    Stalled,
}

impl ConsumePolicy {
    /// Decides this step's acknowledgements from the issue view.
    ///
    /// Never asserts the second slot without the first.
    fn decide(self, issue: &IssueView) -> Consume {
        let first = issue.slots[0].ready;
        match self {
            Self::Greedy => Consume {
                first,
                second: first && issue.slots[1].ready,
            },
            Self::SingleIssue => Consume {
                first,
                second: false,
            },
            Self::Stalled => Consume::none(),
        }
    }
}

/// One instruction delivered to decode, in program order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Issued {
    /// Instruction address.
    pub pc: InstAddr,
    /// Instruction word.
    pub inst: u32,
}

/// Top-level simulator: prefetch unit + fetch memory + decode model.
pub struct Simulator {
    unit: PrefetchUnit,
    memory: Box<dyn FetchMemory>,
    policy: ConsumePolicy,
    pending: Option<LineResponse>,
    reset_pending: bool,
    redirect_pending: Option<InstAddr>,
    issued: Vec<Issued>,
    trace: bool,
}

impl std::fmt::Debug for Simulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Simulator")
            .field("unit", &self.unit)
            .field("policy", &self.policy)
            .field("pending", &self.pending)
            .field("issued", &self.issued.len())
            .finish_non_exhaustive()
    }
}

impl Simulator {
    /// Creates a simulator with the given configuration and fetch memory.
    pub fn new(config: &Config, memory: Box<dyn FetchMemory>) -> Self {
        Self {
            unit: PrefetchUnit::new(config),
            memory,
            policy: ConsumePolicy::default(),
            pending: None,
            reset_pending: false,
            redirect_pending: None,
            issued: Vec::new(),
            trace: config.general.trace_window,
        }
    }

    /// Replaces the decode consumption policy.
    pub fn with_policy(mut self, policy: ConsumePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// The prefetch unit under simulation.
    pub fn unit(&self) -> &PrefetchUnit {
        &self.unit
    }

    /// Instructions delivered to decode so far, in program order.
    pub fn issued(&self) -> &[Issued] {
        &self.issued
    }

    /// Statistics accumulated by the unit.
    pub fn stats(&self) -> &FetchStats {
        self.unit.stats()
    }

    /// Latches a reset for the next step.
    pub fn schedule_reset(&mut self) {
        self.reset_pending = true;
    }

    /// Latches a redirect target for the next step.
    pub fn schedule_redirect(&mut self, target: InstAddr) {
        self.redirect_pending = Some(target);
    }

    /// Advances the whole model by one step.
    ///
    /// The response delivered here was sampled from the request presented
    /// during the previous step; the request presented during this step is
    /// sampled before the state advances, so its data arrives next step.
    /// A pending restart squashes decode for the step, mirroring the
    /// pipeline flush that accompanies it.
    pub fn step(&mut self) -> StepEffects {
        let restarting = self.reset_pending || self.redirect_pending.is_some();
        let consume = if restarting {
            Consume::none()
        } else {
            self.policy.decide(&self.unit.issue())
        };

        let view = self.unit.issue();
        if consume.first {
            self.issued.push(Issued {
                pc: view.slots[0].pc,
                inst: view.slots[0].inst,
            });
        }
        if consume.second {
            self.issued.push(Issued {
                pc: view.slots[1].pc,
                inst: view.slots[1].inst,
            });
        }

        let arriving = self.pending.take();
        self.pending = self.memory.fetch_line(self.unit.request());

        let inputs = StepInputs {
            reset: std::mem::take(&mut self.reset_pending),
            redirect: self.redirect_pending.take(),
            response: arriving,
            consume,
        };
        let effects = self.unit.step(&inputs);

        if self.trace || cfg!(feature = "always-trace") {
            tracing::trace!(target: "pfsim::window", "{}", trace::render(self.unit.state()));
        }
        effects
    }

    /// Runs the model for `steps` steps.
    pub fn run(&mut self, steps: u64) {
        for _ in 0..steps {
            let _ = self.step();
        }
    }
}
