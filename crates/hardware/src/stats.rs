//! Fetch and issue statistics collection and reporting.
//!
//! This module tracks per-run metrics for the prefetch engine. It
//! provides:
//! 1. **Step counts:** Total steps, resets, redirects.
//! 2. **Request stream:** New lines presented, planner mode breakdown.
//! 3. **Fill stream:** Lines and words integrated, stale drops.
//! 4. **Issue stream:** Instructions delivered to decode, pair/single mix.

use std::time::Instant;

use serde::Serialize;

use crate::engine::signals::{PlanKind, RestartCause, StepEffects};

/// Statistics accumulated over a simulation run.
#[derive(Debug, Clone, Serialize)]
pub struct FetchStats {
    #[serde(skip_serializing)]
    start_time: Instant,
    /// Total engine steps.
    pub steps: u64,
    /// Window restarts caused by reset.
    pub resets: u64,
    /// Window restarts caused by redirect.
    pub redirects: u64,
    /// Steps on which a new request line was presented.
    pub lines_requested: u64,
    /// Steps planned in catch-up mode (walking to the first gap).
    pub plans_catch_up: u64,
    /// Steps planned in speculative mode (all four slots requested).
    pub plans_speculative: u64,
    /// Responses that filled at least one slot word.
    pub lines_filled: u64,
    /// Slot words filled from responses.
    pub words_filled: u64,
    /// Responses dropped as stale (address mismatch or restart).
    pub stale_responses: u64,
    /// Instructions retired from the window head.
    pub instructions_issued: u64,
    /// Steps on which decode consumed both visible slots.
    pub issue_pairs: u64,
    /// Steps on which decode consumed only the first visible slot.
    pub issue_singles: u64,
}

impl Default for FetchStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            steps: 0,
            resets: 0,
            redirects: 0,
            lines_requested: 0,
            plans_catch_up: 0,
            plans_speculative: 0,
            lines_filled: 0,
            words_filled: 0,
            stale_responses: 0,
            instructions_issued: 0,
            issue_pairs: 0,
            issue_singles: 0,
        }
    }
}

impl FetchStats {
    /// Folds one step's effects into the counters.
    pub fn record(&mut self, effects: &StepEffects) {
        self.steps += 1;
        match effects.restart {
            Some(RestartCause::Reset) => self.resets += 1,
            Some(RestartCause::Redirect) => self.redirects += 1,
            None => {}
        }
        if effects.new_request {
            self.lines_requested += 1;
        }
        match effects.plan {
            Some(PlanKind::CatchUp) => self.plans_catch_up += 1,
            Some(PlanKind::Speculative) => self.plans_speculative += 1,
            None => {}
        }
        if effects.stale_drop {
            self.stale_responses += 1;
        }
        if effects.filled_words > 0 {
            self.lines_filled += 1;
            self.words_filled += u64::from(effects.filled_words);
        }
        self.instructions_issued += u64::from(effects.consumed);
        match effects.consumed {
            2 => self.issue_pairs += 1,
            1 => self.issue_singles += 1,
            _ => {}
        }
    }

    /// Prints the text report to stdout.
    pub fn print(&self) {
        let seconds = self.start_time.elapsed().as_secs_f64();
        let steps = if self.steps == 0 { 1 } else { self.steps };
        let issue_rate = self.instructions_issued as f64 / steps as f64;

        println!("\n==========================================================");
        println!("PREFETCH WINDOW SIMULATION STATISTICS");
        println!("==========================================================");
        println!("host_seconds             {:.4} s", seconds);
        println!("sim_steps                {}", self.steps);
        println!("sim_insts                {}", self.instructions_issued);
        println!("sim_issue_rate           {:.4} inst/step", issue_rate);
        println!("----------------------------------------------------------");
        println!("FETCH STREAM");
        println!("  fetch.lines_requested  {}", self.lines_requested);
        println!("  fetch.plans_catch_up   {}", self.plans_catch_up);
        println!("  fetch.plans_spec       {}", self.plans_speculative);
        println!("  fetch.lines_filled     {}", self.lines_filled);
        println!("  fetch.words_filled     {}", self.words_filled);
        println!("  fetch.stale_dropped    {}", self.stale_responses);
        println!("----------------------------------------------------------");
        println!("ISSUE STREAM");
        println!("  issue.pairs            {}", self.issue_pairs);
        println!("  issue.singles          {}", self.issue_singles);
        println!("----------------------------------------------------------");
        println!("CONTROL FLOW");
        println!("  flow.resets            {}", self.resets);
        println!("  flow.redirects         {}", self.redirects);
        println!("==========================================================");
    }
}
