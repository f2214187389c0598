//! Step Driver Tests.
//!
//! End-to-end runs of the engine against a backing fetch memory:
//! one-step request/response latency, greedy and single-issue decode,
//! redirect mid-stream, withheld responses, and request accounting.

use pfsim_core::common::addr::InstAddr;
use pfsim_core::config::Config;
use pfsim_core::sim::{ConsumePolicy, Simulator};

use crate::common::harness;
use crate::common::mocks::memory::{RecordingMemory, SilentMemory};

// ══════════════════════════════════════════════════════════
// 1. Greedy drain
// ══════════════════════════════════════════════════════════

/// Twelve steps drain sixteen instructions in program order: two warmup
/// steps, then pairs with one bubble each time the window crosses into a
/// line whose data is still in flight.
#[test]
fn greedy_decode_drains_in_program_order() {
    let memory = harness::marker_memory(0x1000, 32);
    let mut sim = harness::sim_at(0x1000, memory);
    sim.run(12);

    let issued = sim.issued();
    assert_eq!(issued.len(), 16);
    for (i, inst) in issued.iter().enumerate() {
        let pc = 0x1000 + 4 * i as u32;
        assert_eq!(inst.pc.val(), pc, "program order at index {i}");
        assert_eq!(inst.inst, harness::marker_word(pc), "payload at index {i}");
    }

    let stats = sim.stats();
    assert_eq!(stats.steps, 12);
    assert_eq!(stats.instructions_issued, 16);
    assert_eq!(stats.issue_pairs, 8);
    assert_eq!(stats.issue_singles, 0);
    assert_eq!(stats.resets, 0);
    assert_eq!(stats.redirects, 0);
}

// ══════════════════════════════════════════════════════════
// 2. Redirect mid-stream
// ══════════════════════════════════════════════════════════

/// A redirect abandons the old stream cleanly: the stale in-flight line
/// is dropped and the issued stream continues at the target with the
/// target's data.
#[test]
fn redirect_switches_streams_without_stale_data() {
    let mut memory = harness::marker_memory(0x1000, 32);
    for i in 0..32u32 {
        let addr = 0x2000 + 4 * i;
        memory
            .write_word(InstAddr::new(addr), harness::marker_word(addr))
            .unwrap();
    }
    let mut sim = harness::sim_at(0x1000, memory);

    sim.run(4);
    assert_eq!(sim.issued().len(), 4, "two warmup steps, then two pairs");

    sim.schedule_redirect(InstAddr::new(0x2000));
    sim.run(10);

    let issued = sim.issued();
    assert_eq!(issued.len(), 16);
    for (i, inst) in issued[..4].iter().enumerate() {
        assert_eq!(inst.pc.val(), 0x1000 + 4 * i as u32);
    }
    assert_eq!(issued[4].pc.val(), 0x2000, "stream resumes at the target");
    for pair in issued[4..].windows(2) {
        assert_eq!(pair[1].pc.val(), pair[0].pc.val() + 4, "contiguous after redirect");
    }
    for inst in issued {
        assert_eq!(inst.inst, harness::marker_word(inst.pc.val()), "no stale payloads");
    }

    let stats = sim.stats();
    assert_eq!(stats.redirects, 1);
    assert!(stats.stale_responses >= 1, "the old in-flight line was dropped");
}

// ══════════════════════════════════════════════════════════
// 3. Withheld responses
// ══════════════════════════════════════════════════════════

/// A fetch side that never answers stalls every slot forever; nothing is
/// issued and nothing fills.
#[test]
fn withheld_responses_stall_the_window() {
    harness::init_tracing();
    let mut config = Config::default();
    config.general.reset_vector = 0x1000;
    let mut sim = Simulator::new(&config, Box::new(SilentMemory));

    sim.run(10);
    assert!(sim.issued().is_empty());
    assert_eq!(sim.stats().words_filled, 0);
    assert_eq!(sim.stats().steps, 10);
}

// ══════════════════════════════════════════════════════════
// 4. Request accounting
// ══════════════════════════════════════════════════════════

/// Exactly one line address is presented per step, starting with the
/// vector line.
#[test]
fn one_request_is_presented_per_step() {
    harness::init_tracing();
    let recording = RecordingMemory::new(harness::marker_memory(0x1000, 32));
    let requests = recording.requests_handle();

    let mut config = Config::default();
    config.general.reset_vector = 0x1000;
    let mut sim = Simulator::new(&config, Box::new(recording));
    sim.run(6);

    let log = requests.lock().unwrap();
    assert_eq!(log.len(), 6, "one sampled request per step");
    assert_eq!(log[0].val(), 0x1000, "first request is the vector line");
    for line in log.iter() {
        assert_eq!(line.val() % 16, 0);
    }
}

// ══════════════════════════════════════════════════════════
// 5. Single-issue decode
// ══════════════════════════════════════════════════════════

/// A single-issue decode consumes at most one instruction per step, in
/// order.
#[test]
fn single_issue_decode_consumes_one_per_step() {
    let memory = harness::marker_memory(0x1000, 32);
    let mut sim = harness::sim_at(0x1000, memory).with_policy(ConsumePolicy::SingleIssue);
    sim.run(12);

    let issued = sim.issued();
    assert!(!issued.is_empty());
    for (i, inst) in issued.iter().enumerate() {
        assert_eq!(inst.pc.val(), 0x1000 + 4 * i as u32);
    }

    let stats = sim.stats();
    assert_eq!(stats.issue_pairs, 0);
    assert_eq!(stats.issue_singles, issued.len() as u64);
}
