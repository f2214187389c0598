//! Retirement Engine Tests.
//!
//! Verifies head/PC advance for the three legal consumption patterns,
//! tail reallocation addresses, survivor data retention, wraparound, and
//! rejection of the illegal second-only pattern.

use rstest::rstest;

use crate::common::harness;

// ══════════════════════════════════════════════════════════
// 1. Consumption patterns
// ══════════════════════════════════════════════════════════

#[rstest]
#[case::none(false, false, 0x1000, 0)]
#[case::first_only(true, false, 0x1004, 1)]
#[case::both(true, true, 0x1008, 2)]
fn consumption_advances_head_and_pc(
    #[case] first: bool,
    #[case] second: bool,
    #[case] pc: u32,
    #[case] head: usize,
) {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::respond(harness::marker_response(0x1000)));

    let effects = unit.step(&harness::consume(first, second));
    assert_eq!(effects.consumed, u32::from(first) + u32::from(second));
    assert_eq!(unit.state().window.pc.val(), pc);
    assert_eq!(unit.state().window.head, head);
}

/// Both consumed: the two retiring slots become the new tail at
/// old_pc + 16 and old_pc + 20, cleared and covered by the line about to
/// be fetched.
#[test]
fn pair_consumption_reallocates_two_tail_slots() {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::respond(harness::marker_response(0x1000)));

    let _ = unit.step(&harness::consume(true, true));
    let state = unit.state();
    assert_eq!(state.window.pc.val(), 0x1008);

    let tail0 = state.window.slot_at(2);
    let tail1 = state.window.slot_at(3);
    assert_eq!(tail0.pc.val(), 0x1010);
    assert_eq!(tail1.pc.val(), 0x1014);
    assert!(!tail0.ready && !tail1.ready);
    assert!(
        tail0.requested && tail1.requested,
        "new tail lies in the speculative line being fetched"
    );
}

/// Single consumption reallocates one slot at old_pc + 16.
#[test]
fn single_consumption_reallocates_one_tail_slot() {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::respond(harness::marker_response(0x1000)));

    let _ = unit.step(&harness::consume(true, false));
    let state = unit.state();
    assert_eq!(state.window.pc.val(), 0x1004);

    let tail = state.window.slot_at(3);
    assert_eq!(tail.pc.val(), 0x1010);
    assert!(!tail.ready);
}

// ══════════════════════════════════════════════════════════
// 2. Survivors
// ══════════════════════════════════════════════════════════

/// Slots that stay in the window keep their readiness and data.
#[test]
fn surviving_slots_keep_their_data() {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::respond(harness::marker_response(0x1000)));

    let _ = unit.step(&harness::consume(true, true));
    let state = unit.state();
    for (offset, pc) in [(0usize, 0x1008u32), (1, 0x100C)] {
        let slot = state.window.slot_at(offset);
        assert_eq!(slot.pc.val(), pc);
        assert!(slot.ready, "survivor at offset {offset} stays ready");
        assert_eq!(slot.data, harness::marker_word(pc));
    }
}

// ══════════════════════════════════════════════════════════
// 3. Wraparound
// ══════════════════════════════════════════════════════════

/// Two pair-consumptions wrap the head back to 0 with a contiguous
/// window.
#[test]
fn head_wraps_around_the_arena() {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::respond(harness::marker_response(0x1000)));
    let _ = unit.step(&harness::consume(true, true));
    let _ = unit.step(&harness::consume(true, true));

    let state = unit.state();
    assert_eq!(state.window.head, 0);
    assert_eq!(state.window.pc.val(), 0x1010);
    for (offset, pc) in [(0usize, 0x1010u32), (1, 0x1014), (2, 0x1018), (3, 0x101C)] {
        assert_eq!(state.window.slot_at(offset).pc.val(), pc);
    }
}

// ══════════════════════════════════════════════════════════
// 4. Illegal pattern
// ══════════════════════════════════════════════════════════

/// Second-without-first violates the decode contract.
#[test]
#[should_panic(expected = "decode must not consume the second slot without the first")]
fn second_only_consumption_is_rejected() {
    let mut unit = harness::unit_at(0x1000);
    let _ = unit.step(&harness::consume(false, true));
}
