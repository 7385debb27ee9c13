//! Contract conformance checks usable against any source implementation.
//!
//! Every check panics with a descriptive message on the first violation, so
//! they can be called directly from `#[test]` functions.

use wyrd_core::source::{BitSource, MAX_BITS, StatefulSource};

/// Number of draws compared by the sequence-equality checks.
const RUN: usize = 64;

/// States every stateful source must accept, zero included.
const EDGE_STATES: [u64; 6] = [0, 1, 42, 0x8000_0000_0000_0000, u64::MAX - 1, u64::MAX];

/// Draws a mixed, fixed pattern of calls so divergence in any method shows.
fn draw_pattern<S: BitSource>(source: &mut S) -> Vec<u64> {
    (0..RUN)
        .map(|i| match i % 3 {
            0 => u64::from(source.next_u32()),
            1 => source.next_u64(),
            _ => {
                #[allow(clippy::cast_possible_truncation)]
                let bits = (i % MAX_BITS as usize) as u32 + 1;
                u64::from(source.next_bits(bits).expect("bits within 1..=32"))
            }
        })
        .collect()
}

/// Checks that `next_bits(b)` stays below `2^b` for every width in `1..=32`.
///
/// # Panics
///
/// Panics if any draw has a bit set at or above position `b`.
pub fn assert_bit_widths<S: BitSource + ?Sized>(source: &mut S, draws_per_width: usize) {
    for bits in 1..=MAX_BITS {
        for _ in 0..draws_per_width {
            let value = source.next_bits(bits).expect("bits within 1..=32");
            assert!(
                u64::from(value) < 1_u64 << bits,
                "next_bits({bits}) returned {value:#x}"
            );
        }
    }
}

/// Runs every stateful-source check against forks of `source`. The source
/// itself is never advanced.
///
/// # Panics
///
/// Panics on the first contract violation.
pub fn assert_stateful_contract<S: StatefulSource>(source: &S) {
    assert_state_does_not_advance(source);
    assert_state_round_trip(source);
    assert_set_state_is_reproducible(source);
    assert_fork_replays(source);
    assert_fork_independent(source);
    assert_every_draw_advances(source);
    assert_bit_widths(&mut source.fork(), 16);
}

/// `state()` is a pure read.
///
/// # Panics
///
/// Panics if reading the state changes it or the stream.
pub fn assert_state_does_not_advance<S: StatefulSource>(source: &S) {
    let mut probe = source.fork();
    let mut reference = source.fork();
    let first = probe.state();
    assert_eq!(probe.state(), first, "state() changed the state");
    assert_eq!(
        draw_pattern(&mut probe),
        draw_pattern(&mut reference),
        "state() advanced the stream"
    );
}

/// `set_state(s)` then `state()` yields `s`, and `set_state(state())` is a
/// no-op on future output.
///
/// # Panics
///
/// Panics if either property fails for any edge-case state.
pub fn assert_state_round_trip<S: StatefulSource>(source: &S) {
    let mut probe = source.fork();
    for state in EDGE_STATES {
        probe.set_state(state);
        assert_eq!(probe.state(), state, "set_state({state:#x}) did not stick");
    }

    let mut probe = source.fork();
    let mut reference = source.fork();
    let current = probe.state();
    probe.set_state(current);
    assert_eq!(
        draw_pattern(&mut probe),
        draw_pattern(&mut reference),
        "set_state(state()) changed future output"
    );
}

/// Two instances given the same state produce identical streams, whatever
/// they did before.
///
/// # Panics
///
/// Panics if the two streams diverge.
pub fn assert_set_state_is_reproducible<S: StatefulSource>(source: &S) {
    for state in EDGE_STATES {
        let mut a = source.fork();
        let mut b = source.fork();
        b.next_u64();
        b.next_u32();
        a.set_state(state);
        b.set_state(state);
        assert_eq!(
            draw_pattern(&mut a),
            draw_pattern(&mut b),
            "streams diverged after set_state({state:#x})"
        );
    }
}

/// A fork replays exactly what the original produces from the fork point.
///
/// # Panics
///
/// Panics if the fork's output differs from the original's.
pub fn assert_fork_replays<S: StatefulSource>(source: &S) {
    let mut original = source.fork();
    original.next_u32();
    let mut copy = original.fork();
    assert_eq!(copy.state(), original.state(), "fork did not copy state");
    assert_eq!(
        draw_pattern(&mut original),
        draw_pattern(&mut copy),
        "fork diverged from original"
    );
}

/// Advancing or re-seeding one side of a fork never affects the other.
///
/// # Panics
///
/// Panics if mutating the original changes the fork's stream, or vice versa.
pub fn assert_fork_independent<S: StatefulSource>(source: &S) {
    let mut original = source.fork();
    let mut copy = original.fork();
    let mut reference = original.fork();

    draw_pattern(&mut original);
    original.set_state(!original.state());
    assert_eq!(
        draw_pattern(&mut copy),
        draw_pattern(&mut reference),
        "mutating the original changed the fork"
    );

    let mut original = source.fork();
    let mut copy = original.fork();
    let mut reference = original.fork();
    draw_pattern(&mut copy);
    assert_eq!(
        draw_pattern(&mut original),
        draw_pattern(&mut reference),
        "mutating the fork changed the original"
    );
}

/// No draw leaves the state where it was; a stuck state would repeat forever.
///
/// # Panics
///
/// Panics if any of `next_u32`, `next_u64` or `next_bits` leaves the state
/// unchanged.
pub fn assert_every_draw_advances<S: StatefulSource>(source: &S) {
    let mut probe = source.fork();
    for _ in 0..RUN {
        let before = probe.state();
        probe.next_u32();
        assert_ne!(probe.state(), before, "next_u32 did not advance");

        let before = probe.state();
        probe.next_u64();
        assert_ne!(probe.state(), before, "next_u64 did not advance");

        let before = probe.state();
        probe.next_bits(1).expect("1 is a valid bit count");
        assert_ne!(probe.state(), before, "next_bits did not advance");
    }
}
