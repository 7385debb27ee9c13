//! Diver: an xor-multiply LCG with a rotate-multiply-xorshift output mix.

use wyrd_core::snapshot::SnapshotSource;
use wyrd_core::source::{BitSource, StatefulSource};

const XOR: u64 = 0x6C8E_9CF5_7093_2BD5;
const STEP: u64 = 0xC6BC_2796_92B5_CC83;
const MIX: u64 = 0xDB4F_0B91_75AE_2165;

/// High-quality general-purpose generator with exactly 64 bits of state.
///
/// The state transition is `state = (state ^ XOR) * STEP`, an xor linear
/// congruential step (`XOR % 8 == 5`, `STEP % 8 == 3`), so every `u64` is a
/// usable state, zero included. Output is one-dimensionally equidistributed
/// over all `u64` values.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DiverSource {
    state: u64,
}

impl DiverSource {
    /// Creates a generator positioned at `state`.
    #[must_use]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }
}

impl BitSource for DiverSource {
    /// The low 32 bits of one 64-bit output.
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let word = self.next_u64() as u32;
        word
    }

    fn next_u64(&mut self) -> u64 {
        self.state = (self.state ^ XOR).wrapping_mul(STEP);
        let z = self.state.rotate_left(27).wrapping_mul(MIX);
        z ^ (z >> 25)
    }
}

impl StatefulSource for DiverSource {
    fn state(&self) -> u64 {
        self.state
    }

    fn set_state(&mut self, state: u64) {
        self.state = state;
    }

    fn fork(&self) -> Self {
        Self { state: self.state }
    }
}

impl SnapshotSource for DiverSource {
    const KIND: &'static str = "diver";

    fn from_state(state: u64) -> Self {
        Self::new(state)
    }
}

#[cfg(test)]
mod tests {
    use wyrd_core::source::{BitSource, StatefulSource};
    use wyrd_test_support::contract;

    use super::DiverSource;

    #[test]
    fn test_known_answers_from_state_42() {
        let mut source = DiverSource::new(42);
        let outputs: Vec<u64> = (0..5).map(|_| source.next_u64()).collect();
        assert_eq!(
            outputs,
            vec![
                0x4C91_561B_E97E_0A5E,
                0x8FAD_2BD6_C0BA_CC24,
                0x7815_9849_5A03_B390,
                0xF067_B8DE_9344_0FDC,
                0x252B_9391_7CF1_2B82,
            ]
        );
    }

    #[test]
    fn test_next_u32_is_low_word_of_output() {
        let mut source = DiverSource::new(42);
        assert_eq!(source.next_u32(), 0xE97E_0A5E);
        assert_eq!(source.next_u32(), 0xC0BA_CC24);
    }

    #[test]
    fn test_every_draw_advances_state() {
        let mut source = DiverSource::new(0);
        let before = source.state();
        source.next_u32();
        assert_ne!(source.state(), before);
    }

    #[test]
    fn test_satisfies_stateful_contract() {
        contract::assert_stateful_contract(&DiverSource::new(42));
        contract::assert_stateful_contract(&DiverSource::new(0));
        contract::assert_stateful_contract(&DiverSource::new(u64::MAX));
    }
}
