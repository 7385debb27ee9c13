//! Linnorm: a plain LCG stepped state with a strong output mix.

use wyrd_core::snapshot::SnapshotSource;
use wyrd_core::source::{BitSource, StatefulSource};

const MULTIPLIER: u64 = 0x369D_EA0F_31A5_3F85;
const MIX: u64 = 0xAEF1_7502_108E_F2D9;

/// 64-bit-state generator: `state = state * MULTIPLIER + 1`, then a
/// double-xorshift multiply mix. Period 2^64, every state valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LinnormSource {
    state: u64,
}

impl LinnormSource {
    /// Creates a generator positioned at `state`.
    #[must_use]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }
}

impl BitSource for LinnormSource {
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let word = self.next_u64() as u32;
        word
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(1);
        let z = (self.state ^ (self.state >> 23) ^ (self.state >> 47)).wrapping_mul(MIX);
        z ^ (z >> 25)
    }
}

impl StatefulSource for LinnormSource {
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

impl SnapshotSource for LinnormSource {
    const KIND: &'static str = "linnorm";

    fn from_state(state: u64) -> Self {
        Self::new(state)
    }
}
