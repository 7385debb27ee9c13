//! Raw 64-bit LCG, kept for comparison and retro-style output.

use wyrd_core::flaw::Flawed;
use wyrd_core::snapshot::SnapshotSource;
use wyrd_core::source::{BitSource, StatefulSource};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// A linear congruential generator that returns its state unmixed.
///
/// Deliberately weak: [`next_u32`](BitSource::next_u32) hands out the LOW
/// state bits, so bit 0 alternates on every call and bit `k` repeats with
/// period `2^(k+1)`. Use it where that texture is wanted, never as a quality
/// baseline.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Lcg64Source {
    state: u64,
}

impl Lcg64Source {
    /// Creates a generator positioned at `state`.
    #[must_use]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }
}

impl BitSource for Lcg64Source {
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let word = self.next_u64() as u32;
        word
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_mul(MULTIPLIER).wrapping_add(INCREMENT);
        self.state
    }
}

impl Flawed for Lcg64Source {}

impl StatefulSource for Lcg64Source {
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

impl SnapshotSource for Lcg64Source {
    const KIND: &'static str = "lcg64";

    fn from_state(state: u64) -> Self {
        Self::new(state)
    }
}
