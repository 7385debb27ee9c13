//! ThrustAlt: a Weyl counter with a multiply-xorshift output, able to skip.

use wyrd_core::snapshot::SnapshotSource;
use wyrd_core::source::{BitSource, SkippingSource, StatefulSource};

const INCREMENT: u64 = 0x6C8E_9CF5_7093_2BD5;

/// Counter-based generator: the state advances by a fixed odd increment, so
/// any position in the stream is reachable in constant time via
/// [`SkippingSource::skip`].
///
/// Not equidistributed: some `u64` outputs occur more than once per period
/// and others never. Fine for games, unsuitable where every value must be
/// reachable.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ThrustAltSource {
    state: u64,
}

impl ThrustAltSource {
    /// Creates a generator positioned at `state`.
    #[must_use]
    pub const fn new(state: u64) -> Self {
        Self { state }
    }

    fn mix(s: u64) -> u64 {
        let z = (s ^ (s >> 25)).wrapping_mul(s | 0xA529);
        z ^ (z >> 23)
    }
}

impl BitSource for ThrustAltSource {
    fn next_u32(&mut self) -> u32 {
        #[allow(clippy::cast_possible_truncation)]
        let word = self.next_u64() as u32;
        word
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(INCREMENT);
        Self::mix(self.state)
    }
}

impl SkippingSource for ThrustAltSource {
    fn skip(&mut self, advance: i64) -> u64 {
        // Two's complement turns a negative advance into the matching backwards step.
        #[allow(clippy::cast_sign_loss)]
        let steps = advance as u64;
        self.state = self.state.wrapping_add(INCREMENT.wrapping_mul(steps));
        Self::mix(self.state)
    }
}

impl StatefulSource for ThrustAltSource {
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

impl SnapshotSource for ThrustAltSource {
    const KIND: &'static str = "thrust-alt";

    fn from_state(state: u64) -> Self {
        Self::new(state)
    }
}
