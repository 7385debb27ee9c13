//! Test sources: scripted `BitSource` implementations for tests.

use wyrd_core::flaw::Flawed;
use wyrd_core::source::BitSource;

/// A source that returns the same 32-bit word forever. Suitable for tests
/// that pin a sampler to one point of its input range.
///
/// Marked [`Flawed`]: it is about as non-uniform as a source can be.
#[derive(Debug, Clone, Copy)]
pub struct ConstantSource(pub u32);

impl BitSource for ConstantSource {
    fn next_u32(&mut self) -> u32 {
        self.0
    }
}

impl Flawed for ConstantSource {}

/// A source that returns words from a predetermined sequence. Panics if the
/// sequence is exhausted. Used in tests that need exact control over the
/// draws a sampler sees (e.g., the extremes of its input range).
#[derive(Debug, Clone)]
pub struct SequenceSource {
    values: Vec<u32>,
    index: usize,
}

impl SequenceSource {
    /// Create a new `SequenceSource` with the given words.
    #[must_use]
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, index: 0 }
    }

    /// Create a source whose `next_u64` draws return `words` in order.
    #[must_use]
    pub fn from_u64s(words: &[u64]) -> Self {
        Self::new(words.iter().copied().flat_map(split_word).collect())
    }

    /// Number of 32-bit words drawn so far.
    #[must_use]
    pub fn consumed(&self) -> usize {
        self.index
    }
}

#[allow(clippy::cast_possible_truncation)]
fn split_word(word: u64) -> [u32; 2] {
    [(word >> 32) as u32, word as u32]
}

impl BitSource for SequenceSource {
    fn next_u32(&mut self) -> u32 {
        let val = self.values[self.index];
        self.index += 1;
        val
    }
}

impl Flawed for SequenceSource {}
