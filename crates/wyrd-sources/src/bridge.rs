//! Adapters between Wyrd sources and the `rand` ecosystem.
//!
//! In production, a non-reproducible stream can come straight from `rand`.
//! In the other direction, any Wyrd source can feed `rand`'s own samplers.

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use wyrd_core::source::BitSource;

/// Any `rand` generator viewed as a [`BitSource`].
///
/// This is not a `StatefulSource`: `rand` generators do not expose a single
/// 64-bit state, and `StdRng`'s algorithm may change between `rand` releases,
/// so nothing drawn through it should be relied on for replay.
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: RngCore> RandSource<R> {
    /// Wraps an existing `rand` generator.
    #[must_use]
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Returns the wrapped generator.
    #[must_use]
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl RandSource<StdRng> {
    /// A stream seeded from the operating system. Never reproducible.
    #[must_use]
    pub fn from_entropy() -> Self {
        tracing::debug!("seeding rand source from operating system entropy");
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: RngCore> BitSource for RandSource<R> {
    fn next_u32(&mut self) -> u32 {
        self.inner.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.inner.next_u64()
    }
}

/// Any [`BitSource`] viewed as a `rand::RngCore`, so `rand`'s distributions
/// and `Rng` helpers can draw from a reproducible Wyrd stream.
#[derive(Debug, Clone)]
pub struct RngCoreBridge<S> {
    source: S,
}

impl<S: BitSource> RngCoreBridge<S> {
    /// Wraps `source`.
    #[must_use]
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Borrows the wrapped source.
    #[must_use]
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the wrapped source.
    #[must_use]
    pub fn into_inner(self) -> S {
        self.source
    }
}

impl<S: BitSource> RngCore for RngCoreBridge<S> {
    fn next_u32(&mut self) -> u32 {
        self.source.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.source.next_u64()
    }

    /// Little-endian bytes of successive `next_u64` draws; a partial final
    /// chunk still consumes a whole draw.
    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(8) {
            let bytes = self.source.next_u64().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}
