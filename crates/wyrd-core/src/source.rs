//! Bit-source abstractions for determinism.
//!
//! Every generator in the workspace implements [`BitSource`]. Generators whose
//! whole future is determined by a single 64-bit value also implement
//! [`StatefulSource`], which is what save/restore, replay and speculative
//! world generation are built on.

use crate::error::RngError;

/// Largest bit count accepted by [`BitSource::next_bits`].
pub const MAX_BITS: u32 = 32;

/// Abstraction over a stream of uniformly distributed bits.
///
/// Every call advances the stream by at least one step; no call may return a
/// cached value. Implementations perform no I/O and finish in constant time.
pub trait BitSource {
    /// Returns 32 uniformly distributed bits and advances the stream one step.
    fn next_u32(&mut self) -> u32;

    /// Returns 64 uniformly distributed bits.
    ///
    /// The default draws twice, high word first. Generators that produce 64
    /// bits natively override this and advance one step.
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }

    /// Returns a value whose low `bits` bits are uniform and whose higher bits
    /// are zero. With `bits == 32` the full `u32` range is reachable.
    ///
    /// The value is the top `bits` bits of one [`next_u32`](Self::next_u32)
    /// draw.
    ///
    /// # Errors
    ///
    /// Returns [`RngError::InvalidBitCount`] if `bits` is outside `1..=32`.
    /// A rejected call does not advance the stream.
    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
        if !(1..=MAX_BITS).contains(&bits) {
            return Err(RngError::InvalidBitCount(bits));
        }
        Ok(self.next_u32() >> (MAX_BITS - bits))
    }

    /// Permissive form of [`next_bits`](Self::next_bits): `bits` is clamped
    /// into `1..=32` instead of rejected, so `0` behaves like `1` and anything
    /// above `32` behaves like `32`. Always advances the stream.
    fn next_bits_clamped(&mut self, bits: u32) -> u32 {
        self.next_u32() >> (MAX_BITS - bits.clamp(1, MAX_BITS))
    }
}

impl<S: BitSource + ?Sized> BitSource for &mut S {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
        (**self).next_bits(bits)
    }

    fn next_bits_clamped(&mut self, bits: u32) -> u32 {
        (**self).next_bits_clamped(bits)
    }
}

impl<S: BitSource + ?Sized> BitSource for Box<S> {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn next_bits(&mut self, bits: u32) -> Result<u32, RngError> {
        (**self).next_bits(bits)
    }

    fn next_bits_clamped(&mut self, bits: u32) -> u32 {
        (**self).next_bits_clamped(bits)
    }
}

/// A bit source whose entire future is determined by one 64-bit state.
///
/// Two sources of the same concrete type given the same state produce the
/// same output, bit for bit, forever. Zero is a legal state, though some
/// algorithms produce a weak first few outputs from it.
///
/// Generators with more than 64 bits of internal state must document how they
/// fold it into the scalar; the contract caps distinguishable state at 64 bits.
pub trait StatefulSource: BitSource {
    /// Returns the current state. Does not advance the stream.
    fn state(&self) -> u64;

    /// Replaces the state so the next draw behaves as if the source had always
    /// held `state`. Total over every `u64`, consumes no randomness.
    fn set_state(&mut self, state: u64);

    /// Returns an independent deep copy whose future output matches what this
    /// source would produce from here on. The two share nothing afterwards.
    #[must_use]
    fn fork(&self) -> Self
    where
        Self: Sized;
}

/// A bit source that can jump forwards or backwards through its stream in
/// constant time.
pub trait SkippingSource: BitSource {
    /// Moves the stream by `advance` 64-bit steps (negative moves backwards)
    /// and returns the 64-bit output at the landing step. `skip(0)` repeats
    /// the most recent 64-bit output.
    fn skip(&mut self, advance: i64) -> u64;
}

#[cfg(test)]
mod tests {
    use super::{BitSource, MAX_BITS, StatefulSource};
    use crate::error::RngError;

    /// Weyl counter: trivially predictable, enough to pin down default methods.
    #[derive(Debug, Clone)]
    struct Counter {
        state: u64,
    }

    impl BitSource for Counter {
        fn next_u32(&mut self) -> u32 {
            self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
            #[allow(clippy::cast_possible_truncation)]
            let word = (self.state >> 32) as u32;
            word
        }
    }

    impl StatefulSource for Counter {
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

    #[test]
    fn test_next_bits_stays_below_power_of_two() {
        let mut source = Counter { state: 42 };
        for bits in 1..=MAX_BITS {
            for _ in 0..64 {
                let value = u64::from(source.next_bits(bits).unwrap());
                assert!(value < 1_u64 << bits, "bits={bits} value={value}");
            }
        }
    }

    #[test]
    fn test_next_bits_32_returns_full_word() {
        let mut a = Counter { state: 7 };
        let mut b = a.fork();
        assert_eq!(a.next_bits(32).unwrap(), b.next_u32());
    }

    #[test]
    fn test_next_bits_takes_top_bits_of_word() {
        let mut a = Counter { state: 7 };
        let mut b = a.fork();
        assert_eq!(a.next_bits(5).unwrap(), b.next_u32() >> 27);
    }

    #[test]
    fn test_next_bits_rejects_zero_without_advancing() {
        let mut source = Counter { state: 3 };
        let before = source.state();
        assert_eq!(source.next_bits(0), Err(RngError::InvalidBitCount(0)));
        assert_eq!(source.state(), before);
    }

    #[test]
    fn test_next_bits_rejects_33() {
        let mut source = Counter { state: 3 };
        assert_eq!(source.next_bits(33), Err(RngError::InvalidBitCount(33)));
    }

    #[test]
    fn test_next_bits_clamped_clamps_out_of_range() {
        let mut low = Counter { state: 11 };
        let mut one = low.fork();
        assert_eq!(low.next_bits_clamped(0), one.next_bits(1).unwrap());

        let mut high = Counter { state: 11 };
        let mut full = high.fork();
        assert_eq!(high.next_bits_clamped(99), full.next_u32());
    }

    #[test]
    fn test_default_next_u64_is_high_word_first() {
        let mut a = Counter { state: 5 };
        let mut b = a.fork();
        let high = u64::from(b.next_u32());
        let low = u64::from(b.next_u32());
        assert_eq!(a.next_u64(), (high << 32) | low);
    }

    #[test]
    fn test_mut_ref_and_box_forward_to_inner_source() {
        let mut direct = Counter { state: 99 };
        let mut boxed: Box<dyn BitSource> = Box::new(direct.fork());
        let mut inner = direct.fork();
        let by_ref: &mut dyn BitSource = &mut inner;

        let expected = direct.next_u64();
        assert_eq!(boxed.next_u64(), expected);
        assert_eq!(by_ref.next_u64(), expected);
    }

    #[test]
    fn test_fork_shares_no_state() {
        let mut original = Counter { state: 1 };
        let mut copy = original.fork();
        original.next_u32();
        original.next_u32();
        assert_eq!(copy.state(), 1);
        copy.next_u32();
        assert_ne!(copy.state(), original.state());
    }
}
