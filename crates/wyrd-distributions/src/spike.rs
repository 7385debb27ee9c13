//! Spike and bathtub: cubed uniforms and their fractional fold.

use wyrd_core::distribution::{Distribution, Support};
use wyrd_core::source::BitSource;

use crate::uniform::unit_f64;

/// Concentrated near zero, thinning out towards -1 and 1.
///
/// Algorithm: one [`unit_f64`] draw `u`, `d = 2u - 1`, returns `d³`.
///
/// Support: `[-1, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Spike;

impl Distribution for Spike {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        let d = unit_f64(source) * 2.0 - 1.0;
        d * d * d
    }

    fn support(&self) -> Support {
        Support::half_open(-1.0, 1.0)
    }
}

/// U-shaped: mass piles up at 0 and 1 with a trough around 0.5.
///
/// Algorithm: one [`Spike`] sample `s`, returns the fractional part of
/// `s + 1`. Non-negative spikes land just above 0, negative ones just below 1.
///
/// Support: `[0, 1)`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bathtub;

impl Distribution for Bathtub {
    fn sample(&self, source: &mut dyn BitSource) -> f64 {
        (Spike.sample(source) + 1.0).fract()
    }

    fn support(&self) -> Support {
        Support::half_open(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use wyrd_core::distribution::Distribution;
    use wyrd_test_support::SequenceSource;

    use super::{Bathtub, Spike};

    #[test]
    fn test_spike_endpoints() {
        let low = Spike.sample(&mut SequenceSource::from_u64s(&[0]));
        assert!((low + 1.0).abs() < f64::EPSILON);

        let high = Spike.sample(&mut SequenceSource::from_u64s(&[u64::MAX]));
        assert!(high < 1.0 && high > 0.999_999);
    }

    #[test]
    fn test_spike_centre_maps_to_zero() {
        let value = Spike.sample(&mut SequenceSource::from_u64s(&[1 << 52]));
        assert!(value.abs() < f64::EPSILON);
    }

    #[test]
    fn test_spike_cubes_the_offset() {
        // u = 0.75 gives d = 0.5 and d³ = 0.125.
        let value = Spike.sample(&mut SequenceSource::from_u64s(&[3 << 51]));
        assert!((value - 0.125).abs() < 1e-15);
    }

    #[test]
    fn test_bathtub_folds_negative_spikes_towards_one() {
        // u = 0.25 gives a spike of -0.125, folded to 0.875.
        let value = Bathtub.sample(&mut SequenceSource::from_u64s(&[1 << 51]));
        assert!((value - 0.875).abs() < 1e-15);
    }

    #[test]
    fn test_bathtub_keeps_positive_spikes_near_zero() {
        let value = Bathtub.sample(&mut SequenceSource::from_u64s(&[3 << 51]));
        assert!((value - 0.125).abs() < 1e-15);
    }

    #[test]
    fn test_bathtub_minimum_draw_stays_in_support() {
        // A spike of exactly -1 folds to 0, not 1.
        let value = Bathtub.sample(&mut SequenceSource::from_u64s(&[0]));
        assert!(value.abs() < f64::EPSILON);
        assert!(Bathtub.support().contains(value));
    }
}
